use serde::{Deserialize, Serialize};

/// Connection-quality indicator shown next to a roster entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyIndicator {
    NoConnection,
    OneBar,
    TwoBars,
    ThreeBars,
    FourBars,
    FiveBars,
}

impl LatencyIndicator {
    /// Map a latency in milliseconds to the indicator shown to clients.
    ///
    /// Negative latency means no connection. Bucket boundaries belong to
    /// the lower bucket: 150 is four bars, not five.
    pub fn from_ping(ping: i32) -> Self {
        match ping {
            i32::MIN..=-1 => LatencyIndicator::NoConnection,
            0..=149 => LatencyIndicator::FiveBars,
            150..=299 => LatencyIndicator::FourBars,
            300..=599 => LatencyIndicator::ThreeBars,
            600..=999 => LatencyIndicator::TwoBars,
            _ => LatencyIndicator::OneBar,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LatencyIndicator::NoConnection => "no_connection",
            LatencyIndicator::OneBar => "one_bar",
            LatencyIndicator::TwoBars => "two_bars",
            LatencyIndicator::ThreeBars => "three_bars",
            LatencyIndicator::FourBars => "four_bars",
            LatencyIndicator::FiveBars => "five_bars",
        }
    }
}
