//! Integration tests for the tab list roster core
//!
//! Exercises the public API the way an embedding proxy would: building
//! entries through the staged builder, mutating them from connection
//! handlers, and snapshotting the roster for the render path.

use std::thread;

use serde_json::json;
use uuid::Uuid;

use tablist::domain::entities::{EntryBuildError, TabListEntry};
use tablist::domain::services::TabList;
use tablist::domain::value_objects::{
    GameMode, LatencyIndicator, PlayerIdentity, ProfileProperty, Text,
};

/// Helper to create an identity with a deterministic-looking profile
fn identity(username: &str) -> PlayerIdentity {
    PlayerIdentity::random(username.to_string())
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_full_scenario() {
    let tab_list = TabList::new();
    let profile = identity("steve");

    let entry = TabListEntry::builder()
        .tab_list(tab_list.clone())
        .profile(profile.clone())
        .latency(200)
        .game_mode(1)
        .build()
        .expect("entry should build");

    assert_eq!(entry.parent(), &tab_list);
    assert_eq!(entry.profile(), &profile);
    assert_eq!(entry.ping(), 200);
    assert_eq!(entry.latency_indicator(), LatencyIndicator::FourBars);
    assert_eq!(entry.game_mode(), 1);
    assert_eq!(GameMode::from_i32(entry.game_mode()), Some(GameMode::Creative));
    assert_eq!(entry.display_name(), None);
}

#[test]
fn test_builder_defaults() {
    let tab_list = TabList::new();

    let entry = TabListEntry::builder()
        .tab_list(tab_list.clone())
        .profile(identity("steve"))
        .build()
        .expect("entry should build");

    assert_eq!(entry.ping(), 0);
    assert_eq!(entry.game_mode(), GameMode::Survival.as_i32());
    assert_eq!(entry.display_name(), None);
}

#[test]
fn test_builder_missing_fields() {
    let tab_list = TabList::new();

    let missing_list = TabListEntry::builder().profile(identity("steve")).build();
    assert!(matches!(missing_list, Err(EntryBuildError::MissingTabList)));

    let missing_profile = TabListEntry::builder().tab_list(tab_list.clone()).build();
    assert!(matches!(missing_profile, Err(EntryBuildError::MissingProfile)));

    // Failed builds never touch the would-be container
    assert!(tab_list.is_empty());
}

#[test]
fn test_builder_accepts_unvalidated_integers() {
    let tab_list = TabList::new();

    let entry = TabListEntry::builder()
        .tab_list(tab_list.clone())
        .profile(identity("steve"))
        .latency(i32::MIN)
        .game_mode(42)
        .build()
        .expect("entry should build");

    assert_eq!(entry.ping(), i32::MIN);
    assert_eq!(entry.latency_indicator(), LatencyIndicator::NoConnection);
    assert_eq!(entry.game_mode(), 42);
    assert_eq!(GameMode::from_i32(entry.game_mode()), None);
}

// ============================================================================
// Entry Mutation Tests
// ============================================================================

#[test]
fn test_setter_chaining_mutates_one_entry() {
    let tab_list = TabList::new();
    let entry = tab_list.build_entry(identity("steve"), None, 0, 0);

    entry
        .set_display_name(Some(Text::from("Steve")))
        .set_ping(320)
        .set_game_mode(GameMode::Spectator.as_i32());

    assert_eq!(entry.display_name(), Some(Text::from("Steve")));
    assert_eq!(entry.ping(), 320);
    assert_eq!(entry.latency_indicator(), LatencyIndicator::ThreeBars);
    assert_eq!(entry.game_mode(), 3);
    assert_eq!(tab_list.len(), 1);
}

#[test]
fn test_roster_observes_entry_mutation() {
    let tab_list = TabList::new();
    let profile = identity("steve");
    let entry = tab_list.build_entry(profile.clone(), None, 40, 0);

    entry.set_ping(1500);

    let seen = tab_list.entry(&profile.id).expect("entry is registered");
    assert_eq!(seen.ping(), 1500);
    assert_eq!(seen.latency_indicator(), LatencyIndicator::OneBar);
}

#[test]
fn test_mutation_from_another_thread() {
    let tab_list = TabList::new();
    let entry = tab_list.build_entry(identity("steve"), None, 40, 0);

    let handle = entry.clone();
    thread::spawn(move || {
        handle.set_ping(800).set_display_name(Some(Text::from("AFK")));
    })
    .join()
    .expect("writer thread should finish");

    assert_eq!(entry.ping(), 800);
    assert_eq!(entry.display_name(), Some(Text::from("AFK")));
}

// ============================================================================
// Roster Snapshot Tests
// ============================================================================

#[test]
fn test_views_resolve_shown_names() {
    let tab_list = TabList::new();
    tab_list.build_entry(identity("alex"), Some(Text::new("[Admin] alex".to_string())), 90, 1);
    tab_list.build_entry(identity("steve"), None, 610, 0);

    let views = tab_list.views();

    assert_eq!(views.len(), 2);
    assert_eq!(views[0].shown_name(), "[Admin] alex");
    assert_eq!(views[0].latency_indicator, LatencyIndicator::FiveBars);
    assert_eq!(views[1].shown_name(), "steve");
    assert_eq!(views[1].latency_indicator, LatencyIndicator::TwoBars);
}

#[test]
fn test_view_serializes_with_camel_case_fields() {
    let tab_list = TabList::new();
    let profile = PlayerIdentity::new(
        Uuid::nil(),
        "steve".to_string(),
    )
    .with_property(ProfileProperty::new(
        "textures".to_string(),
        "e3RleHR1cmVzOnt9fQ==".to_string(),
    ));

    let entry = tab_list.build_entry(profile, None, 160, 2);
    let body = serde_json::to_value(entry.view()).expect("view should serialize");

    assert_eq!(body["profile"]["id"], "00000000-0000-0000-0000-000000000000");
    assert_eq!(body["profile"]["username"], "steve");
    assert_eq!(body["profile"]["properties"][0]["name"], "textures");
    assert_eq!(body["profile"]["properties"][0]["signature"], json!(null));
    assert_eq!(body["displayName"], json!(null));
    assert_eq!(body["latency"], 160);
    assert_eq!(body["gameMode"], 2);
    assert_eq!(body["latencyIndicator"], "four_bars");
    assert!(body["joinedAt"].is_i64());
}

// ============================================================================
// Roster Membership Tests
// ============================================================================

#[test]
fn test_join_and_leave_round_trip() {
    let tab_list = TabList::new();
    let profile = identity("steve");

    let entry = TabListEntry::builder()
        .tab_list(tab_list.clone())
        .profile(profile.clone())
        .build()
        .expect("entry should build");

    assert!(tab_list.contains(&profile.id));

    let removed = tab_list.remove_entry(&profile.id).expect("entry was registered");
    assert_eq!(removed, entry);
    assert!(!tab_list.contains(&profile.id));
    assert!(tab_list.is_empty());
}

#[test]
fn test_independent_rosters_do_not_share_entries() {
    let lobby = TabList::new();
    let game = TabList::new();
    let profile = identity("steve");

    lobby.build_entry(profile.clone(), None, 0, 0);

    assert!(lobby.contains(&profile.id));
    assert!(!game.contains(&profile.id));
    assert_ne!(lobby, game);
}
