mod tab_list;

pub use tab_list::*;
