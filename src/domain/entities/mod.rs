mod tab_list_entry;

pub use tab_list_entry::*;
