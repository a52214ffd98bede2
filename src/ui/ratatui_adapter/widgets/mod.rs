//! Ratatui widgets for the study TUI

mod card_pane;
mod entry_details;
mod help_bar;
mod help_overlay;
mod selection_list;
mod status_bar;

pub use card_pane::CardPane;
pub use entry_details::EntryDetails;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
