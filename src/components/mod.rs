//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod confirm_dialog;
pub mod entry_detail;
pub mod entry_form;
pub mod entry_list;
pub mod header;
pub mod help_dialog;
pub mod layout;
pub mod resource_panel;

pub use confirm_dialog::ConfirmDialog;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use resource_panel::ResourcePanel;
