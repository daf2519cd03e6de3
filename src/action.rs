//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to key events, and the App either
//! handles them or forwards them to the active resource panel.

use crate::model::EntryId;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick; drains finished requests
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    NextTab,
    PrevTab,
    /// Jump to the tab at this index
    SelectTab(usize),
    /// Scroll the detail view up one line
    ScrollUp,
    /// Scroll the detail view down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Ask before deleting an entry of the active panel
    OpenDeleteConfirm { id: EntryId, label: String },
    CloseModal,
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Resource Panel
    // ─────────────────────────────────────────────────────────────────────────
    /// Re-fetch the active collection
    Refresh,
    /// Move key input to the form
    FocusForm,
    /// Move key input back to the list, keeping the form text
    FocusList,
    /// Load the selected entry into the form
    StartEdit,
    CancelEdit,
    SubmitForm,
    DeleteEntry(EntryId),

    // ─────────────────────────────────────────────────────────────────────────
    // Form Input
    // ─────────────────────────────────────────────────────────────────────────
    FormInput(char),
    FormBackspace,
    FormNewline,
    NextField,
    PrevField,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::SelectTab(i) => write!(f, "SelectTab({})", i),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::OpenDeleteConfirm { id, .. } => write!(f, "OpenDeleteConfirm({})", id),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::Refresh => write!(f, "Refresh"),
            Action::FocusForm => write!(f, "FocusForm"),
            Action::FocusList => write!(f, "FocusList"),
            Action::StartEdit => write!(f, "StartEdit"),
            Action::CancelEdit => write!(f, "CancelEdit"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::DeleteEntry(id) => write!(f, "DeleteEntry({})", id),
            // Typed text stays out of the logs
            Action::FormInput(_) => write!(f, "FormInput"),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::FormNewline => write!(f, "FormNewline"),
            Action::NextField => write!(f, "NextField"),
            Action::PrevField => write!(f, "PrevField"),
        }
    }
}
