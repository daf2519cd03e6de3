//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, key handling, and rendering.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - Convert a key press into an Action
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
///
/// The trait is object safe; the App keeps its resource panels as
/// `Box<dyn Component>`.
pub trait Component {
    /// Called once before the first draw
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key event to an Action.
    ///
    /// Pure text editing may be applied here directly and return `None`.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update state for an Action, optionally producing a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
