//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the tab set, the modal stack and the start-up health check;
//! everything about entries lives in the resource panels.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, header, ConfirmDialog, HelpDialog, ResourcePanel,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::{BackendStatus, Dialogue, ResourceKind, Sentence, Word};
use crate::services::{RequestRunner, ResourceApi};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

/// Main application state - coordinates between components
pub struct App {
    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Index of the visible tab
    pub active: usize,

    /// One panel per resource, in tab order
    panels: Vec<Box<dyn Component>>,

    /// Modal overlay stack
    pub modals: ModalStack,

    api: Arc<dyn ResourceApi>,
    api_base: String,
    pub backend: BackendStatus,
    health: RequestRunner<()>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(api: Arc<dyn ResourceApi>, api_base: impl Into<String>) -> App {
        let panels: Vec<Box<dyn Component>> = ResourceKind::all()
            .into_iter()
            .map(|kind| -> Box<dyn Component> {
                let api = Arc::clone(&api);
                match kind {
                    ResourceKind::Words => Box::new(ResourcePanel::<Word>::new(api)),
                    ResourceKind::Sentences => Box::new(ResourcePanel::<Sentence>::new(api)),
                    ResourceKind::Dialogues => Box::new(ResourcePanel::<Dialogue>::new(api)),
                }
            })
            .collect();

        App {
            should_quit: false,
            active: 0,
            panels,
            modals: ModalStack::new(),
            api,
            api_base: api_base.into(),
            backend: BackendStatus::default(),
            health: RequestRunner::new(),
            help_dialog: HelpDialog::default(),
        }
    }

    fn check_health(&mut self) {
        let api = Arc::clone(&self.api);
        self.backend = BackendStatus::Checking;
        self.health.spawn("health", move || api.health());
    }

    fn poll_health(&mut self) {
        for completion in self.health.poll() {
            self.backend = match completion.result {
                Ok(()) => {
                    tracing::info!(api_base = %self.api_base, "backend online");
                    BackendStatus::Online
                }
                Err(err) => {
                    tracing::warn!(api_base = %self.api_base, error = %err, "backend unreachable");
                    BackendStatus::Offline(err.to_string())
                }
            };
        }
    }

    fn select_tab(&mut self, index: usize) {
        if index < self.panels.len() && index != self.active {
            self.active = index;
            tracing::debug!(tab = ResourceKind::all()[index].path(), "tab changed");
        }
    }

    /// Forward an action to the visible panel
    fn forward(&mut self, action: Action) -> Result<Option<Action>> {
        match self.panels.get_mut(self.active) {
            Some(panel) => panel.update(action),
            None => Ok(None),
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match ConfirmDialog::for_modal(modal) {
            Some(mut dialog) => dialog.handle_key_event(key),
            None => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match ConfirmDialog::for_modal(modal) {
            Some(mut dialog) => dialog.draw(frame, area),
            None => self.help_dialog.draw(frame, area),
        }
    }
}

impl Component for App {
    fn init(&mut self) -> Result<()> {
        for panel in &mut self.panels {
            panel.init()?;
        }
        self.check_health();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match self.panels.get_mut(self.active) {
            Some(panel) => panel.handle_key_event(key),
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                // Hidden panels keep applying their own completions
                for panel in &mut self.panels {
                    panel.update(Action::Tick)?;
                }
                self.poll_health();
                Ok(None)
            }
            Action::Resize(_, _) => Ok(None),
            Action::ForceQuit => {
                self.should_quit = true;
                Ok(None)
            }

            // ─────────────────────────────────────────────────────────────────
            // Tabs
            // ─────────────────────────────────────────────────────────────────
            Action::NextTab => {
                self.select_tab((self.active + 1) % self.panels.len());
                Ok(None)
            }
            Action::PrevTab => {
                let len = self.panels.len();
                self.select_tab((self.active + len - 1) % len);
                Ok(None)
            }
            Action::SelectTab(index) => {
                self.select_tab(index);
                Ok(None)
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                Ok(None)
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
                Ok(None)
            }
            Action::OpenDeleteConfirm { id, label } => {
                self.modals.push(Modal::ConfirmDelete { id, label });
                Ok(None)
            }
            Action::CloseModal => {
                self.modals.pop();
                Ok(None)
            }
            Action::ConfirmModal => match self.modals.pop() {
                Some(Modal::QuitConfirm) => Ok(Some(Action::ForceQuit)),
                Some(Modal::ConfirmDelete { id, .. }) => Ok(Some(Action::DeleteEntry(id))),
                _ => Ok(None),
            },

            // Everything else belongs to the visible panel
            other => self.forward(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area);

        header::render_header(frame, layout.header);
        header::render_tabs(frame, layout.tabs, self.active);
        if let Some(panel) = self.panels.get_mut(self.active) {
            panel.draw(frame, layout.body)?;
        }
        header::render_status_bar(frame, layout.status, &self.api_base, &self.backend);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
