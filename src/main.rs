//! english-hub - a terminal client for workplace English study material
//!
//! Words, sentences and scene dialogues are kept by an HTTP backend; this
//! binary lists them and creates, edits and deletes entries.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::ApiClient;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let config = Config::load_or_init();
    let _log_guard = logging::init_tracing(&config);
    tracing::info!(api_base = %config.api_base, "starting english-hub");

    let api = ApiClient::new(&config).context("failed to build HTTP client")?;
    let api_base = api.base().to_string();

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(Arc::new(api), api_base);
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!(error = ?err, "exiting on error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    tracing::info!("bye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                tracing::trace!(action = %a, "dispatch");
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick to apply finished requests
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
