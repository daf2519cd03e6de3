//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Areas inside one resource panel
pub struct PanelLayout {
    pub list: Rect,
    pub detail: Rect,
    pub form: Rect,
    pub message: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        area.x + popup_x,
        area.y + popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Active panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Split a panel: list on the left, detail above the form on the right,
/// message and key help along the bottom.
pub fn calculate_panel_layout(area: Rect, form_height: u16, message_height: u16) -> PanelLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(message_height),
            Constraint::Length(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(vertical[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(form_height)])
        .split(horizontal[1]);

    PanelLayout {
        list: horizontal[0],
        detail: right[0],
        form: right[1],
        message: vertical[1],
        help: vertical[2],
    }
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut
/// with `…`. CJK characters count as two columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
