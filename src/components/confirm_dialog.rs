//! Yes/no confirmation popup
//!
//! Built on demand from the modal being shown, so the entry label comes
//! straight from `Modal::ConfirmDelete`.

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, layout::truncate_to_width};
use crate::model::modal::Modal;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const WIDTH: u16 = 50;

/// A question answered with `y` (confirm) or `n`/`Esc` (dismiss)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    title: &'static str,
    prompt: &'static str,
    /// First line of the entry the question is about
    subject: Option<String>,
    confirm_label: &'static str,
    accent: Color,
}

impl ConfirmDialog {
    pub fn quit() -> Self {
        Self {
            title: " 退出 ",
            prompt: "确定退出吗？",
            subject: None,
            confirm_label: "退出",
            accent: Color::Yellow,
        }
    }

    pub fn delete(label: &str) -> Self {
        Self {
            title: " 删除 ",
            prompt: "确定删除这条记录吗？",
            subject: Some(label.lines().next().unwrap_or("").to_string()),
            confirm_label: "删除",
            accent: Color::Red,
        }
    }

    /// Dialog for a confirmation modal; `None` for other overlays
    pub fn for_modal(modal: &Modal) -> Option<Self> {
        match modal {
            Modal::QuitConfirm => Some(Self::quit()),
            Modal::ConfirmDelete { label, .. } => Some(Self::delete(label)),
            Modal::Help => None,
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.prompt,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(subject) = &self.subject {
            lines.push(Line::from(Span::styled(
                truncate_to_width(subject, WIDTH as usize - 4),
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", self.confirm_label)),
            Span::styled(
                " n/Esc ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("取消"),
        ]));
        lines
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let lines = self.build_lines();
        let popup_area = centered_popup(area, WIDTH, lines.len() as u16 + 3);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.accent))
                    .title(self.title)
                    .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn text(dialog: &ConfirmDialog) -> Vec<String> {
        dialog
            .build_lines()
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_delete_dialog_shows_first_line_of_label() {
        let modal = Modal::ConfirmDelete {
            id: 4,
            label: "A: Any blockers?\nB: None.".to_string(),
        };
        let dialog = ConfirmDialog::for_modal(&modal).unwrap();
        let lines = text(&dialog);
        assert_eq!(lines[1], "确定删除这条记录吗？");
        assert_eq!(lines[2], "A: Any blockers?");
    }

    #[test]
    fn test_quit_dialog_has_no_subject() {
        let dialog = ConfirmDialog::for_modal(&Modal::QuitConfirm).unwrap();
        assert_eq!(dialog, ConfirmDialog::quit());
        assert_eq!(text(&dialog).len(), 4);
        assert!(ConfirmDialog::for_modal(&Modal::Help).is_none());
    }

    #[test]
    fn test_confirm_keys() {
        let mut dialog = ConfirmDialog::delete("mitigate");
        let yes = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(yes).unwrap(), Some(Action::ConfirmModal));
        assert_eq!(dialog.handle_key_event(esc).unwrap(), Some(Action::CloseModal));
        assert_eq!(dialog.handle_key_event(other).unwrap(), None);
    }
}
