//! Help dialog component
//!
//! Lists the keyboard shortcuts of the list and form modes.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin / 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin),
        );
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" 快捷键 ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.width() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "列表");
    add_shortcut(&mut lines, "j / ↓", "下一条");
    add_shortcut(&mut lines, "k / ↑", "上一条");
    add_shortcut(&mut lines, "g / G", "第一条 / 最后一条");
    add_shortcut(&mut lines, "Tab", "下一个标签页");
    add_shortcut(&mut lines, "Shift+Tab", "上一个标签页");
    add_shortcut(&mut lines, "1 / 2 / 3", "单词 / 句子 / 场景对话");
    add_shortcut(&mut lines, "Ctrl+e / Ctrl+y", "滚动详情");

    add_section(&mut lines, "增删改查");
    add_shortcut(&mut lines, "n / i", "在表单中新增");
    add_shortcut(&mut lines, "e / Enter", "编辑选中条目");
    add_shortcut(&mut lines, "c", "取消编辑");
    add_shortcut(&mut lines, "d", "删除选中条目（需确认）");
    add_shortcut(&mut lines, "r", "刷新");

    add_section(&mut lines, "表单");
    add_shortcut(&mut lines, "Tab / ↓", "下一个字段");
    add_shortcut(&mut lines, "Shift+Tab / ↑", "上一个字段");
    add_shortcut(&mut lines, "Enter", "多行字段换行，否则下一个字段");
    add_shortcut(&mut lines, "Ctrl+s", "保存");
    add_shortcut(&mut lines, "Esc", "返回列表（编辑时取消编辑）");
    add_shortcut(&mut lines, "分类字段", "用逗号分隔，例如：会议, 邮件沟通");

    add_section(&mut lines, "其他");
    add_shortcut(&mut lines, "?", "显示帮助");
    add_shortcut(&mut lines, "q", "退出（需确认）");
    add_shortcut(&mut lines, "Ctrl+c", "立即退出");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  按 q、Esc 或 ? 关闭",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_help_closes_and_scrolls() {
        let mut dialog = HelpDialog::default();
        let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(down).unwrap(), None);
        assert_eq!(dialog.scroll_offset, 1);

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(dialog.handle_key_event(esc).unwrap(), Some(Action::CloseModal));
    }
}
