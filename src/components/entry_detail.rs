//! Detail panel component
//!
//! Shows every non-empty field of the selected entry. Multi-line text keeps
//! its line breaks; tag lists are joined with " / ".

use crate::action::Action;
use crate::component::Component;
use crate::model::form::tags_to_display;
use crate::model::{EntryId, FieldKind, FieldSpec};
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};
use serde_json::{Map, Value};

/// Detail panel for the selected entry
#[derive(Default)]
pub struct EntryDetail {
    /// Current scroll offset
    scroll: usize,
    /// Entry the content was built for
    entry_id: Option<EntryId>,
    content: Vec<Line<'static>>,
}

impl EntryDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the content. The scroll position survives as long as the
    /// same entry stays selected.
    pub fn set_entry(
        &mut self,
        fields: &[FieldSpec],
        entry_id: Option<EntryId>,
        values: Option<&Map<String, Value>>,
    ) {
        if entry_id != self.entry_id {
            self.scroll = 0;
            self.entry_id = entry_id;
        }

        self.content = match (entry_id, values) {
            (Some(id), Some(values)) => build_detail_lines(fields, id, values),
            _ => vec![Line::from(Span::styled(
                "No entry selected",
                Style::default().fg(Color::DarkGray),
            ))],
        };
    }

    #[cfg(test)]
    fn text(&self) -> Vec<String> {
        self.content
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }
}

/// Display text of one field, or `None` when there is nothing to show
fn display_value(kind: FieldKind, value: Option<&Value>) -> Option<String> {
    let text = match (kind, value?) {
        (FieldKind::Tags, Value::Array(items)) => {
            let tags: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            tags_to_display(&tags)
        }
        (_, Value::String(s)) => s.clone(),
        _ => return None,
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn build_detail_lines(
    fields: &[FieldSpec],
    id: EntryId,
    values: &Map<String, Value>,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("#{}", id),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for field in fields {
        let Some(text) = display_value(field.kind, values.get(field.name)) else {
            continue;
        };

        lines.push(Line::from(Span::styled(
            field.label.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        let style = if field.required {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        for text_line in text.lines() {
            lines.push(Line::from(Span::styled(format!("  {}", text_line), style)));
        }
        lines.push(Line::from(""));
    }

    lines
}

impl Component for EntryDetail {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.content.len().saturating_sub(1);

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" 详情 ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        let total = self.content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dialogue, Resource, Sentence};
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_detail_skips_empty_optional_fields() {
        let values = as_map(json!({
            "id": 1,
            "sentence_en": "Noted.",
            "translation_cn": "收到。",
            "scene": null,
            "notes": "",
            "scene_categories": ["会议", "邮件沟通"],
            "topic_categories": []
        }));

        let mut detail = EntryDetail::new();
        detail.set_entry(Sentence::FIELDS, Some(1), Some(&values));
        let text = detail.text();

        assert_eq!(text[0], "#1");
        assert!(text.contains(&"  Noted.".to_string()));
        assert!(text.contains(&"  会议 / 邮件沟通".to_string()));
        assert!(!text.contains(&"场景".to_string()));
        assert!(!text.contains(&"备注".to_string()));
        assert!(!text.contains(&"主题分类".to_string()));
    }

    #[test]
    fn test_detail_keeps_dialogue_lines() {
        let values = as_map(json!({
            "id": 2,
            "title": "Standup",
            "dialogue_en": "A: Any blockers?\nB: None."
        }));

        let mut detail = EntryDetail::new();
        detail.set_entry(Dialogue::FIELDS, Some(2), Some(&values));
        let text = detail.text();

        assert!(text.contains(&"  A: Any blockers?".to_string()));
        assert!(text.contains(&"  B: None.".to_string()));
    }

    #[test]
    fn test_scroll_resets_on_selection_change() {
        let values = as_map(json!({ "id": 2, "title": "t", "dialogue_en": "a\nb\nc" }));
        let mut detail = EntryDetail::new();
        detail.set_entry(Dialogue::FIELDS, Some(2), Some(&values));
        detail.update(Action::ScrollDown).unwrap();
        detail.update(Action::ScrollDown).unwrap();
        assert_eq!(detail.scroll, 2);

        detail.set_entry(Dialogue::FIELDS, Some(2), Some(&values));
        assert_eq!(detail.scroll, 2);

        detail.set_entry(Dialogue::FIELDS, None, None);
        assert_eq!(detail.scroll, 0);
        assert_eq!(detail.text(), vec!["No entry selected".to_string()]);
    }
}
