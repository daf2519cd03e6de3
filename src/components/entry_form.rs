//! Create/edit form rendering
//!
//! Single-line fields take one row. Multi-line fields show their label and
//! the last few lines of the text being typed.

use crate::model::{EntryId, FieldKind, FieldSpec, FormState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Lines of a multi-line field shown below its label
const TEXT_ROWS: usize = 3;

/// Rows needed to show every field of a schema, borders included
pub fn form_height(fields: &[FieldSpec]) -> u16 {
    let rows: usize = fields
        .iter()
        .map(|f| match f.kind {
            FieldKind::Line | FieldKind::Tags => 1,
            FieldKind::Text => 1 + TEXT_ROWS,
        })
        .sum();
    rows as u16 + 2
}

fn label_span(field: &FieldSpec, focused: bool) -> Span<'static> {
    let marker = if field.required { "*" } else { " " };
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!("{}{}: ", marker, field.label), style)
}

fn build_form_lines(form: &FormState, show_cursor: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, (field, value)) in form.fields().iter().zip(form.values()).enumerate() {
        let focused = show_cursor && i == form.focus;
        let value_style = if focused {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };

        match field.kind {
            FieldKind::Line | FieldKind::Tags => {
                let mut spans = vec![
                    label_span(field, focused),
                    Span::styled(format!("{}{}", value, cursor), value_style),
                ];
                if field.kind == FieldKind::Tags && value.is_empty() && !focused {
                    spans.push(Span::styled(
                        "逗号分隔",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.push(Line::from(spans));
            }
            FieldKind::Text => {
                lines.push(Line::from(label_span(field, focused)));
                let text_lines: Vec<&str> = value.split('\n').collect();
                let start = text_lines.len().saturating_sub(TEXT_ROWS);
                let shown = &text_lines[start..];
                for (j, text) in shown.iter().enumerate() {
                    let is_last = j + 1 == shown.len();
                    let tail = if is_last { cursor } else { "" };
                    lines.push(Line::from(Span::styled(
                        format!("  {}{}", text, tail),
                        value_style,
                    )));
                }
                for _ in shown.len()..TEXT_ROWS {
                    lines.push(Line::from(""));
                }
            }
        }
    }

    lines
}

pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    editing_id: Option<EntryId>,
    focused: bool,
) {
    let title = match editing_id {
        Some(id) => format!(" 编辑 #{} ", id),
        None => " 新增 ".to_string(),
    };
    let border_color = match (focused, editing_id) {
        (true, Some(_)) => Color::Yellow,
        (true, None) => Color::Cyan,
        _ => Color::DarkGray,
    };

    let paragraph = Paragraph::new(build_form_lines(form, focused)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(paragraph, area);
}
