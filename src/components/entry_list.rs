//! Entry list rendering

use super::layout::truncate_to_width;
use crate::model::EntryId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// One list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: EntryId,
    pub title: String,
    pub subtitle: String,
}

/// Panel state the list block reflects
pub struct ListContext<'a> {
    pub label: &'a str,
    pub editing_id: Option<EntryId>,
    pub loading: bool,
    pub focused: bool,
}

/// First line of `text`, cut to the column budget
fn first_line(text: &str, max_width: usize) -> String {
    truncate_to_width(text.lines().next().unwrap_or(""), max_width)
}

fn build_items(rows: &[ListRow], editing_id: Option<EntryId>, width: usize) -> Vec<ListItem<'static>> {
    rows.iter()
        .map(|row| {
            let editing = editing_id == Some(row.id);
            let marker = if editing { "✎ " } else { "  " };
            let title_style = if editing {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(first_line(&row.title, width), title_style),
            ])];
            if !row.subtitle.trim().is_empty() {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        first_line(&row.subtitle, width),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            ListItem::new(lines)
        })
        .collect()
}

pub fn render_entry_list(
    frame: &mut Frame,
    area: Rect,
    rows: &[ListRow],
    state: &mut ListState,
    ctx: ListContext<'_>,
) {
    // Borders, highlight symbol and marker
    let width = area.width.saturating_sub(6) as usize;
    let items = build_items(rows, ctx.editing_id, width);

    let mut title = format!(" {} ({}) ", ctx.label, rows.len());
    if ctx.loading {
        title = format!("{}⟳ ", title);
    }

    let border_color = if ctx.focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: EntryId, title: &str, subtitle: &str) -> ListRow {
        ListRow {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    #[test]
    fn test_first_line_only() {
        assert_eq!(first_line("A: Hi\nB: Hello", 20), "A: Hi");
        assert_eq!(first_line("", 20), "");
    }

    #[test]
    fn test_subtitle_line_is_optional() {
        let items = build_items(&[row(1, "mitigate", "缓解"), row(2, "Standup", "")], None, 30);
        assert_eq!(items[0].height(), 2);
        assert_eq!(items[1].height(), 1);
    }
}
