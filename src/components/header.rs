//! Header, tab bar and status bar

use crate::model::{BackendStatus, ResourceKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub const TITLE: &str = "Workplace English Hub";
pub const SUBTITLE: &str = "单词 / 句子 / 场景对话：增删改查";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", SUBTITLE),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

pub fn render_tabs(frame: &mut Frame, area: Rect, active: usize) {
    let titles: Vec<String> = ResourceKind::all()
        .iter()
        .enumerate()
        .map(|(i, kind)| format!(" {} {} ", i + 1, kind.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(active)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn backend_span(status: &BackendStatus) -> Span<'static> {
    match status {
        BackendStatus::Checking => Span::styled(" 连接中 ", Style::default().fg(Color::Yellow)),
        BackendStatus::Online => Span::styled(
            " 在线 ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        BackendStatus::Offline(_) => Span::styled(
            " 离线 ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, api_base: &str, backend: &BackendStatus) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", api_base),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        backend_span(backend),
    ];

    if let BackendStatus::Offline(reason) = backend {
        spans.push(Span::styled(
            format!(" {}", reason),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
