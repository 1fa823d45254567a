use crate::search::ResultItem;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Header component
pub fn draw_header(f: &mut Frame, area: Rect, editor_name: &str, subtitle: &str) {
    let header_text = Line::from(vec![
        Span::styled("recents", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" - "),
        Span::styled(editor_name, Style::default().bold()),
        Span::raw(" ("),
        Span::styled(subtitle, Style::default().fg(Color::Gray)),
        Span::raw(")"),
    ]);

    let divider = "─".repeat(area.width as usize);
    let lines = vec![
        header_text,
        Line::from(Span::styled(divider, Style::default().fg(Color::Gray))),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

/// Item list: selector, name, then the path in gray
pub fn draw_item_list(
    f: &mut Frame,
    area: Rect,
    items: &[ResultItem],
    selected_index: usize,
    scroll_offset: usize,
) {
    if items.is_empty() {
        let paragraph = Paragraph::new("No matching recents.").style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let width = area.width as usize;
    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = scroll_offset + idx == selected_index;
            let selector = if is_selected { "> " } else { "  " };
            let marker = icon_marker(item.icon);

            let name_budget = width.saturating_sub(selector.width() + marker.width() + 1);
            let name = truncate_to_width(&item.name, name_budget.min(40));
            let used = selector.width() + marker.width() + 1 + name.width() + 2;
            let description = truncate_to_width(&item.description, width.saturating_sub(used));

            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(selector, Style::default().fg(Color::Cyan)),
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::raw(" "),
                Span::styled(name, name_style),
                Span::raw("  "),
                Span::styled(description, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

/// Query line with the keyword as prompt
pub fn draw_query_bar(f: &mut Frame, area: Rect, keyword: &str, query: &str) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", keyword), Style::default().fg(Color::Yellow).bold()),
        Span::raw("› "),
        Span::raw(query),
        Span::styled("_", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Status bar component
pub fn draw_status_bar(f: &mut Frame, area: Rect, message: Option<&str>) {
    let content = match message {
        Some(msg) => Line::from(Span::styled(msg, Style::default().fg(Color::Yellow))),
        None => Line::from(vec![
            Span::styled("[Enter]", Style::default().bold()),
            Span::raw(" open "),
            Span::styled("[↑↓]", Style::default().bold()),
            Span::raw(" select "),
            Span::styled("[Esc]", Style::default().bold()),
            Span::raw(" clear/quit"),
        ]),
    };
    f.render_widget(Paragraph::new(content), area);
}

fn icon_marker(icon: &str) -> &'static str {
    match icon {
        "folder" => "[d]",
        "file" => "[f]",
        "workspace" => "[w]",
        _ => "[+]",
    }
}

/// Cut `text` to at most `max_width` columns, ending in `…` when shortened
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
