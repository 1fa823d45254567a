use super::app::App;
use super::components::{draw_header, draw_item_list, draw_query_bar, draw_status_bar};
use ratatui::prelude::*;

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.size();

    if size.height < 5 {
        let paragraph = ratatui::widgets::Paragraph::new("Terminal too small");
        f.render_widget(paragraph, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, chunks[0], &app.editor_name, &app.get_count_info());
    draw_item_list(
        f,
        chunks[1],
        app.get_visible_items(),
        app.selected_index,
        app.scroll_offset,
    );
    draw_query_bar(f, chunks[2], app.keyword(), &app.query);
    draw_status_bar(f, chunks[3], app.message.as_deref());
}
