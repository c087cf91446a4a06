use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::Regions;

const SEARCH_PLACEHOLDER: &str = "Search note...";

/// Title, search box, filter button and theme button
pub fn render_header(frame: &mut Frame, app: &App, regions: &Regions) {
    let bg = app.theme.background;

    let title = Paragraph::new(Line::from(Span::styled(
        "TODO LIST",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(bg));
    frame.render_widget(title, regions.title);

    render_search_box(frame, app, regions.search);
    render_filter_button(frame, app, regions.filter);
    render_theme_button(frame, app, regions.theme);
}

fn bordered(app: &App, focused: bool) -> Block<'static> {
    let border = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background))
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let typing = app.mode == Mode::Search && !app.modal.is_open() && !app.filter_menu.is_open();
    let query = &app.store.query().search_query;
    let inner_w = area.width.saturating_sub(2) as usize;

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    if query.is_empty() && !typing {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // Leave room for the leading space and the cursor
        let shown = unicode::tail_to_width(query, inner_w.saturating_sub(2));
        spans.push(Span::styled(shown, Style::default().fg(app.theme.text).bg(bg)));
        if typing {
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(bordered(app, typing));
    frame.render_widget(paragraph, area);
}

fn render_filter_button(frame: &mut Frame, app: &App, area: Rect) {
    let open = app.filter_menu.is_open();
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let arrow = if open { "\u{25B4}" } else { "\u{25BE}" };
    let label = format!("{} {}", app.store.query().status_filter, arrow);
    let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(bordered(app, open));
    frame.render_widget(paragraph, area);
}

/// Shows the mode the button switches to: a sun while dark, a moon while light
fn render_theme_button(frame: &mut Frame, app: &App, area: Rect) {
    let glyph = if app.dark { "\u{2600}" } else { "\u{263E}" };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        glyph,
        Style::default().fg(app.theme.highlight).bg(app.theme.background),
    )))
    .alignment(Alignment::Center)
    .block(bordered(app, false));
    frame.render_widget(paragraph, area);
}
