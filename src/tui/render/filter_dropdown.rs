use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::model::todo::StatusFilter;
use crate::tui::app::App;

use super::helpers::pad_to_width;

/// Render the status filter menu just below the filter button
pub fn render_filter_dropdown(frame: &mut Frame, app: &App, button: Rect, screen: Rect) {
    let Some(highlighted) = app.filter_menu.highlighted() else {
        return;
    };
    let bg = app.theme.background;
    let active = app.store.query().status_filter;

    let y = button.y + button.height;
    let height = (StatusFilter::ALL.len() as u16 + 2).min(screen.bottom().saturating_sub(y));
    if height < 3 {
        return;
    }
    let area = Rect::new(button.x, y, button.width, height);
    frame.render_widget(Clear, area);

    let inner_w = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = StatusFilter::ALL
        .iter()
        .map(|&filter| {
            let row_style = if filter == highlighted {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            let marker = if filter == active { "\u{2022}" } else { " " };
            let mut spans = vec![
                Span::styled(" ", row_style),
                Span::styled(marker, row_style.fg(app.theme.highlight)),
                Span::styled(format!(" {}", filter.label()), row_style),
            ];
            pad_to_width(&mut spans, inner_w, row_style);
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
