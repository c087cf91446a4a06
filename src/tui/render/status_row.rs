use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::spans_width;

/// Key hints for whatever currently has focus
fn key_hints(app: &App) -> &'static str {
    if app.modal.is_open() {
        "Enter apply  Esc cancel"
    } else if app.filter_menu.is_open() {
        "j/k move  Enter select  Esc close"
    } else if app.mode == Mode::Search {
        "Enter done  Esc clear"
    } else {
        "a add  e edit  spc toggle  d delete  / search  f filter  t theme  q quit"
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let counts = format!(
        "{}/{} \u{2713}{} ",
        app.store.visible_todos().len(),
        app.store.len(),
        app.store.completed_count()
    );
    let counts_w = unicode::display_width(&counts);
    let left_room = width.saturating_sub(counts_w + 1);

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            unicode::truncate_to_width(msg, left_room),
            Style::default().fg(app.theme.red).bg(bg),
        ));
    } else if app.ui_config.show_key_hints {
        spans.push(Span::styled(
            unicode::truncate_to_width(key_hints(app), left_room),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let used = spans_width(&spans);
    if used + counts_w <= width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counts,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
