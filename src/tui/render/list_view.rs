use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers::{pad_to_width, push_highlighted_spans};

/// Render the visible todos, or the empty state
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    let count = app.store.visible_todos().len();
    if count == 0 {
        render_empty(frame, app, area);
        return;
    }

    // Keep the cursor on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(count.saturating_sub(visible_height));

    let width = area.width as usize;
    let search_re = app.search_re();
    let show_cursor = app.mode == Mode::Navigate;
    let match_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let todos = app.store.visible_todos();
    let lines: Vec<Line> = todos
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, todo)| {
            let row_bg = if show_cursor && i == app.cursor {
                app.theme.selection_bg
            } else {
                bg
            };
            let (checkbox, checkbox_fg) = if todo.completed {
                ("[x]", app.theme.green)
            } else {
                ("[ ]", app.theme.text)
            };
            let text_style = if todo.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text).bg(row_bg)
            };

            let mut spans = vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(checkbox, Style::default().fg(checkbox_fg).bg(row_bg)),
                Span::styled(" ", Style::default().bg(row_bg)),
            ];
            let text = unicode::truncate_to_width(&todo.text, width.saturating_sub(6));
            push_highlighted_spans(
                &mut spans,
                &text,
                text_style,
                match_style,
                search_re.as_ref(),
            );
            pad_to_width(&mut spans, width, Style::default().bg(row_bg));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_empty(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let mut lines = Vec::new();
    let top_pad = area.height.saturating_sub(2) / 2;
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("Empty...", dim)));
    if app.store.is_empty() {
        lines.push(Line::from(Span::styled("press a to add a note", dim)));
    }
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::StatusFilter;
    use crate::tui::render::test_helpers::*;

    fn render_list(app: &mut App, h: u16) -> String {
        render_to_string(TERM_W, h, |frame, area| {
            render_list_view(frame, app, area);
        })
    }

    #[test]
    fn rows_show_checkbox_and_text() {
        let mut app = app_with_todos(&[("Buy milk", false), ("Buy eggs", true)]);
        let output = render_list(&mut app, 5);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " [ ] Buy milk");
        assert_eq!(lines[1], " [x] Buy eggs");
    }

    #[test]
    fn empty_store_hints_at_add() {
        let mut app = app_with_todos(&[]);
        let output = render_list(&mut app, 6);
        assert!(output.contains("Empty..."));
        assert!(output.contains("press a to add a note"));
    }

    #[test]
    fn filtered_to_nothing_shows_empty_without_hint() {
        let mut app = app_with_todos(&[("Buy milk", false)]);
        app.store.set_status_filter(StatusFilter::Complete);
        let output = render_list(&mut app, 6);
        assert!(output.contains("Empty..."));
        assert!(!output.contains("press a"));
        assert!(!output.contains("Buy milk"));
    }

    #[test]
    fn only_matching_rows_are_drawn() {
        let mut app = app_with_todos(&[
            ("Buy milk", false),
            ("Buy eggs", true),
            ("Walk dog", false),
        ]);
        app.store.set_search_query("buy");
        let output = render_list(&mut app, 5);
        assert!(output.contains("Buy milk"));
        assert!(output.contains("Buy eggs"));
        assert!(!output.contains("Walk dog"));
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let items: Vec<(String, bool)> = (1..=10).map(|i| (format!("note {}", i), false)).collect();
        let refs: Vec<(&str, bool)> = items.iter().map(|(s, c)| (s.as_str(), *c)).collect();
        let mut app = app_with_todos(&refs);
        app.cursor = 9;
        let output = render_list(&mut app, 3);
        assert_eq!(app.scroll_offset, 7);
        assert!(output.contains("note 10"));
        assert!(!output.contains("note 7\n"));

        app.cursor = 0;
        render_list(&mut app, 3);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(200);
        let mut app = app_with_todos(&[(long.as_str(), false)]);
        let output = render_list(&mut app, 2);
        assert!(output.contains('\u{2026}'));
        assert!(output.lines().all(|l| unicode::display_width(l) <= TERM_W as usize));
    }
}
