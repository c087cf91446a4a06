use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::modal::Draft;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, pad_to_width, spans_width};

const INPUT_PLACEHOLDER: &str = "Input your note...";
const POPUP_W: u16 = 52;
const POPUP_H: u16 = 9;

/// Render the add/edit popup centered over `area`
pub fn render_modal_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(draft) = app.modal.draft() else {
        return;
    };
    let popup = centered_rect_fixed(POPUP_W, POPUP_H, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let inner_w = popup.width.saturating_sub(2) as usize;

    let title = Line::from(Span::styled(
        app.modal.title(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    let lines = vec![
        title,
        Line::from(""),
        input_line(app, draft, inner_w),
        input_rule(app, inner_w),
        Line::from(""),
        buttons_line(app, inner_w),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}

/// The draft with a block cursor, scrolled so the cursor stays visible
fn input_line<'a>(app: &App, draft: &Draft, inner_w: usize) -> Line<'a> {
    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let cursor_style = Style::default().fg(bg).bg(app.theme.highlight);
    // Two cells of margin each side
    let budget = inner_w.saturating_sub(4);

    let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];

    if draft.text().is_empty() {
        spans.push(Span::styled(" ", cursor_style));
        spans.push(Span::styled(
            unicode::truncate_to_width(INPUT_PLACEHOLDER, budget.saturating_sub(1)),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        return Line::from(spans);
    }

    let text = draft.text();
    let cursor = draft.cursor();
    let under_end = unicode::next_grapheme_boundary(text, cursor).unwrap_or(cursor);
    let under = if under_end > cursor {
        &text[cursor..under_end]
    } else {
        " "
    };
    let under_w = unicode::display_width(under);

    let before = unicode::tail_to_width(&text[..cursor], budget.saturating_sub(under_w));
    let room_after = budget.saturating_sub(unicode::display_width(&before) + under_w);
    let after = unicode::truncate_to_width(&text[under_end..], room_after);

    spans.push(Span::styled(before, text_style));
    spans.push(Span::styled(under.to_string(), cursor_style));
    spans.push(Span::styled(after, text_style));
    Line::from(spans)
}

fn input_rule<'a>(app: &App, inner_w: usize) -> Line<'a> {
    let bg = app.theme.background;
    let rule_w = inner_w.saturating_sub(4);
    Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            "\u{2500}".repeat(rule_w),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
    ])
}

/// CANCEL / APPLY, right-aligned. APPLY is dimmed while saving is blocked.
fn buttons_line<'a>(app: &App, inner_w: usize) -> Line<'a> {
    let bg = app.theme.background;
    let cancel_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let apply_style = if app.modal.can_save() {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let buttons = vec![
        Span::styled(" CANCEL ", cancel_style),
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(" APPLY ", apply_style),
        Span::styled("  ", Style::default().bg(bg)),
    ];
    let mut spans = Vec::new();
    pad_to_width(
        &mut spans,
        inner_w.saturating_sub(spans_width(&buttons)),
        Style::default().bg(bg),
    );
    spans.extend(buttons);
    Line::from(spans)
}
