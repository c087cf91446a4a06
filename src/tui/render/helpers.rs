use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use regex::Regex;

use crate::util::unicode;

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() || last_end == 0 {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad `spans` with `style` out to `width` cells
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn contents(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn highlight_splits_on_matches() {
        let re = Regex::new("(?i)buy").unwrap();
        let base = Style::default();
        let hl = Style::default().bg(Color::Yellow);
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "Buy milk, buy eggs", base, hl, Some(&re));
        assert_eq!(contents(&spans), vec!["Buy", " milk, ", "buy", " eggs"]);
        assert_eq!(spans[0].style, hl);
        assert_eq!(spans[1].style, base);
    }

    #[test]
    fn highlight_without_match_is_one_span() {
        let re = Regex::new("zzz").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Walk dog",
            Style::default(),
            Style::default(),
            Some(&re),
        );
        assert_eq!(contents(&spans), vec!["Walk dog"]);

        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "Walk dog", Style::default(), Style::default(), None);
        assert_eq!(contents(&spans), vec!["Walk dog"]);
    }

    #[test]
    fn pad_fills_to_width() {
        let mut spans = vec![Span::raw("abc")];
        pad_to_width(&mut spans, 6, Style::default());
        assert_eq!(spans_width(&spans), 6);
        pad_to_width(&mut spans, 2, Style::default());
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), area);
    }
}
