use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells` terminal cells, ending in `…` when cut.
/// Never splits a grapheme cluster.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Keep the last `max_cells` cells of `s`, starting with `…` when cut.
/// Used for single-line inputs where the cursor sits at the end.
pub fn tail_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut start = s.len();
    for (i, g) in s.grapheme_indices(true).rev() {
        let w = display_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        start = i;
    }
    format!("\u{2026}{}", &s[start..])
}

/// Byte offset of the grapheme after the one at `byte_offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(byte_offset + g.len())
}

/// Byte offset of the grapheme before `byte_offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let head = s.get(..byte_offset)?;
    head.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Start of the word left of `byte_offset`, skipping any whitespace first.
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let Some(head) = s.get(..byte_offset) else {
        return 0;
    };
    let mut boundary = 0;
    let mut seen_word = false;
    for (i, g) in head.grapheme_indices(true).rev() {
        let blank = g.chars().all(char::is_whitespace);
        if blank && seen_word {
            boundary = i + g.len();
            break;
        }
        if !blank {
            seen_word = true;
        }
    }
    boundary
}
