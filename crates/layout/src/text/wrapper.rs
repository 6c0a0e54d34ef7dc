use folio_render_core::Font;
use folio_render_core::metrics::{average_char_width, text_width};

const ELLIPSIS: char = '\u{2026}';

/// Collapses every whitespace run (newlines included) to one space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Greedy word wrap.
///
/// Words are added to the current line while its measured width stays within
/// `max_width - indent`. A word that does not fit starts a new line; a single
/// word wider than the line gets a line of its own. Empty or whitespace-only
/// input yields no lines.
pub fn wrap_text(text: &str, max_width: f32, indent: f32, font: &Font) -> Vec<String> {
    let available = max_width - indent;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_width =
            text_width(&current, font) + text_width(" ", font) + text_width(word, font);
        if candidate_width <= available {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `text` with a trailing ellipsis when it is wider than `max_width`.
///
/// The character budget is estimated from the font's average character width,
/// not measured glyph by glyph.
pub fn truncate_to_width(text: &str, max_width: f32, font: &Font) -> String {
    if text_width(text, font) <= max_width {
        return text.to_string();
    }
    let average = average_char_width(font);
    if average <= 0.0 || max_width <= 0.0 {
        return String::new();
    }
    let budget = (max_width / average + 1e-4).floor() as usize;
    if budget == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(budget.saturating_sub(1)).collect();
    let mut truncated = kept.trim_end().to_string();
    truncated.push(ELLIPSIS);
    truncated
}
