use crate::text::font::TextMeasure;

/// Greedily pack whitespace-separated tokens into lines no wider than `max_width`.
///
/// Tokens are never split: a token wider than `max_width` gets a line of its own and
/// overflows. Whitespace-only input yields no lines.
pub fn wrap_text<M: TextMeasure + ?Sized>(text: &str, measure: &M, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(token);
            continue;
        }

        let candidate = format!("{current} {token}");
        if measure.measure(&candidate).width <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, token.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
