//! Text wrapping utilities for ratatui Lines.
//!
//! Provides functions to wrap styled text to fit within a given width.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use super::width::visual_width;

/// Wrap a vector of Lines to fit within the specified width.
/// Each line that exceeds the width will be split into multiple lines.
/// Styling is preserved across wrapped lines.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }

    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single Line to fit within the specified width.
fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let total_width: usize = line.spans.iter().map(|s| visual_width(&s.content)).sum();
    if total_width <= width {
        return vec![line];
    }

    let mut styled_chars: Vec<(char, Style)> = Vec::new();
    for span in &line.spans {
        for ch in span.content.chars() {
            styled_chars.push((ch, span.style));
        }
    }

    let plain: String = styled_chars.iter().map(|(ch, _)| ch).collect();
    let wrapped: Vec<String> = textwrap::wrap(&plain, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect();

    let mut result = Vec::with_capacity(wrapped.len());
    let mut idx = 0;

    for row in wrapped {
        // textwrap drops the whitespace it breaks on
        while idx < styled_chars.len() {
            let (ch, _) = styled_chars[idx];
            if ch.is_whitespace() && !row.starts_with(ch) {
                idx += 1;
            } else {
                break;
            }
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut current: Option<(Style, String)> = None;

        for expected in row.chars() {
            let (ch, style) = styled_chars.get(idx).copied().unwrap_or((expected, Style::default()));
            idx += 1;

            match current.as_mut() {
                Some((s, text)) if *s == style => text.push(ch),
                _ => {
                    if let Some((s, text)) = current.take() {
                        spans.push(Span::styled(text, s));
                    }
                    current = Some((style, ch.to_string()));
                }
            }
        }

        if let Some((s, text)) = current {
            spans.push(Span::styled(text, s));
        }
        result.push(Line::from(spans));
    }

    if result.is_empty() {
        result.push(Line::from(""));
    }

    result
}
