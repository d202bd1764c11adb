//! Greedy word wrapping and placement of wrapped text blocks.
//!
//! Wrapping only needs a width measurement, so it works with any
//! [`TextMeasurer`] or with a plain closure in tests.

use crate::measure::TextMeasurer;
use crate::primitives::{Point, Rect};

/// Wrap `text` into lines no wider than `max_width`.
///
/// Explicit line breaks always end a line. Within a paragraph, words are
/// separated by single spaces and added greedily. A word wider than
/// `max_width` is put on a line of its own and never split. Empty and
/// whitespace-only paragraphs produce no lines.
pub fn wrap_text<F>(text: &str, max_width: f32, mut measure_width: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split(' ').filter(|w| !w.trim().is_empty()) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure_width(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Wrap using a measurer's width.
pub fn wrap_text_with<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: f32,
    measurer: &mut M,
) -> Vec<String> {
    wrap_text(text, max_width, |line| measurer.measure_text(line).width)
}

/// A wrapped line with its on-screen rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub rect: Rect,
}

/// Wrap `text` to the window width minus `margin` on both sides and stack the
/// lines at the bottom of the window, each centered horizontally.
///
/// The line height is that of the first line. The block never starts above
/// `margin`, and no line starts left of `margin`.
pub fn layout_bottom_text<M: TextMeasurer + ?Sized>(
    text: &str,
    window_width: f32,
    window_height: f32,
    margin: f32,
    measurer: &mut M,
) -> Vec<PlacedLine> {
    let lines = wrap_text_with(text, window_width - margin * 2.0, measurer);
    let Some(first) = lines.first() else {
        return Vec::new();
    };

    let line_height = measurer.measure_text(first).height;
    let total_height = line_height * lines.len() as f32;
    let start_y = (window_height - total_height - margin).max(margin);

    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let size = measurer.measure_text(&text);
            let x = ((window_width - size.width) / 2.0).max(margin);
            let y = start_y + i as f32 * line_height;
            PlacedLine {
                rect: Rect::from_min_size(Point::new(x, y), [size.width, size.height]),
                text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{width_of, FakeRenderer, LINE_HEIGHT};

    const SAMPLE: &str = "the quick brown fox jumps over the lazy dog";

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(wrap_text("", 100.0, width_of).is_empty());
        assert!(wrap_text("   ", 100.0, width_of).is_empty());
        assert!(wrap_text("\n\n", 100.0, width_of).is_empty());
    }

    #[test]
    fn test_lines_fit_or_are_single_words() {
        for max_width in [0.0, 35.0, 60.0, 95.0, 150.0, 400.0] {
            for line in wrap_text(SAMPLE, max_width, width_of) {
                assert!(
                    width_of(&line) <= max_width || !line.contains(' '),
                    "line {line:?} exceeds {max_width}"
                );
            }
        }
    }

    #[test]
    fn test_rewrapping_is_stable() {
        for max_width in [40.0, 90.0, 130.0] {
            let lines = wrap_text(SAMPLE, max_width, width_of);
            let rewrapped = wrap_text(&lines.join(" "), max_width, width_of);
            assert_eq!(lines, rewrapped);
        }
    }

    #[test]
    fn test_rewrapping_paragraphs_is_stable() {
        let text = crate::app::INSTRUCTIONS;
        for max_width in [0.0, 120.0, 250.0, 1000.0] {
            let lines = wrap_text(text, max_width, width_of);
            let rewrapped = wrap_text(&lines.join("\n"), max_width, width_of);
            assert_eq!(lines, rewrapped, "max width {max_width}");
        }

        // Wide enough keeps each paragraph on its own line
        let lines = wrap_text(text, 1000.0, width_of);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with('•'));
    }

    #[test]
    fn test_wide_enough_gives_one_collapsed_line() {
        let lines = wrap_text("  hello    wide   world ", 1000.0, width_of);
        assert_eq!(lines, vec!["hello wide world".to_string()]);
    }

    #[test]
    fn test_explicit_breaks_split_paragraphs() {
        let lines = wrap_text("one two\nthree\n\n   \nfour", 1000.0, width_of);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_greedy_breaks() {
        // "the quick" is 90 wide, adding "brown" would make 150
        let lines = wrap_text("the quick brown fox", 100.0, width_of);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_oversized_word_is_not_split() {
        let lines = wrap_text("a extraordinarily b", 50.0, width_of);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn test_bottom_text_is_centered_and_bottom_aligned() {
        let mut renderer = FakeRenderer::new();
        let placed = layout_bottom_text("ab cd\nefgh", 200.0, 100.0, 10.0, &mut renderer);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].text, "ab cd");
        // Two lines of 20px end 10px above the bottom
        assert_eq!(placed[0].rect.y, 100.0 - 2.0 * LINE_HEIGHT - 10.0);
        assert_eq!(placed[1].rect.y, placed[0].rect.y + LINE_HEIGHT);
        assert_eq!(placed[0].rect.x, (200.0 - 50.0) / 2.0);
        assert_eq!(placed[1].rect.x, (200.0 - 40.0) / 2.0);
    }

    #[test]
    fn test_bottom_text_stays_inside_margins() {
        let mut renderer = FakeRenderer::new();
        let placed = layout_bottom_text("abcdefghij\nk\nl\nm", 60.0, 50.0, 10.0, &mut renderer);

        assert_eq!(placed[0].rect.y, 10.0);
        assert_eq!(placed[0].rect.x, 10.0);
    }
}
