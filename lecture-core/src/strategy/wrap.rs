//! Text-wrapping strategies.
//!
//! All widths and lengths are measured in `char`s.

use thiserror::Error;

const ELLIPSIS: &str = "...";

/// Error type for text wrapping.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WrapError {
    #[error("invalid width {0} (must be > 0)")]
    InvalidWidth(usize),
}

/// Fits text into lines of a fixed maximum width.
pub trait TextWrapStrategy {
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError>;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> TextWrapStrategy for F
where
    F: Fn(&str, usize) -> Result<Vec<String>, WrapError>,
{
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        self(text, width)
    }
}

// ============================================================================
// Truncation
// ============================================================================

/// Cut the text off after `width` characters, marking the cut with `...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Truncation;

impl TextWrapStrategy for Truncation {
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        truncate_lines(text, width)
    }

    fn name(&self) -> &str {
        "truncate"
    }
}

/// Function form of [`Truncation`].
///
/// Widths too narrow to hold the ellipsis cut hard without one.
pub fn truncate_lines(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    if text.chars().count() <= width {
        return Ok(vec![text.to_string()]);
    }
    let ellipsis_len = ELLIPSIS.chars().count();
    if width < ellipsis_len {
        return Ok(vec![text.chars().take(width).collect()]);
    }

    let mut line: String = text.chars().take(width - ellipsis_len).collect();
    line.push_str(ELLIPSIS);
    Ok(vec![line])
}

// ============================================================================
// Break anywhere
// ============================================================================

/// Break the text every `width` characters, even in the middle of a word.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakAnywhere;

impl TextWrapStrategy for BreakAnywhere {
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        break_anywhere(text, width)
    }

    fn name(&self) -> &str {
        "break-anywhere"
    }
}

/// Function form of [`BreakAnywhere`]. The remainder is always emitted, so
/// empty text yields a single empty line.
pub fn break_anywhere(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    check_width(width)?;
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Ok(vec![String::new()]);
    }
    Ok(chars.chunks(width).map(|chunk| chunk.iter().collect()).collect())
}

// ============================================================================
// Break on whitespace
// ============================================================================

/// Break between words, filling each line greedily.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakOnSpace;

impl TextWrapStrategy for BreakOnSpace {
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        break_on_space(text, width)
    }

    fn name(&self) -> &str {
        "break-on-space"
    }
}

/// Function form of [`BreakOnSpace`].
///
/// Runs of whitespace collapse to a single space. A word longer than `width`
/// first fills the rest of the current line, then continues in
/// `width`-sized pieces. Blank text yields no lines.
pub fn break_on_space(text: &str, width: usize) -> Result<Vec<String>, WrapError> {
    check_width(width)?;

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let gap = usize::from(!current.is_empty());
        if current_len + gap + word_len <= width {
            if gap == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_len += gap + word_len;
        } else if word_len <= width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        } else {
            let mut chars: Vec<char> = word.chars().collect();
            if !current.is_empty() {
                let room = width.saturating_sub(current_len + 1);
                if room > 0 {
                    current.push(' ');
                    current.extend(chars.drain(..room));
                }
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces: Vec<String> =
                chars.chunks(width).map(|piece| piece.iter().collect()).collect();
            current = pieces.pop().unwrap_or_default();
            current_len = current.chars().count();
            lines.extend(pieces);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    Ok(lines)
}

/// Break between words, choosing break points that minimise raggedness.
///
/// The cost of a layout is the sum of the squared unused width of every
/// line except the last one, saturating at `u64::MAX`. Words longer than
/// `width` are split into `width`-sized pieces before the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakOnSpaceOptimal;

impl TextWrapStrategy for BreakOnSpaceOptimal {
    fn wrap(&self, text: &str, width: usize) -> Result<Vec<String>, WrapError> {
        check_width(width)?;

        let words = split_words(text, width);
        let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
        let n = words.len();

        // cost[i]: cheapest layout of words[i..]; next[i]: end of its first line.
        let mut cost = vec![u64::MAX; n + 1];
        let mut next = vec![n; n + 1];
        cost[n] = 0;

        for i in (0..n).rev() {
            let mut line_len = 0;
            for j in i..n {
                line_len += lengths[j] + usize::from(j > i);
                if line_len > width {
                    break;
                }
                let line_cost = if j + 1 == n {
                    0
                } else {
                    let slack = u64::try_from(width - line_len).unwrap_or(u64::MAX);
                    slack.saturating_mul(slack)
                };
                let total = line_cost.saturating_add(cost[j + 1]);
                if total < cost[i] {
                    cost[i] = total;
                    next[i] = j + 1;
                }
            }
        }

        let mut lines = Vec::new();
        let mut i = 0;
        while i < n {
            let end = next[i];
            lines.push(words[i..end].join(" "));
            i = end;
        }
        Ok(lines)
    }

    fn name(&self) -> &str {
        "break-on-space-optimal"
    }
}

fn check_width(width: usize) -> Result<(), WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidWidth(width));
    }
    Ok(())
}

/// Whitespace-separated words, with any word longer than `width` split into
/// `width`-sized pieces.
fn split_words(text: &str, width: usize) -> Vec<String> {
    let mut words = Vec::new();
    for word in text.split_whitespace() {
        if word.chars().count() <= width {
            words.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            words.extend(chars.chunks(width).map(|piece| piece.iter().collect::<String>()));
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "This is my first post. This is my first post. This is my first post.";

    #[test]
    fn test_truncation_short_text_unchanged() {
        assert_eq!(truncate_lines("hello", 5).unwrap(), vec!["hello"]);
        assert_eq!(truncate_lines("hello", 40).unwrap(), vec!["hello"]);
        assert_eq!(truncate_lines("", 0).unwrap(), vec![""]);
    }

    #[test]
    fn test_truncation_adds_ellipsis() {
        assert_eq!(truncate_lines("hello world", 8).unwrap(), vec!["hello..."]);
    }

    #[test]
    fn test_truncation_never_exceeds_width() {
        let texts = ["", "a", "abc", "abcd", POST, "äöü ßß ✓✓✓ emoji-free"];
        for text in texts {
            for width in 0..80 {
                let lines = Truncation.wrap(text, width).unwrap();
                assert_eq!(lines.len(), 1);
                assert!(lines[0].chars().count() <= width.max(text.chars().count()));
                if text.chars().count() <= width {
                    assert_eq!(lines[0], text);
                } else {
                    assert!(lines[0].chars().count() <= width);
                }
            }
        }
    }

    #[test]
    fn test_truncation_narrow_width_cuts_hard() {
        assert_eq!(truncate_lines("abcdef", 2).unwrap(), vec!["ab"]);
        assert_eq!(truncate_lines("abcdef", 3).unwrap(), vec!["..."]);
        assert_eq!(truncate_lines("abcdef", 0).unwrap(), vec![""]);
    }

    #[test]
    fn test_break_anywhere_chunks() {
        assert_eq!(
            break_anywhere("abcdefghij", 4).unwrap(),
            vec!["abcd", "efgh", "ij"]
        );
        assert_eq!(break_anywhere("abcdefgh", 4).unwrap(), vec!["abcd", "efgh"]);
        assert_eq!(break_anywhere("", 4).unwrap(), vec![""]);
    }

    #[test]
    fn test_break_anywhere_rejects_zero_width() {
        assert_eq!(break_anywhere("abc", 0), Err(WrapError::InvalidWidth(0)));
    }

    #[test]
    fn test_break_on_space_greedy() {
        assert_eq!(
            break_on_space("This is my first post.", 5).unwrap(),
            vec!["This", "is my", "first", "post."]
        );
        assert_eq!(
            break_on_space("  spaced    out  ", 40).unwrap(),
            vec!["spaced out"]
        );
    }

    #[test]
    fn test_break_on_space_splits_long_words() {
        assert_eq!(
            break_on_space("abcdefghij", 4).unwrap(),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[test]
    fn test_break_on_space_long_word_fills_current_line() {
        assert_eq!(
            break_on_space("ab cdefghij", 4).unwrap(),
            vec!["ab c", "defg", "hij"]
        );
        assert_eq!(
            break_on_space("abc defghi", 4).unwrap(),
            vec!["abc", "defg", "hi"]
        );
        assert_eq!(
            break_on_space("ab cdefgh ij", 4).unwrap(),
            vec!["ab c", "defg", "h ij"]
        );
    }

    #[test]
    fn test_break_on_space_blank_text() {
        assert!(break_on_space("", 10).unwrap().is_empty());
        assert!(break_on_space("   \n\t", 10).unwrap().is_empty());
        assert_eq!(break_on_space("x", 0), Err(WrapError::InvalidWidth(0)));
    }

    #[test]
    fn test_lines_fit_width() {
        let strategies: [&dyn TextWrapStrategy; 3] = [&BreakAnywhere, &BreakOnSpace, &BreakOnSpaceOptimal];
        for strategy in strategies {
            for width in 1..30 {
                for line in strategy.wrap(POST, width).unwrap() {
                    assert!(
                        line.chars().count() <= width,
                        "{} produced {line:?} for width {width}",
                        strategy.name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_optimal_is_less_ragged_than_greedy() {
        let text = "aaa bb cc ddddd";
        assert_eq!(
            break_on_space(text, 6).unwrap(),
            vec!["aaa bb", "cc", "ddddd"]
        );
        assert_eq!(
            BreakOnSpaceOptimal.wrap(text, 6).unwrap(),
            vec!["aaa", "bb cc", "ddddd"]
        );
    }

    #[test]
    fn test_optimal_keeps_all_words() {
        let lines = BreakOnSpaceOptimal.wrap(POST, 17).unwrap();
        assert_eq!(lines.join(" "), POST);
    }

    #[test]
    fn test_optimal_handles_huge_widths() {
        assert_eq!(
            BreakOnSpaceOptimal.wrap("aaa bb cc", 5_000_000_000).unwrap(),
            vec!["aaa bb cc"]
        );
        assert_eq!(
            BreakOnSpaceOptimal.wrap("a b", usize::MAX).unwrap(),
            vec!["a b"]
        );
    }

    #[test]
    fn test_fn_items_are_strategies() {
        let strategy: &dyn TextWrapStrategy = &truncate_lines;
        assert_eq!(strategy.wrap("abcdef", 5).unwrap(), vec!["ab..."]);
        assert_eq!(strategy.name(), "custom");
    }
}
