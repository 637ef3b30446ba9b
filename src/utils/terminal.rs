//! Utterance sanitization
//!
//! Utterance text arrives from an external capture collaborator (speech recognizer, stdin,
//! terminal input) and is echoed back in feedback strings such as
//! `"{fragment} not found in your list"`. Escape sequences in that text must not reach the
//! terminal, so every utterance passes through [`strip_control_sequences`] before parsing.

/// Removes ANSI CSI escape sequences and control characters from an utterance
///
/// Newlines and tabs are folded into spaces since an utterance is a single line of speech.
///
/// # Examples
///
/// ```
/// use shopping_voice::utils::terminal::strip_control_sequences;
///
/// assert_eq!(strip_control_sequences("add \x1b[31mmilk\x1b[0m"), "add milk");
/// assert_eq!(strip_control_sequences("add milk\nto my list"), "add milk to my list");
/// ```
pub fn strip_control_sequences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI sequence: ESC [ params letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if matches!(ch, '\t' | '\n' | '\r') {
            result.push(' ');
            continue;
        }

        if ch.is_control() {
            continue;
        }

        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_color_codes() {
        assert_eq!(strip_control_sequences("\x1b[1mremove\x1b[0m bread"), "remove bread");
    }

    #[test]
    fn test_strips_cursor_movement() {
        assert_eq!(strip_control_sequences("\x1b[2J\x1b[Hfind apples"), "find apples");
    }

    #[test]
    fn test_bare_escape_dropped() {
        assert_eq!(strip_control_sequences("add\x1b milk"), "add milk");
    }

    #[test]
    fn test_folds_line_breaks() {
        assert_eq!(strip_control_sequences("add milk\r\nplease"), "add milk  please");
    }

    #[test]
    fn test_drops_bell_and_backspace() {
        assert_eq!(strip_control_sequences("grab chips\x07\x08"), "grab chips");
    }

    #[test]
    fn test_plain_and_unicode_untouched() {
        assert_eq!(strip_control_sequences("add crème fraîche"), "add crème fraîche");
        assert_eq!(strip_control_sequences(""), "");
    }
}
