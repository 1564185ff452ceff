/// Native style escape character understood by game clients.
pub const STYLE_CHAR: char = '\u{00A7}';

/// Escape character used in configuration files.
pub const CONFIG_ESCAPE: char = '&';

fn is_style_code(ch: char) -> bool {
    matches!(ch,
        '0'..='9'
        | 'a'..='f' | 'A'..='F'
        | 'k'..='o' | 'K'..='O'
        | 'r' | 'R'
        | 'x' | 'X')
}

fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Expands `&#RRGGBB` hex colors into the native multi-character escape,
/// then rewrites `&c` single-character codes. Unrecognized escapes pass
/// through unchanged, and already-translated text is left alone.
pub fn translate_style_codes(input: &str) -> String {
    translate_escape_codes(&expand_hex_colors(input))
}

fn expand_hex_colors(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut index = 0;
    while index < chars.len() {
        let is_hex_escape = chars[index] == CONFIG_ESCAPE
            && chars.get(index + 1) == Some(&'#')
            && index + 8 <= chars.len()
            && chars[index + 2..index + 8].iter().all(|ch| is_hex_digit(*ch));
        if is_hex_escape {
            out.push(STYLE_CHAR);
            out.push('x');
            for ch in &chars[index + 2..index + 8] {
                out.push(STYLE_CHAR);
                out.push(*ch);
            }
            index += 8;
        } else {
            out.push(chars[index]);
            index += 1;
        }
    }
    out
}

fn translate_escape_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == CONFIG_ESCAPE {
            match chars.peek() {
                Some(next) if is_style_code(*next) => {
                    out.push(STYLE_CHAR);
                    out.push(next.to_ascii_lowercase());
                    chars.next();
                }
                _ => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Removes every native escape together with the character it styles.
/// Used when comparing rendered text where only the colors differ.
pub fn strip_style_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == STYLE_CHAR {
            chars.next();
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_rewrites_single_codes() {
        assert_eq!(translate_style_codes("&cred &ltext"), "\u{00A7}cred \u{00A7}ltext");
    }

    #[test]
    fn translate_lowercases_code_characters() {
        assert_eq!(translate_style_codes("&Cred"), "\u{00A7}cred");
    }

    #[test]
    fn translate_leaves_unknown_escapes() {
        assert_eq!(translate_style_codes("5 & 6 &z"), "5 & 6 &z");
    }

    #[test]
    fn translate_expands_hex_colors() {
        assert_eq!(
            translate_style_codes("&#FF0000red"),
            "\u{00A7}x\u{00A7}F\u{00A7}F\u{00A7}0\u{00A7}0\u{00A7}0\u{00A7}0red"
        );
    }

    #[test]
    fn translate_ignores_short_hex_sequences() {
        assert_eq!(translate_style_codes("&#FF00"), "&#FF00");
    }

    #[test]
    fn translate_is_stable_on_translated_text() {
        let once = translate_style_codes("&#00FF00&lBold &cText");
        let twice = translate_style_codes(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn strip_removes_escape_pairs() {
        let styled = translate_style_codes("&cHello &lWorld");
        assert_eq!(strip_style_codes(&styled), "Hello World");
    }

    #[test]
    fn strip_removes_hex_expansion() {
        let styled = translate_style_codes("&#123abcHi");
        assert_eq!(strip_style_codes(&styled), "Hi");
    }

    #[test]
    fn strip_handles_trailing_escape() {
        assert_eq!(strip_style_codes("done\u{00A7}"), "done");
    }
}
