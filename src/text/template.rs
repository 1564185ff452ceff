use crate::text::style::translate_style_codes;

const COLORIZE_OPEN: &str = "<colorize:";

/// Replaces `{color_i}` tokens (1-indexed) with style-translated palette
/// entries and fills `{boost}`/`{boosts}` with the supplied text verbatim.
/// Tokens referring past the end of the palette are left in place.
pub fn apply_placeholders(template: &str, palette: &[String], boost_text: Option<&str>) -> String {
    let mut out = template.to_string();
    for (index, color) in palette.iter().enumerate() {
        let token = format!("{{color_{}}}", index + 1);
        if out.contains(&token) {
            out = out.replace(&token, &translate_style_codes(color));
        }
    }
    if let Some(boost) = boost_text {
        out = out.replace("{boost}", boost);
        out = out.replace("{boosts}", boost);
    }
    out
}

/// Expands the first `<colorize:TEXT>` tag by prefixing each character of
/// TEXT with the matching segment (clamped to the last segment), then
/// style-translates the whole string. Without a tag this is plain
/// translation.
pub fn apply_colorize_tag(template: &str, segments: &[String]) -> String {
    let Some(start) = template.find(COLORIZE_OPEN) else {
        return translate_style_codes(template);
    };
    let text_start = start + COLORIZE_OPEN.len();
    let Some(close) = template[text_start..].find('>') else {
        return translate_style_codes(template);
    };
    let text_end = text_start + close;

    let mut colored = String::new();
    for (index, ch) in template[text_start..text_end].chars().enumerate() {
        if let Some(segment) = segments.get(index).or_else(|| segments.last()) {
            colored.push_str(&translate_style_codes(segment));
        }
        colored.push(ch);
    }

    let mut out = String::with_capacity(template.len() + colored.len());
    out.push_str(&template[..start]);
    out.push_str(&colored);
    out.push_str(&template[text_end + 1..]);
    translate_style_codes(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec!["&6".to_string(), "&7".to_string()]
    }

    #[test]
    fn placeholders_fill_palette_entries() {
        let out = apply_placeholders("{color_1}Sword {color_2}of Dawn", &palette(), None);
        assert_eq!(out, "\u{00A7}6Sword \u{00A7}7of Dawn");
    }

    #[test]
    fn placeholders_leave_out_of_range_tokens() {
        let out = apply_placeholders("{color_3}Sword", &palette(), None);
        assert_eq!(out, "{color_3}Sword");
    }

    #[test]
    fn placeholders_fill_boost_text_verbatim() {
        let out = apply_placeholders("{boost} / {boosts}", &[], Some("&cRAW"));
        assert_eq!(out, "&cRAW / &cRAW");
    }

    #[test]
    fn placeholders_are_idempotent_without_tokens() {
        let once = apply_placeholders("{color_1}Blade {boost}", &palette(), Some("HOLD_SPEED"));
        let twice = apply_placeholders(&once, &palette(), Some("HOLD_SPEED"));
        assert_eq!(once, twice);
    }

    #[test]
    fn colorize_prefixes_each_character() {
        let segments = vec!["&4".to_string(), "&5".to_string()];
        let out = apply_colorize_tag("<colorize:Axe>", &segments);
        assert_eq!(out, "\u{00A7}4A\u{00A7}5x\u{00A7}5e");
    }

    #[test]
    fn colorize_without_tag_translates_plainly() {
        let out = apply_colorize_tag("&cSword", &["&4".to_string()]);
        assert_eq!(out, "\u{00A7}cSword");
    }

    #[test]
    fn colorize_keeps_surrounding_text() {
        let segments = vec!["&b".to_string()];
        let out = apply_colorize_tag("&7The <colorize:Axe> rests", &segments);
        assert_eq!(
            out,
            "\u{00A7}7The \u{00A7}bA\u{00A7}bx\u{00A7}be rests"
        );
    }

    #[test]
    fn colorize_with_empty_segments_keeps_text() {
        let out = apply_colorize_tag("<colorize:Axe>", &[]);
        assert_eq!(out, "Axe");
    }
}
