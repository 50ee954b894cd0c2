//! Block glyph font for the neura stat counters.

/// Rows per glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Digits 0-9, four cells wide.
const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    ["▄██▄", "█  █", "█  █", "█  █", "▀██▀"],
    [" ▄█ ", "  █ ", "  █ ", "  █ ", " ▄█▄"],
    ["▄██▄", "   █", " ▄█▀", "█   ", "████"],
    ["▄██▄", "   █", " ██ ", "   █", "▀██▀"],
    ["█  █", "█  █", "████", "   █", "   █"],
    ["████", "█   ", "███▄", "   █", "███▀"],
    ["▄██▄", "█   ", "███▄", "█  █", "▀██▀"],
    ["████", "   █", "  █ ", " █  ", " █  "],
    ["▄██▄", "█  █", "▄██▄", "█  █", "▀██▀"],
    ["▄██▄", "█  █", "▀███", "   █", "▀██▀"],
];

const PLUS: [&str; GLYPH_HEIGHT] = ["    ", " █  ", "███ ", " █  ", "    "];

const PERCENT: [&str; GLYPH_HEIGHT] = ["█  █", "  █ ", " █  ", "█   ", "█  █"];

const BLANK: [&str; GLYPH_HEIGHT] = ["    ", "    ", "    ", "    ", "    "];

fn glyph(ch: char) -> &'static [&'static str; GLYPH_HEIGHT] {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        '+' => &PLUS,
        '%' => &PERCENT,
        _ => &BLANK,
    }
}

/// Render `text` as `GLYPH_HEIGHT` rows of block art.
///
/// Characters without a glyph render as blanks.
pub fn build_counter_art(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|ch| glyph(ch)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width of `text` once rendered, in cells.
pub fn art_width(text: &str) -> usize {
    let count = text.chars().count();
    if count == 0 { 0 } else { count * 5 - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_are_uniform() {
        let all = DIGITS.iter().chain([&PLUS, &PERCENT, &BLANK]);
        for glyph in all {
            for row in glyph {
                assert_eq!(row.chars().count(), 4, "{row:?}");
            }
        }
    }

    #[test]
    fn test_build_counter_art() {
        let art = build_counter_art("150+");
        assert_eq!(art.len(), GLYPH_HEIGHT);
        for row in &art {
            assert_eq!(row.chars().count(), art_width("150+"));
        }
        assert!(art[0].starts_with(" ▄█ "));
    }

    #[test]
    fn test_empty_text() {
        let art = build_counter_art("");
        assert!(art.iter().all(String::is_empty));
        assert_eq!(art_width(""), 0);
    }
}
