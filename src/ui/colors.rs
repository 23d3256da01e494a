use tui::style::Color;

/// Neutral gray for team codes we don't know.
pub const FALLBACK: Color = Color::Rgb(0x55, 0x55, 0x55);

/// Primary display color per team code, NBA and WNBA mixed in one table.
/// Codes shared across the leagues keep a single entry.
const TEAM_COLORS: &[(&str, &str)] = &[
    ("BOS", "#007A33"),
    ("BKN", "#000000"),
    ("NYK", "#006BB6"),
    ("PHI", "#ED174C"),
    ("TOR", "#CE1141"),
    ("CLE", "#860038"),
    ("DET", "#C8102E"),
    ("MIL", "#00471B"),
    ("CHA", "#1D1160"),
    ("MIA", "#98002E"),
    ("ORL", "#0077C0"),
    ("DEN", "#0E2240"),
    ("OKC", "#007AC1"),
    ("POR", "#E03A3E"),
    ("UTA", "#002B5C"),
    ("GSW", "#1D428A"),
    ("LAC", "#C8102E"),
    ("LAL", "#552583"),
    ("SAC", "#5A2D81"),
    ("HOU", "#CE1141"),
    ("MEM", "#5D76A9"),
    ("NOP", "#0C2340"),
    ("SAS", "#C4CED3"),
    ("LVA", "#8F8F8F"),
    ("NYL", "#83D4C9"),
    ("CON", "#E44A2D"),
    ("DAL", "#0084B4"),
    ("WAS", "#C8102E"),
    ("ATL", "#A7A9AC"),
    ("CHI", "#519DD2"),
    ("MIN", "#002B5C"),
    ("PHX", "#E56020"),
    ("SEA", "#FFD700"),
    ("IND", "#FFC62F"),
    ("LAS", "#000000"),
];

/// Total over all inputs — unknown codes get the neutral fallback, never an error.
pub fn color_for(team_code: &str) -> Color {
    TEAM_COLORS
        .iter()
        .find(|(code, _)| *code == team_code)
        .and_then(|(_, hex)| parse_hex(hex))
        .unwrap_or(FALLBACK)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_their_color() {
        assert_eq!(color_for("LAL"), Color::Rgb(0x55, 0x25, 0x83));
        assert_eq!(color_for("SEA"), Color::Rgb(0xFF, 0xD7, 0x00));
    }

    #[test]
    fn unknown_codes_fall_back_to_gray() {
        assert_eq!(color_for("XYZ"), FALLBACK);
        assert_eq!(color_for(""), FALLBACK);
    }

    #[test]
    fn every_table_entry_parses() {
        for (code, hex) in TEAM_COLORS {
            assert!(parse_hex(hex).is_some(), "bad hex for {code}: {hex}");
        }
    }
}
