use crossterm::style::Color;

// Teletext-flavored palette
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn label_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn points_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn captain_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn live_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn dim_fg() -> Color {
    Color::AnsiValue(245)
} // Gray
pub fn up_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn down_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// Extracts the 256-color code from a Color, with a fallback for the
/// non-AnsiValue variants the palette never produces
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(code) => code,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_ansi_code() {
        assert_eq!(get_ansi_code(Color::AnsiValue(46), 0), 46);
        assert_eq!(get_ansi_code(Color::Red, 7), 7);
    }
}
