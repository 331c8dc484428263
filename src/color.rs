use crossterm::style::Color as CrosstermColor;

/// The colors used for drawing.
pub enum Color {
    /// The text of a file in the list.
    File,
    /// The background of the selected file.
    Highlight,
    InvertedText,
    InvertedBackground,
    /// The text of a message about something that went wrong.
    Error,
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> CrosstermColor {
        match color {
            Color::File => CrosstermColor::Yellow,
            Color::Highlight => CrosstermColor::Yellow,
            Color::InvertedText => CrosstermColor::Black,
            Color::InvertedBackground => CrosstermColor::White,
            Color::Error => CrosstermColor::DarkRed,
        }
    }
}
