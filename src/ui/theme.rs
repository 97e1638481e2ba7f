use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,     // Grey for chrome and placeholders
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub selection_bg: Color,
    pub console_bg: Color, // Dark console backdrop
    pub console_fg: Color,
    pub popup_bg: Color,
    pub popup_selected_bg: Color, // Highlight for the selected popup row
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250), // Blue, rendered bold
    string: Color::Rgb(250, 179, 135),  // Orange for string literals
    comment: Color::Rgb(166, 227, 161), // Green for comments
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134), // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for current line
    selection_bg: Color::Rgb(88, 91, 112), // Visible over the current line BG
    console_bg: Color::Rgb(30, 30, 30),
    console_fg: Color::Rgb(212, 212, 212),
    popup_bg: Color::Rgb(24, 24, 37),
    popup_selected_bg: Color::Rgb(9, 71, 113), // Blue highlight for selection
};
