use ratatui::style::{Color, Modifier, Style};

const DEFAULT_STYLE: Style = Style {
    fg: None,
    bg: None,
    underline_color: None,
    add_modifier: Modifier::empty(),
    sub_modifier: Modifier::empty(),
};

pub struct UiStyle;

impl UiStyle {
    pub const DEFAULT: Style = DEFAULT_STYLE;
    pub const SELECTED: Style = DEFAULT_STYLE.bg(Color::Rgb(70, 70, 86));
    /// Dim color for rows the player has not unlocked yet.
    pub const SECONDARY: Style = DEFAULT_STYLE.fg(Color::DarkGray);
    pub const RESEARCH_DISCOVERED: Style = DEFAULT_STYLE.fg(Color::Rgb(204, 144, 184));
    pub const RESEARCH_UNDISCOVERED: Style = DEFAULT_STYLE.fg(Color::Rgb(240, 230, 140));
}

pub struct UiText;

impl UiText {
    pub const TYPE_MORE_A: &'static str = "Type at least 3 letters";
    pub const TYPE_MORE_B: &'static str = "to search the tech tree.";
    pub const SOLDIERS: &'static str = "Soldiers";
    pub const ENGINEERS: &'static str = "Engineers";
    pub const SCIENTISTS: &'static str = "Scientists";
    pub const OTHER_EMPLOYEES: &'static str = "Other employees";
    pub const BASE_MAINTENANCE: &'static str = "Base maintenance";
    pub const TOTAL: &'static str = "Total";
}
