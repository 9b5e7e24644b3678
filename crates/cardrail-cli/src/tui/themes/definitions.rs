//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme: deep teal background, warm accent
pub fn cardrail() -> Theme {
    Theme {
        name: "cardrail".to_string(),
        display_name: "Cardrail".to_string(),
        bg_color: Color::Rgb(14, 42, 48),
        card_bg_color: Color::Rgb(22, 58, 66),
        headline_bg_color: Color::Rgb(32, 84, 94),
        text_color: Color::Rgb(230, 236, 238),
        dim_color: Color::Rgb(140, 164, 170),
        accent_color: Color::Rgb(255, 183, 77),
        border_color: Color::Rgb(52, 104, 114),
        badge_bg_color: Color::Rgb(240, 240, 240),
        dot_inactive_color: Color::Rgb(88, 120, 128),
    }
}

/// Native terminal palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        card_bg_color: Color::Reset,
        headline_bg_color: Color::DarkGray,
        text_color: Color::Reset,
        dim_color: Color::Gray,
        accent_color: Color::Yellow,
        border_color: Color::DarkGray,
        badge_bg_color: Color::White,
        dot_inactive_color: Color::DarkGray,
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        card_bg_color: Color::Rgb(59, 66, 82),
        headline_bg_color: Color::Rgb(67, 76, 94),
        text_color: Color::Rgb(236, 239, 244),
        dim_color: Color::Rgb(216, 222, 233),
        accent_color: Color::Rgb(136, 192, 208),
        border_color: Color::Rgb(76, 86, 106),
        badge_bg_color: Color::Rgb(229, 233, 240),
        dot_inactive_color: Color::Rgb(76, 86, 106),
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".to_string(),
        display_name: "Dracula".to_string(),
        bg_color: Color::Rgb(40, 42, 54),
        card_bg_color: Color::Rgb(52, 55, 70),
        headline_bg_color: Color::Rgb(68, 71, 90),
        text_color: Color::Rgb(248, 248, 242),
        dim_color: Color::Rgb(98, 114, 164),
        accent_color: Color::Rgb(255, 121, 198),
        border_color: Color::Rgb(68, 71, 90),
        badge_bg_color: Color::Rgb(241, 250, 140),
        dot_inactive_color: Color::Rgb(98, 114, 164),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".to_string(),
        display_name: "Gruvbox Dark".to_string(),
        bg_color: Color::Rgb(40, 40, 40),
        card_bg_color: Color::Rgb(50, 48, 47),
        headline_bg_color: Color::Rgb(80, 73, 69),
        text_color: Color::Rgb(235, 219, 178),
        dim_color: Color::Rgb(168, 153, 132),
        accent_color: Color::Rgb(250, 189, 47),
        border_color: Color::Rgb(102, 92, 84),
        badge_bg_color: Color::Rgb(213, 196, 161),
        dot_inactive_color: Color::Rgb(102, 92, 84),
    }
}

/// Light theme
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        display_name: "Paper".to_string(),
        bg_color: Color::Rgb(232, 244, 246),
        card_bg_color: Color::Rgb(250, 252, 252),
        headline_bg_color: Color::Rgb(204, 232, 236),
        text_color: Color::Rgb(30, 42, 46),
        dim_color: Color::Rgb(96, 112, 118),
        accent_color: Color::Rgb(0, 120, 140),
        border_color: Color::Rgb(176, 204, 210),
        badge_bg_color: Color::Rgb(255, 255, 255),
        dot_inactive_color: Color::Rgb(176, 196, 200),
    }
}
