use ratatui::style::Color;

use crate::model::Theme;

/// Colours for one theme
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub ok: Color,
    pub err: Color,
    pub warn: Color,
    /// Background of the drop zone while hovered
    pub drop_active: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                bg: Color::Rgb(15, 17, 23),
                fg: Color::Rgb(226, 232, 240),
                muted: Color::Rgb(120, 120, 120),
                border: Color::Rgb(71, 85, 105),
                accent: Color::Rgb(99, 179, 237),
                ok: Color::Rgb(72, 187, 120),
                err: Color::Rgb(245, 101, 101),
                warn: Color::Yellow,
                drop_active: Color::Rgb(30, 58, 95),
            },
            Theme::Light => Palette {
                bg: Color::Rgb(250, 250, 250),
                fg: Color::Rgb(26, 32, 44),
                muted: Color::Rgb(113, 128, 150),
                border: Color::Rgb(203, 213, 224),
                accent: Color::Rgb(43, 108, 176),
                ok: Color::Rgb(39, 103, 73),
                err: Color::Rgb(197, 48, 48),
                warn: Color::Rgb(183, 121, 31),
                drop_active: Color::Rgb(219, 234, 254),
            },
        }
    }
}
