use ratatui::style::Color;

/// Nord palette with semantic aliases.
pub struct NordTheme {
    // Polar Night
    pub nord0: Color, // darkest background: panels, statusbar
    pub nord1: Color, // secondary background: active row
    pub nord2: Color, // tertiary background: borders
    pub nord3: Color, // muted text

    // Snow Storm
    pub nord4: Color, // main text
    pub nord5: Color, // bright text, headings
    pub nord6: Color, // cursor and critical UI only

    // Frost
    pub nord7: Color,  // mint: breadcrumbs, subjects
    pub nord8: Color,  // ice blue: selected element, links
    pub nord9: Color,  // blue: keywords
    pub nord10: Color, // dark blue: active elements

    // Aurora
    pub nord11: Color, // red: errors
    pub nord12: Color, // orange: warnings
    pub nord13: Color, // yellow: labels
    pub nord14: Color, // green: success
    pub nord15: Color, // purple: accents
}

impl Default for NordTheme {
    fn default() -> Self {
        Self {
            nord0: Color::Rgb(46, 52, 64),
            nord1: Color::Rgb(59, 66, 82),
            nord2: Color::Rgb(76, 86, 106),
            nord3: Color::Rgb(144, 153, 171),
            nord4: Color::Rgb(216, 222, 233),
            nord5: Color::Rgb(229, 233, 240),
            nord6: Color::Rgb(236, 239, 244),
            nord7: Color::Rgb(143, 188, 187),
            nord8: Color::Rgb(136, 192, 208),
            nord9: Color::Rgb(129, 161, 193),
            nord10: Color::Rgb(94, 129, 172),
            nord11: Color::Rgb(191, 97, 106),
            nord12: Color::Rgb(208, 135, 112),
            nord13: Color::Rgb(235, 203, 139),
            nord14: Color::Rgb(163, 190, 140),
            nord15: Color::Rgb(180, 142, 173),
        }
    }
}

impl NordTheme {
    // Semantic aliases
    pub fn bg(&self) -> Color {
        self.nord0
    }
    pub fn bg_secondary(&self) -> Color {
        self.nord1
    }
    pub fn border(&self) -> Color {
        self.nord2
    }
    pub fn muted(&self) -> Color {
        self.nord3
    }

    pub fn fg(&self) -> Color {
        self.nord4
    }
    pub fn fg_bright(&self) -> Color {
        self.nord5
    }
    pub fn fg_white(&self) -> Color {
        self.nord6
    }

    pub fn frost_mint(&self) -> Color {
        self.nord7
    }
    pub fn frost_ice(&self) -> Color {
        self.nord8
    }
    pub fn frost_blue(&self) -> Color {
        self.nord9
    }
    pub fn frost_dark(&self) -> Color {
        self.nord10
    }

    pub fn red(&self) -> Color {
        self.nord11
    }
    pub fn orange(&self) -> Color {
        self.nord12
    }
    pub fn yellow(&self) -> Color {
        self.nord13
    }
    pub fn green(&self) -> Color {
        self.nord14
    }
    pub fn purple(&self) -> Color {
        self.nord15
    }

    // Logic aliases
    pub fn selection_bg(&self) -> Color {
        self.bg_secondary()
    }
    pub fn active_panel(&self) -> Color {
        self.frost_ice()
    }
    pub fn chart_bar(&self) -> Color {
        self.frost_blue()
    }
}
