use super::traits::Rgba;

/// Site color scheme. Owned by the page's theme toggle; the field only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Color for particles and connection lines: white on dark, black on light.
    pub fn ink(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::WHITE,
            Theme::Light => Rgba::BLACK,
        }
    }
}

/// Read-only source of the current theme, sampled once per tick.
pub trait ThemeSignal {
    fn theme(&self) -> Theme;
}

impl ThemeSignal for Theme {
    fn theme(&self) -> Theme {
        *self
    }
}
