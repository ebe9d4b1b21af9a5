use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn page(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-white text-gray-900",
        }
    }

    pub fn nav(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900/95 backdrop-blur-md border-b border-gray-800",
            Theme::Light => "bg-white/95 backdrop-blur-md border-b border-gray-200",
        }
    }

    pub fn mobile_menu(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800",
            Theme::Light => "bg-gray-100",
        }
    }

    /// Background of top level cards.
    pub fn surface(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800",
            Theme::Light => "bg-gray-100",
        }
    }

    /// Background of cards and chips nested inside a surface.
    pub fn inset(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700",
            Theme::Light => "bg-white",
        }
    }

    pub fn body_text(self) -> &'static str {
        match self {
            Theme::Dark => "text-gray-300",
            Theme::Light => "text-gray-600",
        }
    }

    pub fn link_card(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 hover:bg-gray-700",
            Theme::Light => "bg-gray-100 hover:bg-gray-200",
        }
    }

    pub fn outline_button(self) -> &'static str {
        match self {
            Theme::Dark => "border-gray-700 hover:border-blue-500",
            Theme::Light => "border-gray-300 hover:border-blue-500",
        }
    }

    pub fn code_button(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700 hover:bg-gray-600",
            Theme::Light => "bg-white hover:bg-gray-200",
        }
    }

    pub fn input(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-700 border-gray-600",
            Theme::Light => "bg-white border-gray-300",
        }
    }

    pub fn footer(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 border-t border-gray-700",
            Theme::Light => "bg-gray-100 border-t border-gray-300",
        }
    }

    /// Icon for the toggle button, showing the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => f.write_str("dark"),
            Theme::Light => f.write_str("light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(theme.toggled(), Theme::Light);
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn test_classes_differ_by_theme() {
        assert_ne!(Theme::Dark.page(), Theme::Light.page());
        assert_ne!(Theme::Dark.surface(), Theme::Light.surface());
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
