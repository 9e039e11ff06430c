// the browser storage key, shared between the reader at startup and the writer
// in the toggle handler
pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn flip(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    // the icon shows the mode a click would switch to, not the current one
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

// anything other than a stored dark preference falls back to light, including
// the empty string returned when the key has never been written
impl From<String> for Theme {
    fn from(string: String) -> Theme {
        match string.as_str() {
            "Dark" | "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl Into<String> for Theme {
    fn into(self) -> String {
        match self {
            Theme::Light => String::from("light"),
            Theme::Dark => String::from("dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_alternates() {
        assert_eq!(Theme::Light.flip(), Theme::Dark);
        assert_eq!(Theme::Dark.flip(), Theme::Light);
    }

    #[test]
    fn flip_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.flip().flip(), theme);
        }
    }

    #[test]
    fn stored_dark_is_recognized() {
        assert_eq!(Theme::from(String::from("dark")), Theme::Dark);
        assert_eq!(Theme::from(String::from("Dark")), Theme::Dark);
    }

    #[test]
    fn anything_else_reads_as_light() {
        assert_eq!(Theme::from(String::from("light")), Theme::Light);
        assert_eq!(Theme::from(String::new()), Theme::Light);
        assert_eq!(Theme::from(String::from("midnight")), Theme::Light);
    }

    #[test]
    fn storage_value_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            let stored: String = theme.into();
            assert_eq!(Theme::from(stored), theme);
        }
    }

    #[test]
    fn icon_advertises_the_other_mode() {
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
    }
}
