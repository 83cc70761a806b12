use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attribute on `<body>` that selects the stylesheet theme
pub const THEME_ATTRIBUTE: &str = "data-theme-kind";

/// Colour theme variants understood by the page stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    HighContrast,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::HighContrast];

    /// Value written into the theme attribute
    pub fn attribute_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Table header (background, foreground) colours
    pub fn header_colors(self) -> (&'static str, &'static str) {
        match self {
            Theme::Light => ("#eee", "#000"),
            Theme::Dark => ("#333", "#eee"),
            Theme::HighContrast => ("#000", "#fff"),
        }
    }

    /// Select this theme on a rendered document by tagging its first `<body>`
    pub fn apply(self, html: &str) -> String {
        let tagged = format!("<body {}=\"{}\">", THEME_ATTRIBUTE, self.attribute_value());
        html.replacen("<body>", &tagged, 1)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_value())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.attribute_value() == s)
            .ok_or_else(|| format!("unknown theme '{}' (expected light, dark or high-contrast)", s))
    }
}
