//! Visual themes selectable from the theme panel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Baseline theme
    #[default]
    Light,
    Dark,
    Sepia,
    Forest,
    Ocean,
}

impl Theme {
    pub const ALL: [Theme; 5] = [Theme::Light, Theme::Dark, Theme::Sepia, Theme::Forest, Theme::Ocean];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
            Theme::Forest => "forest",
            Theme::Ocean => "ocean",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.as_str() == id)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Sepia => "Sepia",
            Theme::Forest => "Forest",
            Theme::Ocean => "Ocean",
        }
    }

    /// Class applied to `<body>`
    pub fn body_class(&self) -> String {
        format!("theme-{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_ids() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_id(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_id("neon"), None);
        assert_eq!(Theme::Dark.body_class(), "theme-dark");
        assert_eq!(Theme::default(), Theme::Light);
    }
}
