//! Visual themes.

use serde::{Deserialize, Serialize};

/// The five palette colors of a theme.
///
/// Values are CSS color strings and are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Palette {
    fn new(primary: &str, secondary: &str, accent: &str, background: &str, text: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

/// A named visual theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Also used as the `<body>` class of the exported site
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Preview token used by theme pickers
    #[serde(default)]
    pub preview: String,
    pub colors: Palette,
}

/// Id of the theme a new session starts with.
pub const DEFAULT_THEME_ID: &str = "modern";

impl Theme {
    /// All built-in themes, in display order.
    pub fn presets() -> Vec<Theme> {
        vec![
            Theme {
                id: "modern".to_string(),
                name: "Modern".to_string(),
                description: "Clean and professional design with modern elements".to_string(),
                preview: "theme-modern".to_string(),
                colors: Palette::new("#6366f1", "#f1f5f9", "#8b5cf6", "#ffffff", "#1e293b"),
            },
            Theme {
                id: "creative".to_string(),
                name: "Creative".to_string(),
                description: "Bold and vibrant design for creative professionals".to_string(),
                preview: "theme-creative".to_string(),
                colors: Palette::new("#ec4899", "#fdf2f8", "#f97316", "#ffffff", "#1f2937"),
            },
            Theme {
                id: "minimal".to_string(),
                name: "Minimal".to_string(),
                description: "Simple and elegant design focused on content".to_string(),
                preview: "theme-minimal".to_string(),
                colors: Palette::new("#374151", "#f9fafb", "#6b7280", "#ffffff", "#111827"),
            },
            Theme {
                id: "tech".to_string(),
                name: "Tech".to_string(),
                description: "Futuristic design perfect for developers and tech professionals"
                    .to_string(),
                preview: "theme-tech".to_string(),
                colors: Palette::new("#06b6d4", "#f0f9ff", "#3b82f6", "#ffffff", "#0f172a"),
            },
            Theme {
                id: "dark".to_string(),
                name: "Dark Mode".to_string(),
                description: "Sleek dark theme with elegant contrast".to_string(),
                preview: "theme-minimal".to_string(),
                colors: Palette::new("#8b5cf6", "#1f2937", "#06b6d4", "#111827", "#f9fafb"),
            },
        ]
    }

    /// Look up a built-in theme by id.
    pub fn preset(id: &str) -> Option<Theme> {
        Self::presets().into_iter().find(|t| t.id == id)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            id: DEFAULT_THEME_ID.to_string(),
            name: "Modern".to_string(),
            description: "Clean and professional design with modern elements".to_string(),
            preview: "theme-modern".to_string(),
            colors: Palette::new("#6366f1", "#f1f5f9", "#8b5cf6", "#ffffff", "#1e293b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_the_modern_preset() {
        assert_eq!(Theme::preset(DEFAULT_THEME_ID), Some(Theme::default()));
    }

    #[test]
    fn presets_have_unique_ids() {
        let presets = Theme::presets();
        let mut ids: Vec<_> = presets.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(Theme::preset("neon").is_none());
    }

    #[test]
    fn dark_preset_palette() {
        let dark = Theme::preset("dark").unwrap();
        assert_eq!(dark.colors.background, "#111827");
        assert_eq!(dark.colors.text, "#f9fafb");
    }
}
