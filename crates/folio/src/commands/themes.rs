//! List built-in themes.

use folio_model::theme::DEFAULT_THEME_ID;
use folio_model::Theme;

/// Run the themes command.
pub fn run() {
    for theme in Theme::presets() {
        println!("{}", describe(&theme));
    }
}

fn describe(theme: &Theme) -> String {
    let marker = if theme.id == DEFAULT_THEME_ID {
        " (default)"
    } else {
        ""
    };
    let colors = &theme.colors;

    format!(
        "{:<10} {}{}\n           {}\n           primary {}  secondary {}  accent {}  background {}  text {}",
        theme.id,
        theme.name,
        marker,
        theme.description,
        colors.primary,
        colors.secondary,
        colors.accent,
        colors.background,
        colors.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_default_theme() {
        let modern = describe(&Theme::default());
        assert!(modern.starts_with("modern     Modern (default)"));
        assert!(modern.contains("primary #6366f1"));

        let dark = describe(&Theme::preset("dark").unwrap());
        assert!(!dark.contains("(default)"));
    }
}
