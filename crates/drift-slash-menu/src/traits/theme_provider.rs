//! Trait for providing theme configuration to the slash menu.

use ratatui::style::Color;

/// Provides colors for the slash menu overlay.
///
/// Implement this trait to integrate the menu with your application's
/// theme system.
///
/// # Example
///
/// ```ignore
/// use drift_slash_menu::MenuTheme;
/// use ratatui::style::Color;
///
/// impl MenuTheme for MyAppTheme {
///     fn background(&self) -> Color {
///         self.bg_panel
///     }
///
///     fn border(&self) -> Color {
///         self.accent_primary
///     }
/// }
/// ```
pub trait MenuTheme {
    /// Background of the menu panel.
    fn background(&self) -> Color;

    /// Border and title color.
    fn border(&self) -> Color;

    /// Foreground for category headers.
    fn group_header(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground for command titles.
    fn item_foreground(&self) -> Color {
        Color::White
    }

    /// Background of the selected row.
    fn selected_background(&self) -> Color {
        Color::Rgb(50, 50, 80)
    }

    /// Foreground of the selected row.
    fn selected_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground for "NEW"/"RECENT" badges.
    fn badge(&self) -> Color {
        Color::Green
    }

    /// Foreground for descriptions and placeholder text.
    fn muted(&self) -> Color {
        Color::Gray
    }
}

/// Default theme with dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl MenuTheme for DefaultTheme {
    fn background(&self) -> Color {
        Color::Rgb(30, 30, 40)
    }

    fn border(&self) -> Color {
        Color::Cyan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.background(), Color::Rgb(30, 30, 40));
        assert_eq!(theme.border(), Color::Cyan);
        assert_eq!(theme.badge(), Color::Green);
    }
}
