use drift_slash_menu::MenuTheme;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Block colors
    pub block_heading: Color,
    pub block_code_bg: Color,
    pub block_quote: Color,
    pub block_callout: Color,
    pub block_media: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub badge: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            block_heading: tailwind::AMBER.c300,
            block_code_bg: tailwind::SLATE.c800,
            block_quote: tailwind::SLATE.c400,
            block_callout: tailwind::YELLOW.c300,
            block_media: tailwind::PURPLE.c300,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
            badge: tailwind::GREEN.c400,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "Ctrl+K")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions next to hints
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

impl MenuTheme for Theme {
    fn background(&self) -> Color {
        self.bg_panel
    }

    fn border(&self) -> Color {
        self.accent_primary
    }

    fn group_header(&self) -> Color {
        self.text_muted
    }

    fn item_foreground(&self) -> Color {
        self.text_secondary
    }

    fn selected_background(&self) -> Color {
        self.selected_bg
    }

    fn selected_foreground(&self) -> Color {
        self.selected_fg
    }

    fn badge(&self) -> Color {
        self.badge
    }

    fn muted(&self) -> Color {
        self.text_muted
    }
}
