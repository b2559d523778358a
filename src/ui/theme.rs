//! Terminal styles derived from the current theme
//!
//! The store holds palettes as RGBA values. `Styles` resolves them into
//! ratatui colors once per frame, taking the dark and cyberpunk flags
//! into account.

use crate::store::{Rgba, Theme};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

const LIGHT_BG: Rgba = Rgba::rgb(0xf4, 0xf4, 0xf5); // #f4f4f5
const LIGHT_SURFACE: Rgba = Rgba::rgb(0xe4, 0xe4, 0xe7); // #e4e4e7
const BLACK: Rgba = Rgba::rgb(0, 0, 0);

const SUCCESS: Rgba = Rgba::rgb(0x22, 0xc5, 0x5e); // #22c55e
const ERROR: Rgba = Rgba::rgb(0xef, 0x44, 0x44); // #ef4444

/// Convert a store color to a terminal color, dropping alpha
pub fn color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

/// Resolved colors for one frame
#[derive(Debug, Clone)]
pub struct Styles {
    pub bg: Rgba,
    pub surface: Rgba,
    pub fg: Rgba,
    pub fg_dim: Rgba,
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub accent_light: Rgba,
    pub border_type: BorderType,
    pub cyberpunk: bool,
}

impl Styles {
    pub fn from_theme(theme: &Theme) -> Self {
        let c = &theme.colors;
        let border_type = if theme.is_cyberpunk {
            BorderType::Thick
        } else {
            BorderType::Plain
        };

        if theme.is_dark {
            Self {
                bg: c.background,
                surface: c.surface,
                fg: c.text,
                fg_dim: c.text.blend_over(c.background, 0.55),
                primary: c.primary,
                secondary: c.secondary,
                accent: c.accent,
                accent_light: c.accent_light,
                border_type,
                cyberpunk: theme.is_cyberpunk,
            }
        } else {
            // Neon tones wash out on a light background
            let deepen = |rgba: Rgba| rgba.blend_over(BLACK, 0.75);
            Self {
                bg: LIGHT_BG,
                surface: LIGHT_SURFACE,
                fg: c.background,
                fg_dim: c.background.blend_over(LIGHT_BG, 0.6),
                primary: deepen(c.primary),
                secondary: deepen(c.secondary),
                accent: deepen(c.accent),
                accent_light: deepen(c.accent_light),
                border_type,
                cyberpunk: theme.is_cyberpunk,
            }
        }
    }

    /// A copy of the theme with the palette swapped for the resolved one,
    /// for effects that draw straight from the palette
    pub fn effect_theme(&self, theme: &Theme) -> Theme {
        let mut resolved = theme.clone();
        resolved.colors.background = self.bg;
        resolved.colors.surface = self.surface;
        resolved.colors.text = self.fg;
        resolved.colors.primary = self.primary;
        resolved.colors.secondary = self.secondary;
        resolved.colors.accent = self.accent;
        resolved.colors.accent_light = self.accent_light;
        resolved
    }

    /// Base style; page text is drawn without a background so effects show
    pub fn text(&self) -> Style {
        Style::default().fg(color(self.fg))
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(color(self.fg_dim))
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(color(self.primary))
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(color(self.accent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(color(self.accent))
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(color(self.secondary))
    }

    /// Skill and tech tags
    pub fn tag(&self) -> Style {
        Style::default()
            .fg(color(self.accent_light))
            .bg(color(self.surface))
    }

    pub fn border(&self) -> Style {
        Style::default().fg(color(self.primary.blend_over(self.bg, 0.5)))
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(color(self.accent))
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(color(self.fg_dim))
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(color(self.primary))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(color(SUCCESS))
    }

    pub fn error(&self) -> Style {
        Style::default().fg(color(ERROR))
    }

    /// Opaque background for popups and bars
    pub fn block_style(&self) -> Style {
        Style::default().fg(color(self.fg)).bg(color(self.surface))
    }

    /// Blend every foreground toward the background, for page transitions
    pub fn fade(&self, opacity: f64) -> Styles {
        if opacity >= 1.0 {
            return self.clone();
        }
        let fade = |rgba: Rgba| rgba.blend_over(self.bg, opacity);
        Styles {
            fg: fade(self.fg),
            fg_dim: fade(self.fg_dim),
            primary: fade(self.primary),
            secondary: fade(self.secondary),
            accent: fade(self.accent),
            accent_light: fade(self.accent_light),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ThemeStore;

    #[test]
    fn test_dark_styles_follow_palette() {
        let store = ThemeStore::default();
        let theme = store.current();
        let styles = Styles::from_theme(&theme);
        assert_eq!(styles.bg, theme.colors.background);
        assert_eq!(styles.primary, theme.colors.primary);
        assert_eq!(styles.border_type, BorderType::Thick);
    }

    #[test]
    fn test_light_mode_swaps_background() {
        let mut store = ThemeStore::default();
        store.toggle_dark();
        let theme = store.current();
        let styles = Styles::from_theme(&theme);
        assert_eq!(styles.bg, LIGHT_BG);
        assert_eq!(styles.fg, theme.colors.background);
        assert_ne!(styles.primary, theme.colors.primary);
    }

    #[test]
    fn test_plain_borders_without_cyberpunk() {
        let mut store = ThemeStore::default();
        store.toggle_cyberpunk();
        let styles = Styles::from_theme(&store.current());
        assert_eq!(styles.border_type, BorderType::Plain);
    }

    #[test]
    fn test_color_drops_alpha() {
        assert_eq!(color(Rgba::rgba(1, 2, 3, 4)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_fade_blends_toward_background() {
        let store = ThemeStore::default();
        let styles = Styles::from_theme(&store.current());
        assert_eq!(styles.fade(1.0).primary, styles.primary);

        let hidden = styles.fade(0.0);
        assert_eq!(hidden.primary, styles.bg);
        assert_eq!(hidden.fg, styles.bg);
        assert_eq!(hidden.surface, styles.surface);
    }
}
