//! Theme store for cyberfolio
//!
//! Holds the registered themes and cursor styles, tracks which theme is
//! current and hands out subscriptions so pages and effects can react to
//! changes. Themes are immutable values: every transition builds a new
//! `Theme` and swaps it in, bumping the store revision.

use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a fraction in `0.0..=1.0`
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Mix `self` over `base` with the given opacity (`0.0..=1.0`).
    ///
    /// The terminal has no alpha channel, so fades are rendered by
    /// blending toward the background color.
    pub fn blend_over(&self, base: Rgba, opacity: f64) -> Rgba {
        let t = opacity.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| {
            (f64::from(bottom) + (f64::from(top) - f64::from(bottom)) * t).round() as u8
        };
        Rgba::rgb(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Complete color palette of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub accent_light: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub text: Rgba,
    pub glow: Rgba,
}

/// Appearance of the pointer-following trail
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CursorStyle {
    pub name: &'static str,
    pub particle_count: u16,
    pub particle_size: f64,
    pub speed: f64,
}

impl CursorStyle {
    /// Look up a registered cursor style by name
    pub fn by_name(name: &str) -> Option<&'static CursorStyle> {
        CURSOR_STYLES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

/// A named, immutable bundle of colors and cursor style
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub colors: Palette,
    pub cursor_style: CursorStyle,
    pub is_dark: bool,
    pub is_cyberpunk: bool,
}

impl Theme {
    pub fn with_dark(&self, is_dark: bool) -> Self {
        Self { is_dark, ..self.clone() }
    }

    pub fn with_cyberpunk(&self, is_cyberpunk: bool) -> Self {
        Self { is_cyberpunk, ..self.clone() }
    }

    pub fn with_cursor_style(&self, cursor_style: CursorStyle) -> Self {
        Self { cursor_style, ..self.clone() }
    }
}

const HEX: CursorStyle = CursorStyle {
    name: "hex",
    particle_count: 50,
    particle_size: 2.0,
    speed: 2.0,
};

const NEURAL: CursorStyle = CursorStyle {
    name: "neural",
    particle_count: 60,
    particle_size: 2.0,
    speed: 1.5,
};

const QUANTUM: CursorStyle = CursorStyle {
    name: "quantum",
    particle_count: 75,
    particle_size: 1.5,
    speed: 2.5,
};

const MATRIX: CursorStyle = CursorStyle {
    name: "matrix",
    particle_count: 100,
    particle_size: 1.0,
    speed: 3.0,
};

const CYBER: CursorStyle = CursorStyle {
    name: "cyber",
    particle_count: 80,
    particle_size: 1.8,
    speed: 2.0,
};

/// Every selectable cursor style, in menu order
pub const CURSOR_STYLES: [CursorStyle; 5] = [HEX, NEURAL, QUANTUM, MATRIX, CYBER];

/// Built-in themes, in cycle order
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme {
            name: "Neon Pink",
            colors: Palette {
                primary: Rgba::rgb(0xff, 0x00, 0x80),            // #ff0080
                secondary: Rgba::rgb(0x79, 0x28, 0xca),          // #7928ca
                accent: Rgba::rgb(0x00, 0xff, 0xff),             // #00ffff
                accent_light: Rgba::rgb(0x80, 0xff, 0xff),       // #80ffff
                background: Rgba::rgb(0x0a, 0x0a, 0x0a),         // #0a0a0a
                surface: Rgba::rgb(0x1a, 0x1a, 0x1a),            // #1a1a1a
                text: Rgba::rgb(0xff, 0xff, 0xff),               // #ffffff
                glow: Rgba::rgba(0xff, 0x00, 0x80, 0x80),        // #ff008080
            },
            cursor_style: HEX,
            is_dark: true,
            is_cyberpunk: true,
        },
        Theme {
            name: "Matrix Green",
            colors: Palette {
                primary: Rgba::rgb(0x00, 0xff, 0x00),            // #00ff00
                secondary: Rgba::rgb(0x00, 0x80, 0x00),          // #008000
                accent: Rgba::rgb(0x80, 0xff, 0x80),             // #80ff80
                accent_light: Rgba::rgb(0xc0, 0xff, 0xc0),       // #c0ffc0
                background: Rgba::rgb(0x00, 0x1a, 0x00),         // #001a00
                surface: Rgba::rgb(0x00, 0x26, 0x00),            // #002600
                text: Rgba::rgb(0x00, 0xff, 0x00),               // #00ff00
                glow: Rgba::rgba(0x00, 0xff, 0x00, 0x80),        // #00ff0080
            },
            cursor_style: MATRIX,
            is_dark: true,
            is_cyberpunk: true,
        },
        Theme {
            name: "Quantum Blue",
            colors: Palette {
                primary: Rgba::rgb(0x00, 0xff, 0xff),            // #00ffff
                secondary: Rgba::rgb(0x00, 0x80, 0xff),          // #0080ff
                accent: Rgba::rgb(0x80, 0xff, 0xff),             // #80ffff
                accent_light: Rgba::rgb(0xc0, 0xff, 0xff),       // #c0ffff
                background: Rgba::rgb(0x00, 0x1a, 0x1a),         // #001a1a
                surface: Rgba::rgb(0x00, 0x26, 0x26),            // #002626
                text: Rgba::rgb(0xff, 0xff, 0xff),               // #ffffff
                glow: Rgba::rgba(0x00, 0xff, 0xff, 0x80),        // #00ffff80
            },
            cursor_style: QUANTUM,
            is_dark: true,
            is_cyberpunk: true,
        },
        Theme {
            name: "Cyber Gold",
            colors: Palette {
                primary: Rgba::rgb(0xff, 0xd7, 0x00),            // #ffd700
                secondary: Rgba::rgb(0xff, 0x8c, 0x00),          // #ff8c00
                accent: Rgba::rgb(0xff, 0xe6, 0x80),             // #ffe680
                accent_light: Rgba::rgb(0xff, 0xf2, 0xb3),       // #fff2b3
                background: Rgba::rgb(0x1a, 0x1a, 0x00),         // #1a1a00
                surface: Rgba::rgb(0x26, 0x26, 0x00),            // #262600
                text: Rgba::rgb(0xff, 0xff, 0xff),               // #ffffff
                glow: Rgba::rgba(0xff, 0xd7, 0x00, 0x80),        // #ffd70080
            },
            cursor_style: NEURAL,
            is_dark: true,
            is_cyberpunk: true,
        },
        Theme {
            name: "Plasma Purple",
            colors: Palette {
                primary: Rgba::rgb(0xb1, 0x4a, 0xed),            // #b14aed
                secondary: Rgba::rgb(0x79, 0x28, 0xca),          // #7928ca
                accent: Rgba::rgb(0xd8, 0x94, 0xff),             // #d894ff
                accent_light: Rgba::rgb(0xe6, 0xb3, 0xff),       // #e6b3ff
                background: Rgba::rgb(0x1a, 0x00, 0x1a),         // #1a001a
                surface: Rgba::rgb(0x26, 0x00, 0x26),            // #260026
                text: Rgba::rgb(0xff, 0xff, 0xff),               // #ffffff
                glow: Rgba::rgba(0xb1, 0x4a, 0xed, 0x80),        // #b14aed80
            },
            cursor_style: CYBER,
            is_dark: true,
            is_cyberpunk: true,
        },
    ]
}

/// Process-wide theme state
#[derive(Debug, Clone)]
pub struct ThemeStore {
    themes: Vec<Rc<Theme>>,
    index: usize,
    revision: u64,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(builtin_themes()).unwrap_or_else(|| unreachable!("builtin theme list is empty"))
    }
}

impl ThemeStore {
    /// Create a store over the given themes; `None` if the list is empty
    pub fn new(themes: Vec<Theme>) -> Option<Self> {
        if themes.is_empty() {
            return None;
        }
        Some(Self {
            themes: themes.into_iter().map(Rc::new).collect(),
            index: 0,
            revision: 0,
        })
    }

    /// The current theme
    pub fn current(&self) -> Rc<Theme> {
        Rc::clone(&self.themes[self.index])
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// All registered themes, including any per-theme overrides
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter().map(|t| t.as_ref())
    }

    pub fn cursor_styles(&self) -> &'static [CursorStyle] {
        &CURSOR_STYLES
    }

    /// Advance to the next theme, wrapping around
    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % self.themes.len();
        self.bump();
    }

    /// Jump to a theme by name (case-insensitive). Unknown names are ignored.
    pub fn select(&mut self, name: &str) {
        if let Some(pos) = self.themes.iter().position(|t| t.name.eq_ignore_ascii_case(name)) {
            self.index = pos;
            self.bump();
        }
    }

    pub fn toggle_dark(&mut self) {
        let next = self.current().with_dark(!self.current().is_dark);
        self.replace_current(next);
    }

    pub fn toggle_cyberpunk(&mut self) {
        let next = self.current().with_cyberpunk(!self.current().is_cyberpunk);
        self.replace_current(next);
    }

    /// Attach a registered cursor style to the current theme.
    /// Unknown names are ignored.
    pub fn set_cursor_style(&mut self, name: &str) {
        if let Some(style) = CursorStyle::by_name(name) {
            let next = self.current().with_cursor_style(*style);
            self.replace_current(next);
        }
    }

    /// Switch the current theme to the next registered cursor style
    pub fn cycle_cursor_style(&mut self) {
        let current = self.current().cursor_style.name;
        let styles = self.cursor_styles();
        let pos = styles.iter().position(|s| s.name == current).unwrap_or(0);
        let next = styles[(pos + 1) % styles.len()];
        self.set_cursor_style(next.name);
    }

    /// Start listening for changes made after this call
    pub fn subscribe(&self) -> Subscription {
        Subscription { seen: self.revision }
    }

    fn replace_current(&mut self, theme: Theme) {
        self.themes[self.index] = Rc::new(theme);
        self.bump();
    }

    fn bump(&mut self) {
        self.revision += 1;
        tracing::debug!(
            theme = self.themes[self.index].name,
            revision = self.revision,
            "theme changed"
        );
    }
}

/// A consumer's view of the store revision it last observed
#[derive(Debug, Clone)]
pub struct Subscription {
    seen: u64,
}

impl Subscription {
    /// Return the current theme if the store changed since the last call
    pub fn changed(&mut self, store: &ThemeStore) -> Option<Rc<Theme>> {
        if store.revision == self.seen {
            return None;
        }
        self.seen = store.revision;
        Some(store.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_to_start() {
        let mut store = ThemeStore::default();
        let start = store.current();
        let count = store.themes().count();

        for _ in 0..count {
            store.cycle();
        }

        assert_eq!(store.index(), 0);
        assert_eq!(*store.current(), *start);
    }

    #[test]
    fn test_single_cycle_selects_second_theme() {
        let mut store = ThemeStore::default();
        let second = builtin_themes()[1].colors.primary;

        store.cycle();
        assert_eq!(store.current().colors.primary, second);
        assert_eq!(store.current().name, "Matrix Green");
    }

    #[test]
    fn test_every_theme_defines_all_roles() {
        for theme in builtin_themes() {
            let c = theme.colors;
            let roles = [
                ("primary", c.primary),
                ("secondary", c.secondary),
                ("accent", c.accent),
                ("accent_light", c.accent_light),
                ("background", c.background),
                ("surface", c.surface),
                ("text", c.text),
                ("glow", c.glow),
            ];
            for (role, color) in roles {
                assert!(color.a > 0, "{} has a transparent {}", theme.name, role);
            }
        }
    }

    #[test]
    fn test_toggle_dark_only_flips_dark() {
        let mut store = ThemeStore::default();
        let before = store.current();

        store.toggle_dark();
        let after = store.current();

        assert_eq!(after.is_dark, !before.is_dark);
        assert_eq!(*after, before.with_dark(!before.is_dark));
    }

    #[test]
    fn test_toggle_cyberpunk_only_flips_cyberpunk() {
        let mut store = ThemeStore::default();
        let before = store.current();

        store.toggle_cyberpunk();
        let after = store.current();

        assert_eq!(after.is_cyberpunk, !before.is_cyberpunk);
        assert_eq!(after.is_dark, before.is_dark);
        assert_eq!(after.colors, before.colors);
        assert_eq!(after.cursor_style, before.cursor_style);
        assert_eq!(after.name, before.name);
    }

    #[test]
    fn test_toggle_replaces_value_instead_of_mutating() {
        let mut store = ThemeStore::default();
        let held = store.current();

        store.toggle_dark();

        assert!(held.is_dark);
        assert!(!store.current().is_dark);
    }

    #[test]
    fn test_override_survives_cycling() {
        let mut store = ThemeStore::default();
        store.toggle_cyberpunk();

        for _ in 0..store.themes().count() {
            store.cycle();
        }
        assert!(!store.current().is_cyberpunk);
    }

    #[test]
    fn test_set_cursor_style() {
        let mut store = ThemeStore::default();
        store.set_cursor_style("matrix");
        assert_eq!(store.current().cursor_style.name, "matrix");
        assert_eq!(store.current().cursor_style.particle_count, 100);
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        let mut store = ThemeStore::default();
        let mut sub = store.subscribe();
        let before = store.current();

        store.set_cursor_style("sparkles");
        store.select("Solarized");

        assert!(sub.changed(&store).is_none());
        assert_eq!(*store.current(), *before);
    }

    #[test]
    fn test_select_by_name() {
        let mut store = ThemeStore::default();
        store.select("cyber gold");
        assert_eq!(store.current().name, "Cyber Gold");
        assert_eq!(store.index(), 3);
    }

    #[test]
    fn test_cycle_cursor_style_wraps() {
        let mut store = ThemeStore::default();
        assert_eq!(store.current().cursor_style.name, "hex");

        for _ in 0..CURSOR_STYLES.len() {
            store.cycle_cursor_style();
        }
        assert_eq!(store.current().cursor_style.name, "hex");
    }

    #[test]
    fn test_subscription_sees_each_change_once() {
        let mut store = ThemeStore::default();
        let mut sub = store.subscribe();

        assert!(sub.changed(&store).is_none());

        store.cycle();
        let theme = sub.changed(&store).expect("change after cycle");
        assert_eq!(theme.name, "Matrix Green");
        assert!(sub.changed(&store).is_none());

        store.toggle_dark();
        store.toggle_dark();
        assert!(sub.changed(&store).is_some());
        assert!(sub.changed(&store).is_none());
    }

    #[test]
    fn test_empty_store_is_rejected() {
        assert!(ThemeStore::new(Vec::new()).is_none());
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(Rgba::rgba(255, 0, 128, 128).to_string(), "#ff008080");
        assert_eq!(Rgba::rgb(10, 10, 10).to_string(), "#0a0a0a");
    }

    #[test]
    fn test_blend_over() {
        let white = Rgba::rgb(255, 255, 255);
        let black = Rgba::rgb(0, 0, 0);
        assert_eq!(white.blend_over(black, 1.0), white);
        assert_eq!(white.blend_over(black, 0.0), black);
        assert_eq!(white.blend_over(black, 0.5), Rgba::rgb(128, 128, 128));
    }
}
