//! Glitching titles and the highlighted logo
//!
//! Both animations are time driven: the app advances them by the elapsed
//! frame time and renders them as styled lines.

use crate::store::Theme;
use crate::ui::theme::color;
use rand::rngs::StdRng;
use rand::Rng;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::time::Duration;

const GLITCH_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '<', '>', '[', ']', '{', '}', '|', '=', '+', '?',
];
const SCRAMBLE_CHANCE: f64 = 0.3;
const DEFAULT_INTERVAL: Duration = Duration::from_millis(3000);
const JITTER_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    /// Chance that a scheduled check starts a glitch
    pub fn probability(&self) -> f64 {
        match self {
            Intensity::Low => 0.3,
            Intensity::Medium => 0.5,
            Intensity::High => 0.7,
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            Intensity::Low => Duration::from_millis(50),
            Intensity::Medium => Duration::from_millis(100),
            Intensity::High => Duration::from_millis(150),
        }
    }

    /// Horizontal shift of the glitch layer, in columns
    pub fn offset(&self) -> usize {
        match self {
            Intensity::Low => 1,
            Intensity::Medium => 2,
            Intensity::High => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GlitchText {
    text: String,
    intensity: Intensity,
    interval: Duration,
    wait: Duration,
    active: Option<Duration>,
    scrambled: Vec<Option<char>>,
}

impl GlitchText {
    pub fn new(text: impl Into<String>, intensity: Intensity) -> Self {
        Self {
            text: text.into(),
            intensity,
            interval: DEFAULT_INTERVAL,
            wait: Duration::ZERO,
            active: None,
            scrambled: Vec::new(),
        }
    }

    /// Hold off the first check
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.wait = delay;
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_glitching(&self) -> bool {
        self.active.is_some()
    }

    /// The text as currently shown, with scrambled characters substituted
    pub fn shown(&self) -> String {
        if !self.is_glitching() {
            return self.text.clone();
        }
        self.text
            .chars()
            .zip(&self.scrambled)
            .map(|(c, s)| s.unwrap_or(c))
            .collect()
    }

    /// Advance by `dt`. A disabled text never glitches and drops any
    /// glitch in progress.
    pub fn tick(&mut self, dt: Duration, enabled: bool, rng: &mut StdRng) {
        if !enabled {
            self.active = None;
            return;
        }

        if let Some(left) = self.active {
            let left = left.saturating_sub(dt);
            self.active = (!left.is_zero()).then_some(left);
            return;
        }

        self.wait = self.wait.saturating_sub(dt);
        if !self.wait.is_zero() {
            return;
        }
        self.wait = self.interval + Duration::from_millis(rng.gen_range(0..JITTER_MS));

        if rng.gen_bool(self.intensity.probability()) {
            self.scramble(rng);
            self.active = Some(self.intensity.duration());
        }
    }

    /// Glitch right away and hold it for `hold`. The next scheduled
    /// check comes one interval after that.
    pub fn trigger(&mut self, hold: Duration, rng: &mut StdRng) {
        self.scramble(rng);
        self.active = Some(hold);
        self.wait = self.interval;
    }

    fn scramble(&mut self, rng: &mut StdRng) {
        self.scrambled = self
            .text
            .chars()
            .map(|c| {
                (!c.is_whitespace() && rng.gen_bool(SCRAMBLE_CHANCE))
                    .then(|| GLITCH_CHARS[rng.gen_range(0..GLITCH_CHARS.len())])
            })
            .collect();
    }

    pub fn render(&self, base: Style, theme: &Theme) -> Line<'static> {
        if !self.is_glitching() {
            return Line::from(Span::styled(self.text.clone(), base));
        }

        let noise = base.fg(color(theme.colors.accent)).add_modifier(Modifier::BOLD);
        let shadow = base.fg(color(theme.colors.secondary));

        let mut spans = vec![Span::raw(" ".repeat(self.intensity.offset()))];
        for (c, shown) in self.text.chars().zip(self.shown().chars()) {
            let style = if shown == c { shadow } else { noise };
            spans.push(Span::styled(shown.to_string(), style));
        }
        Line::from(spans)
    }
}

const HIGHLIGHT_EVERY: Duration = Duration::from_millis(3000);
const HIGHLIGHT_FOR: Duration = Duration::from_millis(150);

/// Text with one character flashing in the accent color every few seconds
#[derive(Debug, Clone)]
pub struct CyberText {
    text: String,
    until_next: Duration,
    highlight: Option<(usize, Duration)>,
}

impl CyberText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            until_next: HIGHLIGHT_EVERY,
            highlight: None,
        }
    }

    /// Index of the highlighted character, if any
    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.map(|(i, _)| i)
    }

    pub fn tick(&mut self, dt: Duration, rng: &mut StdRng) {
        if let Some((i, left)) = self.highlight {
            let left = left.saturating_sub(dt);
            self.highlight = (!left.is_zero()).then_some((i, left));
        }

        self.until_next = self.until_next.saturating_sub(dt);
        if self.until_next.is_zero() {
            self.until_next = HIGHLIGHT_EVERY;
            let len = self.text.chars().count();
            if len > 0 {
                self.highlight = Some((rng.gen_range(0..len), HIGHLIGHT_FOR));
            }
        }
    }

    pub fn render(&self, base: Style, theme: &Theme) -> Line<'static> {
        let accent = base.fg(color(theme.colors.accent));
        let spans: Vec<Span> = self
            .text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let style = if self.highlighted() == Some(i) { accent } else { base };
                Span::styled(c.to_string(), style)
            })
            .collect();
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ThemeStore;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(33);

    fn run_until_glitch(text: &mut GlitchText, rng: &mut StdRng) -> bool {
        for _ in 0..1000 {
            text.tick(FRAME, true, rng);
            if text.is_glitching() {
                return true;
            }
        }
        false
    }

    #[test]
    fn test_glitch_starts_and_ends() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut text = GlitchText::new("EXPERIENCE", Intensity::High);
        assert!(run_until_glitch(&mut text, &mut rng));

        for _ in 0..5 {
            text.tick(FRAME, true, &mut rng);
        }
        assert!(!text.is_glitching());
        assert_eq!(text.shown(), "EXPERIENCE");
    }

    #[test]
    fn test_scrambled_chars_come_from_noise_set() {
        let mut rng = StdRng::seed_from_u64(9);
        let plain = "CYBERPUNK PORTFOLIO";
        let mut text =
            GlitchText::new(plain, Intensity::High).with_interval(Duration::from_millis(100));

        for _ in 0..50 {
            assert!(run_until_glitch(&mut text, &mut rng));
            let shown = text.shown();
            assert_eq!(shown.chars().count(), plain.chars().count());
            for (a, b) in plain.chars().zip(shown.chars()) {
                assert!(a == b || GLITCH_CHARS.contains(&b));
            }
            while text.is_glitching() {
                text.tick(FRAME, true, &mut rng);
            }
        }
    }

    #[test]
    fn test_delay_holds_off_first_check() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut text =
            GlitchText::new("ABOUT", Intensity::High).with_delay(Duration::from_millis(500));
        for _ in 0..15 {
            text.tick(FRAME, true, &mut rng);
            assert!(!text.is_glitching());
        }
    }

    #[test]
    fn test_disabled_never_glitches() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut text = GlitchText::new("BLOG", Intensity::High);
        for _ in 0..1000 {
            text.tick(FRAME, false, &mut rng);
            assert!(!text.is_glitching());
        }
    }

    #[test]
    fn test_glitch_render_is_offset() {
        let store = ThemeStore::default();
        let mut rng = StdRng::seed_from_u64(4);
        let mut text = GlitchText::new("HOME", Intensity::Medium);
        assert!(run_until_glitch(&mut text, &mut rng));

        let line = text.render(Style::default(), &store.current());
        assert_eq!(line.spans[0].content, "  ");
        assert_eq!(line.width(), 4 + Intensity::Medium.offset());
    }

    #[test]
    fn test_cyber_text_highlights_briefly() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut logo = CyberText::new("<AP/>");
        assert_eq!(logo.highlighted(), None);

        logo.tick(Duration::from_millis(3000), &mut rng);
        assert!(logo.highlighted().is_some_and(|i| i < 5));

        logo.tick(Duration::from_millis(100), &mut rng);
        assert!(logo.highlighted().is_some());
        logo.tick(Duration::from_millis(100), &mut rng);
        assert_eq!(logo.highlighted(), None);
    }

    #[test]
    fn test_trigger_glitches_at_once_and_holds() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut text = GlitchText::new("CYBERPUNK PORTFOLIO", Intensity::Low)
            .with_delay(Duration::from_secs(60));
        text.trigger(Duration::from_millis(200), &mut rng);
        assert!(text.is_glitching());

        for _ in 0..6 {
            text.tick(FRAME, true, &mut rng);
        }
        assert!(text.is_glitching());
        text.tick(FRAME, true, &mut rng);
        assert!(!text.is_glitching());
    }
}
