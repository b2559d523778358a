//! Page slide-in on navigation

use std::time::Duration;

pub const TRANSITION: Duration = Duration::from_millis(300);
/// Columns the page starts off to the right
const SLIDE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransition {
    elapsed: Duration,
    enabled: bool,
}

impl PageTransition {
    pub fn new(enabled: bool) -> Self {
        Self {
            elapsed: Duration::ZERO,
            enabled,
        }
    }

    /// Start over, as when a new page is shown
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(TRANSITION);
    }

    /// Completion in `0.0..=1.0`, eased out
    pub fn progress(&self) -> f64 {
        if !self.enabled {
            return 1.0;
        }
        let t = self.elapsed.as_secs_f64() / TRANSITION.as_secs_f64();
        1.0 - (1.0 - t).powi(3)
    }

    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Left padding for the page content this frame
    pub fn offset(&self) -> u16 {
        ((1.0 - self.progress()) * SLIDE).round() as u16
    }

    pub fn opacity(&self) -> f64 {
        self.progress()
    }
}
