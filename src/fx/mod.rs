//! Decorative animations
//!
//! Canvas effects implement [`Effect`] and are driven by a [`CanvasHost`],
//! which owns the drawing surface, forwards pointer and resize events and
//! runs the per-frame tick. A [`Stage`] holds the hosts of the current
//! view and releases them all when the view is torn down.
//!
//! Text animations (glitch titles, the highlighted logo, page slide-in)
//! live here too but render as regular widgets.

pub mod background;
pub mod cursor;
pub mod glitch;
pub mod grid;
pub mod paint;
pub mod particles;
pub mod stage;
pub mod surface;
pub mod transition;

pub use paint::Painter;
pub use stage::Stage;
pub use surface::{CanvasHost, Surface};

use crate::store::Theme;
use rand::rngs::StdRng;

/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT: f64 = 2.0;

/// A position on a surface, in (fractional) cells from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Visual distance, with rows scaled to match column width
    pub fn distance(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = (other.y - self.y) * CELL_ASPECT;
        (dx * dx + dy * dy).sqrt()
    }

    /// Offset by `radius` columns along `angle`, corrected for cell aspect
    pub fn polar(&self, angle: f64, radius: f64) -> Point {
        Point::new(
            self.x + angle.cos() * radius,
            self.y + angle.sin() * radius / CELL_ASPECT,
        )
    }
}

/// Pointer activity in terminal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Moved { column: u16, row: u16 },
    Clicked { column: u16, row: u16 },
}

/// Pointer activity translated into surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    PointerMoved(Point),
    Clicked(Point),
}

/// A self-contained canvas animation
pub trait Effect {
    fn name(&self) -> &'static str;

    /// Called once the surface is acquired and whenever its size changes
    fn resize(&mut self, surface: &Surface, rng: &mut StdRng);

    fn input(&mut self, _input: Input, _surface: &Surface, _rng: &mut StdRng) {}

    /// Called when the theme store publishes a new theme
    fn theme_changed(&mut self, _theme: &Theme) {}

    /// Advance the simulation by one frame
    fn tick(&mut self, surface: &Surface, rng: &mut StdRng);

    /// Redraw the whole frame
    fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme);

    /// Number of live visual objects
    fn population(&self) -> usize;
}
