//! Scrolling perspective grid

use crate::fx::{Effect, Painter, Point, Surface};
use crate::store::Theme;
use rand::rngs::StdRng;
use std::f64::consts::TAU;

/// Spacing between grid lines, in columns
const GRID_SIZE: f64 = 6.0;
/// Offset advance per frame
const SPEED: f64 = 0.08;
const SEGMENTS: usize = 16;

const LINE_ALPHA: f64 = 0.3;
const RING_ALPHA: f64 = 0.2;
const SPOKE_ALPHA: f64 = 0.1;

#[derive(Debug, Default)]
pub struct CyberGrid {
    offset: f64,
    size: (f64, f64),
}

/// A grid line at `position` with its fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub position: f64,
    pub alpha: f64,
}

/// A ring around the center and the spokes reaching out to it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub alpha: f64,
    pub spoke_alpha: f64,
}

fn fade(progress: f64) -> f64 {
    (1.0 - progress).max(0.1)
}

impl CyberGrid {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Horizontal lines, fading toward the bottom
    pub fn horizontal_lines(&self) -> Vec<GridLine> {
        let (_, height) = self.size;
        let mut lines = Vec::new();
        // Rows are twice as tall as columns are wide
        let step = GRID_SIZE / 2.0;
        let mut y = self.offset / 2.0;
        while y < height {
            let progress = (y + self.offset / 2.0) / height;
            lines.push(GridLine { position: y, alpha: fade(progress) * LINE_ALPHA });
            y += step;
        }
        lines
    }

    /// Vertical lines, fading toward the right
    pub fn vertical_lines(&self) -> Vec<GridLine> {
        let (width, _) = self.size;
        let mut lines = Vec::new();
        let mut x = self.offset;
        while x < width {
            lines.push(GridLine { position: x, alpha: fade(x / width) * LINE_ALPHA });
            x += GRID_SIZE;
        }
        lines
    }

    /// Concentric rings around the center
    pub fn rings(&self) -> Vec<Ring> {
        let (width, height) = self.size;
        let cx = width / 2.0;
        let cy = height / 2.0 * crate::fx::CELL_ASPECT;
        let max_radius = (cx * cx + cy * cy).sqrt();

        let mut rings = Vec::new();
        let mut radius = self.offset;
        while radius < max_radius {
            let progress = fade(radius / max_radius);
            rings.push(Ring {
                radius,
                alpha: progress * RING_ALPHA,
                spoke_alpha: progress * SPOKE_ALPHA,
            });
            radius += GRID_SIZE;
        }
        rings
    }
}

impl Effect for CyberGrid {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn resize(&mut self, surface: &Surface, _rng: &mut StdRng) {
        self.size = (surface.width, surface.height);
    }

    fn tick(&mut self, _surface: &Surface, _rng: &mut StdRng) {
        self.offset = (self.offset + SPEED) % GRID_SIZE;
    }

    fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme) {
        let (width, height) = self.size;
        let primary = theme.colors.primary;
        let accent = theme.colors.accent;

        for line in self.horizontal_lines() {
            painter.line(
                Point::new(0.0, line.position),
                Point::new(width, line.position),
                primary,
                line.alpha,
            );
        }

        for line in self.vertical_lines() {
            painter.line(
                Point::new(line.position, 0.0),
                Point::new(line.position, height),
                accent,
                line.alpha,
            );
        }

        painter.layer();
        let center = Point::new(width / 2.0, height / 2.0);
        for ring in self.rings() {
            painter.circle(center, ring.radius, primary, ring.alpha);
            for i in 0..SEGMENTS {
                let angle = TAU * i as f64 / SEGMENTS as f64;
                painter.line(
                    center,
                    center.polar(angle, ring.radius),
                    accent,
                    ring.spoke_alpha,
                );
            }
        }
    }

    fn population(&self) -> usize {
        self.horizontal_lines().len() + self.vertical_lines().len() + self.rings().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use ratatui::layout::Rect;

    fn seeded_grid(width: u16, height: u16) -> (CyberGrid, Surface, StdRng) {
        let surface = Surface::acquire(Rect::new(0, 0, width, height)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = CyberGrid::new();
        grid.resize(&surface, &mut rng);
        (grid, surface, rng)
    }

    #[test]
    fn test_offset_wraps_at_grid_size() {
        let (mut grid, surface, mut rng) = seeded_grid(80, 24);
        for _ in 0..1000 {
            grid.tick(&surface, &mut rng);
            assert!(grid.offset() >= 0.0 && grid.offset() < GRID_SIZE);
        }
    }

    #[test]
    fn test_lines_cover_surface() {
        let (grid, _, _) = seeded_grid(60, 30);
        let vertical = grid.vertical_lines();
        assert_eq!(vertical.len(), 10);
        assert!(vertical.iter().all(|l| l.position < 60.0));

        let horizontal = grid.horizontal_lines();
        assert_eq!(horizontal.len(), 10);
        assert!(horizontal.iter().all(|l| l.position < 30.0));
    }

    #[test]
    fn test_line_alpha_fades_but_never_vanishes() {
        let (grid, _, _) = seeded_grid(120, 40);
        let lines = grid.vertical_lines();
        assert!(lines.windows(2).all(|w| w[0].alpha >= w[1].alpha));
        assert!(lines
            .iter()
            .all(|l| l.alpha >= 0.1 * LINE_ALPHA - 1e-12 && l.alpha <= LINE_ALPHA));
    }

    #[test]
    fn test_rings_and_spokes_stay_faint() {
        let (grid, _, _) = seeded_grid(120, 40);
        let rings = grid.rings();
        assert!(!rings.is_empty());

        // The innermost ring sits at the center with full fade
        assert!((rings[0].alpha - 0.2).abs() < 1e-12);
        assert!((rings[0].spoke_alpha - 0.1).abs() < 1e-12);
        for ring in &rings {
            assert!(ring.alpha <= 0.2 && ring.spoke_alpha <= 0.1);
            assert!((ring.spoke_alpha * 2.0 - ring.alpha).abs() < 1e-12);
        }
    }
}
