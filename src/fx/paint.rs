//! Drawing primitives on top of the ratatui canvas
//!
//! Converts surface coordinates (origin top-left) to canvas coordinates
//! (origin bottom-left) and emulates opacity by blending toward the
//! background color.

use crate::fx::{Point, Surface};
use crate::store::Rgba;
use crate::ui::theme::color;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Context, Line as Segment, Points};
use std::f64::consts::TAU;

const CIRCLE_SEGMENTS: usize = 24;

pub struct Painter<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
    background: Rgba,
}

impl<'a, 'b> Painter<'a, 'b> {
    pub fn new(ctx: &'a mut Context<'b>, surface: &Surface, background: Rgba) -> Self {
        Self {
            ctx,
            height: surface.height,
            background,
        }
    }

    fn map(&self, p: Point) -> (f64, f64) {
        (p.x, self.height - p.y)
    }

    fn ink(&self, rgba: Rgba, alpha: f64) -> ratatui::style::Color {
        color(rgba.blend_over(self.background, alpha * rgba.alpha()))
    }

    /// Start a new layer so later shapes are not merged into earlier cells
    pub fn layer(&mut self) {
        self.ctx.layer();
    }

    pub fn line(&mut self, from: Point, to: Point, rgba: Rgba, alpha: f64) {
        let (x1, y1) = self.map(from);
        let (x2, y2) = self.map(to);
        let color = self.ink(rgba, alpha);
        self.ctx.draw(&Segment { x1, y1, x2, y2, color });
    }

    pub fn dot(&mut self, p: Point, rgba: Rgba, alpha: f64) {
        let coords = [self.map(p)];
        let color = self.ink(rgba, alpha);
        self.ctx.draw(&Points { coords: &coords, color });
    }

    /// Connect the points in order, optionally closing the loop
    pub fn path(&mut self, points: &[Point], closed: bool, rgba: Rgba, alpha: f64) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], rgba, alpha);
        }
        if closed && points.len() > 2 {
            self.line(points[points.len() - 1], points[0], rgba, alpha);
        }
    }

    /// Regular polygon outline, `radius` measured in columns
    pub fn polygon(
        &mut self,
        center: Point,
        radius: f64,
        sides: usize,
        rotation: f64,
        rgba: Rgba,
        alpha: f64,
    ) {
        let points = polygon_points(center, radius, sides, rotation);
        self.path(&points, true, rgba, alpha);
    }

    pub fn circle(&mut self, center: Point, radius: f64, rgba: Rgba, alpha: f64) {
        if radius < 0.5 {
            self.dot(center, rgba, alpha);
        } else {
            self.polygon(center, radius, CIRCLE_SEGMENTS, 0.0, rgba, alpha);
        }
    }

    /// Print text with its first character at `p`
    pub fn text(&mut self, p: Point, text: &str, rgba: Rgba, bold: bool) {
        let (x, y) = self.map(p);
        let mut style = Style::default().fg(self.ink(rgba, 1.0));
        if bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        self.ctx.print(x, y, Line::styled(text.to_string(), style));
    }
}

/// Vertices of a regular polygon
pub fn polygon_points(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| center.polar(rotation + TAU * i as f64 / sides as f64, radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_points_lie_on_radius() {
        let center = Point::new(20.0, 10.0);
        let points = polygon_points(center, 6.0, 6, 0.3);
        assert_eq!(points.len(), 6);
        for p in points {
            assert!((center.distance(p) - 6.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_degenerate_polygon_gets_three_sides() {
        assert_eq!(polygon_points(Point::default(), 1.0, 1, 0.0).len(), 3);
    }
}
