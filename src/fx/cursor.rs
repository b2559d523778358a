//! Pointer-following particle trail
//!
//! Every pointer move emits a small ring of particles that drift outward
//! and fade. The look depends on the current theme's cursor style.

use crate::fx::{Effect, Input, Painter, Point, Surface};
use crate::store::{CursorStyle, Rgba, Theme};
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::TAU;

/// Life lost per frame; a particle lives 50 frames
const DECAY: f64 = 0.02;
/// Column distance a speed-1 particle covers per frame
const BASE_SPEED: f64 = 0.15;

/// Half-width katakana used by the matrix style
const KATAKANA: std::ops::RangeInclusive<u32> = 0xFF66..=0xFF9D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub pos: Point,
    pub vel: Point,
    pub size: f64,
    pub life: f64,
    pub glyph: char,
}

/// Trail particles always take the palette's primary color
fn trail_color(theme: &Theme) -> Rgba {
    theme.colors.primary
}

#[derive(Debug)]
pub struct CursorTrail {
    style: CursorStyle,
    particles: Vec<TrailParticle>,
    pointer: Option<Point>,
}

impl CursorTrail {
    pub fn new(theme: &Theme) -> Self {
        Self {
            style: theme.cursor_style,
            particles: Vec::new(),
            pointer: None,
        }
    }

    #[cfg(test)]
    pub fn style(&self) -> &CursorStyle {
        &self.style
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    /// Upper bound on live particles for the current style
    pub fn capacity(&self) -> usize {
        usize::from(self.style.particle_count) * 3
    }

    /// Particles emitted per pointer move
    pub fn burst_size(&self) -> usize {
        if self.style.name == "matrix" {
            15
        } else {
            5
        }
    }

    fn emit(&mut self, at: Point, rng: &mut StdRng) {
        let count = self.burst_size();
        let scale = self.style.speed / 2.0;
        let base_size = if self.style.name == "hex" { 1.2 } else { 0.6 };
        let size = base_size * self.style.particle_size / 2.0;

        for i in 0..count {
            let angle = TAU * i as f64 / count as f64;
            let boost = if self.style.name == "quantum" {
                2.0 + rng.gen::<f64>() * 2.0
            } else {
                1.0
            };
            let speed = boost * BASE_SPEED * scale;
            let glyph = char::from_u32(rng.gen_range(KATAKANA)).unwrap_or('*');

            self.particles.push(TrailParticle {
                pos: at,
                vel: Point::new(0.0, 0.0).polar(angle, speed),
                size,
                life: 1.0,
                glyph,
            });
        }

        let cap = self.capacity();
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }
}

impl Effect for CursorTrail {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn resize(&mut self, surface: &Surface, _rng: &mut StdRng) {
        self.particles.retain(|p| surface.contains(p.pos));
    }

    fn input(&mut self, input: Input, _surface: &Surface, rng: &mut StdRng) {
        if let Input::PointerMoved(p) = input {
            self.pointer = Some(p);
            self.emit(p, rng);
        }
    }

    fn theme_changed(&mut self, theme: &Theme) {
        if theme.cursor_style != self.style {
            self.style = theme.cursor_style;
            self.particles.clear();
        }
    }

    fn tick(&mut self, surface: &Surface, _rng: &mut StdRng) {
        for p in &mut self.particles {
            p.pos.x += p.vel.x;
            p.pos.y += p.vel.y;
            p.life -= DECAY;
        }
        self.particles.retain(|p| p.life > 0.0 && surface.contains(p.pos));
    }

    fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme) {
        let trail = trail_color(theme);

        for p in &self.particles {
            let size = p.size * p.life;
            match self.style.name {
                "hex" => painter.polygon(p.pos, size, 6, 0.0, trail, p.life),
                "quantum" => painter.polygon(p.pos, size, 4, TAU / 8.0, trail, p.life),
                "matrix" => {
                    let glyph = p.glyph.to_string();
                    painter.text(p.pos, &glyph, trail.blend_over(theme.colors.background, p.life), false);
                }
                _ => painter.circle(p.pos, size, trail, p.life),
            }
        }

        let Some(pointer) = self.pointer else {
            return;
        };
        painter.layer();
        let primary = theme.colors.primary;
        let accent = theme.colors.accent;
        match self.style.name {
            "hex" => {
                painter.polygon(pointer, 1.5, 6, 0.0, primary, 1.0);
                painter.polygon(pointer, 1.8, 6, 0.0, accent, 1.0);
            }
            "quantum" => {
                painter.polygon(pointer, 1.2, 4, TAU / 8.0, primary, 1.0);
                painter.polygon(pointer, 1.5, 4, TAU / 8.0, accent, 1.0);
            }
            "matrix" => painter.text(pointer, ">", primary, true),
            _ => {
                painter.circle(pointer, 1.0, primary, 1.0);
                painter.circle(pointer, 1.3, accent, 1.0);
            }
        }
    }

    fn population(&self) -> usize {
        self.particles.len()
    }
}
