//! Drifting particle field with proximity links

use crate::fx::{Effect, Input, Painter, Point, Surface};
use crate::store::Theme;
use rand::rngs::StdRng;
use rand::Rng;

/// Surface area (in cells) per particle
const CELLS_PER_PARTICLE: f64 = 30.0;
const MAX_PARTICLES: usize = 100;
/// Pointer influence radius, in columns
const MAX_DISTANCE: f64 = 12.0;
/// Particles closer than this are linked, in columns
const LINK_DISTANCE: f64 = 10.0;
const DRIFT: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Point,
    pub vel: Point,
    pub size: f64,
    pub base_size: f64,
}

#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    pointer: Option<Point>,
}

/// Number of particles for a surface
pub fn particle_count(surface: &Surface) -> usize {
    ((surface.width * surface.height / CELLS_PER_PARTICLE).floor() as usize).min(MAX_PARTICLES)
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn seed(&mut self, surface: &Surface, rng: &mut StdRng) {
        self.particles = (0..particle_count(surface))
            .map(|_| {
                let size = rng.gen::<f64>() * 2.0 + 1.0;
                Particle {
                    pos: Point::new(rng.gen::<f64>() * surface.width, rng.gen::<f64>() * surface.height),
                    vel: Point::new((rng.gen::<f64>() - 0.5) * DRIFT, (rng.gen::<f64>() - 0.5) * DRIFT / 2.0),
                    size,
                    base_size: size,
                }
            })
            .collect();
    }

    /// Pairs of particle indices close enough to be linked, with link strength
    pub fn links(&self) -> Vec<(usize, usize, f64)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = a.pos.distance(b.pos);
                if distance < LINK_DISTANCE {
                    links.push((i, j, 1.0 - distance / LINK_DISTANCE));
                }
            }
        }
        links
    }
}

fn wrap(value: f64, max: f64) -> f64 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

impl Effect for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn resize(&mut self, surface: &Surface, rng: &mut StdRng) {
        self.seed(surface, rng);
    }

    fn input(&mut self, input: Input, _surface: &Surface, _rng: &mut StdRng) {
        if let Input::PointerMoved(p) = input {
            self.pointer = Some(p);
        }
    }

    fn tick(&mut self, surface: &Surface, _rng: &mut StdRng) {
        for particle in &mut self.particles {
            particle.pos.x = wrap(particle.pos.x + particle.vel.x, surface.width);
            particle.pos.y = wrap(particle.pos.y + particle.vel.y, surface.height);

            particle.size = match self.pointer {
                Some(pointer) => {
                    let distance = pointer.distance(particle.pos);
                    if distance < MAX_DISTANCE {
                        particle.base_size * (1.0 + (MAX_DISTANCE - distance) / MAX_DISTANCE)
                    } else {
                        particle.base_size
                    }
                }
                None => particle.base_size,
            };
        }
    }

    fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme) {
        let primary = theme.colors.primary;

        for (i, j, strength) in self.links() {
            painter.line(self.particles[i].pos, self.particles[j].pos, primary, strength * 0.6);
        }

        painter.layer();
        for particle in &self.particles {
            // Base sizes run 1-3, drawn at a quarter column each
            painter.circle(particle.pos, particle.size * 0.25, primary, 1.0);
        }
    }

    fn population(&self) -> usize {
        self.particles.len()
    }
}
