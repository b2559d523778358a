//! Clickable background: floating shapes, laser shots and a score

use crate::fx::{Effect, Input, Painter, Point, Surface};
use crate::store::{Rgba, Theme};
use rand::rngs::StdRng;
use rand::Rng;
use std::f64::consts::{PI, TAU};

const DECORATIVE: usize = 8;
const INTERACTIVE: usize = 3;
const TARGET_SIZE: f64 = 3.0;

const IDLE_SPIN: f64 = 0.005;
const HOVER_SPIN: f64 = 0.02;
const PULSE_STEP: f64 = 0.05;

const LASER_COUNT: usize = 3;
const LASER_SPREAD: f64 = PI / 32.0;
const LASER_DECAY: f64 = 0.03;

const BLAST_RADIUS: f64 = 3.0;
const DEBRIS: usize = 30;
const DEBRIS_DECAY: f64 = 0.02;

const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Hexagon,
    Circuit,
    DataNode,
    EnergyPulse,
    DataCore,
    EnergyOrb,
    HoloShard,
}

impl Shape {
    const DECORATIVE: [Shape; 4] = [Shape::Hexagon, Shape::Circuit, Shape::DataNode, Shape::EnergyPulse];
    const INTERACTIVE: [Shape; INTERACTIVE] = [Shape::DataCore, Shape::EnergyOrb, Shape::HoloShard];

    pub fn is_interactive(&self) -> bool {
        Self::INTERACTIVE.contains(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingObject {
    pub shape: Shape,
    pub pos: Point,
    pub vel: Point,
    pub size: f64,
    pub rotation: f64,
    pub spin: f64,
    pub pulse: f64,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laser {
    pub from: Point,
    pub to: Point,
    pub life: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debris {
    pub pos: Point,
    pub vel: Point,
    pub life: f64,
    pub hot: bool,
}

#[derive(Debug, Default)]
pub struct InteractiveBackground {
    objects: Vec<FloatingObject>,
    lasers: Vec<Laser>,
    debris: Vec<Debris>,
    pointer: Option<Point>,
    score: u32,
    frame: u64,
    width: f64,
}

fn random_pos(surface: &Surface, rng: &mut StdRng) -> Point {
    Point::new(rng.gen::<f64>() * surface.width, rng.gen::<f64>() * surface.height)
}

fn random_velocity(rng: &mut StdRng) -> Point {
    Point::new((rng.gen::<f64>() - 0.5) * 0.5, (rng.gen::<f64>() - 0.5) * 0.25)
}

impl InteractiveBackground {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn objects(&self) -> &[FloatingObject] {
        &self.objects
    }

    #[cfg(test)]
    pub fn lasers(&self) -> &[Laser] {
        &self.lasers
    }

    #[cfg(test)]
    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    fn populate(&mut self, surface: &Surface, rng: &mut StdRng) {
        for i in 0..DECORATIVE {
            let rotation = rng.gen::<f64>() * TAU;
            self.objects.push(FloatingObject {
                shape: Shape::DECORATIVE[i % Shape::DECORATIVE.len()],
                pos: random_pos(surface, rng),
                vel: Point::default(),
                size: 1.5 + rng.gen::<f64>() * 2.5,
                rotation,
                spin: IDLE_SPIN,
                pulse: 0.0,
                hovered: false,
            });
        }
        for shape in Shape::INTERACTIVE {
            self.objects.push(FloatingObject {
                shape,
                pos: random_pos(surface, rng),
                vel: random_velocity(rng),
                size: TARGET_SIZE,
                rotation: 0.0,
                spin: IDLE_SPIN,
                pulse: 0.0,
                hovered: false,
            });
        }
    }

    fn fire(&mut self, target: Point, surface: &Surface, rng: &mut StdRng) {
        let origin = Point::new(surface.center().x, surface.height);
        let dx = target.x - origin.x;
        let dy = (target.y - origin.y) * crate::fx::CELL_ASPECT;
        let aim = dy.atan2(dx);
        let reach = origin.distance(target);

        for i in 0..LASER_COUNT {
            let spread = (i as f64 - (LASER_COUNT - 1) as f64 / 2.0) * LASER_SPREAD;
            self.lasers.push(Laser {
                from: origin,
                to: origin.polar(aim + spread, reach),
                life: 1.0,
            });
        }

        for index in 0..self.objects.len() {
            let object = self.objects[index];
            if !object.shape.is_interactive() || object.pos.distance(target) >= object.size * BLAST_RADIUS {
                continue;
            }
            self.explode(object.pos, rng);
            self.score += 1;
            let respawned = &mut self.objects[index];
            respawned.pos = random_pos(surface, rng);
            respawned.vel = random_velocity(rng);
        }
    }

    fn explode(&mut self, at: Point, rng: &mut StdRng) {
        for i in 0..DEBRIS {
            let angle = rng.gen::<f64>() * TAU;
            let speed = 0.2 + rng.gen::<f64>() * 0.6;
            self.debris.push(Debris {
                pos: at,
                vel: Point::default().polar(angle, speed),
                life: 1.0,
                hot: i % 2 == 1,
            });
        }
        tracing::trace!(x = at.x, y = at.y, "target destroyed");
    }
}

impl Effect for InteractiveBackground {
    fn name(&self) -> &'static str {
        "interactive-background"
    }

    fn resize(&mut self, surface: &Surface, rng: &mut StdRng) {
        self.width = surface.width;
        if self.objects.is_empty() {
            self.populate(surface, rng);
        }
        for object in &mut self.objects {
            object.pos.x = object.pos.x.clamp(0.0, surface.width);
            object.pos.y = object.pos.y.clamp(0.0, surface.height);
        }
    }

    fn input(&mut self, input: Input, surface: &Surface, rng: &mut StdRng) {
        match input {
            Input::PointerMoved(p) => self.pointer = Some(p),
            Input::Clicked(p) => {
                self.pointer = Some(p);
                self.fire(p, surface, rng);
            }
        }
    }

    fn tick(&mut self, surface: &Surface, _rng: &mut StdRng) {
        self.frame += 1;

        for object in &mut self.objects {
            object.hovered = self.pointer.is_some_and(|p| p.distance(object.pos) < object.size);
            object.spin = if object.hovered { HOVER_SPIN } else { IDLE_SPIN };
            object.rotation = (object.rotation + object.spin) % TAU;
            if object.shape == Shape::EnergyOrb {
                object.pulse += PULSE_STEP;
            }

            if object.shape.is_interactive() {
                object.pos.x += object.vel.x;
                object.pos.y += object.vel.y;
                if object.pos.x < 0.0 || object.pos.x > surface.width {
                    object.vel.x = -object.vel.x;
                }
                if object.pos.y < 0.0 || object.pos.y > surface.height {
                    object.vel.y = -object.vel.y;
                }
                object.pos.x = object.pos.x.clamp(0.0, surface.width);
                object.pos.y = object.pos.y.clamp(0.0, surface.height);
            }
        }

        for laser in &mut self.lasers {
            laser.life -= LASER_DECAY;
        }
        self.lasers.retain(|l| l.life > 0.0);

        for d in &mut self.debris {
            d.pos.x += d.vel.x;
            d.pos.y += d.vel.y;
            d.life -= DEBRIS_DECAY;
        }
        self.debris.retain(|d| d.life > 0.0);
    }

    fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme) {
        let colors = &theme.colors;

        for object in &self.objects {
            let alpha = if object.hovered { 0.9 } else { 0.5 };
            let (center, size, rot) = (object.pos, object.size, object.rotation);
            match object.shape {
                Shape::Hexagon => painter.polygon(center, size, 6, rot, colors.primary, alpha * 0.6),
                Shape::Circuit => {
                    let corner = center.polar(rot, size);
                    let elbow = Point::new(corner.x, center.y);
                    painter.path(&[center, elbow, corner], false, colors.accent, alpha * 0.6);
                    painter.dot(corner, colors.accent, alpha);
                }
                Shape::DataNode => {
                    painter.circle(center, size / 2.0, colors.secondary, alpha * 0.6);
                    for k in 0..3 {
                        let spoke = center.polar(rot + TAU * k as f64 / 3.0, size);
                        painter.line(center, spoke, colors.secondary, alpha * 0.4);
                    }
                }
                Shape::EnergyPulse => {
                    let ring = size * (0.6 + 0.4 * (self.frame as f64 * 0.05 + rot).sin().abs());
                    painter.circle(center, ring, colors.glow, alpha * 0.5);
                }
                Shape::DataCore => {
                    painter.polygon(center, size, 4, rot, colors.primary, alpha);
                    painter.polygon(center, size * 0.5, 4, -rot, colors.accent, alpha);
                }
                Shape::EnergyOrb => {
                    let glow = size * (0.8 + 0.2 * object.pulse.sin());
                    painter.circle(center, glow, colors.accent, alpha);
                    painter.circle(center, size * 0.4, colors.accent_light, alpha);
                }
                Shape::HoloShard => painter.polygon(center, size, 3, rot, colors.secondary, alpha),
            }
        }

        painter.layer();
        for laser in &self.lasers {
            painter.line(laser.from, laser.to, colors.accent, laser.life);
        }
        for d in &self.debris {
            let ink = if d.hot { colors.accent } else { WHITE };
            painter.dot(d.pos, ink, d.life);
        }

        let score = format!("SCORE: {}", self.score);
        let x = (self.width - score.len() as f64 - 1.0).max(0.0);
        painter.text(Point::new(x, 0.5), &score, colors.primary, true);
    }

    fn population(&self) -> usize {
        self.objects.len() + self.lasers.len() + self.debris.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use ratatui::layout::Rect;

    fn seeded_background() -> (InteractiveBackground, Surface, StdRng) {
        let surface = Surface::acquire(Rect::new(0, 0, 100, 40)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut bg = InteractiveBackground::new();
        bg.resize(&surface, &mut rng);
        (bg, surface, rng)
    }

    fn target(bg: &InteractiveBackground) -> FloatingObject {
        *bg.objects().iter().find(|o| o.shape.is_interactive()).unwrap()
    }

    #[test]
    fn test_populates_once() {
        let (mut bg, surface, mut rng) = seeded_background();
        assert_eq!(bg.objects().len(), DECORATIVE + INTERACTIVE);
        assert_eq!(bg.objects().iter().filter(|o| o.shape.is_interactive()).count(), 3);

        bg.resize(&surface, &mut rng);
        assert_eq!(bg.objects().len(), DECORATIVE + INTERACTIVE);
    }

    #[test]
    fn test_click_on_target_scores() {
        let (mut bg, surface, mut rng) = seeded_background();
        let hit = target(&bg);

        bg.input(Input::Clicked(hit.pos), &surface, &mut rng);
        assert!(bg.score() >= 1);
        assert_eq!(bg.lasers().len(), LASER_COUNT);
        assert_eq!(bg.debris().len() % DEBRIS, 0);
        assert!(!bg.debris().is_empty());
    }

    #[test]
    fn test_click_on_empty_space_only_fires() {
        let (mut bg, surface, mut rng) = seeded_background();
        // Park every target in one corner, then click the opposite one
        for object in bg.objects.iter_mut().filter(|o| o.shape.is_interactive()) {
            object.pos = Point::new(1.0, 1.0);
        }
        bg.input(Input::Clicked(Point::new(99.0, 39.0)), &surface, &mut rng);
        assert_eq!(bg.score(), 0);
        assert!(bg.debris().is_empty());
        assert_eq!(bg.lasers().len(), LASER_COUNT);
    }

    #[test]
    fn test_lasers_and_debris_expire() {
        let (mut bg, surface, mut rng) = seeded_background();
        let hit = target(&bg);
        bg.input(Input::Clicked(hit.pos), &surface, &mut rng);

        for _ in 0..34 {
            bg.tick(&surface, &mut rng);
        }
        assert!(bg.lasers().is_empty());

        for _ in 0..20 {
            bg.tick(&surface, &mut rng);
        }
        assert!(bg.debris().is_empty());
        assert_eq!(bg.population(), DECORATIVE + INTERACTIVE);
    }

    #[test]
    fn test_targets_stay_in_bounds() {
        let (mut bg, surface, mut rng) = seeded_background();
        for _ in 0..5000 {
            bg.tick(&surface, &mut rng);
        }
        assert!(bg.objects().iter().all(|o| surface.contains(o.pos)));
    }

    #[test]
    fn test_hover_speeds_up_rotation() {
        let (mut bg, surface, mut rng) = seeded_background();
        let decor = bg.objects()[0];
        bg.input(Input::PointerMoved(decor.pos), &surface, &mut rng);
        bg.tick(&surface, &mut rng);

        let hovered = bg.objects()[0];
        assert!(hovered.hovered);
        assert_eq!(hovered.spin, HOVER_SPIN);
    }
}
