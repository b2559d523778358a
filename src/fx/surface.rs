//! Drawing surfaces and the canvas lifecycle

use crate::fx::{Effect, Input, Painter, Point, Pointer};
use crate::store::{Subscription, Theme, ThemeStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

/// The region an effect draws into.
///
/// Logical dimensions are the viewport size in cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub area: Rect,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    /// Acquire a surface for the viewport; `None` when it has no area
    pub fn acquire(area: Rect) -> Option<Self> {
        if area.is_empty() {
            return None;
        }
        Some(Self {
            area,
            width: f64::from(area.width),
            height: f64::from(area.height),
        })
    }

    /// Translate a terminal position into surface coordinates
    pub fn local(&self, column: u16, row: u16) -> Option<Point> {
        let inside = column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height;
        inside.then(|| {
            Point::new(
                f64::from(column - self.area.x) + 0.5,
                f64::from(row - self.area.y) + 0.5,
            )
        })
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Owns one effect for the lifetime of a view.
///
/// The host acquires the surface, forwards resize and pointer events,
/// pushes theme changes and drives the tick. Dropping the host releases
/// all of it; nothing is registered anywhere else.
pub struct CanvasHost {
    effect: Box<dyn Effect>,
    surface: Option<Surface>,
    subscription: Subscription,
    rng: StdRng,
    frames: u64,
}

impl CanvasHost {
    pub fn mount(effect: Box<dyn Effect>, viewport: Rect, store: &ThemeStore) -> Self {
        Self::with_rng(effect, viewport, store, StdRng::from_entropy())
    }

    /// Mount with a fixed seed, for reproducible animations
    #[cfg(test)]
    pub fn mount_seeded(
        effect: Box<dyn Effect>,
        viewport: Rect,
        store: &ThemeStore,
        seed: u64,
    ) -> Self {
        Self::with_rng(effect, viewport, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(effect: Box<dyn Effect>, viewport: Rect, store: &ThemeStore, rng: StdRng) -> Self {
        let mut host = Self {
            effect,
            surface: None,
            subscription: store.subscribe(),
            rng,
            frames: 0,
        };
        host.resize(viewport);
        tracing::debug!(effect = host.name(), available = host.surface.is_some(), "mounted");
        host
    }

    pub fn name(&self) -> &'static str {
        self.effect.name()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn population(&self) -> usize {
        self.effect.population()
    }

    /// Re-acquire the surface for a new viewport size
    pub fn resize(&mut self, viewport: Rect) {
        if self.surface.map(|s| s.area) == Some(viewport) {
            return;
        }
        self.surface = Surface::acquire(viewport);
        if let Some(surface) = &self.surface {
            self.effect.resize(surface, &mut self.rng);
        }
    }

    pub fn pointer(&mut self, pointer: Pointer) {
        let Some(surface) = &self.surface else {
            return;
        };
        let input = match pointer {
            Pointer::Moved { column, row } => surface.local(column, row).map(Input::PointerMoved),
            Pointer::Clicked { column, row } => surface.local(column, row).map(Input::Clicked),
        };
        if let Some(input) = input {
            self.effect.input(input, surface, &mut self.rng);
        }
    }

    /// Run one frame: pick up theme changes, then advance the effect
    pub fn frame(&mut self, store: &ThemeStore) {
        if let Some(theme) = self.subscription.changed(store) {
            self.effect.theme_changed(&theme);
        }
        let Some(surface) = &self.surface else {
            return;
        };
        self.effect.tick(surface, &mut self.rng);
        self.frames += 1;
    }

    pub fn draw(&self, painter: &mut Painter<'_, '_>, theme: &Theme) {
        if self.surface.is_some() {
            self.effect.draw(painter, theme);
        }
    }
}

impl Drop for CanvasHost {
    fn drop(&mut self) {
        tracing::debug!(
            effect = self.name(),
            frames = self.frames(),
            population = self.population(),
            "released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::particles::ParticleField;

    #[test]
    fn test_surface_matches_viewport() {
        let surface = Surface::acquire(Rect::new(0, 3, 120, 40)).unwrap();
        assert_eq!(surface.width, 120.0);
        assert_eq!(surface.height, 40.0);
    }

    #[test]
    fn test_empty_viewport_has_no_surface() {
        assert!(Surface::acquire(Rect::new(0, 0, 0, 10)).is_none());
        assert!(Surface::acquire(Rect::new(0, 0, 10, 0)).is_none());
    }

    #[test]
    fn test_local_coordinates() {
        let surface = Surface::acquire(Rect::new(2, 3, 10, 5)).unwrap();
        assert_eq!(surface.local(2, 3), Some(Point::new(0.5, 0.5)));
        assert_eq!(surface.local(11, 7), Some(Point::new(9.5, 4.5)));
        assert_eq!(surface.local(12, 3), None);
        assert_eq!(surface.local(1, 3), None);
    }

    #[test]
    fn test_resize_updates_dimensions_exactly() {
        let store = ThemeStore::default();
        let mut host = CanvasHost::mount_seeded(
            Box::new(ParticleField::new()),
            Rect::new(0, 0, 80, 24),
            &store,
            7,
        );
        assert_eq!(host.surface().map(|s| (s.width, s.height)), Some((80.0, 24.0)));

        host.resize(Rect::new(0, 0, 133, 41));
        assert_eq!(host.surface().map(|s| (s.width, s.height)), Some((133.0, 41.0)));
    }

    #[test]
    fn test_missing_surface_skips_frames() {
        let store = ThemeStore::default();
        let mut host = CanvasHost::mount_seeded(
            Box::new(ParticleField::new()),
            Rect::new(0, 0, 0, 0),
            &store,
            7,
        );

        host.frame(&store);
        host.pointer(Pointer::Clicked { column: 0, row: 0 });
        assert_eq!(host.frames(), 0);
        assert_eq!(host.population(), 0);

        host.resize(Rect::new(0, 0, 60, 20));
        host.frame(&store);
        assert_eq!(host.frames(), 1);
        assert!(host.population() > 0);
    }
}
