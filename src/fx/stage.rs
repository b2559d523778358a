//! The set of effects mounted for the current view

use crate::fx::{CanvasHost, Effect, Painter, Pointer};
use crate::store::{Rgba, Theme, ThemeStore};
use crate::ui::theme::color;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::Canvas;
use ratatui::Frame;

#[derive(Default)]
pub struct Stage {
    hosts: Vec<CanvasHost>,
    viewport: Rect,
}

impl Stage {
    pub fn new(viewport: Rect) -> Self {
        Self {
            hosts: Vec::new(),
            viewport,
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn mount(&mut self, effect: Box<dyn Effect>, store: &ThemeStore) {
        self.hosts.push(CanvasHost::mount(effect, self.viewport, store));
    }

    /// Mount with a fixed seed
    #[cfg(test)]
    pub fn mount_seeded(&mut self, effect: Box<dyn Effect>, store: &ThemeStore, seed: u64) {
        self.hosts
            .push(CanvasHost::mount_seeded(effect, self.viewport, store, seed));
    }

    /// Release every host of the current view
    pub fn unmount(&mut self) {
        if !self.is_empty() {
            tracing::debug!(count = self.hosts.len(), "unmounting effects");
        }
        self.hosts.clear();
    }

    pub fn resize(&mut self, viewport: Rect) {
        self.viewport = viewport;
        for host in &mut self.hosts {
            host.resize(viewport);
        }
    }

    pub fn pointer(&mut self, pointer: Pointer) {
        for host in &mut self.hosts {
            host.pointer(pointer);
        }
    }

    pub fn frame(&mut self, store: &ThemeStore) {
        for host in &mut self.hosts {
            host.frame(store);
        }
    }

    #[cfg(test)]
    pub fn hosts(&self) -> &[CanvasHost] {
        &self.hosts
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Draw every mounted effect into one braille canvas over the viewport
    pub fn render(&self, frame: &mut Frame, theme: &Theme, background: Rgba) {
        let Some(surface) = self.hosts.iter().find_map(|h| h.surface().copied()) else {
            return;
        };

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(color(background))
            .x_bounds([0.0, surface.width])
            .y_bounds([0.0, surface.height])
            .paint(|ctx| {
                let mut painter = Painter::new(ctx, &surface, background);
                for host in &self.hosts {
                    host.draw(&mut painter, theme);
                    painter.layer();
                }
            });
        frame.render_widget(canvas, surface.area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::cursor::CursorTrail;
    use crate::fx::grid::CyberGrid;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn mounted(store: &ThemeStore) -> Stage {
        let mut stage = Stage::new(Rect::new(0, 3, 60, 20));
        stage.mount_seeded(Box::new(CyberGrid::new()), store, 1);
        stage.mount_seeded(Box::new(CursorTrail::new(&store.current())), store, 2);
        stage
    }

    #[test]
    fn test_unmount_releases_hosts() {
        let store = ThemeStore::default();
        let mut stage = mounted(&store);
        assert_eq!(stage.hosts().len(), 2);

        stage.unmount();
        assert!(stage.is_empty());
    }

    #[test]
    fn test_resize_reaches_every_host() {
        let store = ThemeStore::default();
        let mut stage = mounted(&store);
        stage.resize(Rect::new(0, 3, 90, 30));
        for host in stage.hosts() {
            assert_eq!(host.surface().map(|s| (s.width, s.height)), Some((90.0, 30.0)));
        }
    }

    #[test]
    fn test_pointer_feeds_cursor_trail() {
        let store = ThemeStore::default();
        let mut stage = mounted(&store);
        stage.pointer(Pointer::Moved { column: 10, row: 10 });

        let trail = stage.hosts().iter().find(|h| h.name() == "cursor").unwrap();
        assert_eq!(trail.population(), 5);
    }

    #[test]
    fn test_render_draws_into_viewport() {
        let store = ThemeStore::default();
        let mut stage = mounted(&store);
        for _ in 0..3 {
            stage.frame(&store);
        }

        let mut terminal = Terminal::new(TestBackend::new(60, 23)).unwrap();
        let theme = store.current();
        terminal
            .draw(|frame| stage.render(frame, &theme, theme.colors.background))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let drawn = (3..23)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .filter(|&(x, y)| buffer[(x, y)].symbol() != " ")
            .count();
        assert!(drawn > 0);
        // Header rows stay untouched
        assert!((0..60).all(|x| buffer[(x, 0)].symbol() == " "));
    }
}
