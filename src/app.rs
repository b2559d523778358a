//! Application state and event handling
//!
//! This is the core of cyberfolio, managing:
//! - The theme store and the current route
//! - The effects mounted for the current page
//! - Keyboard and mouse input
//! - Per-frame animation state

use crate::config::Config;
use crate::content;
use crate::fx::background::InteractiveBackground;
use crate::fx::cursor::CursorTrail;
use crate::fx::glitch::{CyberText, GlitchText, Intensity};
use crate::fx::grid::CyberGrid;
use crate::fx::particles::ParticleField;
use crate::fx::transition::PageTransition;
use crate::fx::{Pointer, Stage};
use crate::store::ThemeStore;
use crate::types::Route;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::{Position, Rect};
use std::time::{Duration, Instant};

const FLASH_FOR: Duration = Duration::from_secs(3);
const TITLE_DELAY: Duration = Duration::from_millis(500);
const HOVER_HOLD: Duration = Duration::from_secs(2);
const HOVER_INTERVAL: Duration = Duration::from_secs(4);

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub route: Route,
    pub config: Config,
    pub store: ThemeStore,
    pub stage: Stage,
    pub interactive_background: bool,

    // Text animations
    pub transition: PageTransition,
    pub title: GlitchText,
    pub logo: CyberText,
    pub badge: GlitchText,
    pub hover: Option<Hover>,

    pub popup: Popup,
    pub contact: ContactForm,

    // Flash message (temporary feedback)
    pub flash_message: Option<(String, bool, Instant)>, // (message, is_error, timestamp)

    rng: StdRng,
}

/// The page item under the pointer and its glitching title
#[derive(Debug, Clone)]
pub struct Hover {
    pub index: usize,
    pub text: GlitchText,
}

/// Popup overlay state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Popup {
    #[default]
    None,
    Help,
    Prompt { input: String },
}

/// Application state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Help,
    Prompt,
    EditingContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn next(&self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// The contact page form. Nothing is sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Field,
    pub editing: bool,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Heading shown at the top of a page
pub fn page_title(route: Route) -> String {
    match route {
        Route::Home => content::OWNER.to_string(),
        Route::About => "ABOUT ME".to_string(),
        other => other.label().to_uppercase(),
    }
}

impl App {
    /// Create the app for a terminal whose content area is `viewport`
    pub fn new(config: Config, viewport: Rect) -> Self {
        let store = config.theme_store();
        let route = config.start_route();
        let badge_text = store.current().name.to_uppercase();

        let mut app = Self {
            should_quit: false,
            route,
            interactive_background: config.effects.interactive_background,
            transition: PageTransition::new(config.effects.transitions),
            title: GlitchText::new(page_title(route), Intensity::High).with_delay(TITLE_DELAY),
            logo: CyberText::new("<AP/>"),
            badge: GlitchText::new(badge_text, Intensity::Low),
            hover: None,
            config,
            store,
            stage: Stage::new(viewport),
            popup: Popup::None,
            contact: ContactForm::default(),
            flash_message: None,
            rng: StdRng::from_entropy(),
        };
        app.mount_effects();
        app
    }

    /// Get current app state based on popup and form
    pub fn state(&self) -> AppState {
        match self.popup {
            Popup::Help => AppState::Help,
            Popup::Prompt { .. } => AppState::Prompt,
            Popup::None if self.contact.editing => AppState::EditingContact,
            Popup::None => AppState::Normal,
        }
    }

    /// Mount the effects for the current route, releasing the previous ones
    fn mount_effects(&mut self) {
        self.stage.unmount();
        let options = self.config.effects.clone();

        if self.route == Route::Home {
            if options.grid {
                self.stage.mount(Box::new(CyberGrid::new()), &self.store);
            }
            if options.particles {
                self.stage.mount(Box::new(ParticleField::new()), &self.store);
            }
        } else if self.interactive_background {
            self.stage.mount(Box::new(InteractiveBackground::new()), &self.store);
        } else if options.grid {
            self.stage.mount(Box::new(CyberGrid::new()), &self.store);
        }

        if options.cursor_trail {
            let trail = CursorTrail::new(&self.store.current());
            self.stage.mount(Box::new(trail), &self.store);
        }
    }

    /// Show another page. Unknown or unchanged routes do nothing.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = self.route.path(), to = route.path(), "navigate");

        self.route = route;
        self.contact.editing = false;
        self.hover = None;
        self.title = GlitchText::new(page_title(route), Intensity::High).with_delay(TITLE_DELAY);
        self.transition.restart();
        self.mount_effects();
    }

    /// Navigate by path, as typed into the prompt
    pub fn navigate_to_path(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.navigate(route),
            None => {
                tracing::debug!(path, "no route for path");
                self.show_flash(&format!("No page at {}", path.trim()), true);
            }
        }
    }

    /// The content area changed size
    pub fn resize(&mut self, viewport: Rect) {
        self.stage.resize(viewport);
        self.hover = None;
    }

    /// Advance every animation by one frame
    pub fn tick(&mut self, dt: Duration) {
        let cyberpunk = self.store.current().is_cyberpunk;

        self.stage.frame(&self.store);
        if !self.transition.is_done() {
            self.transition.tick(dt);
        }
        self.title.tick(dt, cyberpunk, &mut self.rng);
        self.badge.tick(dt, cyberpunk, &mut self.rng);
        self.logo.tick(dt, &mut self.rng);
        if let Some(hover) = &mut self.hover {
            hover.text.tick(dt, true, &mut self.rng);
        }

        if let Some((_, _, at)) = &self.flash_message {
            if at.elapsed() >= FLASH_FOR {
                self.flash_message = None;
            }
        }
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.state() {
            AppState::Help => self.handle_help_key(key),
            AppState::Prompt => self.handle_prompt_key(key),
            AppState::EditingContact => self.handle_form_key(key),
            AppState::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(route) = Route::nav().get(index) {
                    self.navigate(*route);
                }
            }
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::BackTab => self.navigate(self.route.prev()),
            KeyCode::Char(':') => {
                self.popup = Popup::Prompt {
                    input: String::new(),
                }
            }
            KeyCode::Char('?') => self.popup = Popup::Help,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('d') => {
                self.store.toggle_dark();
                let mode = if self.store.current().is_dark { "Dark" } else { "Light" };
                self.show_flash(&format!("{} mode", mode), false);
            }
            KeyCode::Char('x') => {
                self.store.toggle_cyberpunk();
                let state = if self.store.current().is_cyberpunk { "on" } else { "off" };
                self.show_flash(&format!("Cyberpunk mode {}", state), false);
            }
            KeyCode::Char('c') => {
                self.store.cycle_cursor_style();
                let name = self.store.current().cursor_style.name;
                self.show_flash(&format!("Cursor: {}", name), false);
            }
            KeyCode::Char('b') => {
                self.interactive_background = !self.interactive_background;
                self.mount_effects();
                let state = if self.interactive_background { "on" } else { "off" };
                self.show_flash(&format!("Interactive background {}", state), false);
            }
            KeyCode::Char('e') if self.route == Route::Contact => {
                self.contact.editing = true;
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            self.popup = Popup::None;
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Popup::Prompt { input } = &mut self.popup else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => self.popup = Popup::None,
            KeyCode::Enter => {
                let path = std::mem::take(input);
                self.popup = Popup::None;
                self.navigate_to_path(&path);
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.contact.editing = false,
            KeyCode::Tab => self.contact.focus = self.contact.focus.next(),
            KeyCode::BackTab => self.contact.focus = self.contact.focus.prev(),
            KeyCode::Backspace => {
                self.contact.focused_mut().pop();
            }
            KeyCode::Enter if self.contact.focus == Field::Message => self.send_message(),
            KeyCode::Enter => self.contact.focus = self.contact.focus.next(),
            KeyCode::Char(c) => self.contact.focused_mut().push(c),
            _ => {}
        }
    }

    fn send_message(&mut self) {
        if !self.contact.is_complete() {
            self.show_flash("Please fill in every field", true);
            return;
        }
        let name = self.contact.name.trim().to_string();
        tracing::info!("contact form submitted");
        self.contact = ContactForm::default();
        self.show_flash(&format!("Thanks {}, message received", name), false);
    }

    fn cycle_theme(&mut self) {
        self.store.cycle();
        let name = self.store.current().name;
        self.badge = GlitchText::new(name.to_uppercase(), Intensity::Low);
        self.show_flash(&format!("Theme: {}", name), false);
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pointer = match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Pointer::Moved {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::Down(MouseButton::Left) => Pointer::Clicked {
                column: mouse.column,
                row: mouse.row,
            },
            _ => return,
        };
        if let Pointer::Moved { column, row } = pointer {
            self.update_hover(Position::new(column, row));
        }
        self.stage.pointer(pointer);
    }

    /// Start a glitch on the item the pointer entered, stop it on leave
    fn update_hover(&mut self, position: Position) {
        let index = ui::hover_targets(self.route, self.stage.viewport())
            .iter()
            .position(|area| area.contains(position));
        if self.hover.as_ref().map(|h| h.index) == index {
            return;
        }

        self.hover = index.and_then(|index| {
            let label = ui::hover_label(self.route, index)?;
            let mut text = GlitchText::new(label, Intensity::Low).with_interval(HOVER_INTERVAL);
            text.trigger(HOVER_HOLD, &mut self.rng);
            Some(Hover { index, text })
        });
    }

    /// Hint line for the status bar
    pub fn status_hint(&self) -> &'static str {
        match self.state() {
            AppState::Help => "[Esc] Close",
            AppState::Prompt => "[Enter] Go  [Esc] Cancel",
            AppState::EditingContact => "[Tab] Next field  [Enter] Send  [Esc] Done",
            AppState::Normal if self.route == Route::Contact => {
                "[1-6] Pages  [e] Edit form  [t] Theme  [?] Keys  [q] Quit"
            }
            AppState::Normal => "[1-6] Pages  [:] Go to  [t] Theme  [c] Cursor  [?] Keys  [q] Quit",
        }
    }

    fn show_flash(&mut self, message: &str, is_error: bool) {
        self.flash_message = Some((message.into(), is_error, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), Rect::new(0, 3, 80, 20))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn host_names(app: &App) -> Vec<&'static str> {
        app.stage.hosts().iter().map(|h| h.name()).collect()
    }

    #[test]
    fn test_home_mounts_grid_particles_and_cursor() {
        let app = app();
        assert_eq!(app.route, Route::Home);
        assert_eq!(host_names(&app), vec!["grid", "particles", "cursor"]);
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.route, Route::About);
        assert_eq!(host_names(&app), vec!["grid", "cursor"]);

        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.route, Route::Contact);
    }

    #[test]
    fn test_tab_cycles_navbar() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.route, Route::Contact);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_prompt_reaches_unlinked_skills_page() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        assert_eq!(app.state(), AppState::Prompt);

        type_text(&mut app, "/skills");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Skills);
        assert_eq!(app.popup, Popup::None);
    }

    #[test]
    fn test_prompt_unknown_path_stays_put() {
        let mut app = app();
        press(&mut app, KeyCode::Char(':'));
        type_text(&mut app, "/nowhere");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Home);
        assert!(matches!(&app.flash_message, Some((_, true, _))));
    }

    #[test]
    fn test_theme_keys_update_store() {
        let mut app = app();
        let first = app.store.current().colors.primary;

        press(&mut app, KeyCode::Char('t'));
        assert_ne!(app.store.current().colors.primary, first);
        assert_eq!(app.badge.text(), "MATRIX GREEN");

        press(&mut app, KeyCode::Char('d'));
        assert!(!app.store.current().is_dark);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.store.current().is_cyberpunk);
    }

    #[test]
    fn test_interactive_background_toggle_remounts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(host_names(&app), vec!["interactive-background", "cursor"]);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(host_names(&app), vec!["grid", "cursor"]);
    }

    #[test]
    fn test_contact_form_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state(), AppState::Normal);

        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state(), AppState::EditingContact);

        // Letters go to the form, not the key bindings
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ada@example.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.contact.focus, Field::Message);
        assert_eq!(app.route, Route::Contact);

        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.flash_message, Some((_, true, _))));

        type_text(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        assert!(matches!(&app.flash_message, Some((_, false, _))));
        assert!(app.contact.name.is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::Normal);
    }

    #[test]
    fn test_pointer_reaches_cursor_trail() {
        let mut app = app();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 8,
            modifiers: KeyModifiers::NONE,
        });
        let trail = app.stage.hosts().iter().find(|h| h.name() == "cursor").unwrap();
        assert!(trail.population() > 0);
    }

    #[test]
    fn test_resize_updates_stage() {
        let mut app = app();
        app.resize(Rect::new(0, 3, 120, 30));
        assert_eq!(app.stage.viewport(), Rect::new(0, 3, 120, 30));
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    fn move_to(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_hovering_a_project_glitches_its_title() {
        let mut app = app();
        app.navigate(Route::Projects);
        let targets = ui::hover_targets(Route::Projects, app.stage.viewport());
        let first = targets[0];

        move_to(&mut app, first.x + 1, first.y);
        let hover = app.hover.as_ref().unwrap();
        assert_eq!(hover.index, 0);
        assert!(hover.text.is_glitching());
        assert_eq!(hover.text.text(), content::PROJECTS[0].title);

        move_to(&mut app, first.x + 2, first.y);
        assert_eq!(app.hover.as_ref().map(|h| h.index), Some(0));

        move_to(&mut app, 0, 0);
        assert!(app.hover.is_none());
    }

    #[test]
    fn test_hover_glitch_settles_then_clears_on_navigate() {
        let mut app = app();
        app.navigate(Route::Contact);
        let form = ui::hover_targets(Route::Contact, app.stage.viewport())[0];
        move_to(&mut app, form.x + 1, form.y + 1);
        assert!(app.hover.is_some());

        app.tick(HOVER_HOLD);
        assert!(!app.hover.as_ref().unwrap().text.is_glitching());

        app.navigate(Route::Blog);
        assert!(app.hover.is_none());
    }

    #[test]
    fn test_pages_without_targets_never_hover() {
        let mut app = app();
        move_to(&mut app, 20, 10);
        assert!(app.hover.is_none());
    }
}
