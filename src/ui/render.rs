//! Main rendering module
//!
//! Handles rendering the complete UI including:
//! - Navbar with logo, page links and the theme badge
//! - The effects stage behind the page
//! - Page content, sliding in on navigation
//! - Popups, flash messages and the status bar

use crate::app::{App, ContactForm, Field, Hover, Popup};
use crate::content;
use crate::store::Theme;
use crate::types::{Job, Route};
use crate::ui::theme::color;
use crate::ui::{widgets, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Split the screen into navbar, content and status bar
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    let layout = Layout::vertical([
        Constraint::Length(3), // Navbar
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);
    [layout[0], layout[1], layout[2]]
}

/// The area pages and effects draw into
pub fn content_area(area: Rect) -> Rect {
    screen_layout(area)[1]
}

const SEND_TITLE: &str = "Send a Message";

/// Screen areas that glitch while the pointer is over them, in the
/// order `hover_label` names them
pub fn hover_targets(route: Route, content: Rect) -> Vec<Rect> {
    let area = page_area(content, 0);
    if area.is_empty() {
        return Vec::new();
    }
    let [_, body] = title_split(area);
    match route {
        Route::Experience => job_areas(body),
        Route::Projects => project_areas(body),
        Route::Contact => vec![contact_columns(body)[1]],
        _ => Vec::new(),
    }
}

pub fn hover_label(route: Route, index: usize) -> Option<&'static str> {
    match route {
        Route::Experience => content::JOBS.get(index).map(|job| job.title),
        Route::Projects => content::PROJECTS.get(index).map(|project| project.title),
        Route::Contact => (index == 0).then_some(SEND_TITLE),
        _ => None,
    }
}

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = app.store.current();
    let styles = Styles::from_theme(&theme);
    let effect_theme = styles.effect_theme(&theme);

    frame.render_widget(
        Block::default().style(Style::default().bg(color(styles.bg))),
        area,
    );

    let [navbar, content, status] = screen_layout(area);

    render_navbar(frame, app, &styles, &effect_theme, navbar);
    app.stage.render(frame, &effect_theme, styles.bg);
    render_page(frame, app, &styles.fade(app.transition.opacity()), &effect_theme, content);
    render_status_bar(frame, app, &styles, status);
    render_popups(frame, app, &styles, area);

    if let Some((message, is_error, _)) = &app.flash_message {
        widgets::render_flash_message(frame, message, *is_error, &styles, status);
    }
}

/// Logo, page links and the current theme
fn render_navbar(frame: &mut Frame, app: &App, styles: &Styles, theme: &Theme, area: Rect) {
    let block = Block::default()
        .style(Style::default().bg(color(styles.bg)))
        .borders(Borders::BOTTOM)
        .border_type(styles.border_type)
        .border_style(styles.border());
    frame.render_widget(block, area);

    if area.height < 2 {
        return;
    }
    let row = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let [logo_area, tabs_area, badge_area] = {
        let split = Layout::horizontal([
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(34),
        ])
        .split(row);
        [split[0], split[1], split[2]]
    };

    frame.render_widget(
        Paragraph::new(app.logo.render(styles.title(), theme)),
        logo_area,
    );

    let titles: Vec<Line> = Route::nav()
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let style = if app.route == *route {
                styles.tab_active()
            } else {
                styles.tab_inactive()
            };
            Line::styled(format!("{} {}", i + 1, route.label()), style)
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.route.nav_index().unwrap_or(usize::MAX))
        .divider(Span::styled(" │ ", styles.text_dim()))
        .highlight_style(styles.tab_active());
    frame.render_widget(tabs, tabs_area);

    let current = app.store.current();
    let mode = match (current.is_dark, styles.cyberpunk) {
        (true, true) => "◐ ⚡",
        (true, false) => "◐  ",
        (false, true) => "○ ⚡",
        (false, false) => "○  ",
    };
    let mut badge = app.badge.render(styles.heading(), theme);
    badge.spans.push(Span::raw(" "));
    for swatch in [theme.colors.primary, theme.colors.secondary, theme.colors.accent] {
        badge.spans.push(Span::styled("●", Style::default().fg(color(swatch))));
    }
    badge.spans.push(Span::styled(format!(" {} ", mode), styles.text_dim()));
    frame.render_widget(Paragraph::new(badge).alignment(Alignment::Right), badge_area);
}

/// Render the current page, shifted by the slide-in offset
fn render_page(frame: &mut Frame, app: &App, styles: &Styles, theme: &Theme, area: Rect) {
    let area = page_area(area, app.transition.offset());
    if area.is_empty() {
        return;
    }

    let title = app.title.render(styles.title(), theme);
    let hover = app.hover.as_ref();
    match app.route {
        Route::Home => render_home(frame, title, styles, area),
        Route::About => render_about(frame, title, styles, area),
        Route::Experience => render_experience(frame, title, styles, theme, hover, area),
        Route::Skills => render_skills(frame, title, styles, area),
        Route::Projects => render_projects(frame, title, styles, theme, hover, area),
        Route::Blog => render_blog(frame, title, styles, area),
        Route::Contact => render_contact(frame, title, &app.contact, styles, theme, hover, area),
    }
}

/// The page body inside the content area, shifted right by `offset`
fn page_area(content: Rect, offset: u16) -> Rect {
    Rect {
        x: content.x + 2 + offset.min(content.width),
        y: content.y + 1,
        width: content.width.saturating_sub(4 + offset),
        height: content.height.saturating_sub(1),
    }
}

fn title_split(area: Rect) -> [Rect; 2] {
    let split = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
    [split[0], split[1]]
}

/// A hover target's title, glitching while the pointer is over it
fn hover_title(
    hover: Option<&Hover>,
    index: usize,
    label: &'static str,
    base: Style,
    theme: &Theme,
) -> Line<'static> {
    match hover {
        Some(hover) if hover.index == index => hover.text.render(base, theme),
        _ => Line::styled(label, base),
    }
}

/// Title line and underline, returns the area left below
fn render_title(frame: &mut Frame, title: Line<'static>, styles: &Styles, area: Rect) -> Rect {
    let [head, rest] = title_split(area);
    let width = title.width();
    let rule = Line::styled("━".repeat(width.min(usize::from(head.width))), styles.secondary());
    frame.render_widget(Paragraph::new(vec![title, rule]), head);
    rest
}

fn render_home(frame: &mut Frame, title: Line<'static>, styles: &Styles, area: Rect) {
    let mut lines = vec![
        title.alignment(Alignment::Center),
        Line::raw(""),
        Line::styled(content::TAGLINE, styles.heading()),
        Line::raw(""),
        Line::styled(content::INTRO, styles.text()),
        Line::raw(""),
        widgets::tag_line(content::HOME_STACK, styles),
        Line::raw(""),
    ];
    for group in content::SKILL_GROUPS {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", group.category), styles.accent()),
            Span::styled(group.items.join(" · "), styles.text_dim()),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[4] ", styles.heading()),
        Span::styled("View Projects", styles.title()),
        Span::raw("    "),
        Span::styled("[6] ", styles.heading()),
        Span::styled("Contact Me", styles.title()),
    ]));

    let height = (lines.len() as u16 + 2).min(area.height);
    let body = Rect {
        y: area.y + area.height.saturating_sub(height) / 2,
        height,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}

fn render_about(frame: &mut Frame, title: Line<'static>, styles: &Styles, area: Rect) {
    let rest = render_title(frame, title, styles, area);
    let [intro, columns] = {
        let split = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(rest);
        [split[0], split[1]]
    };
    frame.render_widget(
        Paragraph::new(content::ABOUT)
            .style(styles.text())
            .wrap(Wrap { trim: true }),
        intro,
    );

    let split = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(columns);

    let mut skills = Vec::new();
    for group in content::SKILL_GROUPS {
        skills.push(Line::styled(group.category, styles.heading()));
        skills.push(widgets::tag_line(group.items, styles));
        skills.push(Line::raw(""));
    }
    frame.render_widget(
        Paragraph::new(skills)
            .wrap(Wrap { trim: false })
            .block(widgets::section_block("Skills", styles)),
        split[0],
    );

    let mut journey = Vec::new();
    for highlight in content::HIGHLIGHTS {
        journey.push(Line::from(vec![
            Span::styled(format!("{}  ", highlight.year), styles.accent()),
            Span::styled(highlight.title, styles.title()),
        ]));
        journey.push(Line::styled(format!("      {}", highlight.description), styles.text_dim()));
        journey.push(Line::raw(""));
    }
    frame.render_widget(
        Paragraph::new(journey)
            .wrap(Wrap { trim: false })
            .block(widgets::section_block("Journey", styles)),
        split[1],
    );
}

/// Rows a job takes at `width`. The trailing blank row absorbs word-wrap slack.
fn job_height(job: &Job, width: u16) -> u16 {
    let rows = |columns: usize| columns.div_ceil(usize::from(width.max(1))).max(1);
    let achievements: usize = job
        .achievements
        .iter()
        .map(|a| rows(6 + a.chars().count()))
        .sum();
    let total = 2 + rows(2 + job.description.chars().count()) + achievements + 1;
    u16::try_from(total).unwrap_or(u16::MAX)
}

fn job_areas(body: Rect) -> Vec<Rect> {
    let constraints = content::JOBS
        .iter()
        .map(|job| Constraint::Length(job_height(job, body.width)));
    Layout::vertical(constraints)
        .flex(Flex::Start)
        .split(body)
        .to_vec()
}

fn render_experience(
    frame: &mut Frame,
    title: Line<'static>,
    styles: &Styles,
    theme: &Theme,
    hover: Option<&Hover>,
    area: Rect,
) {
    let rest = render_title(frame, title, styles, area);

    for (index, (job, job_area)) in content::JOBS.iter().zip(job_areas(rest)).enumerate() {
        let mut heading = hover_title(hover, index, job.title, styles.title(), theme);
        heading.spans.insert(0, Span::styled("▸ ", styles.accent()));

        let mut lines = vec![heading];
        lines.push(Line::from(vec![
            Span::styled(format!("  {}", job.company), styles.heading()),
            Span::styled(format!("  {}", job.period), styles.text_dim()),
        ]));
        lines.push(Line::styled(format!("  {}", job.description), styles.text()));
        for achievement in job.achievements {
            lines.push(Line::from(vec![
                Span::styled("    ◆ ", styles.secondary()),
                Span::styled(*achievement, styles.text()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), job_area);
    }
}

fn render_skills(frame: &mut Frame, title: Line<'static>, styles: &Styles, area: Rect) {
    let rest = render_title(frame, title, styles, area);
    let categories = content::skill_categories();
    if categories.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, categories.len() as u32); categories.len()];
    let columns = Layout::horizontal(constraints).spacing(1).split(rest);

    for (category, column) in categories.iter().zip(columns.iter()) {
        let bar_width = usize::from(column.width.saturating_sub(4)).min(24);
        let mut lines = Vec::new();
        for skill in content::SKILLS.iter().filter(|s| s.category == *category) {
            let (filled, empty) = widgets::level_bar(skill.level, bar_width);
            lines.push(Line::from(vec![
                Span::styled(skill.name, styles.text()),
                Span::styled(format!("  {}%", skill.level), styles.text_dim()),
            ]));
            lines.push(Line::from(vec![
                Span::styled(filled, styles.accent()),
                Span::styled(empty, styles.text_dim()),
            ]));
            lines.push(Line::raw(""));
        }
        frame.render_widget(
            Paragraph::new(lines).block(widgets::section_block(*category, styles)),
            *column,
        );
    }
}

fn project_areas(body: Rect) -> Vec<Rect> {
    let constraints = vec![Constraint::Length(6); content::PROJECTS.len()];
    Layout::vertical(constraints)
        .flex(Flex::Start)
        .split(body)
        .to_vec()
}

fn render_projects(
    frame: &mut Frame,
    title: Line<'static>,
    styles: &Styles,
    theme: &Theme,
    hover: Option<&Hover>,
    area: Rect,
) {
    let rest = render_title(frame, title, styles, area);

    for (index, (project, card)) in content::PROJECTS.iter().zip(project_areas(rest)).enumerate() {
        let heading = hover_title(hover, index, project.title, styles.heading(), theme);
        let lines = vec![
            Line::styled(project.description, styles.text()),
            Line::raw(""),
            widgets::tag_line(project.tech, styles),
            Line::from(vec![
                Span::styled("View Project → ", styles.accent()),
                Span::styled(project.link, styles.text_dim()),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(widgets::section_block(heading, styles)),
            card,
        );
    }
}

fn render_blog(frame: &mut Frame, title: Line<'static>, styles: &Styles, area: Rect) {
    let rest = render_title(frame, title, styles, area);

    let mut lines = Vec::new();
    for post in content::POSTS {
        lines.push(Line::styled(post.formatted_date(), styles.text_dim()));
        lines.push(Line::styled(post.title, styles.title()));
        lines.push(Line::styled(post.excerpt, styles.text()));
        lines.push(Line::styled(
            "Read more →",
            styles.accent().add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rest);
}

fn contact_columns(body: Rect) -> [Rect; 2] {
    let split = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
        .spacing(1)
        .split(body);
    [split[0], split[1]]
}

fn render_contact(
    frame: &mut Frame,
    title: Line<'static>,
    form: &ContactForm,
    styles: &Styles,
    theme: &Theme,
    hover: Option<&Hover>,
    area: Rect,
) {
    let rest = render_title(frame, title, styles, area);
    let split = contact_columns(rest);

    let mut info = vec![
        Line::styled("Let's build something together.", styles.text()),
        Line::raw(""),
    ];
    for contact in content::CONTACTS {
        info.push(Line::from(vec![
            Span::styled(format!("{} ", contact.icon), styles.accent()),
            Span::styled(format!("{:<10}", contact.kind), styles.heading()),
            Span::styled(contact.value, styles.text()),
        ]));
    }
    frame.render_widget(
        Paragraph::new(info)
            .wrap(Wrap { trim: false })
            .block(widgets::section_block("Get in Touch", styles)),
        split[0],
    );

    let mut lines = Vec::new();
    for field in [Field::Name, Field::Email, Field::Message] {
        let focused = form.editing && form.focus == field;
        let marker = if focused { "▸ " } else { "  " };
        let mut value = vec![Span::styled(form.value(field).to_string(), styles.text())];
        if focused {
            value.push(Span::styled("_", styles.accent()));
        }
        lines.push(Line::from(vec![
            Span::styled(marker, styles.accent()),
            Span::styled(field.label(), if focused { styles.heading() } else { styles.text_dim() }),
        ]));
        let mut row = vec![Span::raw("  ")];
        row.extend(value);
        lines.push(Line::from(row));
        lines.push(Line::raw(""));
    }
    let hint = if form.editing {
        "Enter on Message to send"
    } else {
        "Press e to write a message"
    };
    lines.push(Line::styled(hint, styles.text_dim()));

    let heading = hover_title(hover, 0, SEND_TITLE, styles.heading(), theme);
    let block = widgets::section_block(heading, styles).border_style(if form.editing {
        styles.border_focused()
    } else {
        styles.border()
    });
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        split[1],
    );
}

/// Render status bar with keybindings
fn render_status_bar(frame: &mut Frame, app: &App, styles: &Styles, area: Rect) {
    let theme = app.store.current();
    let right = format!(
        "{} · {} · theme {}/{}",
        app.route.path(),
        theme.cursor_style.name,
        app.store.index() + 1,
        app.store.themes().count()
    );
    widgets::render_status_bar(frame, app.status_hint(), &right, styles, area);
}

/// Render popups if active
fn render_popups(frame: &mut Frame, app: &App, styles: &Styles, area: Rect) {
    match &app.popup {
        Popup::None => {}
        Popup::Help => widgets::render_help_popup(frame, styles, area),
        Popup::Prompt { input } => widgets::render_prompt_popup(frame, input, styles, area),
    }
}
