//! Reusable UI widgets
//!
//! Popups, the status bar, flash messages and the small pieces the
//! pages share (section blocks, tag rows, level bars).

use crate::ui::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a centered popup dialog
pub fn render_popup(
    frame: &mut Frame,
    title: &str,
    content: Vec<Line>,
    buttons: &[(&str, &str)], // (label, key)
    styles: &Styles,
    area: Rect,
) {
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = (content.len() as u16 + 6).min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(styles.title())
        .borders(Borders::ALL)
        .border_type(styles.border_type)
        .border_style(styles.border_focused())
        .style(styles.block_style());
    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(4),
        height: popup_area.height.saturating_sub(4),
    };
    let body = Paragraph::new(content)
        .style(styles.block_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);

    if buttons.is_empty() || popup_area.height < 4 {
        return;
    }
    let button_area = Rect {
        x: popup_area.x + 2,
        y: popup_area.y + popup_area.height - 2,
        width: popup_area.width.saturating_sub(4),
        height: 1,
    };
    let spans: Vec<Span> = buttons
        .iter()
        .enumerate()
        .flat_map(|(i, (label, key))| {
            let mut spans = vec![
                Span::styled("[", styles.text_dim()),
                Span::styled(*key, styles.heading()),
                Span::styled("] ", styles.text_dim()),
                Span::styled(*label, styles.text()),
            ];
            if i < buttons.len() - 1 {
                spans.push(Span::raw("    "));
            }
            spans
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        button_area,
    );
}

/// Key binding reference
pub fn render_help_popup(frame: &mut Frame, styles: &Styles, area: Rect) {
    let bindings = [
        ("1-6", "Go to page"),
        ("Tab / S-Tab", "Next / previous page"),
        (":", "Go to path"),
        ("t", "Cycle theme"),
        ("d", "Toggle dark mode"),
        ("x", "Toggle cyberpunk mode"),
        ("c", "Cycle cursor style"),
        ("b", "Toggle interactive background"),
        ("e", "Edit contact form"),
        ("click", "Fire"),
        ("q", "Quit"),
    ];
    let content: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:>12}  ", key), styles.heading()),
                Span::styled(*action, styles.text()),
            ])
        })
        .collect();

    render_popup(frame, "Keys", content, &[("Close", "Esc")], styles, area);
}

/// Path prompt with the typed input
pub fn render_prompt_popup(frame: &mut Frame, input: &str, styles: &Styles, area: Rect) {
    let content = vec![
        Line::styled("Enter a path, e.g. /about", styles.text_dim()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("> ", styles.accent()),
            Span::styled(input, styles.text()),
            Span::styled("_", styles.accent()),
        ]),
    ];

    render_popup(frame, "Go to", content, &[("Go", "Enter"), ("Cancel", "Esc")], styles, area);
}

/// Render a flash message on the last line of `area`
pub fn render_flash_message(
    frame: &mut Frame,
    message: &str,
    is_error: bool,
    styles: &Styles,
    area: Rect,
) {
    let style = if is_error { styles.error() } else { styles.success() };
    let prefix = if is_error { "✗ " } else { "✓ " };

    let flash_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(Clear, flash_area);
    let flash = Paragraph::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(message, style),
    ]))
    .style(styles.block_style());
    frame.render_widget(flash, flash_area);
}

/// Render status bar at bottom
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    styles: &Styles,
    area: Rect,
) {
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };
    frame.render_widget(Clear, status_area);
    frame.render_widget(
        Paragraph::new(left_content).style(styles.text_dim()),
        status_area,
    );

    let right_len = right_content.chars().count() as u16;
    let right_area = Rect {
        x: status_area.x + status_area.width.saturating_sub(right_len + 1),
        y: status_area.y,
        width: (right_len + 1).min(status_area.width),
        height: status_area.height,
    };
    frame.render_widget(
        Paragraph::new(right_content).style(styles.accent()),
        right_area,
    );
}

/// Bordered block for a page section
pub fn section_block<'a>(title: impl Into<Line<'a>>, styles: &Styles) -> Block<'a> {
    let mut title = title.into().patch_style(styles.heading());
    title.spans.insert(0, Span::raw(" "));
    title.spans.push(Span::raw(" "));
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(styles.border_type)
        .border_style(styles.border())
}

/// A row of tags, like ` React ` ` Node.js `
pub fn tag_line<'a>(items: &[&'a str], styles: &Styles) -> Line<'a> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {} ", item), styles.tag()));
    }
    Line::from(spans)
}

/// Horizontal bar filled to `percent`
pub fn level_bar(percent: u8, width: usize) -> (String, String) {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect { x, y, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ThemeStore;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 20, area);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered_rect(40, 20, area), area);
    }

    #[test]
    fn test_tag_line() {
        let styles = Styles::from_theme(&ThemeStore::default().current());
        let line = tag_line(&["Rust", "Go"], &styles);
        assert_eq!(line.width(), " Rust ".len() + 1 + " Go ".len());
    }

    #[test]
    fn test_level_bar() {
        let (filled, empty) = level_bar(85, 20);
        assert_eq!(filled.chars().count(), 17);
        assert_eq!(empty.chars().count(), 3);

        let (filled, empty) = level_bar(0, 10);
        assert_eq!((filled.chars().count(), empty.chars().count()), (0, 10));
    }
}
