use crate::ui::screen::ScreenState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ScreenState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Users", title_style),
        ];

        match state.ready() {
            None => {
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled("Loading...", text_style));
            }
            Some(screen) => {
                let page = screen.visible_page();
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(format!("{} total", screen.users.len()), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(format!("{} matching", page.matched), text_style));
                spans.push(Span::styled("  │  ", separator_style));
                spans.push(Span::styled(
                    format!("page {} of {}", screen.view.page, page.total_pages),
                    text_style,
                ));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
