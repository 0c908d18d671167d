use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{
    centered_rect_by_size, control_regions, layout_regions, pages_line_rect,
};
use crate::ui::screen::{Focus, ReadyScreen, ScreenState};
use crate::ui::theme::{
    ACCENT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, ROW_STRIPE,
};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

const LOADING_TEXT: &str = "Loading...";

pub fn draw(frame: &mut Frame<'_>, state: &ScreenState) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Header::new().widget(state), regions.header);
    frame.render_widget(
        Footer::new().widget(regions.footer, state.is_loading()),
        regions.footer,
    );

    let Some(screen) = state.ready() else {
        draw_loading(frame, area);
        return;
    };

    draw_controls(frame, screen, regions.controls);
    draw_list(frame, screen, regions.list);
    draw_pages(frame, screen, regions.pages);
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect) {
    let body = layout_regions(area);
    let body = Rect {
        x: body.controls.x,
        y: body.controls.y,
        width: body.controls.width,
        height: body
            .pages
            .y
            .saturating_add(body.pages.height)
            .saturating_sub(body.controls.y),
    };
    frame.render_widget(Clear, body);
    let target = centered_rect_by_size(body, LOADING_TEXT.len() as u16, 1);
    frame.render_widget(
        Paragraph::new(LOADING_TEXT).style(Style::default().fg(HEADER_TEXT)),
        target,
    );
}

fn control_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(title, Style::default().fg(LABEL_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn selector_line(value: &str, focused: bool) -> Line<'static> {
    let value_style = Style::default().fg(HEADER_TEXT);
    if focused {
        let arrow_style = Style::default().fg(ACCENT);
        Line::from(vec![
            Span::styled("‹ ", arrow_style),
            Span::styled(value.to_string(), value_style),
            Span::styled(" ›", arrow_style),
        ])
    } else {
        Line::from(Span::styled(format!("  {}", value), value_style))
    }
}

fn draw_controls(frame: &mut Frame<'_>, screen: &ReadyScreen, area: Rect) {
    let regions = control_regions(area);
    let focus = screen.focus;

    frame.render_widget(
        Paragraph::new(selector_line(
            screen.view.country_filter.label(),
            focus == Focus::Country,
        ))
        .block(control_block("Country", focus == Focus::Country)),
        regions.country,
    );

    frame.render_widget(
        Paragraph::new(selector_line(
            screen.view.sort_mode.label(),
            focus == Focus::Sort,
        ))
        .block(control_block("Sort By", focus == Focus::Sort)),
        regions.sort,
    );

    let search_focused = focus == Focus::Search;
    let search_line = if screen.view.search_text.is_empty() && !search_focused {
        Line::from(Span::styled(
            "Search by name",
            Style::default().fg(LABEL_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        let mut spans = vec![Span::styled(
            screen.view.search_text.clone(),
            Style::default().fg(HEADER_TEXT),
        )];
        if search_focused {
            spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
        }
        Line::from(spans)
    };
    frame.render_widget(
        Paragraph::new(search_line).block(control_block("Search", search_focused)),
        regions.search,
    );

    frame.render_widget(
        Paragraph::new(selector_line(
            &screen.view.page_size.to_string(),
            focus == Focus::PageSize,
        ))
        .block(control_block("Page Size", focus == Focus::PageSize)),
        regions.page_size,
    );
}

fn draw_list(frame: &mut Frame<'_>, screen: &ReadyScreen, area: Rect) {
    let page = screen.visible_page();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if page.records.is_empty() {
        let message = if page.matched == 0 {
            "No users match"
        } else {
            "No users on this page"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(LABEL_TEXT))).block(block),
            area,
        );
        return;
    }

    let label_style = Style::default()
        .fg(LABEL_TEXT)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("USER"),
        Cell::from("COUNTRY"),
        Cell::from("CREATED AT"),
    ])
    .style(label_style);

    let rows: Vec<Row> = page
        .records
        .iter()
        .enumerate()
        .map(|(idx, user)| {
            let row = Row::new(vec![
                Cell::from(user.user_name.clone()),
                Cell::from(user.country.clone()),
                Cell::from(user.created_at_display()),
            ])
            .style(Style::default().fg(HEADER_TEXT));
            if idx % 2 == 1 {
                row.style(Style::default().fg(HEADER_TEXT).bg(ROW_STRIPE))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn draw_pages(frame: &mut Frame<'_>, screen: &ReadyScreen, area: Rect) {
    let focused = screen.focus == Focus::Pages;
    frame.render_widget(control_block("Pages", focused), area);

    let line_area = pages_line_rect(area);
    let line = screen
        .pagination()
        .line(line_area.width, screen.focused_page_cursor());
    frame.render_widget(Paragraph::new(line), line_area);
}
