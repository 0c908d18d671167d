use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRegions {
    pub header: Rect,
    pub controls: Rect,
    pub list: Rect,
    pub pages: Rect,
    pub footer: Rect,
}

/// Selector boxes inside the controls row, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegions {
    pub country: Rect,
    pub sort: Rect,
    pub search: Rect,
    pub page_size: Rect,
}

pub fn layout_regions(area: Rect) -> ScreenRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenRegions {
        header: chunks[0],
        controls: chunks[1],
        list: chunks[2],
        pages: chunks[3],
        footer: chunks[4],
    }
}

pub fn control_regions(area: Rect) -> ControlRegions {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
        ])
        .split(area);

    ControlRegions {
        country: chunks[0],
        sort: chunks[1],
        search: chunks[2],
        page_size: chunks[3],
    }
}

/// Area the pagination line is drawn into: inside the border, one column in.
pub fn pages_line_rect(pages: Rect) -> Rect {
    Rect {
        x: pages.x.saturating_add(2),
        y: pages.y.saturating_add(1),
        width: pages.width.saturating_sub(4),
        height: pages.height.saturating_sub(2).min(1),
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
