//! Numbered page selector.
//!
//! One indicator per page, `1..=total`. The current page is highlighted and
//! inert; every other indicator reports its own number when activated.

use crate::ui::theme::{CURRENT_PAGE, PAGE_LINK};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::ops::RangeInclusive;

const GAP: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current: usize,
    total: usize,
}

impl Pagination {
    /// `total` below 1 is raised to 1. `current` may be out of range, in
    /// which case no indicator is highlighted.
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total: total.max(1),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn indicators(&self) -> Vec<PageIndicator> {
        (1..=self.total)
            .map(|number| PageIndicator {
                number,
                is_current: number == self.current,
            })
            .collect()
    }

    /// Fire `on_page_selected(number)` if `number` is an existing indicator
    /// other than the current one. Returns whether the callback ran.
    pub fn activate(&self, number: usize, on_page_selected: impl FnOnce(usize)) -> bool {
        if number == 0 || number > self.total || number == self.current {
            return false;
        }
        on_page_selected(number);
        true
    }

    /// Indicators that fit in `width` columns.
    ///
    /// The window starts at page 1 when the anchor fits there, otherwise it
    /// ends at the anchor and fills leftwards. The anchor is the keyboard
    /// cursor when present, else the current page.
    pub fn window(&self, width: u16, cursor: Option<usize>) -> RangeInclusive<usize> {
        let width = usize::from(width);
        let anchor = cursor.unwrap_or(self.current).clamp(1, self.total);

        let mut end = 1;
        let mut used = indicator_width(1);
        while end < self.total {
            let next = used + GAP + indicator_width(end + 1);
            if next > width {
                break;
            }
            used = next;
            end += 1;
        }
        if anchor <= end {
            return 1..=end;
        }

        let mut start = anchor;
        let mut used = indicator_width(anchor);
        while start > 1 {
            let next = used + GAP + indicator_width(start - 1);
            if next > width {
                break;
            }
            used = next;
            start -= 1;
        }
        start..=anchor
    }

    /// Indicator drawn at `(column, row)` when [`Pagination::line`] is
    /// rendered into `area` with the same `cursor`.
    pub fn indicator_at(
        &self,
        area: Rect,
        cursor: Option<usize>,
        column: u16,
        row: u16,
    ) -> Option<usize> {
        if row != area.y || column < area.x {
            return None;
        }
        let offset = usize::from(column - area.x);
        let mut x = 0;
        for number in self.window(area.width, cursor) {
            let width = indicator_width(number);
            if offset >= x && offset < x + width {
                return Some(number);
            }
            x += width + GAP;
        }
        None
    }

    /// Indicators of the window for `width`. `cursor` is the indicator under
    /// keyboard focus, if the control has it, and is drawn reversed.
    pub fn line(&self, width: u16, cursor: Option<usize>) -> Line<'static> {
        let window = self.window(width, cursor);
        let mut spans = Vec::new();
        for indicator in self.indicators() {
            if !window.contains(&indicator.number) {
                continue;
            }
            if indicator.number > *window.start() {
                spans.push(Span::raw(" ".repeat(GAP)));
            }
            let mut style = if indicator.is_current {
                Style::default()
                    .fg(CURRENT_PAGE)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(PAGE_LINK)
                    .add_modifier(Modifier::UNDERLINED)
            };
            if cursor == Some(indicator.number) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", indicator.number), style));
        }
        Line::from(spans)
    }
}

fn indicator_width(number: usize) -> usize {
    number.to_string().len() + 2
}
