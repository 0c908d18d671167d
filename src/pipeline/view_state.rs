use crate::config::DEFAULT_PAGE_SIZE;

/// Country selector value. `All` is the "no filter" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountryFilter {
    #[default]
    All,
    Only(String),
}

impl CountryFilter {
    pub fn label(&self) -> &str {
        match self {
            CountryFilter::All => "All countries",
            CountryFilter::Only(country) => country,
        }
    }

    /// Step through `[All, options...]`, wrapping at both ends.
    ///
    /// A filter that is no longer among `options` restarts from `All`.
    pub fn cycle(&self, options: &[&str], forward: bool) -> CountryFilter {
        let current = match self {
            CountryFilter::All => 0,
            CountryFilter::Only(country) => options
                .iter()
                .position(|candidate| candidate == country)
                .map(|idx| idx + 1)
                .unwrap_or(0),
        };
        match cycle_index(options.len() + 1, current, forward) {
            0 => CountryFilter::All,
            idx => CountryFilter::Only(options[idx - 1].to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    None,
    CreationTimeAscending,
    CreationTimeDescending,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::None,
        SortMode::CreationTimeAscending,
        SortMode::CreationTimeDescending,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "None",
            SortMode::CreationTimeAscending => "Creation Time (Ascending)",
            SortMode::CreationTimeDescending => "Creation Time (Descending)",
        }
    }

    pub fn cycle(self, forward: bool) -> SortMode {
        let current = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[cycle_index(Self::ALL.len(), current, forward)]
    }
}

/// User-adjustable parameters that drive the shaping pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub country_filter: CountryFilter,
    pub sort_mode: SortMode,
    pub search_text: String,
    /// 1-based. Not clamped against the page count.
    pub page: usize,
    pub page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            country_filter: CountryFilter::All,
            sort_mode: SortMode::None,
            search_text: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Next page size from `options`, wrapping. An unknown current size restarts
/// at the first option.
pub fn cycle_page_size(current: usize, options: &[usize], forward: bool) -> usize {
    if options.is_empty() {
        return current;
    }
    match options.iter().position(|size| *size == current) {
        Some(idx) => options[cycle_index(options.len(), idx, forward)],
        None => options[0],
    }
}

fn cycle_index(len: usize, current: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
