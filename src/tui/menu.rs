use crate::model::todo::StatusFilter;

/// Status filter dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMenu {
    #[default]
    Closed,
    Open {
        /// Index into `StatusFilter::ALL`
        highlighted: usize,
    },
}

impl FilterMenu {
    pub fn is_open(&self) -> bool {
        matches!(self, FilterMenu::Open { .. })
    }

    /// Open with the active filter highlighted
    pub fn open(&mut self, current: StatusFilter) {
        *self = FilterMenu::Open {
            highlighted: current.index(),
        };
    }

    pub fn close(&mut self) {
        *self = FilterMenu::Closed;
    }

    /// Move the highlight, wrapping at both ends
    pub fn move_by(&mut self, delta: isize) {
        if let FilterMenu::Open { highlighted } = self {
            let n = StatusFilter::ALL.len() as isize;
            *highlighted = (*highlighted as isize + delta).rem_euclid(n) as usize;
        }
    }

    pub fn highlighted(&self) -> Option<StatusFilter> {
        match self {
            FilterMenu::Open { highlighted } => StatusFilter::ALL.get(*highlighted).copied(),
            FilterMenu::Closed => None,
        }
    }

    /// Close and return the highlighted filter
    pub fn select(&mut self) -> Option<StatusFilter> {
        let chosen = self.highlighted();
        self.close();
        chosen
    }
}
