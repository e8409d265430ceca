/// Sentinel filter value that shows every card.
pub const ALL: &str = "all";
/// Animation replayed on cards a filter change shows.
pub const FILTER_ANIMATION: &str = "fadeInUp 0.5s ease-out forwards";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Category(category) => category,
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

/// Inline style for a project card under the current filter.
///
/// Before any filter has been clicked the card keeps whatever style its reveal
/// stagger gives it, so `None` is returned for shown cards.
pub fn card_style(filter: &ProjectFilter, category: &str, filter_applied: bool) -> Option<String> {
    if !filter.shows(category) {
        return Some("display: none;".to_string());
    }

    filter_applied.then(|| format!("display: block; animation: {FILTER_ANIMATION};"))
}
