use serde::Deserialize;

/// Selector value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

/// Category selector of the board filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value. Empty and `all` select every category.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | ALL_CATEGORIES => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(cat) => cat,
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => cat == category,
        }
    }
}

/// Raw filter inputs as they arrive from the search box and selector.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FilterParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub cat: Option<String>,
}

impl FilterParams {
    /// True when neither the search box nor the selector was submitted.
    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.cat.is_none()
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// Normalized filter: lowercase trimmed query plus category selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: String,
    pub category: CategoryFilter,
}

impl JobFilter {
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            category: CategoryFilter::parse(category),
        }
    }
}

impl From<&FilterParams> for JobFilter {
    fn from(params: &FilterParams) -> Self {
        JobFilter::new(
            params.query(),
            params.cat.as_deref().unwrap_or_default(),
        )
    }
}
