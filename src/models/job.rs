use garde::Validate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Categories offered by the job form and the category filter.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, EnumString, EnumIter, Display, PartialEq, Eq,
)]
pub enum Category {
    #[default]
    #[strum(serialize = "IT")]
    #[serde(rename = "IT")]
    It,
    Sales,
    Marketing,
    Finance,
    Design,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    Hr,
}

impl Category {
    /// All selector values, in display order.
    pub fn names() -> Vec<String> {
        Category::iter().map(|c| c.to_string()).collect()
    }
}

/// A single job posting as held in the board and stored in the snapshot.
///
/// Field names are the snapshot's wire format; `updated` is omitted until the
/// first edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: String,
    pub category: String,
    #[serde(default)]
    pub desc: String,
    pub posted: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<i64>,
}

impl JobRecord {
    /// Uppercased first character of the company, used as the card logo.
    pub fn initial(&self) -> String {
        self.company
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "J".to_string())
    }
}

/// User-entered values for a job, before they become a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
pub struct JobDraft {
    #[garde(length(min = 1))]
    pub title: String,

    #[garde(length(min = 1))]
    pub company: String,

    #[garde(skip)]
    pub category: String,

    #[garde(skip)]
    pub desc: String,
}

impl JobDraft {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        category: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            category: category.into(),
            desc: desc.into(),
        }
    }

    /// Trim the free-text fields. The category comes from a selector and is
    /// kept verbatim.
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            category: self.category,
            desc: self.desc.trim().to_string(),
        }
    }
}
