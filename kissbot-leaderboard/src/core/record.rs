use serde::{Deserialize, Serialize};

use crate::core::Category;

/// Target markup of a rendered record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    /// No markup
    #[default]
    Plain,
    /// Discord markdown (links, bold)
    Discord,
}

/// How a record should render itself
#[derive(Debug, Clone, Default)]
pub struct DisplayContext {
    pub format: StringFormat,

    /// Categories the record is shown for, when rendering category-specific
    /// scores. `None` renders the full score.
    pub categories: Option<Vec<Category>>,
}

impl DisplayContext {
    pub fn new(format: StringFormat, categories: Option<Vec<Category>>) -> Self {
        Self { format, categories }
    }

    pub fn plain() -> Self {
        Self::new(StringFormat::Plain, None)
    }

    pub fn discord() -> Self {
        Self::new(StringFormat::Discord, None)
    }
}

/// A ranked leaderboard record, provided by the repository layer
pub trait Record {
    fn to_display_string(&self, context: &DisplayContext) -> String;
}

/// A record paired with every category it currently holds
///
/// `record` is `None` for categories nobody has claimed yet.
#[derive(Debug, Clone)]
pub struct CategoryRecord<R> {
    pub record: Option<R>,
    pub categories: Vec<Category>,
}

impl<R> CategoryRecord<R> {
    pub fn new(record: Option<R>, categories: Vec<Category>) -> Self {
        Self { record, categories }
    }

    /// Sorts the held categories by their natural order
    pub fn sort_categories(&mut self) {
        self.categories.sort();
    }

    /// First held category, the key records are ordered by
    pub fn first_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}
