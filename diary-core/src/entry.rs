use serde::{Deserialize, Serialize};

/// A single diary record.
///
/// There is no id: two entries are "the same" when both `date` and `content`
/// are equal, which is what [`Entry::matches`] checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    pub content: String,
}

impl Entry {
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
        }
    }

    pub fn matches(&self, date: &str, content: &str) -> bool {
        self.date == date && self.content == content
    }
}
