use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserializers::deserialize_optional_date;

/// Front matter for a content file or layout
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Layout to render through, by name without extension
    pub layout: Option<String>,

    /// Explicit output path, overrides the title-derived slug
    pub permalink: Option<String>,

    pub title: Option<String>,

    pub author: Option<String>,

    /// Free-form string, typically a summary for listings
    pub meta: Option<String>,

    /// Publication date; undated content is never listed as a post
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<DateTime<Utc>>,
}

impl FrontMatter {
    /// Declared layout, ignoring blank values
    pub fn layout(&self) -> Option<&str> {
        self.layout
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    pub fn meta(&self) -> &str {
        self.meta.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        *self == FrontMatter::default()
    }
}
