//! Style profile model
//!
//! A [`StyleProfile`] maps a tag name to the ordered records of every
//! occurrence of that tag in a template. Profiles are built once per template
//! and then only read.

use indexmap::{IndexMap, IndexSet};

use crate::properties::to_kebab_case;

/// The measured (or authored) presentation of one template occurrence of a tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRecord {
    /// Property name (kebab-case) to value, in measurement order
    pub styles: IndexMap<String, String>,

    /// Literal class list of the occurrence
    pub class_names: IndexSet<String>,

    /// Raw `style` attribute text of the occurrence
    pub inline_style_text: String,

    /// Zero-based position among same-tag occurrences
    pub ordinal: usize,
}

impl StyleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from property/value pairs. Names may be camelCase.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = Self::new();
        for (property, value) in pairs {
            record.set_style(property, value);
        }
        record
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_names.insert(class_name.to_string());
        self
    }

    pub fn with_inline_style(mut self, text: &str) -> Self {
        self.inline_style_text = text.to_string();
        self
    }

    pub fn with_ordinal(mut self, ordinal: usize) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles
            .insert(to_kebab_case(property), value.trim().to_string());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }
}

/// Tag name to ordered style records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProfile {
    entries: IndexMap<String, Vec<StyleRecord>>,
}

impl StyleProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile with one record per tag, the shape built-in templates use
    pub fn from_literal<'a, T, P>(tags: T) -> Self
    where
        T: IntoIterator<Item = (&'a str, P)>,
        P: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut profile = Self::new();
        for (tag, pairs) in tags {
            profile.push(tag, StyleRecord::from_pairs(pairs));
        }
        profile
    }

    /// Replace the records of a tag
    pub fn insert(&mut self, tag: &str, records: Vec<StyleRecord>) {
        self.entries.insert(tag.to_lowercase(), records);
    }

    /// Append a record to a tag, assigning it the next ordinal
    pub fn push(&mut self, tag: &str, mut record: StyleRecord) {
        let records = self.entries.entry(tag.to_lowercase()).or_default();
        record.ordinal = records.len();
        records.push(record);
    }

    /// Records of a tag in document order; `Some(&[])` for a watched tag that
    /// never occurred
    pub fn get(&self, tag: &str) -> Option<&[StyleRecord]> {
        self.entries.get(tag).map(Vec::as_slice)
    }

    /// The record matching the `index`-th occurrence of `tag`.
    ///
    /// Falls back to the first authored record when the template had fewer
    /// occurrences. This is a heuristic: templates that style later
    /// occurrences differently only get that styling up to their own count.
    pub fn record_for(&self, tag: &str, index: usize) -> Option<&StyleRecord> {
        let records = self.get(tag)?;
        records.get(index).or_else(|| records.first())
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[StyleRecord])> {
        self.entries
            .iter()
            .map(|(tag, records)| (tag.as_str(), records.as_slice()))
    }

    /// Total number of records across all tags
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// True when no tag carries a single record
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
