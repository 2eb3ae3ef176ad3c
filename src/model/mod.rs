use std::collections::{BTreeMap, BTreeSet};

/// Column holding the entry title. Every record carries it.
pub const TITLE: &str = "Title";
/// Conventional login column, always emitted right after the title.
pub const LOGIN: &str = "Login";
/// Conventional password column, always emitted right after the login.
pub const PASSWORD: &str = "Password";
/// Column fed by `<notes>` elements, always emitted last.
pub const NOTES: &str = "Notes";

/// Entry tags that are eligible for export.
pub const ENTRY_TAGS: [&str; 2] = ["card", "note"];

/// A single exported entry: field name → field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Starts a record holding only its title.
    pub fn new(title: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(TITLE.to_string(), title.into());
        Self { fields }
    }

    /// Inserts or replaces a field value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn title(&self) -> &str {
        self.get(TITLE).unwrap_or_default()
    }
}

/// Set of every field name seen during extraction.
///
/// Seeded with [`TITLE`] and [`NOTES`] so those columns exist even when no
/// entry populates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUniverse {
    names: BTreeSet<String>,
}

impl Default for FieldUniverse {
    fn default() -> Self {
        Self {
            names: [TITLE, NOTES].into_iter().map(str::to_string).collect(),
        }
    }
}

impl FieldUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str) {
        if !self.names.contains(name) {
            self.names.insert(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in ascending code point order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Output of the extraction phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Records in document order.
    pub records: Vec<Record>,
    pub universe: FieldUniverse,
}
