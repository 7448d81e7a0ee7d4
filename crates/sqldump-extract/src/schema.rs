// Table selection and per-session schema memory.

use std::collections::{HashMap, HashSet};

/// Which tables a session extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelection {
    /// Every table.
    All,
    /// Only these names, compared exactly as written in the dump.
    Only(HashSet<String>),
}

impl TableSelection {
    pub fn only<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Only(tables.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn contains(&self, table: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(tables) => tables.contains(table),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TableSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::only(iter)
    }
}

/// Field lists learned from `CREATE TABLE`, keyed by lowercased table name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: HashMap<String, Vec<String>>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the fields of `table`, replacing any earlier definition
    /// wholesale. Returns the replaced field list.
    pub fn define(&mut self, table: &str, fields: Vec<String>) -> Option<Vec<String>> {
        self.tables.insert(table.to_lowercase(), fields)
    }

    /// Drop the definition of `table`. Returns the removed field list.
    pub fn forget(&mut self, table: &str) -> Option<Vec<String>> {
        self.tables.remove(&table.to_lowercase())
    }

    /// Fields of `table`, looked up case-insensitively.
    #[must_use]
    pub fn fields(&self, table: &str) -> Option<&[String]> {
        self.tables.get(&table.to_lowercase()).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Lowercased names of all known tables, in no particular order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_case_sensitive() {
        let selection: TableSelection = ["users", "LibGenreList"].into_iter().collect();
        assert!(selection.contains("users"));
        assert!(selection.contains("LibGenreList"));
        assert!(!selection.contains("Users"));
        assert!(!selection.contains("libgenrelist"));
        assert!(TableSelection::All.contains("anything"));
    }

    #[test]
    fn registry_folds_case_and_overwrites() {
        let mut schema = SchemaRegistry::new();
        assert!(schema.is_empty());
        assert_eq!(schema.define("Users", vec!["id".to_owned()]), None);
        assert_eq!(schema.fields("USERS"), Some(&["id".to_owned()][..]));

        let old = schema.define("users", vec!["id".to_owned(), "name".to_owned()]);
        assert_eq!(old, Some(vec!["id".to_owned()]));
        assert_eq!(schema.fields("users").map(<[String]>::len), Some(2));
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.tables().collect::<Vec<_>>(), ["users"]);
        assert_eq!(schema.fields("other"), None);
    }

    #[test]
    fn forget_drops_definition() {
        let mut schema = SchemaRegistry::new();
        schema.define("t", vec!["a".to_owned()]);
        assert_eq!(schema.forget("T"), Some(vec!["a".to_owned()]));
        assert_eq!(schema.fields("t"), None);
        assert_eq!(schema.forget("t"), None);
        assert!(schema.is_empty());
    }
}
