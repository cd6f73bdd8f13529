use serde::{Deserialize, Serialize};

/// The locally persisted sequence of favorite player ids.
///
/// Ordered, duplicate-free, and never containing empty ids. Insertion order
/// is preserved across save/load round-trips. Serializes as a bare JSON array
/// of strings, which is the stored format under the favorites key.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteIds(Vec<String>);

impl FavoriteIds {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a set from raw ids, dropping empty ids and duplicates while
    /// keeping first-seen order.
    pub fn from_raw(ids: Vec<String>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(&id);
        }
        set
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|i| i == id)
    }

    /// Appends `id` unless it is empty or already present.
    pub fn insert(&mut self, id: &str) {
        if !id.is_empty() && !self.contains(id) {
            self.0.push(id.to_string());
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.0.retain(|i| i != id);
    }

    /// Drops every id for which `keep` returns false.
    pub fn retain(&mut self, keep: impl Fn(&str) -> bool) {
        self.0.retain(|i| keep(i));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a FavoriteIds {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicates_and_empty_ids() {
        let mut ids = FavoriteIds::new();
        ids.insert("1");
        ids.insert("1");
        ids.insert("");
        ids.insert("2");

        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn test_from_raw_keeps_first_seen_order() {
        let ids = FavoriteIds::from_raw(vec![
            "3".to_string(),
            "1".to_string(),
            "3".to_string(),
            "".to_string(),
            "2".to_string(),
        ]);

        assert_eq!(ids.iter().collect::<Vec<_>>(), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let mut ids = FavoriteIds::new();
        ids.insert("1");
        ids.insert("2");

        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["1","2"]"#);

        let parsed: FavoriteIds = serde_json::from_str(r#"["1","2"]"#).unwrap();
        assert_eq!(parsed, ids);
    }
}
