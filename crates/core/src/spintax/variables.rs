//! Ordered variable mapping used for token substitution.

use serde::ser::{Serialize, Serializer};

/// Mapping from variable name to display value.
///
/// Iteration follows insertion order. When one token is a prefix-overlap of
/// another, the earlier entry wins during substitution, so the order is part
/// of the observable behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((name, value));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (k, v) in iter {
            vars.insert(k, v);
        }
        vars
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_position_on_replace() {
        let mut vars = Variables::new();
        vars.insert("city", "Lyon");
        vars.insert("zip", "69001");
        let old = vars.insert("city", "Paris");

        assert_eq!(old.as_deref(), Some("Lyon"));
        assert_eq!(vars.names().collect::<Vec<_>>(), vec!["city", "zip"]);
        assert_eq!(vars.get("city"), Some("Paris"));
    }

    #[test]
    fn serializes_as_ordered_object() {
        let vars: Variables = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&vars).unwrap();
        assert_eq!(json, r#"{"b":"2","a":"1"}"#);
    }
}
