//! Case-insensitive, case-preserving header table.
//!
//! # Design
//! Headers are stored as an ordered `Vec` of `(display name, values)` pairs.
//! Lookups compare names with `eq_ignore_ascii_case`, so the table keeps both
//! insertion order and the exact spelling a name was first supplied with.
//! There is exactly one entry per logical name.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A header value as supplied by a caller.
///
/// A `Line` given to a constructor is split on commas (each part trimmed);
/// a `List` is taken verbatim. The `with_*` mutators never split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    Line(String),
    List(Vec<String>),
}

impl HeaderValue {
    pub(crate) fn split(self) -> Vec<String> {
        match self {
            HeaderValue::Line(line) => line.split(',').map(|v| v.trim().to_string()).collect(),
            HeaderValue::List(values) => values,
        }
    }

    pub(crate) fn into_values(self) -> Vec<String> {
        match self {
            HeaderValue::Line(line) => vec![line],
            HeaderValue::List(values) => values,
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(s: &str) -> Self {
        HeaderValue::Line(s.to_string())
    }
}

impl From<String> for HeaderValue {
    fn from(s: String) -> Self {
        HeaderValue::Line(s)
    }
}

impl From<&String> for HeaderValue {
    fn from(s: &String) -> Self {
        HeaderValue::Line(s.clone())
    }
}

impl From<Vec<String>> for HeaderValue {
    fn from(values: Vec<String>) -> Self {
        HeaderValue::List(values)
    }
}

impl From<Vec<&str>> for HeaderValue {
    fn from(values: Vec<&str>) -> Self {
        HeaderValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for HeaderValue {
    fn from(values: [&str; N]) -> Self {
        HeaderValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Ordered header table keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: Vec<(String, Vec<String>)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from caller-supplied pairs, splitting `Line` values on
    /// commas. Names that differ only in case merge into the first one.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<HeaderValue>,
    {
        let mut map = Self::new();
        for (name, value) in pairs {
            let value: HeaderValue = value.into();
            map.append(name.into(), value.split());
        }
        map
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
    }

    /// The stored display name matching `name`, if any.
    pub fn display_name(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].0.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Values stored under `name`; empty when the header is absent.
    pub fn get(&self, name: &str) -> &[String] {
        match self.position(name) {
            Some(i) => &self.entries[i].1,
            None => &[],
        }
    }

    /// Values joined with `", "`; empty when the header is absent.
    pub fn get_line(&self, name: &str) -> String {
        self.get(name).join(", ")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the values under `name`, keeping an existing display name.
    /// An empty list removes the header.
    pub(crate) fn set(&mut self, name: String, values: Vec<String>) {
        if values.is_empty() {
            self.remove(&name);
            return;
        }
        match self.position(&name) {
            Some(i) => self.entries[i].1 = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Append to the values under `name`, creating the entry if needed.
    /// Nothing is created for an empty list.
    pub(crate) fn append(&mut self, name: String, values: Vec<String>) {
        match self.position(&name) {
            Some(i) => self.entries[i].1.extend(values),
            None if values.is_empty() => {}
            None => self.entries.push((name, values)),
        }
    }

    pub(crate) fn remove(&mut self, name: &str) {
        if let Some(i) = self.position(name) {
            self.entries.remove(i);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<HeaderValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl Serialize for HeaderMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HeaderMap {
        HeaderMap::from_pairs([
            ("Accept", HeaderValue::from("application/json")),
            ("Content-Type", HeaderValue::from("text/xml;charset=UTF-8")),
            (
                "Cache-Control",
                HeaderValue::from(["no-transform", "public", "max-age=2678400"]),
            ),
        ])
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let map = sample();
        assert_eq!(map.display_name("accept"), Some("Accept"));
        assert_eq!(map.display_name("CONTENT-TYPE"), Some("Content-Type"));
        assert_eq!(map.display_name("Content-Encoding"), None);
        assert!(map.contains("cache-control"));
        assert!(!map.contains("content-encoding"));
    }

    #[test]
    fn get_and_get_line() {
        let map = sample();
        assert_eq!(map.get("accept"), ["application/json"]);
        assert_eq!(map.get("Content-Encoding"), [] as [String; 0]);
        assert_eq!(
            map.get_line("cache-control"),
            "no-transform, public, max-age=2678400"
        );
        assert_eq!(map.get_line("missing"), "");
    }

    #[test]
    fn lines_are_split_on_commas() {
        let map = HeaderMap::from_pairs([("X-List", "a, b,c")]);
        assert_eq!(map.get("x-list"), ["a", "b", "c"]);
    }

    #[test]
    fn case_variants_merge_into_first_display_name() {
        let map = HeaderMap::from_pairs([("Accept", "a"), ("ACCEPT", "b")]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.iter().next().unwrap().0, "Accept");
        assert_eq!(map.get("accept"), ["a", "b"]);
    }

    #[test]
    fn set_keeps_existing_display_name() {
        let mut map = sample();
        map.set("accept".to_string(), vec!["text/html".to_string()]);
        assert_eq!(map.display_name("ACCEPT"), Some("Accept"));
        assert_eq!(map.get("Accept"), ["text/html"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let map = sample();
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Accept", "Content-Type", "Cache-Control"]);
    }

    #[test]
    fn empty_value_lists_never_create_entries() {
        let map = HeaderMap::from_pairs([("X-Empty", Vec::<String>::new())]);
        assert!(map.is_empty());
        assert!(!map.contains("x-empty"));

        let mut map = sample();
        map.append("X-Empty".to_string(), Vec::new());
        assert!(!map.contains("x-empty"));
        map.append("accept".to_string(), Vec::new());
        assert_eq!(map.get("Accept"), ["application/json"]);

        map.set("ACCEPT".to_string(), Vec::new());
        assert!(!map.contains("accept"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn remove_is_a_noop_when_absent() {
        let mut map = sample();
        map.remove("x-missing");
        assert_eq!(map, sample());
        map.remove("ACCEPT");
        assert!(!map.contains("accept"));
    }
}
