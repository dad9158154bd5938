use vc_utils::hash::HashMap;

use crate::FormSink;

// -----------------------------------------------------------------------------
// FormValues

/// An owned multi-map from field name to its ordered values.
///
/// Key order is unspecified, use [`into_sorted_pairs`] for a stable view.
///
/// # Examples
///
/// ```
/// use vc_form::FormValues;
///
/// let mut values = FormValues::new();
/// values.add("tag", "a");
/// values.add("tag", "b");
/// values.set("page", "2");
///
/// assert_eq!(values.get("tag"), Some("a"));
/// assert_eq!(values.get_all("tag"), Some(&["a".to_owned(), "b".to_owned()][..]));
/// assert_eq!(values.len(), 2);
/// ```
///
/// [`into_sorted_pairs`]: FormValues::into_sorted_pairs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(HashMap<String, Vec<String>>);

impl FormValues {
    /// Creates an empty container.
    #[inline]
    pub fn new() -> Self {
        Self(HashMap::default())
    }

    /// Returns the first value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.first().map(String::as_str)
    }

    /// Returns every value of `name`.
    ///
    /// `Some(&[])` means the key is present without values, which is how an
    /// empty sequence is encoded.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    /// Appends a value to `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces the values of `name` with `value`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), vec![value.into()]);
    }

    /// Removes `name`, returning its values.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.0.remove(name)
    }

    #[inline]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, values)` in unspecified order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates over the keys in unspecified order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Consumes the container, returning its entries sorted by name.
    pub fn into_sorted_pairs(self) -> Vec<(String, Vec<String>)> {
        let mut pairs: Vec<_> = self.0.into_iter().collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}

impl FormSink for FormValues {
    #[inline]
    fn push_value(&mut self, name: &str, value: String) {
        self.0.push_value(name, value);
    }

    #[inline]
    fn reset(&mut self, name: &str) {
        self.0.reset(name);
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut values = Self::new();
        iter.into_iter().for_each(|(k, v)| values.add(k, v));
        values
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::FormValues;
    use crate::FormSink;

    #[test]
    fn add_set_remove() {
        let mut values = FormValues::new();
        assert!(values.is_empty());

        values.add("a", "1");
        values.add("a", "2");
        values.set("b", "x");
        values.set("b", "y");

        assert_eq!(values.get_all("a").unwrap(), ["1", "2"]);
        assert_eq!(values.get("b"), Some("y"));
        assert_eq!(values.get("missing"), None);

        assert_eq!(values.remove("a"), Some(vec!["1".to_owned(), "2".to_owned()]));
        assert!(!values.contains_key("a"));
        assert_eq!(values.keys().collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn reset_keeps_an_empty_entry() {
        let mut values = FormValues::new();
        values.push_value("list", "stale".into());
        values.reset("list");

        assert!(values.contains_key("list"));
        assert_eq!(values.get("list"), None);
        assert_eq!(values.get_all("list"), Some(&[][..]));
    }

    #[test]
    fn sorted_pairs() {
        let values: FormValues = [("b", "2"), ("a", "1"), ("b", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        assert_eq!(
            values.into_sorted_pairs(),
            [
                ("a".to_owned(), vec!["1".to_owned()]),
                ("b".to_owned(), vec!["2".to_owned(), "3".to_owned()]),
            ]
        );
    }
}
