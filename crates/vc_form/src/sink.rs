use alloc::collections::BTreeMap;
use core::hash::BuildHasher;
use std::collections::HashMap;

use vc_utils::hash::hashbrown;

// -----------------------------------------------------------------------------
// FormSink

/// The destination of an encoding: `name -> [value]`.
///
/// The encoder only ever appends, except for sequences, which
/// [`reset`](FormSink::reset) their key before writing the elements so an
/// empty sequence still produces an (empty) entry.
///
/// Implemented for [`FormValues`](crate::FormValues) and for
/// `HashMap<String, Vec<String>>`, `BTreeMap<String, Vec<String>>` and the
/// `hashbrown` map.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use vc_form::FormSink;
///
/// let mut map = BTreeMap::<String, Vec<String>>::new();
/// map.push_value("a", "1".into());
/// map.push_value("a", "2".into());
/// map.reset("b");
///
/// assert_eq!(map["a"], ["1", "2"]);
/// assert!(map["b"].is_empty());
/// ```
pub trait FormSink {
    /// Appends `value` to the values of `name`, creating the entry if needed.
    fn push_value(&mut self, name: &str, value: String);

    /// Sets the values of `name` to an empty list.
    fn reset(&mut self, name: &str);
}

impl<T: FormSink + ?Sized> FormSink for &mut T {
    #[inline]
    fn push_value(&mut self, name: &str, value: String) {
        T::push_value(self, name, value);
    }

    #[inline]
    fn reset(&mut self, name: &str) {
        T::reset(self, name);
    }
}

macro_rules! impl_form_sink {
    ($(impl<$($param:ident: $bound:path),*> for $map:ty;)*) => {$(
        impl<$($param: $bound),*> FormSink for $map {
            fn push_value(&mut self, name: &str, value: String) {
                match self.get_mut(name) {
                    Some(values) => values.push(value),
                    None => {
                        self.insert(name.to_owned(), vec![value]);
                    }
                }
            }

            fn reset(&mut self, name: &str) {
                match self.get_mut(name) {
                    Some(values) => values.clear(),
                    None => {
                        self.insert(name.to_owned(), Vec::new());
                    }
                }
            }
        }
    )*};
}

impl_form_sink! {
    impl<S: BuildHasher> for HashMap<String, Vec<String>, S>;
    impl<S: BuildHasher> for hashbrown::HashMap<String, Vec<String>, S>;
    impl<> for BTreeMap<String, Vec<String>>;
}

// -----------------------------------------------------------------------------
// Tests
