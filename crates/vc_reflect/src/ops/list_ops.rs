use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// Reflection access for variable-length sequences, e.g. `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::List;
///
/// let list: &dyn List = &vec![1_u8, 2, 3];
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(2).unwrap().downcast_ref::<u8>(), Some(&3));
/// assert_eq!(list.iter().count(), 3);
/// ```
pub trait List: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` if the list has no items.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter {
            list: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over the items of a [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.list.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
impl FusedIterator for ListItemIter<'_> {}
