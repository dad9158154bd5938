use core::iter::FusedIterator;

use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// Reflection access for fixed-size arrays, e.g. `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Array;
///
/// let array: &dyn Array = &[10_i16, 20];
/// assert_eq!(array.len(), 2);
/// assert_eq!(array.get(0).unwrap().downcast_ref::<i16>(), Some(&10));
/// ```
pub trait Array: Reflect {
    /// Returns the item at `index`.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the number of items.
    fn len(&self) -> usize;

    /// Returns `true` for zero-length arrays.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Array {
    /// Returns an iterator over the items.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter {
            array: self,
            index: 0,
        }
    }
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over the items of an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.array.len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
impl FusedIterator for ArrayItemIter<'_> {}
