use crate::Reflect;

/// Reflection access for values that refer to at most one other value.
///
/// # Examples
///
/// ```
/// use vc_reflect::ops::Pointer;
///
/// let some: &dyn Pointer = &Some(5_u32);
/// assert_eq!(some.pointee().unwrap().downcast_ref::<u32>(), Some(&5));
///
/// let none: &dyn Pointer = &Option::<u32>::None;
/// assert!(none.is_null());
/// ```
pub trait Pointer: Reflect {
    /// Returns the referenced value, `None` for a null pointer.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns `true` for a null pointer.
    #[inline]
    fn is_null(&self) -> bool {
        self.pointee().is_none()
    }
}
