use core::any::TypeId;

use crate::info::{Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::{Array, List, Pointer};

// -----------------------------------------------------------------------------
// ListInfo

/// A container for compile-time list info, e.g. `Vec<T>`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Vec<u8>>::type_info().as_list().unwrap();
/// assert!(info.item_is::<u8>());
/// assert_eq!(info.item_info().type_path(), "u8");
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_ty: TypeId,
    item_info: fn() -> &'static TypeInfo,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Create a new [`ListInfo`].
    #[inline]
    pub fn new<TList: List + TypePath, TItem: Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_ty: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
        }
    }

    /// Returns the [`TypeId`] of the item type.
    #[inline]
    pub const fn item_ty(&self) -> TypeId {
        self.item_ty
    }

    /// Check if the item type is `T`.
    #[inline]
    pub fn item_is<T: 'static>(&self) -> bool {
        self.item_ty == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the item type.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }
}

// -----------------------------------------------------------------------------
// ArrayInfo

/// A container for compile-time fixed-size array info, e.g. `[T; N]`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <[bool; 3]>::type_info().as_array().unwrap();
/// assert_eq!(info.capacity(), 3);
/// assert!(info.item_is::<bool>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_ty: TypeId,
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Create a new [`ArrayInfo`].
    #[inline]
    pub fn new<TArray: Array + TypePath, TItem: Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_ty: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            capacity,
        }
    }

    /// Returns the [`TypeId`] of the item type.
    #[inline]
    pub const fn item_ty(&self) -> TypeId {
        self.item_ty
    }

    /// Check if the item type is `T`.
    #[inline]
    pub fn item_is<T: 'static>(&self) -> bool {
        self.item_ty == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of the item type.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

// -----------------------------------------------------------------------------
// PointerInfo

/// A container for compile-time pointer info.
///
/// A pointer refers to at most one value of its pointee type. `Option<T>`
/// is a nullable pointer, `Box<T>` and `Arc<T>` are never null.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <Option<String>>::type_info().as_pointer().unwrap();
/// assert!(info.is_nullable());
/// assert_eq!(info.pointee_info().type_name(), "String");
///
/// let info = <Box<u8>>::type_info().as_pointer().unwrap();
/// assert!(!info.is_nullable());
/// ```
#[derive(Clone, Debug)]
pub struct PointerInfo {
    ty: Type,
    pointee_ty: TypeId,
    pointee_info: fn() -> &'static TypeInfo,
    nullable: bool,
}

impl PointerInfo {
    impl_type_fn!(ty);

    /// Create a new [`PointerInfo`].
    #[inline]
    pub fn new<TPointer: Pointer + TypePath, TPointee: Typed>(nullable: bool) -> Self {
        Self {
            ty: Type::of::<TPointer>(),
            pointee_ty: TypeId::of::<TPointee>(),
            pointee_info: TPointee::type_info,
            nullable,
        }
    }

    /// Returns the [`TypeId`] of the pointee type.
    #[inline]
    pub const fn pointee_ty(&self) -> TypeId {
        self.pointee_ty
    }

    /// Returns the [`TypeInfo`] of the pointee type.
    #[inline]
    pub fn pointee_info(&self) -> &'static TypeInfo {
        (self.pointee_info)()
    }

    /// Returns `true` if values of this type can be null.
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }
}
