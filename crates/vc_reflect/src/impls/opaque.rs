use alloc::string::{String, ToString};
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use crate::text::{MarshalText, TextError};

/// Implement reflection for a type whose content is not inspected.
///
/// Optional capabilities follow the type:
///
/// - `text`: the type implements [`MarshalText`](crate::text::MarshalText).
/// - `zero`: `T::default()` is the zero value (needs `Default + PartialEq`).
///
/// A local type takes its path from the current module, a foreign type
/// needs an explicit path.
///
/// # Examples
///
/// ```
/// use vc_reflect::impl_reflect_opaque;
/// use vc_reflect::info::{ReflectKind, TypePath, Typed};
/// use vc_reflect::text::{MarshalText, TextError};
///
/// #[derive(Default, PartialEq)]
/// struct Version(u32, u32);
///
/// impl MarshalText for Version {
///     fn marshal_text(&self) -> Result<String, TextError> {
///         Ok(format!("v{}.{}", self.0, self.1))
///     }
/// }
///
/// impl_reflect_opaque!(Version, text, zero);
///
/// let info = Version::type_info().as_opaque().unwrap();
/// assert!(Version::type_path().ends_with("::Version"));
/// assert_eq!(info.marshal_text().unwrap().call(&Version(1, 2)).unwrap(), "v1.2");
/// assert_eq!(info.is_zero(&Version(0, 0)), Some(true));
/// ```
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@cap $info:ident, text) => {
        $info.with_marshal_text::<Self>()
    };
    (@cap $info:ident, zero) => {
        $info.with_zero_check::<Self>()
    };
    (@impl $ty:ty, $path:expr, $name:expr $(, $cap:ident)*) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    let info = $crate::info::OpaqueInfo::new::<Self>();
                    $( let info = $crate::impl_reflect_opaque!(@cap info, $cap); )*
                    $crate::info::TypeInfo::Opaque(info)
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }
        }
    };
    ($ty:ident $(, $cap:ident)* $(,)?) => {
        $crate::impl_reflect_opaque!(
            @impl $ty,
            ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
            ::core::stringify!($ty)
            $(, $cap)*
        );
    };
    ($ty:ty as $path:literal $(, $cap:ident)* $(,)?) => {
        $crate::impl_reflect_opaque!(
            @impl $ty,
            $path,
            $crate::impls::short_name($path)
            $(, $cap)*
        );
    };
}

/// Returns the last segment of a type path.
///
/// ```
/// assert_eq!(vc_reflect::impls::short_name("core::time::Duration"), "Duration");
/// assert_eq!(vc_reflect::impls::short_name("()"), "()");
/// ```
pub fn short_name(path: &'static str) -> &'static str {
    match path.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

macro_rules! impl_display_text {
    ($($ty:ty),*) => {
        $(
            impl MarshalText for $ty {
                #[inline]
                fn marshal_text(&self) -> Result<String, TextError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

impl_display_text!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

crate::impl_reflect_opaque!(() as "()", zero);
crate::impl_reflect_opaque!(core::time::Duration as "core::time::Duration", zero);
crate::impl_reflect_opaque!(IpAddr as "core::net::IpAddr", text);
crate::impl_reflect_opaque!(Ipv4Addr as "core::net::Ipv4Addr", text);
crate::impl_reflect_opaque!(Ipv6Addr as "core::net::Ipv6Addr", text);
crate::impl_reflect_opaque!(SocketAddr as "core::net::SocketAddr", text);

#[cfg(test)]
mod tests {
    use core::net::{IpAddr, Ipv4Addr};
    use core::time::Duration;

    use crate::info::{TypePath, Typed};

    #[test]
    fn builtin_capabilities() {
        let info = IpAddr::type_info().as_opaque().unwrap();
        let ip = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert_eq!(info.marshal_text().unwrap().call(&ip).unwrap(), "127.0.0.1");
        assert_eq!(info.is_zero(&ip), None);

        let info = Duration::type_info().as_opaque().unwrap();
        assert_eq!(info.is_zero(&Duration::from_secs(1)), Some(false));
        assert_eq!(Duration::type_name(), "Duration");
        assert_eq!(<()>::type_path(), "()");
    }
}
