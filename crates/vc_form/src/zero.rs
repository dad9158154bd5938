use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

/// Returns `true` if `value` holds the zero value of its type.
///
/// - scalars: `false`, `0`, `0.0`, `""`
/// - lists: empty
/// - arrays and structs: every member is zero
/// - pointers: nil (`None`), so `Box` and `Arc` are never zero
/// - opaque types: only through their declared zero check
/// - functions: never zero, and ignored inside arrays and structs
///
/// # Examples
///
/// ```
/// use vc_form::is_zero;
///
/// assert!(is_zero(&0_u8));
/// assert!(is_zero(&Vec::<i32>::new()));
/// assert!(is_zero(&[0.0_f32; 3]));
/// assert!(is_zero(&None::<String>));
///
/// assert!(!is_zero(&Some(0_u8)));
/// assert!(!is_zero(&[0, 1]));
/// ```
pub fn is_zero(value: &dyn Reflect) -> bool {
    zero_state(value).unwrap_or(false)
}

/// `None` for values excluded from the check.
fn zero_state(value: &dyn Reflect) -> Option<bool> {
    let zero = match value.reflect_ref() {
        ReflectRef::Scalar(scalar) => scalar.is_zero(),
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Array(array) => all_zero(array.iter()),
        ReflectRef::Struct(record) => all_zero(record.iter_fields().map(|(_, field)| field)),
        ReflectRef::Pointer(pointer) => pointer.is_null(),
        ReflectRef::Function(_) => return None,
        ReflectRef::Opaque(opaque) => opaque
            .reflect_type_info()
            .as_opaque()
            .ok()
            .and_then(|info| info.is_zero(opaque))
            .unwrap_or(false),
    };
    Some(zero)
}

fn all_zero<'a>(mut members: impl Iterator<Item = &'a dyn Reflect>) -> bool {
    members.all(|member| zero_state(member) != Some(false))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::is_zero;
    use core::net::Ipv4Addr;
    use core::time::Duration;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use vc_reflect::derive::Reflect;

    #[derive(Reflect, Default)]
    struct Inner {
        flag: bool,
        name: String,
    }

    #[derive(Reflect)]
    struct Outer {
        inner: Inner,
        callback: fn(u8) -> u8,
        limits: [u16; 2],
    }

    fn double(v: u8) -> u8 {
        v * 2
    }

    #[test]
    fn scalars_and_containers() {
        assert!(is_zero(&false));
        assert!(is_zero(&0.0_f64));
        assert!(is_zero(&String::new()));
        assert!(!is_zero(&"x".to_owned()));

        assert!(is_zero(&VecDeque::<u8>::new()));
        assert!(!is_zero(&vec![0_u8]));
        assert!(!is_zero(&Box::new(0_u8)));
        assert!(!is_zero(&Arc::new(0_u8)));
    }

    #[test]
    fn functions_are_ignored_in_structs() {
        let callback: fn(u8) -> u8 = double;
        assert!(!is_zero(&callback));

        let mut outer = Outer {
            inner: Inner::default(),
            callback,
            limits: [0; 2],
        };
        assert!(is_zero(&outer));

        outer.limits[1] = 1;
        assert!(!is_zero(&outer));

        outer.limits[1] = 0;
        outer.inner.flag = true;
        assert!(!is_zero(&outer));
    }

    #[test]
    fn opaque_values() {
        assert!(is_zero(&Duration::ZERO));
        assert!(!is_zero(&Duration::from_millis(1)));
        assert!(is_zero(&()));
        // no zero check declared
        assert!(!is_zero(&Ipv4Addr::UNSPECIFIED));
    }
}
