use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::{StructInfo, TypeInfo, TypePath};
use vc_reflect::ops::{ReflectRef, Struct};
use vc_utils::TypeIdMap;

use crate::plan::{FieldPlan, PlanCache};
use crate::resolve::{RegisteredEncoder, TypeEncoder};
use crate::{EncodeError, FieldError, FormSink, MultiError, is_zero};

/// The tag key read by a new [`Encoder`].
pub const DEFAULT_ALIAS_TAG: &str = "schema";

// -----------------------------------------------------------------------------
// Encoder

/// Encodes reflected structs into a [`FormSink`].
///
/// Configure the encoder first ([`set_alias_tag`], [`use_text_marshal`],
/// [`register_encoder`]), then share it: [`encode`] only needs `&self` and
/// may run on several threads at once.
///
/// # Field rules
///
/// Fields are visited in declaration order and written under their alias,
/// see [`field_alias`](crate::field_alias).
///
/// - alias `-`: skipped.
/// - pointer to a struct: the fields of the target are written into the same
///   sink, even if the struct has a converter. A nil pointer writes nothing.
/// - a converter exists (see [`resolve`]): one value, unless the field is
///   `omitempty` and [zero](crate::is_zero).
/// - struct without a converter: its fields are written into the same sink.
/// - `Vec`, `VecDeque` or array of convertible items: the key is reset, then
///   one value per item. With `omitempty`, an empty sequence writes nothing.
/// - anything else: [`FieldError::NoEncoder`].
///
/// Failures do not stop the traversal, they are collected in a
/// [`MultiError`] keyed by field path.
///
/// # Examples
///
/// ```
/// use vc_form::{Encoder, FormValues};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Reflect)]
/// struct Person {
///     #[reflect(tag(schema = "json_name"))]
///     name: String,
///     #[reflect(tag(schema = "age,omitempty"))]
///     age: u32,
///     #[reflect(tag(schema = "tags"))]
///     tags: Vec<String>,
///     home: Option<Box<Address>>,
/// }
///
/// let person = Person {
///     name: "a".into(),
///     age: 0,
///     tags: vec![],
///     home: Some(Box::new(Address { city: "Oslo".into() })),
/// };
///
/// let mut values = FormValues::new();
/// Encoder::new().encode(&person, &mut values).unwrap();
///
/// assert_eq!(values.get("json_name"), Some("a"));
/// assert_eq!(values.get_all("tags"), Some(&[][..]));
/// assert_eq!(values.get("city"), Some("Oslo"));
/// assert!(!values.contains_key("age"));
/// ```
///
/// [`set_alias_tag`]: Encoder::set_alias_tag
/// [`use_text_marshal`]: Encoder::use_text_marshal
/// [`register_encoder`]: Encoder::register_encoder
/// [`encode`]: Encoder::encode
/// [`resolve`]: Encoder::resolve
pub struct Encoder {
    registry: TypeIdMap<RegisteredEncoder>,
    alias_tag: Cow<'static, str>,
    use_text_marshal: bool,
    plans: PlanCache,
}

impl Default for Encoder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("alias_tag", &self.alias_tag)
            .field("use_text_marshal", &self.use_text_marshal)
            .field("registered", &self.registry.len())
            .field("cached_plans", &self.plans.len())
            .finish()
    }
}

impl Encoder {
    /// Creates an encoder reading the [`DEFAULT_ALIAS_TAG`] tag, with the
    /// text capability disabled and no registered converter.
    pub const fn new() -> Self {
        Self {
            registry: TypeIdMap::new(),
            alias_tag: Cow::Borrowed(DEFAULT_ALIAS_TAG),
            use_text_marshal: false,
            plans: PlanCache::new(),
        }
    }

    /// Sets the tag key aliases are read from.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_form::{Encoder, FormValues};
    /// use vc_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Login {
    ///     #[reflect(tag(schema = "user", form = "username"))]
    ///     name: String,
    /// }
    ///
    /// let mut encoder = Encoder::new();
    /// encoder.set_alias_tag("form");
    ///
    /// let mut values = FormValues::new();
    /// encoder.encode(&Login { name: "ada".into() }, &mut values).unwrap();
    /// assert_eq!(values.get("username"), Some("ada"));
    /// ```
    pub fn set_alias_tag(&mut self, tag: impl Into<Cow<'static, str>>) -> &mut Self {
        self.alias_tag = tag.into();
        self.plans.clear();
        self
    }

    /// Returns the tag key aliases are read from.
    #[inline]
    pub fn alias_tag(&self) -> &str {
        &self.alias_tag
    }

    /// Enables converting types that declare the
    /// [`MarshalText`](vc_reflect::text::MarshalText) capability.
    ///
    /// Registered converters still take precedence.
    pub fn use_text_marshal(&mut self, enabled: bool) -> &mut Self {
        self.use_text_marshal = enabled;
        self
    }

    /// Registers the converter used for every value of type `T`.
    ///
    /// Overrides the built-in conversion and the text capability of `T`.
    /// Registering `T` again replaces the previous converter.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_form::{Encoder, FormValues};
    /// use vc_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Flags {
    ///     on: bool,
    ///     off: bool,
    /// }
    ///
    /// let mut encoder = Encoder::new();
    /// encoder.register_encoder(|v: &bool| (if *v { "1" } else { "0" }).to_owned());
    ///
    /// let mut values = FormValues::new();
    /// encoder.encode(&Flags { on: true, off: false }, &mut values).unwrap();
    /// assert_eq!(values.get("on"), Some("1"));
    /// assert_eq!(values.get("off"), Some("0"));
    /// ```
    pub fn register_encoder<T: Reflect + TypePath>(
        &mut self,
        encoder: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> &mut Self {
        self.registry
            .insert_type::<T>(RegisteredEncoder::new::<T>(encoder));
        self
    }

    /// Returns the converter for values of the type described by `info`.
    ///
    /// Looks up, in order: the registered converters, the text capability
    /// (if enabled), the built-in scalars, then pointers to any of those.
    pub fn resolve(&self, info: &TypeInfo) -> Option<TypeEncoder<'_>> {
        if let Some(registered) = self.registry.get(&info.ty_id()) {
            return Some(TypeEncoder::Registered(registered));
        }

        if self.use_text_marshal
            && let Some(text) = info.marshal_text()
        {
            return Some(TypeEncoder::Text(text));
        }

        match info {
            TypeInfo::Scalar(scalar) => Some(TypeEncoder::scalar(scalar.scalar_kind())),
            TypeInfo::Pointer(pointer) => self
                .resolve(pointer.pointee_info())
                .map(|inner| TypeEncoder::Pointer(Box::new(inner))),
            _ => None,
        }
    }

    /// Writes the fields of `src` into `dst`.
    ///
    /// `src` must be a struct, or a pointer to one. Otherwise nothing is
    /// written and [`EncodeError::NotAStruct`] is returned.
    ///
    /// Field failures are returned together as [`EncodeError::Fields`], the
    /// values of the other fields are still written.
    pub fn encode<S: FormSink + ?Sized>(
        &self,
        src: &dyn Reflect,
        dst: &mut S,
    ) -> Result<(), EncodeError> {
        let not_a_struct = || EncodeError::NotAStruct {
            type_path: src.reflect_type_path(),
        };

        let record = match src.reflect_ref() {
            ReflectRef::Struct(record) => record,
            ReflectRef::Pointer(pointer) => match pointer.pointee().map(|v| v.reflect_ref()) {
                Some(ReflectRef::Struct(record)) => record,
                _ => return Err(not_a_struct()),
            },
            _ => return Err(not_a_struct()),
        };

        let info = record
            .reflect_type_info()
            .as_struct()
            .map_err(|_| not_a_struct())?;

        self.encode_struct(record, info, info.type_name(), dst)
            .into_result()
            .map_err(EncodeError::from)
    }

    fn encode_struct<S: FormSink + ?Sized>(
        &self,
        record: &dyn Struct,
        info: &'static StructInfo,
        path: &str,
        dst: &mut S,
    ) -> MultiError {
        let mut errors = MultiError::new();

        for plan in self.plans.get_or_build(info, &self.alias_tag).iter() {
            let Some(value) = record.field_at(plan.index) else {
                continue;
            };
            let path = format!("{path}.{}", plan.field.name());
            self.encode_field(plan, value, &path, dst, &mut errors);
        }

        errors
    }

    fn encode_field<S: FormSink + ?Sized>(
        &self,
        plan: &FieldPlan,
        value: &dyn Reflect,
        path: &str,
        dst: &mut S,
        errors: &mut MultiError,
    ) {
        let info = plan.field.type_info();

        // Pointers to structs are flattened before any converter is tried.
        if let TypeInfo::Pointer(_) = info
            && let TypeInfo::Struct(nested) = deref_info(info)
        {
            self.encode_nested(value, nested, path, dst, errors);
            return;
        }

        if let Some(converter) = self.resolve(info) {
            if plan.omit_empty && is_zero(value) {
                log::trace!("skip empty `{path}`");
                return;
            }
            match converter.encode(value) {
                Ok(text) => dst.push_value(plan.alias, text),
                Err(source) => {
                    let field = path.to_owned();
                    errors.insert(path.to_owned(), FieldError::Field { field, source });
                }
            }
            return;
        }

        if let TypeInfo::Struct(nested) = info {
            self.encode_nested(value, nested, path, dst, errors);
            return;
        }

        match (info, value.reflect_ref()) {
            (TypeInfo::List(list_info), ReflectRef::List(list)) => {
                let items = list.iter();
                self.encode_sequence(plan, info, list_info.item_info(), items, path, dst, errors);
            }
            (TypeInfo::Array(array_info), ReflectRef::Array(array)) => {
                let items = array.iter();
                self.encode_sequence(plan, info, array_info.item_info(), items, path, dst, errors);
            }
            _ => {
                let error = FieldError::NoEncoder {
                    field: path.to_owned(),
                    type_path: info.type_path(),
                };
                errors.insert(path.to_owned(), error);
            }
        }
    }

    /// Flatten a struct, or the struct behind `value`'s pointers, into `dst`.
    fn encode_nested<S: FormSink + ?Sized>(
        &self,
        value: &dyn Reflect,
        info: &'static StructInfo,
        path: &str,
        dst: &mut S,
        errors: &mut MultiError,
    ) {
        match deref_value(value).map(|v| v.reflect_ref()) {
            Some(ReflectRef::Struct(record)) => {
                errors.merge(self.encode_struct(record, info, path, dst));
            }
            _ => log::trace!("skip nil `{path}`"),
        }
    }

    fn encode_sequence<'v, S: FormSink + ?Sized>(
        &self,
        plan: &FieldPlan,
        info: &TypeInfo,
        item_info: &TypeInfo,
        items: impl ExactSizeIterator<Item = &'v dyn Reflect>,
        path: &str,
        dst: &mut S,
        errors: &mut MultiError,
    ) {
        let Some(converter) = self.resolve(item_info) else {
            let error = FieldError::NoEncoder {
                field: path.to_owned(),
                type_path: info.type_path(),
            };
            errors.insert(path.to_owned(), error);
            return;
        };

        if plan.omit_empty && items.len() == 0 {
            log::trace!("skip empty `{path}`");
            return;
        }

        dst.reset(plan.alias);
        for (index, item) in items.enumerate() {
            match converter.encode(item) {
                Ok(text) => dst.push_value(plan.alias, text),
                Err(source) => {
                    let field = path.to_owned();
                    let error = FieldError::Element { field, index, source };
                    errors.insert(format!("{path}[{index}]"), error);
                }
            }
        }
    }
}

/// Follows pointer types down to the first non-pointer type.
fn deref_info(mut info: &TypeInfo) -> &TypeInfo {
    while let TypeInfo::Pointer(pointer) = info {
        info = pointer.pointee_info();
    }
    info
}

/// Follows pointers down to the first non-pointer value, `None` if one is nil.
fn deref_value(mut value: &dyn Reflect) -> Option<&dyn Reflect> {
    while let ReflectRef::Pointer(pointer) = value.reflect_ref() {
        value = pointer.pointee()?;
    }
    Some(value)
}

// -----------------------------------------------------------------------------
// Tests
