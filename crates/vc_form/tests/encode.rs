use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;
use std::thread;

use vc_form::{EncodeError, Encoder, FieldError, FormValues, MultiError};
use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::text::{MarshalText, TextError};

// -----------------------------------------------------------------------------
// Helpers

fn pairs(values: FormValues) -> Vec<(String, Vec<String>)> {
    values.into_sorted_pairs()
}

fn entry(name: &str, values: &[&str]) -> (String, Vec<String>) {
    let values = values.iter().map(|v| (*v).to_owned()).collect();
    (name.to_owned(), values)
}

fn field_errors(result: Result<(), EncodeError>) -> MultiError {
    match result {
        Err(EncodeError::Fields(errors)) => errors,
        other => panic!("expected field errors, got {other:?}"),
    }
}

// -----------------------------------------------------------------------------
// Types

#[derive(Reflect)]
struct Person {
    #[reflect(tag(schema = "json_name"))]
    name: String,
    #[reflect(tag(schema = "age,omitempty"))]
    age: u32,
    #[reflect(tag(schema = "tags"))]
    tags: Vec<String>,
}

#[derive(Reflect)]
struct Leaf {
    id: u8,
}

#[derive(Reflect)]
#[reflect(text)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl MarshalText for Rgb {
    fn marshal_text(&self) -> Result<String, TextError> {
        Ok(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

#[derive(Reflect)]
#[reflect(text)]
struct Port {
    number: u16,
}

impl MarshalText for Port {
    fn marshal_text(&self) -> Result<String, TextError> {
        if self.number == 0 {
            return Err("port must not be zero".into());
        }
        Ok(self.number.to_string())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[test]
fn aliases_omitempty_and_empty_sequences() {
    let person = Person {
        name: "a".into(),
        age: 0,
        tags: vec![],
    };

    let mut values = FormValues::new();
    Encoder::new().encode(&person, &mut values).unwrap();

    assert_eq!(
        pairs(values),
        [entry("json_name", &["a"]), entry("tags", &[])]
    );
}

#[test]
fn scalars() {
    #[derive(Reflect)]
    struct Scalars {
        flag: bool,
        small: i8,
        wide: i128,
        count: usize,
        third: f64,
        half: f32,
        text: std::borrow::Cow<'static, str>,
    }

    let scalars = Scalars {
        flag: true,
        small: -8,
        wide: i128::MAX,
        count: 42,
        third: 1.0 / 3.0,
        half: 0.5,
        text: "borrowed".into(),
    };

    let mut values = FormValues::new();
    Encoder::new().encode(&scalars, &mut values).unwrap();

    assert_eq!(values.get("flag"), Some("true"));
    assert_eq!(values.get("small"), Some("-8"));
    assert_eq!(values.get("wide"), Some("170141183460469231731687303715884105727"));
    assert_eq!(values.get("count"), Some("42"));
    assert_eq!(values.get("third"), Some("0.333333"));
    assert_eq!(values.get("half"), Some("0.500000"));
    assert_eq!(values.get("text"), Some("borrowed"));
}

#[test]
fn pointers() {
    #[derive(Reflect)]
    struct Limits {
        max: Option<u32>,
        min: Option<Box<i8>>,
        #[reflect(tag(schema = "skip,omitempty"))]
        skipped: Option<u32>,
        parent: Option<Box<Leaf>>,
        shared: Arc<Leaf>,
    }

    let limits = Limits {
        max: None,
        min: Some(Box::new(-2)),
        skipped: None,
        parent: None,
        shared: Arc::new(Leaf { id: 5 }),
    };

    let mut values = FormValues::new();
    Encoder::new().encode(&limits, &mut values).unwrap();

    assert_eq!(
        pairs(values),
        [
            entry("id", &["5"]),
            entry("max", &["null"]),
            entry("min", &["-2"]),
        ]
    );
}

#[test]
fn recursive_structs_through_pointers() {
    #[derive(Reflect)]
    struct Node {
        value: u8,
        next: Option<Box<Node>>,
    }

    let list = Node {
        value: 1,
        next: Some(Box::new(Node {
            value: 2,
            next: None,
        })),
    };

    let mut values = FormValues::new();
    Encoder::new().encode(&list, &mut values).unwrap();
    assert_eq!(values.get_all("value").unwrap(), ["1", "2"]);
}

#[test]
fn nested_structs_share_the_sink() {
    #[derive(Reflect)]
    struct Inner {
        #[reflect(tag(schema = "id"))]
        inner_id: u8,
        tags: Vec<String>,
    }

    #[derive(Reflect)]
    struct Outer {
        id: u8,
        tags: Vec<String>,
        inner: Inner,
        #[reflect(ignore)]
        _cache: Vec<Leaf>,
    }

    let outer = Outer {
        id: 1,
        tags: vec!["a".into()],
        inner: Inner {
            inner_id: 2,
            tags: vec!["b".into()],
        },
        _cache: vec![Leaf { id: 3 }],
    };

    let mut values = FormValues::new();
    Encoder::new().encode(&outer, &mut values).unwrap();

    // scalars append, sequences reset their key
    assert_eq!(
        pairs(values),
        [entry("id", &["1", "2"]), entry("tags", &["b"])]
    );
}

#[test]
fn sequences() {
    #[derive(Reflect)]
    struct Grid {
        cells: [i16; 3],
        queue: VecDeque<bool>,
        #[reflect(tag(schema = "none,omitempty"))]
        empty: [u8; 0],
        #[reflect(tag(schema = "kept"))]
        kept: Vec<f32>,
    }

    let grid = Grid {
        cells: [-1, 0, 1],
        queue: VecDeque::from([true]),
        empty: [],
        kept: Vec::new(),
    };

    let mut values = BTreeMap::<String, Vec<String>>::new();
    Encoder::new().encode(&grid, &mut values).unwrap();

    assert_eq!(values["cells"], ["-1", "0", "1"]);
    assert_eq!(values["queue"], ["true"]);
    assert!(values["kept"].is_empty());
    assert!(!values.contains_key("none"));
}

#[test]
fn unsupported_fields_are_collected() {
    #[derive(Reflect)]
    struct Hooks {
        id: u32,
        on_change: fn(i32) -> String,
        #[reflect(tag(schema = "-"))]
        hidden: fn(),
        leaves: Vec<Leaf>,
    }

    fn render(v: i32) -> String {
        v.to_string()
    }

    fn noop() {}

    let hooks = Hooks {
        id: 7,
        on_change: render,
        hidden: noop,
        leaves: vec![],
    };

    let mut values = FormValues::new();
    let errors = field_errors(Encoder::new().encode(&hooks, &mut values));

    assert_eq!(values.get("id"), Some("7"));
    assert_eq!(values.len(), 1);

    assert_eq!(errors.keys().collect::<Vec<_>>(), ["Hooks.leaves", "Hooks.on_change"]);
    assert!(matches!(
        errors.get("Hooks.on_change"),
        Some(FieldError::NoEncoder { type_path: "fn(i32) -> alloc::string::String", .. })
    ));

    let message = errors.to_string();
    assert!(message.contains("fn(i32) -> alloc::string::String"), "{message}");
    assert!(message.contains("alloc::vec::Vec<"), "{message}");
}

#[test]
fn text_capability() {
    #[derive(Reflect)]
    struct Theme {
        fg: Rgb,
        #[reflect(tag(schema = "bg,omitempty"))]
        bg: Option<Rgb>,
        #[reflect(tag(schema = "border,omitempty"))]
        border: Option<Rgb>,
    }

    let theme = Theme {
        fg: Rgb { r: 255, g: 0, b: 16 },
        bg: None,
        border: Some(Rgb { r: 0, g: 0, b: 0 }),
    };

    // disabled: structs are flattened
    let mut values = FormValues::new();
    Encoder::new().encode(&theme, &mut values).unwrap();
    assert_eq!(values.get_all("r").unwrap(), ["255", "0"]);
    assert!(!values.contains_key("fg"));

    // enabled: only the plain field converts, pointers are still flattened
    let mut encoder = Encoder::new();
    encoder.use_text_marshal(true);

    let mut values = FormValues::new();
    encoder.encode(&theme, &mut values).unwrap();
    assert_eq!(
        pairs(values),
        [
            entry("b", &["0"]),
            entry("fg", &["#ff0010"]),
            entry("g", &["0"]),
            entry("r", &["0"]),
        ]
    );
}

#[test]
fn pointers_to_structs_are_flattened_before_converters() {
    #[derive(Reflect)]
    struct Holder {
        present: Option<Leaf>,
        absent: Option<Leaf>,
        shared: Option<Box<Leaf>>,
        direct: Leaf,
    }

    let holder = Holder {
        present: Some(Leaf { id: 7 }),
        absent: None,
        shared: Some(Box::new(Leaf { id: 8 })),
        direct: Leaf { id: 9 },
    };

    let mut encoder = Encoder::new();
    encoder.register_encoder(|l: &Leaf| format!("leaf{}", l.id));

    let mut values = FormValues::new();
    encoder.encode(&holder, &mut values).unwrap();

    assert_eq!(
        pairs(values),
        [entry("direct", &["leaf9"]), entry("id", &["7", "8"])]
    );
}

#[test]
fn conversion_failures_are_keyed_by_path() {
    #[derive(Reflect)]
    struct Service {
        name: String,
        port: Port,
        fallbacks: Vec<Port>,
    }

    let service = Service {
        name: "api".into(),
        port: Port { number: 0 },
        fallbacks: vec![Port { number: 80 }, Port { number: 0 }, Port { number: 443 }],
    };

    let mut encoder = Encoder::new();
    encoder.use_text_marshal(true);

    let mut values = FormValues::new();
    let errors = field_errors(encoder.encode(&service, &mut values));

    assert_eq!(
        pairs(values),
        [entry("fallbacks", &["80", "443"]), entry("name", &["api"])]
    );
    assert!(matches!(
        errors.get("Service.fallbacks[1]"),
        Some(FieldError::Element { index: 1, .. })
    ));
    assert_eq!(
        errors.to_string(),
        "schema: failed to encode slice element `Service.fallbacks[1]`: port must not be zero; \
         schema: failed to encode field `Service.port`: port must not be zero"
    );
}

#[test]
fn registered_encoders_take_precedence() {
    #[derive(Reflect)]
    struct Palette {
        name: String,
        main: Rgb,
        extra: Vec<Rgb>,
    }

    let palette = Palette {
        name: "warm".into(),
        main: Rgb { r: 1, g: 2, b: 3 },
        extra: vec![Rgb { r: 4, g: 5, b: 6 }],
    };

    let mut encoder = Encoder::new();
    encoder
        .use_text_marshal(true)
        .register_encoder(|s: &String| s.to_uppercase())
        .register_encoder(|c: &Rgb| format!("rgb({},{},{})", c.r, c.g, c.b));

    let mut values = FormValues::new();
    encoder.encode(&palette, &mut values).unwrap();

    assert_eq!(
        pairs(values),
        [
            entry("extra", &["rgb(4,5,6)"]),
            entry("main", &["rgb(1,2,3)"]),
            entry("name", &["WARM"]),
        ]
    );
}

#[test]
fn sources_must_be_structs() {
    let encoder = Encoder::new();
    let mut values = FormValues::new();

    let err = encoder.encode(&5_u32, &mut values).unwrap_err();
    assert_eq!(err.to_string(), "schema: interface must be a struct, found `u32`");
    assert!(err.fields().is_none());

    assert!(encoder.encode(&vec![Leaf { id: 1 }], &mut values).is_err());
    assert!(values.is_empty());

    let boxed: Box<dyn Reflect> = Box::new(Leaf { id: 4 });
    encoder.encode(&*boxed, &mut values).unwrap();
    assert_eq!(values.get("id"), Some("4"));
}

#[test]
fn concurrent_encoding() {
    let mut encoder = Encoder::new();
    encoder.register_encoder(|v: &u32| format!("n{v}"));
    let encoder = &encoder;

    let results: Vec<FormValues> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4_u32)
            .map(|i| {
                scope.spawn(move || {
                    let person = Person {
                        name: format!("p{i}"),
                        age: i + 1,
                        tags: vec![i.to_string()],
                    };
                    let mut values = FormValues::new();
                    encoder.encode(&person, &mut values).map(|()| values)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect()
    });

    for (i, values) in results.iter().enumerate() {
        assert_eq!(values.get("json_name"), Some(format!("p{i}").as_str()));
        assert_eq!(values.get("age"), Some(format!("n{}", i + 1).as_str()));
        assert_eq!(values.get_all("tags").unwrap(), [i.to_string()]);
    }
}
