use proptest::prelude::*;

use vc_form::{Encoder, FormValues};
use vc_reflect::derive::Reflect;
use vc_reflect::info::Typed;

#[derive(Reflect, Debug)]
struct Sample {
    #[reflect(tag(schema = "n,omitempty"))]
    number: i64,
    #[reflect(tag(schema = "s,omitempty"))]
    text: String,
    #[reflect(tag(schema = "list,omitempty"))]
    list: Vec<u16>,
    ratio: f64,
    always: i64,
}

fn sample() -> impl Strategy<Value = Sample> {
    (
        prop_oneof![Just(0_i64), any::<i64>()],
        prop_oneof![Just(String::new()), "[a-z]{1,8}"],
        prop::collection::vec(any::<u16>(), 0..4),
        -1.0e9_f64..1.0e9,
        any::<i64>(),
    )
        .prop_map(|(number, text, list, ratio, always)| Sample {
            number,
            text,
            list,
            ratio,
            always,
        })
}

fn encode(encoder: &Encoder, sample: &Sample) -> FormValues {
    let mut values = FormValues::new();
    encoder.encode(sample, &mut values).unwrap();
    values
}

proptest! {
    #[test]
    fn prop_omitempty_drops_exactly_the_zero_fields(sample in sample()) {
        let values = encode(&Encoder::new(), &sample);

        prop_assert_eq!(values.contains_key("n"), sample.number != 0);
        prop_assert_eq!(values.contains_key("s"), !sample.text.is_empty());
        prop_assert_eq!(values.contains_key("list"), !sample.list.is_empty());
        prop_assert!(values.contains_key("ratio"));
        prop_assert!(values.contains_key("always"));
    }

    #[test]
    fn prop_one_value_per_conversion(sample in sample()) {
        let values = encode(&Encoder::new(), &sample);

        let total: usize = values.iter().map(|(_, v)| v.len()).sum();
        let expected = 2
            + usize::from(sample.number != 0)
            + usize::from(!sample.text.is_empty())
            + sample.list.len();
        prop_assert_eq!(total, expected);
    }

    #[test]
    fn prop_numbers_round_trip(sample in sample()) {
        let values = encode(&Encoder::new(), &sample);

        prop_assert_eq!(values.get("always").map(str::parse::<i64>), Some(Ok(sample.always)));

        let ratio: f64 = values.get("ratio").unwrap().parse().unwrap();
        prop_assert!((ratio - sample.ratio).abs() <= 1.0e-6);

        let list: Vec<u16> = values
            .get_all("list")
            .unwrap_or_default()
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();
        prop_assert_eq!(list, sample.list);
    }

    #[test]
    fn prop_encoding_is_deterministic(sample in sample()) {
        let encoder = Encoder::new();
        let first = encode(&encoder, &sample).into_sorted_pairs();
        let second = encode(&encoder, &sample).into_sorted_pairs();
        prop_assert_eq!(first, second);

        let a = encoder.resolve(Sample::type_info().as_struct().unwrap().field_at(0).unwrap().type_info());
        let b = encoder.resolve(i64::type_info());
        prop_assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }
}
