use proptest::prelude::*;
use vassert_core::compare::{compare, compare_with, shallow_equal, Mode};
use vassert_core::config::CompareOptions;
use vassert_core::render::render_value;
use vassert_core::value::{MapKey, Value};

/// Owned, `Send` description of a value; built into a `Value` inside each case.
#[derive(Debug, Clone)]
enum Shape {
    Nil,
    TypedNil(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Shape>),
    Map(Vec<(String, Shape)>),
    Record(String, Vec<Shape>),
    Ref(Box<Shape>),
}

impl Shape {
    fn build(&self) -> Value {
        match self {
            Shape::Nil => Value::Nil,
            Shape::TypedNil(t) => Value::typed_nil(t.as_str()),
            Shape::Bool(b) => Value::from(*b),
            Shape::Int(i) => Value::from(*i),
            Shape::Float(x) => Value::from(*x),
            Shape::Str(s) => Value::str(s.as_str()),
            Shape::Seq(items) => Value::seq(items.iter().map(Shape::build)),
            Shape::Map(entries) => Value::map(
                entries
                    .iter()
                    .map(|(k, v)| (MapKey::from(k.as_str()), v.build())),
            ),
            Shape::Record(name, fields) => Value::record(
                name.as_str(),
                fields
                    .iter()
                    .enumerate()
                    .map(|(i, f)| (format!("f{i}"), f.build())),
            ),
            Shape::Ref(target) => Value::reference(target.build()),
        }
    }
}

fn leaf_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Nil),
        "[A-Z][a-z]{0,4}".prop_map(|t| Shape::TypedNil(format!("*{t}"))),
        any::<bool>().prop_map(Shape::Bool),
        (-1000i64..1000).prop_map(Shape::Int),
        // NaN-free by construction
        (-100.0f64..100.0).prop_map(Shape::Float),
        "[a-z0-9 ]{0,8}".prop_map(Shape::Str),
    ]
}

fn shape() -> impl Strategy<Value = Shape> {
    leaf_shape().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Seq),
            prop::collection::vec(("[a-c]{1,2}", inner.clone()), 0..4).prop_map(Shape::Map),
            ("[A-Z][a-z]{0,4}", prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(name, fields)| Shape::Record(name, fields)),
            inner.prop_map(|t| Shape::Ref(Box::new(t))),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn deep_equality_is_reflexive_across_storage(s in shape()) {
        // Two independent builds share no storage
        let a = s.build();
        let b = s.build();
        let result = compare(&a, &b, Mode::Deep);
        prop_assert!(result.equal, "mismatches: {:?}", result.mismatches);
        prop_assert!(result.mismatches.is_empty());
    }

    #[test]
    fn shallow_equality_holds_for_shared_clone(s in shape()) {
        let a = s.build();
        let b = a.clone();
        prop_assert!(shallow_equal(&a, &b));
        prop_assert!(compare(&a, &b, Mode::Shallow).equal);
    }

    #[test]
    fn deep_equality_is_symmetric(x in shape(), y in shape()) {
        let a = x.build();
        let b = y.build();
        prop_assert_eq!(
            compare(&a, &b, Mode::Deep).equal,
            compare(&b, &a, Mode::Deep).equal
        );
    }

    #[test]
    fn equal_flag_matches_empty_mismatches(x in shape(), y in shape()) {
        let a = x.build();
        let b = y.build();
        for mode in [Mode::Shallow, Mode::Deep] {
            let result = compare(&a, &b, mode);
            prop_assert_eq!(result.equal, result.mismatches.is_empty());
        }
    }

    #[test]
    fn mismatch_limit_is_respected(x in shape(), y in shape(), limit in 1usize..4) {
        let a = x.build();
        let b = y.build();
        let options = CompareOptions { max_mismatches: Some(limit) };

        let limited = compare_with(&a, &b, Mode::Deep, &options);
        let full = compare(&a, &b, Mode::Deep);

        prop_assert!(limited.mismatches.len() <= limit);
        prop_assert_eq!(limited.equal, full.equal);
    }

    #[test]
    fn rendering_is_deterministic(s in shape()) {
        prop_assert_eq!(render_value(&s.build()), render_value(&s.build()));
    }
}
