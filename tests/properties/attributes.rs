//! Property tests for attribute encodability.

use proptest::prelude::*;

use sample_client::{AttributeValue, Attributes};

fn finite_value() -> impl Strategy<Value = AttributeValue> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(AttributeValue::Bool),
        (-1e12f64..1e12f64).prop_map(AttributeValue::Number),
        "[a-z ]{0,12}".prop_map(AttributeValue::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(AttributeValue::List),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(AttributeValue::Map),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: attributes built from finite values always encode.
    #[test]
    fn property_finite_attributes_are_encodable(
        entries in proptest::collection::btree_map("[a-z]{1,8}", finite_value(), 0..6)
    ) {
        let attrs: Attributes = entries.into_iter().collect();
        prop_assert!(attrs.check_encodable().is_ok());
    }

    /// PROPERTY: a non-finite number anywhere is reported under its key.
    #[test]
    fn property_non_finite_number_is_rejected(
        key in "[a-z]{1,8}",
        bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let attrs = Attributes::new()
            .with(key.clone(), vec![AttributeValue::Bool(true), AttributeValue::Number(bad)]);

        let issue = attrs.check_encodable().unwrap_err();
        prop_assert_eq!(issue.key, format!("{}[1]", key));
    }
}
