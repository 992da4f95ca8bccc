//! Property tests for positional argument handling.

use proptest::prelude::*;

use sample_client::{PushError, PushOptions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: SRC and DST are stored exactly as given.
    #[test]
    fn property_complete_stores_arguments_unchanged(
        src in "[^\u{0}]{1,64}",
        dst in "[^\u{0}]{1,64}",
    ) {
        let mut options = PushOptions::new("http://127.0.0.1:8080", None);
        options.complete(&[src.as_str(), dst.as_str()]).unwrap();

        prop_assert_eq!(options.source.to_str(), Some(src.as_str()));
        prop_assert_eq!(options.destination, dst);
    }

    /// PROPERTY: fewer than two arguments fail without touching the options.
    #[test]
    fn property_short_argument_lists_are_rejected(
        args in proptest::collection::vec("[a-z]{1,8}", 0..2)
    ) {
        let mut options = PushOptions::new("http://127.0.0.1:8080", None);
        let before = options.clone();

        let err = options.complete(args.as_slice()).unwrap_err();

        prop_assert!(
            matches!(err, PushError::InvalidArguments { got } if got == args.len()),
            "unexpected error: {:?}",
            err
        );
        prop_assert_eq!(options, before);
    }
}
