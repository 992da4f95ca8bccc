//! Property tests for source path resolution.

use std::path::{Component, Path};

use proptest::prelude::*;

use sample_client::SourcePath;

fn relative_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap(),
        Just(".".to_string()),
        Just("..".to_string()),
    ];
    proptest::collection::vec(segment, 0..=6).prop_map(|segments| segments.join("/"))
}

fn base() -> std::path::PathBuf {
    std::env::temp_dir().join("sample-client-base")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: resolution never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,128}") {
        let _ = SourcePath::resolve(Path::new(&s), &base());
    }

    /// PROPERTY: resolved paths are absolute and contain no `.` or `..`.
    #[test]
    fn property_resolved_path_is_absolute_and_clean(path in relative_path()) {
        let resolved = SourcePath::resolve(Path::new(&path), &base()).unwrap();

        prop_assert!(resolved.as_path().is_absolute());
        prop_assert!(resolved
            .as_path()
            .components()
            .all(|c| !matches!(c, Component::CurDir | Component::ParentDir)));
    }

    /// PROPERTY: resolving an already resolved path is a no-op.
    #[test]
    fn property_resolve_is_idempotent(path in relative_path()) {
        let once = SourcePath::resolve(Path::new(&path), &base()).unwrap();
        let twice = SourcePath::resolve(once.as_path(), &base()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
