use crate::epub::util::{AcceptAll, PNG};
use epubgen::errors::{EpubError, FetchError};
use epubgen::{Epub, ResourceKind};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_duplicate_requested_filename() {
    let epub = Epub::new("Duplicates");
    let first = "data:image/png;base64,iVBORw0KGgo=";
    let second = "data:image/gif;base64,R0lGODlh";

    assert_eq!("../images/pic.png", epub.add_image(first, Some("pic.png")).unwrap());

    let error = epub.add_image(second, Some("pic.png")).unwrap_err();
    assert!(matches!(&error, EpubError::FilenameAlreadyUsed { filename } if filename == "pic.png"));
    assert_eq!(
        "[FilenameAlreadyUsed - `pic.png`]: Filename is already in use",
        error.to_string(),
    );

    epub.with_resources(|registry| {
        assert_eq!(1, registry.len(ResourceKind::Image));
        assert_eq!(Some(first), registry.get(ResourceKind::Image, "pic.png"));
    });
}

#[test]
fn test_path_like_filenames_are_rejected() {
    let epub = Epub::new("Paths");

    #[rustfmt::skip]
    let rejected = [
        (ResourceKind::Image, "../../../escaped.png"),
        (ResourceKind::Css, "nested/style.css"),
        (ResourceKind::Font, "nested\\font.otf"),
        (ResourceKind::Video, ".."),
    ];

    for (kind, filename) in rejected {
        let error = epub.add_resource(kind, PNG, Some(filename)).unwrap_err();
        assert!(
            matches!(&error, EpubError::InvalidFilename { filename: name } if name == filename),
            "{filename}",
        );
    }
    epub.with_resources(|registry| assert!(registry.is_empty()));
}

#[test]
fn test_filenames_are_unique_per_kind() {
    let epub = Epub::new("Kinds");

    #[rustfmt::skip]
    let expected = [
        ("../css/shared", ResourceKind::Css),
        ("../fonts/shared", ResourceKind::Font),
        ("../images/shared", ResourceKind::Image),
        ("../videos/shared", ResourceKind::Video),
    ];

    for (expected, kind) in expected {
        assert_eq!(expected, epub.add_resource(kind, PNG, Some("shared")).unwrap());
    }
}

#[test]
fn test_filename_derived_from_source() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Photo.JPG");
    std::fs::write(&source, b"\xFF\xD8\xFF").unwrap();
    let source = source.to_str().unwrap();

    let epub = Epub::new("Derived");

    #[rustfmt::skip]
    let expected = [
        "../images/Photo.JPG",
        // The base name is taken; extensions are lower-cased
        "../images/image0002.jpg",
        "../images/image0003.jpg",
    ];

    for expected in expected {
        assert_eq!(expected, epub.add_image(source, None).unwrap());
    }
}

#[test]
fn test_unretrievable_source_is_not_registered() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let missing = missing.to_str().unwrap();
    let epub = Epub::new("Missing");

    let error = epub.add_image(missing, Some("missing.png")).unwrap_err();
    match &error {
        EpubError::FileRetrieval { reference, source: FetchError::Io(_) } => {
            assert_eq!(missing, *reference)
        }
        error => panic!("unexpected error: {error}"),
    }
    assert!(std::error::Error::source(&error).is_some());

    // A directory is not a retrievable file
    let error = epub.add_font(dir.path().to_str().unwrap(), None).unwrap_err();
    assert!(matches!(error, EpubError::FileRetrieval { .. }));

    epub.with_resources(|registry| assert!(registry.is_empty()));
}

#[test]
fn test_malformed_data_url() {
    let epub = Epub::new("Malformed");
    let error = epub.add_image("data:image/png;base64,***", None).unwrap_err();

    assert!(matches!(
        error,
        EpubError::FileRetrieval { source: FetchError::DataUrl(_), .. }
    ));
}

#[test]
fn test_unsupported_scheme() {
    let epub = Epub::new("Scheme");
    let error = epub.add_video("ftp://example.com/clip.mp4", None).unwrap_err();

    assert!(matches!(
        error,
        EpubError::FileRetrieval { source: FetchError::UnsupportedScheme(_), .. }
    ));
}

#[test]
fn test_custom_fetcher() {
    let epub = Epub::with_fetcher("Custom", AcceptAll);

    assert_eq!("../fonts/a.otf", epub.add_font("anywhere/a.otf", None).unwrap());
    assert_eq!("../fonts/font0002.otf", epub.add_font("elsewhere/a.otf", None).unwrap());
}

proptest! {
    #[test]
    fn prop_generated_resource_filenames_are_distinct(
        sources in prop::collection::vec(
            prop_oneof![
                "[a-c]{0,2}(\\.png)?",
                "image000[1-4]\\.png",
                "https://example\\.com/[a-b]?",
            ],
            1..24,
        ),
    ) {
        let epub = Epub::with_fetcher("Property", AcceptAll);
        let mut seen = HashSet::new();

        for source in &sources {
            let path = epub.add_image(source, None).unwrap();
            prop_assert!(seen.insert(path.clone()), "duplicate `{}`", path);
        }
        epub.with_resources(|registry| {
            assert_eq!(sources.len(), registry.len(ResourceKind::Image));
        });
    }

    #[test]
    fn prop_rejected_filename_leaves_registry_unchanged(
        existing in prop::collection::btree_set("[a-d]\\.png", 1..4),
    ) {
        let epub = Epub::with_fetcher("Property", AcceptAll);
        for filename in &existing {
            epub.add_css("first", Some(filename.as_str())).unwrap();
        }

        for filename in &existing {
            let rejected = epub.add_css("second", Some(filename.as_str()));
            prop_assert!(
                matches!(rejected, Err(EpubError::FilenameAlreadyUsed { .. })),
                "expected a filename collision",
            );
        }
        epub.with_resources(|registry| {
            for (_, source) in registry.iter(ResourceKind::Css) {
                assert_eq!("first", source);
            }
            assert_eq!(existing.len(), registry.len(ResourceKind::Css));
        });
    }
}
