use epubgen::Epub;
use epubgen::errors::EpubError;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_path_like_section_filenames_are_rejected() {
    let epub = Epub::new("Paths");

    for filename in ["../outside.xhtml", "xhtml/nested.xhtml", "nested\\a.xhtml"] {
        let error = epub.add_section("", Some("Title"), Some(filename), None).unwrap_err();
        assert!(
            matches!(&error, EpubError::InvalidFilename { filename: name } if name == filename),
            "{filename}",
        );
    }
    epub.with_sections(|sections| assert!(sections.is_empty()));
    epub.with_toc(|toc| assert!(toc.is_empty()));
}

#[test]
fn test_generated_names_skip_explicit_names() {
    let epub = Epub::new("Sections");

    #[rustfmt::skip]
    let expected = [
        ("section0002.xhtml", Some("section0002.xhtml")),
        ("section0001.xhtml", None),
        ("section0003.xhtml", None),
        ("section0004.xhtml", Some("")),
    ];

    for (expected, filename) in expected {
        assert_eq!(expected, epub.add_section("", None, filename, None).unwrap());
    }
    epub.with_sections(|sections| {
        let order: Vec<_> = sections.iter().map(|section| section.filename()).collect();
        assert_eq!(
            vec!["section0002.xhtml", "section0001.xhtml", "section0003.xhtml", "section0004.xhtml"],
            order,
        );
    });
}

#[test]
fn test_cover_filename_is_reserved() {
    let epub = Epub::new("Cover");
    epub.set_cover("../images/cover.png", None);

    let error = epub.add_section("", None, Some("cover.xhtml"), None).unwrap_err();
    assert!(matches!(error, EpubError::FilenameAlreadyUsed { filename } if filename == "cover.xhtml"));
}

#[test]
fn test_section_document() {
    let epub = Epub::new("Document");
    let css = epub.add_css("data:text/css,p{}", Some("style.css")).unwrap();
    let filename = epub
        .add_section("<p>Body</p>", Some("Title"), None, Some(&css))
        .unwrap();

    epub.with_sections(|sections| {
        let document = sections.by_filename(&filename).unwrap().document();
        assert_eq!(Some("Title"), document.title());
        assert_eq!(Some("../css/style.css"), document.stylesheet());
        assert_eq!("<p>Body</p>", document.body());
    });
}

proptest! {
    #[test]
    fn prop_unnamed_sections_never_collide(
        requests in prop::collection::vec(
            prop::option::of("section000[1-6]\\.xhtml|[a-c]\\.xhtml"),
            1..24,
        ),
    ) {
        let epub = Epub::new("Property");
        let mut seen = HashSet::new();

        for request in &requests {
            match epub.add_section("", None, request.as_deref(), None) {
                Ok(filename) => prop_assert!(seen.insert(filename)),
                Err(EpubError::FilenameAlreadyUsed { filename }) => {
                    prop_assert!(request.is_some());
                    prop_assert!(seen.contains(&filename));
                }
                Err(error) => prop_assert!(false, "unexpected error: {}", error),
            }
        }
        epub.with_sections(|sections| assert_eq!(seen.len(), sections.len()));
    }
}
