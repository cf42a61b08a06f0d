use crate::epub::util::{self, PNG};
use epubgen::{Epub, ResourceKind};

#[test]
fn test_cover_written() {
    let epub = Epub::new("Covered");
    let image = epub.add_image(PNG, Some("cover.png")).unwrap();
    epub.set_cover(&image, None);
    epub.add_section("<p>1</p>", Some("One"), None, None).unwrap();

    let mut written = util::write(&epub);

    let cover = written.read("EPUB/xhtml/cover.xhtml");
    assert!(cover.contains("<title>Covered</title>"));
    assert!(cover.contains(r#"<link rel="stylesheet" type="text/css" href="../css/cover.css"></link>"#));
    assert!(cover.contains(r#"<img src="../images/cover.png" alt="Cover Image" />"#));

    let css = written.read("EPUB/css/cover.css");
    assert!(css.contains("max-width: 100%;"));

    let package = written.read("EPUB/package.opf");
    assert!(package.contains(r#"<meta name="cover" content="cover.png"/>"#));
    assert!(package.contains(
        r#"<item id="cover.png" href="images/cover.png" media-type="image/png" properties="cover-image"/>"#
    ));
    // First in the reading order, yet absent from the table of contents
    assert!(package.contains("<itemref idref=\"cover.xhtml\"/>\n    <itemref idref=\"section0001.xhtml\"/>"));
    assert!(!written.read("EPUB/nav.xhtml").contains("cover.xhtml"));
    assert!(!written.read("EPUB/toc.ncx").contains("cover.xhtml"));
}

#[test]
fn test_cover_with_stylesheet() {
    let epub = Epub::new("Styled");
    let image = epub.add_image(PNG, Some("front.png")).unwrap();
    let css = epub.add_css("data:text/css,img{width:100%}", Some("front.css")).unwrap();
    epub.set_cover(&image, Some(&css));

    epub.with_resources(|registry| {
        assert_eq!(1, registry.len(ResourceKind::Css));
        assert!(!registry.contains(ResourceKind::Css, "cover.css"));
    });
    epub.with_sections(|sections| {
        let cover = sections.by_filename("cover.xhtml").unwrap();
        assert_eq!(Some("../css/front.css"), cover.document().stylesheet());
    });
}

#[test]
fn test_cover_replaced() {
    let epub = Epub::new("Replaced");
    let first = epub.add_image(PNG, Some("first.png")).unwrap();
    let second = epub.add_image(PNG, Some("second.png")).unwrap();
    let css = epub.add_css("data:text/css,img{}", Some("first.css")).unwrap();

    epub.set_cover(&first, Some(&css));
    epub.set_cover(&second, None);

    let mut written = util::write(&epub);
    let names = written.entry_names();

    #[rustfmt::skip]
    let expected = [
        ("EPUB/images/first.png", false),
        ("EPUB/css/first.css", false),
        ("EPUB/images/second.png", true),
        ("EPUB/css/cover.css", true),
        ("EPUB/xhtml/cover.xhtml", true),
    ];
    for (name, present) in expected {
        assert_eq!(present, names.iter().any(|entry| entry == name), "{name}");
    }
    assert_eq!(1, names.iter().filter(|name| name.starts_with("EPUB/xhtml/")).count());

    let package = written.read("EPUB/package.opf");
    assert_eq!(1, package.matches(r#"<meta name="cover""#).count());
    assert!(package.contains(r#"<meta name="cover" content="second.png"/>"#));
    assert_eq!(1, package.matches(r#"properties="cover-image""#).count());
}
