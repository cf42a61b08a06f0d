use crate::epub::util;
use epubgen::Epub;
use epubgen::ebook::epub::vocabulary::{direction, identifier_type, role, scheme};

#[test]
fn test_authors_and_roles() {
    let epub = Epub::new("Authored");
    assert_eq!("creator0", epub.add_author("A", role::AUTHOR));
    assert_eq!("creator1", epub.add_author("B", role::AUTHOR));
    assert_eq!("contributor0", epub.add_contributor("C", role::ILLUSTRATOR));

    let package = util::write(&epub).read("EPUB/package.opf");

    #[rustfmt::skip]
    let expected = [
        r#"<dc:creator id="creator0">A</dc:creator>"#,
        r#"<dc:creator id="creator1">B</dc:creator>"#,
        r#"<dc:contributor id="contributor0">C</dc:contributor>"#,
        r##"<meta refines="#creator0" property="role" scheme="marc:relators">aut</meta>"##,
        r##"<meta refines="#creator1" property="role" scheme="marc:relators">aut</meta>"##,
        r##"<meta refines="#contributor0" property="role" scheme="marc:relators">ill</meta>"##,
    ];
    for expected in expected {
        assert!(package.contains(expected), "{expected}");
    }
    assert_eq!(2, package.matches("<dc:creator ").count());
}

#[test]
fn test_metadata_setters() {
    let epub = Epub::new("Before");
    epub.set_title("After & Beyond");
    epub.set_language("ja");
    epub.set_description("A <short> description");
    epub.set_publisher("Publisher");
    epub.set_source("urn:isbn:9780000000001");
    epub.set_date("2024-01-01");
    epub.set_subjects(["One", "Two"]);
    epub.set_subjects(["Three"]);
    epub.add_subject("Four");
    epub.add_custom_meta("generator", "epubgen");
    epub.add_custom_meta("generator", "epubgen test");
    epub.set_page_progression_direction(direction::RTL);

    let package = util::write(&epub).read("EPUB/package.opf");

    #[rustfmt::skip]
    let expected = [
        "<dc:title>After &amp; Beyond</dc:title>",
        "<dc:language>ja</dc:language>",
        "<dc:description>A &lt;short&gt; description</dc:description>",
        "<dc:publisher>Publisher</dc:publisher>",
        "<dc:source>urn:isbn:9780000000001</dc:source>",
        "<dc:date>2024-01-01</dc:date>",
        "<dc:subject>Three</dc:subject>\n    <dc:subject>Four</dc:subject>",
        r#"<meta name="generator" content="epubgen test"/>"#,
        r#"<spine toc="ncx" page-progression-direction="rtl">"#,
    ];
    for expected in expected {
        assert!(package.contains(expected), "{expected}");
    }
    assert!(!package.contains("<dc:subject>One</dc:subject>"));
    assert_eq!(1, package.matches(r#"name="generator""#).count());
}

#[test]
fn test_identifiers() {
    let epub = Epub::new("Identified");
    let isbn = epub.add_identifier("9780000000001", scheme::ONIX_CODELIST5, identifier_type::ISBN_13);
    assert_eq!("identifier1", isbn);

    let mut written = util::write(&epub);
    let package = written.read("EPUB/package.opf");
    let uid = epub.with_package(|package| package.identifiers()[0].value().to_owned());

    assert!(package.contains(r#"unique-identifier="pub-id""#));
    assert!(package.contains(&format!(r#"<dc:identifier id="pub-id">{uid}</dc:identifier>"#)));
    assert!(package.contains(r#"<dc:identifier id="identifier1">9780000000001</dc:identifier>"#));
    assert!(package.contains(
        r##"<meta refines="#pub-id" property="identifier-type" scheme="xsd:string">uuid</meta>"##
    ));
    assert!(package.contains(
        r##"<meta refines="#identifier1" property="identifier-type" scheme="onix:codelist5">15</meta>"##
    ));
    assert!(written.read("EPUB/toc.ncx").contains(&uid));
}

#[test]
fn test_package_to_xml() {
    let epub = Epub::new("Standalone");

    let xml = epub.with_package(|package| {
        let mut package = package.clone();
        package.to_xml();
        package.to_xml()
    });

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<package "));
    assert!(xml.ends_with("</package>\n"));
    assert_eq!(1, xml.matches("dcterms:modified").count());
}
