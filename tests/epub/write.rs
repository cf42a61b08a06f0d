use crate::epub::util::{self, PNG};
use epubgen::errors::EpubError;
use epubgen::{Epub, MemoryFs, StagingFs};
use std::sync::Arc;
use zip::CompressionMethod;

#[test]
fn test_write_minimal() {
    let epub = Epub::new("T");
    epub.add_section("<h1>X</h1>", None, None, None).unwrap();

    let mut written = util::write(&epub);

    #[rustfmt::skip]
    let expected = [
        "mimetype",
        "EPUB/nav.xhtml",
        "EPUB/package.opf",
        "EPUB/toc.ncx",
        "EPUB/xhtml/section0001.xhtml",
        "META-INF/container.xml",
    ];
    assert_eq!(expected.to_vec(), written.entry_names());

    let mimetype = written.archive().by_index(0).unwrap();
    assert_eq!("mimetype", mimetype.name());
    assert_eq!(CompressionMethod::Stored, mimetype.compression());
    drop(mimetype);
    assert_eq!("application/epub+zip", written.read("mimetype"));

    let section = written.read("EPUB/xhtml/section0001.xhtml");
    assert!(section.contains("<title></title>"));
    assert!(section.contains("<body>\n    <h1>X</h1>\n  </body>"));

    let container = written.read("META-INF/container.xml");
    assert!(container.contains(r#"full-path="EPUB/package.opf""#));
}

#[test]
fn test_write_resource_layout() {
    let epub = Epub::new("Layout");
    epub.add_css(util::CSS, Some("style.css")).unwrap();
    epub.add_font(util::WOFF2, Some("font.woff2")).unwrap();
    epub.add_image(PNG, Some("pic.png")).unwrap();
    epub.add_video(util::MP4, Some("clip.mp4")).unwrap();

    let mut written = util::write(&epub);
    let names = written.entry_names();

    for expected in [
        "EPUB/css/style.css",
        "EPUB/fonts/font.woff2",
        "EPUB/images/pic.png",
        "EPUB/videos/clip.mp4",
    ] {
        assert!(names.iter().any(|name| name == expected), "{expected}");
    }
    assert_eq!("body { margin: 0; }", written.read("EPUB/css/style.css"));
    assert_eq!(b"\x89PNG\r\n\x1a\n".to_vec(), written.read_bytes("EPUB/images/pic.png"));

    let package = written.read("EPUB/package.opf");

    #[rustfmt::skip]
    let expected = [
        r#"<item id="style.css" href="css/style.css" media-type="text/css"/>"#,
        r#"<item id="font.woff2" href="fonts/font.woff2" media-type="font/woff2"/>"#,
        r#"<item id="pic.png" href="images/pic.png" media-type="image/png"/>"#,
        r#"<item id="clip.mp4" href="videos/clip.mp4" media-type="video/mp4"/>"#,
    ];
    for expected in expected {
        assert!(package.contains(expected), "{expected}");
    }
}

#[test]
fn test_write_media_type_falls_back_to_extension() {
    // Content without a known signature
    let epub = Epub::new("Fallback");
    epub.add_image("data:image/svg+xml,%3Csvg%2F%3E", Some("drawing.svg")).unwrap();

    let package = util::write(&epub).read("EPUB/package.opf");
    assert!(package.contains(r#"href="images/drawing.svg" media-type="image/svg+xml""#));
}

#[test]
fn test_write_manifest_and_spine_completeness() {
    let epub = Epub::new("Complete");
    let image = epub.add_image(PNG, None).unwrap();
    epub.add_image(PNG, None).unwrap();
    epub.add_css(util::CSS, None).unwrap();
    epub.add_section("<p>1</p>", Some("One"), None, None).unwrap();
    epub.add_section("<p>2</p>", None, Some("2 Two.xhtml"), None).unwrap();
    epub.set_cover(&image, None);
    epub.add_section("<p>3</p>", Some("Three"), None, None).unwrap();

    let mut written = util::write(&epub);
    let package = written.read("EPUB/package.opf");

    // nav + ncx + 2 images + 2 stylesheets (including the cover's) + 4 sections
    assert_eq!(10, package.matches("<item ").count());
    assert_eq!(1, package.matches(r#"properties="nav""#).count());
    assert_eq!(1, package.matches(r#"media-type="application/x-dtbncx+xml""#).count());

    let itemrefs: Vec<_> = package
        .lines()
        .filter_map(|line| line.trim().strip_prefix(r#"<itemref idref=""#))
        .map(|rest| rest.trim_end_matches(r#""/>"#))
        .collect();
    #[rustfmt::skip]
    let expected = [
        "section0001.xhtml",
        "id2two.xhtml",
        "cover.xhtml",
        "section0002.xhtml",
    ];
    assert_eq!(expected.to_vec(), itemrefs);

    for itemref in itemrefs {
        assert_eq!(1, package.matches(&format!(r#"<item id="{itemref}""#)).count());
    }
}

#[test]
fn test_write_toc() {
    let epub = Epub::new("Contents");
    epub.add_section("", Some("First"), None, None).unwrap();
    epub.add_section("", None, None, None).unwrap();
    epub.add_section("", Some("Third"), Some("third.xhtml"), None).unwrap();

    let mut written = util::write(&epub);

    let nav = written.read("EPUB/nav.xhtml");
    assert!(nav.contains(r#"<a href="xhtml/section0001.xhtml">First</a>"#));
    assert!(nav.contains(r#"<a href="xhtml/third.xhtml">Third</a>"#));
    assert!(!nav.contains("section0002.xhtml"));

    let ncx = written.read("EPUB/toc.ncx");
    let uid = epub.with_package(|package| package.identifiers()[0].value().to_owned());
    assert!(ncx.contains(&format!(r#"<meta name="dtb:uid" content="{uid}"/>"#)));
    assert!(ncx.contains("<text>Contents</text>"));
    assert_eq!(2, ncx.matches("<navPoint ").count());
    assert!(ncx.contains(r#"<navPoint id="navPoint-2" playOrder="2">"#));
}

#[test]
fn test_write_without_compression() {
    let epub = Epub::new("Stored");
    epub.add_section("<p>Stored</p>", None, None, None).unwrap();

    let mut written = util::write_with(&epub, |options| {
        options.compression(0);
    });
    let archive = written.archive();

    for i in 0..archive.len() {
        assert_eq!(CompressionMethod::Stored, archive.by_index(i).unwrap().compression());
    }
}

#[test]
fn test_write_compressed_entries() {
    let epub = Epub::new("Deflated");
    epub.add_section("<p>Deflated</p>", None, None, None).unwrap();

    let mut written = util::write(&epub);
    let archive = written.archive();

    assert_eq!(CompressionMethod::Stored, archive.by_index(0).unwrap().compression());
    for i in 1..archive.len() {
        assert_eq!(CompressionMethod::Deflated, archive.by_index(i).unwrap().compression());
    }
}

#[test]
fn test_write_staged_in_memory() {
    let memory = Arc::new(MemoryFs::new());
    let epub = Epub::new("Memory");
    epub.add_image(PNG, None).unwrap();

    let mut written = util::write_with(&epub, |options| {
        options.staging(memory.clone());
    });

    assert!(written.path().is_file());
    assert!(written.entry_names().contains(&"EPUB/images/image0001.png".to_owned()));
    // The staging tree is removed afterward
    assert!(memory.is_empty());
}

#[test]
fn test_write_in_memory_shorthand() {
    let epub = Epub::new("Memory");
    epub.add_section("<p/>", None, None, None).unwrap();

    let mut written = util::write_with(&epub, |options| {
        options.in_memory();
    });
    assert_eq!(6, written.entry_names().len());
}

#[test]
fn test_write_stamps_single_modified() {
    let epub = Epub::new("Twice");
    let dir = tempfile::tempdir().unwrap();

    epub.write(dir.path().join("first.epub")).unwrap();
    let mut written = util::write(&epub);
    let package = written.read("EPUB/package.opf");

    assert_eq!(1, package.matches(r#"property="dcterms:modified""#).count());
    // Generated entries are not retained between writes
    assert_eq!(1, package.matches(r#"<item id="nav""#).count());
    epub.with_package(|package| {
        assert!(package.modified().is_some());
        assert!(package.manifest().is_empty());
    });
}

#[test]
fn test_write_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("book.epub");
    let memory = Arc::new(MemoryFs::new());

    let epub = Epub::new("Unwritable");
    let error = epub
        .write_options()
        .staging(memory.clone())
        .save(&path)
        .unwrap_err();

    match error {
        EpubError::UnableToCreateEpub { path: error_path, .. } => assert_eq!(path, error_path),
        error => panic!("unexpected error: {error}"),
    }
    assert!(!path.exists());
    assert!(memory.is_empty());
}

#[test]
fn test_write_source_removed_after_registration() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("gone.png");
    std::fs::write(&source, b"\x89PNG\r\n\x1a\n").unwrap();
    let source = source.to_str().unwrap();

    let epub = Epub::new("Vanishing");
    assert_eq!("../images/gone.png", epub.add_image(source, None).unwrap());
    std::fs::remove_file(source).unwrap();

    let error = epub
        .write_options()
        .in_memory()
        .save(dir.path().join("book.epub"))
        .unwrap_err();

    match error {
        EpubError::FileRetrieval { reference, .. } => assert_eq!(source, reference),
        error => panic!("unexpected error: {error}"),
    }
}

#[test]
fn test_staging_backends_are_interchangeable() {
    let dir = tempfile::tempdir().unwrap();
    let disk: Arc<dyn StagingFs> = Arc::new(epubgen::DiskFs::new(dir.path()));
    let memory: Arc<dyn StagingFs> = Arc::new(MemoryFs::new());

    let epub = Epub::new("Backends");
    epub.add_section("<p>Same</p>", Some("Same"), None, None).unwrap();

    let mut entries = Vec::new();
    for (fs, name) in [(disk, "disk.epub"), (memory, "memory.epub")] {
        let path = dir.path().join(name);
        epub.write_options().staging(fs).save(&path).unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
        let names: Vec<_> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_owned())
            .collect();
        entries.push(names);
    }

    assert_eq!(entries[0], entries[1]);
    // Only the written archives remain; the staging tree was removed
    let mut remaining: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    remaining.sort();
    assert_eq!(vec!["disk.epub", "memory.epub"], remaining);
}

#[test]
fn test_write_every_manifest_item_is_archived() {
    let staging = tempfile::tempdir().unwrap();
    let epub = Epub::new("Contained");

    assert!(epub.add_image(PNG, Some("../../../escaped.png")).is_err());
    assert!(epub.add_section("", None, Some("../escaped.xhtml"), None).is_err());
    epub.add_image(PNG, Some("kept.png")).unwrap();
    epub.add_section("<p>1</p>", Some("One"), None, None).unwrap();

    let fs: Arc<dyn StagingFs> = Arc::new(epubgen::DiskFs::new(staging.path()));
    let mut written = util::write_with(&epub, |options| {
        options.staging(fs);
    });

    let entries = written.entry_names();
    let package = written.read("EPUB/package.opf");
    let hrefs: Vec<_> = package
        .lines()
        .filter(|line| line.trim().starts_with("<item "))
        .filter_map(|line| line.split(r#"href=""#).nth(1))
        .filter_map(|rest| rest.split('"').next())
        .collect();

    assert_eq!(4, hrefs.len());
    for href in hrefs {
        assert!(entries.contains(&format!("EPUB/{href}")), "{href}");
    }
    // Nothing was staged outside of the removed staging tree
    assert_eq!(0, std::fs::read_dir(staging.path()).unwrap().count());
}

#[test]
fn test_write_manifest_ids_avoid_metadata_ids() {
    let epub = Epub::new("Ids");
    epub.add_author("Author", "aut");
    epub.add_section("", Some("A"), Some("creator0"), None).unwrap();
    epub.add_section("", Some("B"), Some("pub-id"), None).unwrap();

    let mut written = util::write(&epub);
    let package = written.read("EPUB/package.opf");

    for id in ["creator0", "pub-id", "creator0-2", "pub-id-2"] {
        assert_eq!(1, package.matches(&format!(r#"id="{id}""#)).count(), "{id}");
    }
    assert!(package.contains(r#"<item id="creator0-2" href="xhtml/creator0""#));
    assert!(package.contains(r#"<itemref idref="pub-id-2"/>"#));
}

#[test]
fn test_write_toc_without_titled_sections() {
    let epub = Epub::new("Untitled");
    epub.add_section("<p>1</p>", None, None, None).unwrap();
    epub.add_section("<p>2</p>", None, None, None).unwrap();

    let mut written = util::write(&epub);

    let nav = written.read("EPUB/nav.xhtml");
    assert!(nav.contains(r#"<a href="xhtml/section0001.xhtml">Untitled</a>"#));
    assert!(!nav.contains("section0002.xhtml"));

    let ncx = written.read("EPUB/toc.ncx");
    assert_eq!(1, ncx.matches("<navPoint ").count());
    assert!(ncx.contains(r#"<content src="xhtml/section0001.xhtml"/>"#));

    // The fallback entry is not retained by the publication
    epub.with_toc(|toc| assert!(toc.is_empty()));
}

#[test]
fn test_write_toc_without_sections() {
    let epub = Epub::new("");
    let mut written = util::write(&epub);

    let nav = written.read("EPUB/nav.xhtml");
    assert!(nav.contains(r#"<a href="nav.xhtml">nav.xhtml</a>"#));
    assert!(!nav.contains("<ol></ol>"));
    assert_eq!(1, written.read("EPUB/toc.ncx").matches("<navPoint ").count());
}
