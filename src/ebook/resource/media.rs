use crate::ebook::resource::ResourceKind;
use crate::ebook::resource::consts::mime;
use crate::util::uri;

/// Number of leading bytes inspected by [`sniff`].
const SNIFF_LEN: usize = 16;

/// Determines the media type of a staged resource.
///
/// Stylesheets are always `text/css`.
/// Other kinds are identified by their magic bytes,
/// falling back to the extension of `filename`.
pub(crate) fn detect(kind: ResourceKind, filename: &str, content: &[u8]) -> String {
    if kind == ResourceKind::Css {
        return mime::CSS.to_owned();
    }
    let prefix = &content[..content.len().min(SNIFF_LEN)];

    match sniff(prefix) {
        Some(media_type) => media_type.to_owned(),
        None => infer_media_type(filename),
    }
}

/// Identifies a media type from the leading bytes of a file.
pub(crate) fn sniff(content: &[u8]) -> Option<&'static str> {
    #[rustfmt::skip]
    const SIGNATURES: &[(usize, &[u8], &str)] = &[
        (0, b"\x89PNG\r\n\x1a\n", "image/png"),
        (0, b"\xFF\xD8\xFF", "image/jpeg"),
        (0, b"GIF87a", "image/gif"),
        (0, b"GIF89a", "image/gif"),
        (0, b"wOFF", "font/woff"),
        (0, b"wOF2", "font/woff2"),
        (0, b"OTTO", "font/otf"),
        (0, b"\x00\x01\x00\x00", "font/ttf"),
        (0, b"true", "font/ttf"),
        (0, b"\x1A\x45\xDF\xA3", "video/webm"),
        (4, b"ftyp", "video/mp4"),
    ];

    // RIFF container with a WEBP chunk
    if content.len() >= 12 && &content[..4] == b"RIFF" && &content[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    SIGNATURES
        .iter()
        .find(|(offset, signature, _)| {
            content
                .get(*offset..offset + signature.len())
                .is_some_and(|bytes| bytes == *signature)
        })
        .map(|(_, _, media_type)| *media_type)
}

pub(crate) fn infer_media_type(filename: &str) -> String {
    let extension = uri::file_extension(filename);

    match extension.trim_start_matches('.') {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "gif" => "image/gif",
        "webp" => "image/webp",

        // Text
        "xhtml" => mime::XHTML,
        "css" => mime::CSS,
        "ncx" => mime::NCX,

        // Fonts
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "woff" => "font/woff",
        "woff2" => "font/woff2",

        // Video
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",

        _ => mime::OCTET_STREAM,
    }
    .to_owned()
}

/// Returns the conventional file extension (with its leading dot) for a media type.
///
/// Used to name resources that originate from `data:` URLs,
/// which carry no filename of their own.
pub(crate) fn extension_for_media_type(media_type: &str) -> &'static str {
    match media_type.trim().to_ascii_lowercase().as_str() {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/svg+xml" => ".svg",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "text/css" => ".css",
        "font/ttf" | "application/x-font-ttf" => ".ttf",
        "font/otf" | "application/x-font-otf" => ".otf",
        "font/woff" | "application/font-woff" => ".woff",
        "font/woff2" => ".woff2",
        "video/mp4" => ".mp4",
        "video/webm" => ".webm",
        _ => "",
    }
}
