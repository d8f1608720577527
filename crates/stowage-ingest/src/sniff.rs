//! Media-type sniffing from magic bytes.
//!
//! Classification looks only at the leading bytes of the payload; any
//! client-declared content type is ignored. This is what defeats a
//! malicious payload renamed to `.png`.

use image::ImageFormat;

/// Number of leading bytes inspected when classifying content.
pub const SNIFF_WINDOW: usize = 1024;

/// Determine the media type of `content` from its magic bytes.
///
/// At most the first [`SNIFF_WINDOW`] bytes are examined; the payload is
/// never decoded. Returns `None` when the bytes match no known format.
pub fn sniff_media_type(content: &[u8]) -> Option<&'static str> {
    let window = &content[..content.len().min(SNIFF_WINDOW)];
    let format = image::guess_format(window).ok()?;
    Some(media_type_of(format))
}

fn media_type_of(format: ImageFormat) -> &'static str {
    format.to_mime_type()
}
