//! `data:` URL encoding for picked image files.

use base64::Engine;

/// MIME type used when a file declares none.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Whether a declared MIME type names an image. A missing type is not an image.
pub fn is_image_mime(mime: Option<&str>) -> bool {
    mime.is_some_and(|m| m.starts_with("image/"))
}

/// Encode raw bytes as `data:<mime>;base64,<payload>`.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_mime_requires_image_prefix() {
        assert!(is_image_mime(Some("image/png")));
        assert!(is_image_mime(Some("image/svg+xml")));
        assert!(!is_image_mime(Some("text/plain")));
        assert!(!is_image_mime(Some("IMAGE/PNG")));
        assert!(!is_image_mime(Some("")));
        assert!(!is_image_mime(None));
    }

    #[test]
    fn encodes_png_header() {
        let url = encode_data_url("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn empty_file_still_produces_a_url() {
        assert_eq!(encode_data_url("image/gif", &[]), "data:image/gif;base64,");
        assert_eq!(encode_data_url("", b"a"), "data:application/octet-stream;base64,YQ==");
    }
}
