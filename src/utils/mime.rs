//! MIME type detection for page images

/// Fallback when neither content nor file name identify the format
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Identify the format from magic numbers
pub fn sniff_mime(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Identify the format from a file name or URL extension
pub fn mime_from_path(path: &str) -> Option<String> {
    mime_guess::from_path(path)
        .first_raw()
        .map(|s| s.to_string())
}

/// Prefer content sniffing, then the extension, then octet-stream
pub fn detect_mime(bytes: &[u8], path: Option<&str>) -> String {
    if let Some(m) = sniff_mime(bytes) {
        return m;
    }
    if let Some(p) = path
        && let Some(m) = mime_from_path(p)
    {
        return m;
    }
    OCTET_STREAM.to_string()
}

pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn sniffs_png() {
        assert_eq!(sniff_mime(PNG_HEADER).as_deref(), Some("image/png"));
        assert_eq!(detect_mime(PNG_HEADER, Some("page.jpg")), "image/png");
    }

    #[test]
    fn falls_back_to_extension_then_octet_stream() {
        assert_eq!(detect_mime(b"????", Some("scan.jpeg")), "image/jpeg");
        assert_eq!(detect_mime(b"????", None), OCTET_STREAM);
        assert_eq!(detect_mime(b"????", Some("notes")), OCTET_STREAM);
    }

    #[test]
    fn image_mime_check() {
        assert!(is_image_mime("image/webp"));
        assert!(!is_image_mime(OCTET_STREAM));
    }
}
