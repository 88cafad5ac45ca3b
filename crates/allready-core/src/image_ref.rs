//! Normalized product image references.
//!
//! An image reaches the form either as a local file (picked or dropped)
//! or as a pasted URL. Both end up as an [`ImageRef`] whose
//! [`preview`](ImageRef::preview) can go straight into an `<img src>`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ImageError;

const SVG_MIME: &str = "image/svg+xml";

/// How far into a file to look for an `<svg` root element.
const SVG_SNIFF_LEN: usize = 1024;

/// A product image, either read from a local file or linked by URL.
///
/// Exactly one source is ever set, and a preview is always available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// A local file read into a `data:` URL.
    Local {
        /// File name as reported by the browser.
        file_name: String,
        /// MIME type reported by the browser, or sniffed from the contents.
        mime: String,
        /// `data:<mime>;base64,...` URL of the file contents.
        preview: String,
    },
    /// A remote image used as its own preview.
    Remote {
        /// Trimmed URL.
        url: String,
    },
}

impl ImageRef {
    /// Build a reference from a local file's contents.
    ///
    /// The format is detected from the bytes, not the file name, so a
    /// renamed text file is still rejected. Use
    /// [`from_typed_file`](Self::from_typed_file) when the browser
    /// reported a MIME type.
    ///
    /// # Errors
    ///
    /// - [`ImageError::Empty`] if `bytes` is empty.
    /// - [`ImageError::TooLarge`] if `bytes` exceeds `max_bytes`.
    /// - [`ImageError::Unsupported`] if the contents are not a
    ///   recognizable image.
    pub fn from_file(file_name: &str, bytes: &[u8], max_bytes: usize) -> Result<Self, ImageError> {
        Self::from_typed_file(file_name, None, bytes, max_bytes)
    }

    /// Build a reference from a local file and its reported MIME type.
    ///
    /// Any `image/*` type is accepted as reported. A missing or blank
    /// type falls back to sniffing the contents.
    ///
    /// # Errors
    ///
    /// As [`from_file`](Self::from_file); a non-image `content_type` is
    /// [`ImageError::Unsupported`].
    pub fn from_typed_file(
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
        max_bytes: usize,
    ) -> Result<Self, ImageError> {
        if bytes.is_empty() {
            return Err(ImageError::Empty);
        }
        if bytes.len() > max_bytes {
            return Err(ImageError::TooLarge {
                size: bytes.len(),
                max: max_bytes,
            });
        }
        let reported = content_type
            .map(|t| t.trim().to_ascii_lowercase())
            .filter(|t| !t.is_empty());
        let mime = match reported {
            Some(t) if t.starts_with("image/") => Some(t),
            Some(_) => None,
            None => sniff_mime(bytes).map(str::to_owned),
        }
        .ok_or_else(|| ImageError::Unsupported {
            name: file_name.to_owned(),
        })?;
        Ok(Self::Local {
            file_name: file_name.to_owned(),
            preview: data_url(&mime, bytes),
            mime,
        })
    }

    /// Build a reference from text typed into the URL field.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::EmptyUrl`] if `raw` is blank after trimming.
    pub fn from_url(raw: &str) -> Result<Self, ImageError> {
        let url = raw.trim();
        if url.is_empty() {
            return Err(ImageError::EmptyUrl);
        }
        Ok(Self::Remote {
            url: url.to_owned(),
        })
    }

    /// Source usable as an `<img src>`.
    #[must_use]
    pub fn preview(&self) -> &str {
        match self {
            Self::Local { preview, .. } => preview,
            Self::Remote { url } => url,
        }
    }

    /// Short human-readable description of where the image came from.
    #[must_use]
    pub fn source_label(&self) -> &str {
        match self {
            Self::Local { file_name, .. } => file_name,
            Self::Remote { url } => url,
        }
    }
}

/// Image MIME type recognized from magic bytes, or from an SVG root
/// element near the start of the file.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if let Some(mime) = image::guess_format(bytes)
        .ok()
        .map(|format| format.to_mime_type())
        .filter(|m| m.starts_with("image/"))
    {
        return Some(mime);
    }
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SVG_SNIFF_LEN)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    let is_svg = head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"));
    is_svg.then_some(SVG_MIME)
}

/// Encode `bytes` as a base64 `data:` URL.
#[must_use]
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_fn(2, 2, |_, _| image::Rgba([255, 0, 0, 255]));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn png_file_becomes_data_url_preview() {
        let bytes = tiny_png();
        let image = ImageRef::from_file("shoe.png", &bytes, 1024).unwrap();
        match &image {
            ImageRef::Local {
                file_name, mime, ..
            } => {
                assert_eq!(file_name, "shoe.png");
                assert_eq!(mime, "image/png");
            }
            ImageRef::Remote { .. } => panic!("expected a local image"),
        }
        assert!(image.preview().starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert_eq!(image.source_label(), "shoe.png");
    }

    #[test]
    fn format_is_sniffed_not_taken_from_name() {
        let gif = b"GIF89a\x01\x00\x01\x00\x00\x00\x00;";
        let image = ImageRef::from_file("photo.png", gif, 1024).unwrap();
        assert!(image.preview().starts_with("data:image/gif;base64,"));
    }

    #[test]
    fn non_image_is_rejected_with_name() {
        let err = ImageRef::from_file("notes.png", b"just some text", 1024).unwrap_err();
        assert_eq!(
            err,
            ImageError::Unsupported {
                name: "notes.png".into()
            }
        );
    }

    #[test]
    fn empty_and_oversized_files_are_rejected() {
        assert_eq!(
            ImageRef::from_file("a.png", &[], 1024).unwrap_err(),
            ImageError::Empty
        );
        let bytes = tiny_png();
        let err = ImageRef::from_file("a.png", &bytes, 8).unwrap_err();
        assert_eq!(
            err,
            ImageError::TooLarge {
                size: bytes.len(),
                max: 8
            }
        );
    }

    #[test]
    fn svg_file_is_recognized_from_markup() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"></svg>"#;
        let image = ImageRef::from_file("logo.svg", svg, 1024).unwrap();
        assert!(image.preview().starts_with("data:image/svg+xml;base64,"));

        let with_prolog = b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        assert!(ImageRef::from_file("logo.svg", with_prolog, 1024).is_ok());
    }

    #[test]
    fn tiff_and_ico_files_are_accepted() {
        let tiff = b"II*\0\x08\0\0\0\0\0";
        let image = ImageRef::from_file("photo.tiff", tiff, 1024).unwrap();
        assert!(image.preview().starts_with("data:image/tiff;base64,"));

        let ico = b"\0\0\x01\0\x01\0\x10\x10\0\0";
        assert!(ImageRef::from_file("fav.ico", ico, 1024).is_ok());
    }

    #[test]
    fn reported_image_type_is_trusted() {
        let image =
            ImageRef::from_typed_file("scan.heic", Some("image/heic"), b"opaque", 1024).unwrap();
        match image {
            ImageRef::Local { mime, preview, .. } => {
                assert_eq!(mime, "image/heic");
                assert!(preview.starts_with("data:image/heic;base64,"));
            }
            ImageRef::Remote { .. } => panic!("expected a local image"),
        }
    }

    #[test]
    fn reported_non_image_type_is_rejected() {
        let err = ImageRef::from_typed_file("shoe.png", Some("text/plain"), &tiny_png(), 1024)
            .unwrap_err();
        assert_eq!(
            err,
            ImageError::Unsupported {
                name: "shoe.png".into()
            }
        );
    }

    #[test]
    fn blank_reported_type_falls_back_to_sniffing() {
        let image = ImageRef::from_typed_file("shoe", Some(""), &tiny_png(), 1024).unwrap();
        assert!(image.preview().starts_with("data:image/png;base64,"));
        assert!(ImageRef::from_typed_file("notes", None, b"plain text", 1024).is_err());
    }

    #[test]
    fn url_is_trimmed_and_is_its_own_preview() {
        let image = ImageRef::from_url("  https://example.com/shoe.jpg \n").unwrap();
        assert_eq!(
            image,
            ImageRef::Remote {
                url: "https://example.com/shoe.jpg".into()
            }
        );
        assert_eq!(image.preview(), "https://example.com/shoe.jpg");
    }

    #[test]
    fn blank_url_is_rejected() {
        assert_eq!(ImageRef::from_url("   ").unwrap_err(), ImageError::EmptyUrl);
    }

    #[test]
    fn data_url_encodes_payload() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }
}
