use std::path::Path;

use base64::{engine::general_purpose, Engine as _};

/// MIME types the uploader accepts, matching the original picker filter.
pub const SUPPORTED_UPLOAD_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// Used when a data-URL header is present but carries no extractable MIME
/// type. Deliberate leniency: such payloads are treated as PNG rather than
/// rejected.
pub const FALLBACK_IMAGE_MIME_TYPE: &str = "image/png";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Failed to extract image data: the payload is empty")]
    EmptyPayload,
    #[error("Invalid image data: expected data:<mime>;base64,<payload>")]
    MalformedDataUrl,
    #[error("Invalid base64 image payload: {0}")]
    InvalidBase64(String),
}

/// Base64 payload plus MIME type, the marshalled form sent to and received
/// from the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub base64: String,
    pub mime_type: String,
}

pub fn detect_mime_type(data: &[u8]) -> Option<String> {
    infer::get(data).map(|kind| kind.mime_type().to_string())
}

pub fn normalize_mime_type(mime_type: &str) -> String {
    let lowered = mime_type.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "image/jpg" => "image/jpeg".to_string(),
        _ => lowered,
    }
}

pub fn mime_type_for_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

pub fn encode_bytes(bytes: &[u8], mime_type: &str) -> Result<EncodedImage, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::EmptyPayload);
    }
    Ok(EncodedImage {
        base64: general_purpose::STANDARD.encode(bytes),
        mime_type: normalize_mime_type(mime_type),
    })
}

pub fn to_data_url(image: &EncodedImage) -> String {
    format!("data:{};base64,{}", image.mime_type, image.base64)
}

/// Parses `data:<mime>;base64,<payload>`. Both the header and the payload must
/// be present; a header without an extractable MIME type falls back to
/// [`FALLBACK_IMAGE_MIME_TYPE`].
pub fn parse_data_url(data_url: &str) -> Result<EncodedImage, CodecError> {
    let (header, payload) = data_url
        .split_once(',')
        .ok_or(CodecError::MalformedDataUrl)?;
    if header.is_empty() || payload.is_empty() {
        return Err(CodecError::MalformedDataUrl);
    }

    let mime_type = header
        .split_once(':')
        .and_then(|(_, rest)| rest.split(';').next())
        .filter(|value| !value.is_empty())
        .unwrap_or(FALLBACK_IMAGE_MIME_TYPE)
        .to_string();

    Ok(EncodedImage {
        base64: payload.to_string(),
        mime_type,
    })
}

pub fn decode_payload(image: &EncodedImage) -> Result<Vec<u8>, CodecError> {
    general_purpose::STANDARD
        .decode(&image.base64)
        .map_err(|err| CodecError::InvalidBase64(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01];

    #[test]
    fn encode_then_parse_round_trips_bytes_and_mime() {
        let encoded = encode_bytes(PNG_MAGIC, "image/png").unwrap();
        let data_url = to_data_url(&encoded);
        let parsed = parse_data_url(&data_url).unwrap();

        assert_eq!(parsed.mime_type, "image/png");
        assert_eq!(decode_payload(&parsed).unwrap(), PNG_MAGIC);
    }

    #[test]
    fn encoding_an_empty_read_fails() {
        assert_eq!(encode_bytes(&[], "image/png"), Err(CodecError::EmptyPayload));
    }

    #[test]
    fn parsing_a_plain_string_is_a_parse_error() {
        assert_eq!(
            parse_data_url("not-a-data-url"),
            Err(CodecError::MalformedDataUrl)
        );
    }

    #[test]
    fn parsing_requires_a_payload() {
        assert_eq!(
            parse_data_url("data:image/png;base64,"),
            Err(CodecError::MalformedDataUrl)
        );
    }

    #[test]
    fn unparsable_header_falls_back_to_png() {
        let parsed = parse_data_url("mystery-header,QUFBQQ==").unwrap();
        assert_eq!(parsed.mime_type, FALLBACK_IMAGE_MIME_TYPE);
        assert_eq!(parsed.base64, "QUFBQQ==");
    }

    #[test]
    fn mime_is_read_from_a_well_formed_header() {
        let parsed = parse_data_url("data:image/webp;base64,QUFBQQ==").unwrap();
        assert_eq!(parsed.mime_type, "image/webp");
    }

    #[test]
    fn jpg_normalizes_to_jpeg() {
        assert_eq!(normalize_mime_type("image/JPG"), "image/jpeg");
        assert_eq!(normalize_mime_type(" image/png "), "image/png");
    }

    #[test]
    fn extension_lookup_covers_the_accepted_types() {
        assert_eq!(
            mime_type_for_extension(Path::new("massing.PNG")),
            Some("image/png")
        );
        assert_eq!(
            mime_type_for_extension(Path::new("shot.jpeg")),
            Some("image/jpeg")
        );
        assert_eq!(mime_type_for_extension(Path::new("model.obj")), None);
    }

    #[test]
    fn detect_recognizes_png_magic_bytes() {
        assert_eq!(detect_mime_type(PNG_MAGIC).as_deref(), Some("image/png"));
    }
}
