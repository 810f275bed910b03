use crate::error::Error;
use base64::{engine::general_purpose, Engine};

/// a decoded drivers license image ready for upload
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// decodes a license image submitted on a rental request, either a raw base64
/// string or a full `data:<content type>;base64,<payload>` url
///
/// raw payloads without a content type are assumed to be jpeg, the format
/// produced by the request form camera capture
pub fn parse_image_payload(payload: &str) -> Result<ImagePayload, Error> {
    let (content_type, encoded) = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (metadata, encoded) = rest
                .split_once(',')
                .ok_or_else(|| Error::UploadFailed(String::from("malformed data url")))?;

            (metadata.trim_end_matches(";base64"), encoded)
        }
        None => ("image/jpeg", payload),
    };

    let extension = image_extension(content_type)?;

    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| Error::UploadFailed(String::from("invalid base64 image payload")))?;

    Ok(ImagePayload { bytes, extension })
}

/// extension for an allow listed image content type, eg: `image/png` -> `png`
fn image_extension(content_type: &str) -> Result<&'static str, Error> {
    match content_type {
        "image/jpeg" | "image/jpg" => Ok("jpeg"),
        "image/png" => Ok("png"),
        "image/webp" => Ok("webp"),
        other => Err(Error::UploadFailed(format!(
            "unsupported image type: {}",
            other
        ))),
    }
}
