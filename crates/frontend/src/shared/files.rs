/// File download helpers (attestations, generated documents)
use base64::Engine;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// One part of a multipart/mixed response body.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Save raw bytes as a file via a temporary object URL.
pub fn save_bytes(bytes: &[u8], content_type: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let properties = BlobPropertyBag::new();
    properties.set_type(content_type);

    let blob = Blob::new_with_buffer_source_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    save_blob(&blob, filename)
}

/// Trigger a browser download of an existing Blob.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

/// Extract the filename from a Content-Disposition header value.
/// `attachment; filename="scan.pdf"` -> `scan.pdf`
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let marker = "filename=";
    let pos = header.to_ascii_lowercase().find(marker)?;
    let raw = header[pos + marker.len()..].trim();
    let raw = raw.split(';').next().unwrap_or(raw).trim();
    let name = raw.trim_matches('"').trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Extract the boundary token from a multipart Content-Type value.
/// `multipart/mixed; boundary=abc123` -> `abc123`
pub fn boundary_from_content_type(content_type: &str) -> Option<String> {
    for param in content_type.split(';').skip(1) {
        let param = param.trim();
        if let Some(value) = param.strip_prefix("boundary=") {
            let value = value.trim_matches('"');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Parse a multipart/mixed body into parts.
///
/// The backend sends generated documents as text parts with
/// `Content-Transfer-Encoding: base64`; those are decoded here. Parts
/// without a filename are skipped.
pub fn parse_multipart_mixed(body: &str, boundary: &str) -> Vec<FilePart> {
    let delimiter = format!("--{}", boundary);
    let mut parts = Vec::new();

    for raw_part in body.split(delimiter.as_str()).skip(1) {
        let raw_part = raw_part.trim_start_matches(['\r', '\n']);
        if raw_part.starts_with("--") || raw_part.trim().is_empty() {
            continue;
        }

        let (headers, content) = match split_headers(raw_part) {
            Some(v) => v,
            None => continue,
        };

        let mut filename = None;
        let mut content_type = "application/octet-stream".to_string();
        let mut is_base64 = false;
        for line in headers.lines() {
            let lower = line.to_ascii_lowercase();
            if lower.starts_with("content-disposition:") {
                filename = filename_from_content_disposition(line);
            } else if lower.starts_with("content-type:") {
                content_type = line["content-type:".len()..].trim().to_string();
            } else if lower.starts_with("content-transfer-encoding:") {
                is_base64 = lower.contains("base64");
            }
        }

        let Some(filename) = filename else {
            continue;
        };

        let content = content.trim_end_matches(['\r', '\n']);
        let bytes = if is_base64 {
            let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
            match base64::engine::general_purpose::STANDARD.decode(compact) {
                Ok(b) => b,
                Err(e) => {
                    log::error!("Failed to decode base64 part {}: {}", filename, e);
                    continue;
                }
            }
        } else {
            content.as_bytes().to_vec()
        };

        parts.push(FilePart {
            filename,
            content_type,
            bytes,
        });
    }

    parts
}

fn split_headers(part: &str) -> Option<(&str, &str)> {
    if let Some(idx) = part.find("\r\n\r\n") {
        Some((&part[..idx], &part[idx + 4..]))
    } else {
        part.find("\n\n").map(|idx| (&part[..idx], &part[idx + 2..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_parsed_from_content_disposition() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"scan.pdf\""),
            Some("scan.pdf".to_string())
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=decharge.docx; size=42"),
            Some("decharge.docx".to_string())
        );
        assert_eq!(filename_from_content_disposition("inline"), None);
    }

    #[test]
    fn boundary_is_parsed_from_content_type() {
        assert_eq!(
            boundary_from_content_type("multipart/mixed; boundary=abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(
            boundary_from_content_type("multipart/mixed; charset=utf-8; boundary=\"xyz\""),
            Some("xyz".to_string())
        );
        assert_eq!(boundary_from_content_type("application/pdf"), None);
    }

    #[test]
    fn multipart_body_splits_into_named_parts() {
        let body = concat!(
            "--frontier\r\n",
            "Content-Disposition: attachment; filename=\"a.txt\"\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "hello\r\n",
            "--frontier\r\n",
            "Content-Disposition: attachment; filename=\"b.bin\"\r\n",
            "Content-Type: application/octet-stream\r\n",
            "Content-Transfer-Encoding: base64\r\n",
            "\r\n",
            "aGVsbG8=\r\n",
            "--frontier--\r\n",
        );

        let parts = parse_multipart_mixed(body, "frontier");
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].filename, "a.txt");
        assert_eq!(parts[0].bytes, b"hello");
        assert_eq!(parts[1].filename, "b.bin");
        assert_eq!(parts[1].bytes, b"hello");
    }

    #[test]
    fn parts_without_filename_are_skipped() {
        let body = "--b\r\nContent-Type: text/plain\r\n\r\nignored\r\n--b--\r\n";
        assert!(parse_multipart_mixed(body, "b").is_empty());
    }
}
