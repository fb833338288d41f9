//! Adapter for JSON page-list documents produced by the upstream PDF
//! generator's `ToJSON`. Only the first page is rendered.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as Base64Engine;
use serde::Deserialize;

use crate::{generate_image, Error, ImageOptions, Result, STDIN_SENTINEL};

// Field names match the upstream document verbatim; everything we do not
// consume (global options, cover, TOC) is ignored.
#[derive(Debug, Deserialize)]
struct JsonDocument {
    #[serde(rename = "Pages", default)]
    pages: Vec<JsonPage>,
}

#[derive(Debug, Deserialize)]
struct JsonPage {
    #[serde(rename = "Base64PageData", default)]
    base64_page_data: String,
    #[serde(rename = "InputFile", default)]
    input_file: String,
}

/// Translates a page-list document into options for its first page.
///
/// Returns `Ok(None)` when the page list is empty: "nothing to render", not
/// an error. A page carrying base64 HTML becomes a stdin-sentinel invocation
/// with the decoded content; otherwise `InputFile` is used directly.
pub fn options_from_json(reader: impl Read) -> Result<Option<ImageOptions>> {
    let doc: JsonDocument =
        serde_json::from_reader(reader).map_err(|e| Error::Json(e.to_string()))?;

    let Some(page) = doc.pages.first() else {
        return Ok(None);
    };

    if page.base64_page_data.is_empty() {
        return Ok(Some(ImageOptions {
            input: page.input_file.clone(),
            ..Default::default()
        }));
    }

    let html = BASE64
        .decode(&page.base64_page_data)
        .map_err(|e| Error::Base64(format!("page 0: {}", e)))?;
    let html = String::from_utf8_lossy(&html).into_owned();

    Ok(Some(ImageOptions {
        input: STDIN_SENTINEL.to_string(),
        html,
        ..Default::default()
    }))
}

/// Creates an image for the first page of a JSON page-list document.
///
/// `Ok(None)` means the document had no pages and no image was produced.
pub fn image_from_json(reader: impl Read) -> Result<Option<Vec<u8>>> {
    match options_from_json(reader)? {
        Some(options) => generate_image(&options).map(Some),
        None => Ok(None),
    }
}
