use base64::prelude::*;
use std::io;
use std::path::Path;

/// Reads a local image file and inlines it as a `data:` URI, the form
/// the badge records store. No size or format validation is performed.
pub async fn read_as_data_uri(path: &Path) -> io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    let media_type = media_type_for(path);
    let encoded = BASE64_STANDARD.encode(&bytes);
    Ok(format!("data:{media_type};base64,{encoded}"))
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
