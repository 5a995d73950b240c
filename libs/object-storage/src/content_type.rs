/// Fallback for every extension without an explicit mapping.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Suffix of the last path segment starting at its final `.`, if any.
fn extension(filename: &str) -> Option<&str> {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    name.rfind('.').map(|dot| &name[dot..])
}

/// Content type for `filename`, chosen by its exact (case-sensitive) extension.
pub fn content_type_for(filename: &str) -> &'static str {
    match extension(filename) {
        Some(".pdf") => "application/pdf",
        Some(".png") => "image/png",
        _ => OCTET_STREAM,
    }
}
