//! Upload constraints and filename helpers for the flat uploads directory.

use uuid::Uuid;

use crate::error::CoreError;

/// Maximum accepted upload size in bytes (10 MB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Whether a declared content type is an image.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Validate a client-supplied filename for serve/delete.
///
/// Stored names are flat UUID-based names, so anything containing a path
/// separator or a traversal component is rejected outright.
pub fn validate_filename(filename: &str) -> Result<(), CoreError> {
    if filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(CoreError::Validation(format!(
            "Invalid filename: {filename}"
        )));
    }
    Ok(())
}

/// Lowercased extension of `name`, including the leading dot. Empty when
/// the name has no extension.
pub fn file_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!(".{}", ext.to_lowercase())
        }
        _ => String::new(),
    }
}

/// Collision-resistant stored name for an upload: `<uuid><ext>`.
pub fn stored_filename(original_name: &str, id: Uuid) -> String {
    format!("{id}{}", file_extension(original_name))
}

/// Guess a MIME type from a filename extension. Unknown extensions fall
/// back to `application/octet-stream`.
pub fn guess_mime(filename: &str) -> &'static str {
    let ext = file_extension(filename);
    match ext.as_str() {
        ".png" => "image/png",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".gif" => "image/gif",
        ".webp" => "image/webp",
        ".svg" => "image/svg+xml",
        ".bmp" => "image/bmp",
        ".ico" => "image/x-icon",
        ".mp4" => "video/mp4",
        ".json" => "application/json",
        ".txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
