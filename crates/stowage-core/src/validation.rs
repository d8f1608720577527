//! Filename validation and sanitization for untrusted uploads.

use std::path::Path;

const MAX_FILENAME_LENGTH: usize = 255;

/// Fallback used when sanitization empties a filename.
const FALLBACK_FILENAME: &str = "file";

/// Extract the extension of `filename`: the substring after the final `.`,
/// lowercased. Returns `None` when there is no usable extension.
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Check `filename` against an extension allow-list (lowercase entries).
pub fn has_allowed_extension(filename: &str, allowed: &[String]) -> bool {
    extension_of(filename)
        .map(|ext| allowed.iter().any(|a| a == &ext))
        .unwrap_or(false)
}

/// Sanitize an untrusted filename into a single safe path component.
///
/// Directory components are stripped, characters outside
/// `[A-Za-z0-9._-]` become `_`, runs of dots are collapsed so `..` cannot
/// survive, and leading dots are removed so the result can neither escape
/// nor hide inside the destination directory. An empty result falls back
/// to `"file"`.
pub fn sanitize_filename(filename: &str) -> String {
    // Both separator styles count as directory components, whatever the host.
    let base = filename.rsplit(['/', '\\']).next().unwrap_or("");

    let mut cleaned = String::with_capacity(base.len().min(MAX_FILENAME_LENGTH));
    for c in base.chars().take(MAX_FILENAME_LENGTH) {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            c
        } else {
            '_'
        };
        if c == '.' && cleaned.ends_with('.') {
            continue;
        }
        cleaned.push(c);
    }

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        return FALLBACK_FILENAME.to_string();
    }
    cleaned.to_string()
}

/// Defensive check applied to stored names before they are resolved
/// against a storage directory. Both the write path and the retrieval
/// path enforce this, so a stored name read back from a database is
/// re-checked before it touches the filesystem.
pub fn validate_stored_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["png", "jpg", "jpeg", "gif"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of("AVATAR.PNG").as_deref(), Some("png"));
        assert_eq!(extension_of("photo.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("noext"), None);
    }

    #[test]
    fn allowed_extension_check() {
        assert!(has_allowed_extension("a.png", &allowed()));
        assert!(has_allowed_extension("a.JPeG", &allowed()));
        assert!(!has_allowed_extension("a.exe", &allowed()));
        assert!(!has_allowed_extension("noext", &allowed()));
        assert!(!has_allowed_extension("", &allowed()));
    }

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize_filename("/var/log/x.gif"), "x.gif");
        assert_eq!(sanitize_filename("..\\..\\boot.jpg"), "boot.jpg");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("naïve.png"), "na_ve.png");
    }

    #[test]
    fn sanitize_collapses_dot_runs() {
        assert_eq!(sanitize_filename("weird..name.png"), "weird.name.png");
        assert!(!sanitize_filename("a...b...png").contains(".."));
    }

    #[test]
    fn sanitize_strips_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("..."), "file");
    }

    #[test]
    fn sanitize_falls_back_on_empty() {
        assert_eq!(sanitize_filename(""), "file");
        assert_eq!(sanitize_filename("???"), "file");
        assert_eq!(sanitize_filename("///"), "file");
    }

    #[test]
    fn stored_name_guard_rejects_traversal() {
        assert!(!validate_stored_name("../x.png"));
        assert!(!validate_stored_name("a/b.png"));
        assert!(!validate_stored_name("a\\b.png"));
        assert!(!validate_stored_name(".hidden"));
        assert!(!validate_stored_name(""));
        assert!(validate_stored_name("abc123_avatar.png"));
    }
}
