//! Client-side file validation.
//!
//! A file is accepted when its extension is in the allowlist and its size
//! does not exceed the configured ceiling. Validation runs once, when the
//! file is selected; pending files are never re-checked.

use crate::config::WidgetConfig;
use crate::types::{FileHandle, PendingFile, RejectReason, Rejection};

/// Lower-cased suffix after the last `.` of `name`.
///
/// Returns `None` for names without a dot.
pub fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase())
}

/// Check a single file against the configured allowlist and size limit.
pub fn validate_file(name: &str, size: u64, config: &WidgetConfig) -> Result<(), RejectReason> {
    let extension = extension_of(name);
    let allowed = extension
        .as_deref()
        .map(|ext| config.allowed_extensions.iter().any(|a| a == ext))
        .unwrap_or(false);
    if !allowed {
        return Err(RejectReason::UnsupportedType { extension });
    }

    if size > config.max_file_size_bytes {
        return Err(RejectReason::TooLarge {
            size,
            limit: config.max_file_size_bytes,
        });
    }

    Ok(())
}

/// Split a selection into accepted entries and rejections, both in selection order.
pub fn partition_selection<F, I>(files: I, config: &WidgetConfig) -> (Vec<PendingFile<F>>, Vec<Rejection>)
where
    F: FileHandle,
    I: IntoIterator<Item = F>,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for handle in files {
        let entry = PendingFile::new(handle);
        match validate_file(&entry.name, entry.size, config) {
            Ok(()) => accepted.push(entry),
            Err(reason) => rejected.push(Rejection { name: entry.name, reason }),
        }
    }

    (accepted, rejected)
}

/// Notice text for a rejected file. Both reasons share the same wording.
pub fn rejection_message(rejection: &Rejection, config: &WidgetConfig) -> String {
    format!(
        "File \"{}\" is not supported or too large (max {})",
        rejection.name,
        config.max_size_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile(&'static str, u64);

    impl FileHandle for TestFile {
        fn name(&self) -> String {
            self.0.to_string()
        }
        fn size(&self) -> u64 {
            self.1
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.webp").as_deref(), Some("webp"));
        assert_eq!(extension_of("trailing."), Some(String::new()));
        assert_eq!(extension_of("jpg"), None);
    }

    #[test]
    fn test_all_allowed_extensions_accepted() {
        let config = WidgetConfig::default();
        for ext in ["jpg", "jpeg", "png", "bmp", "tiff", "heic", "webp"] {
            let name = format!("image.{}", ext);
            assert!(validate_file(&name, 100, &config).is_ok(), "{}", name);
            let upper = format!("IMAGE.{}", ext.to_uppercase());
            assert!(validate_file(&upper, 100, &config).is_ok(), "{}", upper);
        }
    }

    #[test]
    fn test_unsupported_extensions_rejected() {
        let config = WidgetConfig::default();
        assert_eq!(
            validate_file("anim.gif", 100, &config),
            Err(RejectReason::UnsupportedType { extension: Some("gif".into()) })
        );
        assert_eq!(
            validate_file("README", 100, &config),
            Err(RejectReason::UnsupportedType { extension: None })
        );
        // A bare allowlisted word without a dot is not an extension.
        assert!(validate_file("png", 100, &config).is_err());
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        let config = WidgetConfig::default();
        assert!(validate_file("big.png", MAX_FILE_SIZE, &config).is_ok());
        assert_eq!(
            validate_file("big.png", MAX_FILE_SIZE + 1, &config),
            Err(RejectReason::TooLarge { size: MAX_FILE_SIZE + 1, limit: MAX_FILE_SIZE })
        );
        assert!(validate_file("empty.png", 0, &config).is_ok());
    }

    #[test]
    fn test_partition_keeps_order() {
        let config = WidgetConfig::default();
        let files = vec![
            TestFile("b.png", 10),
            TestFile("notes.txt", 10),
            TestFile("a.jpg", 20),
            TestFile("huge.webp", MAX_FILE_SIZE * 2),
        ];

        let (accepted, rejected) = partition_selection(files, &config);

        let names: Vec<_> = accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.jpg"]);
        assert_eq!(accepted[1].size, 20);

        let rejected_names: Vec<_> = rejected.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(rejected_names, vec!["notes.txt", "huge.webp"]);
        assert!(matches!(rejected[1].reason, RejectReason::TooLarge { .. }));
    }

    #[test]
    fn test_rejection_message_names_file() {
        let config = WidgetConfig::default();
        let rejection = Rejection {
            name: "notes.txt".into(),
            reason: RejectReason::UnsupportedType { extension: Some("txt".into()) },
        };
        assert_eq!(
            rejection_message(&rejection, &config),
            "File \"notes.txt\" is not supported or too large (max 10MB)"
        );
    }
}
