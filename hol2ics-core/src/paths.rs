//! Source/destination path rules.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};

pub const SOURCE_EXTENSION: &str = "hol";
pub const TARGET_EXTENSION: &str = "ics";

/// Check that `source` is a .hol file (case-insensitive).
pub fn validate_source(source: &Path) -> ConvertResult<()> {
    require_extension(source, SOURCE_EXTENSION)
}

/// Check that `destination` is an .ics file (case-insensitive).
pub fn validate_destination(destination: &Path) -> ConvertResult<()> {
    require_extension(destination, TARGET_EXTENSION)
}

/// Replace the final extension of `source` with `.ics`.
///
/// Only the last dot counts: `team.2025.hol` becomes `team.2025.ics`.
pub fn default_destination(source: &Path) -> PathBuf {
    source.with_extension(TARGET_EXTENSION)
}

/// Validate both paths and pick the destination, before any file is touched.
pub fn resolve_paths(source: &Path, destination: Option<&Path>) -> ConvertResult<PathBuf> {
    validate_source(source)?;

    match destination {
        Some(destination) => {
            validate_destination(destination)?;
            Ok(destination.to_path_buf())
        }
        None => Ok(default_destination(source)),
    }
}

fn require_extension(path: &Path, expected: &'static str) -> ConvertResult<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));

    if matches {
        Ok(())
    } else {
        Err(ConvertError::InvalidExtension {
            path: path.to_path_buf(),
            expected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source_case_insensitive() {
        assert!(validate_source(Path::new("holidays.hol")).is_ok());
        assert!(validate_source(Path::new("HOLIDAYS.HOL")).is_ok());
        assert!(validate_source(Path::new("dir/Holidays.Hol")).is_ok());
    }

    #[test]
    fn test_validate_source_rejects_other_extensions() {
        assert!(validate_source(Path::new("holidays.txt")).is_err());
        assert!(validate_source(Path::new("holidays")).is_err());
        assert!(validate_source(Path::new("alcohol")).is_err());
        assert!(validate_source(Path::new("holidays.ics")).is_err());
    }

    #[test]
    fn test_validate_destination() {
        assert!(validate_destination(Path::new("out.ics")).is_ok());
        assert!(validate_destination(Path::new("out.ICS")).is_ok());
        assert!(matches!(
            validate_destination(Path::new("out.hol")),
            Err(ConvertError::InvalidExtension { expected: "ics", .. })
        ));
    }

    #[test]
    fn test_default_destination_replaces_last_extension() {
        assert_eq!(
            default_destination(Path::new("holidays.hol")),
            PathBuf::from("holidays.ics")
        );
        assert_eq!(
            default_destination(Path::new("team.2025.hol")),
            PathBuf::from("team.2025.ics")
        );
        assert_eq!(
            default_destination(Path::new("./exports/us.hol")),
            PathBuf::from("./exports/us.ics")
        );
    }

    #[test]
    fn test_resolve_paths() {
        assert_eq!(
            resolve_paths(Path::new("a.hol"), None).unwrap(),
            PathBuf::from("a.ics")
        );
        assert_eq!(
            resolve_paths(Path::new("a.hol"), Some(Path::new("b.ics"))).unwrap(),
            PathBuf::from("b.ics")
        );
        assert!(resolve_paths(Path::new("a.txt"), Some(Path::new("b.ics"))).is_err());
        assert!(resolve_paths(Path::new("a.hol"), Some(Path::new("b.txt"))).is_err());
    }
}
