//! Exporting rendered documents: filename derivation and writing `.md`
//! files to an export directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HirecraftError, Result};

/// Derive an export filename from a document title: lowercased, runs of
/// whitespace collapsed to single hyphens, `.md` appended. A title with no
/// usable characters falls back to `untitled.md`.
pub fn markdown_filename(title: &str) -> String {
    let slug = title
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "untitled.md".to_string()
    } else {
        format!("{slug}.md")
    }
}

/// Write rendered markdown under `dir`, creating the directory if needed.
/// Returns the full path written.
pub fn write_markdown(dir: &Path, title: &str, content: &str) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(HirecraftError::Io)?;
    }
    let path = dir.join(markdown_filename(title));
    fs::write(&path, content).map_err(HirecraftError::Io)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn filename_lowercases_and_hyphenates() {
        assert_eq!(
            markdown_filename("Senior Product Manager"),
            "senior-product-manager.md"
        );
        assert_eq!(markdown_filename("  Spaced   Out  Title "), "spaced-out-title.md");
        assert_eq!(markdown_filename("already-hyphenated"), "already-hyphenated.md");
    }

    #[test]
    fn empty_title_falls_back_to_untitled() {
        assert_eq!(markdown_filename(""), "untitled.md");
        assert_eq!(markdown_filename("   "), "untitled.md");
    }

    #[test]
    fn write_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("exports");
        let path = write_markdown(&target, "My Doc", "# My Doc\n").unwrap();

        assert_eq!(path, target.join("my-doc.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "# My Doc\n");
    }
}
