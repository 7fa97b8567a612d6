use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read cached headlines, one per line. Lines are trimmed and blank lines skipped.
pub fn load_headlines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read headline cache: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Write headlines one per line, creating the parent directory if needed.
pub fn save_headlines(path: &Path, headlines: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create cache directory: {}", parent.display())
            })?;
        }
    }

    let mut content = String::new();
    for headline in headlines {
        content.push_str(headline);
        content.push('\n');
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write headline cache: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn saved_headlines_load_back_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("berita.txt");
        let headlines = vec![
            "Kasus ISPA meningkat saat musim hujan".to_string(),
            "Cara cek tunggakan BPJS Kesehatan lewat HP".to_string(),
        ];

        save_headlines(&path, &headlines).unwrap();

        assert_eq!(load_headlines(&path).unwrap(), headlines);
    }

    #[test]
    fn load_skips_blank_lines_and_trims() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("berita.txt");
        fs::write(&path, "  satu judul  \n\n\r\ndua judul\r\n").unwrap();

        assert_eq!(
            load_headlines(&path).unwrap(),
            vec!["satu judul".to_string(), "dua judul".to_string()]
        );
    }

    #[test]
    fn missing_cache_is_an_error_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = load_headlines(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.txt"));
    }
}
