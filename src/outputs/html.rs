//! HTML page output.
//!
//! The page is written to a sibling temporary file and renamed over the
//! target, so readers only ever see the previous page or the complete new one.

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Directory containing `path`, `.` for a bare file name.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    parent_dir(path).join(name)
}

/// Replace the file at `path` with `html`.
///
/// # Arguments
///
/// * `path` - Destination of the page
/// * `html` - Complete document to write
///
/// # Returns
///
/// `Ok(())` once the new page is in place. On failure the temporary file is
/// removed and any previous page at `path` is left untouched.
#[instrument(level = "info", skip_all, fields(path = %path.display(), bytes = html.len()))]
pub async fn write_page(path: &Path, html: &str) -> Result<(), Box<dyn Error>> {
    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, html).await {
        error!(tmp = %tmp.display(), error = %e, "Failed to write temporary page");
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        error!(tmp = %tmp.display(), error = %e, "Failed to move page into place");
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    info!("Wrote HTML page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir(Path::new("index.html")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("site/index.html")), PathBuf::from("site"));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("site/index.html")),
            PathBuf::from("site/index.html.tmp")
        );
    }

    #[tokio::test]
    async fn test_write_page_overwrites() {
        let dir = std::env::temp_dir().join(format!("duh_news_page_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("index.html");

        write_page(&path, "<p>old</p>").await.unwrap();
        write_page(&path, "<p>new</p>").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>new</p>");
        assert!(!dir.join("index.html.tmp").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_old_page_and_no_temp_file() {
        let dir = std::env::temp_dir().join(format!("duh_news_fail_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("index.html");
        std::fs::write(&path, "<p>old</p>").unwrap();
        // A directory squatting on the temporary name makes the write fail.
        std::fs::create_dir_all(dir.join("index.html.tmp")).unwrap();

        assert!(write_page(&path, "<p>new</p>").await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>old</p>");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_directory_leaves_nothing_behind() {
        let dir = std::env::temp_dir().join(format!("duh_news_absent_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("index.html");

        assert!(write_page(&path, "<p>new</p>").await.is_err());
        assert!(!dir.join("index.html.tmp").exists());
        assert!(!path.exists());
    }
}
