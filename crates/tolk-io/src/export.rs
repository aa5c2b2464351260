use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};

/// `translation-{target}-{timestamp}.txt`, timestamp safe for file systems
pub fn export_file_name(target: &str, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("translation-{target}-{stamp}.txt")
}

/// Write the translation into `dir`, returning the created file
pub async fn save_translation(dir: &Path, target: &str, text: &str) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(export_file_name(target, Utc::now()));
    tokio::fs::write(&path, text)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Saved translation to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn file_name_has_no_colons_or_dots_in_stamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
            + chrono::Duration::milliseconds(42);

        assert_eq!(
            export_file_name("de", now),
            "translation-de-2024-03-09T14-05-07-042Z.txt"
        );
    }

    #[tokio::test]
    async fn saves_text_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");

        let path = save_translation(&nested, "fr", "Bonjour").await.unwrap();

        assert!(path.starts_with(&nested));
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("translation-fr-")
        );
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "Bonjour");
    }
}
