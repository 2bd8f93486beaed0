use super::types::{Blacklist, BlacklistError};
use std::path::Path;
use std::time::Instant;
use tokio::fs;

pub async fn load_blacklist(path: &Path) -> Result<Blacklist, BlacklistError> {
    let t0 = Instant::now();

    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| BlacklistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let entries: Vec<String> =
        serde_json::from_str(&raw).map_err(|source| BlacklistError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let blacklist = Blacklist::new(entries);

    log::info!(
        "blacklist.loaded={} path={} perf.load_us={}",
        blacklist.len(),
        path.display(),
        t0.elapsed().as_micros()
    );

    Ok(blacklist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "readme-roots-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_and_normalizes_entries() {
        let path = temp_file("ok", r#"["И", " в ", "не", ""]"#);
        let blacklist = load_blacklist(&path).await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(blacklist.len(), 3);
        assert!(blacklist.contains("и"));
        assert!(blacklist.contains("в"));
        assert!(blacklist.contains("не"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("readme-roots-does-not-exist.json");
        let err = load_blacklist(&path).await.unwrap_err();
        assert!(matches!(err, BlacklistError::Io { .. }));
    }

    #[tokio::test]
    async fn non_array_is_a_parse_error() {
        let path = temp_file("bad", r#"{"words": ["и"]}"#);
        let err = load_blacklist(&path).await.unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, BlacklistError::Parse { .. }));
    }
}
