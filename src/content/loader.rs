//! Content loaders.
//!
//! One loader per document: read the named JSON file from the content
//! directory and decode it. A loader makes exactly one best-effort attempt
//! per trigger — no retry, no timeout, no caching — and its failure is
//! delivered to the caller, logged, and otherwise ignored so the other
//! sections keep loading.

use std::path::PathBuf;

use iced::widget::image;
use serde::de::DeserializeOwned;

use super::ContentError;

/// Load and decode one content document, e.g. `load_document::<HeroDoc>`
/// with name `"hero"` reads `<dir>/hero.json`.
pub async fn load_document<T>(dir: PathBuf, name: &'static str) -> Result<T, ContentError>
where
    T: DeserializeOwned,
{
    let path = dir.join(format!("{name}.json"));

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        eprintln!("⚠️  Error loading {}: {}", path.display(), e);
        ContentError::Read {
            name: name.to_string(),
            message: e.to_string(),
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        eprintln!("⚠️  Error decoding {}: {}", path.display(), e);
        ContentError::Decode {
            name: name.to_string(),
            message: e.to_string(),
        }
    })
}

/// Fetch one piece of artwork referenced by a document.
///
/// `http(s)` sources are fetched over the network; anything else is read
/// relative to the content directory. The bytes become an image handle
/// decoded lazily by the renderer.
pub async fn load_artwork(dir: PathBuf, source: String) -> Result<image::Handle, ContentError> {
    if source.is_empty() {
        return Err(ContentError::Artwork {
            source,
            message: "no artwork source given".to_string(),
        });
    }

    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(&source).await
    } else {
        tokio::fs::read(dir.join(&source))
            .await
            .map_err(|e| e.to_string())
    };

    match bytes {
        Ok(bytes) => Ok(image::Handle::from_bytes(bytes)),
        Err(message) => {
            eprintln!("⚠️  Error fetching artwork {source}: {message}");
            Err(ContentError::Artwork { source, message })
        }
    }
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>, String> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| e.to_string())?;

    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{DemosDoc, HeroDoc};

    /// Fresh scratch directory per test so runs cannot collide.
    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("showreel-{}-{}", tag, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_load_document_missing_file() {
        let dir = scratch_dir("missing");
        let result = load_document::<HeroDoc>(dir, "hero").await;
        assert!(matches!(result, Err(ContentError::Read { .. })));
    }

    #[tokio::test]
    async fn test_load_document_malformed_json() {
        let dir = scratch_dir("malformed");
        std::fs::write(dir.join("demos.json"), "{not json").unwrap();

        let result = load_document::<DemosDoc>(dir, "demos").await;
        assert!(matches!(result, Err(ContentError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_load_document_success() {
        let dir = scratch_dir("success");
        std::fs::write(
            dir.join("hero.json"),
            r#"{"title": "Hi, I'm Jane", "subtitle": "I make sound"}"#,
        )
        .unwrap();

        let doc = load_document::<HeroDoc>(dir, "hero").await.unwrap();
        assert_eq!(doc.title, "Hi, I'm Jane");
        assert_eq!(doc.subtitle, "I make sound");
        // Absent fields decode to their empty values
        assert_eq!(doc.profile_image, "");
    }

    #[tokio::test]
    async fn test_one_bad_document_does_not_affect_the_rest() {
        use crate::content::model::{AboutDoc, CommonDoc, ContactDoc};

        let dir = scratch_dir("isolation");
        std::fs::write(dir.join("common.json"), r#"{"name": "Jane"}"#).unwrap();
        std::fs::write(dir.join("hero.json"), r#"{"title": "Hi"}"#).unwrap();
        std::fs::write(dir.join("demos.json"), "{broken").unwrap();
        std::fs::write(dir.join("about.json"), r#"{"title": "About"}"#).unwrap();
        std::fs::write(dir.join("contact.json"), r#"{"email": "j@example.com"}"#).unwrap();

        assert!(load_document::<CommonDoc>(dir.clone(), "common").await.is_ok());
        assert!(load_document::<HeroDoc>(dir.clone(), "hero").await.is_ok());
        assert!(load_document::<DemosDoc>(dir.clone(), "demos").await.is_err());
        assert!(load_document::<AboutDoc>(dir.clone(), "about").await.is_ok());
        assert!(load_document::<ContactDoc>(dir, "contact").await.is_ok());
    }

    #[tokio::test]
    async fn test_load_artwork_empty_source() {
        let dir = scratch_dir("art-empty");
        let result = load_artwork(dir, String::new()).await;
        assert!(matches!(result, Err(ContentError::Artwork { .. })));
    }

    #[tokio::test]
    async fn test_load_artwork_local_file() {
        let dir = scratch_dir("art-local");
        std::fs::create_dir_all(dir.join("images")).unwrap();
        std::fs::write(dir.join("images/thumb.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let result = load_artwork(dir, "images/thumb.png".to_string()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_load_artwork_missing_local_file() {
        let dir = scratch_dir("art-missing");
        let result = load_artwork(dir, "images/nope.png".to_string()).await;
        assert!(matches!(result, Err(ContentError::Artwork { .. })));
    }
}
