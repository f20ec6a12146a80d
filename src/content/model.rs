//! Typed models for the site content documents.
//!
//! Each section of the page is driven by one small JSON document. Every
//! field carries a serde default so a missing field decodes to its empty
//! value and renders as empty text instead of failing the whole document.

use serde::Deserialize;

/// A labelled link target, used for nav entries and call-to-action buttons.
///
/// `href` is either an in-page anchor (`#demos`) or an external target
/// (`mailto:...`, `https://...`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// `common.json`: branding shared by the whole page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonDoc {
    /// Window title once loaded
    pub site_title: String,
    /// Brand name shown in the nav bar
    pub name: String,
    /// Footer line
    pub footer: String,
    /// Nav bar links, in order
    pub nav: Vec<Link>,
    /// The highlighted call-to-action in the nav bar
    pub cta: Link,
}

/// `hero.json`: the banner at the top of the page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroDoc {
    pub title: String,
    pub subtitle: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    /// Portrait artwork, relative path or URL
    pub profile_image: String,
    pub profile_alt: String,
}

/// `demos.json`: the filterable media-demo gallery.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemosDoc {
    pub title: String,
    pub description: String,
    /// Declared categories; the rendered chip strip prefixes the "All" sentinel
    pub categories: Vec<String>,
    pub items: Vec<DemoItem>,
}

/// One entry in the demo gallery. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DemoItem {
    pub title: String,
    pub description: String,
    /// Exact-match filter key against the active category
    pub category: String,
    /// Thumbnail artwork, relative path or URL
    pub thumbnail: String,
    /// Where the embedded player points
    pub embed_url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// Media kind of a demo item. Picks the modal sizing variant:
/// audio gets a compact centered card, everything else the wide
/// video-aspect panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    #[default]
    Video,
}

impl MediaKind {
    /// Parse the document's `type` field. Anything that is not "audio"
    /// (including an absent field) is treated as video.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("audio") {
            MediaKind::Audio
        } else {
            MediaKind::Video
        }
    }
}

impl<'de> Deserialize<'de> for MediaKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(MediaKind::from_label(&label))
    }
}

/// `about.json`: the about section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutDoc {
    pub title: String,
    pub description: String,
    /// Portrait artwork, relative path or URL
    pub image: String,
    pub features: Vec<Feature>,
}

/// A single highlighted line in the about section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Feature {
    /// Icon name from the source documents (material symbol names)
    pub icon: String,
    pub text: String,
}

/// `contact.json`: the contact section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDoc {
    pub title: String,
    pub description: String,
    pub email: String,
    pub zalo: String,
    pub facebook: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demos_document_decodes() {
        let json = r#"{
            "title": "Demos",
            "description": "A few things I made",
            "categories": ["Video", "Audio"],
            "items": [
                {
                    "title": "Session reel",
                    "description": "Live takes",
                    "category": "Video",
                    "thumbnail": "images/reel.jpg",
                    "embedUrl": "https://example.com/embed/reel",
                    "type": "video"
                },
                {
                    "title": "Single mix",
                    "description": "Studio mix",
                    "category": "Audio",
                    "thumbnail": "https://example.com/mix.jpg",
                    "embedUrl": "https://example.com/embed/mix",
                    "type": "audio"
                }
            ]
        }"#;

        let doc: DemosDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.categories, vec!["Video", "Audio"]);
        assert_eq!(doc.items.len(), 2);
        assert_eq!(doc.items[0].kind, MediaKind::Video);
        assert_eq!(doc.items[1].kind, MediaKind::Audio);
        assert_eq!(doc.items[1].embed_url, "https://example.com/embed/mix");
    }

    #[test]
    fn test_missing_fields_decode_to_empty() {
        // Shape is never validated: an empty object is a valid document
        // whose fields all render as empty text.
        let doc: HeroDoc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.title, "");
        assert_eq!(doc.primary_cta.href, "");

        let item: DemoItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item.kind, MediaKind::Video);
    }

    #[test]
    fn test_unknown_media_kind_is_video() {
        assert_eq!(MediaKind::from_label("audio"), MediaKind::Audio);
        assert_eq!(MediaKind::from_label("Audio"), MediaKind::Audio);
        assert_eq!(MediaKind::from_label("video"), MediaKind::Video);
        assert_eq!(MediaKind::from_label("podcast"), MediaKind::Video);
        assert_eq!(MediaKind::from_label(""), MediaKind::Video);
    }

    #[test]
    fn test_common_document_decodes() {
        let json = r##"{
            "siteTitle": "Jane Doe — Portfolio",
            "name": "Jane Doe",
            "footer": "© 2026 Jane Doe",
            "nav": [
                {"label": "Demos", "href": "#demos"},
                {"label": "About", "href": "#about"}
            ],
            "cta": {"label": "Get in touch", "href": "#contact"}
        }"##;

        let doc: CommonDoc = serde_json::from_str(json).unwrap();
        assert_eq!(doc.site_title, "Jane Doe — Portfolio");
        assert_eq!(doc.nav.len(), 2);
        assert_eq!(doc.nav[0].href, "#demos");
        assert_eq!(doc.cta.label, "Get in touch");
    }
}
