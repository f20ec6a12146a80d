/// Site content module
///
/// This module handles:
/// - Typed models for the five content documents (model.rs)
/// - Loading and decoding documents from the content directory (loader.rs)
/// - Fetching artwork the documents reference (loader.rs)
pub mod loader;
pub mod model;

use model::{AboutDoc, CommonDoc, ContactDoc, DemosDoc, HeroDoc};
use thiserror::Error;

/// The single failure kind of this system: a content resource could not be
/// produced. Carries message strings rather than error sources because it
/// travels inside UI messages, which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    #[error("could not read {name}: {message}")]
    Read { name: String, message: String },

    #[error("{name} is not valid JSON: {message}")]
    Decode { name: String, message: String },

    #[error("could not fetch artwork {source}: {message}")]
    Artwork { r#source: String, message: String },
}

impl ContentError {
    /// Which resource failed, for the status line.
    pub fn resource(&self) -> &str {
        match self {
            ContentError::Read { name, .. } => name,
            ContentError::Decode { name, .. } => name,
            ContentError::Artwork { source, .. } => source,
        }
    }
}

/// The five documents the page is rendered from. Each one stays `None`
/// until its loader succeeds; the view renders placeholder markup for
/// absent documents, so one failed load never touches the other sections.
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub common: Option<CommonDoc>,
    pub hero: Option<HeroDoc>,
    pub demos: Option<DemosDoc>,
    pub about: Option<AboutDoc>,
    pub contact: Option<ContactDoc>,
}
