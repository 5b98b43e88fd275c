//! Page copy, galleries, media URLs and the decline label table.
//!
//! DESIGN
//! ======
//! Everything that is flavor rather than behavior lives in
//! `content/proposal.json`, embedded at compile time so the server render and
//! the hydrated client always agree. Galleries arrive as two parallel lists
//! (image paths and captions) and are zipped into [`Slide`]s during
//! deserialization, so downstream code never sees a length mismatch.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::Deserialize;

const EMBEDDED: &str = include_str!("../content/proposal.json");

/// Default auto-advance period for a gallery, in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 4000;

/// Error returned while loading proposal content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the content schema.
    #[error("invalid proposal content: {0}")]
    Parse(#[from] serde_json::Error),
    /// A gallery lists a different number of captions than images.
    #[error("gallery has {images} images but {captions} captions")]
    CaptionMismatch { images: usize, captions: usize },
    /// A gallery has no images at all.
    #[error("gallery has no images")]
    EmptyGallery,
    /// A gallery asks for a zero auto-advance interval.
    #[error("gallery interval must be positive")]
    ZeroInterval,
}

/// One (image, caption) pair shown by the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: String,
    pub caption: String,
}

/// Ordered slides plus carousel timing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "GalleryDoc")]
pub struct Gallery {
    pub slides: Vec<Slide>,
    pub auto_play: bool,
    pub interval_ms: u32,
}

impl Default for Gallery {
    fn default() -> Self {
        Self { slides: Vec::new(), auto_play: true, interval_ms: DEFAULT_INTERVAL_MS }
    }
}

#[derive(Deserialize)]
struct GalleryDoc {
    #[serde(default = "default_interval_ms")]
    interval_ms: u32,
    #[serde(default = "default_auto_play")]
    auto_play: bool,
    images: Vec<String>,
    captions: Vec<String>,
}

fn default_interval_ms() -> u32 {
    DEFAULT_INTERVAL_MS
}

fn default_auto_play() -> bool {
    true
}

impl TryFrom<GalleryDoc> for Gallery {
    type Error = ContentError;

    fn try_from(doc: GalleryDoc) -> Result<Self, Self::Error> {
        if doc.images.len() != doc.captions.len() {
            return Err(ContentError::CaptionMismatch { images: doc.images.len(), captions: doc.captions.len() });
        }
        if doc.images.is_empty() {
            return Err(ContentError::EmptyGallery);
        }
        if doc.interval_ms == 0 {
            return Err(ContentError::ZeroInterval);
        }
        let slides = doc
            .images
            .into_iter()
            .zip(doc.captions)
            .map(|(src, caption)| Slide { src, caption })
            .collect();
        Ok(Self { slides, auto_play: doc.auto_play, interval_ms: doc.interval_ms })
    }
}

/// Title and description surfaced to the browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// Copy shown while the question is still open.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AskingContent {
    pub headline: String,
    pub subtitle: String,
    pub gallery: Gallery,
    #[serde(default)]
    pub sweet_messages: Vec<String>,
    pub yes_label: String,
    pub hint: String,
    #[serde(default)]
    pub floating_hearts: usize,
}

/// Labels for the "No" button, indexed by how many times it was clicked.
///
/// Entry 0 is the label before any decline. Counts past the end of the table
/// all map to `overflow`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeclineLabels {
    pub labels: Vec<String>,
    pub overflow: String,
}

impl Default for DeclineLabels {
    fn default() -> Self {
        Self { labels: vec!["No".to_owned()], overflow: "No".to_owned() }
    }
}

impl DeclineLabels {
    #[must_use]
    pub fn label_for(&self, decline_count: u32) -> &str {
        usize::try_from(decline_count)
            .ok()
            .and_then(|idx| self.labels.get(idx))
            .unwrap_or(&self.overflow)
    }
}

/// Background track started when the proposal is accepted.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AudioTrack {
    pub src: String,
    #[serde(default = "default_volume")]
    pub volume: f64,
}

impl Default for AudioTrack {
    fn default() -> Self {
        Self { src: String::new(), volume: default_volume() }
    }
}

fn default_volume() -> f64 {
    0.3
}

/// Remote animated image floating over the celebration view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Gif {
    pub src: String,
    pub alt: String,
}

/// Copy and media for the accepted state.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CelebrationContent {
    pub title: String,
    pub subtitle: String,
    pub promises_heading: String,
    #[serde(default)]
    pub promises: Vec<String>,
    pub closing: String,
    pub gallery: Gallery,
    pub audio: AudioTrack,
    #[serde(default)]
    pub gifs: Vec<Gif>,
    #[serde(default)]
    pub confetti: usize,
    #[serde(default)]
    pub floating_hearts: usize,
}

/// Full content document for the proposal page.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProposalContent {
    pub meta: PageMeta,
    pub asking: AskingContent,
    pub decline: DeclineLabels,
    pub celebration: CelebrationContent,
}

impl ProposalContent {
    /// Parse a content document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] if the JSON is malformed or any gallery
    /// fails validation (mismatched captions, no images, zero interval).
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the document compiled into the crate.
    ///
    /// # Errors
    ///
    /// See [`ProposalContent::from_json`].
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }
}

/// Load the embedded content, falling back to empty defaults when it is
/// unreadable so the page still renders.
pub fn load() -> ProposalContent {
    ProposalContent::embedded().unwrap_or_else(|e| {
        leptos::logging::error!("{e}");
        ProposalContent::default()
    })
}
