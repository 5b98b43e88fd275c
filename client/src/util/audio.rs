//! Background track playback for the celebration view.
//!
//! Browsers only allow unprompted playback of muted media, so the track is
//! started muted and unmuted once `play()` resolves. Requires a browser
//! environment; without `hydrate` only the error type and volume helper exist.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

/// Failure to start the celebration track.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// The host refused `play()`, usually an autoplay policy.
    #[error("playback rejected: {0}")]
    Rejected(String),
    /// The track URL is empty.
    #[error("no audio source configured")]
    NoSource,
}

/// Clamp a configured volume into the range media elements accept.
#[must_use]
pub fn normalized_volume(volume: f64) -> f64 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}

/// Start `audio` looping and muted, then unmute at `volume` once playing.
///
/// # Errors
///
/// Returns [`PlaybackError::Rejected`] if `play()` throws or its promise
/// rejects, and [`PlaybackError::NoSource`] if the element has no source.
#[cfg(feature = "hydrate")]
pub async fn start_playback(audio: &web_sys::HtmlAudioElement, volume: f64) -> Result<(), PlaybackError> {
    if audio.src().is_empty() {
        return Err(PlaybackError::NoSource);
    }
    audio.set_loop(true);
    audio.set_muted(true);
    let promise = audio.play().map_err(|e| PlaybackError::Rejected(describe_js_error(&e)))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| PlaybackError::Rejected(describe_js_error(&e)))?;
    audio.set_muted(false);
    audio.set_volume(normalized_volume(volume));
    Ok(())
}

#[cfg(feature = "hydrate")]
fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
