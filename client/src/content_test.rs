use super::*;

fn gallery_json(images: &str, captions: &str) -> String {
    format!(
        r#"{{
            "meta": {{ "title": "t", "description": "d" }},
            "asking": {{
                "headline": "h", "subtitle": "s", "yes_label": "Yes", "hint": "hint",
                "gallery": {{ "interval_ms": 1000, "images": {images}, "captions": {captions} }}
            }},
            "decline": {{ "labels": ["No", "Sure?"], "overflow": "Please" }},
            "celebration": {{
                "title": "t", "subtitle": "s", "promises_heading": "p", "closing": "c",
                "gallery": {{ "images": ["/a.jpeg"], "captions": ["a"] }},
                "audio": {{ "src": "https://example.test/track.mp3" }}
            }}
        }}"#
    )
}

// =============================================================
// Embedded document
// =============================================================

#[test]
fn embedded_content_parses() {
    let content = ProposalContent::embedded().expect("embedded content");
    assert!(!content.meta.title.is_empty());
    assert!(!content.meta.description.is_empty());
}

#[test]
fn embedded_galleries_pair_every_image_with_a_caption() {
    let content = ProposalContent::embedded().expect("embedded content");
    assert_eq!(content.asking.gallery.slides.len(), 9);
    assert_eq!(content.celebration.gallery.slides.len(), 7);
    assert_eq!(content.asking.gallery.slides[0].caption, "Beautiful moment");
    assert_eq!(content.celebration.gallery.slides[6].src, "/Mamah/celebration7.jpeg");
}

#[test]
fn embedded_gallery_intervals() {
    let content = ProposalContent::embedded().expect("embedded content");
    assert_eq!(content.asking.gallery.interval_ms, 4000);
    assert_eq!(content.celebration.gallery.interval_ms, 3000);
    assert!(content.asking.gallery.auto_play);
}

#[test]
fn embedded_audio_volume_is_reduced() {
    let content = ProposalContent::embedded().expect("embedded content");
    assert!((content.celebration.audio.volume - 0.3).abs() < f64::EPSILON);
    assert!(content.celebration.audio.src.starts_with("https://"));
}

#[test]
fn embedded_decline_table_starts_with_no() {
    let content = ProposalContent::embedded().expect("embedded content");
    assert_eq!(content.decline.label_for(0), "No");
    assert_eq!(content.decline.label_for(1), "Are you sure?");
    assert_eq!(content.decline.label_for(11), content.decline.overflow);
    assert_eq!(content.decline.label_for(500), content.decline.overflow);
}

// =============================================================
// Gallery validation
// =============================================================

#[test]
fn caption_mismatch_is_rejected() {
    let raw = gallery_json(r#"["/a.jpeg", "/b.jpeg"]"#, r#"["a"]"#);
    let err = ProposalContent::from_json(&raw).unwrap_err().to_string();
    assert!(err.contains("2 images but 1 captions"), "unexpected error: {err}");
}

#[test]
fn empty_gallery_is_rejected() {
    let raw = gallery_json("[]", "[]");
    let err = ProposalContent::from_json(&raw).unwrap_err().to_string();
    assert!(err.contains("no images"), "unexpected error: {err}");
}

#[test]
fn zero_interval_is_rejected() {
    let raw = gallery_json(r#"["/a.jpeg"]"#, r#"["a"]"#).replace("\"interval_ms\": 1000", "\"interval_ms\": 0");
    let err = ProposalContent::from_json(&raw).unwrap_err().to_string();
    assert!(err.contains("interval must be positive"), "unexpected error: {err}");
}

#[test]
fn gallery_defaults_apply_when_omitted() {
    let raw = gallery_json(r#"["/a.jpeg"]"#, r#"["a"]"#);
    let content = ProposalContent::from_json(&raw).expect("content");
    assert_eq!(content.celebration.gallery.interval_ms, DEFAULT_INTERVAL_MS);
    assert!(content.celebration.gallery.auto_play);
    assert!((content.celebration.audio.volume - 0.3).abs() < f64::EPSILON);
    assert!(content.celebration.gifs.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ProposalContent::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

// =============================================================
// DeclineLabels
// =============================================================

#[test]
fn decline_labels_fall_back_to_overflow() {
    let labels = DeclineLabels {
        labels: vec!["No".into(), "One".into(), "Two".into(), "Three".into(), "Four".into()],
        overflow: "Default".into(),
    };
    assert_eq!(labels.label_for(0), "No");
    assert_eq!(labels.label_for(4), "Four");
    assert_eq!(labels.label_for(5), "Default");
    assert_eq!(labels.label_for(u32::MAX), "Default");
}

#[test]
fn default_content_still_has_a_no_label() {
    let content = ProposalContent::default();
    assert_eq!(content.decline.label_for(0), "No");
    assert!(content.asking.gallery.slides.is_empty());
}
