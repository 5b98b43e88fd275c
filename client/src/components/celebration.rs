//! Accepted-state view: confetti, floating GIFs, promises, and a second
//! carousel, with the background track started on mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! The proposal page mounts this view exactly once, when it enters
//! `Accepted`. Audio failures are logged and never surface in the UI.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::floating_hearts::FloatingHearts;
use crate::content::{CelebrationContent, ProposalContent};

/// Sparkle positions around the title, as inline styles.
const SPARKLES: [&str; 4] = [
    "top: 10%; left: 20%;",
    "top: 20%; right: 15%; animation-delay: 0.3s;",
    "bottom: 10%; left: 30%; animation-delay: 0.6s;",
    "bottom: 15%; right: 25%; animation-delay: 0.9s;",
];

#[component]
pub fn CelebrationView() -> impl IntoView {
    let CelebrationContent {
        title,
        subtitle,
        promises_heading,
        promises,
        closing,
        gallery,
        audio,
        gifs,
        confetti,
        floating_hearts,
    } = expect_context::<ProposalContent>().celebration;

    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    #[cfg(feature = "hydrate")]
    {
        let volume = audio.volume;
        let started = StoredValue::new(false);
        Effect::new(move || {
            let Some(element) = audio_ref.get() else {
                return;
            };
            if started.get_value() {
                return;
            }
            started.set_value(true);
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::util::audio::start_playback(&element, volume).await {
                    leptos::logging::warn!("Audio play failed: {e}");
                }
            });
        });
    }

    view! {
        <div class="proposal-container">
            <audio node_ref=audio_ref src=audio.src preload="auto"></audio>

            <div class="confetti-container">
                {(0..confetti).map(|_| view! { <div class="confetti"></div> }).collect_view()}
            </div>

            <FloatingHearts count=floating_hearts/>

            <div class="floating-gifs">
                {gifs
                    .into_iter()
                    .enumerate()
                    .map(|(i, gif)| {
                        view! {
                            <img
                                src=gif.src
                                alt=gif.alt
                                class=format!("floating-gif floating-gif-{}", i + 1)
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="proposal-card celebration-card">
                <h1 class="proposal-title celebration-title">
                    {title}
                    {SPARKLES
                        .iter()
                        .map(|style| view! { <span class="sparkle" style=*style></span> })
                        .collect_view()}
                </h1>
                <p class="proposal-subtitle celebration-subtitle">{subtitle}</p>

                <div class="sweet-messages promises">
                    <div class="message promises-heading">{promises_heading}</div>
                    {promises
                        .into_iter()
                        .map(|promise| view! { <div class="message promise">{promise}</div> })
                        .collect_view()}
                    <div class="message promises-closing">{closing}</div>
                </div>

                <Carousel slides=gallery.slides auto_play=gallery.auto_play interval_ms=gallery.interval_ms/>
            </div>
        </div>
    }
}
