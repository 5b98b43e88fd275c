//! Auto-advancing image carousel with arrows, dot indicators, and swipe.
//!
//! ARCHITECTURE
//! ============
//! `CarouselState` decides what happens; this component owns the two browser
//! timers that drive it. The advance `Interval` exists only while
//! auto-advance is active and is dropped (cancelling it) as soon as a pause
//! starts. Each manual navigation stores a fresh resume `Timeout`, dropping
//! the previous one, so the 5 s cooldown restarts. Both slots are emptied in
//! `on_cleanup`.

use std::time::Duration;

use leptos::prelude::*;

use crate::content::{DEFAULT_INTERVAL_MS, Slide};
use crate::state::carousel::{CarouselState, Navigation, PauseToken};
#[cfg(feature = "hydrate")]
use crate::state::carousel::PAUSE_WINDOW;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

#[cfg(feature = "hydrate")]
fn first_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.target_touches().get(0).map(|touch| f64::from(touch.client_x()))
}

#[cfg(not(feature = "hydrate"))]
fn first_touch_x(_ev: &leptos::ev::TouchEvent) -> Option<f64> {
    None
}

#[cfg(feature = "hydrate")]
fn duration_to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Image carousel over `slides`.
///
/// `interval_ms` is the auto-advance period; `auto_play = false` leaves the
/// carousel on manual navigation only.
#[component]
pub fn Carousel(
    slides: Vec<Slide>,
    #[prop(default = true)] auto_play: bool,
    #[prop(default = DEFAULT_INTERVAL_MS)] interval_ms: u32,
) -> impl IntoView {
    let len = slides.len();
    let state = RwSignal::new(CarouselState::new(len, auto_play, Duration::from_millis(u64::from(interval_ms))));
    let current = Memo::new(move |_| state.with(CarouselState::current));

    #[cfg(feature = "hydrate")]
    let advance_timer = StoredValue::new_local(None::<Interval>);
    #[cfg(feature = "hydrate")]
    let resume_timer = StoredValue::new_local(None::<Timeout>);

    #[cfg(feature = "hydrate")]
    {
        let active = Memo::new(move |_| state.with(CarouselState::auto_advance_active));
        Effect::new(move || {
            // Dropping the old handle cancels it before any restart.
            advance_timer.set_value(None);
            if !active.get() {
                return;
            }
            let period = state.with_untracked(CarouselState::interval);
            let tick = Interval::new(duration_to_millis(period), move || {
                state.update(|s| {
                    s.tick();
                });
            });
            advance_timer.set_value(Some(tick));
        });

        on_cleanup(move || {
            let _ = advance_timer.try_update_value(|slot| slot.take());
            let _ = resume_timer.try_update_value(|slot| slot.take());
        });
    }

    let schedule_resume = move |token: PauseToken| {
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(duration_to_millis(PAUSE_WINDOW), move || {
                state.update(|s| {
                    s.resume(token);
                });
            });
            resume_timer.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let navigate = move |nav: Navigation| {
        if let Some(token) = state.try_update(|s| s.navigate(nav)) {
            schedule_resume(token);
        }
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            state.update_untracked(|s| s.touch_start(x));
        }
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            state.update_untracked(|s| s.touch_move(x));
        }
    };
    let on_touch_end = move |_ev: leptos::ev::TouchEvent| {
        if let Some(token) = state.try_update(CarouselState::touch_end).flatten() {
            schedule_resume(token);
        }
    };

    let strip_style = move || state.with(|s| format!("transform: {}", s.transform()));

    view! {
        <div class="carousel-container">
            <div
                class="carousel-wrapper"
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
            >
                <div class="carousel-slides" style=strip_style>
                    {slides
                        .into_iter()
                        .map(|slide| {
                            view! {
                                <div class="carousel-slide">
                                    <img src=slide.src alt=slide.caption class="carousel-image"/>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="carousel-arrow carousel-arrow-left"
                    aria-label="Previous slide"
                    on:click=move |_| navigate(Navigation::Previous)
                >
                    "‹"
                </button>
                <button
                    class="carousel-arrow carousel-arrow-right"
                    aria-label="Next slide"
                    on:click=move |_| navigate(Navigation::Next)
                >
                    "›"
                </button>
            </div>

            <div class="carousel-dots">
                {(0..len)
                    .map(|index| {
                        let class = move || {
                            if current.get() == index { "carousel-dot active" } else { "carousel-dot" }
                        };
                        view! {
                            <button
                                class=class
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| navigate(Navigation::GoTo(index))
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
