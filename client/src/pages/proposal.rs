//! The proposal page: ask, escalate on "No", celebrate on "Yes".
//!
//! ARCHITECTURE
//! ============
//! The page owns one `ProposalState` signal for its lifetime. While asking it
//! renders the question view; the first accept swaps in `CelebrationView`,
//! which never swaps back.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::celebration::CelebrationView;
use crate::components::floating_hearts::FloatingHearts;
use crate::content::{AskingContent, ProposalContent};
use crate::state::proposal::ProposalState;
use crate::util::button_style::{no_button_style, random_jitter, yes_button_style};

#[component]
pub fn ProposalPage() -> impl IntoView {
    let proposal = RwSignal::new(ProposalState::default());
    let accepted = Memo::new(move |_| proposal.with(ProposalState::is_accepted));

    view! {
        <Show when=move || accepted.get() fallback=move || view! { <AskingView proposal/> }>
            <CelebrationView/>
        </Show>
    }
}

/// Question card with the gallery and the Yes/No buttons.
#[component]
fn AskingView(proposal: RwSignal<ProposalState>) -> impl IntoView {
    let content = expect_context::<ProposalContent>();
    let AskingContent { headline, subtitle, gallery, sweet_messages, yes_label, hint, floating_hearts } =
        content.asking;
    let decline_labels = content.decline;

    let no_label = move || proposal.with(|p| decline_labels.label_for(p.decline_count()).to_owned());
    let yes_style = move || proposal.with(yes_button_style);
    let no_style = move || proposal.with(|p| no_button_style(p, random_jitter()));
    let show_hint = move || proposal.with(ProposalState::shows_hint);

    let on_yes = move |_| {
        proposal.update(|p| {
            p.accept();
        });
    };
    let on_no = move |_| {
        proposal.update(|p| {
            p.decline();
        });
    };

    view! {
        <div class="proposal-container">
            <FloatingHearts count=floating_hearts/>

            <div class="proposal-card">
                <h1 class="proposal-title">{headline}</h1>
                <p class="proposal-subtitle">{subtitle}</p>

                <Carousel slides=gallery.slides auto_play=gallery.auto_play interval_ms=gallery.interval_ms/>

                <div class="sweet-messages">
                    {sweet_messages
                        .into_iter()
                        .map(|message| view! { <div class="message">{message}</div> })
                        .collect_view()}
                </div>

                <div class="button-container">
                    <button class="btn btn-yes" style=yes_style on:click=on_yes>
                        {yes_label}
                    </button>
                    <button class="btn btn-no" style=no_style on:click=on_no>
                        {no_label}
                    </button>
                </div>

                <Show when=show_hint>
                    <p class="message decline-hint">{hint.clone()}</p>
                </Show>
            </div>
        </div>
    }
}
