//! Decorative hearts drifting behind the proposal card.

use leptos::prelude::*;

#[component]
pub fn FloatingHearts(count: usize) -> impl IntoView {
    view! {
        <div class="floating-hearts">
            {(0..count).map(|_| view! { <div class="heart">"❤️"</div> }).collect_view()}
        </div>
    }
}
