//! About section: organization blurb and highlight cards.

use leptos::prelude::*;

use crate::components::common::{HighlightCard, Particles, SectionHeading};
use crate::components::navbar::go_to_section;
use crate::content::{ABOUT_HIGHLIGHTS, ABOUT_TEXT};
use crate::state::reveal::{RevealState, reveal_class};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;

const ID: SectionId = SectionId::About;

#[component]
pub fn About() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--about">
            <Particles field=ParticleField::section(20, 0xAB07) />
            <div class="section__inner">
                <SectionHeading eyebrow="About Our Organization" title="About UORA" revealed=revealed />
                <p class=move || reveal_class("section__lead", revealed.get())>{ABOUT_TEXT}</p>
                <div class="card-grid card-grid--four">
                    {ABOUT_HIGHLIGHTS
                        .iter()
                        .enumerate()
                        .map(|(index, highlight)| {
                            view! { <HighlightCard highlight=*highlight index=index revealed=revealed /> }
                        })
                        .collect_view()}
                </div>
                <div class=move || reveal_class("section__cta", revealed.get())>
                    <a
                        class="btn btn--primary"
                        href=SectionId::Vision.anchor()
                        aria-label="Learn more about UORA"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(scroll, SectionId::Vision);
                        }
                    >
                        "Discover More"
                    </a>
                </div>
            </div>
        </section>
    }
}
