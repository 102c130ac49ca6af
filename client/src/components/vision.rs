//! Vision statement with three supporting points.

use leptos::prelude::*;

use crate::components::common::{HighlightCard, Particles, SectionHeading};
use crate::components::navbar::go_to_section;
use crate::content::{VISION_POINTS, VISION_TEXT};
use crate::state::reveal::{RevealState, reveal_class};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;

const ID: SectionId = SectionId::Vision;

#[component]
pub fn Vision() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--vision">
            <Particles field=ParticleField::section(12, 0x7151) />
            <div class="section__inner">
                <SectionHeading eyebrow="Our Guiding Principle" title="Vision" revealed=revealed />
                <blockquote class=move || reveal_class("vision__statement", revealed.get())>{VISION_TEXT}</blockquote>
                <div class="card-grid card-grid--three">
                    {VISION_POINTS
                        .iter()
                        .enumerate()
                        .map(|(index, point)| view! { <HighlightCard highlight=*point index=index revealed=revealed /> })
                        .collect_view()}
                </div>
                <div class=move || reveal_class("section__cta", revealed.get())>
                    <a
                        class="btn btn--primary"
                        href=SectionId::Mission.anchor()
                        aria-label="Learn more about our vision"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(scroll, SectionId::Mission);
                        }
                    >
                        "Our Mission"
                    </a>
                </div>
            </div>
        </section>
    }
}
