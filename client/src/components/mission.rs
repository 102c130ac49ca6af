//! Mission statements list.

use leptos::prelude::*;

use crate::components::common::{Particles, SectionHeading};
use crate::components::navbar::go_to_section;
use crate::content::MISSIONS;
use crate::state::reveal::{RevealState, reveal_class, stagger_style};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;

const ID: SectionId = SectionId::Mission;

#[component]
pub fn Mission() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--mission">
            <Particles field=ParticleField::section(15, 0x3155) />
            <div class="section__inner">
                <SectionHeading eyebrow="Our Commitment" title="Mission" revealed=revealed />
                <ol class="mission__list">
                    {MISSIONS
                        .iter()
                        .enumerate()
                        .map(|(i, mission)| {
                            view! {
                                <li
                                    class=move || reveal_class("mission__item", revealed.get())
                                    style=stagger_style(300, 100, i)
                                >
                                    <span class="mission__icon">{mission.icon}</span>
                                    <p class="mission__text">{mission.text}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <div class=move || reveal_class("section__cta", revealed.get())>
                    <a
                        class="btn btn--primary"
                        href=SectionId::Contact.anchor()
                        aria-label="Learn more about our mission"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(scroll, SectionId::Contact);
                        }
                    >
                        "Join Our Mission"
                    </a>
                </div>
            </div>
        </section>
    }
}
