//! Editorial team contact cards.

use leptos::prelude::*;

use crate::components::common::{Particles, SectionHeading};
use crate::components::navbar::go_to_section;
use crate::content::{EDITORIAL_INTRO, EDITORIAL_NOTE, EDITORIAL_TEAM, EditorialMember};
use crate::state::reveal::{RevealState, reveal_class, stagger_style};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;

const ID: SectionId = SectionId::Editorial;

#[component]
pub fn Editorial() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--editorial">
            <Particles field=ParticleField::section(15, 0xED17) />
            <div class="section__inner">
                <SectionHeading
                    eyebrow="Get In Touch"
                    title="Editorial Inquiries"
                    intro=EDITORIAL_INTRO
                    revealed=revealed
                />
                <div class="card-grid card-grid--two">
                    {EDITORIAL_TEAM
                        .iter()
                        .enumerate()
                        .map(|(index, member)| view! { <MemberCard member=*member index=index revealed=revealed /> })
                        .collect_view()}
                </div>
                <p class=move || reveal_class("editorial__note", revealed.get())>{EDITORIAL_NOTE}</p>
                <div class=move || reveal_class("section__cta", revealed.get())>
                    <a
                        class="btn btn--primary"
                        href=SectionId::Contact.anchor()
                        aria-label="Contact editorial team"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go_to_section(scroll, SectionId::Contact);
                        }
                    >
                        "Contact Editorial Team"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MemberCard(member: EditorialMember, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let class = move || reveal_class(&format!("card card--{}", member.accent), revealed.get());
    view! {
        <article class=class style=stagger_style(300, 150, index)>
            <div class="card__header">
                <span class="card__icon">{member.icon}</span>
                <div>
                    <p class="card__role">{member.role}</p>
                    <h3 class="card__title">{member.name}</h3>
                </div>
            </div>
            <p class="card__body">{member.affiliation}</p>
            <dl class="card__contacts">
                <dt>"Email"</dt>
                <dd>
                    <a href=member.mailto_href()>{member.emails}</a>
                </dd>
                <dt>"Phone"</dt>
                <dd>
                    <a href=member.tel_href()>{member.phone}</a>
                </dd>
            </dl>
        </article>
    }
}
