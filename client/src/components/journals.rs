//! Journal directory. Cards open the journal site with its link policy.

use leptos::prelude::*;

use crate::components::common::{Particles, SectionHeading};
use crate::content::{JOURNALS, JOURNALS_INTRO, Journal};
use crate::state::reveal::{RevealState, reveal_class, stagger_style};
use crate::state::section::SectionId;
use crate::util::dom;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;

const ID: SectionId = SectionId::Journals;

#[component]
pub fn Journals() -> impl IntoView {
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--journals">
            <Particles field=ParticleField::section(15, 0x70A1) />
            <div class="section__inner">
                <SectionHeading
                    eyebrow="Academic Publications"
                    title="Journals under UORA"
                    intro=JOURNALS_INTRO
                    revealed=revealed
                />
                <div class="card-grid card-grid--two">
                    {JOURNALS
                        .iter()
                        .enumerate()
                        .map(|(index, journal)| view! { <JournalCard journal=*journal index=index revealed=revealed /> })
                        .collect_view()}
                </div>
                <div class=move || reveal_class("section__cta", revealed.get())>
                    <button
                        class="btn btn--primary"
                        aria-label="View all journals"
                        on:click=move |_| {
                            if let Some(first) = JOURNALS.first() {
                                dom::open_link(first.href, first.target);
                            }
                        }
                    >
                        "View All Journals"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn JournalCard(journal: Journal, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let open = move || dom::open_link(journal.href, journal.target);
    let class = move || reveal_class(&format!("card card--link card--{}", journal.accent), revealed.get());

    view! {
        <article
            class=class
            style=stagger_style(300, 100, index)
            role="link"
            tabindex="0"
            on:click=move |_| open()
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    open();
                }
            }
        >
            <div class="card__header">
                <span class="card__icon">{journal.icon}</span>
                <div>
                    <h3 class="card__title">{journal.title}</h3>
                    <p class="card__subtitle">{journal.subtitle}</p>
                </div>
            </div>
            <p class="card__body">{journal.description}</p>
            <span
                class="card__action"
                on:click=move |ev| {
                    ev.stop_propagation();
                    open();
                }
            >
                "View Journal →"
            </span>
        </article>
    }
}
