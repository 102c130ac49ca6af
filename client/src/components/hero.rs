//! Full-height hero banner with parallax background and headline stats.

use leptos::prelude::*;

use crate::components::common::Particles;
use crate::components::navbar::go_to_section;
use crate::content::{HERO_EXPLORE_HREF, HERO_EYEBROW, HERO_TAGLINE, HERO_TITLE_LINES, STATS};
use crate::state::reveal::{RevealState, reveal_class, stagger_style};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::particles::ParticleField;

#[component]
pub fn Hero() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    // Revealed on first client render; there is nothing to scroll into.
    let reveal = RwSignal::new(RevealState::new(0.0));
    Effect::new(move || {
        reveal.update(|r| {
            r.reveal_now();
        });
    });
    let revealed = move || reveal.get().revealed();

    let parallax = move || format!("transform:translateY({:.1}px)", scroll.get().parallax_offset());

    view! {
        <section id=SectionId::Home.as_str() class="hero">
            <div class="hero__parallax" style=parallax>
                <Particles field=ParticleField::hero(0x5EED) />
            </div>
            <div class="hero__overlay"></div>

            <div class="hero__content">
                <div class=move || reveal_class("hero__intro", revealed())>
                    <span class="eyebrow">{HERO_EYEBROW}</span>
                    <h1 class="hero__title">
                        <span class="gradient-text gradient-text--light">{HERO_TITLE_LINES[0]}</span>
                        <br />
                        <span class="gradient-text">{HERO_TITLE_LINES[1]}</span>
                    </h1>
                    <div class="divider divider--wide"></div>
                    <p class="hero__tagline">{HERO_TAGLINE}</p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href=HERO_EXPLORE_HREF target="_blank" rel="noopener noreferrer">
                            "Explore Our Work"
                            <span class="btn__arrow">"→"</span>
                        </a>
                        <a
                            class="btn btn--outline"
                            href=SectionId::Contact.anchor()
                            on:click=move |ev| {
                                ev.prevent_default();
                                go_to_section(scroll, SectionId::Contact);
                            }
                        >
                            "Contact Us"
                        </a>
                    </div>
                </div>

                <div class="hero__stats">
                    {STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <div class=move || reveal_class("stat", revealed()) style=stagger_style(1000, 100, i)>
                                    <div class="stat__value">{stat.value}</div>
                                    <div class="stat__label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class=move || reveal_class("hero__scroll-hint", revealed())>
                <span>"Scroll Down"</span>
                <span class="hero__scroll-arrow">"↓"</span>
            </div>
        </section>
    }
}
