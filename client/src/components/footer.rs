//! Footer: registration ids, quick links, contact, socials, copyright.

use leptos::prelude::*;

use crate::components::navbar::go_to_section;
use crate::content::{
    ADDRESS_LINES, DEFAULT_COPYRIGHT_YEAR, EMAIL, FOOTER_LINKS, ORG_NAME, ORG_SHORT, REGISTRATIONS, SOCIAL_LINKS,
};
use crate::state::reveal::{FOOTER_THRESHOLD, RevealState, reveal_class, stagger_style};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::dom;
use crate::util::observer::use_reveal;

const FOOTER_ID: &str = "site-footer";

#[component]
pub fn Footer() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let reveal = use_reveal(FOOTER_ID, RevealState::new(FOOTER_THRESHOLD));
    let revealed = move || reveal.get().revealed();

    let year = RwSignal::new(DEFAULT_COPYRIGHT_YEAR);
    Effect::new(move || {
        if let Some(current) = dom::current_year() {
            year.set(current);
        }
    });

    let column_class = move || reveal_class("footer__column", revealed());

    view! {
        <footer id=FOOTER_ID class="footer">
            <div class="footer__grid">
                <div class=column_class style=stagger_style(0, 100, 0)>
                    <h3 class="footer__heading">"Registration & Compliance"</h3>
                    <ul class="footer__list">
                        {REGISTRATIONS
                            .iter()
                            .map(|r| view! { <li>{format!("{}: {}", r.label, r.value)}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class=column_class style=stagger_style(0, 100, 1)>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__list">
                        {FOOTER_LINKS
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <li>
                                        <a
                                            href=id.anchor()
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                go_to_section(scroll, id);
                                            }
                                        >
                                            {id.label()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div class=column_class style=stagger_style(0, 100, 2)>
                    <h3 class="footer__heading">"Contact Info"</h3>
                    {ADDRESS_LINES.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                </div>
            </div>

            <div class=move || reveal_class("footer__social social", revealed())>
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! { <a class="social__link" href=link.href aria-label=link.name>{link.icon}</a> })
                    .collect_view()}
            </div>

            <div class="footer__bottom">
                <p>{move || format!("© {} {ORG_NAME} ({ORG_SHORT}). All rights reserved.", year.get())}</p>
                <p class="footer__tagline">"Advancing knowledge through multidisciplinary research and publications."</p>
                <a
                    class="footer__back-to-top"
                    href=SectionId::Home.anchor()
                    aria-label="Back to top"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to_section(scroll, SectionId::Home);
                    }
                >
                    "↑"
                </a>
            </div>
        </footer>
    }
}
