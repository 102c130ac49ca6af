//! Building blocks shared by the content sections.

use leptos::prelude::*;

use crate::content::Highlight;
use crate::state::reveal::{reveal_class, stagger_style};
use crate::util::particles::ParticleField;

/// Eyebrow pill, gradient title, divider, optional lead paragraph.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    revealed: Signal<bool>,
    #[prop(optional)] intro: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class=move || reveal_class("section-heading", revealed.get())>
            <span class="eyebrow">{eyebrow}</span>
            <h2 class="section-heading__title gradient-text">{title}</h2>
            <div class="divider"></div>
            {intro.map(|text| view! { <p class="section-heading__intro">{text}</p> })}
        </header>
    }
}

/// Absolutely positioned decorative particles.
#[component]
pub fn Particles(field: ParticleField) -> impl IntoView {
    view! {
        <div class="particles" aria-hidden="true">
            {field
                .generate()
                .into_iter()
                .map(|p| view! { <div class="particle" style=p.style()></div> })
                .collect_view()}
        </div>
    }
}

/// Icon card used by About and Vision.
#[component]
pub fn HighlightCard(highlight: Highlight, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let class = move || reveal_class(&format!("card card--{}", highlight.accent), revealed.get());
    view! {
        <article class=class style=stagger_style(300, 100, index)>
            <span class="card__icon">{highlight.icon}</span>
            <h3 class="card__title">{highlight.title}</h3>
            <p class="card__body">{highlight.description}</p>
        </article>
    }
}
