//! Contact section: organization details and the local-only message form.
//!
//! The form state lives in a `ContactForm` signal. A valid submit shows the
//! acknowledgment and arms a reset timer; the timer is cancelled if the
//! section is torn down first.

use leptos::prelude::*;

use crate::components::common::{Particles, SectionHeading};
use crate::content::{ADDRESS_LINES, CONTACT_INTRO, EMAIL, ORG_NAME, ORG_SHORT, PHONE, SOCIAL_LINKS, tel_href};
use crate::state::contact::{ContactForm, FORM_RESET_DELAY, Field, SubmitOutcome};
use crate::state::reveal::{RevealState, reveal_class};
use crate::state::section::SectionId;
use crate::util::observer::use_reveal;
use crate::util::particles::ParticleField;
use crate::util::timer::TimerSlot;

const ID: SectionId = SectionId::Contact;

#[component]
pub fn Contact() -> impl IntoView {
    let reveal = use_reveal(ID.as_str(), RevealState::for_section(ID));
    let revealed = Signal::derive(move || reveal.get().revealed());

    view! {
        <section id=ID.as_str() class="section section--contact">
            <Particles field=ParticleField::section(15, 0xC047) />
            <div class="section__inner">
                <SectionHeading eyebrow="Get In Touch" title="Contact Us" intro=CONTACT_INTRO revealed=revealed />
                <div class="contact__grid">
                    <div class=move || reveal_class("contact__info reveal--from-left", revealed.get())>
                        <ContactInfo />
                    </div>
                    <div class=move || reveal_class("contact__panel reveal--from-right", revealed.get())>
                        <h3 class="contact__heading">"Send us a Message"</h3>
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let publisher = format!("{ORG_NAME} ({ORG_SHORT})");
    view! {
        <h3 class="contact__heading">"Contact Information"</h3>
        <dl class="contact__details">
            <dt>"Publisher"</dt>
            <dd>{publisher}</dd>
            <dt>"Office Address"</dt>
            <dd>{ADDRESS_LINES.join(", ")}</dd>
            <dt>"Phone"</dt>
            <dd>
                <a href=tel_href(PHONE)>{PHONE}</a>
            </dd>
            <dt>"Email"</dt>
            <dd>
                <a href=format!("mailto:{EMAIL}")>{EMAIL}</a>
            </dd>
        </dl>
        <h4 class="contact__subheading">"Connect With Us"</h4>
        <div class="social">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a class="social__link" href=link.href aria-label=format!("Follow us on {}", link.name)>
                            {link.icon}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let reset_timer = StoredValue::new_local(TimerSlot::default());
    on_cleanup(move || reset_timer.update_value(TimerSlot::cancel));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = SubmitOutcome::Rejected;
        form.update(|f| outcome = f.submit());
        if let SubmitOutcome::Submitted(ticket) = outcome {
            reset_timer.update_value(|slot| {
                slot.schedule(FORM_RESET_DELAY, move || {
                    form.update(|f| {
                        f.finish_reset(ticket);
                    });
                });
            });
        }
    };

    view! {
        <Show
            when=move || form.with(ContactForm::is_submitted)
            fallback=move || {
                view! {
                    <form class="form" novalidate=true on:submit=on_submit>
                        <FormField form=form field=Field::Name label="Name" placeholder="Your name" />
                        <FormField
                            form=form
                            field=Field::Email
                            label="Email"
                            placeholder="Your email address"
                            input_type="email"
                        />
                        <FormField
                            form=form
                            field=Field::Message
                            label="Message"
                            placeholder="Your message"
                            multiline=true
                        />
                        <button class="btn btn--primary btn--block" type="submit">
                            "Send Message"
                        </button>
                    </form>
                }
            }
        >
            <div class="form__ack" role="status">
                <div class="form__ack-icon">"✅"</div>
                <h4>"Message Sent Successfully!"</h4>
                <p>"Thank you for contacting us. We'll get back to you soon."</p>
            </div>
        </Show>
    }
}

/// Labeled input or textarea bound to one `ContactForm` field.
#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.input.get(field).to_owned());
    let error = move || form.with(|f| f.error(field));
    let class = move || if error().is_some() { "form__control form__control--error" } else { "form__control" };

    let control = if multiline {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="5"
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                type=input_type
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="form__field">
            <label for=field.key() class="form__label">
                {label}
            </label>
            {control}
            {move || error().map(|e| view! { <p class="form__error">{e.to_string()}</p> })}
        </div>
    }
}
