//! Fixed top navigation with scroll highlighting and the mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar owns the page's scroll/resize subscription: every event
//! re-measures sections through `DomLayout` and updates the shared
//! `ScrollState` signal. Each nav entry only sees a memoized `is_active` flag.
//! Listeners and the pending menu-close timer are released on cleanup.

use leptos::prelude::*;

use crate::content::ORG_SHORT;
use crate::state::menu::{MENU_CLOSE_DELAY, MobileMenuState};
use crate::state::scroll::ScrollState;
use crate::state::section::SectionId;
use crate::util::dom;
#[cfg(feature = "hydrate")]
use crate::util::dom::DomLayout;
use crate::util::timer::TimerSlot;

/// Highlight `id` immediately and smooth-scroll to it.
pub fn go_to_section(scroll: RwSignal<ScrollState>, id: SectionId) {
    scroll.update(|s| s.select(id));
    dom::scroll_to_section(id);
}

#[cfg(feature = "hydrate")]
fn refresh_scroll(scroll: RwSignal<ScrollState>) {
    let offset = dom::scroll_offset();
    scroll.update(|s| s.on_scroll(offset, &DomLayout));
}

#[cfg(feature = "hydrate")]
fn dismiss_if_outside(menu: RwSignal<MobileMenuState>, nav_ref: NodeRef<leptos::html::Nav>, x: f64, y: f64) {
    if !menu.get_untracked().open {
        return;
    }
    let region = nav_ref.get_untracked().map(|el| dom::client_rect(&el));
    menu.update(|m| {
        m.pointer_down(x, y, region);
    });
}

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let menu = RwSignal::new(MobileMenuState::default());
    let close_timer = StoredValue::new_local(TimerSlot::default());
    let nav_ref = NodeRef::<leptos::html::Nav>::new();

    let is_scrolled = Memo::new(move |_| scroll.get().is_scrolled);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || match dom::hash_section() {
            Some(id) => go_to_section(scroll, id),
            None => refresh_scroll(scroll),
        });

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| refresh_scroll(scroll));
        let on_resize = window_event_listener(leptos::ev::resize, move |_| refresh_scroll(scroll));
        let on_mouse = window_event_listener(leptos::ev::mousedown, move |ev| {
            dismiss_if_outside(menu, nav_ref, f64::from(ev.client_x()), f64::from(ev.client_y()));
        });
        let on_touch = window_event_listener(leptos::ev::touchstart, move |ev| {
            if let Some(touch) = ev.touches().get(0) {
                dismiss_if_outside(menu, nav_ref, f64::from(touch.client_x()), f64::from(touch.client_y()));
            }
        });
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
            on_mouse.remove();
            on_touch.remove();
        });
    }

    on_cleanup(move || close_timer.update_value(TimerSlot::cancel));

    let on_select = Callback::new(move |id: SectionId| {
        go_to_section(scroll, id);
        let mut ticket = None;
        menu.update(|m| ticket = m.select());
        if let Some(ticket) = ticket {
            close_timer.update_value(|slot| {
                slot.schedule(MENU_CLOSE_DELAY, move || {
                    menu.update(|m| {
                        m.close_if_current(ticket);
                    });
                });
            });
        }
    });

    let links = move |variant: &'static str| {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                let is_active = Signal::from(Memo::new(move |_| scroll.with(|s| s.is_active(id))));
                view! {
                    <li>
                        <NavLink id=id variant=variant active=is_active on_select=on_select />
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav
            node_ref=nav_ref
            class=move || if is_scrolled.get() { "navbar navbar--scrolled" } else { "navbar" }
        >
            <div class="navbar__bar">
                <a
                    href=SectionId::Home.anchor()
                    class="navbar__brand gradient-text"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_select.run(SectionId::Home);
                    }
                >
                    {ORG_SHORT}
                </a>
                <ul class="navbar__links">{links("navbar__link")}</ul>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().open.to_string()
                    on:click=move |_| menu.update(MobileMenuState::toggle)
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M4 6h16M4 12h16m-7 6h7"></path>
                    </svg>
                </button>
            </div>
            <Show when=move || menu.get().open>
                <ul class="navbar__mobile">{links("navbar__mobile-link")}</ul>
            </Show>
        </nav>
    }
}

/// One navigation entry; `variant` is the BEM block for desktop or mobile.
#[component]
fn NavLink(
    id: SectionId,
    variant: &'static str,
    active: Signal<bool>,
    on_select: Callback<SectionId>,
) -> impl IntoView {
    let class = move || {
        if active.get() {
            format!("{variant} {variant}--active")
        } else {
            variant.to_owned()
        }
    };
    view! {
        <a
            href=id.anchor()
            class=class
            aria-current=move || active.get().then_some("true")
            on:click=move |ev| {
                ev.prevent_default();
                on_select.run(id);
            }
        >
            {id.label()}
        </a>
    }
}
