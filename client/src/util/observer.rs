//! Intersection-observer wiring for section reveals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections call `use_reveal` with their element id. After mount, the effect
//! looks the element up and attaches an `IntersectionObserver`; entries are
//! fed to `RevealState::observe` with both the element's visible ratio and
//! its share of the viewport, and the first `Revealed` transition
//! disconnects the observer. A missing element leaves the section hidden.
//! The observer is disconnected on cleanup either way.

use leptos::prelude::*;

use crate::state::reveal::RevealState;
#[cfg(feature = "hydrate")]
use crate::state::reveal::{Observation, RevealTransition, observer_thresholds};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "hydrate")]
struct Registration {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

/// Reveal gate for the element with id `element_id`, starting from `initial`.
pub fn use_reveal(element_id: &'static str, initial: RevealState) -> RwSignal<RevealState> {
    let state = RwSignal::new(initial);

    #[cfg(feature = "hydrate")]
    {
        let registration = StoredValue::new_local(None::<Registration>);
        Effect::new(move || {
            if state.get_untracked().revealed() || registration.with_value(Option::is_some) {
                return;
            }
            match register(element_id, state) {
                Some(r) => registration.set_value(Some(r)),
                None => log::debug!("reveal target #{element_id} missing; staying hidden"),
            }
        });
        on_cleanup(move || {
            registration.update_value(|slot| {
                if let Some(r) = slot.take() {
                    r.observer.disconnect();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
    }

    state
}

#[cfg(feature = "hydrate")]
fn register(element_id: &'static str, state: RwSignal<RevealState>) -> Option<Registration> {
    let element = web_sys::window()?.document()?.get_element_by_id(element_id)?;

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                let observation = Observation {
                    intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                    coverage: viewport_coverage(&entry),
                };
                let mut next = state.get_untracked();
                if next.observe(observation) == RevealTransition::Revealed {
                    state.set(next);
                    observer.disconnect();
                    log::debug!("revealed #{element_id} at ratio {:.2}", observation.ratio);
                    break;
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    let thresholds: js_sys::Array = observer_thresholds(state.get_untracked().threshold())
        .into_iter()
        .map(JsValue::from_f64)
        .collect();
    init.set_threshold(&thresholds);
    let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            return None;
        }
    };
    observer.observe(&element);
    Some(Registration { observer, _callback: callback })
}

/// Share of the root viewport covered by the entry's visible part. Zero when
/// the browser withholds root bounds.
#[cfg(feature = "hydrate")]
fn viewport_coverage(entry: &web_sys::IntersectionObserverEntry) -> f64 {
    let Some(root) = entry.root_bounds() else {
        return 0.0;
    };
    if root.height() <= 0.0 {
        return 0.0;
    }
    (entry.intersection_rect().height() / root.height()).clamp(0.0, 1.0)
}
