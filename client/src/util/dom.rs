//! Browser-facing helpers: scroll position, section measurement, smooth
//! scrolling, external links.
//!
//! Every function is callable during server rendering, where it no-ops or
//! returns a neutral value, so components can call them unconditionally.
//! Native tests cover that server path only. Measurement logic is tested
//! through `SectionLayout` with a `HashMap` layout in `state::scroll`.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::content::LinkTarget;
use crate::state::section::SectionId;
use crate::util::layout::{Rect, SectionLayout};

/// Measures sections from the live document (`offsetTop`/`offsetHeight`).
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn bounding_box(&self, id: SectionId) -> Option<Rect> {
        #[cfg(feature = "hydrate")]
        {
            let element = web_sys::window()?
                .document()?
                .get_element_by_id(id.as_str())?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(Rect::new(
                f64::from(element.offset_left()),
                f64::from(element.offset_top()),
                f64::from(element.offset_width()),
                f64::from(element.offset_height()),
            ))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            None
        }
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smooth-scroll `id` into view. Missing elements are ignored.
pub fn scroll_to_section(id: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id.as_str()))
        else {
            log::debug!("scroll target #{id} not in document");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Section named by the location hash, if any.
pub fn hash_section() -> Option<SectionId> {
    #[cfg(feature = "hydrate")]
    {
        let hash = web_sys::window()?.location().hash().ok()?;
        if hash.is_empty() {
            return None;
        }
        match SectionId::from_anchor(&hash) {
            Ok(id) => Some(id),
            Err(e) => {
                log::debug!("ignoring location hash: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Open an external URL with the given target policy.
pub fn open_link(href: &str, target: LinkTarget) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(href, target.as_str()) {
                log::warn!("window.open({href}) failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (href, target);
    }
}

/// Calendar year from the browser clock; `None` outside the browser.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "hydrate")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Viewport-relative box of an element (`getBoundingClientRect`).
#[cfg(feature = "hydrate")]
pub fn client_rect(element: &web_sys::Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}
