use crate::constants::{LOADING_OVERLAY_ID, OVERLAY_FADE_DELAY_MS, OVERLAY_HIDE_DELAY_MS};
use crate::dom;
use web_sys as web;

#[inline]
pub fn fade(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.set_attribute("style", "opacity:0");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

/// Fade the loading overlay, hide it, then run `on_hidden`.
pub fn dismiss_after_load(on_hidden: impl FnOnce() + 'static) {
    dom::set_timeout(OVERLAY_FADE_DELAY_MS, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        fade(&document);
        dom::set_timeout(OVERLAY_HIDE_DELAY_MS, move || {
            hide(&document);
            on_hidden();
        });
    });
}
