use crate::dom;
use crate::events::controls;
use crate::frame::SharedApp;
use crate::keymap::{action_for_key, KeyAction};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, document: &web::Document, app: &SharedApp) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    match action {
        KeyAction::SelectMode(mode) => controls::select_mode(document, app, mode),
        KeyAction::ToggleMute => controls::toggle_mute(document, app),
        KeyAction::ToggleFullscreen => dom::toggle_fullscreen(document),
        KeyAction::ExitFullscreen => dom::exit_fullscreen(document),
    }
}

pub fn wire_global_keydown(document: &web::Document, app: SharedApp) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &doc, &app);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
