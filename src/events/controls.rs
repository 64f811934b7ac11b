use crate::constants::*;
use crate::dom;
use crate::frame::SharedApp;
use handfx_core::{AudioNotifier, Cue, Mode};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn mode_buttons(document: &web::Document) -> Vec<(web::HtmlElement, Mode)> {
    let Ok(nodes) = document.query_selector_all(MODE_BUTTON_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .filter_map(|el| {
            let mode = el.dataset().get("mode")?.parse::<Mode>().ok()?;
            Some((el, mode))
        })
        .collect()
}

/// Highlight the button for `mode` and switch the orchestrator.
pub fn select_mode(document: &web::Document, app: &SharedApp, mode: Mode) {
    for (el, m) in mode_buttons(document) {
        let cl = el.class_list();
        if m == mode {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
    app.borrow_mut().set_mode(mode);
}

pub fn toggle_mute(document: &web::Document, app: &SharedApp) {
    let muted = match app.borrow_mut().notifier.web_mut() {
        Some(n) => n.toggle(),
        None => return,
    };
    log::info!("[audio] muted={}", muted);
    dom::set_text(document, MUTE_BUTTON_ID, if muted { LABEL_MUTED } else { LABEL_AUDIO });
}

fn sync_fullscreen_label(document: &web::Document) {
    let label = if dom::is_fullscreen(document) {
        LABEL_EXIT_FULLSCREEN
    } else {
        LABEL_FULLSCREEN
    };
    dom::set_text(document, FULLSCREEN_BUTTON_ID, label);
}

fn wire_mode_buttons(document: &web::Document, app: &SharedApp) {
    for (el, mode) in mode_buttons(document) {
        let doc = document.clone();
        let app = app.clone();
        dom::add_listener(&el, "click", move || select_mode(&doc, &app, mode));
    }
}

fn wire_volume_slider(document: &web::Document, app: &SharedApp) {
    let Some(slider) = document
        .get_element_by_id(VOLUME_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let app = app.clone();
    let input = slider.clone();
    dom::add_listener(&slider, "input", move || {
        let Ok(value) = input.value().parse::<f32>() else {
            return;
        };
        if let Some(n) = app.borrow_mut().notifier.web_mut() {
            n.set_volume(value / VOLUME_SLIDER_MAX);
        }
    });
}

fn wire_first_click(document: &web::Document, app: &SharedApp) {
    let greeted = Rc::new(Cell::new(false));
    let app = app.clone();
    dom::add_listener(document, "click", move || {
        let mut app = app.borrow_mut();
        if let Some(n) = app.notifier.web_mut() {
            n.resume();
        }
        if !greeted.replace(true) {
            app.notifier.play(Cue::SystemOnline);
        }
    });
}

pub fn wire_controls(document: &web::Document, app: &SharedApp) {
    wire_mode_buttons(document, app);
    wire_volume_slider(document, app);
    wire_first_click(document, app);

    {
        let doc = document.clone();
        let app = app.clone();
        dom::add_click_listener(document, MUTE_BUTTON_ID, move || toggle_mute(&doc, &app));
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, FULLSCREEN_BUTTON_ID, move || {
            dom::toggle_fullscreen(&doc)
        });
    }
    {
        let doc = document.clone();
        dom::add_listener(document, "fullscreenchange", move || sync_fullscreen_label(&doc));
    }
}
