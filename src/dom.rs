use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_listener(&el, "click", handler);
    }
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// One-shot timer; the callback is dropped after firing.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once(handler);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}

/// Size the canvas backing store to the window width at the given aspect.
pub fn size_canvas_to_window(canvas: &web::HtmlCanvasElement, aspect: f64) {
    if let Some(w) = web::window() {
        let width = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(canvas.width() as f64);
        canvas.set_width(width.max(1.0) as u32);
        canvas.set_height((width * aspect).max(1.0) as u32);
    }
}

pub fn is_fullscreen(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

pub fn toggle_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        document.exit_fullscreen();
    } else if let Some(root) = document.document_element() {
        _ = root.request_fullscreen();
    }
}

pub fn exit_fullscreen(document: &web::Document) {
    if is_fullscreen(document) {
        document.exit_fullscreen();
    }
}
