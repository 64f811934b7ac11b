#![cfg(target_arch = "wasm32")]
use crate::audio::Notifier;
use crate::canvas::CanvasSurface;
use crate::frame::{App, FrameContext, LoopHandle};
use handfx_core::{
    AudioNotifier, Cue, FpsMeter, FrameOrchestrator, FxConfig, HandDetector, NoDetector,
};
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod hud;
mod keymap;
mod overlay;
mod vision;

thread_local! {
    static LOOP: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("handfx-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt the frame loop after the current frame.
#[wasm_bindgen]
pub fn stop() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.stop();
        }
    });
}

/// Tuning overrides from the page query string, e.g. `?proximity=250`.
fn config_from_location(window: &web::Window) -> FxConfig {
    let mut cfg = FxConfig::default();
    let Ok(search) = window.location().search() else {
        return cfg;
    };
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return cfg;
    };
    let pairs: Vec<(&str, String)> = FxConfig::KEYS
        .iter()
        .filter_map(|&key| params.get(key).map(|value| (key, value)))
        .collect();
    for err in cfg.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str()))) {
        log::warn!("[config] ignoring override: {}", err);
    }
    cfg
}

async fn load_detector() -> Box<dyn HandDetector> {
    match vision::VideoHandDetector::load().await {
        Ok(d) => {
            log::info!("[vision] hand landmarker ready");
            Box::new(d)
        }
        Err(e) => {
            log::error!("[vision] unavailable, running without hands: {:?}", e);
            Box::new(NoDetector)
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let detector = load_detector().await;
    dom::size_canvas_to_window(&canvas, constants::CANVAS_ASPECT);
    let surface = CanvasSurface::new(canvas)?;

    let cfg = config_from_location(&window);
    let seed = rand::thread_rng().gen::<u64>() ^ constants::SEED_SALT;
    let app = Rc::new(RefCell::new(App {
        fx: FrameOrchestrator::new(cfg, seed),
        surface,
        detector,
        notifier: Notifier::init(),
    }));

    events::wire_controls(&document, &app);
    events::wire_global_keydown(&document, app.clone());

    {
        let app = app.clone();
        overlay::dismiss_after_load(move || app.borrow_mut().notifier.play(Cue::SystemOnline));
    }

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        app,
        document,
        started: Instant::now(),
        fps: FpsMeter::default(),
    }));
    let handle = frame::start_loop(frame_ctx);
    LOOP.with(|l| *l.borrow_mut() = Some(handle));
    Ok(())
}
