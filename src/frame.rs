use crate::audio::Notifier;
use crate::canvas::CanvasSurface;
use crate::hud;
use handfx_core::{FpsMeter, FrameOrchestrator, HandDetector, Mode};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the frame loop and the UI handlers share.
pub struct App {
    pub fx: FrameOrchestrator,
    pub surface: CanvasSurface,
    pub detector: Box<dyn HandDetector>,
    pub notifier: Notifier,
}

pub type SharedApp = Rc<RefCell<App>>;

impl App {
    pub fn set_mode(&mut self, mode: Mode) {
        let App {
            fx,
            surface,
            notifier,
            ..
        } = self;
        fx.set_mode(surface, mode, notifier);
    }
}

pub struct FrameContext {
    pub app: SharedApp,
    pub document: web::Document,
    pub started: Instant,
    pub fps: FpsMeter,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        let stats = {
            let mut app = self.app.borrow_mut();
            let App {
                fx,
                surface,
                detector,
                notifier,
            } = &mut *app;
            fx.tick(surface, detector.as_mut(), notifier, now_ms)
        };
        hud::write_stats(&self.document, &stats);
        if let Some(fps) = self.fps.frame(now_ms) {
            hud::write_fps(&self.document, fps);
        }
    }
}

/// Stops the loop by not scheduling the next frame.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
    };
    let running = handle.running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[loop] stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
    handle
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
