//! Per-frame driver tying detector, classifier, renderers and effects
//! together.
//!
//! One call to [`FrameOrchestrator::tick`] is one display refresh: clear the
//! surface, age and draw the ambient effects, query the detector once,
//! classify, dispatch to the active mode renderer, drive the cursor emitters
//! and fire audio cues on state transitions. Nothing in here returns an
//! error; detector failures degrade to the "no hands" path.

use crate::audio::{AudioNotifier, Cue};
use crate::config::FxConfig;
use crate::constants::DETECTION_CONFIDENCE;
use crate::effects::EffectCollections;
use crate::emitter::{CursorEmitter, EmitterPool, ParticleTrail};
use crate::error::FxError;
use crate::gesture::{classify, Gesture, SCANNING_LABEL};
use crate::hand::{anchors_for, Anchors, Hand};
use crate::hud::FrameStats;
use crate::matrix::MatrixRain;
use crate::mode::Mode;
use crate::overlays::{draw_hologram, draw_neural};
use crate::surface::{Color, Surface};
use crate::vision::HandDetector;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type EmitterFactory<E> = fn(&FxConfig, u64) -> E;

pub struct FrameOrchestrator<E: CursorEmitter = ParticleTrail> {
    cfg: FxConfig,
    mode: Mode,
    effects: EffectCollections,
    matrix: Option<MatrixRain>,

    gesture_label: String,
    last_gesture: Option<Gesture>,
    last_hand_count: usize,

    // primary emitter anchor; persists while no hand is tracked
    pointer: Option<Vec2>,
    primary: E,
    hand_emitters: EmitterPool<E>,
    make_emitter: EmitterFactory<E>,
    anchors: Anchors,

    rng: StdRng,
    detector_failures: u64,
}

impl FrameOrchestrator<ParticleTrail> {
    pub fn new(cfg: FxConfig, seed: u64) -> Self {
        Self::with_emitters(cfg, seed, ParticleTrail::new)
    }
}

impl<E: CursorEmitter> FrameOrchestrator<E> {
    pub fn with_emitters(cfg: FxConfig, seed: u64, make_emitter: EmitterFactory<E>) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let primary = make_emitter(&cfg, rng.gen());
        Self {
            effects: EffectCollections::new(cfg.clone()),
            cfg,
            mode: Mode::default(),
            matrix: None,
            gesture_label: SCANNING_LABEL.to_string(),
            last_gesture: None,
            last_hand_count: 0,
            pointer: None,
            primary,
            hand_emitters: EmitterPool::default(),
            make_emitter,
            anchors: Anchors::new(),
            rng,
            detector_failures: 0,
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.cfg
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn effects(&self) -> &EffectCollections {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut EffectCollections {
        &mut self.effects
    }

    /// Matrix column state; `None` outside matrix mode and before its first
    /// frame.
    pub fn matrix(&self) -> Option<&MatrixRain> {
        self.matrix.as_ref()
    }

    pub fn gesture_label(&self) -> &str {
        &self.gesture_label
    }

    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Emitter following the first hand's index tip.
    pub fn primary(&self) -> &E {
        &self.primary
    }

    pub fn hand_emitters(&self) -> &EmitterPool<E> {
        &self.hand_emitters
    }

    pub fn detector_failures(&self) -> u64 {
        self.detector_failures
    }

    pub fn particle_count(&self) -> usize {
        self.primary.particle_count() + self.hand_emitters.particle_count()
    }

    /// Switch rendering mode. Leaving matrix mode drops the column state and
    /// paints the surface opaque so no rain trail leaks into the next mode.
    pub fn set_mode(
        &mut self,
        surface: &mut dyn Surface,
        mode: Mode,
        audio: &mut dyn AudioNotifier,
    ) {
        let previous = self.mode;
        self.mode = mode;
        if previous == Mode::Matrix && mode != Mode::Matrix {
            self.matrix = None;
            surface.fill_opaque(Color::BLACK);
        }
        audio.play(Cue::ModeSwitch(mode));
        log::info!("[mode] {} -> {}", previous, mode);
    }

    pub fn tick(
        &mut self,
        surface: &mut dyn Surface,
        detector: &mut dyn HandDetector,
        audio: &mut dyn AudioNotifier,
        now_ms: f64,
    ) -> FrameStats {
        surface.clear();
        self.effects.advance(surface);

        self.anchors.clear();
        let mut hands_detected = 0;
        let mut confidence = 0.0;

        if detector.ready() {
            match detector.detect(now_ms) {
                Ok(hands) => {
                    hands_detected = hands.len();
                    confidence = DETECTION_CONFIDENCE;
                    self.on_hands(surface, &hands, audio, now_ms);
                }
                Err(e) => self.on_detector_error(surface, e),
            }
        }

        let pointer = *self
            .pointer
            .get_or_insert_with(|| Vec2::new(surface.width(), surface.height()));
        self.primary.update(surface, pointer);
        for (emitter, anchor) in self
            .hand_emitters
            .active_mut()
            .iter_mut()
            .zip(self.anchors.iter())
        {
            emitter.update(surface, anchor.pos);
        }

        FrameStats {
            hands: hands_detected,
            gesture: self.gesture_label.clone(),
            particles: self.particle_count(),
            confidence,
            mode: self.mode,
            effects: self.effects.counts(),
        }
    }

    fn on_hands(
        &mut self,
        surface: &mut dyn Surface,
        hands: &[Hand],
        audio: &mut dyn AudioNotifier,
        now_ms: f64,
    ) {
        let (w, h) = (surface.width(), surface.height());

        if hands.len() > self.last_hand_count {
            audio.play(Cue::HandDetected);
        }
        self.last_hand_count = hands.len();

        let gesture = classify(hands);
        if self.last_gesture != Some(gesture) {
            log::debug!("[gesture] {}", gesture);
            audio.play(Cue::GestureChange(gesture));
            self.last_gesture = Some(gesture);
        }
        self.gesture_label = gesture.to_string();

        self.anchors = anchors_for(hands, w, h);
        if let Some(first) = self.anchors.first() {
            self.pointer = Some(first.pos);
        }
        let make = self.make_emitter;
        let cfg = &self.cfg;
        let rng = &mut self.rng;
        self.hand_emitters.activate(hands.len(), |_| make(cfg, rng.gen()));

        match self.mode {
            Mode::Particles => {}
            Mode::Neural => draw_neural(
                surface,
                hands,
                now_ms,
                &mut self.effects,
                &self.cfg,
                &mut self.rng,
            ),
            Mode::Hologram => {
                draw_hologram(surface, hands, now_ms);
                self.effects.render_digital_grid(surface, self.cfg.hologram_grid_opacity);
            }
            Mode::Matrix => self.draw_matrix(surface),
        }

        if self.rng.gen_bool(self.cfg.scan_line_spawn_chance) {
            let y = self.rng.gen::<f32>() * h;
            self.effects
                .spawn_scan_line(y, self.cfg.scan_line_spawn_intensity, &mut self.rng);
        }
        if self.rng.gen_bool(self.cfg.energy_field_spawn_chance) {
            for hand in hands {
                let c = hand.palm_center().to_px(w, h);
                self.effects.spawn_energy_field(
                    c.x,
                    c.y,
                    self.cfg.energy_field_spawn_radius,
                    &mut self.rng,
                );
            }
        }
    }

    fn on_detector_error(&mut self, surface: &mut dyn Surface, err: FxError) {
        self.detector_failures += 1;
        if self.detector_failures == 1 {
            log::warn!("[vision] detection failed, continuing without hands: {}", err);
        } else {
            log::debug!("[vision] detection failed ({} total): {}", self.detector_failures, err);
        }
        self.gesture_label = Gesture::NoHands.to_string();
        self.last_hand_count = 0;
        self.hand_emitters.deactivate();

        // the rain keeps falling without hands
        if self.mode == Mode::Matrix {
            self.draw_matrix(surface);
        }
    }

    fn draw_matrix(&mut self, surface: &mut dyn Surface) {
        let (w, h) = (surface.width(), surface.height());
        let glyph_px = self.cfg.matrix_glyph_px;
        let rng = &mut self.rng;
        let rain = self.matrix.get_or_insert_with(|| {
            log::debug!("[matrix] building columns for {}x{}", w, h);
            MatrixRain::new(w, h, glyph_px, &mut *rng)
        });
        rain.render(surface, &self.anchors, &self.cfg, rng);
    }
}
