use crate::constants::*;
use crate::dom;
use handfx_core::{FrameStats, SystemStatus};
use web_sys as web;

pub fn write_stats(document: &web::Document, stats: &FrameStats) {
    dom::set_text(document, HANDS_COUNT_ID, &stats.hands.to_string());
    dom::set_text(document, PARTICLE_COUNT_ID, &stats.particles.to_string());
    dom::set_text(document, CONFIDENCE_ID, &stats.confidence_percent());
    dom::set_text(document, CURRENT_GESTURE_ID, &stats.gesture);
}

/// Called once per closed fps window.
pub fn write_fps(document: &web::Document, fps: u32) {
    dom::set_text(document, FPS_COUNTER_ID, &fps.to_string());
    let status = SystemStatus::from_fps(fps);
    if let Some(el) = document.get_element_by_id(SYSTEM_STATUS_ID) {
        el.set_text_content(Some(status.label()));
        // the indicator dot sits right before the status text
        if let Some(dot) = el.previous_element_sibling() {
            dot.set_class_name(status.indicator_class());
        }
    }
}
