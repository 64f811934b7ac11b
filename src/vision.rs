use handfx_core::{FxError, Hand, HandDetector, Landmark};
use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// The page's hand landmark model; only `detectForVideo` is used.
    pub type HandLandmarker;

    #[wasm_bindgen(method, catch, js_name = detectForVideo)]
    fn detect_for_video(
        this: &HandLandmarker,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<JsValue, JsValue>;

    /// Resolves to `{ video, handLandmarker }` once the camera stream and the
    /// model are ready.
    #[wasm_bindgen(catch, js_namespace = window, js_name = getVisionStuff)]
    async fn get_vision_stuff() -> Result<JsValue, JsValue>;
}

/// Detector fed by the webcam `<video>` element.
pub struct VideoHandDetector {
    video: web::HtmlVideoElement,
    landmarker: HandLandmarker,
}

impl VideoHandDetector {
    pub async fn load() -> anyhow::Result<Self> {
        let stuff = get_vision_stuff()
            .await
            .map_err(|e| anyhow::anyhow!("getVisionStuff failed: {:?}", e))?;
        let video = Reflect::get(&stuff, &JsValue::from_str("video"))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlVideoElement>()
            .map_err(|e| anyhow::anyhow!("video is not a <video>: {:?}", e))?;
        let landmarker = Reflect::get(&stuff, &JsValue::from_str("handLandmarker"))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if landmarker.is_undefined() || landmarker.is_null() {
            anyhow::bail!("handLandmarker missing");
        }
        Ok(Self {
            video,
            landmarker: landmarker.unchecked_into(),
        })
    }
}

impl HandDetector for VideoHandDetector {
    fn ready(&self) -> bool {
        self.video.ready_state() >= web::HtmlMediaElement::HAVE_METADATA
    }

    fn detect(&mut self, timestamp_ms: f64) -> Result<Vec<Hand>, FxError> {
        let results = self
            .landmarker
            .detect_for_video(&self.video, timestamp_ms)
            .map_err(|e| FxError::DetectorUnavailable(format!("{:?}", e)))?;
        Ok(parse_hands(&results))
    }
}

/// `results.landmarks` as hands; malformed entries are skipped.
fn parse_hands(results: &JsValue) -> Vec<Hand> {
    let Ok(list) = Reflect::get(results, &JsValue::from_str("landmarks")) else {
        return Vec::new();
    };
    if !Array::is_array(&list) {
        return Vec::new();
    }
    let mut hands = Vec::new();
    for entry in Array::from(&list).iter() {
        let points: Vec<Landmark> = Array::from(&entry).iter().map(|p| landmark(&p)).collect();
        match Hand::from_landmarks(&points) {
            Ok(hand) => hands.push(hand),
            Err(e) => log::warn!("[vision] skipping hand: {}", e),
        }
    }
    hands
}

fn landmark(point: &JsValue) -> Landmark {
    let coord = |key: &str| {
        Reflect::get(point, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    };
    Landmark::new(coord("x"), coord("y"), coord("z"))
}
