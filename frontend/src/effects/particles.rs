use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
}

/// Where a burst starts, as a fraction of the viewport. Unset axes use the
/// library default of 0.5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Origin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Options for one call into the particle library.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    pub spread: f64,
    pub origin: Origin,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

#[cfg_attr(test, mockall::automock)]
pub trait ParticleSink {
    fn fire(&self, burst: &Burst);
}

/// Calls `window.confetti` when the script is present, otherwise does nothing.
pub struct ConfettiSink {
    function: Option<Function>,
}

impl ConfettiSink {
    pub fn detect() -> Self {
        let function = web_sys::window()
            .and_then(|window| Reflect::get(&window, &JsValue::from_str("confetti")).ok())
            .and_then(|value| value.dyn_into::<Function>().ok());
        if function.is_none() {
            warn!("confetti is not loaded, celebrations will be silent");
        }
        Self { function }
    }
}

impl ParticleSink for ConfettiSink {
    fn fire(&self, burst: &Burst) {
        let Some(function) = &self.function else {
            return;
        };
        match serde_wasm_bindgen::to_value(burst) {
            Ok(options) => {
                if let Err(err) = function.call1(&JsValue::NULL, &options) {
                    debug!("confetti call failed: {:?}", err);
                }
            }
            Err(err) => warn!("could not encode burst options: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_serializes_with_library_field_names() {
        let burst = Burst {
            particle_count: 3,
            angle: Some(60.0),
            spread: 55.0,
            origin: Origin { x: Some(0.0), y: None },
            colors: vec!["#fff".to_string()],
            shapes: Vec::new(),
        };
        let json = serde_json::to_value(&burst).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "particleCount": 3,
                "angle": 60.0,
                "spread": 55.0,
                "origin": { "x": 0.0 },
                "colors": ["#fff"]
            })
        );
    }

    #[test]
    fn shapes_serialize_lowercase() {
        let json = serde_json::to_value(vec![Shape::Circle]).unwrap();
        assert_eq!(json, serde_json::json!(["circle"]));
    }
}
