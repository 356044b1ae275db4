//! video.js playback engine using web-sys.
//!
//! Talks to the global `videojs` function injected by the video.js script
//! through direct JavaScript interop via the Reflect API.

use js_sys::{Function, Object, Reflect};
use torrentplay_core::{PlaybackEngine, PlayerConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlVideoElement;

use crate::core::error::EngineError;
use crate::utils::dom;

/// Get the global `videojs` function.
fn get_videojs() -> Result<Function, EngineError> {
    let window = dom::window().ok_or(EngineError::NoWindow)?;
    Reflect::get(&window, &"videojs".into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(EngineError::NotLoaded)
}

/// Convert a JS exception into a readable message.
fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// A live video.js player.
///
/// Keeps the ready callback alive for as long as the player exists.
pub struct VideoJsHandle {
    player: Object,
    _on_ready: Closure<dyn FnMut()>,
}

/// The video.js engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct VideoJs;

impl PlaybackEngine for VideoJs {
    type Surface = HtmlVideoElement;
    type Handle = VideoJsHandle;
    type Error = EngineError;

    fn create(
        &self,
        surface: &HtmlVideoElement,
        config: &PlayerConfig,
    ) -> Result<VideoJsHandle, EngineError> {
        let videojs = get_videojs()?;

        let options = serde_wasm_bindgen::to_value(config)
            .map_err(|e| EngineError::InvalidOptions(e.to_string()))?;

        // Readiness is only reported, playback is left to video.js
        let on_ready = Closure::wrap(Box::new(|| {
            dom::log("Player ready");
        }) as Box<dyn FnMut()>);

        let player = videojs
            .call3(&JsValue::NULL, surface, &options, on_ready.as_ref())
            .map_err(|e| EngineError::InitFailed(js_error_message(&e)))?
            .dyn_into::<Object>()
            .map_err(|_| EngineError::InitFailed("videojs returned a non-object".to_string()))?;

        Ok(VideoJsHandle {
            player,
            _on_ready: on_ready,
        })
    }

    fn dispose(&self, handle: VideoJsHandle) {
        let result = Reflect::get(&handle.player, &"dispose".into())
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .map(|dispose| dispose.call0(&handle.player));

        match result {
            Some(Ok(_)) => dom::log("Player disposed"),
            Some(Err(e)) => dom::warn(&format!("Player dispose failed: {}", js_error_message(&e))),
            None => dom::warn("Player has no dispose method"),
        }
    }
}
