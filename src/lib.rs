#![cfg(target_arch = "wasm32")]
use scrollview_core::{
    build_composer, DrawList, EngineConfig, ProgressCell, Smoother, Subscription, ViewportManager,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod frame;
mod metrics;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scrollview-web starting");
    Ok(())
}

/// Everything torn down together when the composition goes away.
struct Mounted {
    raw: ProgressCell,
    smoothed: ProgressCell,
    smoother: Rc<RefCell<Smoother>>,
    _smoother_feed: Subscription,
    _listeners: Vec<dom::EventListener>,
    frame_loop: frame::LoopHandle,
}

fn mount(canvas_id: &str, config_json: Option<String>) -> anyhow::Result<Mounted> {
    let config = match config_json {
        Some(json) => EngineConfig::from_json(&json)?,
        None => EngineConfig::default(),
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    // Viewport: measure now, then on every resize
    let viewport = Rc::new(ViewportManager::new(config.responsive));
    viewport.on_resize(dom::measure(&canvas));
    let mut listeners = Vec::new();
    {
        let viewport = viewport.clone();
        let canvas = canvas.clone();
        listeners.push(dom::EventListener::new(
            &window,
            constants::RESIZE_EVENT,
            move || {
                viewport.on_resize(dom::measure(&canvas));
            },
        )?);
    }

    // Raw progress feeds the smoother's target
    let raw = ProgressCell::new(0.0);
    let smoother = Rc::new(RefCell::new(Smoother::new(config.smoother)));
    let smoother_feed = {
        let smoother = smoother.clone();
        raw.subscribe(move |p| smoother.borrow_mut().update(p))
    };
    if config.track_window_scroll {
        if let Some(p) = dom::window_progress(&window) {
            // restored scroll position: start there instead of animating from 0
            raw.set(p);
            smoother.borrow_mut().jump_to(p);
        }
        let raw = raw.clone();
        let win = window.clone();
        listeners.push(dom::EventListener::new(
            &window,
            constants::SCROLL_EVENT,
            move || {
                if let Some(p) = dom::window_progress(&win) {
                    raw.set(p);
                }
            },
        )?);
    }

    let composer = build_composer(&config);
    let assets = Rc::new(assets::ImageStore::load(composer.assets()));
    let smoothed = ProgressCell::new(smoother.borrow().value());
    log::info!(
        "[engine] strategy={} nodes={} viewport={:?}",
        composer.name(),
        config.nodes.len(),
        viewport.current()
    );

    let frame_loop = frame::start_loop(frame::FrameContext {
        smoother: smoother.clone(),
        smoothed: smoothed.clone(),
        viewport,
        composer,
        assets,
        canvas,
        surface: None,
        draw_list: DrawList::new(),
        last_instant: None,
        skip_reason: None,
    });

    Ok(Mounted {
        raw,
        smoothed,
        smoother,
        _smoother_feed: smoother_feed,
        _listeners: listeners,
        frame_loop,
    })
}

/// Handle held by the page for the lifetime of the composition.
#[wasm_bindgen]
pub struct ScrollEngine {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl ScrollEngine {
    /// Mount on `canvas_id` (default `#scrollview-canvas`) with an optional
    /// JSON configuration; omitted fields use the reference composition.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>, config_json: Option<String>) -> Result<ScrollEngine, JsValue> {
        let id = canvas_id.as_deref().unwrap_or(constants::DEFAULT_CANVAS_ID);
        match mount(id, config_json) {
            Ok(m) => Ok(ScrollEngine { inner: Some(m) }),
            Err(e) => {
                log::error!("[engine] mount error: {:#}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    /// Push a raw progress value (for hosts that drive progress themselves).
    #[wasm_bindgen(js_name = setProgress)]
    pub fn set_progress(&self, value: f32) {
        if let Some(m) = &self.inner {
            m.raw.set(value);
        }
    }

    /// Latest smoothed progress.
    pub fn progress(&self) -> f32 {
        self.inner.as_ref().map(|m| m.smoothed.get()).unwrap_or(0.0)
    }

    /// Smoothed velocity in progress units per second.
    pub fn velocity(&self) -> f32 {
        self.inner
            .as_ref()
            .and_then(|m| m.smoother.try_borrow().ok().map(|s| s.velocity()))
            .unwrap_or(0.0)
    }

    /// Call `callback(progress)` whenever the smoothed progress changes.
    pub fn subscribe(&self, callback: js_sys::Function) -> ProgressSubscription {
        let inner = self.inner.as_ref().map(|m| {
            m.smoothed.subscribe(move |p| {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_f64(p as f64)) {
                    log::warn!("[engine] progress subscriber threw: {:?}", e);
                }
            })
        });
        ProgressSubscription { inner }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    /// Stop drawing and detach every listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(m) = self.inner.take() {
            m.frame_loop.stop();
            log::info!("[engine] stopped");
        }
    }
}

impl Drop for ScrollEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

#[wasm_bindgen]
pub struct ProgressSubscription {
    inner: Option<Subscription>,
}

#[wasm_bindgen]
impl ProgressSubscription {
    pub fn unsubscribe(&mut self) {
        self.inner.take();
    }
}
