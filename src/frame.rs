use crate::assets::ImageStore;
use crate::dom;
use crate::metrics;
use crate::surface::CanvasSurface;
use instant::Instant;
use scrollview_core::{
    Composer, DrawList, FrameInput, ProgressCell, Smoother, Viewport, ViewportManager,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// State owned by the render loop. One `frame()` call per display refresh.
pub struct FrameContext {
    pub smoother: Rc<RefCell<Smoother>>,
    /// Smoothed progress, republished each tick for outside readers.
    pub smoothed: ProgressCell,
    pub viewport: Rc<ViewportManager>,
    pub composer: Box<dyn Composer>,
    pub assets: Rc<ImageStore>,

    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<CanvasSurface>,
    pub draw_list: DrawList,

    pub last_instant: Option<Instant>,
    pub skip_reason: Option<&'static str>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = metrics::frame_dt(self.last_instant.map(|t| (now - t).as_secs_f32()));
        self.last_instant = Some(now);

        let (progress, velocity) = {
            let mut s = self.smoother.borrow_mut();
            s.tick(dt_sec);
            (s.value(), s.velocity())
        };
        self.smoothed.set(progress);

        let viewport = self.measure_viewport();
        if !viewport.valid {
            self.skip("invalid viewport");
            return;
        }
        if self.surface.is_none() {
            self.surface = CanvasSurface::acquire(&self.canvas);
        }
        let Some(surface) = &self.surface else {
            self.skip("surface unavailable");
            return;
        };
        if let Some(reason) = self.skip_reason.take() {
            log::info!("[frame] resumed after skipped ticks ({reason})");
        }

        self.draw_list.clear();
        let input = FrameInput::new(progress, velocity, viewport);
        self.composer
            .compose(&input, &*self.assets, &mut self.draw_list);
        if let Err(e) = surface.draw(&viewport, &self.draw_list, &self.assets) {
            log::warn!("[frame] draw error: {:?}", e);
        }
    }

    /// Re-measure the canvas each tick. Its box can change (or first get laid
    /// out) without a window resize event.
    fn measure_viewport(&self) -> Viewport {
        let current = self.viewport.current();
        let measured = dom::measure(&self.canvas);
        let stale = metrics::viewport_stale(
            current.valid,
            [current.width, current.height, current.device_pixel_ratio],
            [measured.width, measured.height, measured.device_pixel_ratio],
        );
        if stale {
            self.viewport.on_resize(measured)
        } else {
            current
        }
    }

    fn skip(&mut self, reason: &'static str) {
        if self.skip_reason.replace(reason) != Some(reason) {
            log::debug!("[frame] skipping ticks: {reason}");
        }
    }
}

/// Running requestAnimationFrame loop; [`LoopHandle::stop`] ends it.
pub struct LoopHandle {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // stop() may be reached from inside a tick (e.g. a progress subscriber),
        // so the closure is released on a later microtask rather than here.
        if let Some(closure) = self.tick.borrow_mut().take() {
            spawn_local(async move { drop(closure) });
        }
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: &Rc<Cell<Option<i32>>>,
) {
    let Some(w) = web::window() else { return };
    if let Some(closure) = tick.borrow().as_ref() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let frame_ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    let running_clone = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        if !running_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if running_clone.get() {
            request_frame(&tick_clone, &raf_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &raf_id);

    LoopHandle {
        tick,
        raf_id,
        running,
    }
}
