use crate::metrics;
use scrollview_core::ResizeEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not a canvas: {:?}", e))
}

/// Logical size of the canvas plus the window DPR.
///
/// A detached or hidden canvas measures 0×0, which the viewport manager
/// turns into an invalid viewport.
pub fn measure(canvas: &web::HtmlCanvasElement) -> ResizeEvent {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    ResizeEvent::new(rect.width() as f32, rect.height() as f32, dpr as f32)
}

/// Match the canvas backing store to the viewport; no-op when already sized.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: u32, height: u32) {
    if canvas.width() != width {
        canvas.set_width(width.max(1));
    }
    if canvas.height() != height {
        canvas.set_height(height.max(1));
    }
}

/// Window scroll position as progress through the page.
pub fn window_progress(window: &web::Window) -> Option<f32> {
    let scroll_y = window.scroll_y().ok()?;
    let inner_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(metrics::scroll_fraction(scroll_y, scroll_height, inner_height))
}

/// DOM listener that is removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add `{event}` listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        log::debug!("[dom] removed `{}` listener", self.event);
    }
}
