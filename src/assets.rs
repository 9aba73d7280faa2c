use fnv::FnvHashMap;
use scrollview_core::{AssetId, AssetSource, ImageSize};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Slot {
    element: web::HtmlImageElement,
    ready: Rc<Cell<bool>>,
}

/// Browser-decoded images keyed by [`AssetId`].
///
/// Loading happens off the render path: each image decodes in its own
/// future and flips a ready flag. The render loop only polls that flag.
/// Failed loads stay "not ready" forever; there is no retry.
#[derive(Default)]
pub struct ImageStore {
    slots: FnvHashMap<AssetId, Slot>,
}

impl ImageStore {
    pub fn load(assets: Vec<(AssetId, String)>) -> Self {
        let mut slots = FnvHashMap::default();
        for (id, url) in assets {
            let element = match web::HtmlImageElement::new() {
                Ok(el) => el,
                Err(e) => {
                    log::error!("[assets] HtmlImageElement error: {:?}", e);
                    continue;
                }
            };
            element.set_src(&url);
            let ready = Rc::new(Cell::new(false));
            let ready_flag = ready.clone();
            let decode = element.decode();
            spawn_local(async move {
                match JsFuture::from(decode).await {
                    Ok(_) => {
                        ready_flag.set(true);
                        log::debug!("[assets] ready {url}");
                    }
                    Err(e) => log::warn!("[assets] failed to load {url}: {:?}", e),
                }
            });
            slots.insert(id, Slot { element, ready });
        }
        log::info!("[assets] loading {} image(s)", slots.len());
        Self { slots }
    }

    /// The element for `id`, only once it is decoded.
    pub fn element(&self, id: AssetId) -> Option<&web::HtmlImageElement> {
        self.slots
            .get(&id)
            .filter(|slot| slot.ready.get())
            .map(|slot| &slot.element)
    }
}

impl AssetSource for ImageStore {
    fn image(&self, id: AssetId) -> Option<ImageSize> {
        let el = self.element(id)?;
        let (w, h) = (el.natural_width(), el.natural_height());
        (w > 0 && h > 0).then(|| ImageSize {
            width: w as f32,
            height: h as f32,
        })
    }
}
