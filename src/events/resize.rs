use crate::core::DotField;
use crate::dom;
use crate::render::DotLayer;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct LayoutWiring {
    pub field: Rc<RefCell<DotField>>,
    pub layer: Rc<RefCell<DotLayer>>,
    pub rng: Rc<RefCell<StdRng>>,
}

impl LayoutWiring {
    /// Recompute boundaries, replace the dot set and rebuild its elements.
    pub fn relayout(&self) -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let metrics = dom::read_page_metrics(&window, &document);

        let mut field = self.field.borrow_mut();
        field.relayout(&metrics, &mut *self.rng.borrow_mut());
        let mut layer = self.layer.borrow_mut();
        layer.rebuild(field.dots(), dom::scroll_y())?;
        log::debug!("[layout] epoch={} elements={}", field.epoch(), layer.len());
        Ok(())
    }
}

pub fn wire_resize(w: LayoutWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Err(e) = w.relayout() {
            log::error!("relayout error: {:?}", e);
        }
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
