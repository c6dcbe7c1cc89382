#![cfg(target_arch = "wasm32")]
use crate::core::{DotField, FieldParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("margin-dots starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let layer = Rc::new(RefCell::new(render::DotLayer::new(
        &document,
        constants::DOT_CONTAINER_ID,
    )?));
    let field = Rc::new(RefCell::new(DotField::new(FieldParams::default())));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let layout = events::LayoutWiring {
        field: field.clone(),
        layer: layer.clone(),
        rng,
    };
    // First layout runs before any frame so the loop starts on a valid set
    layout.relayout()?;
    {
        let f = field.borrow();
        log::info!(
            "[init] dots={} margins={}",
            f.dots().len(),
            f.region().has_margins()
        );
    }

    events::wire_resize(layout);
    events::wire_pointermove(field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, layer }));
    frame::start_loop(frame_ctx);
    Ok(())
}
