use crate::core::DotField;
use crate::dom;
use crate::render::DotLayer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<DotField>>,
    pub layer: Rc<RefCell<DotLayer>>,
}

impl FrameContext {
    /// One animation step. The dot set is looked up afresh every frame, so a
    /// relayout between frames is picked up here without any handoff.
    pub fn frame(&mut self) {
        let scroll_y = dom::scroll_y();
        let mut field = self.field.borrow_mut();
        if !field.step(scroll_y) {
            return;
        }
        let layer = self.layer.borrow();
        if layer.is_empty() {
            return;
        }
        layer.apply(field.dots(), scroll_y);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
