use crate::core::DotField;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates; the frame loop reads it.
pub fn wire_pointermove(field: Rc<RefCell<DotField>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        field
            .borrow_mut()
            .set_mouse(ev.client_x() as f64, ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
