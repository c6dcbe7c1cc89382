use crate::constants::{END_ANCHOR_ID, START_ANCHOR_ID};
use crate::core::{AnchorBox, PageMetrics};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn anchor_box(document: &web::Document, element_id: &str) -> Option<AnchorBox> {
    let el = document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    Some(AnchorBox {
        top: el.offset_top() as f64,
        height: el.offset_height() as f64,
    })
}

/// Snapshot the geometry the boundary calculation needs.
pub fn read_page_metrics(window: &web::Window, document: &web::Document) -> PageMetrics {
    let start_anchor = anchor_box(document, START_ANCHOR_ID);
    let end_anchor = anchor_box(document, END_ANCHOR_ID);
    if start_anchor.is_none() || end_anchor.is_none() {
        log::warn!(
            "[layout] missing #{} or #{}, using whole document height",
            START_ANCHOR_ID,
            END_ANCHOR_ID
        );
    }
    PageMetrics {
        viewport_width: viewport_width(window),
        document_height: document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0),
        start_anchor,
        end_anchor,
    }
}
