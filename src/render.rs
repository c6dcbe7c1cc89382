use crate::constants::DOT_CLASS;
use crate::core::{transform_css, Dot};
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the dot field: one absolutely positioned element per dot,
/// children of the page's dot container.
pub struct DotLayer {
    document: web::Document,
    container: web::Element,
    elements: Vec<web::HtmlElement>,
}

impl DotLayer {
    pub fn new(document: &web::Document, container_id: &str) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
        Ok(Self {
            document: document.clone(),
            container,
            elements: Vec::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Drop every existing element and create one per dot.
    pub fn rebuild(&mut self, dots: &[Dot], scroll_y: f64) -> anyhow::Result<()> {
        self.container.set_inner_html("");
        self.elements.clear();
        for dot in dots {
            let el = self
                .document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = el.class_list().add_2(DOT_CLASS, dot.size.css_class());
            set_transform(&el, dot, scroll_y);
            self.container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            self.elements.push(el);
        }
        Ok(())
    }

    /// Write current positions. Elements and dots are paired by index.
    pub fn apply(&self, dots: &[Dot], scroll_y: f64) {
        for (el, dot) in self.elements.iter().zip(dots) {
            set_transform(el, dot, scroll_y);
        }
    }
}

#[inline]
fn set_transform(el: &web::HtmlElement, dot: &Dot, scroll_y: f64) {
    _ = el
        .style()
        .set_property("transform", &transform_css(dot, scroll_y));
}
