use crate::constants::ACTIONABLE_CLASS;
use crate::core::{SceneHost, SurfaceRect, ViewportSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> SurfaceRect {
    let rect = canvas.get_bounding_client_rect();
    SurfaceRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Size of the element the canvas fills, falling back to the canvas itself.
pub fn read_viewport(canvas: &web::HtmlCanvasElement) -> Option<ViewportSize> {
    let window = web::window()?;
    let (w, h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width(), parent.client_height()),
        None => (canvas.client_width(), canvas.client_height()),
    };
    Some(ViewportSize {
        css_width: w as f32,
        css_height: h as f32,
        device_pixel_ratio: window.device_pixel_ratio() as f32,
    })
}

/// Document-backed [`SceneHost`]: smooth scrolling plus the canvas cursor class.
#[derive(Clone)]
pub struct DomHost {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
}

impl DomHost {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement) -> Self {
        Self { document, canvas }
    }
}

impl SceneHost for DomHost {
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        match self.document.query_selector(selector) {
            Ok(Some(el)) => {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::warn!("[nav] bad selector {}: {:?}", selector, e);
                false
            }
        }
    }

    fn set_pointer_actionable(&mut self, actionable: bool) {
        _ = self
            .canvas
            .class_list()
            .toggle_with_force(ACTIONABLE_CLASS, actionable);
    }
}

/// Anchor elements matching `selector` whose `href` is an in-page fragment.
pub fn fragment_links(document: &web::Document, selector: &str) -> Vec<(web::Element, String)> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .filter_map(|el| {
            let href = el.get_attribute("href")?;
            (href.starts_with('#') && href.len() > 1).then_some((el, href))
        })
        .collect()
}
