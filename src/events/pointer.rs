use crate::core::SceneSession;
use crate::dom::{self, DomHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<SceneSession>>,
    pub host: DomHost,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerleave(&w);
}

// Listen on the window so parallax keeps tracking over overlapping page content.
fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = dom::canvas_rect(&w.canvas);
        w.session.borrow_mut().on_pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            rect,
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Refresh the position first; touch input has no hover moves before the tap.
        let rect = dom::canvas_rect(&w.canvas);
        let mut session = w.session.borrow_mut();
        session.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32, rect);
        let mut host = w.host.clone();
        if let Some(id) = session.on_pointer_down(&mut host) {
            log::debug!("[mouse] activated {}", id);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerleave(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.session.borrow_mut().on_pointer_leave();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
