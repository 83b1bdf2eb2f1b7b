use crate::constants::DEFERRED_RESIZE_MS;
use crate::core::{ResizeOutcome, SceneSession};
use crate::dom;
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its container. The GPU surface picks up
/// the new size on the next rendered frame.
pub fn resize_to_container(canvas: &web::HtmlCanvasElement, session: &Rc<RefCell<SceneSession>>) {
    let Some(viewport) = dom::read_viewport(canvas) else {
        return;
    };
    match session.borrow_mut().on_resize(viewport) {
        ResizeOutcome::Resized(size) => {
            canvas.set_width(size.width);
            canvas.set_height(size.height);
        }
        ResizeOutcome::Collapsed => log::debug!("[resize] container collapsed"),
        ResizeOutcome::Unchanged => {}
    }
}

pub fn wire_resize(canvas: &web::HtmlCanvasElement, session: &Rc<RefCell<SceneSession>>) {
    let Some(window) = web::window() else {
        return;
    };

    let canvas_resize = canvas.clone();
    let session_resize = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        resize_to_container(&canvas_resize, &session_resize);
    }) as Box<dyn FnMut()>);
    for event in ["resize", "load"] {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();

    let canvas_later = canvas.clone();
    let session_later = session.clone();
    let deferred = Closure::once_into_js(move || {
        resize_to_container(&canvas_later, &session_later);
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        deferred.unchecked_ref(),
        DEFERRED_RESIZE_MS,
    );
}

/// Pause the frame loop while the document is hidden; resume on return.
pub fn wire_visibility(
    document: &web::Document,
    session: Rc<RefCell<SceneSession>>,
    frame_loop: FrameLoop,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let visible = !doc.hidden();
        let changed = session.borrow_mut().set_visible(visible);
        if changed {
            log::info!("[frame] visible={}", visible);
            if visible {
                frame_loop.resume();
            }
        }
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
