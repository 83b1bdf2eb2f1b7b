use crate::constants::{GLOBAL_HANDLE, SECTION_LINK_SELECTOR};
use crate::core::SceneSession;
use crate::dom::{self, DomHost};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Route in-page navigation links through the scene instead of the default jump.
pub fn wire_section_links(
    document: &web::Document,
    session: &Rc<RefCell<SceneSession>>,
    host: &DomHost,
) {
    let links = dom::fragment_links(document, SECTION_LINK_SELECTOR);
    log::info!("[nav] wiring {} section links", links.len());
    for (el, href) in links {
        let session = session.clone();
        let host = host.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            let mut host = host.clone();
            session.borrow_mut().navigate_to(&href, &mut host);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Publish `window.__sceneNav.navigateTo(sectionId)` for other page scripts.
pub fn publish_navigate_handle(
    window: &web::Window,
    session: &Rc<RefCell<SceneSession>>,
    host: &DomHost,
) -> Result<(), JsValue> {
    let session = session.clone();
    let host = host.clone();
    let navigate = Closure::wrap(Box::new(move |section_id: String| {
        let mut host = host.clone();
        // Re-entrant calls from inside a frame are dropped rather than panicking.
        match session.try_borrow_mut() {
            Ok(mut s) => {
                s.navigate_to(&section_id, &mut host);
            }
            Err(_) => log::warn!("[nav] busy, dropped {}", section_id),
        }
    }) as Box<dyn FnMut(String)>);

    let handle = js_sys::Object::new();
    js_sys::Reflect::set(&handle, &JsValue::from_str("navigateTo"), navigate.as_ref())?;
    js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_HANDLE), &handle)?;
    navigate.forget();
    Ok(())
}
