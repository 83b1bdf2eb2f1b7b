pub mod core;

#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::CANVAS_ID;
    use crate::core::{LabelAtlas, SceneConfig, SceneSession};
    use crate::{dom, events, frame, render};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("scene-nav starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        // Pages without the scene canvas simply keep their normal links.
        let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
            log::info!("[init] no #{} on this page, scene disabled", CANVAS_ID);
            return Ok(());
        };
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let session = SceneSession::new(&SceneConfig::default())?;
        let session = Rc::new(RefCell::new(session));
        let host = dom::DomHost::new(document.clone(), canvas.clone());

        events::resize_to_container(&canvas, &session);

        // Labels are optional.
        let rasterized = render::rasterize_labels(&document, session.borrow().registry());
        let atlas = rasterized.unwrap_or_else(|e| {
            log::warn!("[labels] rasterize failed, continuing without labels: {:?}", e);
            LabelAtlas::blank()
        });
        let gpu = frame::init_gpu(&canvas, &session, &atlas).await;

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            session: session.clone(),
            host: host.clone(),
            canvas: canvas.clone(),
            gpu,
            last_instant: Instant::now(),
        }));
        let frame_loop = frame::FrameLoop::start(frame_ctx);

        events::wire_pointer_handlers(events::PointerWiring {
            canvas: canvas.clone(),
            session: session.clone(),
            host: host.clone(),
        });
        events::wire_resize(&canvas, &session);
        events::wire_visibility(&document, session.clone(), frame_loop);
        events::wire_section_links(&document, &session, &host);
        events::publish_navigate_handle(&window, &session, &host)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        Ok(())
    }
}
