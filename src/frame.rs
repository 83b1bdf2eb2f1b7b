use crate::core::{LabelAtlas, SceneSession};
use crate::dom::DomHost;
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<SceneSession>>,
    pub host: DomHost,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let outcome = self.session.borrow_mut().step(dt_sec, &mut self.host);
        if !outcome.render {
            return;
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            if w == 0 || h == 0 {
                return;
            }
            g.resize_if_needed(w, h);
            let session = self.session.borrow();
            if let Err(e) = g.render(&session) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Forget the time spent paused so the first frame back is a normal one.
    pub fn reset_clock(&mut self) {
        self.last_instant = Instant::now();
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    session: &Rc<RefCell<SceneSession>>,
    labels: &LabelAtlas,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let result = {
        let s = session.borrow();
        render::GpuState::new(leaked_canvas, s.registry(), labels).await
    };
    match result {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// `requestAnimationFrame` driver for a [`FrameContext`].
///
/// Stops rescheduling while the session is hidden; [`resume`](Self::resume)
/// restarts the chain.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext<'static>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    scheduled: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext<'static>>>) -> Self {
        let frame_loop = Self {
            ctx,
            tick: Rc::new(RefCell::new(None)),
            scheduled: Rc::new(Cell::new(false)),
        };
        let handle = frame_loop.clone();
        *frame_loop.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle.scheduled.set(false);
            let visible = handle.ctx.borrow().session.borrow().is_visible();
            if !visible {
                log::debug!("[frame] hidden, loop paused");
                return;
            }
            handle.ctx.borrow_mut().frame();
            handle.schedule();
        }) as Box<dyn FnMut()>));
        frame_loop.schedule();
        frame_loop
    }

    pub fn resume(&self) {
        if self.scheduled.get() {
            return;
        }
        if let Ok(mut ctx) = self.ctx.try_borrow_mut() {
            ctx.reset_clock();
        }
        self.schedule();
    }

    fn schedule(&self) {
        if self.scheduled.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            if w.request_animation_frame(tick.as_ref().unchecked_ref()).is_ok() {
                self.scheduled.set(true);
            }
        }
    }
}
