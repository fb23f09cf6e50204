use crate::config::BackdropConfig;
use crate::constants::*;
use crate::dom;
use crate::scene::{self, Entity, Scene, ShapeKind};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "particleCanvas";

/// Canvas, entity set and frame timing for the page background.
pub struct Animator {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    scene: Scene,
    pointer: Option<Vec2>,
    last_instant: Instant,
    running: bool,
    raf_handle: Option<i32>,
}

impl Animator {
    /// `None` when the page has no usable `#particleCanvas`.
    pub fn new(document: &web::Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id(CANVAS_ID)?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            _ => {
                log::warn!("[backdrop] no 2d context on #{}", CANVAS_ID);
                return None;
            }
        };
        let config = BackdropConfig::from_attributes(
            canvas.get_attribute("data-style").as_deref(),
            canvas.get_attribute("data-edge").as_deref(),
        );
        log::info!("[backdrop] style={:?} edge={:?}", config.style, config.edge);
        Some(Self {
            canvas,
            ctx,
            scene: Scene::new(config, StdRng::from_entropy()),
            pointer: None,
            last_instant: Instant::now(),
            running: false,
            raf_handle: None,
        })
    }

    pub fn resize(&mut self) {
        let (w, h) = dom::viewport_size();
        dom::sync_canvas_backing_size(&self.canvas, w, h);
        self.scene.resize(w, h);
        log::debug!(
            "[backdrop] resized to {:.0}x{:.0}, {} entities",
            w,
            h,
            self.scene.entities.len()
        );
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let frames = scene::frames_for(dt.as_secs_f32());

        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        if self.scene.config.draw_grid {
            draw_grid(&self.ctx, w, h);
        }

        self.scene.step(frames, self.pointer);
        for e in &self.scene.entities {
            draw_entity(&self.ctx, e);
        }
        if let Some(max_d) = self.scene.config.link_distance {
            draw_links(&self.ctx, &self.scene.entities, max_d);
        }
    }
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha)
}

fn draw_grid(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_stroke_style_str(&rgba(ACCENT_RGB, GRID_ALPHA as f32));
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let mut x = 0.0;
    while x < w {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        x += GRID_SIZE;
    }
    let mut y = 0.0;
    while y < h {
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        y += GRID_SIZE;
    }
    ctx.stroke();
}

fn draw_entity(ctx: &web::CanvasRenderingContext2d, e: &Entity) {
    let color = rgba(e.tint.rgb(), e.opacity);
    let (x, y) = (e.pos.x as f64, e.pos.y as f64);
    match e.kind {
        ShapeKind::Circle => {
            ctx.begin_path();
            _ = ctx.arc(x, y, (e.size * e.pulse_scale()) as f64, 0.0, TAU);
            ctx.set_fill_style_str(&color);
            ctx.fill();
        }
        kind => {
            ctx.save();
            _ = ctx.translate(x, y);
            _ = ctx.rotate(e.rotation as f64);
            ctx.set_stroke_style_str(&color);
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, p) in kind.outline(e.size).iter().enumerate() {
                if i == 0 {
                    ctx.move_to(p.x as f64, p.y as f64);
                } else {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
            }
            ctx.close_path();
            ctx.stroke();
            ctx.restore();
        }
    }
}

fn draw_links(ctx: &web::CanvasRenderingContext2d, entities: &[Entity], max_distance: f32) {
    ctx.set_line_width(1.0);
    scene::for_each_link(entities, max_distance, |a, b, alpha| {
        ctx.set_stroke_style_str(&rgba(ACCENT_RGB, alpha));
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    });
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start/stop handle around a shared [`Animator`] and its RAF callback.
#[derive(Clone)]
pub struct Backdrop {
    animator: Rc<RefCell<Animator>>,
    tick: Tick,
}

impl Backdrop {
    pub fn new(animator: Animator) -> Self {
        let animator = Rc::new(RefCell::new(animator));
        let tick: Tick = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let animator_tick = animator.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut a = animator_tick.borrow_mut();
            a.raf_handle = None;
            if !a.running {
                return;
            }
            a.frame();
            a.raf_handle = request_frame(&tick_clone);
        }) as Box<dyn FnMut()>));
        Self { animator, tick }
    }

    pub fn start(&self) {
        let mut a = self.animator.borrow_mut();
        if a.running {
            return;
        }
        a.running = true;
        // no catch-up burst after a pause
        a.last_instant = Instant::now();
        a.raf_handle = request_frame(&self.tick);
    }

    pub fn stop(&self) {
        let mut a = self.animator.borrow_mut();
        a.running = false;
        if let (Some(w), Some(h)) = (web::window(), a.raf_handle.take()) {
            _ = w.cancel_animation_frame(h);
        }
    }

    pub fn resize(&self) {
        self.animator.borrow_mut().resize();
    }

    fn set_pointer(&self, pointer: Option<Vec2>) {
        self.animator.borrow_mut().pointer = pointer;
    }

    fn tracks_pointer(&self) -> bool {
        self.animator.borrow().scene.config.pointer_radius.is_some()
    }
}

fn request_frame(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Build the backdrop, size it, wire resize/visibility/pointer and start it.
pub fn install(document: &web::Document) -> Option<Backdrop> {
    let Some(animator) = Animator::new(document) else {
        log::info!("[backdrop] #{} not found, background disabled", CANVAS_ID);
        return None;
    };
    let backdrop = Backdrop::new(animator);
    backdrop.resize();
    let window = web::window()?;

    let pending: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let on_resize = backdrop.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        dom::clear_timeout(pending.borrow_mut().take());
        let bd = on_resize.clone();
        let pending_inner = pending.clone();
        *pending.borrow_mut() = dom::set_timeout(RESIZE_DEBOUNCE_MS, move || {
            pending_inner.borrow_mut().take();
            bd.resize();
        });
    });

    let on_visibility = backdrop.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            on_visibility.stop();
        } else {
            on_visibility.start();
        }
    });

    if backdrop.tracks_pointer() {
        let on_move = backdrop.clone();
        dom::listen(&window, "mousemove", move |ev: web::MouseEvent| {
            on_move.set_pointer(Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32)));
        });
        if let Some(root) = document.document_element() {
            let on_leave = backdrop.clone();
            dom::listen(&root, "mouseleave", move |_: web::MouseEvent| {
                on_leave.set_pointer(None);
            });
        }
    }

    if !document.hidden() {
        backdrop.start();
    }
    Some(backdrop)
}
