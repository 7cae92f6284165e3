use crate::bridge;
use crate::constants::{MAX_FRAME_DT_SEC, TRANSFORM_EPSILON_PX};
use crate::dom;
use crate::reveal::{self, RevealObserver, RevealSlots};
use crate::style;
use instant::Instant;
use site_core::{
    Camera, CountUp, InfiniteCarousel, Lens, Marquee, ModelPlacement, PathAnimator,
    ProgressFollower, ProgressSource, ScrollProgress, Section,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A translated element plus the last offset written to it.
pub struct Track {
    pub element: web::HtmlElement,
    pub last_px: Option<f32>,
}

impl Track {
    pub fn new(element: web::HtmlElement) -> Self {
        Self {
            element,
            last_px: None,
        }
    }

    fn write(&mut self, px: f32) {
        if let Some(prev) = self.last_px {
            if (prev - px).abs() < TRANSFORM_EPSILON_PX {
                return;
            }
        }
        dom::set_style(&self.element, "transform", &style::translate_x(px));
        self.last_px = Some(px);
    }
}

pub struct StatCounter {
    pub counter: CountUp,
    pub element: Option<web::HtmlElement>,
    pub shown: Option<u32>,
}

pub struct FrameContext {
    pub carousel: Rc<RefCell<InfiniteCarousel>>,
    pub features: Track,

    pub marquee: Option<(Marquee, Track)>,
    pub counters: Vec<StatCounter>,
    pub reveals: RevealSlots,
    // held so the observer stays connected
    pub _reveal_observer: Option<RevealObserver>,

    pub scroll: Rc<Cell<ScrollProgress>>,
    pub follower: ProgressFollower,
    pub path: PathAnimator,
    pub lens: Lens,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub placements: Vec<ModelPlacement>,
    pub section: Option<Section>,

    pub elapsed_sec: f32,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.elapsed_sec += dt_sec;

        // Carousel: auto-play is suspended by the carousel itself while dragging
        let offset = {
            let mut carousel = self.carousel.borrow_mut();
            carousel.tick(dt_sec);
            carousel.offset()
        };
        self.features.write(offset);

        if let Some((marquee, track)) = &mut self.marquee {
            marquee.tick(dt_sec);
            track.write(marquee.offset());
        }

        if reveal::step(&self.reveals, dt_sec) {
            log::info!("[reveal] numbers in view, starting counters");
            for c in &mut self.counters {
                c.counter.trigger();
            }
        }
        self.step_counters(dt_sec);
        self.step_camera(dt_sec);
    }

    fn step_counters(&mut self, dt_sec: f32) {
        for c in &mut self.counters {
            if !c.counter.is_triggered() {
                continue;
            }
            c.counter.tick(dt_sec);
            let value = c.counter.value();
            if c.shown == Some(value) {
                continue;
            }
            c.shown = Some(value);
            if let Some(el) = &c.element {
                el.set_text_content(Some(&c.counter.display()));
            }
        }
    }

    fn step_camera(&mut self, dt_sec: f32) {
        let target = self.scroll.get().progress();
        let section = Section::at(target);
        if self.section != Some(section) {
            log::info!("[scroll] section {:?} ({})", section, section.element_id());
            self.section = Some(section);
        }

        let progress = self.follower.follow(target, dt_sec);
        let pose = self.path.pose_at(progress);
        let aspect = self
            .canvas
            .as_ref()
            .map(dom::canvas_aspect)
            .unwrap_or(1.0);
        let camera = Camera::from_pose(&pose, aspect, &self.lens);
        bridge::publish_camera(pose, camera.uniform());

        let elapsed = self.elapsed_sec;
        bridge::publish_models(self.placements.iter().map(|p| p.transform_at(elapsed)));
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
