use site_core::{InfiniteCarousel, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct DragWiring {
    pub strip: web::HtmlElement,
    pub carousel: Rc<RefCell<InfiniteCarousel>>,
    pub tracker: Rc<RefCell<PointerTracker>>,
}

pub fn wire_drag_handlers(w: DragWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    for event in ["pointerup", "pointercancel"] {
        wire_pointer_release(&w, event);
    }
}

fn add_listener(target: &web::HtmlElement, event: &str, closure: Closure<dyn FnMut(web::PointerEvent)>) {
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &DragWiring) {
    let w = w.clone();
    let strip = w.strip.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        if w.tracker
            .borrow_mut()
            .begin(ev.pointer_id(), ev.client_x() as f32)
        {
            _ = w.strip.set_pointer_capture(ev.pointer_id());
            w.carousel.borrow_mut().on_drag_start();
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&strip, "pointerdown", closure);
}

fn wire_pointermove(w: &DragWiring) {
    let w = w.clone();
    let strip = w.strip.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let delta = w
            .tracker
            .borrow_mut()
            .update(ev.pointer_id(), ev.client_x() as f32);
        if let Some(dx) = delta {
            w.carousel.borrow_mut().on_drag_move(dx);
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&strip, "pointermove", closure);
}

fn wire_pointer_release(w: &DragWiring, event: &str) {
    let w = w.clone();
    let strip = w.strip.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.tracker.borrow_mut().end(ev.pointer_id()) {
            _ = w.strip.release_pointer_capture(ev.pointer_id());
            let mut carousel = w.carousel.borrow_mut();
            carousel.on_drag_end();
            log::debug!("[carousel] drag released at {:.1}px", carousel.offset());
        }
    }) as Box<dyn FnMut(_)>);
    add_listener(&strip, event, closure);
}
