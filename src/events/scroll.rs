use crate::constants::CARDS_VISIBLE;
use crate::dom;
use crate::style;
use site_core::{InfiniteCarousel, ScrollProgress};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mirror the document scroll position into `progress` on every scroll event.
pub fn wire_scroll_progress(progress: Rc<Cell<ScrollProgress>>) {
    let sample = move || {
        if let Some((top, height, viewport)) = dom::scroll_metrics() {
            progress.set(ScrollProgress::from_scroll(top, height, viewport));
        }
    };
    sample();
    dom::add_window_listener("scroll", sample);
}

/// Size the carousel slides to the viewport and report the rendered strip width.
pub fn layout_carousel(
    viewport: &web::HtmlElement,
    strip: &web::HtmlElement,
    carousel: &RefCell<InfiniteCarousel>,
) {
    let slide_px = viewport.offset_width() as f32 / CARDS_VISIBLE;
    let children = strip.children();
    for i in 0..children.length() {
        if let Some(slide) = children
            .item(i)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            dom::set_style(&slide, "min-width", &style::slide_min_width(slide_px));
        }
    }
    // scroll_width forces layout with the widths just written
    let total = strip.scroll_width() as f32;
    let mut carousel = carousel.borrow_mut();
    carousel.measure(total);
    log::info!(
        "[carousel] measured strip={:.0}px slide={:.1}px offset={:.1}px",
        total,
        carousel.slide_width(),
        carousel.offset()
    );
}

pub fn wire_carousel_resize(
    viewport: web::HtmlElement,
    strip: web::HtmlElement,
    carousel: Rc<RefCell<InfiniteCarousel>>,
) {
    layout_carousel(&viewport, &strip, &carousel);
    dom::add_window_listener("resize", move || {
        layout_carousel(&viewport, &strip, &carousel);
    });
}
