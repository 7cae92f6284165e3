use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Viewport aspect ratio of the canvas as laid out by CSS.
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    if rect.height() > 0.0 {
        (rect.width() / rect.height()) as f32
    } else {
        1.0
    }
}

/// Current document scroll position as (scroll_top, scroll_height, viewport_height).
pub fn scroll_metrics() -> Option<(f32, f32, f32)> {
    let window = web::window()?;
    let root = window.document()?.document_element()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    Some((
        root.scroll_top() as f32,
        root.scroll_height() as f32,
        viewport as f32,
    ))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Page origin, used to resolve public asset paths.
pub fn page_origin() -> Option<String> {
    web::window()?.location().origin().ok()
}
