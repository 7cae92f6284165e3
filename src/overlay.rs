use crate::constants::{HIDDEN_CLASS, LOADER_BAR_ID, LOADER_ID, LOADER_LABEL_ID};
use crate::dom;
use crate::style;
use std::cell::RefCell;
use web_sys as web;

thread_local! {
    static LOADER_LOCK: RefCell<Option<ScrollLock>> = const { RefCell::new(None) };
}

/// Hides the document overflow while alive and restores the previous value on drop.
pub struct ScrollLock {
    body: web::HtmlElement,
    previous: String,
}

impl ScrollLock {
    pub fn engage(document: &web::Document) -> Option<Self> {
        let body = document.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        _ = style.set_property("overflow", "hidden");
        Some(Self { body, previous })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        if self.previous.is_empty() {
            _ = style.remove_property("overflow");
        } else {
            _ = style.set_property("overflow", &self.previous);
        }
    }
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show the loader and lock page scrolling until loading completes.
pub fn begin_loading(document: &web::Document) {
    show(document);
    set_progress_text(document, 0.0);
    let lock = ScrollLock::engage(document);
    LOADER_LOCK.with(|slot| *slot.borrow_mut() = lock);
}

/// Report asset loading progress in percent; 100 or more dismisses the loader.
pub fn set_progress(document: &web::Document, percent: f32) {
    set_progress_text(document, percent);
    if percent >= 100.0 {
        hide(document);
        let released = LOADER_LOCK.with(|slot| slot.borrow_mut().take());
        if released.is_some() {
            log::info!("[assets] loading complete, scroll unlocked");
        }
    }
}

fn set_progress_text(document: &web::Document, percent: f32) {
    if let Some(bar) = dom::html_element_by_id(document, LOADER_BAR_ID) {
        dom::set_style(&bar, "width", &style::loader_bar_width(percent));
    }
    if let Some(label) = document.get_element_by_id(LOADER_LABEL_ID) {
        label.set_text_content(Some(&style::loader_label(percent)));
    }
}
