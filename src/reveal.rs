use crate::constants::{NUMBERS_SECTION_ID, REVEAL_ATTR, REVEAL_INDEX_ATTR};
use crate::style;
use site_core::{RevealTransition, RevealTrigger};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// One element that fades in the first time it scrolls into view.
pub struct RevealSlot {
    pub element: web::HtmlElement,
    pub trigger: RevealTrigger,
    pub transition: RevealTransition,
    /// Seconds since the trigger fired; `None` until then.
    pub since: Option<f32>,
    pub settled: bool,
    pub starts_counters: bool,
}

pub type RevealSlots = Rc<RefCell<Vec<RevealSlot>>>;

/// Owns the IntersectionObserver and its callback; disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Collect every `[data-reveal]` element with a recognised transition.
pub fn collect_slots(document: &web::Document, threshold: f32) -> Vec<RevealSlot> {
    let mut slots = Vec::new();
    let selector = format!("[{}]", REVEAL_ATTR);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return slots;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let value = element.get_attribute(REVEAL_ATTR).unwrap_or_default();
        let Some(transition) = style::parse_reveal(&value) else {
            log::warn!("[reveal] unknown transition '{}'", value);
            continue;
        };
        _ = element.set_attribute(REVEAL_INDEX_ATTR, &slots.len().to_string());
        _ = element.set_attribute("style", &style::reveal_style(&transition.sample(None)));
        slots.push(RevealSlot {
            starts_counters: element.id() == NUMBERS_SECTION_ID,
            element,
            trigger: RevealTrigger::new(threshold),
            transition,
            since: None,
            settled: false,
        });
    }
    log::info!("[reveal] observing {} elements", slots.len());
    slots
}

pub fn observe(slots: &RevealSlots, threshold: f32) -> anyhow::Result<RevealObserver> {
    let slots_cb = slots.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let mut slots = slots_cb.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let index = entry
                    .target()
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|s| s.parse::<usize>().ok());
                if let Some(slot) = index.and_then(|i| slots.get_mut(i)) {
                    slot.trigger.observe(entry.intersection_ratio() as f32);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold as f64));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for slot in slots.borrow().iter() {
        observer.observe(&slot.element);
    }
    Ok(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Advance triggered slots and write their styles. Returns true when a slot
/// that starts the stat counters fired this frame.
pub fn step(slots: &RevealSlots, dt_sec: f32) -> bool {
    let mut counters_fired = false;
    for slot in slots.borrow_mut().iter_mut() {
        if slot.settled || !slot.trigger.is_revealed() {
            continue;
        }
        let since = match slot.since {
            Some(t) => t + dt_sec,
            None => {
                counters_fired |= slot.starts_counters;
                0.0
            }
        };
        slot.since = Some(since);
        let frame = slot.transition.sample(Some(since));
        _ = slot
            .element
            .set_attribute("style", &style::reveal_style(&frame));
        if since >= slot.transition.total_sec() {
            slot.settled = true;
        }
    }
    counters_fired
}
