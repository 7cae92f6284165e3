#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use instant::Instant;
use site_core::{
    content, scene, InfiniteCarousel, Marquee, PointerTracker, ProgressFollower, ScrollProgress,
    SiteConfig,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bridge;
mod cards;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod reveal;
mod style;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

struct FeatureParts {
    carousel: Rc<RefCell<InfiniteCarousel>>,
    strip: web::HtmlElement,
}

fn build_features(document: &web::Document, config: &SiteConfig) -> anyhow::Result<FeatureParts> {
    let viewport = dom::html_element_by_id(document, FEATURES_VIEWPORT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", FEATURES_VIEWPORT_ID))?;
    let strip = dom::html_element_by_id(document, FEATURES_STRIP_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", FEATURES_STRIP_ID))?;

    let carousel = InfiniteCarousel::new(content::feature_cards(), config.carousel)?;
    cards::render_feature_slides(document, &strip, &carousel)?;
    log::info!(
        "[carousel] {} cards, {} slides, snap group {}",
        carousel.item_count(),
        carousel.slide_count(),
        carousel.config().snap_group
    );
    let carousel = Rc::new(RefCell::new(carousel));

    events::scroll::wire_carousel_resize(viewport, strip.clone(), carousel.clone());
    events::pointer::wire_drag_handlers(events::pointer::DragWiring {
        strip: strip.clone(),
        carousel: carousel.clone(),
        tracker: Rc::new(RefCell::new(PointerTracker::default())),
    });
    Ok(FeatureParts { carousel, strip })
}

fn build_marquee(document: &web::Document, config: &SiteConfig) -> Option<(Marquee, frame::Track)> {
    let strip = dom::html_element_by_id(document, TRUST_STRIP_ID)?;
    let marquee = match Marquee::new(content::CLIENTS.len(), config.marquee) {
        Ok(m) => m,
        Err(e) => {
            log::warn!("[marquee] disabled: {}", e);
            return None;
        }
    };
    if let Err(e) = cards::render_trust_tiles(document, &strip, &marquee, config.marquee.tile_width_px) {
        log::warn!("[marquee] tiles not rendered: {:?}", e);
        return None;
    }
    Some((marquee, frame::Track::new(strip)))
}

fn build_counters(document: &web::Document) -> Vec<frame::StatCounter> {
    content::stat_counters()
        .into_iter()
        .enumerate()
        .map(|(i, counter)| {
            let element =
                dom::html_element_by_id(document, &format!("{}{}", STAT_VALUE_ID_PREFIX, i));
            if let Some(el) = &element {
                el.set_text_content(Some(&counter.display()));
            }
            frame::StatCounter {
                counter,
                element,
                shown: None,
            }
        })
        .collect()
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = SiteConfig::default();
    config.validate()?;

    overlay::begin_loading(&document);

    let canvas = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => Some(
            el.dyn_into::<web::HtmlCanvasElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?,
        ),
        None => {
            log::warn!("[frame] no #{}; camera aspect defaults to 1", CANVAS_ID);
            None
        }
    };
    if let Some(c) = &canvas {
        wire_canvas_resize(c);
    }

    let FeatureParts { carousel, strip } = build_features(&document, &config)?;
    let marquee = build_marquee(&document, &config);
    let counters = build_counters(&document);

    let reveals = Rc::new(RefCell::new(reveal::collect_slots(
        &document,
        config.reveal_threshold,
    )));
    let reveal_observer = match reveal::observe(&reveals, config.reveal_threshold) {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[reveal] observer unavailable: {:?}", e);
            None
        }
    };

    let scroll = Rc::new(Cell::new(ScrollProgress::default()));
    events::scroll::wire_scroll_progress(scroll.clone());

    let path = scene::camera_path()?;
    log::info!("[path] {} keyframes", path.keyframes().len());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        carousel,
        features: frame::Track::new(strip),
        marquee,
        counters,
        reveals,
        _reveal_observer: reveal_observer,
        scroll,
        follower: ProgressFollower::new(site_core::constants::CAMERA_FOLLOW_TAU_SEC),
        path,
        lens: config.lens,
        canvas,
        placements: scene::model_placements(),
        section: None,
        elapsed_sec: 0.0,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
