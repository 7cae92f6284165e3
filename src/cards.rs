use site_core::content::CLIENTS;
use site_core::{CardContent, InfiniteCarousel, Marquee};
use wasm_bindgen::JsValue;
use web_sys as web;

fn element_with_text(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<web::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

fn feature_card(document: &web::Document, index: usize, card: &CardContent) -> Result<web::Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name("feature-card");
    root.set_attribute("data-slide", &index.to_string())?;
    root.append_child(&element_with_text(document, "div", "feature-icon", &card.icon)?)?;
    root.append_child(&element_with_text(document, "h3", "feature-title", &card.title)?)?;
    root.append_child(&element_with_text(document, "p", "feature-description", &card.description)?)?;
    Ok(root)
}

/// Replace the strip's children with every physical slide of the carousel.
pub fn render_feature_slides(
    document: &web::Document,
    strip: &web::HtmlElement,
    carousel: &InfiniteCarousel,
) -> anyhow::Result<()> {
    strip.set_inner_html("");
    for (i, card) in carousel.slides() {
        let el = feature_card(document, i, card).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        strip
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

pub fn render_trust_tiles(
    document: &web::Document,
    strip: &web::HtmlElement,
    marquee: &Marquee,
    tile_width_px: f32,
) -> anyhow::Result<()> {
    let build = || -> Result<(), JsValue> {
        strip.set_inner_html("");
        for i in 0..marquee.physical_tiles() {
            let (name, abbr) = CLIENTS[i % CLIENTS.len()];
            let tile = document.create_element("div")?;
            tile.set_class_name("trust-tile");
            tile.set_attribute("style", &format!("min-width: {:.0}px", tile_width_px))?;
            tile.append_child(&element_with_text(document, "span", "trust-abbr", abbr)?)?;
            tile.append_child(&element_with_text(document, "span", "trust-name", name)?)?;
            strip.append_child(&tile)?;
        }
        Ok(())
    };
    build().map_err(|e| anyhow::anyhow!("{:?}", e))
}
