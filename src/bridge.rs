//! Frame outputs the external 3D renderer polls, plus asset helpers.

use crate::dom;
use crate::overlay;
use site_core::{resolve_asset_url, CameraUniform, ModelPlacement, ModelTransform, Pose};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

#[derive(Default)]
struct Published {
    pose: Option<Pose>,
    uniform: Option<CameraUniform>,
    models: Vec<f32>,
}

thread_local! {
    static LATEST: RefCell<Published> = RefCell::new(Published::default());
}

// position xyz, rotation xyz, scale
const MODEL_STRIDE: usize = 7;

pub fn publish_camera(pose: Pose, uniform: CameraUniform) {
    LATEST.with(|p| {
        let mut p = p.borrow_mut();
        p.pose = Some(pose);
        p.uniform = Some(uniform);
    });
}

pub fn publish_models(transforms: impl Iterator<Item = ModelTransform>) {
    LATEST.with(|p| {
        let mut p = p.borrow_mut();
        p.models.clear();
        for t in transforms {
            p.models.extend_from_slice(&t.position.to_array());
            p.models.extend_from_slice(&t.rotation.to_array());
            p.models.push(t.scale);
        }
    });
}

/// `[eye.xyz, look_at.xyz]`, empty before the first frame.
#[wasm_bindgen]
pub fn camera_pose() -> Vec<f32> {
    LATEST.with(|p| match p.borrow().pose {
        Some(pose) => {
            let mut out = pose.position.to_array().to_vec();
            out.extend_from_slice(&pose.look_at.to_array());
            out
        }
        None => Vec::new(),
    })
}

/// Column-major view-projection followed by the eye position (20 floats).
#[wasm_bindgen]
pub fn camera_uniform() -> Vec<f32> {
    LATEST.with(|p| match &p.borrow().uniform {
        Some(u) => bytemuck::cast_slice::<CameraUniform, f32>(std::slice::from_ref(u)).to_vec(),
        None => Vec::new(),
    })
}

/// Flattened model transforms, seven floats per model in placement order.
#[wasm_bindgen]
pub fn model_transforms() -> Vec<f32> {
    LATEST.with(|p| p.borrow().models.clone())
}

#[wasm_bindgen]
pub fn model_stride() -> usize {
    MODEL_STRIDE
}

/// Absolute URLs of the model assets, in placement order.
#[wasm_bindgen]
pub fn model_asset_urls() -> js_sys::Array {
    let origin = dom::page_origin();
    site_core::scene::model_placements()
        .iter()
        .map(|m: &ModelPlacement| JsValue::from_str(&resolve_asset_url(origin.as_deref(), m.asset_path)))
        .collect()
}

#[wasm_bindgen]
pub fn asset_url(path: &str) -> String {
    resolve_asset_url(dom::page_origin().as_deref(), path)
}

/// Called by the renderer as models load; 100 dismisses the loader.
#[wasm_bindgen]
pub fn set_loading_progress(percent: f32) {
    if let Some(document) = dom::window_document() {
        overlay::set_progress(&document, percent);
    }
}
