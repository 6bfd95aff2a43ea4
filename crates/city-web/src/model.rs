//! Minimal binary-glTF scan: just enough to pull out the POSITION vertex
//! data and its bounding volume. The viewer renders the model as a point
//! cloud, so buffer views for indices, normals and materials are ignored.

use anyhow::{anyhow, bail, Result};
use glam::Vec3;
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};

use city_core::{ModelBounds, MAX_MODEL_POINTS};

pub struct LoadedModel {
    pub bounds: ModelBounds,
    /// Vertex positions, recentered about the bounds center and subsampled
    /// to the renderer's point budget.
    pub points: Vec<Vec3>,
}

const GLB_MAGIC: u32 = 0x4654_6C67; // "glTF"
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;
const COMPONENT_F32: f64 = 5126.0;

pub fn parse_glb(bytes: &[u8]) -> Result<LoadedModel> {
    if u32_le(bytes, 0)? != GLB_MAGIC {
        bail!("not a binary glTF file");
    }
    let version = u32_le(bytes, 4)?;
    if version != 2 {
        bail!("unsupported glTF version {version}");
    }

    let mut json_chunk: Option<&[u8]> = None;
    let mut bin_chunk: Option<&[u8]> = None;
    let mut offset = 12usize;
    while offset + 8 <= bytes.len() {
        let chunk_len = u32_le(bytes, offset)? as usize;
        let chunk_type = u32_le(bytes, offset + 4)?;
        let data = bytes
            .get(offset + 8..offset + 8 + chunk_len)
            .ok_or_else(|| anyhow!("glb: chunk extends past end of file"))?;
        match chunk_type {
            CHUNK_JSON => json_chunk = Some(data),
            CHUNK_BIN => bin_chunk = Some(data),
            _ => {}
        }
        offset += 8 + chunk_len;
    }
    let json_text =
        std::str::from_utf8(json_chunk.ok_or_else(|| anyhow!("glb: missing JSON chunk"))?)?;
    let bin = bin_chunk.ok_or_else(|| anyhow!("glb: missing binary chunk"))?;

    let root = js_sys::JSON::parse(json_text)
        .map_err(|e| anyhow!("glb: invalid scene JSON: {:?}", e))?;
    let accessors = json_array(&root, "accessors")
        .ok_or_else(|| anyhow!("glb: no accessors"))?;
    let buffer_views = json_array(&root, "bufferViews")
        .ok_or_else(|| anyhow!("glb: no bufferViews"))?;
    let meshes = json_array(&root, "meshes").ok_or_else(|| anyhow!("glb: no meshes"))?;

    // Every POSITION accessor referenced by any primitive, deduplicated.
    let mut position_accessors: Vec<usize> = Vec::new();
    for mesh in meshes.iter() {
        let Some(primitives) = json_array(&mesh, "primitives") else {
            continue;
        };
        for prim in primitives.iter() {
            let Some(attributes) = json_field(&prim, "attributes") else {
                continue;
            };
            if let Some(idx) = json_number(&attributes, "POSITION") {
                let idx = idx as usize;
                if !position_accessors.contains(&idx) {
                    position_accessors.push(idx);
                }
            }
        }
    }

    let mut points: Vec<Vec3> = Vec::new();
    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for &acc_idx in &position_accessors {
        let accessor = accessors.get(acc_idx as u32);
        if json_number(&accessor, "componentType") != Some(COMPONENT_F32)
            || json_string(&accessor, "type").as_deref() != Some("VEC3")
        {
            continue;
        }
        let count = json_number(&accessor, "count").unwrap_or(0.0) as usize;
        let acc_offset = json_number(&accessor, "byteOffset").unwrap_or(0.0) as usize;
        let Some(bv_idx) = json_number(&accessor, "bufferView") else {
            continue;
        };
        let view = buffer_views.get(bv_idx as u32);
        let view_offset = json_number(&view, "byteOffset").unwrap_or(0.0) as usize;
        let stride = json_number(&view, "byteStride").unwrap_or(12.0) as usize;

        let base = view_offset + acc_offset;
        for k in 0..count {
            let off = base + k * stride;
            let p = Vec3::new(
                f32_le(bin, off)?,
                f32_le(bin, off + 4)?,
                f32_le(bin, off + 8)?,
            );
            min = min.min(p);
            max = max.max(p);
            points.push(p);
        }
    }
    if points.is_empty() {
        bail!("glb: no POSITION data found");
    }

    let bounds = ModelBounds::from_min_max(min, max);
    // Center the model at the origin, like the scene graph would.
    for p in &mut points {
        *p -= bounds.center;
    }
    let step = points.len() / MAX_MODEL_POINTS + 1;
    if step > 1 {
        points = points.into_iter().step_by(step).collect();
    }
    log::info!(
        "model parsed: {} points (of {} accessors), size {:?}",
        points.len(),
        position_accessors.len(),
        bounds.size
    );
    Ok(LoadedModel { bounds, points })
}

#[inline]
fn u32_le(bytes: &[u8], offset: usize) -> Result<u32> {
    let b = bytes
        .get(offset..offset + 4)
        .ok_or_else(|| anyhow!("glb: truncated at byte {offset}"))?;
    Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

#[inline]
fn f32_le(bytes: &[u8], offset: usize) -> Result<f32> {
    let b = bytes
        .get(offset..offset + 4)
        .ok_or_else(|| anyhow!("glb: vertex data truncated at byte {offset}"))?;
    Ok(f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

fn json_field(obj: &JsValue, key: &str) -> Option<JsValue> {
    let v = js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?;
    (!v.is_undefined() && !v.is_null()).then_some(v)
}

fn json_number(obj: &JsValue, key: &str) -> Option<f64> {
    json_field(obj, key)?.as_f64()
}

fn json_string(obj: &JsValue, key: &str) -> Option<String> {
    json_field(obj, key)?.as_string()
}

fn json_array(obj: &JsValue, key: &str) -> Option<Array> {
    json_field(obj, key)?.dyn_into::<Array>().ok()
}
