use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde_json::{Value, json};

pub fn bounds(left: f64, top: f64, right: f64, bottom: f64) -> Value {
    json!({ "left": left, "top": top, "right": right, "bottom": bottom })
}

/// A document root with the given size and top-level layers.
pub fn document(width: f64, height: f64, children: Vec<Value>) -> Value {
    json!({ "width": width, "height": height, "children": children })
}

pub fn group(name: &str, bounds: Value, children: Vec<Value>) -> Value {
    json!({ "name": name, "bounds": bounds, "children": children })
}

/// A text layer with one color and one size.
pub fn text_layer(name: &str, bounds: Value, text: &str, font: &str, rgb: [u8; 3], size: f64) -> Value {
    json!({
        "name": name,
        "bounds": bounds,
        "text": {
            "text": text,
            "font": { "name": font, "colors": [[rgb[0], rgb[1], rgb[2]]], "sizes": [size] }
        }
    })
}

/// Base64 RGBA payload of a `width` x `height` raster filled with `rgba`.
pub fn rgba_raster(width: u32, height: u32, rgba: [u8; 4]) -> Value {
    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    json!({ "rgba": { "width": width, "height": height, "pixels": BASE64_STANDARD.encode(pixels) } })
}

/// A raster layer the PNG encoder will refuse (buffer shorter than declared).
pub fn broken_raster() -> Value {
    json!({ "rgba": { "width": 4, "height": 4, "pixels": BASE64_STANDARD.encode([0u8; 3]) } })
}

/// A `png` payload whose bytes are not a PNG.
pub fn non_png_raster() -> Value {
    json!({ "png": BASE64_STANDARD.encode(b"GIF89a") })
}

/// An RGBA header whose declared size overflows any buffer.
pub fn oversized_raster() -> Value {
    json!({ "rgba": { "width": u32::MAX, "height": u32::MAX, "pixels": BASE64_STANDARD.encode([0u8; 4]) } })
}

pub fn raster_layer(name: &str, bounds: Value, raster: Value) -> Value {
    json!({ "name": name, "bounds": bounds, "raster": raster })
}

pub fn unnamed_raster_layer(bounds: Value, raster: Value) -> Value {
    json!({ "bounds": bounds, "raster": raster })
}

/// 400x300 document: group "G" holding text "T" and raster "I".
pub fn group_text_image_document() -> Value {
    document(
        400.0,
        300.0,
        vec![group(
            "G",
            bounds(0.0, 0.0, 200.0, 200.0),
            vec![
                text_layer("T", bounds(0.0, 0.0, 100.0, 50.0), "Hi", "Arial", [255, 0, 0], 24.0),
                raster_layer("I", bounds(0.0, 0.0, 200.0, 200.0), rgba_raster(2, 2, [0, 128, 255, 255])),
            ],
        )],
    )
}
