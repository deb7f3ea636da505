mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use common::fixtures::*;
use common::{TestResult, convert_json};
use flatskin::{ConverterBuilder, InMemoryAssetSink};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_manifest_lists_each_font_once() -> TestResult {
    let converter = ConverterBuilder::new()
        .with_asset_sink(Box::new(InMemoryAssetSink::new()))
        .build()?;
    let b = bounds(0.0, 0.0, 10.0, 10.0);
    let doc = document(
        100.0,
        100.0,
        vec![
            text_layer("a", b.clone(), "one", "Arial", [0, 0, 0], 10.0),
            group(
                "g",
                b.clone(),
                vec![
                    text_layer("b", b.clone(), "two", "Open Sans", [0, 0, 0], 10.0),
                    text_layer("c", b.clone(), "three", "Arial", [0, 0, 0], 10.0),
                ],
            ),
            text_layer("d", b.clone(), "four", "Open Sans", [0, 0, 0], 10.0),
        ],
    );

    let conversion = convert_json(&converter, &doc, "fonts")?;
    assert_eq!(conversion.fonts, vec!["Arial", "Open Sans"]);
    Ok(())
}

#[test]
fn test_fetch_fonts_from_directory() -> TestResult {
    let fonts_dir = tempdir()?;
    fs::write(fonts_dir.path().join("arial.ttf"), b"arial-bytes")?;
    fs::write(fonts_dir.path().join("open_sans.ttf"), b"open-sans-bytes")?;

    let converter = ConverterBuilder::new()
        .with_asset_sink(Box::new(InMemoryAssetSink::new()))
        .with_font_dir(fonts_dir.path())
        .build()?;

    let fonts = converter.fetch_fonts(&["Open Sans", "Comic Sans", "Arial"]);
    let names: Vec<_> = fonts.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["open_sans.ttf", "arial.ttf"]);
    assert_eq!(BASE64_STANDARD.decode(&fonts[1].data)?, b"arial-bytes");
    Ok(())
}

#[test]
fn test_fetch_fonts_for_converted_manifest() -> TestResult {
    let fonts_dir = tempdir()?;
    fs::write(fonts_dir.path().join("arial.ttf"), b"a")?;

    let converter = ConverterBuilder::new()
        .with_asset_sink(Box::new(InMemoryAssetSink::new()))
        .with_font_dir(fonts_dir.path())
        .build()?;
    let conversion = convert_json(&converter, &group_text_image_document(), "doc")?;

    let fonts = converter.fetch_fonts(&conversion.fonts);
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].name, "arial.ttf");
    Ok(())
}

#[test]
fn test_unreadable_store_yields_no_fonts() -> TestResult {
    let dir = tempdir()?;
    let converter = ConverterBuilder::new()
        .with_asset_sink(Box::new(InMemoryAssetSink::new()))
        .with_font_dir(dir.path().join("missing"))
        .build()?;

    assert!(converter.fetch_fonts(&["Arial"]).is_empty());
    Ok(())
}
