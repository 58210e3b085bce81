//! Library-level tests of the generate pipeline against real files.
//!
//! Run with: cargo test --test generate

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::{assert_decodes, config_in, decode_qr, file_names};
use tempfile::TempDir;
use url_qr::QrError;
use url_qr::generate::generate_at;

fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, second).unwrap()
}

#[test]
fn writes_decodable_image_at_resolved_path() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path(), "https://example.com");

    let path = generate_at(&config, &at(5)).unwrap();
    assert_eq!(path, tmp.path().join("out/qr_20240601_120005.png"));
    assert_decodes(&path, "https://example.com", [0, 0, 0]);
}

#[test]
fn custom_colors_are_applied() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(tmp.path(), "https://example.com");
    config.filename = "colored.png".into();
    config.fill_color = "navy".into();
    config.back_color = "#ffff00".into();

    let path = generate_at(&config, &at(0)).unwrap();
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 0]);
    assert_decodes(&path, "https://example.com", [0, 0, 128]);
}

#[test]
fn long_payload_needs_larger_version_and_still_decodes() {
    let tmp = TempDir::new().unwrap();
    let url = format!("https://example.com/{}", "segment/".repeat(20));
    let mut config = config_in(tmp.path(), &url);
    config.filename = "long.png".into();

    let path = generate_at(&config, &at(0)).unwrap();
    assert_eq!(decode_qr(&path), url);
}

#[test]
fn jpeg_output_still_decodes() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(tmp.path(), "https://example.com/jpeg");
    config.filename = "out.jpg".into();

    let path = generate_at(&config, &at(0)).unwrap();
    assert_eq!(decode_qr(&path), "https://example.com/jpeg");
}

#[test]
fn default_filename_twice_gives_two_files() {
    let tmp = TempDir::new().unwrap();
    let config = config_in(tmp.path(), "https://example.com");

    let first = generate_at(&config, &at(1)).unwrap();
    let second = generate_at(&config, &at(2)).unwrap();
    assert_ne!(first, second);
    assert_eq!(file_names(&config.output_dir).len(), 2);
}

#[test]
fn explicit_filename_twice_overwrites() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(tmp.path(), "https://example.com");
    config.filename = "fixed.png".into();

    generate_at(&config, &at(1)).unwrap();
    config.url = "https://example.org/second".into();
    generate_at(&config, &at(2)).unwrap();

    assert_eq!(file_names(&config.output_dir), vec!["fixed.png"]);
    assert_decodes(
        &config.output_dir.join("fixed.png"),
        "https://example.org/second",
        [0, 0, 0],
    );
}

#[test]
fn bad_color_is_error_without_output_file() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_in(tmp.path(), "https://example.com");
    config.fill_color = "not-a-color".into();

    let err = generate_at(&config, &at(0)).unwrap_err();
    assert!(matches!(err, QrError::InvalidColor(_)));
    assert!(file_names(&config.output_dir).is_empty());
}
