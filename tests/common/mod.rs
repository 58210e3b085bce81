//! Helpers shared by the integration suites.

use assert_cmd::Command;
use std::path::Path;
use url_qr::config::EffectiveConfig;
use url_qr::imaging::QrSettings;

/// The `url-qr` binary with a cleared environment, run from `cwd`, so neither
/// the developer's shell nor a stray `.env` leaks in.
#[allow(dead_code)]
pub fn url_qr(cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("url-qr"));
    cmd.env_clear().current_dir(cwd);
    cmd
}

/// Default config pointed at `<root>/out` with the given URL.
#[allow(dead_code)]
pub fn config_in(root: &Path, url: &str) -> EffectiveConfig {
    EffectiveConfig {
        url: url.to_string(),
        output_dir: root.join("out"),
        ..Default::default()
    }
}

/// Sorted file names in `dir`. Empty when `dir` does not exist.
pub fn file_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Read the image at `path` the way a scanner would and return its payload.
pub fn decode_qr(path: &Path) -> String {
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("cannot open {}: {e}", path.display()))
        .to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected one QR symbol in {}", path.display());
    let (_meta, content) = grids[0]
        .decode()
        .unwrap_or_else(|e| panic!("{} does not decode: {e}", path.display()));
    content
}

/// Assert that `path` decodes to `data` and that dark modules use `fill`.
pub fn assert_decodes(path: &Path, data: &str, fill: [u8; 3]) {
    assert_eq!(decode_qr(path), data, "payload of {}", path.display());

    // The top-left finder pattern's corner module is always dark.
    let settings = QrSettings::default();
    let corner = settings.border * settings.module_size + settings.module_size / 2;
    let img = image::open(path).unwrap().to_rgb8();
    assert_eq!(
        img.get_pixel(corner, corner).0,
        fill,
        "fill color of {}",
        path.display()
    );
}
