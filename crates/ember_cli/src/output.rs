//! Image file output.

use anyhow::{Context, Result};
use image::RgbImage;
use std::path::Path;

/// Write a row-major RGB8 buffer to `path`, format chosen by extension.
pub fn save_rgb(path: &Path, width: u32, height: u32, rgb: Vec<u8>) -> Result<()> {
    let image = RgbImage::from_raw(width, height, rgb)
        .with_context(|| format!("buffer does not hold a {width}x{height} RGB image"))?;
    image
        .save(path)
        .with_context(|| format!("saving {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_buffer_size() {
        let path = std::env::temp_dir().join("ember_wrong_size.png");
        assert!(save_rgb(&path, 4, 4, vec![0; 5]).is_err());
    }

    #[test]
    fn test_round_trip_png() {
        let path = std::env::temp_dir().join(format!("ember_output_{}.png", std::process::id()));
        let rgb: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8 * 10).collect();

        save_rgb(&path, 2, 3, rgb.clone()).unwrap();
        let loaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.dimensions(), (2, 3));
        assert_eq!(loaded.into_raw(), rgb);
    }
}
