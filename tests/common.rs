#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Deterministic gradient with per-pixel noise, close enough to a photo
/// that lossy WebP beats lossless PNG on it.
pub fn photo_like_image(width: u32, height: u32, seed: u32) -> RgbImage {
    let mut state = seed.wrapping_mul(2_654_435_761).max(1);
    RgbImage::from_fn(width, height, |x, y| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let noise = (state % 48) as i32 - 24;
        let r = ((x * 255 / width.max(1)) as i32 + noise).clamp(0, 255) as u8;
        let g = ((y * 255 / height.max(1)) as i32 + noise).clamp(0, 255) as u8;
        let b = (((x + y) * 127 / (width + height).max(1)) as i32 + 64 + noise).clamp(0, 255) as u8;
        Rgb([r, g, b])
    })
}

pub fn create_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    photo_like_image(width, height, width ^ height)
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub fn create_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    photo_like_image(width, height, width + height)
        .save_with_format(&path, image::ImageFormat::Jpeg)
        .unwrap();
    path
}

pub fn create_transparent_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(64, 64, |x, y| Rgba([(x * 4) as u8, (y * 4) as u8, 90, (x + y) as u8]))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

pub fn create_fake_image(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"fake image data").unwrap();
    path
}

/// root/{one.jpg, two.PNG, notes.txt, nested/{three.jpeg, notes.md}}
pub fn create_nested_directory_structure(root: &Path) -> PathBuf {
    create_jpeg(root, "one.jpg", 96, 64);
    create_png(root, "two.PNG", 64, 64);
    std::fs::write(root.join("notes.txt"), b"not an image").unwrap();

    let nested = root.join("nested");
    std::fs::create_dir(&nested).unwrap();
    create_jpeg(&nested, "three.jpeg", 80, 80);
    std::fs::write(nested.join("notes.md"), b"# nested").unwrap();

    nested
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
