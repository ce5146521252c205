#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::Path;

/// A noisy RGB image so that quality changes show up in the encoded size.
pub fn patterned_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        let noise = (x.wrapping_mul(7919) ^ y.wrapping_mul(104729)) % 256;
        image::Rgb([(x % 256) as u8, (y % 256) as u8, noise as u8])
    }))
}

pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    patterned_image(width, height)
        .save_with_format(path, ImageFormat::Jpeg)
        .unwrap();
}

/// Real PNG content, whatever extension `path` carries.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    patterned_image(width, height)
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
