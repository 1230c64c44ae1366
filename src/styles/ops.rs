//! Shared pixel operations composed by the style implementations.
//!
//! Every operation takes its input by reference and allocates a fresh output
//! buffer. All are deterministic single-pass transforms; cost is linear in
//! pixel count.

use image::{GrayImage, Luma};
use imageproc::filter::{filter3x3, gaussian_blur_f32};

use crate::raster::Photo;

/// Pivot for contrast adjustment.
const MIDPOINT: f32 = 128.0;

/// 3x3 Laplacian-style kernel highlighting local gradient magnitude.
const EDGE_KERNEL: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, 8.0, -1.0, -1.0, -1.0, -1.0];

/// Convert a photo to grayscale using standard luminance weighting
pub fn to_grayscale(photo: &Photo) -> GrayImage {
    image::imageops::grayscale(photo.as_image())
}

/// Produce the tonal inverse (255 - value per pixel)
pub fn invert(gray: &GrayImage) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([255 - gray.get_pixel(x, y)[0]])
    })
}

/// Apply a Gaussian blur with the given standard deviation
///
/// A sigma of zero or below degenerates to the identity, so callers never
/// have to special-case `intensity = 0`.
pub fn gaussian_blur(gray: &GrayImage, sigma: f32) -> GrayImage {
    if sigma <= 0.0 {
        return gray.clone();
    }
    gaussian_blur_f32(gray, sigma)
}

/// Scale contrast by `factor` around the channel midpoint, clamped to [0, 255]
///
/// A factor above 1.0 spreads tones towards black and white; a factor of
/// zero collapses the image to uniform midpoint gray.
pub fn adjust_contrast(gray: &GrayImage, factor: f32) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let value = gray.get_pixel(x, y)[0] as f32;
        let adjusted = (value - MIDPOINT) * factor + MIDPOINT;
        Luma([adjusted.clamp(0.0, 255.0) as u8])
    })
}

/// Quantize to the given number of bits per channel by dropping low bits
///
/// `bits` must be in 1..=8; 4 bits leaves at most 16 tonal levels.
pub fn posterize(gray: &GrayImage, bits: u8) -> GrayImage {
    debug_assert!((1..=8).contains(&bits));
    let mask = 0xffu8 << (8 - bits);
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([gray.get_pixel(x, y)[0] & mask])
    })
}

/// Highlight local gradient magnitude with a 3x3 edge convolution
pub fn edge_filter(gray: &GrayImage) -> GrayImage {
    filter3x3::<Luma<u8>, f32, u8>(gray, &EDGE_KERNEL)
}

/// Dodge-blend a base image with a blend layer
///
/// `result = base * 255 / (255 - blend)`, clamped to [0, 255]. Blend pixels
/// at 255 are clamped to 254 before the division so the denominator never
/// reaches zero. Brightens the base in proportion to the blend layer,
/// producing the light stroke look of a pencil sketch.
pub fn dodge_blend(base: &GrayImage, blend: &GrayImage) -> GrayImage {
    debug_assert_eq!(base.dimensions(), blend.dimensions());
    GrayImage::from_fn(base.width(), base.height(), |x, y| {
        let b = base.get_pixel(x, y)[0] as f32;
        let l = (blend.get_pixel(x, y)[0] as f32).min(254.0);
        let dodged = (b * 255.0) / (255.0 - l);
        Luma([dodged.clamp(0.0, 255.0) as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn invert_is_an_involution() {
        let mut gray = uniform(3, 3, 0);
        gray.put_pixel(1, 1, Luma([200]));
        assert_eq!(invert(&invert(&gray)), gray);
    }

    #[test]
    fn blur_with_zero_sigma_is_identity() {
        let mut gray = uniform(5, 5, 10);
        gray.put_pixel(2, 2, Luma([250]));
        assert_eq!(gaussian_blur(&gray, 0.0), gray);
        assert_eq!(gaussian_blur(&gray, -1.0), gray);
    }

    #[test]
    fn blur_preserves_uniform_images() {
        let gray = uniform(8, 8, 77);
        let blurred = gaussian_blur(&gray, 2.0);
        assert!(blurred.pixels().all(|p| p[0].abs_diff(77) <= 1));
    }

    #[test]
    fn contrast_fixes_the_midpoint() {
        let gray = uniform(2, 2, 128);
        assert_eq!(adjust_contrast(&gray, 2.0), gray);
    }

    #[test]
    fn contrast_spreads_and_clamps() {
        let dark = uniform(1, 1, 20);
        assert_eq!(adjust_contrast(&dark, 2.0).get_pixel(0, 0)[0], 0);

        let light = uniform(1, 1, 200);
        assert_eq!(adjust_contrast(&light, 2.0).get_pixel(0, 0)[0], 255);

        let mid_low = uniform(1, 1, 100);
        assert_eq!(adjust_contrast(&mid_low, 2.0).get_pixel(0, 0)[0], 72);
    }

    #[test]
    fn posterize_keeps_high_bits() {
        let gray = uniform(1, 1, 0b1011_0111);
        assert_eq!(posterize(&gray, 4).get_pixel(0, 0)[0], 0b1011_0000);
    }

    #[test]
    fn posterize_bounds_tonal_levels() {
        // Full 0-255 ramp collapses to 16 levels at 4 bits.
        let ramp = GrayImage::from_fn(256, 1, |x, _| Luma([x as u8]));
        let banded = posterize(&ramp, 4);
        let mut seen = std::collections::HashSet::new();
        for pixel in banded.pixels() {
            seen.insert(pixel[0]);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn edge_filter_is_flat_on_uniform_input() {
        let edges = edge_filter(&uniform(10, 10, 128));
        assert!(edges.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn edge_filter_responds_to_a_step() {
        let mut gray = uniform(10, 10, 0);
        for y in 0..10 {
            for x in 5..10 {
                gray.put_pixel(x, y, Luma([255]));
            }
        }
        let edges = edge_filter(&gray);
        assert!(edges.pixels().any(|p| p[0] > 0));
    }

    #[test]
    fn dodge_blend_survives_all_white_blend_layer() {
        // Blend pixels at 255 must be clamped to 254 before dividing.
        let base = uniform(4, 4, 128);
        let blend = uniform(4, 4, 255);
        let dodged = dodge_blend(&base, &blend);
        assert!(dodged.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn dodge_blend_with_black_blend_is_identity() {
        let base = uniform(4, 4, 99);
        let blend = uniform(4, 4, 0);
        assert_eq!(dodge_blend(&base, &blend), base);
    }
}
