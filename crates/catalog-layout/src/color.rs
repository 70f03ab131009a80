//! Background color derivation from the logo
//!
//! The logo is reduced to a small square by area averaging, the mean color
//! is scored for perceptual brightness, and the score picks one of two
//! palette entries: bright logos sit on dark teal, dark logos on light grey.

use crate::constants::{BRIGHTNESS_THRESHOLD, SAMPLE_SIZE};
use crate::options::AlphaPolicy;
use crate::types::Color;
use image::{Rgb, RgbImage, RgbaImage, imageops};

/// Pick the page background for `logo`, compositing transparency over white.
pub fn sample(logo: &RgbaImage) -> Color {
    sample_with(logo, AlphaPolicy::default())
}

/// Pick the page background for `logo` using the given alpha policy.
pub fn sample_with(logo: &RgbaImage, policy: AlphaPolicy) -> Color {
    let score = brightness(logo, policy);
    let color = if score > BRIGHTNESS_THRESHOLD {
        Color::DARK_TEAL
    } else {
        Color::LIGHT_GREY
    };
    log::debug!(
        "logo {}x{} brightness {:.1} -> {:?}",
        logo.width(),
        logo.height(),
        score,
        color
    );
    color
}

/// Mean perceptual brightness of `logo` after downsampling, 0.0..=255.0
pub fn brightness(logo: &RgbaImage, policy: AlphaPolicy) -> f32 {
    let [r, g, b] = mean_rgb(logo, policy);
    (0.299 * r + 0.587 * g + 0.114 * b) as f32
}

/// Per-channel mean of the downsampled logo
fn mean_rgb(logo: &RgbaImage, policy: AlphaPolicy) -> [f64; 3] {
    if logo.width() == 0 || logo.height() == 0 {
        // Nothing to see: a fully transparent logo
        return match policy {
            AlphaPolicy::CompositeOverWhite => [255.0; 3],
            AlphaPolicy::Ignore => [0.0; 3],
        };
    }

    let flattened = flatten_alpha(logo, policy);
    // Only ever shrink; small logos are averaged as they are
    let sampled = imageops::thumbnail(
        &flattened,
        flattened.width().min(SAMPLE_SIZE),
        flattened.height().min(SAMPLE_SIZE),
    );

    let mut sums = [0u64; 3];
    for pixel in sampled.pixels() {
        for (sum, channel) in sums.iter_mut().zip(pixel.0) {
            *sum += channel as u64;
        }
    }

    let count = (sampled.width() as u64 * sampled.height() as u64).max(1) as f64;
    sums.map(|sum| sum as f64 / count)
}

/// Drop the alpha channel according to `policy`
fn flatten_alpha(logo: &RgbaImage, policy: AlphaPolicy) -> RgbImage {
    RgbImage::from_fn(logo.width(), logo.height(), |x, y| {
        let [r, g, b, a] = logo.get_pixel(x, y).0;
        match policy {
            AlphaPolicy::Ignore => Rgb([r, g, b]),
            AlphaPolicy::CompositeOverWhite => Rgb([
                over_white(r, a),
                over_white(g, a),
                over_white(b, a),
            ]),
        }
    })
}

fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
