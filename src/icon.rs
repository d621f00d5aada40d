use image::{ImageBuffer, Rgb, RgbImage};

/// Renders the 1024x1024 placeholder application icon: two nested filled
/// rectangles on a white background, the outer one with a 20px outline.
pub fn create_icon() -> RgbImage {
    let mut image = ImageBuffer::new(1024, 1024);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let in_outer = (100..=924).contains(&x) && (100..=924).contains(&y);
        // Outline band expands inward from the outer rectangle's edge
        let on_outline = in_outer && (x < 120 || x > 904 || y < 120 || y > 904);
        let in_inner = (200..=824).contains(&x) && (300..=700).contains(&y);

        if in_inner {
            *pixel = Rgb([96, 165, 250]); // #60a5fa inner rectangle
        } else if on_outline {
            *pixel = Rgb([29, 78, 216]); // #1d4ed8 outline
        } else if in_outer {
            *pixel = Rgb([59, 130, 246]); // #3b82f6 outer rectangle
        } else {
            *pixel = Rgb([255, 255, 255]); // White background
        }
    }
    image
}
