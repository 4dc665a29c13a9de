//! Pixel-exact overlap test on image alpha channels.

use image::RgbaImage;

use crate::math::vec2::Vec2;

/// Checks whether two images, drawn with their top-left corners at the given
/// positions, have an opaque pixel in common.
///
/// Positions are rounded to whole pixels. Only the interior of the overlap is
/// sampled: a one pixel border on each side is skipped, so images that overlap
/// by two pixels or less never collide. Samples that land outside an image
/// are ignored and the scan goes on.
pub fn pixel_collide(origin_a: Vec2, image_a: &RgbaImage, origin_b: Vec2, image_b: &RgbaImage) -> bool {
    let (ax, ay) = (origin_a.x.round() as i64, origin_a.y.round() as i64);
    let (bx, by) = (origin_b.x.round() as i64, origin_b.y.round() as i64);

    // Overlapping rectangle, end exclusive. Saturating so far-off origins cannot overflow.
    let x_start = ax.max(bx);
    let y_start = ay.max(by);
    let x_end = ax.saturating_add(i64::from(image_a.width())).min(bx.saturating_add(i64::from(image_b.width())));
    let y_end = ay.saturating_add(i64::from(image_a.height())).min(by.saturating_add(i64::from(image_b.height())));

    for y in y_start.saturating_add(1)..y_end.saturating_sub(1) {
        for x in x_start.saturating_add(1)..x_end.saturating_sub(1) {
            let (Some(alpha_a), Some(alpha_b)) = (alpha_at(image_a, x - ax, y - ay), alpha_at(image_b, x - bx, y - by))
            else {
                continue;
            };
            if alpha_a != 0 && alpha_b != 0 {
                return true;
            }
        }
    }
    false
}

/// Alpha of the pixel at image-local coordinates, `None` when out of range.
fn alpha_at(image: &RgbaImage, x: i64, y: i64) -> Option<u8> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    image.get_pixel_checked(x, y).map(|pixel| pixel.0[3])
}
