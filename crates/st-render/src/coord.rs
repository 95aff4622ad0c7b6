//! World-to-image coordinate mapping.

use st_core::Vec2;

/// Maps world points within `[bottom_left, top_right]` to image pixel
/// coordinates `(u, v)` for an `image_w x image_h` canvas.
///
/// `u = (p.x - bottom_left.x) * image_w / W_region`
/// `v = image_h - (p.y - bottom_left.y) * image_h / H_region`
///
/// The vertical flip matches the region's world convention (`y` increases
/// upward) against an image's top-down row order.
pub struct CoordMapper {
    bottom_left: Vec2,
    w_region: f32,
    h_region: f32,
    image_w: f32,
    image_h: f32,
}

impl CoordMapper {
    pub fn new(bottom_left: Vec2, top_right: Vec2, image_w: f32, image_h: f32) -> Self {
        CoordMapper {
            bottom_left,
            w_region: (top_right.x - bottom_left.x).max(f32::EPSILON),
            h_region: (top_right.y - bottom_left.y).max(f32::EPSILON),
            image_w,
            image_h,
        }
    }

    pub fn to_image(&self, p: Vec2) -> (f32, f32) {
        let local = p - self.bottom_left;
        let u = local.x * self.image_w / self.w_region;
        let v = self.image_h - local.y * self.image_h / self.h_region;
        (u, v)
    }
}
