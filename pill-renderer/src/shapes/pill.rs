use pill_parser::HexColor;
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

use crate::{Drawable, RenderError, geometry::PillGeometry};

/// Control point distance for approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_8;

/// Filled rounded rectangle covering the whole pixmap.
pub(crate) struct Pill {
    width: f32,
    height: f32,
    radius: f32,
    color: HexColor,
}

impl Pill {
    pub(crate) fn new(geometry: &PillGeometry, color: HexColor) -> Self {
        Self {
            width: geometry.width as f32,
            height: geometry.height as f32,
            radius: geometry.corner_radius,
            color,
        }
    }

    fn path(&self) -> Option<Path> {
        let rect = Rect::from_xywh(0., 0., self.width, self.height)?;
        rounded_rect(rect, self.radius)
    }
}

/// Corners are clamped so a pill narrower than it is tall becomes an ellipse.
fn rounded_rect(rect: Rect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.).min(rect.height() / 2.).max(0.);
    if r == 0. {
        return Some(PathBuilder::from_rect(rect));
    }

    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

impl Drawable for Pill {
    fn draw(&self, target: &mut Pixmap) -> Result<(), RenderError> {
        let path = self.path().ok_or(RenderError::Shape {
            width: self.width,
            height: self.height,
        })?;

        let mut paint = Paint::default();
        let [r, g, b, a] = self.color.to_rgba8();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        target.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(width: u32, height: u32) -> Pixmap {
        let geometry = PillGeometry {
            width,
            height,
            corner_radius: height as f32 / 2.,
        };
        let mut pixmap = Pixmap::new(width, height).unwrap();
        Pill::new(&geometry, HexColor::from_rgb24(0x2ecc71))
            .draw(&mut pixmap)
            .unwrap();
        pixmap
    }

    #[test]
    fn fills_center_with_background() {
        let pixmap = draw(40, 20);
        let pixel = pixmap.pixel(20, 10).unwrap();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (0x2e, 0xcc, 0x71, 255)
        );
    }

    #[test]
    fn corners_stay_transparent() {
        let pixmap = draw(40, 20);
        for (x, y) in [(0, 0), (39, 0), (0, 19), (39, 19)] {
            assert_eq!(pixmap.pixel(x, y).unwrap().alpha(), 0, "corner {x},{y}");
        }
        // straight edge between the caps is fully covered
        assert_eq!(pixmap.pixel(20, 1).unwrap().alpha(), 255);
    }

    #[test]
    fn narrow_pill_clamps_radius() {
        let path = rounded_rect(Rect::from_xywh(0., 0., 10., 20.).unwrap(), 10.).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.width(), 10.);
        assert_eq!(bounds.height(), 20.);
    }

    #[test]
    fn zero_radius_is_plain_rect() {
        let rect = Rect::from_xywh(0., 0., 10., 4.).unwrap();
        let path = rounded_rect(rect, 0.).unwrap();
        assert_eq!(path.bounds(), rect);
    }
}
