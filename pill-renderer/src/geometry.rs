use pill_parser::Padding;

/// Size of the laid out label, in fractional pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Pixel size of the pill and the radius of its end caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillGeometry {
    pub width: u32,
    pub height: u32,
    pub corner_radius: f32,
}

impl PillGeometry {
    /// Text plus padding on both sides, rounded up to whole pixels so nothing is clipped.
    pub fn new(extent: TextExtent, padding: Padding) -> Self {
        let width = (extent.width.max(0.0) + padding.x * 2.0).ceil() as u32;
        let height = (extent.height.max(0.0) + padding.y * 2.0).ceil() as u32;
        Self {
            width,
            height,
            corner_radius: height as f32 / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding(x: f32, y: f32) -> Padding {
        Padding { x, y }
    }

    #[test]
    fn rounds_up_to_whole_pixels() {
        let extent = TextExtent {
            width: 13.2,
            height: 13.01,
        };
        let geometry = PillGeometry::new(extent, padding(8., 3.));
        assert_eq!(geometry.width, 30);
        assert_eq!(geometry.height, 20);
        assert_eq!(geometry.corner_radius, 10.);
    }

    #[test]
    fn radius_is_half_the_height() {
        for height in [0., 0.5, 7., 13.3, 14., 99.9] {
            for pad_y in [0., 1.5, 3., 10.] {
                let extent = TextExtent { width: 5., height };
                let geometry = PillGeometry::new(extent, padding(2., pad_y));
                assert_eq!(geometry.corner_radius, geometry.height as f32 / 2.);
            }
        }
    }

    #[test]
    fn never_smaller_than_padding() {
        for width in [0., 0.1, 12.7, 200.] {
            for (pad_x, pad_y) in [(0., 0.), (8., 3.), (2.5, 7.25)] {
                let extent = TextExtent {
                    width,
                    height: width / 2.,
                };
                let geometry = PillGeometry::new(extent, padding(pad_x, pad_y));
                assert!(geometry.width as f32 >= 2. * pad_x);
                assert!(geometry.height as f32 >= 2. * pad_y);
            }
        }
    }

    #[test]
    fn empty_text_is_sized_by_padding() {
        let geometry = PillGeometry::new(TextExtent::default(), padding(8., 3.));
        assert_eq!(geometry.width, 16);
        assert_eq!(geometry.height, 6);
    }
}
