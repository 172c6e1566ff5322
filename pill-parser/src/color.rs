use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::opt,
};

/// Opaque sRGB color parsed from a `#RRGGBB` or `RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor { r: 0, g: 0, b: 0 };

    pub const fn from_rgb24(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Lenient parse: never fails, anything that is not a hex digit stops the scan
    /// and missing digits count as zero.
    pub fn parse(input: &str) -> Self {
        match parse_hex_color(input) {
            Ok((_, color)) => color,
            Err(_) => Self::BLACK,
        }
    }

    pub fn alpha(&self) -> u8 {
        u8::MAX
    }

    pub fn red(&self) -> f32 {
        self.r as f32 / 255.0
    }

    pub fn green(&self) -> f32 {
        self.g as f32 / 255.0
    }

    pub fn blue(&self) -> f32 {
        self.b as f32 / 255.0
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.alpha()]
    }
}

fn hex_prefix(input: &str) -> IResult<&str, Option<&str>> {
    opt(alt((tag("0x"), tag("0X")))).parse(input)
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(0, 6, |c: char| c.is_ascii_hexdigit()).parse(input)
}

pub fn parse_hex_color(input: &str) -> IResult<&str, HexColor> {
    let (input, _) = opt(char('#')).parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = hex_prefix(input)?;
    let (input, digits) = hex_digits(input)?;

    // at most 6 digits, always fits into 24 bits
    let rgb = u32::from_str_radix(digits, 16).unwrap_or_default();
    Ok((input, HexColor::from_rgb24(rgb)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_test() {
        let (remain, color) = parse_hex_color("#2ecc71").unwrap();
        assert_eq!(remain, "");
        assert_eq!(
            color,
            HexColor {
                r: 0x2e,
                g: 0xcc,
                b: 0x71
            }
        );
    }

    #[test]
    fn prefix_is_optional() {
        for hex in ["ffffff", "000000", "1a2B3c", "e74c3c"] {
            assert_eq!(HexColor::parse(hex), HexColor::parse(&format!("#{hex}")));
        }
    }

    #[test]
    fn unit_channels_match_bytes() {
        let color = HexColor::parse("#80ff01");
        assert_eq!(color.red(), 0x80 as f32 / 255.0);
        assert_eq!(color.green(), 1.0);
        assert_eq!(color.blue(), 1.0 / 255.0);
        assert_eq!(color.alpha(), 255);
    }

    #[test]
    fn every_byte_value_round_trips_through_channels() {
        for v in 0..=255u32 {
            let color = HexColor::parse(&format!("{v:02x}{v:02x}{v:02x}"));
            assert_eq!(color.to_rgba8(), [v as u8, v as u8, v as u8, 255]);
            assert_eq!(color.red(), v as f32 / 255.0);
        }
    }

    #[test]
    fn stops_at_first_non_hex_char() {
        let (remain, color) = parse_hex_color("#12zz").unwrap();
        assert_eq!(remain, "zz");
        assert_eq!(color, HexColor::from_rgb24(0x12));

        // "d" is a hex digit, so this is 0x000BAD
        assert_eq!(HexColor::parse("bad"), HexColor::from_rgb24(0xBAD));
    }

    #[test]
    fn garbage_is_black() {
        assert_eq!(HexColor::parse("zzz"), HexColor::BLACK);
        assert_eq!(HexColor::parse(""), HexColor::BLACK);
        assert_eq!(HexColor::parse("#"), HexColor::BLACK);
    }

    #[test]
    fn extra_digits_are_ignored() {
        let (remain, color) = parse_hex_color("11223344").unwrap();
        assert_eq!(remain, "44");
        assert_eq!(color, HexColor::from_rgb24(0x112233));
    }

    #[test]
    fn scanner_prefixes() {
        assert_eq!(HexColor::parse("0xff0000"), HexColor { r: 255, g: 0, b: 0 });
        assert_eq!(HexColor::parse("# 00ff00"), HexColor { r: 0, g: 255, b: 0 });
    }
}
