//! Logo overlay computation and compositing.
//!
//! The geometry here is pure arithmetic: a size class picks the logo's target
//! width as a fraction of the base width, padding is 2% of the base width, and
//! the position enum anchors the logo in one of the four corners. Pixel work
//! (resize, alpha mask, source-over blend) is delegated to the `image` crate.

use image::{imageops, DynamicImage, GenericImageView, RgbaImage};

use crate::image::resize;

/// Corner anchor for logo placement. Unrecognized values fall back to
/// `BottomRight` rather than failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl LogoPosition {
    /// Parse a wire value, mapping anything unrecognized to the default.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "top-left" => LogoPosition::TopLeft,
            "top-right" => LogoPosition::TopRight,
            "bottom-left" => LogoPosition::BottomLeft,
            _ => LogoPosition::BottomRight,
        }
    }
}

/// Named ratio controlling target logo width relative to base image width.
/// Unrecognized values fall back to `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    /// Parse a wire value, mapping anything unrecognized to the default.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "small" => LogoSize::Small,
            "large" => LogoSize::Large,
            _ => LogoSize::Medium,
        }
    }

    /// Fraction of the base image width the logo should occupy.
    pub fn ratio(self) -> f64 {
        match self {
            LogoSize::Small => 0.12,
            LogoSize::Medium => 0.20,
            LogoSize::Large => 0.30,
        }
    }
}

/// Overlay parameters for a single request.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub position: LogoPosition,
    pub size: LogoSize,
    pub opacity: f32,
}

/// Pixel offsets for the logo's top-left corner on the base image.
///
/// Offsets are deliberately not clamped: when the resized logo plus padding
/// exceeds the base bounds they go negative, and `imageops::overlay` clips
/// the out-of-bounds part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub left: i64,
    pub top: i64,
}

pub struct LogoOverlay;

impl LogoOverlay {
    /// Target logo width: `floor(base_width * ratio)`, at least 1 pixel.
    pub fn target_width(base_width: u32, size: LogoSize) -> u32 {
        ((base_width as f64 * size.ratio()).floor() as u32).max(1)
    }

    /// Margin between the logo and the nearest base-image edge:
    /// `floor(base_width * 0.02)`, uniform regardless of base height.
    pub fn padding(base_width: u32) -> u32 {
        (base_width as f64 * 0.02).floor() as u32
    }

    /// Compute the logo's top-left offsets for a corner anchor.
    /// `logo_width`/`logo_height` are the post-resize logo dimensions.
    pub fn compute_placement(
        base_width: u32,
        base_height: u32,
        logo_width: u32,
        logo_height: u32,
        position: LogoPosition,
    ) -> Placement {
        let pad = Self::padding(base_width) as i64;
        let (base_w, base_h) = (base_width as i64, base_height as i64);
        let (logo_w, logo_h) = (logo_width as i64, logo_height as i64);

        match position {
            LogoPosition::TopLeft => Placement {
                left: pad,
                top: pad,
            },
            LogoPosition::TopRight => Placement {
                left: base_w - logo_w - pad,
                top: pad,
            },
            LogoPosition::BottomLeft => Placement {
                left: pad,
                top: base_h - logo_h - pad,
            },
            LogoPosition::BottomRight => Placement {
                left: base_w - logo_w - pad,
                top: base_h - logo_h - pad,
            },
        }
    }

    /// Scale the logo's alpha channel by `floor(255 * opacity) / 255`.
    ///
    /// `opacity >= 1.0` is a byte-identical passthrough; otherwise the mask
    /// gates the existing alpha (destination-in) and color channels are
    /// preserved.
    pub fn apply_opacity(mut logo: RgbaImage, opacity: f32) -> RgbaImage {
        if opacity >= 1.0 {
            return logo;
        }

        let mask = (255.0 * opacity.max(0.0)).floor() as u32;
        for pixel in logo.pixels_mut() {
            pixel[3] = ((pixel[3] as u32 * mask) / 255) as u8;
        }
        logo
    }

    /// Resize, fade, place, and blend the logo onto the base image.
    ///
    /// The result is RGBA pixel data; re-encoding in the base's source format
    /// is the caller's job (see `codec::encode`).
    pub fn apply(
        base: &DynamicImage,
        logo: &DynamicImage,
        config: &OverlayConfig,
    ) -> Result<DynamicImage, anyhow::Error> {
        let (base_width, base_height) = base.dimensions();

        let target_width = Self::target_width(base_width, config.size);
        let resized = resize::fit_width(logo, target_width);
        let (logo_width, logo_height) = resized.dimensions();

        let logo_rgba = Self::apply_opacity(resized.to_rgba8(), config.opacity);

        let placement = Self::compute_placement(
            base_width,
            base_height,
            logo_width,
            logo_height,
            config.position,
        );

        tracing::debug!(
            base_width,
            base_height,
            logo_width,
            logo_height,
            left = placement.left,
            top = placement.top,
            "Compositing logo onto base image"
        );

        let mut canvas = base.to_rgba8();
        imageops::overlay(&mut canvas, &logo_rgba, placement.left, placement.top);

        Ok(DynamicImage::ImageRgba8(canvas))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid(width: u32, height: u32, pixel: Rgba<u8>) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, pixel))
    }

    #[test]
    fn test_target_width_ratios() {
        assert_eq!(LogoOverlay::target_width(1024, LogoSize::Small), 122);
        assert_eq!(LogoOverlay::target_width(1024, LogoSize::Medium), 204);
        assert_eq!(LogoOverlay::target_width(1024, LogoSize::Large), 307);
        assert_eq!(LogoOverlay::target_width(100, LogoSize::Medium), 20);
    }

    #[test]
    fn test_target_width_floor_is_one() {
        assert_eq!(LogoOverlay::target_width(3, LogoSize::Small), 1);
    }

    #[test]
    fn test_size_parse_fallback_is_medium() {
        assert_eq!(LogoSize::parse("small"), LogoSize::Small);
        assert_eq!(LogoSize::parse("LARGE"), LogoSize::Large);
        assert_eq!(LogoSize::parse("jumbo"), LogoSize::Medium);
        assert_eq!(LogoSize::parse(""), LogoSize::Medium);
    }

    #[test]
    fn test_position_parse_fallback_is_bottom_right() {
        assert_eq!(LogoPosition::parse("top-left"), LogoPosition::TopLeft);
        assert_eq!(LogoPosition::parse(" Top-Right "), LogoPosition::TopRight);
        assert_eq!(LogoPosition::parse("bottom-left"), LogoPosition::BottomLeft);
        assert_eq!(LogoPosition::parse("center"), LogoPosition::BottomRight);
        assert_eq!(LogoPosition::parse(""), LogoPosition::BottomRight);
    }

    #[test]
    fn test_placement_table() {
        // base 1000x800, logo 100x50, pad = floor(1000 * 0.02) = 20
        let cases = [
            (LogoPosition::TopLeft, 20, 20),
            (LogoPosition::TopRight, 1000 - 100 - 20, 20),
            (LogoPosition::BottomLeft, 20, 800 - 50 - 20),
            (LogoPosition::BottomRight, 1000 - 100 - 20, 800 - 50 - 20),
        ];
        for (position, left, top) in cases {
            let placement = LogoOverlay::compute_placement(1000, 800, 100, 50, position);
            assert_eq!(placement, Placement { left, top }, "{position:?}");
        }
    }

    #[test]
    fn test_placement_symmetry_on_square_base() {
        // top-left and bottom-right mirror around the center of a square base
        let tl = LogoOverlay::compute_placement(400, 400, 50, 50, LogoPosition::TopLeft);
        let br = LogoOverlay::compute_placement(400, 400, 50, 50, LogoPosition::BottomRight);
        assert_eq!(tl.left, 8);
        assert_eq!(br.left, 400 - 50 - 8);
        assert_eq!(400 - (br.left + 50), tl.left);
        assert_eq!(400 - (br.top + 50), tl.top);
    }

    #[test]
    fn test_placement_scenario_medium_bottom_right() {
        // 1024x1024 base, medium logo resized to 204 wide (e.g. 102 tall)
        let placement = LogoOverlay::compute_placement(1024, 1024, 204, 102, LogoPosition::BottomRight);
        assert_eq!(placement.left, 1024 - 204 - 20);
        assert_eq!(placement.left, 800);
        assert_eq!(placement.top, 1024 - 102 - 20);
    }

    #[test]
    fn test_placement_is_not_clamped() {
        // logo larger than base: offsets go negative and are passed through
        let placement = LogoOverlay::compute_placement(100, 100, 200, 200, LogoPosition::BottomRight);
        assert_eq!(placement.left, 100 - 200 - 2);
        assert_eq!(placement.top, -102);
    }

    #[test]
    fn test_apply_opacity_full_is_passthrough() {
        let logo = RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 200]));
        let out = LogoOverlay::apply_opacity(logo.clone(), 1.0);
        assert_eq!(out.as_raw(), logo.as_raw());
    }

    #[test]
    fn test_apply_opacity_masks_alpha_preserving_color() {
        let logo = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 200]));
        let out = LogoOverlay::apply_opacity(logo, 0.5);
        // floor(255 * 0.5) = 127; 200 * 127 / 255 = 99
        for pixel in out.pixels() {
            assert_eq!(pixel[0], 10);
            assert_eq!(pixel[1], 20);
            assert_eq!(pixel[2], 30);
            assert_eq!(pixel[3], 99);
        }
    }

    #[test]
    fn test_apply_opacity_zero_is_fully_transparent() {
        let logo = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let out = LogoOverlay::apply_opacity(logo, 0.0);
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_apply_keeps_base_dimensions() {
        let base = solid(200, 150, Rgba([255, 255, 255, 255]));
        let logo = solid(80, 40, Rgba([0, 0, 0, 255]));
        let config = OverlayConfig {
            position: LogoPosition::BottomRight,
            size: LogoSize::Medium,
            opacity: 0.9,
        };
        let out = LogoOverlay::apply(&base, &logo, &config).unwrap();
        assert_eq!(out.dimensions(), (200, 150));
    }

    #[test]
    fn test_apply_with_zero_opacity_leaves_base_untouched() {
        let base = solid(100, 100, Rgba([200, 10, 10, 255]));
        let logo = solid(50, 50, Rgba([0, 0, 255, 255]));
        let config = OverlayConfig {
            position: LogoPosition::TopLeft,
            size: LogoSize::Large,
            opacity: 0.0,
        };
        let out = LogoOverlay::apply(&base, &logo, &config).unwrap();
        assert_eq!(out.to_rgba8().as_raw(), base.to_rgba8().as_raw());
    }

    #[test]
    fn test_apply_places_opaque_logo_pixels() {
        let base = solid(200, 200, Rgba([255, 255, 255, 255]));
        let logo = solid(100, 100, Rgba([0, 0, 0, 255]));
        let config = OverlayConfig {
            position: LogoPosition::TopLeft,
            size: LogoSize::Medium,
            opacity: 1.0,
        };
        // target width = 40, pad = 4: logo covers [4, 44) in both axes
        let out = LogoOverlay::apply(&base, &logo, &config).unwrap().to_rgba8();
        assert_eq!(out.get_pixel(10, 10), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(50, 50), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_apply_tall_logo_is_clipped_not_rejected() {
        // Width-fit resize keeps the logo taller than the base here, so the
        // top offset goes negative and overlay clips instead of failing.
        let base = solid(100, 100, Rgba([255, 255, 255, 255]));
        let logo = solid(10, 400, Rgba([0, 0, 0, 255]));
        let config = OverlayConfig {
            position: LogoPosition::BottomRight,
            size: LogoSize::Medium,
            opacity: 1.0,
        };
        let out = LogoOverlay::apply(&base, &logo, &config).unwrap();
        assert_eq!(out.dimensions(), (100, 100));
    }
}
