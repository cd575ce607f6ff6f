//! Integration tests for the uigfx crates.
//!
//! End-to-end checks that cross crate boundaries: color conversion through
//! the registry and connectors, the interpolation reference table, matrix
//! mapping of geometry, and serde round trips.

pub mod golden;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uigfx_color::math::Adaptation;
    use uigfx_color::primaries::illuminant;
    use uigfx_color::{lerp, Color, ColorSpaceId, ColorSpaces, RenderIntent};
    use uigfx_core::{Offset, Rect};
    use uigfx_math::Matrix;

    /// Every registered space can carry a mid-gamut sRGB color and give it back.
    #[test]
    fn test_convert_through_every_space() {
        let colors = [
            Color::from_argb(0xFF8A7360),
            Color::from_argb(0xFF5F7F8F),
            Color::GRAY,
            Color::from_argb(0x80404040),
        ];
        for color in colors {
            for id in ColorSpaceId::ALL {
                let there = color.convert(id);
                assert_eq!(there.color_space_id(), id);
                let back = there.convert(ColorSpaceId::Srgb);
                assert_eq!(back.to_argb(), color.to_argb(), "{} through {}", color, id);
            }
        }
    }

    /// Conversions preserve the wider gamut when the destination has one.
    #[test]
    fn test_wide_gamut_survives() {
        let p3_red = Color::from_components(1.0, 0.0, 0.0, 1.0, ColorSpaceId::DisplayP3).unwrap();

        // Clipped in sRGB
        assert_eq!(p3_red.to_argb(), 0xFFFF0000);

        // Kept in extended sRGB, outside [0, 1]
        let ext = p3_red.convert(ColorSpaceId::LinearExtendedSrgb);
        assert!(ext.red() > 1.0);
        assert!(ext.green() < 0.0);

        let back = ext.convert(ColorSpaceId::DisplayP3);
        assert!((back.red() - 1.0).abs() < 2e-3);
        assert!(back.green().abs() < 2e-3);
    }

    #[test]
    fn test_lerp_midpoint_in_oklab() {
        let mid = lerp(Color::BLACK, Color::WHITE, 0.5);
        let oklab = mid.convert(ColorSpaceId::Oklab);
        // Oklab lightness is perceptual: half way is L = 0.5
        assert!((oklab.red() - 0.5).abs() < 5e-3, "{}", oklab);
        assert!(oklab.green().abs() < 2e-3);
        assert!(oklab.blue().abs() < 2e-3);
    }

    #[test]
    fn test_lerp_keeps_stop_space() {
        let start = Color::RED.convert(ColorSpaceId::Bt2020);
        let stop = Color::BLUE.convert(ColorSpaceId::AdobeRgb);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(lerp(start, stop, t).color_space_id(), ColorSpaceId::AdobeRgb);
        }
        let end = lerp(start, stop, 1.0);
        assert!((end.luminance() - stop.luminance()).abs() < 2e-3, "{} vs {}", end, stop);
    }

    #[test]
    fn test_composite_chain() {
        let veil = Color::new(0.0, 0.0, 0.0, 0.25).unwrap();
        let once = veil.composite_over(Color::WHITE);
        let twice = veil.composite_over(once);
        assert!(twice.luminance() < once.luminance());
        assert!(once.luminance() < Color::WHITE.luminance());
        assert_relative_eq!(twice.alpha(), 1.0);
    }

    #[test]
    fn test_absolute_intent_differs() {
        let dci = ColorSpaces::get(ColorSpaceId::DciP3);
        let srgb = ColorSpaces::srgb();
        let relative = dci.connect(srgb, RenderIntent::Relative).transform([1.0, 1.0, 1.0]);
        let absolute = dci.connect(srgb, RenderIntent::Absolute).transform([1.0, 1.0, 1.0]);

        // Relative maps white to white
        for c in relative {
            assert!((c - 1.0).abs() < 2e-3);
        }
        // Absolute keeps the greenish DCI white
        assert!(absolute[1] > absolute[0]);
        assert!(absolute[1] > absolute[2]);
    }

    #[test]
    fn test_match_registered_space() {
        let p3 = ColorSpaces::get(ColorSpaceId::DisplayP3);
        let d50 = p3.adapt(illuminant::D50, Adaptation::Bradford);
        let rgb = d50.as_rgb().unwrap();
        let params = rgb.transfer_parameters().unwrap();
        let found = ColorSpaces::match_rgb(&rgb.transform(), &params).unwrap();
        assert_eq!(found.id(), ColorSpaceId::DisplayP3.id());
    }

    #[test]
    fn test_matrix_maps_geometry() {
        let mut m = Matrix::new();
        m.rotate_z(90.0);
        m.scale(2.0, 2.0, 1.0);
        let r = m.map_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!((r.left + 20.0).abs() < 1e-3);
        assert!((r.bottom - 20.0).abs() < 1e-3);

        let mut inv = m;
        inv.invert();
        let p = inv.map(m.map(Offset::new(3.0, 4.0)));
        assert!((p.x - 3.0).abs() < 1e-4);
        assert!((p.y - 4.0).abs() < 1e-4);
    }

    // ========================================================================
    // Serde
    // ========================================================================

    #[test]
    fn test_serde_color() {
        let p3 = Color::from_components(0.25, 0.5, 0.75, 1.0, ColorSpaceId::DisplayP3).unwrap();
        for color in [Color::RED, Color::UNSPECIFIED, Color::TRANSPARENT, p3] {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, color.value().to_string());
            let back: Color = serde_json::from_str(&json).unwrap();
            assert_eq!(back, color);
        }

        // Unknown id
        assert!(serde_json::from_str::<Color>("63").is_err());
    }

    #[test]
    fn test_serde_ids_and_intents() {
        let json = serde_json::to_string(&ColorSpaceId::DisplayP3).unwrap();
        assert_eq!(json, "\"display-p3\"");
        let back: ColorSpaceId = serde_json::from_str("\"pro-photo-rgb\"").unwrap();
        assert_eq!(back, ColorSpaceId::ProPhotoRgb);

        let json = serde_json::to_string(&RenderIntent::Absolute).unwrap();
        assert_eq!(json, "\"absolute\"");
    }

    #[test]
    fn test_serde_geometry() {
        let mut m = Matrix::new();
        m.translate(3.0, 4.0, 0.0);
        let json = serde_json::to_string(&m).unwrap();
        let back: Matrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let back: Rect = serde_json::from_str(&serde_json::to_string(&r).unwrap()).unwrap();
        assert_eq!(back, r);

        let o = Offset::new(-1.5, 2.5);
        let back: Offset = serde_json::from_str(&serde_json::to_string(&o).unwrap()).unwrap();
        assert_eq!(back, o);
    }
}
