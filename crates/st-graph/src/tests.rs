//! Unit tests for st-graph. Tests on `StreetGraph`'s private internals
//! (intersection math, road splitting) live inline in `graph.rs`; this file
//! covers the smaller public modules.

#[cfg(test)]
mod seed {
    use st_core::{GraphRng, Vec2};

    use crate::seed::{generate, SeedMethod};

    #[test]
    fn grid_covers_the_region_at_half_spacing_offsets() {
        let bottom_left = Vec2::new(0.0, 0.0);
        let top_right = Vec2::new(10.0, 10.0);
        let mut rng = GraphRng::new(1);
        let seeds = generate(&SeedMethod::Grid { d_sep: 5.0 }, bottom_left, top_right, &mut rng);
        assert_eq!(seeds.len(), 4);
        assert!(seeds.contains(&Vec2::new(2.5, 2.5)));
        assert!(seeds.contains(&Vec2::new(7.5, 7.5)));
    }

    #[test]
    fn grid_with_nonpositive_spacing_yields_no_seeds() {
        let mut rng = GraphRng::new(1);
        let seeds = generate(
            &SeedMethod::Grid { d_sep: 0.0 },
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            &mut rng,
        );
        assert!(seeds.is_empty());
    }

    #[test]
    fn uniform_samples_stay_inside_the_region() {
        let bottom_left = Vec2::new(-5.0, -5.0);
        let top_right = Vec2::new(5.0, 5.0);
        let mut rng = GraphRng::new(42);
        let seeds = generate(&SeedMethod::Uniform { count: 50 }, bottom_left, top_right, &mut rng);
        assert_eq!(seeds.len(), 50);
        for s in seeds {
            assert!(s.x >= bottom_left.x && s.x <= top_right.x);
            assert!(s.y >= bottom_left.y && s.y <= top_right.y);
        }
    }

    #[test]
    fn density_constrained_never_places_seeds_closer_than_d_sep() {
        let bottom_left = Vec2::new(0.0, 0.0);
        let top_right = Vec2::new(20.0, 20.0);
        let d_sep = 3.0;
        let mut rng = GraphRng::new(7);
        let seeds = generate(
            &SeedMethod::DensityConstrained { count: 30, d_sep },
            bottom_left,
            top_right,
            &mut rng,
        );
        for i in 0..seeds.len() {
            for j in (i + 1)..seeds.len() {
                assert!((seeds[i] - seeds[j]).length() >= d_sep - 1e-4);
            }
        }
    }

    #[test]
    fn method_index_decodes_the_three_documented_variants() {
        assert!(matches!(SeedMethod::try_from(0).unwrap(), SeedMethod::Grid { .. }));
        assert!(matches!(SeedMethod::try_from(1).unwrap(), SeedMethod::Uniform { .. }));
        assert!(matches!(
            SeedMethod::try_from(2).unwrap(),
            SeedMethod::DensityConstrained { .. }
        ));
    }

    #[test]
    fn method_index_rejects_anything_past_two() {
        assert!(SeedMethod::try_from(3).is_err());
        assert!(SeedMethod::try_from(255).is_err());
    }
}

#[cfg(test)]
mod config {
    use st_core::Vec2;

    use crate::config::{GenerationConfig, GrowthStyle};
    use crate::seed::SeedMethod;

    #[test]
    fn region_has_sane_defaults() {
        let config = GenerationConfig::region(Vec2::ZERO, Vec2::new(10.0, 20.0), 2.0);
        assert_eq!(config.growth_style, GrowthStyle::AlternatingSingle);
        assert!(matches!(config.seed_method, SeedMethod::Grid { d_sep } if d_sep == 2.0));
        assert_eq!(config.h_region(), 20.0);
        assert_eq!(config.w_region(), 10.0);
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = GenerationConfig::region(Vec2::ZERO, Vec2::new(10.0, 10.0), 2.0)
            .with_seed_method(SeedMethod::Uniform { count: 5 })
            .with_growth_style(GrowthStyle::OppositePair);
        assert_eq!(config.growth_style, GrowthStyle::OppositePair);
        assert!(matches!(config.seed_method, SeedMethod::Uniform { count: 5 }));
    }
}

#[cfg(test)]
mod trace {
    use st_core::Vec2;

    use crate::trace::{field_index, step_length, strictly_inside};

    #[test]
    fn strictly_inside_excludes_the_boundary() {
        let bl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(10.0, 10.0);
        assert!(strictly_inside(Vec2::new(5.0, 5.0), bl, tr));
        assert!(!strictly_inside(Vec2::new(0.0, 5.0), bl, tr));
        assert!(!strictly_inside(Vec2::new(10.0, 5.0), bl, tr));
    }

    #[test]
    fn field_index_maps_corners_exactly() {
        let bl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(10.0, 10.0);
        assert_eq!(field_index(bl, bl, tr, 5, 5), (0, 0));
        assert_eq!(field_index(tr, bl, tr, 5, 5), (4, 4));
        assert_eq!(field_index(Vec2::new(5.0, 5.0), bl, tr, 5, 5), (2, 2));
    }

    #[test]
    fn field_index_clamps_out_of_range_points() {
        let bl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(10.0, 10.0);
        assert_eq!(field_index(Vec2::new(-5.0, -5.0), bl, tr, 5, 5), (0, 0));
        assert_eq!(field_index(Vec2::new(50.0, 50.0), bl, tr, 5, 5), (4, 4));
    }

    #[test]
    fn step_length_is_one_hundredth_of_region_height() {
        let bl = Vec2::new(0.0, 0.0);
        let tr = Vec2::new(5.0, 200.0);
        assert_eq!(step_length(bl, tr), 2.0);
    }
}
