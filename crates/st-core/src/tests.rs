//! Unit tests for st-core primitives.

#[cfg(test)]
mod fuzzy {
    use crate::fuzzy::{fuzzy_eq, fuzzy_null};

    #[test]
    fn zero_is_null() {
        assert!(fuzzy_null(0.0));
        assert!(fuzzy_null(1e-7));
        assert!(!fuzzy_null(1e-3));
    }

    #[test]
    fn eq_is_symmetric() {
        assert!(fuzzy_eq(1.0, 1.0 + 1e-7));
        assert!(fuzzy_eq(1.0 + 1e-7, 1.0));
        assert!(!fuzzy_eq(1.0, 1.1));
    }
}

#[cfg(test)]
mod geom {
    use crate::Vec2;

    #[test]
    fn dot_and_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!((v.dot(v) - 25.0).abs() < 1e-5);
    }

    #[test]
    fn normalized_is_unit() {
        let v = Vec2::new(3.0, 4.0).normalized();
        assert!((v.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
    }

    #[test]
    fn cross_of_perpendiculars() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert!((a.cross(b) - 1.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod ids {
    use crate::{NodeId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(RoadId(100) > RoadId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(RoadId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod rng {
    use crate::GraphRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GraphRng::new(1234);
        let mut b = GraphRng::new(1234);
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = GraphRng::new(7);
        for _ in 0..100 {
            let v: f32 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod tensor {
    use crate::geom::Vec2;
    use crate::tensor::Tensor;
    use std::f32::consts::PI;

    #[test]
    fn zero_tensor_is_degenerate() {
        assert!(Tensor::ZERO.is_degenerate());
        assert_eq!(Tensor::ZERO.eigen().unwrap(), crate::EigenCell::ZERO);
    }

    #[test]
    fn non_symmetric_rejected() {
        let t = Tensor { a: 1.0, b: 2.0, c: 3.0, d: -1.0 };
        assert!(!t.is_symmetric_traceless());
        assert!(t.eigen().is_err());
    }

    #[test]
    fn axis_aligned_eigenvectors() {
        // theta = 0 => a = r, b = 0 => major eigenvector along +x
        let t = Tensor::from_angle(0.0, 1.0);
        let eig = t.eigen().unwrap();
        assert!(eig.major.0.fuzzy_eq(Vec2::new(1.0, 0.0)) || eig.major.0.fuzzy_eq(Vec2::new(-1.0, 0.0)));
        assert!((eig.major.1 - 1.0).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_eigenvectors() {
        // theta = pi/4 => major eigenvector along 45 degrees
        let t = Tensor::from_angle(PI / 4.0, 1.0);
        let eig = t.eigen().unwrap();
        let expected = Vec2::new((PI / 4.0).cos(), (PI / 4.0).sin());
        assert!(eig.major.0.fuzzy_eq(expected) || eig.major.0.fuzzy_eq(-expected));
    }

    #[test]
    fn eigenvectors_are_orthogonal() {
        let t = Tensor::symmetric(0.6, 0.3);
        let eig = t.eigen().unwrap();
        assert!(eig.major.0.dot(eig.minor.0).abs() < 1e-4);
    }

    #[test]
    fn eigenvalues_are_opposite() {
        let t = Tensor::symmetric(0.6, 0.3);
        let eig = t.eigen().unwrap();
        assert!((eig.major.1 + eig.minor.1).abs() < 1e-4);
    }

    #[test]
    fn add_and_scale() {
        let t = Tensor::symmetric(1.0, 2.0) + Tensor::symmetric(0.5, -0.5);
        assert!((t.a - 1.5).abs() < 1e-5);
        assert!((t.b - 1.5).abs() < 1e-5);
        let scaled = Tensor::symmetric(1.0, 1.0) * 2.0;
        assert!((scaled.a - 2.0).abs() < 1e-5);
    }
}
