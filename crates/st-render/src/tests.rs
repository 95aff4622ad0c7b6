//! Unit tests for st-render.

#[cfg(test)]
mod coord {
    use st_core::Vec2;

    use crate::coord::CoordMapper;

    #[test]
    fn maps_region_corners_to_image_corners() {
        let mapper = CoordMapper::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0), 800.0, 600.0);
        let (u, v) = mapper.to_image(Vec2::new(0.0, 0.0));
        assert_eq!((u, v), (0.0, 600.0)); // bottom-left world -> bottom-left image row

        let (u, v) = mapper.to_image(Vec2::new(10.0, 20.0));
        assert_eq!((u, v), (800.0, 0.0)); // top-right world -> top row of the image
    }

    #[test]
    fn offsets_for_a_region_not_anchored_at_the_origin() {
        let mapper = CoordMapper::new(Vec2::new(100.0, 100.0), Vec2::new(110.0, 110.0), 100.0, 100.0);
        let (u, v) = mapper.to_image(Vec2::new(105.0, 105.0));
        assert_eq!((u, v), (50.0, 50.0));
    }
}

#[cfg(test)]
mod snapshot {
    use st_core::{GraphRng, Vec2};
    use st_field::TensorField;
    use st_graph::{GenerationConfig, NoopObserver, SeedMethod, StreetGraph};

    use crate::snapshot::Snapshot;

    fn small_graph() -> (StreetGraph, TensorField) {
        let mut field = TensorField::new(16, 16);
        field.fill_grid(0.0, 1.0, Vec2::new(0.5, 0.5), 0.1);
        field.compute_eigen().unwrap();

        let config = GenerationConfig::region(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 2.0)
            .with_seed_method(SeedMethod::Uniform { count: 3 });
        let mut rng = GraphRng::new(11);
        let mut graph = StreetGraph::new(config.bottom_left, config.top_right, config.d_sep);
        graph.generate(&field, &config, &mut rng, &mut NoopObserver).unwrap();
        (graph, field)
    }

    #[test]
    fn borrows_bounds_and_contents_from_the_graph() {
        let (graph, field) = small_graph();
        let snapshot = Snapshot::new(&graph, &field);

        assert_eq!(snapshot.bottom_left(), graph.bottom_left());
        assert_eq!(snapshot.top_right(), graph.top_right());
        assert_eq!(snapshot.nodes().len(), graph.nodes().len());
        assert_eq!(snapshot.roads().len(), graph.roads().len());
        assert_eq!(snapshot.seeds(), graph.seeds());
        assert_eq!(snapshot.field_shape(), (16, 16));
    }

    #[test]
    fn eigenvector_accessors_never_panic_in_range() {
        let (graph, field) = small_graph();
        let snapshot = Snapshot::new(&graph, &field);
        let (rows, cols) = snapshot.field_shape();
        for i in 0..rows {
            for j in 0..cols {
                let _ = snapshot.major_eigenvector_at(i, j);
                let _ = snapshot.minor_eigenvector_at(i, j);
            }
        }
    }
}

#[cfg(all(test, feature = "csv"))]
mod csv_dump {
    use st_core::{GraphRng, Vec2};
    use st_field::TensorField;
    use st_graph::{GenerationConfig, NoopObserver, StreetGraph};

    use crate::csv::write_snapshot;
    use crate::snapshot::Snapshot;

    #[test]
    fn writes_nodes_and_roads_files() {
        let mut field = TensorField::new(16, 16);
        field.fill_grid(0.0, 1.0, Vec2::new(0.5, 0.5), 0.1);
        field.compute_eigen().unwrap();

        let config = GenerationConfig::region(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 2.0);
        let mut rng = GraphRng::new(5);
        let mut graph = StreetGraph::new(config.bottom_left, config.top_right, config.d_sep);
        graph.generate(&field, &config, &mut rng, &mut NoopObserver).unwrap();

        let snapshot = Snapshot::new(&graph, &field);
        let dir = tempfile::tempdir().unwrap();
        write_snapshot(&snapshot, dir.path()).unwrap();

        assert!(dir.path().join("nodes.csv").exists());
        assert!(dir.path().join("roads.csv").exists());
    }
}
