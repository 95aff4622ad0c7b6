//! basic-gen — smallest end-to-end example of the tensor-field street
//! generator: build a field, grow a graph, dump it to CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use st_core::{GraphRng, Vec2};
use st_field::TensorField;
use st_graph::{GenerationConfig, GraphObserver, GrowthStyle, Road, SeedMethod, StreetGraph};
use st_render::csv::write_snapshot;
use st_render::Snapshot;

const REGION_SIZE: f32 = 200.0;
const FIELD_RESOLUTION: usize = 64;
const D_SEP: f32 = 6.0;
const SEED_COUNT: usize = 12;
const RNG_SEED: u64 = 42;

/// Prints a line per grown road, mirroring the teacher's counting observer.
struct CountingObserver {
    seeds_started: usize,
    roads_grown: usize,
}

impl GraphObserver for CountingObserver {
    fn on_seed_start(&mut self, seed: Vec2) {
        self.seeds_started += 1;
        log::debug!("seed {} started at {seed}", self.seeds_started);
    }

    fn on_road_grown(&mut self, road: &Road) {
        self.roads_grown += 1;
        log::debug!(
            "road {} grown: {} segments, path length {:.2}",
            road.id,
            road.segments.len(),
            road.path_length
        );
    }

    fn on_generate_end(&mut self) {
        log::info!("generation finished: {} seeds, {} roads", self.seeds_started, self.roads_grown);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== basic-gen — tensor-field street network ===");
    println!("Region: {REGION_SIZE}x{REGION_SIZE}  |  Field: {FIELD_RESOLUTION}x{FIELD_RESOLUTION}  |  d_sep: {D_SEP}");

    // 1. Build a field: a dominant east-west basis plus a radial swirl around
    // the region's center, so streets both run straight and curve inward.
    let mut field = TensorField::new(FIELD_RESOLUTION, FIELD_RESOLUTION);
    field.fill_grid(0.0, 1.0, Vec2::new(0.5, 0.5), 0.3);
    field.fill_radial(Vec2::new(0.5, 0.5), 2.0);
    let degenerate = field.compute_eigen()?;
    println!("Field eigen-decomposed: {degenerate} degenerate cells");

    // 2. Configure and run generation.
    let config = GenerationConfig::region(Vec2::ZERO, Vec2::new(REGION_SIZE, REGION_SIZE), D_SEP)
        .with_seed_method(SeedMethod::DensityConstrained { count: SEED_COUNT, d_sep: D_SEP })
        .with_growth_style(GrowthStyle::OppositePair);
    let mut rng = GraphRng::new(RNG_SEED);
    let mut graph = StreetGraph::new(config.bottom_left, config.top_right, config.d_sep);
    let mut observer = CountingObserver { seeds_started: 0, roads_grown: 0 };

    let t0 = Instant::now();
    graph.generate(&field, &config, &mut rng, &mut observer)?;
    let elapsed = t0.elapsed();

    println!("Generated in {:.3} s", elapsed.as_secs_f64());
    println!("  nodes: {}", graph.nodes().len());
    println!("  roads: {}", graph.roads().len());
    println!("  seeds: {}", graph.seeds().len());

    // 3. Dump a snapshot to CSV for inspection.
    let out_dir = Path::new("output/basic-gen");
    std::fs::create_dir_all(out_dir)?;
    let snapshot = Snapshot::new(&graph, &field);
    write_snapshot(&snapshot, out_dir)?;
    println!();
    println!("Wrote {}/nodes.csv and roads.csv", out_dir.display());

    Ok(())
}
