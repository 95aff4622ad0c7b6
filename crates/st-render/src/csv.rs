//! Write-only CSV dump of a snapshot's nodes and roads, for headless
//! inspection and testing without a renderer. Not a persistence format the
//! crate reads back — see the module-level Non-goals.
//!
//! Creates two files in the configured output directory:
//! - `nodes.csv`
//! - `roads.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::RenderResult;
use crate::snapshot::Snapshot;

/// Dumps a [`Snapshot`] to `nodes.csv` and `roads.csv` in `dir`.
pub fn write_snapshot(snapshot: &Snapshot, dir: &Path) -> RenderResult<()> {
    let mut nodes = Writer::from_path(dir.join("nodes.csv"))?;
    nodes.write_record(["id", "x", "y", "connected_roads"])?;
    for node in snapshot.nodes().values() {
        nodes.write_record(&[
            node.id.index().to_string(),
            node.position.x.to_string(),
            node.position.y.to_string(),
            node.connected_road_ids.len().to_string(),
        ])?;
    }
    nodes.flush()?;

    let mut roads = Writer::from_path(dir.join("roads.csv"))?;
    roads.write_record([
        "id",
        "node_start",
        "node_end",
        "segment_count",
        "path_length",
        "straight_length",
    ])?;
    for road in snapshot.roads().values() {
        roads.write_record(&[
            road.id.index().to_string(),
            road.node_id_start.index().to_string(),
            road.node_id_end.index().to_string(),
            road.segments.len().to_string(),
            road.path_length.to_string(),
            road.straight_length.to_string(),
        ])?;
    }
    roads.flush()?;

    Ok(())
}
