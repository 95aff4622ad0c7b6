//! Read-only view of a street graph and its field, for drawing or dumping.

use std::collections::HashMap;

use st_core::{NodeId, RoadId, Vec2};
use st_field::TensorField;
use st_graph::{Node, Road, StreetGraph};

/// Borrows everything a renderer needs from a generation run: the graph's
/// nodes, roads, and seeds, the region bounds, and the field's eigen grid.
///
/// Valid only until the next mutating call on the graph or field it
/// borrows from — a host wanting to keep this around (e.g. across a UI
/// redraw) should take a new snapshot each time rather than hold one.
pub struct Snapshot<'a> {
    graph: &'a StreetGraph,
    field: &'a TensorField,
}

impl<'a> Snapshot<'a> {
    pub fn new(graph: &'a StreetGraph, field: &'a TensorField) -> Self {
        Snapshot { graph, field }
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.graph.bottom_left()
    }

    pub fn top_right(&self) -> Vec2 {
        self.graph.top_right()
    }

    pub fn nodes(&self) -> &'a HashMap<NodeId, Node> {
        self.graph.nodes()
    }

    pub fn roads(&self) -> &'a HashMap<RoadId, Road> {
        self.graph.roads()
    }

    pub fn seeds(&self) -> &'a [Vec2] {
        self.graph.seeds()
    }

    /// Field eigen grid dimensions, `(rows, cols)`.
    pub fn field_shape(&self) -> (usize, usize) {
        (self.field.rows(), self.field.cols())
    }

    /// Major eigenvector at field cell `(i, j)`, or `Vec2::ZERO` if the
    /// field has no eigen cache or the cell is degenerate.
    pub fn major_eigenvector_at(&self, i: usize, j: usize) -> Vec2 {
        self.field.major_eigenvector(i, j).unwrap_or(Vec2::ZERO)
    }

    /// Minor eigenvector at field cell `(i, j)`, or `Vec2::ZERO` if the
    /// field has no eigen cache or the cell is degenerate.
    pub fn minor_eigenvector_at(&self, i: usize, j: usize) -> Vec2 {
        self.field.minor_eigenvector(i, j).unwrap_or(Vec2::ZERO)
    }
}
