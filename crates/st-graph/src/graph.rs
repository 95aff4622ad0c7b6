//! The planar street graph: nodes, roads, and incremental growth.
//!
//! Node/road ownership follows an arena-plus-integer-id model rather than
//! cyclic pointers: `nodes`/`roads` are dense `HashMap`s keyed by
//! [`NodeId`]/[`RoadId`], and every cross-reference between them is an id,
//! resolved back through the owning `StreetGraph`.

use std::collections::HashMap;

use st_core::{NodeId, RoadId, Vec2};
use st_field::TensorField;

use crate::config::{GenerationConfig, GrowthStyle};
use crate::error::{GraphError, GraphResult};
use crate::observer::GraphObserver;
use crate::seed;
use crate::trace::{StepOutcome, StopReason, StreamlineStepper};

/// Classification carried over from the reference; this crate draws no
/// functional distinction between the two today.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoadType {
    Principal,
    Secondary,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    pub connected_node_ids: Vec<NodeId>,
    pub connected_road_ids: Vec<RoadId>,
}

#[derive(Clone, Debug)]
pub struct Road {
    pub id: RoadId,
    pub kind: RoadType,
    pub segments: Vec<Vec2>,
    pub node_id_start: NodeId,
    pub node_id_end: NodeId,
    pub path_length: f32,
    pub straight_length: f32,
}

fn polyline_length(segments: &[Vec2]) -> f32 {
    segments.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

fn straight_length(segments: &[Vec2]) -> f32 {
    match (segments.first(), segments.last()) {
        (Some(&a), Some(&b)) => (b - a).length(),
        _ => 0.0,
    }
}

fn det_point_line(a: Vec2, b: Vec2, m: Vec2) -> f32 {
    (b - a).cross(m - a)
}

/// Line-segment intersection via Cramer's rule, returning `None` when the
/// lines are parallel or the intersection falls outside either segment.
fn compute_intersection(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Option<Vec2> {
    let denom = (b - a).cross(d - c);
    if st_core::fuzzy_null(denom) {
        return None;
    }
    let det_ab = a.cross(b);
    let det_cd = c.cross(d);
    let out = Vec2::new(
        Vec2::new(det_ab, det_cd).cross(Vec2::new(a.x - b.x, c.x - d.x)),
        Vec2::new(det_ab, det_cd).cross(Vec2::new(a.y - b.y, c.y - d.y)),
    ) * (1.0 / denom);
    if (out - a).dot(b - a) > 0.0 && (out - b).dot(a - b) > 0.0 {
        Some(out)
    } else {
        None
    }
}

/// Bounded planar graph of nodes and roads, built incrementally by
/// streamline growth.
pub struct StreetGraph {
    bottom_left: Vec2,
    top_right: Vec2,
    d_sep: f32,
    last_node_id: u32,
    last_road_id: u32,
    nodes: HashMap<NodeId, Node>,
    roads: HashMap<RoadId, Road>,
    seeds: Vec<Vec2>,
}

impl StreetGraph {
    pub fn new(bottom_left: Vec2, top_right: Vec2, d_sep: f32) -> Self {
        StreetGraph {
            bottom_left,
            top_right,
            d_sep,
            last_node_id: 0,
            last_road_id: 0,
            nodes: HashMap::new(),
            roads: HashMap::new(),
            seeds: Vec::new(),
        }
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.bottom_left
    }

    pub fn top_right(&self) -> Vec2 {
        self.top_right
    }

    pub fn d_sep(&self) -> f32 {
        self.d_sep
    }

    pub fn nodes(&self) -> &HashMap<NodeId, Node> {
        &self.nodes
    }

    pub fn roads(&self) -> &HashMap<RoadId, Road> {
        &self.roads
    }

    pub fn seeds(&self) -> &[Vec2] {
        &self.seeds
    }

    /// Empty the graph and reset id counters. Ids are never reused once a
    /// graph has generated roads without an intervening `clear`.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roads.clear();
        self.seeds.clear();
        self.last_node_id = 0;
        self.last_road_id = 0;
    }

    fn alloc_node(&mut self, position: Vec2) -> NodeId {
        let id = NodeId(self.last_node_id);
        self.last_node_id += 1;
        self.nodes.insert(
            id,
            Node { id, position, connected_node_ids: Vec::new(), connected_road_ids: Vec::new() },
        );
        id
    }

    fn alloc_road(&mut self, kind: RoadType, node_start: NodeId) -> RoadId {
        let id = RoadId(self.last_road_id);
        self.last_road_id += 1;
        self.roads.insert(
            id,
            Road {
                id,
                kind,
                segments: Vec::new(),
                node_id_start: node_start,
                node_id_end: NodeId::INVALID,
                path_length: 0.0,
                straight_length: 0.0,
            },
        );
        id
    }

    /// Clear, generate seeds per `config.seed_method`, then grow one or two
    /// roads from each seed per `config.growth_style`, alternating the
    /// major/minor eigenvector between successive seeds.
    pub fn generate<O: GraphObserver>(
        &mut self,
        field: &TensorField,
        config: &GenerationConfig,
        rng: &mut st_core::GraphRng,
        observer: &mut O,
    ) -> GraphResult<()> {
        if !field.is_eigen_cached() {
            return Err(GraphError::FieldNotReady(st_field::FieldError::EigenNotComputed));
        }
        if config.w_region() <= 0.0 || config.h_region() <= 0.0 {
            return Err(GraphError::EmptyRegion);
        }

        self.clear();
        self.bottom_left = config.bottom_left;
        self.top_right = config.top_right;
        self.d_sep = config.d_sep;
        self.seeds = seed::generate(&config.seed_method, config.bottom_left, config.top_right, rng);

        let mut use_major = true;
        // Iterate by index: growth may append new seeds (re-seeding), and
        // those newly-appended seeds are visited in the same pass, exactly
        // as the reference's growing `mSeeds` vector inside its own loop.
        let mut k = 0;
        while k < self.seeds.len() {
            let position = self.seeds[k];
            observer.on_seed_start(position);
            let start_node = self.alloc_node(position);

            match config.growth_style {
                GrowthStyle::MajorOnly => {
                    self.grow_one(field, start_node, true, false, true, false, observer)?;
                }
                GrowthStyle::AlternatingSingle => {
                    self.grow_one(field, start_node, use_major, false, true, false, observer)?;
                }
                GrowthStyle::OppositePair => {
                    self.grow_one(field, start_node, use_major, false, true, true, observer)?;
                    self.grow_one(field, start_node, use_major, true, true, true, observer)?;
                }
            }

            use_major = !use_major;
            k += 1;
        }

        observer.on_generate_end();
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn grow_one<O: GraphObserver>(
        &mut self,
        field: &TensorField,
        start_node: NodeId,
        use_major: bool,
        reverse_first: bool,
        enforce_max_length: bool,
        connect: bool,
        observer: &mut O,
    ) -> GraphResult<()> {
        let start_pos = self.nodes[&start_node].position;
        let road_id = self.alloc_road(RoadType::Principal, start_node);
        self.nodes.get_mut(&start_node).unwrap().connected_road_ids.push(road_id);

        let mut stepper = StreamlineStepper::new(
            field, start_pos, self.bottom_left, self.top_right, self.d_sep, use_major,
            reverse_first, enforce_max_length,
        );

        let stop_reason = loop {
            match stepper.propose()? {
                StepOutcome::Stop(reason) => break reason,
                StepOutcome::Continue(p_next) => {
                    if connect {
                        if let Some((met_road_id, seg_index, point)) =
                            self.meets_other_road(road_id, start_node, stepper.segments(), p_next)
                        {
                            stepper.commit(point);
                            let segments = stepper.into_segments();
                            self.finish_by_connecting(road_id, segments, met_road_id, seg_index)?;
                            observer.on_road_grown(&self.roads[&road_id]);
                            return Ok(());
                        }
                    }
                    stepper.commit(p_next);
                }
            }
        };

        let segments = stepper.into_segments();
        let end_node = self.alloc_node(*segments.last().unwrap());
        self.finish_with_end_node(road_id, segments, end_node);

        if matches!(stop_reason, StopReason::Length) {
            self.reseed_if_far_enough(end_node);
        }
        if matches!(stop_reason, StopReason::Runaway) {
            log::debug!("road {road_id} hit the iteration cap; finalized without re-seeding");
        }

        observer.on_road_grown(&self.roads[&road_id]);
        Ok(())
    }

    fn reseed_if_far_enough(&mut self, node: NodeId) {
        let pos = self.nodes[&node].position;
        let threshold = self.d_sep / 4.0;
        if self.seeds.iter().all(|&s| (pos - s).length() >= threshold) {
            self.seeds.push(pos);
        }
    }

    fn finish_with_end_node(&mut self, road_id: RoadId, segments: Vec<Vec2>, end_node: NodeId) {
        let start_node = self.roads[&road_id].node_id_start;
        let path_length = polyline_length(&segments);
        let straight = straight_length(&segments);

        let road = self.roads.get_mut(&road_id).unwrap();
        road.segments = segments;
        road.node_id_end = end_node;
        road.path_length = path_length;
        road.straight_length = straight;

        self.nodes.get_mut(&end_node).unwrap().connected_road_ids.push(road_id);
        if start_node != end_node {
            self.nodes.get_mut(&start_node).unwrap().connected_node_ids.push(end_node);
            self.nodes.get_mut(&end_node).unwrap().connected_node_ids.push(start_node);
        }
    }

    /// Find the closest point (by distance from the current endpoint) at
    /// which the about-to-be-appended segment `[p, p_next]` crosses another
    /// road not already connected to `start_node`. The reference stops at
    /// the first crossing found; we scan every candidate and keep the
    /// nearest, which is the variant the redesign notes prefer.
    fn meets_other_road(
        &self,
        road_id: RoadId,
        start_node: NodeId,
        current_segments: &[Vec2],
        p_next: Vec2,
    ) -> Option<(RoadId, usize, Vec2)> {
        let p = *current_segments.last().unwrap();
        let excluded = &self.nodes[&start_node].connected_road_ids;

        let mut best: Option<(RoadId, usize, Vec2, f32)> = None;
        for (&rid, road) in &self.roads {
            if rid == road_id || excluded.contains(&rid) || road.segments.len() < 2 {
                continue;
            }
            for j in 1..road.segments.len() {
                let a = road.segments[j - 1];
                let b = road.segments[j];
                let side_p = det_point_line(a, b, p);
                let side_next = det_point_line(a, b, p_next);
                if side_p * side_next < 0.0 {
                    if let Some(point) = compute_intersection(a, b, p, p_next) {
                        let dist = (point - p).length();
                        if best.as_ref().is_none_or(|&(_, _, _, d)| dist < d) {
                            best = Some((rid, j, point, dist));
                        }
                    }
                }
            }
        }
        best.map(|(rid, j, point, _)| (rid, j, point))
    }

    /// Finalize a road that met another one: identify with the met road's
    /// endpoint if the crossing landed on it, otherwise split the met road
    /// and insert a new node at the intersection.
    fn finish_by_connecting(
        &mut self,
        road_id: RoadId,
        segments: Vec<Vec2>,
        met_road_id: RoadId,
        seg_index: usize,
    ) -> GraphResult<()> {
        let met = self.roads.get(&met_road_id).ok_or(GraphError::RoadNotFound(met_road_id))?.clone();

        let end_node = if seg_index == 0 {
            met.node_id_start
        } else if seg_index == met.segments.len() - 1 {
            met.node_id_end
        } else {
            self.split_road_at(&met, met_road_id, seg_index, *segments.last().unwrap())?
        };

        self.finish_with_end_node(road_id, segments, end_node);
        Ok(())
    }

    /// Split `met_road_id` into two roads at `point` (which lies strictly
    /// between `met.segments[seg_index - 1]` and `met.segments[seg_index]`),
    /// inserting a new node there. Returns the new node's id.
    fn split_road_at(
        &mut self,
        met: &Road,
        met_road_id: RoadId,
        seg_index: usize,
        point: Vec2,
    ) -> GraphResult<NodeId> {
        let new_node_id = self.alloc_node(point);
        let new_road_id = self.alloc_road(met.kind, new_node_id);

        let first_segments: Vec<Vec2> =
            met.segments[..seg_index].iter().copied().chain(std::iter::once(point)).collect();
        let second_segments: Vec<Vec2> =
            std::iter::once(point).chain(met.segments[seg_index..].iter().copied()).collect();

        {
            let path_length = polyline_length(&first_segments);
            let straight = straight_length(&first_segments);
            let road = self.roads.get_mut(&met_road_id).unwrap();
            road.segments = first_segments;
            road.node_id_end = new_node_id;
            road.path_length = path_length;
            road.straight_length = straight;
        }
        {
            let path_length = polyline_length(&second_segments);
            let straight = straight_length(&second_segments);
            let road = self.roads.get_mut(&new_road_id).unwrap();
            road.segments = second_segments;
            road.node_id_end = met.node_id_end;
            road.path_length = path_length;
            road.straight_length = straight;
        }

        {
            let new_node = self.nodes.get_mut(&new_node_id).unwrap();
            new_node.connected_road_ids.push(met_road_id);
            new_node.connected_road_ids.push(new_road_id);
            new_node.connected_node_ids.push(met.node_id_start);
            new_node.connected_node_ids.push(met.node_id_end);
        }
        if let Some(near) = self.nodes.get_mut(&met.node_id_start) {
            near.connected_node_ids.retain(|&n| n != met.node_id_end);
            near.connected_node_ids.push(new_node_id);
        }
        if let Some(far) = self.nodes.get_mut(&met.node_id_end) {
            if let Some(pos) = far.connected_road_ids.iter().position(|&r| r == met_road_id) {
                far.connected_road_ids[pos] = new_road_id;
            }
            far.connected_node_ids.retain(|&n| n != met.node_id_start);
            far.connected_node_ids.push(new_node_id);
        }

        Ok(new_node_id)
    }
}
