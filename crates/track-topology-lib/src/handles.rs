//! Handle computation for classified nodes
//!
//! Everything here is a pure function of a node's position and its neighbors.
//! The graph gathers the neighbor data, calls [`resolve`] and stores the result,
//! so running it again on unchanged input yields the same result.

use crate::utils::{average_direction, flatten_no_resize, vertical_cross};
use crate::{Config, Handle, NodeType, SwitchOrientation};
use glam::Vec3;
use smallvec::{SmallVec, smallvec};

/// What [`resolve`] needs to know about one neighbor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: i64,
    pub position: Vec3,
    /// The neighbor's own handle pointing back at the node being resolved, zero if unresolved
    pub handle_towards: Vec3,
}

/// Classification result for one node
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub kind: NodeType,
    /// Canonical neighbor order, only differs from the input for switches
    pub connected: SmallVec<[i64; 4]>,
    pub handles: SmallVec<[Handle; 4]>,
    pub orientation: SwitchOrientation,
}

/// Classify a node by degree and compute its handles
pub fn resolve(position: Vec3, neighbors: &[Neighbor], config: &Config) -> Resolution {
    let kind = NodeType::from_degree(neighbors.len());
    let mut connected: SmallVec<[i64; 4]> = neighbors.iter().map(|n| n.id).collect();
    let mut orientation = SwitchOrientation::Undefined;

    let handles = match kind {
        NodeType::Empty => SmallVec::new(),
        NodeType::End => smallvec![end_handle(position, &neighbors[0], config)],
        NodeType::Connected => {
            let (first, second) = smooth_handles(
                neighbors[0].position,
                position,
                neighbors[1].position,
                config.handle_length_ratio,
            );
            smallvec![first, second]
        }
        NodeType::Switch => {
            let switch = resolve_switch(position, [&neighbors[0], &neighbors[1], &neighbors[2]]);
            connected = SmallVec::from_slice(&switch.order);
            orientation = switch.orientation;
            SmallVec::from_slice(&switch.handles)
        }
        // Crossings are not resolved, each handle just points at its neighbor
        NodeType::Cross | NodeType::Over4 => neighbors
            .iter()
            .map(|n| Handle::unit(direction_to(position, n.position)))
            .collect(),
    };

    Resolution {
        kind,
        connected,
        handles,
        orientation,
    }
}

#[inline]
fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Handle of a track end
///
/// Aims past the neighbor along the neighbor's own handle so the last piece
/// bends smoothly. With no handle on the neighbor it is a straight line.
fn end_handle(position: Vec3, neighbor: &Neighbor, config: &Config) -> Handle {
    let target = neighbor.position + neighbor.handle_towards * config.end_target_scale;
    let distance = (neighbor.position - position).length();
    Handle::new(
        direction_to(position, target),
        distance * config.handle_length_ratio,
    )
}

/// Smooth handles through `prev -> current -> next`
///
/// The tangent bisects the incoming and outgoing directions and each handle
/// length is `ratio` times the length of its own segment.
///
/// # Returns
/// (handle towards `prev`, handle towards `next`)
pub fn smooth_handles(prev: Vec3, current: Vec3, next: Vec3, ratio: f32) -> (Handle, Handle) {
    let to_prev = prev - current;
    let to_next = next - current;
    let tangent = (to_next.normalize_or_zero() - to_prev.normalize_or_zero()).normalize_or_zero();

    (
        Handle::new(-tangent, to_prev.length() * ratio),
        Handle::new(tangent, to_next.length() * ratio),
    )
}

struct Switch {
    /// Into, through, diverging
    order: [i64; 3],
    handles: [Handle; 3],
    orientation: SwitchOrientation,
}

/// Pick the through pair and diverging branch of a three-way node
///
/// Branches are sorted by id first so the outcome never depends on the order
/// connections were made in. On equal dot products the pair with the lowest
/// ids wins, compared as (smaller id, larger id).
fn resolve_switch(position: Vec3, neighbors: [&Neighbor; 3]) -> Switch {
    let mut branches = neighbors.map(|n| (n.id, direction_to(position, n.position)));
    branches.sort_by_key(|&(id, _)| id);
    let [a, b, c] = branches;

    // The straightest pair has the most negative dot product
    let candidates = [
        ((a.1.dot(b.1), a.0, b.0), [a, b, c]),
        ((b.1.dot(c.1), b.0, c.0), [b, c, a]),
        ((c.1.dot(a.1), a.0, c.0), [c, a, b]),
    ];
    let mut best = 0;
    for i in 1..candidates.len() {
        if candidates[i].0 < candidates[best].0 {
            best = i;
        }
    }
    let [mut into, mut through, diverging] = candidates[best].1;

    // The diverging exit must leave on the through side of the join, not the into side.
    //  Good: 2 1  1 2   Bad:  1  1
    //         \|  |/          |  |
    //          |  |          /|  |\
    //          0  0         2 0  0 2
    let into_dot = diverging.1.dot(into.1);
    if into_dot > 0.0 && into_dot > diverging.1.dot(through.1) {
        std::mem::swap(&mut into, &mut through);
    }

    let direction = average_direction(-into.1, through.1);
    let orientation = if vertical_cross(direction, diverging.1) < 0.0 {
        SwitchOrientation::Left
    } else {
        SwitchOrientation::Right
    };

    Switch {
        order: [into.0, through.0, diverging.0],
        // Switches are placed level, so the first handle is the flat through direction
        handles: [
            Handle::unit(flatten_no_resize(direction)),
            Handle::unit(through.1),
            Handle::unit(diverging.1),
        ],
        orientation,
    }
}
