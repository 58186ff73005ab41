//! Greedy first-fit 3D bin packing engine.
//!
//! Containers and items are processed largest-volume first. Each item
//! is offered to each container in turn; a container probes candidate
//! positions stacked flush against its already-placed items, and all
//! six rotations at each position. The first feasible combination
//! wins, with no backtracking.

use crate::container::Container;
use crate::item::Item;
use crate::placement::{ContainerPlacement, ItemPlacement};
use boxpack_core::{Result, Rotation, AXES};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mutable work order: candidate containers and the items to place.
///
/// Both lists grow by insertion at the front. The engine re-sorts by
/// descending volume before packing, so caller insertion order only
/// breaks ties between equal volumes (the stored, front-inserted
/// order is what a stable sort preserves).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingJob<C, I> {
    containers: Vec<Container<C>>,
    items: Vec<Item<I>>,
}

impl<C, I> PackingJob<C, I> {
    /// Creates an empty job.
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Prepends a candidate container.
    pub fn add_container(&mut self, container: Container<C>) {
        self.containers.insert(0, container);
    }

    /// Prepends an item to place.
    pub fn add_item(&mut self, item: Item<I>) {
        self.items.insert(0, item);
    }

    /// Returns the containers in stored order.
    pub fn containers(&self) -> &[Container<C>] {
        &self.containers
    }

    /// Returns the items in stored order.
    pub fn items(&self) -> &[Item<I>] {
        &self.items
    }

    /// Returns the combined volume of all items in the job.
    pub fn total_item_volume(&self) -> i64 {
        self.items.iter().map(Item::volume).sum()
    }

    /// Returns the combined volume of all containers in the job.
    pub fn total_container_volume(&self) -> i64 {
        self.containers.iter().map(Container::volume).sum()
    }
}

impl<C, I> Default for PackingJob<C, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Packs the job's items into its containers.
///
/// Validates every container and item up front, then runs the greedy
/// single pass. Returns one [`ContainerPlacement`] per supplied
/// container, in descending container-volume order, each with its
/// `placed_items` and `unfitted_items` in reverse-chronological order
/// (most recently attempted first). An unfit item is a normal
/// outcome, never an error.
pub fn pack<C, I: Clone>(job: PackingJob<C, I>) -> Result<Vec<ContainerPlacement<C, I>>> {
    for container in job.containers() {
        container.validate()?;
    }
    for item in job.items() {
        item.validate()?;
    }

    let PackingJob {
        mut containers,
        mut items,
    } = job;
    containers.sort_by(|a, b| b.volume().cmp(&a.volume()));
    items.sort_by(|a, b| b.volume().cmp(&a.volume()));

    let mut container_placements: Vec<ContainerPlacement<C, I>> =
        containers.into_iter().map(ContainerPlacement::new).collect();
    let mut item_placements: Vec<ItemPlacement<I>> =
        items.into_iter().map(ItemPlacement::new).collect();

    for cp in &mut container_placements {
        for ip in &mut item_placements {
            // Placed by an earlier container: carried through unchanged.
            if ip.placed {
                continue;
            }
            place_in_container(cp, ip);
        }
        log::debug!(
            "container packed: {} placed, {} unfitted, fill {:.3}",
            cp.placed_items.len(),
            cp.unfitted_items.len(),
            cp.fill_ratio()
        );
    }

    Ok(container_placements)
}

/// Attempts to place one item into one container.
///
/// With no items placed yet the sole candidate position is the
/// origin. Otherwise candidates stack the item flush against a face
/// of an already-placed item: axes are probed in x, y, z order, and
/// placed items in storage order (most recent first). The first
/// accepted candidate short-circuits the rest. On failure the
/// container records the still-unplaced item as unfitted and the
/// item's own record is left untouched.
fn place_in_container<C, I: Clone>(
    cp: &mut ContainerPlacement<C, I>,
    ip: &mut ItemPlacement<I>,
) -> bool {
    if cp.placed_items.is_empty() {
        if try_place_at(cp, ip, Vector3::zeros()) {
            return true;
        }
        cp.add_unfitted_item(ip.clone());
        return false;
    }

    for &axis in &AXES {
        // placed_items is stable until a candidate succeeds, so the
        // candidate list can be materialized per axis.
        let candidates: Vec<Vector3<i64>> = cp
            .placed_items
            .iter()
            .map(|placed| {
                let mut position = placed.position;
                position[axis] += placed.effective_dimensions()[axis];
                position
            })
            .collect();
        for candidate in candidates {
            if try_place_at(cp, ip, candidate) {
                return true;
            }
        }
    }

    cp.add_unfitted_item(ip.clone());
    false
}

/// Probes one candidate position, trying all six rotations in index
/// order.
///
/// The weight budget is checked once up front: it depends on neither
/// rotation nor position, so a weight-infeasible item fails before
/// any rotation probe. Each rotation is tested on a scratch copy of
/// the placement; the first one passing both the boundary and the
/// intersection checks is finalized (rotation, position,
/// `placed = true`) and recorded in the container. On failure neither
/// the container nor the item is modified.
fn try_place_at<C, I: Clone>(
    cp: &mut ContainerPlacement<C, I>,
    ip: &mut ItemPlacement<I>,
    position: Vector3<i64>,
) -> bool {
    if !cp.fits_weight_budget(ip) {
        return false;
    }

    for rotation in Rotation::ALL {
        let scratch = ip.clone().with_rotation(rotation).with_position(position);
        if cp.within_boundaries(&scratch) && cp.no_intersections(&scratch) {
            *ip = scratch.with_placed(true);
            cp.add_placed_item(ip.clone());
            log::trace!(
                "placed item at ({}, {}, {}) rotation {}",
                position.x,
                position.y,
                position.z,
                rotation.index()
            );
            return true;
        }
    }

    false
}
