//! Placement records layered on items and containers during a
//! packing run.

use crate::container::Container;
use crate::item::Item;
use boxpack_core::{boxes_overlap, Rotation, AXES};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item bound to a chosen rotation, a position and a placed flag.
///
/// Created unplaced at rotation [`Rotation::Whd`] and the origin.
/// Updates are by-replacement: the `with_*` setters consume the record
/// and return it with exactly one field changed. Once `placed` is set
/// the engine never unsets or moves the record within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemPlacement<P> {
    /// The wrapped item.
    pub item: Item<P>,
    /// Selected axis permutation of the item's extents.
    pub rotation: Rotation,
    /// Minimum corner of the item in container-local coordinates.
    pub position: Vector3<i64>,
    /// Whether the item has been placed in some container this run.
    pub placed: bool,
}

impl<P> ItemPlacement<P> {
    /// Wraps an item unplaced, unrotated, at the origin.
    pub fn new(item: Item<P>) -> Self {
        Self {
            item,
            rotation: Rotation::Whd,
            position: Vector3::zeros(),
            placed: false,
        }
    }

    /// Returns this placement with the rotation replaced.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns this placement with the position replaced.
    pub fn with_position(mut self, position: Vector3<i64>) -> Self {
        self.position = position;
        self
    }

    /// Returns this placement with the placed flag replaced.
    pub fn with_placed(mut self, placed: bool) -> Self {
        self.placed = placed;
        self
    }

    /// Returns the item's extents reordered by the current rotation.
    pub fn effective_dimensions(&self) -> Vector3<i64> {
        self.rotation.apply(self.item.dimensions())
    }

    /// Tests whether this placement's box intersects another's.
    ///
    /// `self` is passed as the first box of the overlap test. The test
    /// is order-sensitive, so the engine always calls this on the
    /// already-placed item with the candidate as `other`.
    pub fn intersects(&self, other: &ItemPlacement<P>) -> bool {
        boxes_overlap(
            &self.position,
            &self.effective_dimensions(),
            &other.position,
            &other.effective_dimensions(),
        )
    }
}

/// A container accumulating the item placements tried against it.
///
/// Both lists grow strictly by insertion at the front: the head is the
/// most recently added entry. They are never reordered or
/// deduplicated, so callers wanting chronological order reverse them.
/// An item rejected by several containers appears in each of their
/// `unfitted_items` lists independently, even if a later container
/// accepts it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerPlacement<C, I> {
    /// The wrapped container.
    pub container: Container<C>,
    /// Items placed here, most recent first, all with `placed == true`.
    pub placed_items: Vec<ItemPlacement<I>>,
    /// Items this container rejected, most recent first.
    pub unfitted_items: Vec<ItemPlacement<I>>,
}

impl<C, I> ContainerPlacement<C, I> {
    /// Wraps a container with no placements yet.
    pub fn new(container: Container<C>) -> Self {
        Self {
            container,
            placed_items: Vec::new(),
            unfitted_items: Vec::new(),
        }
    }

    /// Prepends a placement to `placed_items`.
    ///
    /// No feasibility checks happen here; the caller must already have
    /// verified boundaries, intersections and the weight budget.
    pub fn add_placed_item(&mut self, placement: ItemPlacement<I>) {
        self.placed_items.insert(0, placement);
    }

    /// Prepends a placement to `unfitted_items`.
    pub fn add_unfitted_item(&mut self, placement: ItemPlacement<I>) {
        self.unfitted_items.insert(0, placement);
    }

    /// Returns the total weight of all placed items.
    pub fn total_weight(&self) -> i64 {
        self.placed_items.iter().map(|p| p.item.weight()).sum()
    }

    /// Tests that the placement's box ends inside the container on
    /// every axis: `position + effective extent <= container extent`.
    pub fn within_boundaries(&self, placement: &ItemPlacement<I>) -> bool {
        let dims = placement.effective_dimensions();
        AXES.iter()
            .all(|&axis| placement.position[axis] + dims[axis] <= self.container.dimensions()[axis])
    }

    /// Tests the placement against every already-placed item, placed
    /// entry first in each pairwise test. Vacuously true when nothing
    /// is placed yet.
    pub fn no_intersections(&self, placement: &ItemPlacement<I>) -> bool {
        self.placed_items.iter().all(|p| !p.intersects(placement))
    }

    /// Tests that adding the item keeps the container within its
    /// weight limit. Independent of rotation and position.
    pub fn fits_weight_budget(&self, placement: &ItemPlacement<I>) -> bool {
        self.total_weight() + placement.item.weight() <= self.container.max_weight()
    }

    /// Fraction of the container volume occupied by placed items.
    pub fn fill_ratio(&self) -> f64 {
        let container_volume = self.container.volume();
        if container_volume == 0 {
            return 0.0;
        }
        let placed_volume: i64 = self.placed_items.iter().map(|p| p.item.volume()).sum();
        placed_volume as f64 / container_volume as f64
    }
}
