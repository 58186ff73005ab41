//! Packable item type.

use boxpack_core::{volume, Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular, weighted item to be packed.
///
/// The payload is an arbitrary caller-supplied value carried through
/// packing unchanged, so results can be correlated back to the
/// caller's own domain objects. Items are immutable once built; all
/// packing-run state lives in [`crate::ItemPlacement`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item<P> {
    payload: P,
    dimensions: Vector3<i64>,
    weight: i64,
}

impl<P> Item<P> {
    /// Creates a new item with the given payload, extents and weight.
    pub fn new(payload: P, width: i64, height: i64, depth: i64, weight: i64) -> Self {
        Self {
            payload,
            dimensions: Vector3::new(width, height, depth),
            weight,
        }
    }

    /// Returns the caller-supplied payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns the extents (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<i64> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> i64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> i64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> i64 {
        self.dimensions.z
    }

    /// Returns the weight.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Returns the volume of the item's bounding box.
    pub fn volume(&self) -> i64 {
        volume(self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Validates the item: extents and weight must be non-negative.
    /// Zero extents are allowed.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d < 0) {
            return Err(Error::InvalidItem(format!(
                "dimensions must be non-negative, got ({}, {}, {})",
                self.dimensions.x, self.dimensions.y, self.dimensions.z
            )));
        }
        if self.weight < 0 {
            return Err(Error::InvalidItem(format!(
                "weight must be non-negative, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}
