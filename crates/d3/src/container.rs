//! Packable destination type.

use boxpack_core::{volume, Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangular container with a maximum carryable weight.
///
/// Like [`crate::Item`], a container is an immutable value carrying an
/// opaque payload; per-run accumulation happens in
/// [`crate::ContainerPlacement`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container<P> {
    payload: P,
    dimensions: Vector3<i64>,
    max_weight: i64,
}

impl<P> Container<P> {
    /// Creates a new container with the given payload, extents and
    /// weight limit.
    pub fn new(payload: P, width: i64, height: i64, depth: i64, max_weight: i64) -> Self {
        Self {
            payload,
            dimensions: Vector3::new(width, height, depth),
            max_weight,
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

    /// Returns the maximum total weight of placed items.
    pub fn max_weight(&self) -> i64 {
        self.max_weight
    }

    /// Returns the volume of the container.
    pub fn volume(&self) -> i64 {
        volume(self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Validates the container: extents and the weight limit must be
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|&d| d < 0) {
            return Err(Error::InvalidContainer(format!(
                "dimensions must be non-negative, got ({}, {}, {})",
                self.dimensions.x, self.dimensions.y, self.dimensions.z
            )));
        }
        if self.max_weight < 0 {
            return Err(Error::InvalidContainer(format!(
                "max weight must be non-negative, got {}",
                self.max_weight
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_volume() {
        let container = Container::new("C1", 50, 50, 50, 100);
        assert_eq!(container.volume(), 125_000);
    }

    #[test]
    fn test_container_validation() {
        assert!(Container::new("ok", 50, 50, 50, 100).validate().is_ok());
        assert!(Container::new("bad-dim", 50, -1, 50, 100).validate().is_err());
        assert!(Container::new("bad-limit", 50, 50, 50, -1).validate().is_err());
    }
}
