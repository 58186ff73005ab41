//! Box geometry primitives: volume, the six axis-permutation rotations,
//! and the axis-aligned overlap test between placed boxes.

use crate::{Error, Result};
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis indices in the fixed x, y, z probe order.
pub const AXES: [usize; 3] = [0, 1, 2];

/// Returns the volume of a box with the given extents.
pub fn volume(width: i64, height: i64, depth: i64) -> i64 {
    width * height * depth
}

/// One of the six axis-aligned rotations of a box.
///
/// Each variant names the order in which the original width, height and
/// depth extents appear after rotating; `Whd` is the identity. The
/// discriminant doubles as the numeric rotation index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// (width, height, depth) - no rotation.
    #[default]
    Whd,
    /// (height, width, depth).
    Hwd,
    /// (height, depth, width).
    Hdw,
    /// (depth, height, width).
    Dhw,
    /// (depth, width, height).
    Dwh,
    /// (width, depth, height).
    Wdh,
}

impl Rotation {
    /// All rotations, in probe order.
    pub const ALL: [Rotation; 6] = [
        Rotation::Whd,
        Rotation::Hwd,
        Rotation::Hdw,
        Rotation::Dhw,
        Rotation::Dwh,
        Rotation::Wdh,
    ];

    /// Returns the rotation for a numeric index in `0..=5`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidRotation(index))
    }

    /// Returns the numeric index of this rotation.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Source-axis index feeding each of the width, height and depth
    /// slots of the rotated box.
    pub fn axes(self) -> [usize; 3] {
        match self {
            Rotation::Whd => [0, 1, 2],
            Rotation::Hwd => [1, 0, 2],
            Rotation::Hdw => [1, 2, 0],
            Rotation::Dhw => [2, 1, 0],
            Rotation::Dwh => [2, 0, 1],
            Rotation::Wdh => [0, 2, 1],
        }
    }

    /// Reorders a box's extents according to this rotation, yielding
    /// the rotated bounding box.
    pub fn apply(self, dimensions: &Vector3<i64>) -> Vector3<i64> {
        let [w, h, d] = self.axes();
        Vector3::new(dimensions[w], dimensions[h], dimensions[d])
    }
}

/// Per-axis center-distance overlap test, scaled by 4 so the
/// half-extent arithmetic stays in exact integers.
///
/// The threshold is `dim1/2 + dim2/4`, not the symmetric textbook
/// `dim1/2 + dim2/2`: the test is order-sensitive and is kept as-is
/// for compatibility with the reference behavior. Callers must pass
/// the already-placed box first. Boxes that merely touch (distance
/// equal to the threshold) do not overlap.
fn axis_overlap(pos1: i64, dim1: i64, pos2: i64, dim2: i64) -> bool {
    // Centers sit at pos + dim/2; times 4, distance is |4p1+2d1 - 4p2-2d2|.
    let c1 = 4 * pos1 as i128 + 2 * dim1 as i128;
    let c2 = 4 * pos2 as i128 + 2 * dim2 as i128;
    (c1 - c2).abs() < 2 * dim1 as i128 + dim2 as i128
}

/// Tests whether two boxes overlap on the 2D projection onto axes
/// `(a, b)`. Both projected axes must overlap.
pub fn rect_overlap(
    pos1: &Vector3<i64>,
    dim1: &Vector3<i64>,
    pos2: &Vector3<i64>,
    dim2: &Vector3<i64>,
    a: usize,
    b: usize,
) -> bool {
    axis_overlap(pos1[a], dim1[a], pos2[a], dim2[a])
        && axis_overlap(pos1[b], dim1[b], pos2[b], dim2[b])
}

/// Tests whether two axis-aligned boxes, each given by a minimum
/// corner and its extents, intersect.
///
/// All three orthogonal projections (x,y), (y,z) and (x,z) must
/// report overlap.
pub fn boxes_overlap(
    pos1: &Vector3<i64>,
    dim1: &Vector3<i64>,
    pos2: &Vector3<i64>,
    dim2: &Vector3<i64>,
) -> bool {
    rect_overlap(pos1, dim1, pos2, dim2, 0, 1)
        && rect_overlap(pos1, dim1, pos2, dim2, 1, 2)
        && rect_overlap(pos1, dim1, pos2, dim2, 0, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume() {
        assert_eq!(volume(10, 20, 30), 6000);
        assert_eq!(volume(0, 20, 30), 0);
        assert_eq!(volume(1, 1, 1), 1);
    }

    #[test]
    fn test_rotation_index_round_trip() {
        for (i, rotation) in Rotation::ALL.iter().enumerate() {
            assert_eq!(rotation.index(), i);
            assert_eq!(Rotation::from_index(i).unwrap(), *rotation);
        }
    }

    #[test]
    fn test_rotation_invalid_index() {
        assert!(matches!(
            Rotation::from_index(6),
            Err(Error::InvalidRotation(6))
        ));
        assert!(Rotation::from_index(usize::MAX).is_err());
    }

    #[test]
    fn test_rotation_apply_enumeration() {
        let dims = Vector3::new(1, 2, 3);
        let expected = [
            (1, 2, 3), // Whd
            (2, 1, 3), // Hwd
            (2, 3, 1), // Hdw
            (3, 2, 1), // Dhw
            (3, 1, 2), // Dwh
            (1, 3, 2), // Wdh
        ];
        for (rotation, (w, h, d)) in Rotation::ALL.iter().zip(expected) {
            assert_eq!(rotation.apply(&dims), Vector3::new(w, h, d));
        }
    }

    #[test]
    fn test_rotation_apply_is_permutation() {
        let dims = Vector3::new(5, 7, 11);
        for rotation in Rotation::ALL {
            let mut rotated: Vec<i64> = rotation.apply(&dims).iter().copied().collect();
            rotated.sort_unstable();
            assert_eq!(rotated, vec![5, 7, 11]);
        }
    }

    #[test]
    fn test_boxes_overlap_coincident() {
        let pos = Vector3::new(0, 0, 0);
        let dim = Vector3::new(6, 5, 4);
        assert!(boxes_overlap(&pos, &dim, &pos, &dim));
    }

    #[test]
    fn test_boxes_overlap_disjoint() {
        let a_pos = Vector3::new(0, 0, 0);
        let a_dim = Vector3::new(2, 2, 2);
        let b_pos = Vector3::new(100, 100, 100);
        let b_dim = Vector3::new(2, 2, 2);
        assert!(!boxes_overlap(&a_pos, &a_dim, &b_pos, &b_dim));
    }

    #[test]
    fn test_boxes_touching_do_not_overlap() {
        // Flush along x at x = 6.
        let a_pos = Vector3::new(0, 0, 0);
        let a_dim = Vector3::new(6, 6, 6);
        let b_pos = Vector3::new(6, 0, 0);
        let b_dim = Vector3::new(6, 6, 6);
        assert!(!boxes_overlap(&a_pos, &a_dim, &b_pos, &b_dim));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer_pos = Vector3::new(0, 0, 0);
        let outer_dim = Vector3::new(10, 10, 10);
        let inner_pos = Vector3::new(4, 4, 4);
        let inner_dim = Vector3::new(2, 2, 2);
        assert!(boxes_overlap(&outer_pos, &outer_dim, &inner_pos, &inner_dim));
        assert!(boxes_overlap(&inner_pos, &inner_dim, &outer_pos, &outer_dim));
    }

    #[test]
    fn test_overlap_threshold_is_order_sensitive() {
        // Scaled center distance 16 falls between the two thresholds
        // 2*8+2 = 18 and 2*2+8 = 12, so argument order flips the
        // verdict. The engine always passes the placed box first.
        let big_pos = Vector3::new(0, 0, 0);
        let big_dim = Vector3::new(8, 8, 8);
        let small_pos = Vector3::new(7, 7, 7);
        let small_dim = Vector3::new(2, 2, 2);
        assert!(boxes_overlap(&big_pos, &big_dim, &small_pos, &small_dim));
        assert!(!boxes_overlap(&small_pos, &small_dim, &big_pos, &big_dim));
    }

    #[test]
    fn test_rect_overlap_single_projection() {
        // Overlapping in (x,y) but far apart in z.
        let a_pos = Vector3::new(0, 0, 0);
        let a_dim = Vector3::new(4, 4, 4);
        let b_pos = Vector3::new(1, 1, 100);
        let b_dim = Vector3::new(4, 4, 4);
        assert!(rect_overlap(&a_pos, &a_dim, &b_pos, &b_dim, 0, 1));
        assert!(!rect_overlap(&a_pos, &a_dim, &b_pos, &b_dim, 1, 2));
        assert!(!boxes_overlap(&a_pos, &a_dim, &b_pos, &b_dim));
    }
}
