//! # Boxpack 3D
//!
//! Greedy 3D bin packing for the boxpack engine.
//!
//! Weighted rectangular items are assigned to rectangular containers,
//! largest volume first, with candidate positions stacked flush
//! against already-placed items and all six axis-aligned rotations
//! probed at each candidate. Containers enforce boundaries,
//! non-overlap with placed items, and a per-container weight limit.
//!
//! ## Features
//!
//! - Opaque caller-supplied payloads on items and containers,
//!   round-tripped unchanged into the output
//! - Per-container placed and unfitted bookkeeping, most recent first
//! - Single-pass, deterministic, no backtracking
//!
//! ## Example
//!
//! ```rust
//! use boxpack_d3::{pack, Container, Item, PackingJob};
//!
//! let mut job = PackingJob::new();
//! job.add_container(Container::new("bin", 50, 50, 50, 100));
//! job.add_item(Item::new("box", 10, 10, 10, 5));
//!
//! let placements = pack(job).unwrap();
//! assert_eq!(placements[0].placed_items.len(), 1);
//! ```

pub mod container;
pub mod item;
pub mod packer;
pub mod placement;

// Re-exports
pub use boxpack_core::{boxes_overlap, rect_overlap, volume, Error, Result, Rotation};
pub use container::Container;
pub use item::Item;
pub use packer::{pack, PackingJob};
pub use placement::{ContainerPlacement, ItemPlacement};
