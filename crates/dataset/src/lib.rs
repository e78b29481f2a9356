//! Phenology dataset loading and storage.
//!
//! The dataset is read once at startup from a delimited text file and then
//! kept as an immutable [`DatasetStore`]. The store also carries the facts
//! derived at load time: the DOY calendar, the land-cover code range used by
//! the color scale, and the spatial extent of the sampling points.

pub mod loader;
pub mod store;

pub use loader::{load_points, read_points, LoadOptions};
pub use store::{DatasetStore, DatasetSummary};
