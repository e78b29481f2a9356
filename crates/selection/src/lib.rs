//! Selection pipeline for the phenology dashboard.
//!
//! Every widget interaction reduces to a [`SelectionRequest`]: a land-cover
//! filter, an optional day of year and an optional hovered point. The
//! [`SelectionPipeline`] applies it to a borrowed [`dataset::DatasetStore`]
//! and returns a [`FilteredView`] that the figure builders consume.

pub mod hover;
pub mod pipeline;
pub mod request;
pub mod view;

pub use hover::{HoverPayload, HoverPoint};
pub use pipeline::{SelectionPipeline, Update};
pub use request::{LandCoverFilter, SelectionRequest};
pub use view::FilteredView;
