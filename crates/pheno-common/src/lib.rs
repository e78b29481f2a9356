//! Common types and utilities shared across the phenology dashboard crates.

pub mod bbox;
pub mod doy;
pub mod error;
pub mod land_cover;
pub mod point;
pub mod style;

pub use bbox::BoundingBox;
pub use doy::{DoyCalendar, DoyPairing, DOY_LIST, DOY_STEP};
pub use error::{PhenoError, PhenoResult};
pub use land_cover::{land_cover_options, LandCoverCode, LandCoverOption, NLCD_2011};
pub use point::{SamplePoint, COLUMNS};
pub use style::{
    apply_selection, Color, ColorStop, GradientConfig, LandCoverColorScale,
    LAND_COVER_BUCKETS, SELECTED_COLOR,
};
