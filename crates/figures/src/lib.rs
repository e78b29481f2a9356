//! Render-ready figure descriptions.
//!
//! Builders turn a [`selection::FilteredView`] into the JSON shape the
//! Plotly front end draws directly (`{"data": [...], "layout": {...}}`), plus
//! the record set behind the data table.

pub mod figure;
pub mod map;
pub mod options;
pub mod scatter;
pub mod table;
pub mod timeseries;

pub use figure::{Axis, Figure, Font, Layout, Legend, Mapbox, Margin, Marker, MarkerLine, Trace};
pub use map::{build_map_figure, map_layout, marker_colors, MAP_TITLE};
pub use options::{MapCenter, MapOptions, MarkerColoring};
pub use scatter::build_scatter;
pub use table::{build_table, DataTable, TableColumn};
pub use timeseries::build_timeseries;
