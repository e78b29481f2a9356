//! Small hand-written datasets for tests.
//!
//! The reference dates sit on the 16-day grid (2016-06-09 is DOY 160 and
//! 2016-06-25 is DOY 176), so they load with ordinal DOY pairing.

/// Six-column dataset: P1 and P3 at both dates, P2 only at DOY 176.
pub const SMALL_CSV: &str = "\
PointID,LC_code,reference_date,ndvi,lon,lat
P1,41,2016-06-09,0.71,-74.362539,41.987256
P1,41,2016-06-25,0.78,-74.362539,41.987256
P2,41,2016-06-25,0.74,-74.296787,41.124870
P3,82,2016-06-09,0.55,-74.100000,41.500000
P3,82,2016-06-25,0.61,-74.100000,41.500000
";

/// The same observations as written by pandas: index column, datetime dates.
pub const INDEXED_CSV: &str = "\
,PointID,LC_code,variable,value,x,y
0,P1,41,2016-06-09 00:00:00,0.71,-74.362539,41.987256
1,P1,41,2016-06-25 00:00:00,0.78,-74.362539,41.987256
2,P2,41,2016-06-25 00:00:00,0.74,-74.296787,41.124870
3,P3,82,2016-06-09 00:00:00,0.55,-74.100000,41.500000
4,P3,82,2016-06-25 00:00:00,0.61,-74.100000,41.500000
";

/// A dataset whose second data row (line 3) has a non-numeric NDVI.
pub const MALFORMED_CSV: &str = "\
PointID,LC_code,reference_date,ndvi,lon,lat
P1,41,2016-06-09,0.71,-74.362539,41.987256
P1,41,2016-06-25,n/a,-74.362539,41.987256
";

/// DOY of the first fixture date.
pub const EARLY_DOY: u16 = 160;

/// DOY of the second fixture date.
pub const LATE_DOY: u16 = 176;
