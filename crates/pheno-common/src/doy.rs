//! Day-of-year buckets and the DOY <-> reference date lookup.
//!
//! Observations are 16-day composites, so every reference date in a dataset
//! falls into one of 23 day-of-year buckets. The slider works in DOY units;
//! filtering works on exact reference dates. [`DoyCalendar`] translates
//! between the two.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{PhenoError, PhenoResult};

/// Spacing between composite periods, in days.
pub const DOY_STEP: u16 = 16;

/// Canonical day-of-year buckets.
pub const DOY_LIST: [u16; 23] = [
    0, 16, 32, 48, 64, 80, 96, 112, 128, 144, 160, 176, 192, 208, 224, 240, 256, 272, 288, 304,
    320, 336, 352,
];

/// Whether `doy` is one of the canonical buckets.
pub fn is_canonical_doy(doy: u16) -> bool {
    DOY_LIST.binary_search(&doy).is_ok()
}

/// How distinct reference dates are paired with DOY buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoyPairing {
    /// Sorted distinct dates are paired by position with [`DOY_LIST`].
    #[default]
    Positional,
    /// Each date's zero-based ordinal day must itself be a canonical DOY.
    Ordinal,
}

/// Bidirectional DOY <-> date lookup, built once from the dataset.
#[derive(Debug, Clone, Default)]
pub struct DoyCalendar {
    doy_to_date: BTreeMap<u16, NaiveDate>,
    date_to_doy: HashMap<NaiveDate, u16>,
}

impl DoyCalendar {
    /// Build the calendar from the reference dates present in a dataset.
    ///
    /// Duplicates are ignored. Fails if the dates cannot be mapped one to one
    /// onto the canonical buckets.
    pub fn from_dates<I>(dates: I, pairing: DoyPairing) -> PhenoResult<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();

        let pairs: Vec<(u16, NaiveDate)> = match pairing {
            DoyPairing::Positional => {
                if distinct.len() > DOY_LIST.len() {
                    return Err(PhenoError::CalendarMismatch(format!(
                        "{} distinct reference dates but only {} DOY buckets",
                        distinct.len(),
                        DOY_LIST.len()
                    )));
                }
                DOY_LIST.iter().copied().zip(distinct).collect()
            }
            DoyPairing::Ordinal => {
                let mut pairs = Vec::with_capacity(distinct.len());
                for date in distinct {
                    let doy = date.ordinal0() as u16;
                    if !is_canonical_doy(doy) {
                        return Err(PhenoError::CalendarMismatch(format!(
                            "{} falls on day {} which is not on the {}-day grid",
                            date, doy, DOY_STEP
                        )));
                    }
                    pairs.push((doy, date));
                }
                pairs
            }
        };

        let mut calendar = Self::default();
        for (doy, date) in pairs {
            if let Some(existing) = calendar.doy_to_date.insert(doy, date) {
                return Err(PhenoError::CalendarMismatch(format!(
                    "DOY {} maps to both {} and {}",
                    doy, existing, date
                )));
            }
            calendar.date_to_doy.insert(date, doy);
        }

        Ok(calendar)
    }

    pub fn doy_to_date(&self, doy: u16) -> Option<NaiveDate> {
        self.doy_to_date.get(&doy).copied()
    }

    pub fn date_to_doy(&self, date: NaiveDate) -> Option<u16> {
        self.date_to_doy.get(&date).copied()
    }

    /// Translate a requested DOY to its reference date.
    ///
    /// Slider values are always canonical, so anything else is a contract
    /// violation and fails instead of matching nothing.
    pub fn resolve(&self, doy: u16) -> PhenoResult<NaiveDate> {
        if !is_canonical_doy(doy) {
            return Err(PhenoError::invalid_selection(
                "doy",
                format!("{} is not a canonical day of year", doy),
            ));
        }
        self.doy_to_date(doy).ok_or_else(|| {
            PhenoError::invalid_selection("doy", format!("no reference date for day of year {}", doy))
        })
    }

    /// DOY buckets that have a date, ascending.
    pub fn doys(&self) -> impl Iterator<Item = u16> + '_ {
        self.doy_to_date.keys().copied()
    }

    /// (DOY, date) pairs, ascending by DOY.
    pub fn entries(&self) -> impl Iterator<Item = (u16, NaiveDate)> + '_ {
        self.doy_to_date.iter().map(|(doy, date)| (*doy, *date))
    }

    pub fn len(&self) -> usize {
        self.doy_to_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doy_to_date.is_empty()
    }
}
