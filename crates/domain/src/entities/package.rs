//! Tour and attraction packages searchable by country.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An active tour package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourRecord {
    pub tour_name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub thumbnail: Option<String>,
}

/// An active attraction package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttractionRecord {
    pub attraction_name: String,
    pub start_date: NaiveDate,
    pub thumbnail: Option<String>,
}
