use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::date::parse_iso_date;

/// A child enrolled at a development center, as returned by the student API.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Student {
    pub id: String,
    pub name: String,
    /// ISO-8601 date as sent upstream; may be missing or malformed.
    #[serde(default)]
    pub birthdate: Option<String>,
}

impl Student {
    pub fn birthdate(&self) -> Option<jiff::civil::Date> {
        parse_iso_date(self.birthdate.as_deref())
    }
}
