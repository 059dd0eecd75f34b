use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time slots a table can be booked for
pub const TIME_SLOTS: [&str; 10] = [
    "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00", "19:00", "20:00", "21:00",
];

pub const MIN_PEOPLE: u8 = 1;
pub const MAX_PEOPLE: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub branch_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub member_id: String,
    pub people: u8,
}

/// Body of `/api/getAvailableBranches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub time: String,
    pub people: u8,
}
