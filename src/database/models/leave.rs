use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// One leave day as stored in the `leaves` table.
///
/// The type is kept as the raw stored tag so that rows written by other
/// clients with an unknown tag still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRecord {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub leave_type: String,
    pub reason: String,
}

impl LeaveRecord {
    pub fn kind(&self) -> Option<LeaveType> {
        self.leave_type.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveInput {
    pub date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum LeaveType {
        Sick => "sick",
        Vacation => "vacation",
        Personal => "personal",
    }
}
