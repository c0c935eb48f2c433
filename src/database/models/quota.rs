use serde::{Deserialize, Serialize};

use super::LeaveType;

/// Allotted days for one leave type, from the `leave_quota` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuotaRecord {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub leave_type: String,
    pub total: i32,
}

impl QuotaRecord {
    pub fn kind(&self) -> Option<LeaveType> {
        self.leave_type.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaInput {
    pub leave_type: LeaveType,
    pub total: i32,
}
