//! Remaining-balance summary per leave type.

use std::collections::HashMap;

use serde::Serialize;

use crate::calendar::locale;
use crate::database::models::{LeaveRecord, LeaveType, QuotaRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotaLine {
    #[serde(rename = "type")]
    pub leave_type: String,
    pub label: String,
    pub total: i32,
    pub used: i32,
    /// Negative when more leave was taken than allotted
    pub remaining: i32,
}

/// One line per quota type, in order of first appearance.
///
/// Leave types without a quota record get no line, and leaves of those types
/// are not counted anywhere. If the store returns several quota records for
/// one type the last one's total is used. Known types are matched through
/// their parsed [`LeaveType`], unknown ones by their raw tag.
pub fn summarize(leaves: &[LeaveRecord], quotas: &[QuotaRecord]) -> Vec<QuotaLine> {
    let mut used: HashMap<LeaveType, i32> = HashMap::new();
    for leave_type in leaves.iter().filter_map(LeaveRecord::kind) {
        let count = used.entry(leave_type).or_insert(0);
        *count = count.saturating_add(1);
    }

    let mut lines: Vec<QuotaLine> = Vec::new();
    for quota in quotas {
        let kind = quota.kind();
        let leave_type = kind
            .map(|leave_type| leave_type.as_str().to_string())
            .unwrap_or_else(|| quota.leave_type.clone());
        let used_days = kind
            .and_then(|leave_type| used.get(&leave_type).copied())
            .unwrap_or(0);
        let line = QuotaLine {
            label: locale::leave_label(&leave_type),
            total: quota.total,
            used: used_days,
            // Totals come from the store unchecked
            remaining: quota.total.saturating_sub(used_days),
            leave_type,
        };

        match lines.iter_mut().find(|l| l.leave_type == line.leave_type) {
            Some(existing) => *existing = line,
            None => lines.push(line),
        }
    }

    lines
}
