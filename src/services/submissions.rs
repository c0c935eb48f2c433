//! Raw user submissions and their presence/format checks.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveSubmission {
    /// Defaults to the selected date
    pub date: Option<String>,
    #[serde(rename = "type")]
    pub leave_type: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaySubmission {
    pub date: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteSubmission {
    pub date: Option<String>,
    pub content: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuotaSubmission {
    #[serde(rename = "type")]
    pub leave_type: String,
    pub total: QuotaTotal,
}

/// Quota totals arrive either as JSON numbers or as the text typed into a form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuotaTotal {
    Days(i64),
    Text(String),
}

impl QuotaTotal {
    pub fn days(&self) -> Result<i32, AppError> {
        let days = match self {
            QuotaTotal::Days(days) => *days,
            QuotaTotal::Text(text) => text.trim().parse::<i64>().map_err(|_| {
                AppError::validation(format!("Quota total '{}' is not a whole number", text))
            })?,
        };

        if days < 0 {
            return Err(AppError::validation(format!(
                "Quota total {} must not be negative",
                days
            )));
        }
        i32::try_from(days)
            .map_err(|_| AppError::validation(format!("Quota total {} is too large", days)))
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::validation(format!("Invalid date '{}'. Expected YYYY-MM-DD", value))
    })
}

/// The submitted date, or the fallback when the field is absent or blank.
pub fn date_or(value: Option<&str>, fallback: Option<NaiveDate>) -> Result<NaiveDate, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => parse_date(value),
        None => fallback.ok_or_else(|| AppError::validation("A date must be selected first")),
    }
}

pub fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(format!("Field '{}' is required", field)))
}
