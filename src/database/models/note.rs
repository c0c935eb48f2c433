use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Swatch used for notes whose stored color tag is not one we know.
pub const NEUTRAL_SWATCH: &str = "grey-100";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct NoteRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub content: String,
    pub color: String,
}

impl NoteRecord {
    pub fn color_kind(&self) -> Option<NoteColor> {
        self.color.parse().ok()
    }

    pub fn swatch(&self) -> &'static str {
        self.color_kind()
            .map(|color| color.swatch())
            .unwrap_or(NEUTRAL_SWATCH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteInput {
    pub date: NaiveDate,
    pub content: String,
    pub color: NoteColor,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum NoteColor {
        Blue => "blue",
        Green => "green",
        Yellow => "yellow",
        Pink => "pink",
    }
}

impl NoteColor {
    pub fn swatch(&self) -> &'static str {
        match self {
            NoteColor::Blue => "blue-100",
            NoteColor::Green => "green-100",
            NoteColor::Yellow => "yellow-100",
            NoteColor::Pink => "pink-100",
        }
    }
}
