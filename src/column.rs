/// TableStore Column Implementation
///
/// Consumers describe columns loosely with [`RawColumn`]; [`normalize`] turns
/// that description into fully populated [`Column`]s with every default
/// filled in, and rejects column sets that reuse a key.
///
/// # Examples
///
/// ```
/// use tablestore::{normalize, RawColumn, SortDirection};
///
/// let columns = normalize(&[
///     RawColumn::new("name", "Name").sortable(),
///     RawColumn::new("age", "Age").width(80),
/// ]).unwrap();
///
/// assert_eq!(columns[0].slot, "name");
/// assert_eq!(columns[0].sort_direction, SortDirection::None);
/// assert_eq!(columns[1].width, "80px");
/// assert!(!columns[1].sortable);
/// ```

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sort direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[serde(rename = "ASC")]
    Ascending,
    /// Largest first
    #[serde(rename = "DESC")]
    Descending,
    /// Natural (input) order
    #[default]
    #[serde(rename = "NONE")]
    None,
}

impl SortDirection {
    /// Next state in the header click cycle: none, ascending, descending, none.
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    pub fn is_none(self) -> bool {
        self == SortDirection::None
    }
}

/// Column width as supplied by the consumer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawWidth {
    /// Pixel count, rendered as `"<n>px"`
    Pixels(f64),
    /// Any CSS length, passed through
    Css(String),
}

impl From<i32> for RawWidth {
    fn from(px: i32) -> Self {
        RawWidth::Pixels(px as f64)
    }
}

impl From<u32> for RawWidth {
    fn from(px: u32) -> Self {
        RawWidth::Pixels(px as f64)
    }
}

impl From<f64> for RawWidth {
    fn from(px: f64) -> Self {
        RawWidth::Pixels(px)
    }
}

impl From<&str> for RawWidth {
    fn from(css: &str) -> Self {
        RawWidth::Css(css.to_string())
    }
}

/// Loosely specified column, as it arrives from configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColumn {
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<RawWidth>,
}

impl RawColumn {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        RawColumn {
            key: key.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = Some(true);
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    pub fn width(mut self, width: impl Into<RawWidth>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn title_slot(mut self, slot: impl Into<String>) -> Self {
        self.title_slot = Some(slot.into());
        self
    }
}

/// A column with every field resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub key: String,
    pub title: String,
    /// Cell slot name; defaults to `key`
    pub slot: String,
    /// Header slot name; defaults to `key`
    pub title_slot: String,
    pub sortable: bool,
    /// Initial direction. The live direction is tracked by the sort engine.
    pub sort_direction: SortDirection,
    /// CSS width, `"auto"` when unspecified
    pub width: String,
}

impl From<&RawColumn> for Column {
    fn from(raw: &RawColumn) -> Self {
        Column {
            key: raw.key.clone(),
            title: raw.title.clone(),
            slot: raw.slot.clone().unwrap_or_else(|| raw.key.clone()),
            title_slot: raw.title_slot.clone().unwrap_or_else(|| raw.key.clone()),
            sortable: raw.sortable.unwrap_or(false),
            sort_direction: raw.sort_direction.unwrap_or_default(),
            width: match &raw.width {
                Some(RawWidth::Pixels(px)) => format!("{}px", px),
                Some(RawWidth::Css(css)) => css.clone(),
                None => "auto".to_string(),
            },
        }
    }
}

/// Resolve defaults for every column, failing on the first repeated key.
pub fn normalize(raw: &[RawColumn]) -> Result<Vec<Column>, TableError> {
    let mut seen = HashSet::with_capacity(raw.len());
    raw.iter()
        .map(|col| {
            if !seen.insert(col.key.as_str()) {
                return Err(TableError::DuplicateColumnKey { key: col.key.clone() });
            }
            Ok(Column::from(col))
        })
        .collect()
}

/// Look up a column by key.
pub fn find_column<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.key == key)
}
