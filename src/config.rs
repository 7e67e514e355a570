/// Store configuration
///
/// Everything a consumer can configure: the pager, store behaviour switches,
/// and a JSON-loadable bundle of both plus the column set.
///
/// # Examples
///
/// ```
/// use tablestore::TableConfig;
///
/// let config = TableConfig::from_json(r#"{
///     "columns": [{"key": "name", "title": "Name", "sortable": true}],
///     "pager": {"limit": 10, "maxShowPage": 5}
/// }"#).unwrap();
///
/// let pager = config.pager.unwrap();
/// assert_eq!(pager.limit, 10);
/// assert_eq!(pager.page, 1);
/// assert!(!pager.hide_pager);
/// ```

use crate::column::RawColumn;
use crate::error::TableError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 20;
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_MAX_SHOW_PAGE: usize = 7;

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_max_show_page() -> usize {
    DEFAULT_MAX_SHOW_PAGE
}

/// Pager settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerConfig {
    /// Records per page
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Total record count reported by the data source; 0 means "count the records"
    #[serde(default)]
    pub total: usize,
    /// Initial page, 1-based
    #[serde(default = "default_page")]
    pub page: usize,
    /// Width of the page-number window; even values are rounded up to odd
    #[serde(default = "default_max_show_page")]
    pub max_show_page: usize,
    /// Return every record regardless of page
    #[serde(default)]
    pub hide_pager: bool,
}

impl Default for PagerConfig {
    fn default() -> Self {
        PagerConfig {
            limit: DEFAULT_LIMIT,
            total: 0,
            page: DEFAULT_PAGE,
            max_show_page: DEFAULT_MAX_SHOW_PAGE,
            hide_pager: false,
        }
    }
}

impl PagerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn max_show_page(mut self, max_show_page: usize) -> Self {
        self.max_show_page = max_show_page;
        self
    }

    pub fn hide_pager(mut self, hide: bool) -> Self {
        self.hide_pager = hide;
        self
    }
}

/// Store behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOptions {
    /// Go back to page 1 whenever `set_data` replaces the records
    #[serde(default)]
    pub reset_page_on_set_data: bool,
}

/// Columns, pager and options in one loadable bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default)]
    pub columns: Vec<RawColumn>,
    /// `None` disables paging
    #[serde(default)]
    pub pager: Option<PagerConfig>,
    #[serde(default)]
    pub options: StoreOptions,
}

impl TableConfig {
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_defaults() {
        let pager: PagerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(pager, PagerConfig::default());
        assert_eq!(pager.limit, 20);
        assert_eq!(pager.max_show_page, 7);
    }

    #[test]
    fn test_pager_builder() {
        let pager = PagerConfig::new().limit(25).total(400).page(3).max_show_page(4);
        assert_eq!(pager.limit, 25);
        assert_eq!(pager.total, 400);
        assert_eq!(pager.page, 3);
        assert_eq!(pager.max_show_page, 4);
    }

    #[test]
    fn test_table_config_from_json() {
        let config = TableConfig::from_json(
            r#"{
                "columns": [
                    {"key": "name", "title": "name", "sortable": true},
                    {"key": "age", "title": "age"}
                ],
                "pager": {"limit": 2, "total": 50, "hidePager": false},
                "options": {"resetPageOnSetData": true}
            }"#,
        )
        .unwrap();

        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.pager.as_ref().unwrap().total, 50);
        assert!(config.options.reset_page_on_set_data);
    }

    #[test]
    fn test_table_config_without_pager() {
        let config = TableConfig::from_json(r#"{"columns": []}"#).unwrap();
        assert!(config.pager.is_none());
        assert!(!config.options.reset_page_on_set_data);
    }

    #[test]
    fn test_non_integer_limit_rejected() {
        let err = TableConfig::from_json(r#"{"pager": {"limit": 2.5}}"#).unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));

        let err = TableConfig::from_json(r#"{"pager": {"page": -1}}"#).unwrap_err();
        assert!(matches!(err, TableError::InvalidConfig(_)));
    }
}
