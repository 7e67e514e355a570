/// Data Store
///
/// Composes the sort engine and the pager over a shared record list and
/// exposes the read, write and navigation calls a table widget needs.
///
/// Nothing derived is cached: every read sorts and slices from the latest
/// records, columns, sort state and pager settings, so a read can never
/// combine new data with stale ordering.
///
/// Failures follow a report-and-continue policy. Each error is handed to the
/// store's [`Reporter`] and returned as `Err`, and the store stays exactly as
/// it was before the call.
///
/// # Examples
///
/// ```
/// use tablestore::{record, DataStore, FieldValue, PagerConfig, RawColumn, StoreEvent};
///
/// let records: Vec<_> = (0..100)
///     .map(|i| record([("id", FieldValue::from(i))]))
///     .collect();
///
/// let mut store = DataStore::new(
///     records,
///     &[RawColumn::new("id", "ID").sortable()],
///     Some(PagerConfig::new().limit(25)),
/// ).unwrap();
///
/// assert_eq!(store.page_count(), 4);
/// store.jump(2).unwrap();
///
/// let page = store.get_data();
/// assert_eq!(page.len(), 25);
/// assert_eq!(page[0].get("id").unwrap().as_f64(), Some(25.0));
/// assert_eq!(store.drain_events(), vec![StoreEvent::Jump { page: 2, old_page: 1 }]);
/// ```

use crate::column::{normalize, Column, RawColumn, SortDirection};
use crate::config::{PagerConfig, StoreOptions, TableConfig};
use crate::error::TableError;
use crate::events::{EventQueue, StoreEvent};
use crate::pager::{page_count, validate_page, Pager, PagerView};
use crate::report::{LogReporter, Reporter};
use crate::sort::{SortEngine, SortState};
use crate::value::Record;
use std::fmt;
use std::rc::Rc;

/// Builder for [`DataStore`]
///
/// Lets the reporter be installed before the initial configuration is
/// validated, so problems found while building go to the right place.
pub struct DataStoreBuilder {
    records: Rc<Vec<Record>>,
    columns: Vec<RawColumn>,
    pager: Option<PagerConfig>,
    options: StoreOptions,
    reporter: Box<dyn Reporter>,
}

impl Default for DataStoreBuilder {
    fn default() -> Self {
        DataStoreBuilder {
            records: Rc::new(Vec::new()),
            columns: Vec::new(),
            pager: None,
            options: StoreOptions::default(),
            reporter: Box::new(LogReporter),
        }
    }
}

impl DataStoreBuilder {
    pub fn records(mut self, records: impl Into<Rc<Vec<Record>>>) -> Self {
        self.records = records.into();
        self
    }

    pub fn columns(mut self, columns: Vec<RawColumn>) -> Self {
        self.columns = columns;
        self
    }

    /// Paging settings; leaving this unset disables paging
    pub fn pager(mut self, pager: PagerConfig) -> Self {
        self.pager = Some(pager);
        self
    }

    pub fn options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Build the store.
    ///
    /// Fails only on a malformed column set. An invalid initial page or
    /// limit is reported and replaced by its default.
    pub fn build(self) -> Result<DataStore, TableError> {
        let columns = match normalize(&self.columns) {
            Ok(columns) => columns,
            Err(e) => {
                self.reporter.report(&e);
                return Err(e);
            }
        };

        let mut store = DataStore {
            records: self.records,
            columns,
            total: 0,
            hide_pager: true,
            pager: Pager::new(),
            sort: SortEngine::new(),
            options: self.options,
            events: EventQueue::new(),
            reporter: self.reporter,
        };

        let initial_page = self.pager.as_ref().map(|p| p.page).unwrap_or(1);
        // a rejected limit is already reported; the default stays in place
        let _ = store.set_pager_config(self.pager);
        let pages = store.page_count();
        if let Err(e) = store.pager.open_at(initial_page, pages) {
            store.reporter.report(&e);
        }
        Ok(store)
    }
}

/// Sortable, paginated view over a record list
pub struct DataStore {
    records: Rc<Vec<Record>>,
    columns: Vec<Column>,
    /// Configured total; 0 means "use the record count"
    total: usize,
    hide_pager: bool,
    pager: Pager,
    sort: SortEngine,
    options: StoreOptions,
    events: EventQueue,
    reporter: Box<dyn Reporter>,
}

impl DataStore {
    pub fn builder() -> DataStoreBuilder {
        DataStoreBuilder::default()
    }

    /// Create a store reporting through the `log` facade.
    ///
    /// `pager: None` disables paging.
    pub fn new(
        records: impl Into<Rc<Vec<Record>>>,
        columns: &[RawColumn],
        pager: Option<PagerConfig>,
    ) -> Result<Self, TableError> {
        let builder = DataStore::builder()
            .records(records)
            .columns(columns.to_vec());
        match pager {
            Some(pager) => builder.pager(pager).build(),
            None => builder.build(),
        }
    }

    /// Create a store from a loaded [`TableConfig`].
    pub fn from_config(
        config: TableConfig,
        records: impl Into<Rc<Vec<Record>>>,
    ) -> Result<Self, TableError> {
        let builder = DataStore::builder()
            .records(records)
            .columns(config.columns)
            .options(config.options);
        match config.pager {
            Some(pager) => builder.pager(pager).build(),
            None => builder.build(),
        }
    }

    fn fail<T>(&self, error: TableError) -> Result<T, TableError> {
        self.reporter.report(&error);
        Err(error)
    }

    // ---- configuration -------------------------------------------------

    /// Replace the record list wholesale.
    ///
    /// Sort state is kept. The current page is kept too unless
    /// `reset_page_on_set_data` is on, in which case the store jumps back
    /// to page 1.
    pub fn set_data(&mut self, records: impl Into<Rc<Vec<Record>>>) {
        self.records = records.into();
        log::debug!("record list replaced, {} records", self.records.len());

        if self.options.reset_page_on_set_data && self.pager.current_page() != 1 {
            // page 1 is always valid
            let _ = self.jump(1);
        }
    }

    /// Replace the column set. A set with duplicate keys is rejected and the
    /// previous columns stay in effect.
    pub fn set_columns(&mut self, columns: &[RawColumn]) -> Result<(), TableError> {
        match normalize(columns) {
            Ok(columns) => {
                self.columns = columns;
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Apply new pager settings. `None` disables paging.
    ///
    /// The current page is store-owned and is not reset by this call; the
    /// configured `page` only matters when the store is built. A zero limit
    /// is reported and the previous limit kept, while the other settings
    /// still apply.
    pub fn set_pager_config(&mut self, config: Option<PagerConfig>) -> Result<(), TableError> {
        let config = match config {
            Some(config) => config,
            None => {
                self.hide_pager = true;
                self.total = 0;
                return Ok(());
            }
        };

        self.hide_pager = config.hide_pager;
        self.total = config.total;
        self.pager.set_max_show_page(config.max_show_page);
        if let Err(e) = self.pager.set_limit(config.limit) {
            return self.fail(e);
        }
        Ok(())
    }

    /// Change only the page size.
    pub fn set_limit(&mut self, limit: usize) -> Result<(), TableError> {
        if let Err(e) = self.pager.set_limit(limit) {
            return self.fail(e);
        }
        Ok(())
    }

    pub fn set_options(&mut self, options: StoreOptions) {
        self.options = options;
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    // ---- sorting -------------------------------------------------------

    /// Handle a header click on `key`, emitting a `Sort` event on success.
    pub fn sort(&mut self, key: &str) -> Result<SortDirection, TableError> {
        let result = self.sort.request_sort(&self.columns, key).cloned();
        match result {
            Ok(SortState { key, direction }) => {
                self.events.push(StoreEvent::Sort { key, direction });
                Ok(direction)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Drop the active sort column, back to natural order.
    pub fn clear_sort(&mut self) {
        self.sort.clear();
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.active()
    }

    /// Direction to draw in the header of column `key`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        self.sort.direction_for(key)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    // ---- reading -------------------------------------------------------

    /// Records as supplied, unsorted
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Every record in sort order, ignoring the pager.
    pub fn get_all_data(&self) -> Vec<&Record> {
        self.sort.sort(&self.records, &self.columns)
    }

    /// Records on the current page.
    pub fn get_data(&self) -> Vec<&Record> {
        self.get_page(self.pager.current_page())
    }

    /// Records on `page` in sort order.
    ///
    /// Unlike [`jump`](Self::jump), an invalid page is not rejected with an
    /// error: it is reported and an empty list comes back. With the pager
    /// hidden every record is returned whatever the page.
    pub fn get_page(&self, page: usize) -> Vec<&Record> {
        if self.hide_pager {
            return self.get_all_data();
        }

        if let Err(e) = validate_page(page, self.page_count()) {
            self.reporter.report(&e);
            return Vec::new();
        }

        let order = self.sort.sorted_indices(&self.records, &self.columns);
        let range = self.pager.page_range(page, order.len());
        order[range].iter().map(|&i| &self.records[i]).collect()
    }

    /// Configured total if set, otherwise the number of records held.
    pub fn get_total(&self) -> usize {
        if self.total != 0 {
            self.total
        } else {
            self.records.len()
        }
    }

    pub fn get_limit(&self) -> usize {
        self.pager.limit()
    }

    pub fn get_current_page(&self) -> usize {
        self.pager.current_page()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.get_total(), self.pager.limit())
    }

    pub fn is_pager_hidden(&self) -> bool {
        self.hide_pager
    }

    pub fn pager_view(&self) -> PagerView {
        self.pager.view(self.page_count())
    }

    // ---- navigation ----------------------------------------------------

    /// Move to `page`, emitting a `Jump` event.
    ///
    /// An out-of-range page is reported and rejected; the current page
    /// does not change.
    pub fn jump(&mut self, page: usize) -> Result<(), TableError> {
        let pages = self.page_count();
        match self.pager.jump(page, pages) {
            Ok(old_page) => {
                self.events.push(StoreEvent::Jump { page, old_page });
                Ok(())
            }
            Err(e) => self.fail(e),
        }
    }

    /// Go to page 1 unless already there.
    pub fn jump_first(&mut self) -> Result<(), TableError> {
        if self.pager.current_page() == 1 {
            return Ok(());
        }
        self.jump(1)
    }

    /// Go to the last page unless already there.
    pub fn jump_last(&mut self) -> Result<(), TableError> {
        let last = self.page_count().max(1);
        if self.pager.current_page() == last {
            return Ok(());
        }
        self.jump(last)
    }

    // ---- events --------------------------------------------------------

    /// Events not yet drained, oldest first
    pub fn events(&self) -> &[StoreEvent] {
        self.events.events()
    }

    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        self.events.drain()
    }
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("records", &self.records.len())
            .field("columns", &self.columns.len())
            .field("sort", &self.sort.active())
            .field("current_page", &self.pager.current_page())
            .field("limit", &self.pager.limit())
            .field("total", &self.get_total())
            .field("hide_pager", &self.hide_pager)
            .finish()
    }
}
