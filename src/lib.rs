/// TableStore - Sortable Paginated Data Store
///
/// The data core behind a table widget: it holds the record list, orders it
/// by a single active sort column, and slices the ordered list into pages.
/// Rendering is left to the consumer, which feeds in columns, records and
/// pager settings and reads back pages, totals and events.
///
/// Everything is synchronous and single-threaded; derived state is
/// recomputed on each read.

pub mod value;
pub mod collate;
pub mod column;
pub mod sort;
pub mod pager;
pub mod store;
pub mod events;
pub mod error;
pub mod report;
pub mod config;

pub use value::{record, records_from_json, FieldValue, Record};
pub use collate::natural_cmp;
pub use column::{normalize, Column, RawColumn, RawWidth, SortDirection};
pub use sort::{SortEngine, SortState};
pub use pager::{page_count, visible_pages, Pager, PagerView};
pub use store::{DataStore, DataStoreBuilder};
pub use events::{EventQueue, StoreEvent};
pub use error::{ErrorKind, TableError};
pub use report::{CollectingReporter, LogReporter, Reporter};
pub use config::{PagerConfig, StoreOptions, TableConfig};
