/// Sort Engine
///
/// Tracks which column orders the table and in which direction, and turns
/// that state into a sorted index over a record list.
///
/// The engine keeps its own copy of the active key and direction rather than
/// writing into the column set, so replacing the columns never disturbs the
/// sort state and the sort state never mutates the columns.
///
/// # Examples
///
/// ```
/// use tablestore::{normalize, record, FieldValue, RawColumn, SortDirection, SortEngine};
///
/// let columns = normalize(&[RawColumn::new("age", "Age").sortable()]).unwrap();
/// let records = vec![
///     record([("age", FieldValue::from(16))]),
///     record([("age", FieldValue::from(14))]),
/// ];
///
/// let mut engine = SortEngine::new();
/// let state = engine.request_sort(&columns, "age").unwrap();
/// assert_eq!(state.direction, SortDirection::Ascending);
/// assert_eq!(engine.sorted_indices(&records, &columns), vec![1, 0]);
/// ```

use crate::collate::natural_cmp;
use crate::column::{find_column, Column, SortDirection};
use crate::error::TableError;
use crate::value::{field_sort_text, Record};
use std::cmp::Ordering;

/// Active sort column and its direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        SortState {
            key: key.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortEngine {
    active: Option<SortState>,
}

impl SortEngine {
    pub fn new() -> Self {
        SortEngine { active: None }
    }

    pub fn active(&self) -> Option<&SortState> {
        self.active.as_ref()
    }

    /// Live direction of `key`: the tracked direction if it is the active
    /// column, otherwise `None`.
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.active {
            Some(state) if state.key == key => state.direction,
            _ => SortDirection::None,
        }
    }

    /// Handle a header click on `key`.
    ///
    /// Selecting a new column starts from its configured direction and
    /// advances it once; clicking the active column again advances it
    /// through none, ascending, descending. Returns the new state.
    ///
    /// An unknown key clears the active column and returns
    /// `Err(UnknownColumn)`. A column that is not sortable leaves the state
    /// as it was and returns `Err(SortOnNonSortableColumn)`.
    pub fn request_sort(
        &mut self,
        columns: &[Column],
        key: &str,
    ) -> Result<&SortState, TableError> {
        let column = match find_column(columns, key) {
            Some(column) => column,
            None => {
                self.active = None;
                return Err(TableError::UnknownColumn { key: key.to_string() });
            }
        };

        if !column.sortable {
            return Err(TableError::SortOnNonSortableColumn {
                key: column.key.clone(),
                title: column.title.clone(),
            });
        }

        let current = match &self.active {
            Some(state) if state.key == key => state.direction,
            _ => column.sort_direction,
        };
        let state = self.active.insert(SortState::new(key, current.next()));
        log::debug!("sort column '{}' now {:?}", state.key, state.direction);
        Ok(state)
    }

    /// Forget the active column, restoring natural order.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// The active state, if it currently orders anything.
    ///
    /// Natural order applies when nothing is active, the direction is
    /// `None`, or the column has since been removed or made unsortable.
    fn effective<'a>(&'a self, columns: &[Column]) -> Option<&'a SortState> {
        let state = self.active.as_ref()?;
        if state.direction.is_none() {
            return None;
        }
        match find_column(columns, &state.key) {
            Some(column) if column.sortable => Some(state),
            _ => None,
        }
    }

    /// Positions of `records` in display order.
    ///
    /// The sort is stable: records whose keys collate equal keep their
    /// input order, in both directions.
    pub fn sorted_indices(&self, records: &[Record], columns: &[Column]) -> Vec<usize> {
        let mut index: Vec<usize> = (0..records.len()).collect();
        let state = match self.effective(columns) {
            Some(state) => state,
            None => return index,
        };

        let keys: Vec<String> = records
            .iter()
            .map(|r| field_sort_text(r, &state.key))
            .collect();
        let descending = state.direction == SortDirection::Descending;

        index.sort_by(|&a, &b| {
            let cmp: Ordering = natural_cmp(&keys[a], &keys[b]);
            if descending {
                cmp.reverse()
            } else {
                cmp
            }
        });
        index
    }

    /// Records of `records` in display order.
    pub fn sort<'a>(&self, records: &'a [Record], columns: &[Column]) -> Vec<&'a Record> {
        self.sorted_indices(records, columns)
            .into_iter()
            .map(|i| &records[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{normalize, RawColumn};
    use crate::value::{record, FieldValue};

    fn columns() -> Vec<Column> {
        normalize(&[
            RawColumn::new("name", "Name").sortable(),
            RawColumn::new("age", "Age").sortable(),
            RawColumn::new("note", "Note"),
        ])
        .unwrap()
    }

    fn people() -> Vec<Record> {
        vec![
            record([("name", FieldValue::from("rec10")), ("age", FieldValue::from(30))]),
            record([("name", FieldValue::from("rec2")), ("age", FieldValue::from(25))]),
            record([("name", FieldValue::from("rec1")), ("age", FieldValue::from(30))]),
            record([("age", FieldValue::from(25))]),
        ]
    }

    #[test]
    fn test_no_active_column_keeps_order() {
        let engine = SortEngine::new();
        assert_eq!(engine.sorted_indices(&people(), &columns()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sort_cycle() {
        let cols = columns();
        let recs = people();
        let mut engine = SortEngine::new();

        let state = engine.request_sort(&cols, "name").unwrap().clone();
        assert_eq!(state, SortState::new("name", SortDirection::Ascending));
        // missing name sorts first, then numeric-aware order
        assert_eq!(engine.sorted_indices(&recs, &cols), vec![3, 2, 1, 0]);

        engine.request_sort(&cols, "name").unwrap();
        assert_eq!(engine.direction_for("name"), SortDirection::Descending);
        assert_eq!(engine.sorted_indices(&recs, &cols), vec![0, 1, 2, 3]);

        engine.request_sort(&cols, "name").unwrap();
        assert_eq!(engine.direction_for("name"), SortDirection::None);
        assert_eq!(engine.sorted_indices(&recs, &cols), vec![0, 1, 2, 3]);

        engine.request_sort(&cols, "name").unwrap();
        assert_eq!(engine.direction_for("name"), SortDirection::Ascending);
    }

    #[test]
    fn test_stable_ties() {
        let cols = columns();
        let recs = people();
        let mut engine = SortEngine::new();

        engine.request_sort(&cols, "age").unwrap();
        // 25s keep input order (1 before 3), 30s keep input order (0 before 2)
        assert_eq!(engine.sorted_indices(&recs, &cols), vec![1, 3, 0, 2]);

        engine.request_sort(&cols, "age").unwrap();
        assert_eq!(engine.sorted_indices(&recs, &cols), vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_switching_columns_starts_fresh() {
        let cols = columns();
        let mut engine = SortEngine::new();

        engine.request_sort(&cols, "name").unwrap();
        engine.request_sort(&cols, "name").unwrap();
        assert_eq!(engine.direction_for("name"), SortDirection::Descending);

        engine.request_sort(&cols, "age").unwrap();
        assert_eq!(engine.direction_for("age"), SortDirection::Ascending);
        assert_eq!(engine.direction_for("name"), SortDirection::None);
    }

    #[test]
    fn test_configured_direction_is_starting_point() {
        let cols = normalize(&[RawColumn::new("age", "Age")
            .sortable()
            .sort_direction(SortDirection::Ascending)])
        .unwrap();
        let mut engine = SortEngine::new();

        engine.request_sort(&cols, "age").unwrap();
        assert_eq!(engine.direction_for("age"), SortDirection::Descending);
    }

    #[test]
    fn test_non_sortable_column_leaves_state() {
        let cols = columns();
        let mut engine = SortEngine::new();
        engine.request_sort(&cols, "age").unwrap();

        let err = engine.request_sort(&cols, "note").unwrap_err();
        assert!(matches!(err, TableError::SortOnNonSortableColumn { .. }));
        assert_eq!(
            engine.active(),
            Some(&SortState::new("age", SortDirection::Ascending))
        );
    }

    #[test]
    fn test_unknown_column_clears_state() {
        let cols = columns();
        let mut engine = SortEngine::new();
        engine.request_sort(&cols, "age").unwrap();

        let err = engine.request_sort(&cols, "missing").unwrap_err();
        assert!(matches!(err, TableError::UnknownColumn { .. }));
        assert!(engine.active().is_none());
    }

    #[test]
    fn test_column_made_unsortable_falls_back_to_natural_order() {
        let cols = columns();
        let recs = people();
        let mut engine = SortEngine::new();
        engine.request_sort(&cols, "age").unwrap();

        let updated = normalize(&[RawColumn::new("age", "Age")]).unwrap();
        assert_eq!(engine.sorted_indices(&recs, &updated), vec![0, 1, 2, 3]);
        assert!(engine.request_sort(&updated, "age").is_err());
        assert_eq!(engine.direction_for("age"), SortDirection::Ascending);
    }

    #[test]
    fn test_sort_returns_records() {
        let cols = columns();
        let recs = vec![
            record([("age", FieldValue::from(16))]),
            record([("age", FieldValue::from(14))]),
        ];
        let mut engine = SortEngine::new();
        engine.request_sort(&cols, "age").unwrap();

        let sorted = engine.sort(&recs, &cols);
        assert_eq!(sorted[0].get("age").unwrap().as_f64(), Some(14.0));
        assert_eq!(sorted[1].get("age").unwrap().as_f64(), Some(16.0));
    }
}
