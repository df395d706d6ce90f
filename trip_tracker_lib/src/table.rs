use std::collections::HashSet;

use crate::{
    error::TableError,
    field::FieldValue,
    format::{format_field, DisplayCell},
};

/// Header of the actions column, a non-breaking space.
pub const ACTIONS_HEADER: &str = "\u{a0}";

/// A record that can be listed in a scaffold table.
pub trait ListRecord {
    /// camelCase name used in titles and prompts, e.g. `tripsOnUsers`.
    const MODEL_NAME: &'static str;
    /// Name used in notifications, e.g. `TripsOnUsers`.
    const DISPLAY_NAME: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    /// One value per entry in [`Self::COLUMNS`].
    fn fields(&self) -> Vec<FieldValue>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    pub id: i64,
    pub show_title: String,
    pub edit_title: String,
    pub delete_title: String,
}

impl RowActions {
    fn new<R: ListRecord>(id: i64) -> Self {
        Self {
            id,
            show_title: format!("Show {} {id} detail", R::MODEL_NAME),
            edit_title: format!("Edit {} {id}", R::MODEL_NAME),
            delete_title: format!("Delete {} {id}", R::MODEL_NAME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: i64,
    pub cells: Vec<DisplayCell>,
    pub actions: RowActions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

/// Projects `records` into a table, keeping their order. Ids are used as row keys and must be unique.
pub fn render_table<R: ListRecord>(records: &[R]) -> Result<TableView, TableError> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let id = record.id();
        if !seen.insert(id) {
            tracing::warn!("{} list contains id {id} more than once", R::DISPLAY_NAME);
            return Err(TableError::DuplicateId { id });
        }

        rows.push(TableRow {
            key: id,
            cells: record.fields().iter().map(format_field).collect(),
            actions: RowActions::new::<R>(id),
        });
    }

    let mut headers = R::COLUMNS.to_vec();
    headers.push(ACTIONS_HEADER);

    Ok(TableView { headers, rows })
}
