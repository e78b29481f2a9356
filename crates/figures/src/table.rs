//! Data table records.

use serde::Serialize;

use pheno_common::{PhenoError, PhenoResult, SamplePoint, COLUMNS};
use selection::FilteredView;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableColumn {
    pub name: &'static str,
    pub id: &'static str,
}

/// Rows of the filtered view with the checked rows echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct DataTable<'a> {
    pub columns: Vec<TableColumn>,
    pub records: Vec<&'a SamplePoint>,
    pub row_selectable: &'static str,
    pub selected_rows: Vec<usize>,
}

impl DataTable<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build the table. Every `selected` index must address a record.
pub fn build_table<'a>(view: &FilteredView<'a>, selected: &[usize]) -> PhenoResult<DataTable<'a>> {
    if let Some(bad) = selected.iter().find(|i| **i >= view.len()) {
        return Err(PhenoError::invalid_selection(
            "selected",
            format!("row {} is out of range for {} rows", bad, view.len()),
        ));
    }

    let mut selected_rows = selected.to_vec();
    selected_rows.sort_unstable();
    selected_rows.dedup();

    Ok(DataTable {
        columns: COLUMNS
            .iter()
            .map(|c| TableColumn { name: *c, id: *c })
            .collect(),
        records: view.rows().to_vec(),
        row_selectable: "multi",
        selected_rows,
    })
}
