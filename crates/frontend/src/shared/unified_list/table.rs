//! Records -> table rows in configured column order

use contracts::shared::unified_list::{value_text, Record};

use super::config::ColumnSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Text,
    /// Anchor opening the detail modal for the row id
    DetailLink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub kind: CellKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Record id as text; also the checkbox value
    pub id: String,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableModel {
    /// Single placeholder row spanning `colspan` cells
    Empty { colspan: usize, message: String },
    Rows(Vec<TableRow>),
}

impl Default for TableModel {
    fn default() -> Self {
        TableModel::Rows(Vec::new())
    }
}

impl TableModel {
    pub fn build(records: &[Record], columns: &[ColumnSpec], no_data: &str) -> Self {
        if records.is_empty() {
            return TableModel::Empty {
                colspan: columns.len() + 1,
                message: no_data.to_string(),
            };
        }

        let rows = records
            .iter()
            .map(|record| TableRow {
                id: value_text(record.get("id")),
                cells: columns
                    .iter()
                    .map(|col| TableCell {
                        kind: if col.is_detail_link {
                            CellKind::DetailLink
                        } else {
                            CellKind::Text
                        },
                        text: value_text(record.get(&col.key)),
                    })
                    .collect(),
            })
            .collect();

        TableModel::Rows(rows)
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableModel::Rows(rows) => rows,
            TableModel::Empty { .. } => &[],
        }
    }
}
