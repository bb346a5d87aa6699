use crate::db::table::core::column::COLUMN_KEY_PREFIX;
use crate::db::table::core::table::Table;
use crate::error::Result;
use fjall::{Batch, Snapshot};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

pub type RowId = u64;

/// Reserved keys never decode as cells.
pub const META_KEY_PREFIX: &str = "meta:";
pub const SEQUENCE_KEY: &str = "meta:seq";

/// A row is every cell sharing one id. It exists only while it has a cell.
#[derive(Debug, PartialEq, Clone)]
pub struct Row {
    pub id: RowId,
    pub cells: HashMap<String, String>,
}

impl Row {
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            cells: HashMap::new(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(|value| value.as_str())
    }
}

pub fn cell_key(row_id: RowId, column: &str) -> String {
    format!("{}:{}", row_id, column)
}

/// Splits `<id>:<column>`. Anything else yields `None`.
pub fn decode_cell_key(key: &[u8]) -> Option<(RowId, String)> {
    let key = std::str::from_utf8(key).ok()?;
    let parts: Vec<&str> = key.split(':').collect();
    if parts.len() != 2 || parts[1].is_empty() {
        return None;
    }
    let row_id = parts[0].parse::<RowId>().ok()?;
    return Some((row_id, parts[1].to_string()));
}

fn is_reserved_key(key: &[u8]) -> bool {
    key.starts_with(COLUMN_KEY_PREFIX.as_bytes()) || key.starts_with(META_KEY_PREFIX.as_bytes())
}

/// Draws the next row id and stages the advanced counter in `batch`, so the id
/// is only consumed if the batch commits.
pub fn next_row_id(batch: &mut Batch, table: &Table) -> Result<RowId> {
    let last = match table.partition().get(SEQUENCE_KEY)? {
        Some(bytes) if bytes.len() == 8 => {
            let mut buffer = [0u8; 8];
            buffer.copy_from_slice(&bytes);
            RowId::from_be_bytes(buffer)
        }
        Some(_) => {
            warn!(table = table.name(), "malformed sequence record, restarting at 0");
            0
        }
        None => 0,
    };
    let row_id = last + 1;
    batch.insert(table.partition(), SEQUENCE_KEY, row_id.to_be_bytes().to_vec());
    return Ok(row_id);
}

pub fn put_cell(batch: &mut Batch, table: &Table, row_id: RowId, column: &str, value: &str) {
    batch.insert(table.partition(), cell_key(row_id, column), value.to_string());
}

pub fn delete_cell(batch: &mut Batch, table: &Table, row_id: RowId, column: &str) {
    batch.remove(table.partition(), cell_key(row_id, column));
}

/// Stages removal of every cell of `row`.
pub fn delete_row(batch: &mut Batch, table: &Table, row: &Row) {
    for column in row.cells.keys() {
        delete_cell(batch, table, row.id, column);
    }
}

/// Every row in the snapshot, ascending by id. Undecodable keys are skipped.
pub fn scan_rows(snapshot: &Snapshot) -> Result<Vec<Row>> {
    let mut rows: BTreeMap<RowId, Row> = BTreeMap::new();
    for entry in snapshot.iter() {
        let (key, value) = entry?;
        if is_reserved_key(&key) {
            continue;
        }
        let Some((row_id, column)) = decode_cell_key(&key) else {
            warn!(key = %String::from_utf8_lossy(&key), "skipping malformed cell key");
            continue;
        };
        rows.entry(row_id)
            .or_insert_with(|| Row::new(row_id))
            .cells
            .insert(column, String::from_utf8_lossy(&value).into_owned());
    }
    return Ok(rows.into_values().collect());
}
