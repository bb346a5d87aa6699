use fjall::{PartitionHandle, Snapshot};

/// Every table lives in its own partition, named with this prefix.
pub const TABLE_PARTITION_PREFIX: &str = "tbl_";

pub fn partition_name(table_name: &str) -> String {
    format!("{}{}", TABLE_PARTITION_PREFIX, table_name)
}

/// Handle to one table's partition. Cheap to clone.
#[derive(Clone)]
pub struct Table {
    name: String,
    partition: PartitionHandle,
}

impl Table {
    pub fn new(name: impl Into<String>, partition: PartitionHandle) -> Self {
        Self {
            name: name.into(),
            partition,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn partition(&self) -> &PartitionHandle {
        &self.partition
    }

    /// Point-in-time view used for every read of a statement.
    pub fn snapshot(&self) -> Snapshot {
        self.partition.snapshot()
    }

    pub(crate) fn into_partition(self) -> PartitionHandle {
        self.partition
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table").field("name", &self.name).finish()
    }
}
