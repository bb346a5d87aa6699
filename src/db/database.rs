use crate::config::SessionConfig;
use crate::db::table::core::table::{Table, partition_name};
use crate::error::{Error, Result};
use fjall::{Batch, Keyspace, PartitionCreateOptions, PersistMode};
use tracing::info;

/// One open keyspace. Each table is a partition inside it.
pub struct Database {
    name: String,
    keyspace: Keyspace,
    persist_mode: PersistMode,
}

impl Database {
    /// Opens `<data_dir>/<name>.db`, creating the directory and keyspace as needed.
    pub fn open(config: &SessionConfig, name: &str) -> Result<Self> {
        let path = config.database_path(name);
        let open_error = |source: Box<dyn std::error::Error + Send + Sync>| Error::OpenDatabase {
            name: name.to_string(),
            source,
        };
        std::fs::create_dir_all(config.data_dir()).map_err(|e| open_error(Box::new(e)))?;
        let keyspace = fjall::Config::new(&path)
            .open()
            .map_err(|e| open_error(Box::new(e)))?;
        info!(database = name, path = %path.display(), "opened database");
        Ok(Self {
            name: name.to_string(),
            keyspace,
            persist_mode: config.persist_mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_table(&self, table_name: &str) -> bool {
        self.keyspace.partition_exists(&partition_name(table_name))
    }

    pub fn get_table(&self, table_name: &str) -> Result<Table> {
        if !self.has_table(table_name) {
            return Err(Error::TableNotFound(table_name.to_string()));
        }
        self.open_table(table_name)
    }

    /// Opens the table's partition, creating it if it does not exist yet.
    pub fn create_table(&self, table_name: &str) -> Result<Table> {
        self.open_table(table_name)
    }

    fn open_table(&self, table_name: &str) -> Result<Table> {
        let partition = self
            .keyspace
            .open_partition(&partition_name(table_name), PartitionCreateOptions::default())?;
        Ok(Table::new(table_name, partition))
    }

    /// Removes the table's partition with everything in it.
    pub fn drop_table(&self, table_name: &str) -> Result<()> {
        let table = self.get_table(table_name)?;
        let partition = table.into_partition();

        // fjall defers a partition's removal while any handle to it is alive, and a
        // same-named partition opened in that window sees the old keys. Clearing
        // first keeps a recreated table empty. If delete_partition then fails the
        // table still exists, empty, and DROP TABLE can be retried.
        let mut batch = self.batch();
        for entry in partition.iter() {
            let (key, _) = entry?;
            batch.remove(&partition, key);
        }
        self.commit(batch)?;

        self.keyspace.delete_partition(partition)?;
        self.keyspace.persist(self.persist_mode)?;
        Ok(())
    }

    pub fn batch(&self) -> Batch {
        self.keyspace.batch()
    }

    /// Applies every staged write at once, then makes it durable.
    pub fn commit(&self, batch: Batch) -> Result<()> {
        batch.commit()?;
        self.keyspace.persist(self.persist_mode)?;
        Ok(())
    }

    pub fn close(self) -> Result<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        info!(database = %self.name, "closed database");
        Ok(())
    }
}
