use crate::table::record::Record;
use crate::table::schema::Schema;
use crate::table::table_source::{Row, TableSource};
use shared::{start_flatdb_options_builder, FlatDbError, FlatDbOptions};
use std::collections::HashMap;
use std::sync::Arc;

//Every call gets its own empty directory, so tests can run in parallel
pub(crate) fn test_options() -> Arc<FlatDbOptions> {
    let mut path = std::env::temp_dir();
    path.push(format!("flatdb-test-{}", rand::random::<u64>()));
    std::fs::create_dir_all(&path).unwrap();

    start_flatdb_options_builder()
        .base_path(path.to_str().unwrap())
        .use_debug_logging(false)
        .build_arc()
}

pub(crate) fn record(fields: &[(&str, &str)]) -> Record {
    Record::create(
        fields.iter().map(|(column, _)| column.to_string()).collect(),
        fields.iter().map(|_| String::from("string")).collect(),
        fields.iter().map(|(_, value)| value.to_string()).collect(),
    )
}

//In memory TableSource. Tables are created with every column typed as "string"
pub(crate) struct MockTableSource {
    tables: HashMap<String, (Schema, Vec<Row>)>,
}

impl MockTableSource {
    pub(crate) fn create() -> MockTableSource {
        MockTableSource { tables: HashMap::new() }
    }

    pub(crate) fn with_table(mut self, table_name: &str, columns: &[&str], rows: Vec<Vec<(&str, &str)>>) -> MockTableSource {
        let columns: Vec<String> = columns.iter().map(|column| column.to_string()).collect();
        let types: Vec<String> = columns.iter().map(|_| String::from("string")).collect();
        let rows: Vec<Row> = rows.into_iter()
            .map(|row| row.into_iter().map(|(key, value)| (key.to_string(), value.to_string())).collect::<Row>())
            .collect();

        self.tables.insert(table_name.to_string(), (Schema::create(table_name, &columns, &types), rows));
        self
    }
}

impl TableSource for MockTableSource {
    fn get_table_schema(&self, table_name: &str) -> Result<Schema, FlatDbError> {
        self.tables.get(table_name)
            .map(|(schema, _)| schema.clone())
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))
    }

    fn read_all_rows(&self, table_name: &str) -> Result<Vec<Row>, FlatDbError> {
        self.tables.get(table_name)
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))
    }
}
