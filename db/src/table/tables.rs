use crate::table::catalog::Catalog;
use crate::table::schema::Schema;
use crate::table::table_source::{Row, TableSource};
use crate::table::tablespace::Tablespace;
use shared::{logger, FlatDbError, FlatDbLayer, FlatDbOptions};
use std::sync::{Arc, Mutex, MutexGuard};

//Catalog and tablespace are read and rewritten as a whole on every operation, so every access
//goes through the same lock
pub struct Tables {
    storage: Mutex<TablesStorage>,
}

struct TablesStorage {
    catalog: Catalog,
    tablespace: Tablespace,
}

impl Tables {
    pub fn create(options: &Arc<FlatDbOptions>) -> Result<Tables, FlatDbError> {
        Ok(Tables {
            storage: Mutex::new(TablesStorage {
                catalog: Catalog::create(options)?,
                tablespace: Tablespace::create(options)?,
            })
        })
    }

    pub fn create_table(
        &self,
        table_name: &str,
        columns: &Vec<String>,
        types: &Vec<String>,
    ) -> Result<(), FlatDbError> {
        let mut storage = self.lock_storage();

        storage.catalog.add_table(table_name, columns, types)
            .map_err(|e| e.with_context(&format!("add table {} in catalog", table_name)))?;
        if let Err(error) = storage.tablespace.create_table(table_name) {
            //Every table in the catalog must also exist in the tablespace
            if let Err(rollback_error) = storage.catalog.remove_table(table_name) {
                logger().error(FlatDbLayer::Db, &format!(
                    "remove table {} from catalog after failed creation: {:?}", table_name, rollback_error
                ));
            }
            return Err(error.with_context(&format!("create table {}", table_name)));
        }

        logger().info(FlatDbLayer::Db, &format!("Created table {} with {} columns", table_name, columns.len()));

        Ok(())
    }

    //Without column names, values are matched by position against every column of the table
    pub fn insert(
        &self,
        table_name: &str,
        columns: &Vec<String>,
        values: &Vec<String>,
    ) -> Result<(), FlatDbError> {
        let mut storage = self.lock_storage();

        let schema = storage.catalog.get_table_schema(table_name)?;
        let row = Self::build_row(&schema, columns, values)?;
        storage.tablespace.append_row(table_name, row)
            .map_err(|e| e.with_context(&format!("save data into {}", table_name)))?;

        Ok(())
    }

    fn build_row(
        schema: &Schema,
        columns: &Vec<String>,
        values: &Vec<String>,
    ) -> Result<Row, FlatDbError> {
        if columns.is_empty() {
            if values.len() != schema.n_columns() {
                return Err(FlatDbError::ColumnMismatch(format!(
                    "table {} has {} columns but {} values were given", schema.table_name, schema.n_columns(), values.len()
                )));
            }

            return Ok(schema.column_names().into_iter()
                .zip(values.iter().cloned())
                .collect());
        }

        if columns.len() != values.len() {
            return Err(FlatDbError::ColumnMismatch(format!(
                "the number of columns ({}) and values ({}) must be the same", columns.len(), values.len()
            )));
        }
        if let Some(unknown_column) = columns.iter().find(|column| schema.get_column(column).is_none()) {
            return Err(FlatDbError::ColumnMismatch(format!(
                "column {} not found in table {}", unknown_column, schema.table_name
            )));
        }

        Ok(columns.iter().cloned()
            .zip(values.iter().cloned())
            .collect())
    }

    fn lock_storage(&self) -> MutexGuard<'_, TablesStorage> {
        self.storage.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TableSource for Tables {
    fn get_table_schema(&self, table_name: &str) -> Result<Schema, FlatDbError> {
        self.lock_storage().catalog.get_table_schema(table_name)
    }

    fn read_all_rows(&self, table_name: &str) -> Result<Vec<Row>, FlatDbError> {
        self.lock_storage().tablespace.read_all(table_name)
    }
}

#[cfg(test)]
mod test {
    use crate::table::table_source::TableSource;
    use crate::table::tables::Tables;
    use crate::test_utils::test_options;
    use shared::FlatDbError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn item_table() -> Tables {
        let tables = Tables::create(&test_options()).unwrap();
        tables.create_table("item", &strings(&["id", "name"]), &strings(&["string", "string"])).unwrap();
        tables
    }

    #[test]
    fn insert_by_position() {
        let tables = item_table();

        tables.insert("item", &Vec::new(), &strings(&["1", "laptop"])).unwrap();

        let rows = tables.read_all_rows("item").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id"), Some(&String::from("1")));
        assert_eq!(rows[0].get("name"), Some(&String::from("laptop")));
    }

    #[test]
    fn insert_subset_of_columns() {
        let tables = item_table();

        tables.insert("item", &strings(&["id"]), &strings(&["4"])).unwrap();

        let rows = tables.read_all_rows("item").unwrap();
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0].get("id"), Some(&String::from("4")));
    }

    #[test]
    fn insert_column_mismatch() {
        let tables = item_table();

        let too_many_values = tables.insert("item", &Vec::new(), &strings(&["1", "laptop", "1000"]));
        let different_lengths = tables.insert("item", &strings(&["id", "name"]), &strings(&["1"]));
        let unknown_column = tables.insert("item", &strings(&["price"]), &strings(&["1000"]));

        assert!(matches!(too_many_values, Err(FlatDbError::ColumnMismatch(_))));
        assert!(matches!(different_lengths, Err(FlatDbError::ColumnMismatch(_))));
        assert!(matches!(unknown_column, Err(FlatDbError::ColumnMismatch(_))));
        assert!(tables.read_all_rows("item").unwrap().is_empty());
    }

    #[test]
    fn insert_into_missing_table() {
        let tables = item_table();

        let result = tables.insert("user", &Vec::new(), &strings(&["alice"]));

        assert!(matches!(result, Err(FlatDbError::TableNotFound(_))));
    }

    #[test]
    fn failed_tablespace_creation_removes_catalog_entry() {
        let options = test_options();
        std::fs::write(options.tablespace_path(), r#"{"item":[]}"#).unwrap();
        let tables = Tables::create(&options).unwrap();

        let error = tables.create_table("item", &strings(&["id"]), &strings(&["string"])).unwrap_err();

        assert_eq!(format!("{:?}", error), "create table item: table item already exists");
        assert!(matches!(tables.get_table_schema("item"), Err(FlatDbError::TableNotFound(_))));
    }

    #[test]
    fn create_existing_table() {
        let tables = item_table();

        let error = tables.create_table("item", &strings(&["id"]), &strings(&["string"])).unwrap_err();

        assert!(matches!(error.root(), FlatDbError::TableAlreadyExists(_)));
        assert_eq!(format!("{:?}", error), "add table item in catalog: table item already exists");
    }
}
