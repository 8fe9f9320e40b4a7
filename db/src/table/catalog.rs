use crate::table::schema::Schema;
use serde::{Deserialize, Serialize};
use shared::{logger, FlatDbError, FlatDbFile, FlatDbFileMode, FlatDbLayer, FlatDbOptions};
use std::path::PathBuf;
use std::sync::Arc;

const STRING_TYPE: &str = "string";

//{"tables":[{"name":"item","columns":[{"name":"id","type":"string"}]}]}
#[derive(Serialize, Deserialize, Default)]
struct CatalogContent {
    tables: Vec<Schema>,
}

pub struct Catalog {
    file: FlatDbFile,
    path: PathBuf,
}

impl Catalog {
    pub fn create(options: &Arc<FlatDbOptions>) -> Result<Catalog, FlatDbError> {
        let path = options.catalog_path();
        let file = FlatDbFile::open(path.as_path(), FlatDbFileMode::RandomWrites)
            .map_err(|e| FlatDbError::CannotOpenCatalog(path.clone(), e))?;

        Ok(Catalog { file, path })
    }

    pub fn add_table(
        &mut self,
        table_name: &str,
        columns: &Vec<String>,
        types: &Vec<String>,
    ) -> Result<(), FlatDbError> {
        if columns.len() != types.len() {
            return Err(FlatDbError::ColumnMismatch(String::from("the length of cols and types must be the same")));
        }
        if columns.is_empty() {
            return Err(FlatDbError::ColumnMismatch(String::from("table must have at least one column")));
        }
        if let Some(invalid_type) = types.iter().find(|column_type| column_type.as_str() != STRING_TYPE) {
            return Err(FlatDbError::InvalidType(invalid_type.clone()));
        }

        let mut content = self.read_content()?;
        if content.tables.iter().any(|schema| schema.table_name == table_name) {
            return Err(FlatDbError::TableAlreadyExists(table_name.to_string()));
        }

        content.tables.push(Schema::create(table_name, columns, types));
        self.write_content(&content)?;

        logger().debug(FlatDbLayer::Catalog, &format!(
            "Added table {} with columns {:?}", table_name, columns
        ));

        Ok(())
    }

    //Removing a table that doesn't exist is a no-op
    pub fn remove_table(&mut self, table_name: &str) -> Result<(), FlatDbError> {
        let mut content = self.read_content()?;
        let n_tables = content.tables.len();
        content.tables.retain(|schema| schema.table_name != table_name);

        if content.tables.len() != n_tables {
            self.write_content(&content)?;
            logger().debug(FlatDbLayer::Catalog, &format!("Removed table {}", table_name));
        }

        Ok(())
    }

    pub fn get_table_schema(&mut self, table_name: &str) -> Result<Schema, FlatDbError> {
        self.read_content()?
            .tables
            .into_iter()
            .find(|schema| schema.table_name == table_name)
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))
    }

    //An empty file is an empty catalog. This happens on the first run
    fn read_content(&mut self) -> Result<CatalogContent, FlatDbError> {
        let bytes = self.file.read_all()
            .map_err(|e| FlatDbError::CannotReadCatalog(self.path.clone(), e))?;
        if bytes.is_empty() {
            return Ok(CatalogContent::default());
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| FlatDbError::CannotDecodeCatalog(self.path.clone(), e))
    }

    fn write_content(&mut self, content: &CatalogContent) -> Result<(), FlatDbError> {
        let bytes = serde_json::to_vec(content)
            .map_err(|e| FlatDbError::CannotEncodeCatalog(e))?;
        self.file.save_write(&bytes)
            .map_err(|e| FlatDbError::CannotWriteCatalog(self.path.clone(), e))
    }
}
