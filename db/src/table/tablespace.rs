use crate::table::table_source::Row;
use shared::{logger, FlatDbError, FlatDbFile, FlatDbFileMode, FlatDbLayer, FlatDbOptions};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

//{"item":[{"id":"1","name":"laptop"},{"id":"2"}]}
type TablespaceContent = HashMap<String, Vec<Row>>;

pub struct Tablespace {
    file: FlatDbFile,
    path: PathBuf,
}

impl Tablespace {
    pub fn create(options: &Arc<FlatDbOptions>) -> Result<Tablespace, FlatDbError> {
        let path = options.tablespace_path();
        let file = FlatDbFile::open(path.as_path(), FlatDbFileMode::RandomWrites)
            .map_err(|e| FlatDbError::CannotOpenTablespace(path.clone(), e))?;

        Ok(Tablespace { file, path })
    }

    pub fn create_table(&mut self, table_name: &str) -> Result<(), FlatDbError> {
        let mut content = self.read_content()?.unwrap_or_default();
        if content.contains_key(table_name) {
            return Err(FlatDbError::TableAlreadyExists(table_name.to_string()));
        }

        content.insert(table_name.to_string(), Vec::new());
        self.write_content(&content)
    }

    pub fn read_all(&mut self, table_name: &str) -> Result<Vec<Row>, FlatDbError> {
        self.read_content()?
            .and_then(|mut content| content.remove(table_name))
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))
    }

    pub fn append_row(&mut self, table_name: &str, row: Row) -> Result<(), FlatDbError> {
        let mut content = self.read_content()?
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))?;
        let rows = content.get_mut(table_name)
            .ok_or_else(|| FlatDbError::TableNotFound(table_name.to_string()))?;

        rows.push(row);
        let n_rows = rows.len();
        self.write_content(&content)?;

        logger().debug(FlatDbLayer::Tablespace, &format!(
            "Appended row to table {}. Nº rows: {}", table_name, n_rows
        ));

        Ok(())
    }

    //None if the file is empty, no table has been created yet
    fn read_content(&mut self) -> Result<Option<TablespaceContent>, FlatDbError> {
        let bytes = self.file.read_all()
            .map_err(|e| FlatDbError::CannotReadTablespace(self.path.clone(), e))?;
        if bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| FlatDbError::CannotDecodeTablespace(self.path.clone(), e))
    }

    fn write_content(&mut self, content: &TablespaceContent) -> Result<(), FlatDbError> {
        let bytes = serde_json::to_vec(content)
            .map_err(|e| FlatDbError::CannotEncodeTablespace(e))?;
        self.file.save_write(&bytes)
            .map_err(|e| FlatDbError::CannotWriteTablespace(self.path.clone(), e))
    }
}

#[cfg(test)]
mod test {
    use crate::table::tablespace::Tablespace;
    use crate::table::table_source::Row;
    use crate::test_utils::test_options;
    use shared::FlatDbError;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn create_append_read() {
        let options = test_options();
        let mut tablespace = Tablespace::create(&options).unwrap();

        tablespace.create_table("item").unwrap();
        assert!(tablespace.read_all("item").unwrap().is_empty());

        tablespace.append_row("item", row(&[("id", "1"), ("name", "laptop")])).unwrap();
        tablespace.append_row("item", row(&[("id", "2")])).unwrap();

        let mut reopened = Tablespace::create(&options).unwrap();
        let rows = reopened.read_all("item").unwrap();
        assert_eq!(rows, vec![row(&[("id", "1"), ("name", "laptop")]), row(&[("id", "2")])]);
    }

    #[test]
    fn tables_are_independent() {
        let mut tablespace = Tablespace::create(&test_options()).unwrap();
        tablespace.create_table("item").unwrap();
        tablespace.create_table("user").unwrap();

        tablespace.append_row("user", row(&[("name", "alice")])).unwrap();

        assert!(tablespace.read_all("item").unwrap().is_empty());
        assert_eq!(tablespace.read_all("user").unwrap().len(), 1);
    }

    #[test]
    fn missing_tables() {
        let mut tablespace = Tablespace::create(&test_options()).unwrap();

        assert!(matches!(tablespace.read_all("item"), Err(FlatDbError::TableNotFound(_))));
        assert!(matches!(tablespace.append_row("item", Row::new()), Err(FlatDbError::TableNotFound(_))));

        tablespace.create_table("item").unwrap();
        assert!(matches!(tablespace.create_table("item"), Err(FlatDbError::TableAlreadyExists(_))));
        assert!(matches!(tablespace.read_all("user"), Err(FlatDbError::TableNotFound(_))));
    }
}
