use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "name")]
    pub table_name: String,
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(rename = "name")]
    pub column_name: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

impl Schema {
    pub fn create(
        table_name: &str,
        columns: &Vec<String>,
        types: &Vec<String>,
    ) -> Schema {
        Schema {
            table_name: table_name.to_string(),
            columns: columns.iter()
                .zip(types.iter())
                .map(|(column_name, column_type)| Column {
                    column_name: column_name.clone(),
                    column_type: column_type.clone(),
                })
                .collect(),
        }
    }

    pub fn get_column(&self, column_name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.column_name == column_name)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter()
            .map(|column| column.column_name.clone())
            .collect()
    }

    pub fn column_types(&self) -> Vec<String> {
        self.columns.iter()
            .map(|column| column.column_type.clone())
            .collect()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
