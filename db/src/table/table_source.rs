use crate::table::schema::Schema;
use shared::FlatDbError;
use std::collections::HashMap;

pub type Row = HashMap<String, String>;

//Read side of the storage used by select plans
pub trait TableSource {
    //Err(TableNotFound) if the catalog doesn't have the table
    fn get_table_schema(&self, table_name: &str) -> Result<Schema, FlatDbError>;

    //Rows might not contain every column of the schema
    fn read_all_rows(&self, table_name: &str) -> Result<Vec<Row>, FlatDbError>;
}
