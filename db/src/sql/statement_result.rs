use crate::table::record::Record;

#[derive(Debug)]
pub enum StatementResult {
    TableCreated(String), //Table name
    Inserted,
    Records(Vec<Record>),
}

impl StatementResult {
    pub fn message(&self) -> String {
        match self {
            StatementResult::TableCreated(table_name) => format!("table {} created", table_name),
            StatementResult::Inserted => String::from("inserted"),
            StatementResult::Records(records) if records.is_empty() => String::from("no results"),
            StatementResult::Records(records) => format!("{} records", records.len()),
        }
    }

    pub fn records(&self) -> Option<&Vec<Record>> {
        match self {
            StatementResult::Records(records) => Some(records),
            _ => None,
        }
    }
}
