pub mod flat_db;

mod selection;
mod table;
mod sql;

#[cfg(test)]
mod test_utils;

pub use flat_db::FlatDb;
pub use selection::Selection;
pub use sql::statement::*;
pub use sql::statement_result::StatementResult;
pub use sql::parser::parse;
pub use sql::tokenizer::tokenize;
pub use sql::token::Token;
pub use table::record::Record;
pub use table::schema::*;
pub use table::table_source::{Row, TableSource};
