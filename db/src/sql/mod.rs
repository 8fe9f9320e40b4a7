pub mod statement_executor;
pub mod statement;
pub mod parser;
pub mod statement_result;
pub mod token;
pub mod tokenizer;

pub(crate) mod plan;
pub(crate) mod executor;
