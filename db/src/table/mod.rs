pub mod schema;
pub mod table_source;
pub mod tables;
pub mod record;

pub(crate) mod catalog;
pub(crate) mod tablespace;
