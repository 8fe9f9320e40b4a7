mod flatdb_file;
mod flatdb_options;
mod flatdb_error;

pub mod connection;
pub mod logger;

pub use flatdb_file::*;
pub use flatdb_options::*;
pub use flatdb_error::*;
pub use logger::{logger, FlatDbLayer, Logger};
