use crate::sql::parser::parse;
use crate::sql::statement_executor::StatementExecutor;
use crate::sql::statement_result::StatementResult;
use crate::table::tables::Tables;
use shared::{logger, FlatDbError, FlatDbLayer, FlatDbOptions, Logger};
use std::sync::Arc;

pub struct FlatDb {
    statement_executor: StatementExecutor,

    options: Arc<FlatDbOptions>
}

impl FlatDb {
    pub fn create(
        options: FlatDbOptions,
    ) -> Result<FlatDb, FlatDbError> {
        let options = Arc::new(options);
        Logger::init(options.clone());

        let tables = Arc::new(Tables::create(&options)?);

        Ok(FlatDb {
            statement_executor: StatementExecutor::create(&options, tables),
            options,
        })
    }

    //One statement per query
    pub fn execute(&self, query: &str) -> Result<StatementResult, FlatDbError> {
        let statement = parse(query)
            .map_err(|e| e.with_context("grammatically invalid"))?;

        if self.options.is_debug_logging_enabled() {
            logger().debug(FlatDbLayer::Db, &format!("statement: {:?}", statement));
        }

        self.statement_executor.execute(statement)
    }
}
