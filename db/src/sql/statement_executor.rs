use crate::sql::executor::execute_plan;
use crate::sql::plan::planner::Planner;
use crate::sql::statement::{CreateTableStatement, InsertStatement, SelectStatement, Statement};
use crate::sql::statement_result::StatementResult;
use crate::table::tables::Tables;
use shared::{FlatDbError, FlatDbOptions};
use std::sync::Arc;

pub struct StatementExecutor {
    planner: Planner,
    tables: Arc<Tables>,
}

impl StatementExecutor {
    pub fn create(
        options: &Arc<FlatDbOptions>,
        tables: Arc<Tables>,
    ) -> StatementExecutor {
        StatementExecutor {
            planner: Planner::create(options.clone()),
            tables,
        }
    }

    pub fn execute(&self, statement: Statement) -> Result<StatementResult, FlatDbError> {
        match statement {
            Statement::CreateTable(create_table_statement) => self.create_table(create_table_statement)
                .map_err(|e| e.with_context("execute create statement")),
            Statement::Insert(insert_statement) => self.insert(insert_statement)
                .map_err(|e| e.with_context("execute insert statement")),
            Statement::Select(select_statement) => self.select(select_statement)
                .map_err(|e| e.with_context("execute select statement")),
        }
    }

    fn create_table(&self, statement: CreateTableStatement) -> Result<StatementResult, FlatDbError> {
        self.tables.create_table(&statement.table_name, &statement.columns, &statement.types)?;
        Ok(StatementResult::TableCreated(statement.table_name))
    }

    fn insert(&self, statement: InsertStatement) -> Result<StatementResult, FlatDbError> {
        self.tables.insert(&statement.table_name, &statement.columns, &statement.values)?;
        Ok(StatementResult::Inserted)
    }

    fn select(&self, statement: SelectStatement) -> Result<StatementResult, FlatDbError> {
        let plan = self.planner.plan_select(statement, self.tables.clone());
        let records = execute_plan(&plan)?;
        Ok(StatementResult::Records(records))
    }
}
