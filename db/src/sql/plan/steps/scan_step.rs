use crate::sql::plan::plan_step::{PlanStepDesc, PlanStepTrait};
use crate::table::record::Record;
use crate::table::table_source::TableSource;
use shared::FlatDbError;
use std::sync::Arc;

//Always the first step. Columns come in catalog order, missing values are empty strings
pub struct ScanStep {
    table_name: String,
    source: Arc<dyn TableSource + Send + Sync>,
}

impl ScanStep {
    pub fn create(
        table_name: String,
        source: Arc<dyn TableSource + Send + Sync>,
    ) -> ScanStep {
        ScanStep { table_name, source }
    }
}

impl PlanStepTrait for ScanStep {
    fn execute(&self, _: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        let schema = self.source.get_table_schema(&self.table_name)?;
        let rows = self.source.read_all_rows(&self.table_name)?;
        let columns = schema.column_names();
        let types = schema.column_types();

        Ok(rows.into_iter()
            .map(|row| {
                let values = columns.iter()
                    .map(|column| row.get(column).cloned().unwrap_or_default())
                    .collect();
                Record::create(columns.clone(), types.clone(), values)
            })
            .collect())
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::Scan(self.table_name.clone())
    }
}
