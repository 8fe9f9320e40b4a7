use crate::sql::plan::plan_step::{PlanStepDesc, PlanStepTrait};
use crate::sql::statement::{OrderBy, SortOrder};
use crate::table::record::Record;
use shared::FlatDbError;

//Stable full sort on string values
pub struct SortStep {
    order_by: OrderBy,
}

impl SortStep {
    pub fn create(order_by: OrderBy) -> SortStep {
        SortStep { order_by }
    }

    //Without a column name, records are sorted by their first column
    fn sort_column_name(&self, records: &Vec<Record>) -> Option<String> {
        match &self.order_by.column_name {
            Some(column_name) => Some(column_name.clone()),
            None => records.first()
                .and_then(|record| record.columns.first())
                .cloned(),
        }
    }
}

impl PlanStepTrait for SortStep {
    fn execute(&self, mut records: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        let column_name = match self.sort_column_name(&records) {
            Some(column_name) => column_name,
            None => return Ok(records),
        };

        match self.order_by.order {
            SortOrder::Asc => records.sort_by(|a, b| a.value(&column_name).cmp(&b.value(&column_name))),
            SortOrder::Desc => records.sort_by(|a, b| b.value(&column_name).cmp(&a.value(&column_name))),
        };

        Ok(records)
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::Sort(self.order_by.clone())
    }
}
