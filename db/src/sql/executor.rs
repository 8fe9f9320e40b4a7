use crate::sql::plan::plan_step::PlanStep;
use crate::table::record::Record;
use shared::FlatDbError;

//Every step consumes the output of the previous one. The first step receives no records
pub fn execute_plan(plan: &Vec<PlanStep>) -> Result<Vec<Record>, FlatDbError> {
    plan.iter()
        .try_fold(Vec::new(), |records, step| step.execute(records))
        .map_err(|e| e.with_context("compute select result"))
}
