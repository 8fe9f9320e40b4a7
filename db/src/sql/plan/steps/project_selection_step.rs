use crate::selection::Selection;
use crate::sql::plan::plan_step::{PlanStepDesc, PlanStepTrait};
use crate::table::record::Record;
use shared::FlatDbError;

pub struct ProjectSelectionStep {
    selection_to_project: Selection,
}

impl ProjectSelectionStep {
    pub fn create(
        required_selection: Selection,
    ) -> ProjectSelectionStep {
        ProjectSelectionStep {
            selection_to_project: required_selection,
        }
    }
}

impl PlanStepTrait for ProjectSelectionStep {
    fn execute(&self, mut records: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        for record in records.iter_mut() {
            record.project_selection(&self.selection_to_project);
        }

        Ok(records)
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::ProjectSelection(self.selection_to_project.clone())
    }
}
