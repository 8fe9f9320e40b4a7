use crate::selection::Selection;
use crate::sql::plan::steps::filter_step::FilterStep;
use crate::sql::plan::steps::limit_offset_step::LimitOffsetStep;
use crate::sql::plan::steps::project_selection_step::ProjectSelectionStep;
use crate::sql::plan::steps::scan_step::ScanStep;
use crate::sql::plan::steps::sort_step::SortStep;
use crate::sql::statement::{OrderBy, Predicate};
use crate::table::record::Record;
use shared::FlatDbError;

//A step receives every record produced by the previous one
pub(crate) trait PlanStepTrait {
    fn execute(&self, records: Vec<Record>) -> Result<Vec<Record>, FlatDbError>;
    fn desc(&self) -> PlanStepDesc;
}

pub enum PlanStep {
    Scan(ScanStep),
    Filter(FilterStep),
    Sort(SortStep),
    LimitOffset(LimitOffsetStep),
    ProjectSelection(ProjectSelectionStep),

    #[cfg(test)]
    Mock(MockStep)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanStepDesc {
    Scan(String), //Table name
    Filter(Predicate),
    Sort(OrderBy),
    LimitOffset(Option<usize>, Option<usize>), //Limit, Offset
    ProjectSelection(Selection),

    #[cfg(test)]
    Mock,
}

impl PlanStep {
    pub fn execute(&self, records: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        match self {
            PlanStep::Scan(step) => step.execute(records),
            PlanStep::Filter(step) => step.execute(records),
            PlanStep::Sort(step) => step.execute(records),
            PlanStep::LimitOffset(step) => step.execute(records),
            PlanStep::ProjectSelection(step) => step.execute(records),
            #[cfg(test)]
            PlanStep::Mock(step) => step.execute(records),
        }
    }

    pub fn desc(&self) -> PlanStepDesc {
        match self {
            PlanStep::Scan(step) => step.desc(),
            PlanStep::Filter(step) => step.desc(),
            PlanStep::Sort(step) => step.desc(),
            PlanStep::LimitOffset(step) => step.desc(),
            PlanStep::ProjectSelection(step) => step.desc(),
            #[cfg(test)]
            PlanStep::Mock(step) => step.desc(),
        }
    }
}

//Returns the given records (or error) regardless of its input
#[cfg(test)]
pub struct MockStep {
    pub(crate) records: Vec<Record>,
    pub(crate) fail: bool,
}

#[cfg(test)]
impl MockStep {
    pub fn create(records: Vec<Record>) -> MockStep {
        MockStep { records, fail: false }
    }

    pub fn failing() -> MockStep {
        MockStep { records: Vec::new(), fail: true }
    }
}

#[cfg(test)]
impl PlanStepTrait for MockStep {
    fn execute(&self, _: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        if self.fail {
            Err(FlatDbError::TableNotFound(String::from("mock")))
        } else {
            Ok(self.records.clone())
        }
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::Mock
    }
}
