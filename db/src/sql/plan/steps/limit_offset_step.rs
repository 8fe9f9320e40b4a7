use crate::sql::plan::plan_step::{PlanStepDesc, PlanStepTrait};
use crate::table::record::Record;
use shared::FlatDbError;

pub struct LimitOffsetStep {
    limit: Option<usize>, //None means no cap
    offset: Option<usize>,
}

impl LimitOffsetStep {
    pub fn create(
        limit: Option<usize>,
        offset: Option<usize>
    ) -> LimitOffsetStep {
        LimitOffsetStep { limit, offset }
    }
}

impl PlanStepTrait for LimitOffsetStep {
    fn execute(&self, records: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        let limit = self.limit.unwrap_or(records.len());
        let offset = self.offset.unwrap_or(0);

        if limit == 0 || offset >= records.len() {
            return Ok(Vec::new());
        }

        Ok(records.into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::LimitOffset(self.limit, self.offset)
    }
}

#[cfg(test)]
mod test {
    use crate::sql::plan::plan_step::PlanStepTrait;
    use crate::sql::plan::steps::limit_offset_step::LimitOffsetStep;
    use crate::table::record::Record;
    use crate::test_utils::record;

    fn records() -> Vec<Record> {
        vec![record(&[("k", "1")]), record(&[("k", "2")]), record(&[("k", "3")])]
    }

    fn run(limit: Option<usize>, offset: Option<usize>) -> Vec<Record> {
        LimitOffsetStep::create(limit, offset).execute(records()).unwrap()
    }

    #[test]
    fn limit_and_offset() {
        assert_eq!(run(Some(1), Some(1)), vec![record(&[("k", "2")])]);
        assert_eq!(run(Some(2), None), vec![record(&[("k", "1")]), record(&[("k", "2")])]);
        assert_eq!(run(None, Some(2)), vec![record(&[("k", "3")])]);
    }

    #[test]
    fn end_is_clamped() {
        assert_eq!(run(Some(10), Some(1)), vec![record(&[("k", "2")]), record(&[("k", "3")])]);
        assert_eq!(run(Some(usize::MAX), Some(2)).len(), 1);
    }

    #[test]
    fn empty_results() {
        assert!(run(Some(0), None).is_empty());
        assert!(run(Some(0), Some(1)).is_empty());
        assert!(run(None, Some(3)).is_empty());
        assert!(run(Some(2), Some(4)).is_empty());
    }
}
