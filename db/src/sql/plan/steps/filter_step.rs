use crate::sql::plan::plan_step::{PlanStepDesc, PlanStepTrait};
use crate::sql::statement::Predicate;
use crate::table::record::Record;
use shared::FlatDbError;

pub struct FilterStep {
    predicate: Predicate,
}

impl FilterStep {
    pub fn create(predicate: Predicate) -> FilterStep {
        FilterStep { predicate }
    }

    //Records without the column never match, for both = and !=
    fn matches(&self, record: &Record) -> bool {
        match &self.predicate {
            Predicate::Equal(column_name, value) => record.find(column_name, value),
            Predicate::NotEqual(column_name, value) => record.value(column_name)
                .map_or(false, |record_value| record_value != value),
        }
    }
}

impl PlanStepTrait for FilterStep {
    fn execute(&self, records: Vec<Record>) -> Result<Vec<Record>, FlatDbError> {
        Ok(records.into_iter()
            .filter(|record| self.matches(record))
            .collect())
    }

    fn desc(&self) -> PlanStepDesc {
        PlanStepDesc::Filter(self.predicate.clone())
    }
}

#[cfg(test)]
mod test {
    use crate::sql::plan::plan_step::PlanStepTrait;
    use crate::sql::plan::steps::filter_step::FilterStep;
    use crate::sql::statement::Predicate;
    use crate::test_utils::record;

    fn items() -> Vec<crate::table::record::Record> {
        vec![
            record(&[("id", "1"), ("name", "laptop")]),
            record(&[("id", "2"), ("name", "phone")]),
            record(&[("id", "3"), ("name", "laptop")]),
        ]
    }

    #[test]
    fn equal() {
        let step = FilterStep::create(Predicate::Equal(String::from("name"), String::from("laptop")));

        let records = step.execute(items()).unwrap();

        assert_eq!(records, vec![items()[0].clone(), items()[2].clone()]);
    }

    #[test]
    fn not_equal() {
        let step = FilterStep::create(Predicate::NotEqual(String::from("name"), String::from("laptop")));

        let records = step.execute(items()).unwrap();

        assert_eq!(records, vec![items()[1].clone()]);
    }

    #[test]
    fn missing_column_filters_out() {
        let equal = FilterStep::create(Predicate::Equal(String::from("color"), String::from("red")));
        let not_equal = FilterStep::create(Predicate::NotEqual(String::from("color"), String::from("red")));

        assert!(equal.execute(items()).unwrap().is_empty());
        assert!(not_equal.execute(items()).unwrap().is_empty());
    }
}
