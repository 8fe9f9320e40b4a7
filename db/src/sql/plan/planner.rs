use crate::sql::plan::plan_step::PlanStep;
use crate::sql::plan::steps::filter_step::FilterStep;
use crate::sql::plan::steps::limit_offset_step::LimitOffsetStep;
use crate::sql::plan::steps::project_selection_step::ProjectSelectionStep;
use crate::sql::plan::steps::scan_step::ScanStep;
use crate::sql::plan::steps::sort_step::SortStep;
use crate::sql::statement::SelectStatement;
use crate::table::table_source::TableSource;
use shared::{logger, FlatDbLayer, FlatDbOptions};
use std::sync::Arc;

pub struct Planner {
    options: Arc<FlatDbOptions>
}

impl Planner {
    pub fn create(
        options: Arc<FlatDbOptions>
    ) -> Planner {
        Planner { options }
    }

    //Steps always come in this order: scan, filter, sort, limit/offset, projection.
    //Only scan and projection are always present
    pub fn plan_select(
        &self,
        select_statement: SelectStatement,
        source: Arc<dyn TableSource + Send + Sync>,
    ) -> Vec<PlanStep> {
        let has_limit_or_offset = select_statement.has_limit_or_offset();
        let SelectStatement { selection, table_name, where_expr, order_by, limit, offset } = select_statement;
        let mut plan = Vec::new();

        plan.push(PlanStep::Scan(ScanStep::create(table_name, source)));

        if let Some(predicate) = where_expr {
            plan.push(PlanStep::Filter(FilterStep::create(predicate)));
        }
        if let Some(order_by) = order_by {
            plan.push(PlanStep::Sort(SortStep::create(order_by)));
        }
        if has_limit_or_offset {
            plan.push(PlanStep::LimitOffset(LimitOffsetStep::create(limit, offset)));
        }

        plan.push(PlanStep::ProjectSelection(ProjectSelectionStep::create(selection)));

        if self.options.is_debug_logging_enabled() {
            let desc: Vec<_> = plan.iter().map(|step| step.desc()).collect();
            logger().debug(FlatDbLayer::Db, &format!("plan: {:?}", desc));
        }

        plan
    }
}

#[cfg(test)]
mod test {
    use crate::selection::Selection;
    use crate::sql::parser::parse;
    use crate::sql::plan::plan_step::PlanStepDesc;
    use crate::sql::plan::planner::Planner;
    use crate::sql::statement::{OrderBy, Predicate, SortOrder, Statement};
    use crate::test_utils::{test_options, MockTableSource};
    use std::sync::Arc;

    fn plan_desc(query: &str) -> Vec<PlanStepDesc> {
        let select = match parse(query).unwrap() {
            Statement::Select(select) => select,
            other => panic!("expected select but got {:?}", other),
        };

        Planner::create(test_options())
            .plan_select(select, Arc::new(MockTableSource::create()))
            .iter()
            .map(|step| step.desc())
            .collect()
    }

    #[test]
    fn only_scan_and_projection() {
        assert_eq!(plan_desc("select * from item"), vec![
            PlanStepDesc::Scan(String::from("item")),
            PlanStepDesc::ProjectSelection(Selection::All),
        ]);
    }

    #[test]
    fn every_step() {
        let plan = plan_desc("select name from item where id != '1' order by name desc limit 2 offset 1");

        assert_eq!(plan, vec![
            PlanStepDesc::Scan(String::from("item")),
            PlanStepDesc::Filter(Predicate::NotEqual(String::from("id"), String::from("1"))),
            PlanStepDesc::Sort(OrderBy { column_name: Some(String::from("name")), order: SortOrder::Desc }),
            PlanStepDesc::LimitOffset(Some(2), Some(1)),
            PlanStepDesc::ProjectSelection(Selection::Some(vec![String::from("name")])),
        ]);
    }

    #[test]
    fn offset_without_limit() {
        let plan = plan_desc("select * from item offset 3");

        assert_eq!(plan[1], PlanStepDesc::LimitOffset(None, Some(3)));
        assert_eq!(plan.len(), 3);
    }
}
