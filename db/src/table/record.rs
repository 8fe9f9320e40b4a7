use crate::selection::Selection;

//One row materialized for a query. The three vectors always have the same length:
//columns[i], types[i] and values[i] describe the same field
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub(crate) columns: Vec<String>,
    pub(crate) types: Vec<String>,
    pub(crate) values: Vec<String>,
}

impl Record {
    pub fn create(
        columns: Vec<String>,
        types: Vec<String>,
        values: Vec<String>
    ) -> Record {
        debug_assert!(columns.len() == types.len() && types.len() == values.len());
        Record { columns, types, values }
    }

    pub fn columns(&self) -> &Vec<String> {
        &self.columns
    }

    pub fn values(&self) -> &Vec<String> {
        &self.values
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == column_name)
    }

    pub fn value(&self, column_name: &str) -> Option<&String> {
        self.column_index(column_name)
            .map(|index| &self.values[index])
    }

    //Returns false if the column doesn't exist
    pub fn find(&self, column_name: &str, expected_value: &str) -> bool {
        match self.value(column_name) {
            Some(value) => value == expected_value,
            None => false,
        }
    }

    //Keeps the record's own column order, not the selection order
    pub fn project_selection(&mut self, selection: &Selection) {
        if selection.is_all() {
            return;
        }

        let mut columns_to_remove = Vec::new();
        for column_name in &self.columns {
            if !selection.contains(column_name) {
                columns_to_remove.push(column_name.clone());
            }
        }

        for column_to_remove in columns_to_remove {
            self.remove_column(&column_to_remove);
        }
    }

    pub fn remove_column(&mut self, column_name: &str) -> Option<String> {
        let index = self.column_index(column_name)?;
        self.columns.remove(index);
        self.types.remove(index);
        Some(self.values.remove(index))
    }
}

#[cfg(test)]
mod test {
    use crate::selection::Selection;
    use crate::table::record::Record;

    fn item(id: &str, name: &str, price: &str) -> Record {
        Record::create(
            vec![String::from("id"), String::from("name"), String::from("price")],
            vec![String::from("string"), String::from("string"), String::from("string")],
            vec![id.to_string(), name.to_string(), price.to_string()],
        )
    }

    #[test]
    fn find() {
        let record = item("1", "laptop", "1000");

        assert!(record.find("name", "laptop"));
        assert!(!record.find("name", "phone"));
        assert!(!record.find("color", "laptop"));
        assert_eq!(record.value("price"), Some(&String::from("1000")));
        assert_eq!(record.column_index("missing"), None);
    }

    #[test]
    fn project_selection_keeps_record_order() {
        let mut record = item("1", "laptop", "1000");

        record.project_selection(&Selection::Some(vec![String::from("price"), String::from("id"), String::from("color")]));

        assert_eq!(record.columns, vec![String::from("id"), String::from("price")]);
        assert_eq!(record.types, vec![String::from("string"), String::from("string")]);
        assert_eq!(record.values, vec![String::from("1"), String::from("1000")]);
    }

    #[test]
    fn project_selection_is_idempotent() {
        let selection = Selection::Some(vec![String::from("name")]);
        let mut once = item("1", "laptop", "1000");
        once.project_selection(&selection);
        let mut twice = once.clone();
        twice.project_selection(&selection);

        assert_eq!(once, twice);
    }

    #[test]
    fn project_all() {
        let mut record = item("1", "laptop", "1000");
        record.project_selection(&Selection::All);

        assert_eq!(record, item("1", "laptop", "1000"));
    }

    #[test]
    fn remove_column() {
        let mut record = item("1", "laptop", "1000");

        assert_eq!(record.remove_column("name"), Some(String::from("laptop")));
        assert_eq!(record.remove_column("name"), None);
        assert_eq!(record.n_columns(), 2);
        assert_eq!(record.types.len(), 2);
    }
}
