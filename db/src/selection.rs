#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    All,
    Some(Vec<String>)
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn contains(&self, column_name: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Some(columns) => columns.iter().any(|column| column == column_name),
        }
    }
}
