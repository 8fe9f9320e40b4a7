use crate::selection::Selection;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
    Insert(InsertStatement),
    CreateTable(CreateTableStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Equal(String, String), //Column name, value
    NotEqual(String, String), //Column name, value
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    //None sorts by the first column of the table
    pub(crate) column_name: Option<String>,
    pub(crate) order: SortOrder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub(crate) selection: Selection,
    pub(crate) table_name: String,
    pub(crate) where_expr: Option<Predicate>,
    pub(crate) order_by: Option<OrderBy>,
    pub(crate) limit: Option<usize>,
    pub(crate) offset: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub(crate) table_name: String,
    //Empty means all columns, in catalog order
    pub(crate) columns: Vec<String>,
    pub(crate) values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub(crate) table_name: String,
    pub(crate) columns: Vec<String>,
    pub(crate) types: Vec<String>,
}

impl SelectStatement {
    pub fn has_limit_or_offset(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }
}
