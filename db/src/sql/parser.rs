use crate::selection::Selection;
use crate::sql::statement::{CreateTableStatement, InsertStatement, OrderBy, Predicate, SelectStatement, SortOrder, Statement};
use crate::sql::token::Token;
use crate::sql::tokenizer::tokenize;
use shared::FlatDbError;
use shared::FlatDbError::{IllegalToken, MalformedQuery};

const MAX_COLUMNS: usize = 100;

//Recursive descent parser. A statement is only returned once every token up to EOF has been
//consumed, so any error aborts the whole parse.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

pub fn parse(query: &str) -> Result<Statement, FlatDbError> {
    tokenize(query)
        .and_then(|tokens| Parser::create(tokens).parse_statement())
        .map_err(|e| e.with_context("parse statement"))
}

impl Parser {
    pub fn create(mut tokens: Vec<Token>) -> Parser {
        if !matches!(tokens.last(), Some(Token::EOF)) {
            tokens.push(Token::EOF);
        }

        Parser { tokens, current: 0 }
    }

    pub fn parse_statement(&mut self) -> Result<Statement, FlatDbError> {
        let statement = match self.advance() {
            Token::Select => self.select(),
            Token::Insert => self.insert(),
            Token::Create => self.create_table(),
            other => Err(IllegalToken(format!("unknown token type: {}", other.kind_name())))
        }?;
        self.expect_token(Token::EOF)?;
        Ok(statement)
    }

    fn select(&mut self) -> Result<Statement, FlatDbError> {
        let selection = self.selection()?;
        self.expect_token(Token::From)?;
        let table_name = self.identifier()?;
        let where_expr = self.where_clause()?;
        let order_by = self.order_clause()?;
        let (limit, offset) = self.limit_offset_clause()?;

        Ok(Statement::Select(SelectStatement {
            selection,
            table_name,
            where_expr,
            order_by,
            limit,
            offset,
        }))
    }

    fn selection(&mut self) -> Result<Selection, FlatDbError> {
        if self.maybe_expect_token(Token::Star) {
            return Ok(Selection::All);
        }

        let mut columns = Vec::new();
        loop {
            if columns.len() == MAX_COLUMNS {
                return Err(MalformedQuery(String::from("number of columns must be less than 100")));
            }

            columns.push(self.identifier()?);

            if !self.maybe_expect_token(Token::Comma) {
                break;
            }
        }

        Ok(Selection::Some(columns))
    }

    fn where_clause(&mut self) -> Result<Option<Predicate>, FlatDbError> {
        if !self.maybe_expect_token(Token::Where) {
            return Ok(None);
        }

        let column_name = self.identifier()?;

        if self.maybe_expect_token(Token::Equal) {
            Ok(Some(Predicate::Equal(column_name, self.string_value()?)))
        } else if self.maybe_expect_token(Token::NotEqual) {
            Ok(Some(Predicate::NotEqual(column_name, self.string_value()?)))
        } else {
            Err(MalformedQuery(String::from("= or != must be specified in where clause")))
        }
    }

    fn order_clause(&mut self) -> Result<Option<OrderBy>, FlatDbError> {
        if !self.maybe_expect_token(Token::Order) {
            return Ok(None);
        }
        if !self.maybe_expect_token(Token::By) {
            return Err(MalformedQuery(String::from("'by' must follow 'order'")));
        }

        let column_name = match self.current_token() {
            Token::Symbol(_) => Some(self.identifier()?),
            _ => None,
        };

        let order = if self.maybe_expect_token(Token::Asc) {
            SortOrder::Asc
        } else if self.maybe_expect_token(Token::Desc) {
            SortOrder::Desc
        } else {
            return Err(MalformedQuery(String::from("invalid direction specified after 'order by'")));
        };

        Ok(Some(OrderBy { column_name, order }))
    }

    //limit and offset can come in any order, each one at most once
    fn limit_offset_clause(&mut self) -> Result<(Option<usize>, Option<usize>), FlatDbError> {
        if self.maybe_expect_token(Token::Limit) {
            let limit = self.non_negative_number("limit")?;
            let mut offset = None;
            if self.maybe_expect_token(Token::Offset) {
                offset = Some(self.non_negative_number("offset")?);
            }
            return Ok((Some(limit), offset));
        }

        if self.maybe_expect_token(Token::Offset) {
            let offset = self.non_negative_number("offset")?;
            let mut limit = None;
            if self.maybe_expect_token(Token::Limit) {
                limit = Some(self.non_negative_number("limit")?);
            }
            return Ok((limit, Some(offset)));
        }

        Ok((None, None))
    }

    fn insert(&mut self) -> Result<Statement, FlatDbError> {
        self.expect_token(Token::Into)?;
        let table_name = self.identifier()?;

        //Column names are optional
        let mut columns = Vec::new();
        if self.maybe_expect_token(Token::OpenParen) {
            columns = self.list_until_close_paren("cols must be less than 100", |parser| parser.identifier())?;
        }

        self.expect_token(Token::Values)?;
        self.expect_token(Token::OpenParen)?;
        let values = self.list_until_close_paren("values must be less than 100", |parser| parser.string_value())?;

        Ok(Statement::Insert(InsertStatement {
            table_name,
            columns,
            values,
        }))
    }

    fn create_table(&mut self) -> Result<Statement, FlatDbError> {
        self.expect_token(Token::Table)?;
        let table_name = self.identifier()?;
        self.expect_token(Token::OpenParen)?;

        let columns_with_types = self.list_until_close_paren("a table can contain 100 columns at most", |parser| {
            let column_name = parser.identifier()?;
            let column_type = parser.column_type()?;
            Ok((column_name, column_type))
        })?;
        let (columns, types) = columns_with_types.into_iter().unzip();

        Ok(Statement::CreateTable(CreateTableStatement {
            table_name,
            columns,
            types,
        }))
    }

    //item ("," item)* ")". The opening paren has already been consumed
    fn list_until_close_paren<T>(
        &mut self,
        too_many_message: &str,
        mut item: impl FnMut(&mut Parser) -> Result<T, FlatDbError>,
    ) -> Result<Vec<T>, FlatDbError> {
        let mut items = Vec::new();

        loop {
            if items.len() == MAX_COLUMNS {
                return Err(MalformedQuery(String::from(too_many_message)));
            }

            items.push(item(self)?);

            if self.maybe_expect_token(Token::CloseParen) {
                return Ok(items);
            }
            self.expect_token(Token::Comma)?;
        }
    }

    fn column_type(&mut self) -> Result<String, FlatDbError> {
        self.expect_token(Token::StringType)?;
        Ok(String::from("string"))
    }

    fn identifier(&mut self) -> Result<String, FlatDbError> {
        match self.current_token().clone() {
            Token::Symbol(identifier) => {
                self.advance();
                Ok(identifier)
            },
            other => Err(Self::unexpected_token("symbol", &other))
        }
    }

    fn string_value(&mut self) -> Result<String, FlatDbError> {
        match self.current_token().clone() {
            Token::String(string) => {
                self.advance();
                Ok(string)
            },
            other => Err(Self::unexpected_token("string value", &other))
        }
    }

    fn number_i64(&mut self) -> Result<i64, FlatDbError> {
        match self.current_token().clone() {
            Token::NumberI64(number) => {
                self.advance();
                Ok(number)
            },
            other => Err(Self::unexpected_token("integer value", &other))
        }
    }

    fn non_negative_number(&mut self, clause_name: &str) -> Result<usize, FlatDbError> {
        let number = self.number_i64()?;
        if number < 0 {
            return Err(MalformedQuery(format!("{} must not be negative", clause_name)));
        }
        Ok(number as usize)
    }

    //EOF is never consumed, so current always points to a valid token
    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if !matches!(token, Token::EOF) {
            self.current += 1;
        }
        token
    }

    fn current_token(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn maybe_expect_token(&mut self, expected_token: Token) -> bool {
        if self.current_token().is_same_kind(&expected_token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_token(&mut self, expected_token: Token) -> Result<Token, FlatDbError> {
        if self.current_token().is_same_kind(&expected_token) {
            Ok(self.advance())
        } else {
            Err(Self::unexpected_token(expected_token.kind_name(), self.current_token()))
        }
    }

    fn unexpected_token(expected: &str, actual: &Token) -> FlatDbError {
        IllegalToken(format!("{} is expected but got {}", expected, actual.kind_name()))
    }
}
