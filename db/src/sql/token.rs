#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    OpenParen, // "("
    CloseParen, // ")"
    Comma, // ","
    Equal, // "="
    NotEqual, // "!="
    Exclamation, // "!"
    Star, // "*"

    Select,
    From,
    Where,
    Limit,
    Offset,
    Order,
    By,
    Asc,
    Desc,
    Insert,
    Into,
    Values,
    Create,
    Table,
    StringType, // "string", the only column type

    Symbol(String), //Unquoted table or column names
    String(String), // "some text" or 'some text'
    NumberI64(i64),
    Unknown(char), //Rejected by the parser

    EOF
}

impl Token {
    //Name used in "<expected> is expected but got <actual>" messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Comma => ",",
            Token::Equal => "=",
            Token::NotEqual => "!=",
            Token::Exclamation => "!",
            Token::Star => "*",
            Token::Select => "select",
            Token::From => "from",
            Token::Where => "where",
            Token::Limit => "limit",
            Token::Offset => "offset",
            Token::Order => "order",
            Token::By => "by",
            Token::Asc => "asc",
            Token::Desc => "desc",
            Token::Insert => "insert",
            Token::Into => "into",
            Token::Values => "values",
            Token::Create => "create",
            Token::Table => "table",
            Token::StringType => "string",
            Token::Symbol(_) => "symbol",
            Token::String(_) => "string value",
            Token::NumberI64(_) => "integer value",
            Token::Unknown(_) => "unknown character",
            Token::EOF => "EOF",
        }
    }

    pub fn keyword(word: &str) -> Option<Token> {
        match word.to_lowercase().as_str() {
            "select" => Some(Token::Select),
            "from" => Some(Token::From),
            "where" => Some(Token::Where),
            "limit" => Some(Token::Limit),
            "offset" => Some(Token::Offset),
            "order" => Some(Token::Order),
            "by" => Some(Token::By),
            "asc" => Some(Token::Asc),
            "desc" => Some(Token::Desc),
            "insert" => Some(Token::Insert),
            "into" => Some(Token::Into),
            "values" => Some(Token::Values),
            "create" => Some(Token::Create),
            "table" => Some(Token::Table),
            "string" => Some(Token::StringType),
            _ => None,
        }
    }

    //Payload-less comparison, "symbol" matches any symbol
    pub fn is_same_kind(&self, other: &Token) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
