use crate::sql::token::Token;
use shared::FlatDbError;
use shared::FlatDbError::MalformedQuery;

pub struct Tokenizer {
    chars: Vec<char>,
    //This will point to the next character to scan before calling next_token()
    next: usize,
}

pub fn tokenize(query: &str) -> Result<Vec<Token>, FlatDbError> {
    Tokenizer::create(query.to_string()).tokenize()
}

impl Tokenizer {
    pub fn create(
        string: String,
    ) -> Tokenizer {
        Tokenizer { chars: string.chars().collect(), next: 0 }
    }

    //Consumes the whole query. The last token is always Token::EOF
    pub fn tokenize(mut self) -> Result<Vec<Token>, FlatDbError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token, Token::EOF);
            tokens.push(token);

            if is_eof {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, FlatDbError> {
        self.skip_whitespaces();

        if self.end_reached() {
            return Ok(Token::EOF);
        }
        if self.is_alphanumeric() {
            return Ok(self.word());
        }

        match self.advance() {
            '(' => Ok(Token::OpenParen),
            ')' => Ok(Token::CloseParen),
            ',' => Ok(Token::Comma),
            '=' => Ok(Token::Equal),
            '*' => Ok(Token::Star),
            '"' => self.string('"', "double quote not terminated"),
            '\'' => self.string('\'', "single quote not terminated"),
            '!' => {
                if self.advance_if_next_char_eq('=') {
                    Ok(Token::NotEqual)
                } else {
                    Ok(Token::Exclamation)
                }
            },
            '-' if !self.end_reached() && self.is_number() => Ok(self.negative_number()),
            other => Ok(Token::Unknown(other)),
        }
    }

    fn string(&mut self, quote: char, not_terminated_message: &str) -> Result<Token, FlatDbError> {
        let mut string = String::new();

        while !self.end_reached() && self.current() != quote {
            string.push(self.advance());
        }

        if self.end_reached() {
            return Err(MalformedQuery(String::from(not_terminated_message)));
        }

        //Get rid of the closing quote
        self.advance();

        Ok(Token::String(string))
    }

    fn word(&mut self) -> Token {
        let word = self.alphanumeric_run();

        if let Ok(number) = word.parse::<i64>() {
            return Token::NumberI64(number);
        }

        Token::keyword(&word).unwrap_or(Token::Symbol(word))
    }

    //next points to the first digit after '-'
    fn negative_number(&mut self) -> Token {
        let start = self.next;
        let word = self.alphanumeric_run();

        match format!("-{}", word).parse::<i64>() {
            Ok(number) => Token::NumberI64(number),
            Err(_) => {
                self.next = start;
                Token::Unknown('-')
            }
        }
    }

    fn alphanumeric_run(&mut self) -> String {
        let mut word = String::new();
        while !self.end_reached() && self.is_alphanumeric() {
            word.push(self.advance());
        }
        word
    }

    fn skip_whitespaces(&mut self) {
        while !self.end_reached() && matches!(self.current(), ' ' | '\t' | '\r' | '\n') {
            self.next += 1;
        }
    }

    fn is_alphanumeric(&self) -> bool {
        self.current().is_ascii_alphanumeric()
    }

    fn is_number(&self) -> bool {
        self.current().is_ascii_digit()
    }

    fn advance_if_next_char_eq(&mut self, expected: char) -> bool {
        if !self.end_reached() && self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance(&mut self) -> char {
        let current = self.current();
        self.next += 1;
        current
    }

    fn current(&self) -> char {
        self.chars[self.next]
    }

    fn end_reached(&self) -> bool {
        self.next >= self.chars.len()
    }
}

#[cfg(test)]
mod test {
    use crate::sql::token::Token;
    use crate::sql::tokenizer::{tokenize, Tokenizer};
    use shared::FlatDbError;

    #[test]
    fn select() {
        let mut tokenizer = Tokenizer::create(String::from(
            "SELECT id, name FROM item WHERE name != \"laptop\" ORDER BY id desc LIMIT 10 offset 2"
        ));

        assert!(matches!(tokenizer.next_token().unwrap(), Token::Select));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Symbol(String::from("id")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Comma));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Symbol(String::from("name")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::From));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Symbol(String::from("item")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Where));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Symbol(String::from("name")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::NotEqual));
        assert_eq!(tokenizer.next_token().unwrap(), Token::String(String::from("laptop")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Order));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::By));
        assert_eq!(tokenizer.next_token().unwrap(), Token::Symbol(String::from("id")));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Desc));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Limit));
        assert_eq!(tokenizer.next_token().unwrap(), Token::NumberI64(10));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::Offset));
        assert_eq!(tokenizer.next_token().unwrap(), Token::NumberI64(2));
        assert!(matches!(tokenizer.next_token().unwrap(), Token::EOF));
    }

    #[test]
    fn insert() {
        let tokens = tokenize("insert into item (id, name) values ('1', \"phone\")").unwrap();

        assert_eq!(tokens, vec![
            Token::Insert,
            Token::Into,
            Token::Symbol(String::from("item")),
            Token::OpenParen,
            Token::Symbol(String::from("id")),
            Token::Comma,
            Token::Symbol(String::from("name")),
            Token::CloseParen,
            Token::Values,
            Token::OpenParen,
            Token::String(String::from("1")),
            Token::Comma,
            Token::String(String::from("phone")),
            Token::CloseParen,
            Token::EOF,
        ]);
    }

    #[test]
    fn create_table() {
        let tokens = tokenize("CREATE TABLE item (id String,\n\tname STRING)").unwrap();

        assert_eq!(tokens, vec![
            Token::Create,
            Token::Table,
            Token::Symbol(String::from("item")),
            Token::OpenParen,
            Token::Symbol(String::from("id")),
            Token::StringType,
            Token::Comma,
            Token::Symbol(String::from("name")),
            Token::StringType,
            Token::CloseParen,
            Token::EOF,
        ]);
    }

    #[test]
    fn words_with_digits() {
        let tokens = tokenize("select * from t1 limit 007").unwrap();

        assert_eq!(tokens[3], Token::Symbol(String::from("t1")));
        assert_eq!(tokens[5], Token::NumberI64(7));
    }

    #[test]
    fn negative_numbers() {
        let tokens = tokenize("limit -3 - x").unwrap();

        assert_eq!(tokens, vec![
            Token::Limit,
            Token::NumberI64(-3),
            Token::Unknown('-'),
            Token::Symbol(String::from("x")),
            Token::EOF,
        ]);
    }

    #[test]
    fn exclamation() {
        let tokens = tokenize("a ! b !").unwrap();

        assert_eq!(tokens[1], Token::Exclamation);
        assert_eq!(tokens[3], Token::Exclamation);
        assert_eq!(tokens[4], Token::EOF);
    }

    #[test]
    fn unknown_characters() {
        let tokens = tokenize("select ; from").unwrap();

        assert_eq!(tokens[1], Token::Unknown(';'));
        assert_eq!(tokens[2], Token::From);
    }

    #[test]
    fn quote_not_terminated() {
        let double = tokenize("select * from t where a = \"x");
        let single = tokenize("select * from t where a = 'x");

        assert!(matches!(double, Err(FlatDbError::MalformedQuery(ref message)) if message == "double quote not terminated"));
        assert!(matches!(single, Err(FlatDbError::MalformedQuery(ref message)) if message == "single quote not terminated"));
    }

    #[test]
    fn empty_query() {
        assert_eq!(tokenize("   ").unwrap(), vec![Token::EOF]);
    }
}
