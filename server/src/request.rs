use shared::connection::Connection;
use shared::FlatDbError;
use shared::FlatDbError::InvalidRequestBinaryFormat;
use std::io::{Read, Write};

#[derive(Debug)]
pub enum Request {
    Statement(String), //Request Type ID: 1
}

impl Request {
    pub fn deserialize_from_connection<S: Read + Write>(
        connection: &mut Connection<S>
    ) -> Result<Request, FlatDbError> {
        match connection.read_u8()? {
            1 => {
                let statement = connection.read_string()?
                    .ok_or(InvalidRequestBinaryFormat)?;
                Ok(Request::Statement(statement))
            },
            _ => Err(InvalidRequestBinaryFormat)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::request::Request;
    use shared::connection::Connection;
    use shared::FlatDbError;
    use std::io::Cursor;

    #[test]
    fn statement() {
        let mut bytes = vec![1];
        bytes.extend(18u32.to_le_bytes());
        bytes.extend("select * from item".as_bytes());
        let mut connection = Connection::create(Cursor::new(bytes));

        match Request::deserialize_from_connection(&mut connection).unwrap() {
            Request::Statement(statement) => assert_eq!(statement, "select * from item"),
        }
    }

    #[test]
    fn invalid_requests() {
        let mut unknown_type = Connection::create(Cursor::new(vec![9u8]));
        let mut invalid_utf8 = Connection::create(Cursor::new(vec![1u8, 1, 0, 0, 0, 0xff]));
        let mut truncated = Connection::create(Cursor::new(vec![1u8, 10, 0, 0, 0, b'a']));

        assert!(matches!(Request::deserialize_from_connection(&mut unknown_type), Err(FlatDbError::InvalidRequestBinaryFormat)));
        assert!(matches!(Request::deserialize_from_connection(&mut invalid_utf8), Err(FlatDbError::InvalidRequestBinaryFormat)));
        assert!(Request::deserialize_from_connection(&mut truncated).unwrap_err().is_connection_closed());
    }

    #[test]
    fn statement_length_is_capped() {
        let mut huge_length = Connection::create(Cursor::new(vec![1u8, 0xff, 0xff, 0xff, 0xff]));

        let result = Request::deserialize_from_connection(&mut huge_length);

        assert!(matches!(result, Err(FlatDbError::InvalidRequestBinaryFormat)));
    }
}
