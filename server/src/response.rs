use bytes::BufMut;
use db::{Record, StatementResult};
use shared::connection::{serialize_string, serialize_string_vec};
use shared::{ErrorTypeId, FlatDbError};

pub enum Response {
    Message(String), //Response Type ID: 1
    Rows(RowsResponse), //Response Type ID: 2
    Error(ErrorTypeId, String), //Response Type ID: 3. Error number, error message
}

pub struct RowsResponse {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Response {
    pub fn from_flatdb_error(error: FlatDbError) -> Response {
        Response::Error(error.serialize(), format!("{:?}", error))
    }

    //Selects without records are answered with a message
    pub fn from_statement_result(result: StatementResult) -> Response {
        match result {
            StatementResult::Records(records) if !records.is_empty() => {
                Response::Rows(RowsResponse::create(records))
            },
            other => Response::Message(other.message()),
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut serialized: Vec<u8> = Vec::new();

        serialized.put_u8(self.message_type_id());
        serialized.extend(self.serialize_message_content());

        serialized
    }

    fn serialize_message_content(&self) -> Vec<u8> {
        let mut serialized = Vec::new();

        match self {
            Response::Message(message) => serialize_string(&mut serialized, message),
            Response::Rows(rows) => serialized.extend(rows.serialize()),
            Response::Error(error_type_id, error_message) => {
                serialized.put_u8(*error_type_id);
                serialize_string(&mut serialized, error_message);
            },
        };

        serialized
    }

    fn message_type_id(&self) -> u8 {
        match self {
            Response::Message(_) => 1,
            Response::Rows(_) => 2,
            Response::Error(_, _) => 3,
        }
    }
}

impl RowsResponse {
    //Every record has the same columns after projection, so the header is taken from the first one
    pub fn create(records: Vec<Record>) -> RowsResponse {
        let header = records.first()
            .map(|record| record.columns().clone())
            .unwrap_or_default();
        let rows = records.into_iter()
            .map(|record| record.values().clone())
            .collect();

        RowsResponse { header, rows }
    }

    fn serialize(&self) -> Vec<u8> {
        let mut serialized = Vec::new();

        serialize_string_vec(&mut serialized, &self.header);
        serialized.put_u32_le(self.rows.len() as u32);
        for row in &self.rows {
            serialize_string_vec(&mut serialized, row);
        }

        serialized
    }
}

#[cfg(test)]
mod test {
    use crate::response::Response;
    use db::{Record, StatementResult};
    use shared::FlatDbError;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn message() {
        let serialized = Response::from_statement_result(StatementResult::Inserted).serialize();

        assert_eq!(serialized, vec![1, 8, 0, 0, 0, b'i', b'n', b's', b'e', b'r', b't', b'e', b'd']);
    }

    #[test]
    fn empty_select_is_a_message() {
        let serialized = Response::from_statement_result(StatementResult::Records(Vec::new())).serialize();

        let mut expected = vec![1, 10, 0, 0, 0];
        expected.extend("no results".as_bytes());
        assert_eq!(serialized, expected);
    }

    #[test]
    fn rows() {
        let record = Record::create(strings(&["id"]), strings(&["string"]), strings(&["7"]));

        let serialized = Response::from_statement_result(StatementResult::Records(vec![record])).serialize();

        assert_eq!(serialized, vec![
            2,
            1, 0, 0, 0, 2, 0, 0, 0, b'i', b'd', //Header
            1, 0, 0, 0, //Number of rows
            1, 0, 0, 0, 1, 0, 0, 0, b'7',
        ]);
    }

    #[test]
    fn error() {
        let error = FlatDbError::TableNotFound(String::from("t")).with_context("execute select statement");

        let serialized = Response::from_flatdb_error(error).serialize();

        let message = "execute select statement: table 't' not found";
        let mut expected = vec![3, 6];
        expected.extend((message.len() as u32).to_le_bytes());
        expected.extend(message.as_bytes());
        assert_eq!(serialized, expected);
    }
}
