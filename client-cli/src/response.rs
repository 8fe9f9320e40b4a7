use shared::connection::Connection;
use shared::FlatDbError::InvalidResponseBinaryFormat;
use shared::{ErrorTypeId, FlatDbError};
use std::io::{Read, Write};

#[derive(Debug, PartialEq)]
pub enum Response {
    Message(String),
    Rows(Vec<String>, Vec<Vec<String>>), //Header, rows
    Error(ErrorTypeId, String), //Error number, error message
}

impl Response {
    pub fn deserialize_from_connection<S: Read + Write>(
        connection: &mut Connection<S>
    ) -> Result<Response, FlatDbError> {
        match connection.read_u8()? {
            1 => Ok(Response::Message(Self::deserialize_string(connection)?)),
            2 => {
                let header = Self::deserialize_string_vec(connection)?;
                let n_rows = Self::deserialize_count(connection)?;
                let mut rows = Vec::new();
                for _ in 0..n_rows {
                    rows.push(Self::deserialize_string_vec(connection)?);
                }
                Ok(Response::Rows(header, rows))
            },
            3 => {
                let error_type_id = connection.read_u8()?;
                let message = Self::deserialize_string(connection)?;
                Ok(Response::Error(error_type_id, message))
            },
            _ => Err(InvalidResponseBinaryFormat)
        }
    }

    fn deserialize_string_vec<S: Read + Write>(
        connection: &mut Connection<S>
    ) -> Result<Vec<String>, FlatDbError> {
        let n_items = Self::deserialize_count(connection)?;
        let mut vec: Vec<String> = Vec::new();

        for _ in 0..n_items {
            vec.push(Self::deserialize_string(connection)?);
        }

        Ok(vec)
    }

    fn deserialize_count<S: Read + Write>(connection: &mut Connection<S>) -> Result<usize, FlatDbError> {
        connection.read_count()?
            .ok_or(InvalidResponseBinaryFormat)
    }

    fn deserialize_string<S: Read + Write>(connection: &mut Connection<S>) -> Result<String, FlatDbError> {
        connection.read_string()?
            .ok_or(InvalidResponseBinaryFormat)
    }
}
