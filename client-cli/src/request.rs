use bytes::BufMut;
use shared::connection::serialize_string;

pub enum Request {
    Statement(String), //Request Type ID: 1
}

impl Request {
    pub fn serialize(&self) -> Vec<u8> {
        let mut serialized = Vec::new();

        match self {
            Request::Statement(statement) => {
                serialized.put_u8(1);
                serialize_string(&mut serialized, statement);
            }
        };

        serialized
    }
}
