use crate::FlatDbError;
use crate::FlatDbError::NetworkError;
use bytes::BufMut;
use std::io::{Read, Write};
use std::net::TcpStream;

//Upper bounds for length prefixes read off the wire
pub const MAX_STRING_BYTES: u32 = 1024 * 1024;
pub const MAX_ITEMS: u32 = 1024 * 1024;

//Little endian framing shared by requests and responses
pub struct Connection<S = TcpStream> {
    stream: S
}

impl<S: Read + Write> Connection<S> {
    pub fn create(stream: S) -> Connection<S> {
        Connection { stream }
    }

    pub fn read_u8(&mut self) -> Result<u8, FlatDbError> {
        let mut buf = [0u8; 1];
        self.stream.read_exact(&mut buf)
            .map_err(|e| NetworkError(e))?;
        Ok(buf[0])
    }

    pub fn read_u32(&mut self) -> Result<u32, FlatDbError> {
        let mut buff = [0u8; 4];
        self.stream.read_exact(&mut buff)
            .map_err(|e| NetworkError(e))?;
        Ok(u32::from_le_bytes(buff))
    }

    fn read_n(&mut self, n: usize) -> Result<Vec<u8>, FlatDbError> {
        let mut buff = vec![0u8; n];
        self.stream.read_exact(&mut buff)
            .map_err(|e| NetworkError(e))?;
        Ok(buff)
    }

    //u32 length | UTF-8 bytes. None if the bytes are not UTF-8 or the length exceeds MAX_STRING_BYTES,
    //in which case the string bytes are left unread
    pub fn read_string(&mut self) -> Result<Option<String>, FlatDbError> {
        let length = self.read_u32()?;
        if length > MAX_STRING_BYTES {
            return Ok(None);
        }

        let bytes = self.read_n(length as usize)?;
        Ok(String::from_utf8(bytes).ok())
    }

    //u32 number of items that follow. None if it exceeds MAX_ITEMS
    pub fn read_count(&mut self) -> Result<Option<usize>, FlatDbError> {
        let count = self.read_u32()?;
        if count > MAX_ITEMS {
            return Ok(None);
        }

        Ok(Some(count as usize))
    }

    pub fn write(&mut self, bytes: Vec<u8>) -> Result<(), FlatDbError> {
        self.stream.write_all(bytes.as_slice())
            .and_then(|_| self.stream.flush())
            .map_err(|e| NetworkError(e))
    }
}

impl Connection<TcpStream> {
    pub fn address(&self) -> String {
        self.stream.peer_addr()
            .map(|address| address.to_string())
            .unwrap_or_else(|_| String::from("unknown"))
    }
}

pub fn serialize_string(serialized: &mut Vec<u8>, string: &str) {
    serialized.put_u32_le(string.len() as u32);
    serialized.extend(string.as_bytes());
}

pub fn serialize_string_vec(serialized: &mut Vec<u8>, strings: &Vec<String>) {
    serialized.put_u32_le(strings.len() as u32);
    for string in strings {
        serialize_string(serialized, string);
    }
}
