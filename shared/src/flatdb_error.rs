use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

pub type ErrorTypeId = u8;

pub enum FlatDbError {
    //Network layer errors
    InvalidRequestBinaryFormat,
    InvalidResponseBinaryFormat,
    NetworkError(std::io::Error),

    //Query errors
    IllegalToken(String),
    MalformedQuery(String),
    TableNotFound(String),
    TableAlreadyExists(String),
    ColumnMismatch(String),
    InvalidType(String),

    //Storage errors
    CannotOpenCatalog(PathBuf, std::io::Error),
    CannotReadCatalog(PathBuf, std::io::Error),
    CannotDecodeCatalog(PathBuf, serde_json::Error),
    CannotEncodeCatalog(serde_json::Error),
    CannotWriteCatalog(PathBuf, std::io::Error),
    CannotOpenTablespace(PathBuf, std::io::Error),
    CannotReadTablespace(PathBuf, std::io::Error),
    CannotDecodeTablespace(PathBuf, serde_json::Error),
    CannotEncodeTablespace(serde_json::Error),
    CannotWriteTablespace(PathBuf, std::io::Error),

    //Options file errors
    CannotOpenOptionsFile(PathBuf, std::io::Error),
    CannotDecodeOptionsFile(PathBuf, serde_json::Error),
    CannotWriteOptionsFile(PathBuf, std::io::Error),
    CannotEncodeOptionsFile(serde_json::Error),

    //Context message, wrapped error
    WithContext(String, Box<FlatDbError>),
}

impl FlatDbError {
    pub fn with_context(self, context: &str) -> FlatDbError {
        FlatDbError::WithContext(context.to_string(), Box::new(self))
    }

    //Returns the innermost error, skipping all context layers
    pub fn root(&self) -> &FlatDbError {
        match self {
            FlatDbError::WithContext(_, inner) => inner.root(),
            other => other,
        }
    }

    pub fn is_connection_closed(&self) -> bool {
        match self.root() {
            FlatDbError::NetworkError(io_error) => matches!(
                io_error.kind(),
                std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::ConnectionReset | std::io::ErrorKind::BrokenPipe
            ),
            _ => false,
        }
    }

    pub fn serialize(&self) -> ErrorTypeId {
        match self {
            FlatDbError::InvalidRequestBinaryFormat => 1,
            FlatDbError::InvalidResponseBinaryFormat => 2,
            FlatDbError::NetworkError(_) => 3,
            FlatDbError::IllegalToken(_) => 4,
            FlatDbError::MalformedQuery(_) => 5,
            FlatDbError::TableNotFound(_) => 6,
            FlatDbError::TableAlreadyExists(_) => 7,
            FlatDbError::ColumnMismatch(_) => 8,
            FlatDbError::InvalidType(_) => 9,
            FlatDbError::CannotOpenCatalog(_, _) => 10,
            FlatDbError::CannotReadCatalog(_, _) => 11,
            FlatDbError::CannotDecodeCatalog(_, _) => 12,
            FlatDbError::CannotEncodeCatalog(_) => 13,
            FlatDbError::CannotWriteCatalog(_, _) => 14,
            FlatDbError::CannotOpenTablespace(_, _) => 15,
            FlatDbError::CannotReadTablespace(_, _) => 16,
            FlatDbError::CannotDecodeTablespace(_, _) => 17,
            FlatDbError::CannotEncodeTablespace(_) => 18,
            FlatDbError::CannotWriteTablespace(_, _) => 19,
            FlatDbError::CannotOpenOptionsFile(_, _) => 20,
            FlatDbError::CannotDecodeOptionsFile(_, _) => 21,
            FlatDbError::CannotWriteOptionsFile(_, _) => 22,
            FlatDbError::CannotEncodeOptionsFile(_) => 23,
            FlatDbError::WithContext(_, inner) => inner.serialize(),
        }
    }
}

impl Debug for FlatDbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlatDbError::InvalidRequestBinaryFormat => {
                write!(f, "invalid request binary format")
            }
            FlatDbError::InvalidResponseBinaryFormat => {
                write!(f, "invalid response binary format")
            }
            FlatDbError::NetworkError(io_error) => {
                write!(f, "network error: {}", io_error)
            }
            FlatDbError::IllegalToken(message) => {
                write!(f, "{}", message)
            }
            FlatDbError::MalformedQuery(message) => {
                write!(f, "{}", message)
            }
            FlatDbError::TableNotFound(table_name) => {
                write!(f, "table '{}' not found", table_name)
            }
            FlatDbError::TableAlreadyExists(table_name) => {
                write!(f, "table {} already exists", table_name)
            }
            FlatDbError::ColumnMismatch(message) => {
                write!(f, "{}", message)
            }
            FlatDbError::InvalidType(type_name) => {
                write!(f, "type must be 'string' but '{}'", type_name)
            }
            FlatDbError::CannotOpenCatalog(path, io_error) => {
                write!(f, "open catalog file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotReadCatalog(path, io_error) => {
                write!(f, "read catalog file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotDecodeCatalog(path, serde_error) => {
                write!(f, "decode catalog file {:?} as JSON: {}", path, serde_error)
            }
            FlatDbError::CannotEncodeCatalog(serde_error) => {
                write!(f, "encode catalog as JSON: {}", serde_error)
            }
            FlatDbError::CannotWriteCatalog(path, io_error) => {
                write!(f, "update catalog file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotOpenTablespace(path, io_error) => {
                write!(f, "open tablespace file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotReadTablespace(path, io_error) => {
                write!(f, "read tablespace file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotDecodeTablespace(path, serde_error) => {
                write!(f, "decode tablespace file {:?} as JSON: {}", path, serde_error)
            }
            FlatDbError::CannotEncodeTablespace(serde_error) => {
                write!(f, "encode data into tablespace: {}", serde_error)
            }
            FlatDbError::CannotWriteTablespace(path, io_error) => {
                write!(f, "update tablespace file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotOpenOptionsFile(path, io_error) => {
                write!(f, "open options file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotDecodeOptionsFile(path, serde_error) => {
                write!(f, "decode options file {:?} as JSON: {}", path, serde_error)
            }
            FlatDbError::CannotWriteOptionsFile(path, io_error) => {
                write!(f, "write options file {:?}: {}", path, io_error)
            }
            FlatDbError::CannotEncodeOptionsFile(serde_error) => {
                write!(f, "encode options as JSON: {}", serde_error)
            }
            FlatDbError::WithContext(context, inner) => {
                write!(f, "{}: {:?}", context, inner)
            }
        }
    }
}
