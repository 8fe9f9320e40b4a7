use crate::request::Request;
use crate::response::Response;
use shared::connection::Connection;
use shared::{logger, FlatDbError, FlatDbLayer};
use std::net::TcpStream;

pub struct FlatDbServer {
    connection: Connection,
}

impl FlatDbServer {
    pub fn connect(
        address: &str,
    ) -> Result<FlatDbServer, FlatDbError> {
        let stream = TcpStream::connect(address)
            .map_err(|e| FlatDbError::NetworkError(e).with_context(&format!("connect to {}", address)))?;

        logger().debug(FlatDbLayer::Client, &format!("Connected to {}", address));

        Ok(FlatDbServer { connection: Connection::create(stream) })
    }

    pub fn send_request(&mut self, request: Request) -> Result<Response, FlatDbError> {
        self.connection.write(request.serialize())?;
        Response::deserialize_from_connection(&mut self.connection)
    }
}
