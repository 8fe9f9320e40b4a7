use crate::request::Request;
use crate::response::Response;
use db::FlatDb;
use shared::connection::Connection;
use shared::{logger, FlatDbError, FlatDbLayer, FlatDbOptions};
use std::net::TcpListener;
use std::sync::Arc;
use threadpool::ThreadPool;

pub struct Server {
    flat_db: Arc<FlatDb>,
    options: Arc<FlatDbOptions>,
    pool: ThreadPool,
}

impl Server {
    pub fn create(
        options: Arc<FlatDbOptions>
    ) -> Result<Server, FlatDbError> {
        let flat_db = FlatDb::create(options.as_ref().clone())?;

        Ok(Server {
            pool: ThreadPool::new(options.server_n_worker_threads),
            flat_db: Arc::new(flat_db),
            options
        })
    }

    //Only returns if the listener cannot be bound
    pub fn start(self: Arc<Self>) -> Result<(), FlatDbError> {
        let address = self.server_address_to_str();
        let listener = TcpListener::bind(&address)
            .map_err(|e| FlatDbError::NetworkError(e).with_context(&format!("bind {}", address)))?;

        logger().info(FlatDbLayer::Server, &format!("Listening on {}", address));

        for socket in listener.incoming() {
            let socket = match socket {
                Ok(socket) => socket,
                Err(error) => {
                    logger().error(FlatDbLayer::Server, &format!("accept connection: {}", error));
                    continue;
                }
            };
            let self_cloned = self.clone();

            self.pool.execute(move || {
                let mut connection = Connection::create(socket);
                self_cloned.handle_connection(&mut connection);
            });
        }

        Ok(())
    }

    //A connection may send any number of requests until the client closes it
    fn handle_connection(&self, connection: &mut Connection) {
        let address = connection.address();
        logger().debug(FlatDbLayer::Server, &format!("Accepted connection from {}", address));

        loop {
            let response = match Request::deserialize_from_connection(connection) {
                Ok(request) => self.handle_request(request),
                Err(error) if error.is_connection_closed() => break,
                Err(error) => {
                    logger().error(FlatDbLayer::Server, &format!("read request from {}: {:?}", address, error));
                    self.write_response(connection, Response::from_flatdb_error(error));
                    break;
                }
            };

            if !self.write_response(connection, response) {
                break;
            }
        }

        logger().debug(FlatDbLayer::Server, &format!("Closed connection from {}", address));
    }

    fn handle_request(&self, request: Request) -> Response {
        match request {
            Request::Statement(statement) => match self.flat_db.execute(&statement) {
                Ok(result) => Response::from_statement_result(result),
                Err(error) => {
                    logger().error(FlatDbLayer::Server, &format!("run query {}: {:?}", statement, error));
                    Response::from_flatdb_error(error)
                }
            },
        }
    }

    fn write_response(&self, connection: &mut Connection, response: Response) -> bool {
        match connection.write(response.serialize()) {
            Ok(_) => true,
            Err(error) => {
                logger().error(FlatDbLayer::Server, &format!("write response to {}: {:?}", connection.address(), error));
                false
            }
        }
    }

    fn server_address_to_str(&self) -> String {
        let mut address = String::from("127.0.0.1:");
        address.push_str(self.options.server_port.to_string().as_str());
        address
    }
}
