use crate::options_file::load_options;
use crate::server::Server;
use shared::{logger, FlatDbLayer};
use std::env;
use std::process::exit;
use std::sync::Arc;

mod server;
mod options_file;
mod request;
mod response;

fn main() {
    let options_path = get_flatdb_options_path();
    let options = match load_options(&options_path) {
        Ok(options) => options,
        Err(error) => {
            logger().error(FlatDbLayer::Server, &format!("load options: {:?}", error));
            exit(1);
        }
    };

    let server = match Server::create(options) {
        Ok(server) => Arc::new(server),
        Err(error) => {
            logger().error(FlatDbLayer::Server, &format!("start server: {:?}", error));
            exit(1);
        }
    };

    if let Err(error) = server.start() {
        logger().error(FlatDbLayer::Server, &format!("listen: {:?}", error));
        exit(1);
    }
}

//First program argument, then FLATDB_OPTIONS_PATH, then ./flatdb.options.json
fn get_flatdb_options_path() -> String {
    env::args().nth(1)
        .or_else(|| env::var("FLATDB_OPTIONS_PATH").ok())
        .unwrap_or_else(|| String::from("flatdb.options.json"))
}
