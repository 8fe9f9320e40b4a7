use crate::flatdb_server::FlatDbServer;
use crate::request::Request;
use crate::response::Response;
use crate::table_print::TablePrint;
use serde::Serialize;
use shared::FlatDbError;
use std::fmt::{Debug, Formatter};
use std::io;
use std::io::{stdout, BufRead, Write};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

pub enum CliError {
    Server(String), //Error message sent by the server
    Connection(FlatDbError),
    Output(io::Error),
}

#[derive(Serialize)]
struct JsonRows<'a> {
    header: &'a Vec<String>,
    values: &'a Vec<Vec<String>>,
}

pub struct FlatDbCli {
    server: FlatDbServer,
    output_format: OutputFormat,
}

impl FlatDbCli {
    pub fn create(
        server: FlatDbServer,
        output_format: OutputFormat,
    ) -> FlatDbCli {
        FlatDbCli { server, output_format }
    }

    //Returns when stdin is closed or "exit" is typed
    pub fn start(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("flatdb> ");
            stdout().flush().map_err(CliError::Output)?;

            let line = match lines.next() {
                Some(line) => line.map_err(CliError::Output)?,
                None => return Ok(()),
            };
            let input = line.trim();

            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("exit") {
                return Ok(());
            }

            match self.run_query(input, &mut stdout()) {
                Err(error @ CliError::Server(_)) => eprintln!("flatdb: {:?}", error),
                Err(other) => return Err(other),
                Ok(_) => {},
            }
        }
    }

    pub fn run_query(&mut self, query: &str, out: &mut impl Write) -> Result<(), CliError> {
        let response = self.server.send_request(Request::Statement(query.to_string()))
            .map_err(CliError::Connection)?;

        print_response(response, self.output_format, out)
    }
}

pub fn print_response(
    response: Response,
    output_format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match response {
        Response::Error(_, message) => Err(CliError::Server(message)),
        Response::Message(message) => writeln!(out, "{}", message).map_err(CliError::Output),
        Response::Rows(header, rows) => match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string(&JsonRows { header: &header, values: &rows })
                    .map_err(|e| CliError::Output(e.into()))?;
                writeln!(out, "{}", json).map_err(CliError::Output)
            },
            OutputFormat::Table => {
                let mut table = TablePrint::create(header);
                for row in rows {
                    table.add_row(row);
                }
                table.print(out).map_err(CliError::Output)
            },
        },
    }
}

impl Debug for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Server(message) => write!(f, "run query: {}", message),
            CliError::Connection(error) => write!(f, "call server: {:?}", error),
            CliError::Output(error) => write!(f, "write output: {}", error),
        }
    }
}
