//! unitd line server
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.
//!
//! Methods:
//! - parse: Build a measure from a number or quantity string
//! - apply: Apply a registered operation to two operands
//! - convert: Convert a measure to another unit of the same type
//! - list_units: List the registered units
//! - list_operations: List the registered operations

mod protocol;

use std::io::{self, BufRead, Write};
use protocol::{handle_request, ProtocolError, Request, Response, PARSE_ERROR};
use tracing_subscriber::EnvFilter;
use unitd::standard_catalog;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let catalog = standard_catalog();
    tracing::info!(
        version = SERVER_VERSION,
        units = catalog.units().units().count(),
        operations = catalog.operations().len(),
        "unitd server started"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("end of input");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = match serde_json::from_str::<Request>(line) {
                    Ok(request) => {
                        tracing::debug!(method = %request.method, "processing request");
                        handle_request(catalog, &request)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "unparseable request");
                        Response::error(None, ProtocolError::new(PARSE_ERROR, format!("Parse error: {}", e)))
                    }
                };

                if let Some(error) = &response.error {
                    tracing::debug!(code = %error.code, message = %error.message, "request failed");
                }

                if let Err(e) = write_response(&response) {
                    tracing::error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error reading input");
                break;
            }
        }
    }

    tracing::info!("unitd server shutting down");
}

fn write_response(response: &Response) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}
