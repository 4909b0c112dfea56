//! Remote solver server: a TCP listener that hands each inbound connection
//! to its own handler thread.
//!
//! Every connection runs a private `SearchEngine` -- fringe, closed set,
//! and arena are per-request, so concurrent searches never share state.
//! The handler reads one request buffer, classifies it with the request
//! scanner, solves if asked, and writes a single HTML response back.

pub mod request;
pub mod response;

use crate::search::{solve, SearchOutcome};
use log::{debug, info, warn};
use request::Target;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

const REQUEST_BUFFER_SIZE: usize = 4096;

pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listener on all interfaces at the given port.
    pub fn bind(port: u16) -> std::io::Result<Server> {
        let listener = TcpListener::bind(("0.0.0.0", port))?;
        info!("listening on {}", listener.local_addr()?);
        Ok(Server { listener })
    }

    /// Accept connections forever, one handler thread per connection.
    pub fn run(&self) {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    debug!("connection accepted, handing off to worker thread");
                    thread::spawn(move || {
                        if let Err(err) = handle_connection(stream) {
                            warn!("connection handler failed: {}", err);
                        }
                    });
                }
                Err(err) => warn!("failed to accept connection: {}", err),
            }
        }
    }
}

fn handle_connection(mut stream: TcpStream) -> std::io::Result<()> {
    let mut buffer = [0u8; REQUEST_BUFFER_SIZE];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        debug!("no data received from client");
        return Ok(());
    }

    let text = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request = request::parse(&text);
    let body = dispatch(request);

    stream.write_all(body.as_bytes())?;
    stream.flush()
}

/// Route a classified request to its page.
fn dispatch(request: request::Request) -> String {
    match request.target {
        Target::Landing => response::landing_page(),
        Target::Solve { n, complexity } => match solve(n, complexity) {
            Ok(SearchOutcome::Solved(solution)) => response::solution_page(&solution),
            Ok(SearchOutcome::Exhausted) => response::exhausted_page(),
            Err(err) => response::error_page(&err.to_string()),
        },
        Target::Unknown => response::error_page("unrecognized request"),
    }
}
