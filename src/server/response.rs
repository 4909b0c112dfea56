//! HTML page renderers.
//!
//! Every page is returned as a complete `HTTP/1.1` response string, headers
//! included, ready to be written back to the connection.

use crate::board::Board;
use crate::search::Solution;
use std::fmt::Write;

const OK_HEADER: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=UTF-8\r\n\r\n";
const BAD_REQUEST_HEADER: &str =
    "HTTP/1.1 400 Bad Request\r\nContent-Type: text/html; charset=UTF-8\r\n\r\n";

fn page(header: &str, title: &str, body: &str) -> String {
    format!(
        "{header}<!DOCTYPE html>\r\n<html>\r\n<head>\r\n<title>{title}</title>\r\n</head>\r\n\
         <body>\r\n{body}\r\n</body>\r\n</html>\r\n"
    )
}

/// The landing page: a form posting dimension and complexity to `/solve`.
pub fn landing_page() -> String {
    let body = "<h1>N Puzzle Solver</h1>\r\n\
        <form action=\"/solve\" method=\"get\">\r\n\
        <label>Dimension N: <input type=\"number\" name=\"n\" min=\"3\" value=\"3\"></label><br>\r\n\
        <label>Complexity: <input type=\"number\" name=\"complexity\" min=\"0\" value=\"20\"></label><br>\r\n\
        <input type=\"submit\" value=\"Solve\">\r\n\
        </form>";
    page(OK_HEADER, "N Puzzle Solver", body)
}

fn board_table(board: &Board) -> String {
    let n = board.dimension();
    let mut table = String::from("<table border=\"1\" cellpadding=\"4\">\r\n");
    for row in 0..n {
        table.push_str("<tr>");
        for col in 0..n {
            let tile = board.get(row, col);
            if tile == 0 {
                table.push_str("<td>&nbsp;</td>");
            } else {
                let _ = write!(table, "<td>{}</td>", tile);
            }
        }
        table.push_str("</tr>\r\n");
    }
    table.push_str("</table>");
    table
}

/// The solution page: every configuration of the chain from the start to
/// the goal, with its move number.
pub fn solution_page(solution: &Solution) -> String {
    let mut body = String::new();
    let _ = write!(body, "<h1>Solved in {} moves</h1>\r\n", solution.moves());

    // The chain is stored goal-first; render it start-first for reading.
    for state in solution.states().iter().rev() {
        let _ = write!(body, "<h3>Move {}</h3>\r\n{}\r\n", state.g, board_table(&state.board));
    }

    page(OK_HEADER, "N Puzzle Solution", &body)
}

/// Terminal page for a search that emptied its fringe.
pub fn exhausted_page() -> String {
    page(
        OK_HEADER,
        "N Puzzle Solver",
        "<h1>No solution exists for the submitted configuration</h1>",
    )
}

/// Error page for invalid input or unrecognized requests.
pub fn error_page(message: &str) -> String {
    let body = format!("<h1>Bad request</h1>\r\n<p>{}</p>", message);
    page(BAD_REQUEST_HEADER, "N Puzzle Solver", &body)
}
