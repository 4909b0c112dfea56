use npuzzle_engine::constants::DEFAULT_PORT;
use npuzzle_engine::server::Server;
use npuzzle_engine::{solve, SearchOutcome};
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    env_logger::init();

    let mode = std::env::args().nth(1);
    let result = match mode.as_deref() {
        Some("-d") => run_command_line(),
        Some("-r") => run_server(),
        _ => {
            eprintln!("usage: npuzzle -d | -r");
            eprintln!("  -d  solve a puzzle interactively on the command line");
            eprintln!("  -r  run the remote solver server on port {}", DEFAULT_PORT);
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn prompt_number(prompt: &str) -> Result<u64, Box<dyn std::error::Error>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn run_command_line() -> Result<(), Box<dyn std::error::Error>> {
    println!("N Puzzle Solver");
    println!("===============");

    let n = prompt_number("Enter the dimension N: ")? as usize;
    let complexity = prompt_number("Enter the complexity of the initial configuration: ")? as u32;

    match solve(n, complexity)? {
        SearchOutcome::Solved(solution) => {
            for state in solution.states().iter().rev() {
                println!("Move {}:", state.g);
                println!("{}", state.board);
            }
            println!("Solved in {} moves.", solution.moves());
        }
        SearchOutcome::Exhausted => {
            println!("No solution exists for this configuration.");
        }
    }

    Ok(())
}

fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let server = Server::bind(DEFAULT_PORT)?;
    server.run();
    Ok(())
}
