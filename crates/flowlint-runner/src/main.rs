use clap::Parser;
use flowlint_runner::{execute, init_tracing, Cli};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(outcome) => {
            println!("{}", outcome.rendered);
            if !outcome.passed {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
