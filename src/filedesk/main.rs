use clap::Parser;
use filedesk::cli::console::Console;
use filedesk::cli::menu;
use filedesk::error::Result;
use std::io;

mod args;
use args::Cli;

fn main() {
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    menu::run(&mut console)
}
