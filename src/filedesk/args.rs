use clap::Parser;

/// Interactive desk for file, JSON, XML and ZIP operations.
///
/// No flags: the program is fully interactive and prompts on stdout.
#[derive(Parser, Debug)]
#[command(name = "filedesk", version, about)]
pub struct Cli {}
