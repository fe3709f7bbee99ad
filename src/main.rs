use std::{error::Error, fmt::Write, process};

use clap::Parser;
use mimalloc::MiMalloc;
use samconv::{commands, Cli};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = commands::convert(&cli.src, cli.output_path.as_deref(), cli.direction) {
        eprintln!("{}", format_error(&e));
        process::exit(1);
    }
}

fn format_error(e: &dyn Error) -> String {
    let mut message = e.to_string();

    let mut source = e.source();

    while let Some(cause) = source {
        let _ = write!(message, "\n  caused by: {cause}");
        source = cause.source();
    }

    message
}
