use clap::Parser;
use metar_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - the briefing has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("METAR Analyzer - Aviation Weather Report Decoder");
    println!("================================================");
    println!();
    println!("Decode aviation routine weather reports (METARs), evaluate them against");
    println!("personal minima, and compute wind components for a runway heading.");
    println!();
    println!("USAGE:");
    println!("    metar-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Analyze raw METAR text supplied on the command line");
    println!("    station     Fetch and analyze current or historical reports by station");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a raw report against the default minima:");
    println!("    metar-analyzer decode --metar \"KJFK 011651Z 18012G18KT 10SM BKN025\"");
    println!();
    println!("    # Crosswind check for runway 22 with a 10 kt personal limit:");
    println!("    metar-analyzer decode --metar \"...\" --runway 220 --max-xwind 10");
    println!();
    println!("    # Fetch the latest observation and emit JSON:");
    println!("    metar-analyzer station KJFK --format json");
    println!();
    println!("    # Six-report trend for a station:");
    println!("    metar-analyzer station KJFK --history 6");
    println!();
    println!("For detailed help on any command, use:");
    println!("    metar-analyzer <COMMAND> --help");
}
