/// CLI argument parsing and help text

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Sankhya v{}", version);
    println!("Number <-> words converter for the International and Indian numbering systems");
    println!();
    println!("USAGE:");
    println!("    sankhya [OPTIONS]");
    println!();
    println!("Run with no options to get the interactive menu.");
    println!();
    println!("OPTIONS:");
    println!("    --number <VALUE>      Convert a number (e.g. 152.45) to a currency phrase");
    println!("    --words <PHRASE>      Convert a word phrase back to a number");
    println!("    --system <NAME>       Scale system: international or indian");
    println!("    --json <PATH>         Also write the conversion record as JSON");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Interactive menu");
    println!("    sankhya");
    println!();
    println!("    # Number to words, Indian system");
    println!("    sankhya --number 152045.50 --system indian");
    println!();
    println!("    # Words to number");
    println!("    sankhya --words \"forty-five thousand seven hundred rupees\"");
    println!();
    println!("    # Save the result as JSON");
    println!("    sankhya --number 21.21 --json result.json");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    SANKHYA_SCALE_SYSTEM  - Default scale system (international/indian)");
    println!("    LOG_FORMAT            - Log format (pretty/compact/json)");
    println!("    RUST_LOG              - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the working directory.");
}

pub fn print_version() {
    println!("Sankhya v{}", env!("CARGO_PKG_VERSION"));
}
