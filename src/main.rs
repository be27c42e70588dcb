use anyhow::{Context, Result};
use clap::Parser;
use cookiee::error::{EXIT_RUNTIME, EXIT_USAGE};
use cookiee::utils::{render_json, render_summary, render_text, setup_logging, validate_args};
use cookiee::{scan_file, Args, MostActive, OutputFormat, TracingObserver};
use std::io::Write;

fn run(args: &Args) -> Result<MostActive> {
    scan_file(&args.file, args.date, TracingObserver)
        .with_context(|| format!("Error processing file {}", args.file.display()))
}

fn print_result(result: &MostActive, args: &Args) -> Result<()> {
    let output = match args.format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Json => render_json(result)? + "\n",
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    if args.summary && args.format == OutputFormat::Text {
        eprint!("{}", render_summary(result));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.log_level());

    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_USAGE);
    }

    let outcome = run(&args).and_then(|result| print_result(&result, &args));
    if let Err(e) = outcome {
        eprintln!("Error: {:#}", e);
        std::process::exit(EXIT_RUNTIME);
    }
}
