use clap::Parser;

mod analyze;
mod cli;
mod progress;
mod prompt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("leadtime error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let (input, output) = match cli.paths() {
        Some(paths) => paths,
        None => prompt::ask_paths(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let summary = analyze::handle(&input, &output, cli.quiet).await?;
    if !cli.quiet {
        println!("{}", analyze::summary_line(&summary, &output));
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEADTIME_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
