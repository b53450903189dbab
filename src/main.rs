use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = promptd::cli::Cli::parse();
    if let Err(e) = promptd::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
