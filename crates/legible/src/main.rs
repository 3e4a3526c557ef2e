use clap::Parser;
use std::process;

use legible::{run, Cli};

#[tokio::main]
async fn main() {
  let cli = Cli::parse();
  herald::init(cli.verbose);

  match run(cli).await {
    Ok(code) => process::exit(code),
    Err(e) => {
      herald::error!(&format!("{e:#}"));
      process::exit(1);
    }
  }
}
