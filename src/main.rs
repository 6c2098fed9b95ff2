//! archgen's main application entry point.
//! Parses arguments, builds the run configuration once and hands it to the
//! processor.

use archgen::{
    cli::{get_args, Args},
    client::AnthropicClient,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.config();
    log::debug!(
        "Configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    std::fs::create_dir_all(&args.output_dir)?;
    let client = AnthropicClient::new()?;
    Processor::new(&client, &config, &args.output_dir).run()
}
