use clap::Parser;
use plugin::{rest_wrapper::RestClient, CliArgs, ExecuteOperation};

#[tokio::main]
async fn main() {
    plugin::init_tracing();

    let cli_args = CliArgs::parse();
    if let Err(error) = execute(&cli_args).await {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

async fn execute(cli_args: &CliArgs) -> anyhow::Result<()> {
    cli_args.ensure_auth_info()?;

    // Initialise the REST client, authenticating if needed.
    RestClient::init(cli_args.tuskar_api_version, &cli_args.auth_params()).await?;

    // Perform the operation based on the subcommand, with proper output format.
    cli_args.operations.execute(cli_args).await?;
    Ok(())
}
