use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = merit_api::Args::parse();
	merit_api::run(args).await
}
