use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = terms_api::Args::parse();
	terms_api::run(args).await
}
