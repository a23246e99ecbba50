use anyhow::Result;
use clap::Parser;
use palladio_tc::{
    cli::{Cli, Commands},
    config::Config,
    engine::DockerCli,
    manifest::{self, ManifestConfig},
    matrix::{self, MatrixBuilder},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build { root, config } => {
            let config = Config::load(config.as_deref())?;
            let engine = DockerCli::new()?;
            let builder = MatrixBuilder::new(&config.images, &root, &engine);
            builder.run()?;
        }
        Commands::Plan { root, config, json } => {
            let config = Config::load(config.as_deref())?;
            let requests = matrix::plan(&config.images, &root);
            if json {
                println!("{}", serde_json::to_string_pretty(&requests)?);
            } else {
                for request in &requests {
                    println!(
                        "{}\t{}\t{}",
                        request.tag,
                        request.dockerfile.display(),
                        request.context.display()
                    );
                }
            }
        }
        Commands::Deps { config, json } => {
            let config = Config::load(config.as_deref())?;
            let manifest_config = ManifestConfig::from_env();
            let declared = manifest::requirements(&config.deps, &manifest_config);
            if json {
                println!("{}", serde_json::to_string_pretty(&declared)?);
            } else {
                for requirement in &declared {
                    println!("{}", requirement);
                }
            }
        }
        Commands::Version => {
            println!("palladio-tc {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
