use clap::Parser;
use log::*;
use std::rc::Rc;

use issues_to_project::{
    Args, ForgeManager, Github, Orchestrator, Result, actions,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("issues_to_project")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let remote_config = args.get_remote()?;
    let config = args.filing_config()?;

    if remote_config.dry_run {
        warn!("dry run enabled: no cards will be created or deleted");
    }

    let forge = ForgeManager::new(Box::new(Github::new(remote_config)?));

    let orchestrator = Orchestrator::builder()
        .config(Rc::new(config))
        .forge(Rc::new(forge))
        .build()?;

    let summary = orchestrator.run().await?;

    if let Some(path) = args.output_file() {
        actions::write_outputs(path, &summary).await?;
    }

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if err.use_stderr() {
                println!("{}", actions::error_command(&err.to_string()));
            }
            err.exit();
        }
    };

    initialize_logger(args.debug)?;

    if let Err(err) = run(&args).await {
        error!("{err}");
        println!("{}", actions::error_command(&err.to_string()));
        return Err(err.into());
    }

    Ok(())
}
