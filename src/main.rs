use clap::Parser;

use synthfix::cli;
use synthfix::command;
use synthfix::error::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("synthfix")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    match cli_args.command {
        cli::Command::FixHeaders { path, kind } => {
            command::fix_headers::execute(&path, kind.into())
        }
        cli::Command::RemoveMethod { file, signature } => {
            command::remove_method::execute(&file, &signature)
        }
        cli::Command::LatestVersion {
            group_id,
            artifact_id,
            registry_url,
        } => command::latest_version::execute(
            &group_id,
            &artifact_id,
            &registry_url,
        ),
        cli::Command::RenderTemplates {
            template_path,
            target,
        } => command::render_templates::execute(&template_path, &target),
    }
}
