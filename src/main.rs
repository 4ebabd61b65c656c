mod cli;
mod commands;

use std::process::ExitCode;

use cli::Commands;
use figr_lib::FigrError;

fn main() -> ExitCode {
    let args = cli::parse();

    let result = match args.command {
        Commands::File { file_key, depth } => {
            commands::run_file(&args.env_file, args.verbose, &file_key, depth)
        }
        Commands::Components { file_key } => {
            commands::run_components(&args.env_file, args.verbose, &file_key)
        }
        Commands::Styles { file_key } => {
            commands::run_styles(&args.env_file, args.verbose, &file_key)
        }
        Commands::Frames {
            file_key,
            node_ids,
            format,
            scale,
            out,
        } => commands::run_frames(
            &args.env_file,
            args.verbose,
            &file_key,
            &cli::parse_node_ids(&node_ids),
            cli::image_format_from_cli(format),
            scale,
            &out,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err),
    }
}

fn render_error(err: FigrError) -> ExitCode {
    eprintln!("Error: {err}");
    eprintln!("Hint: {}", err.remediation());
    ExitCode::from(1)
}
