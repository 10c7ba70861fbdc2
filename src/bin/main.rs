use std::path::Path;
use std::process::Command;

use tracing_subscriber::EnvFilter;

use spirit::{
    cli::{Cli, Commands, parse_args},
    env_file,
    error::SupervisorError,
    lifecycle::Controller,
    logs,
    registry::Registry,
};

fn main() {
    let args = parse_args();
    init_logging(&args);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_logging(args: &Cli) {
    let filter = if let Some(level) = args.log_level {
        EnvFilter::new(level.as_str())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn run(args: Cli) -> Result<(), SupervisorError> {
    // The environment file is applied before anything launches so every
    // supervised command inherits it.
    let vars = env_file::load(Path::new(".env"))?;
    env_file::apply(&vars);

    let registry = Registry::load(Path::new("Procfile"))?;
    let controller = Controller::new();

    match args.command {
        Commands::Start { name } => {
            for_one_or_all(&registry, name.as_deref(), |p| controller.start(p))
        }
        Commands::Stop { name } => {
            for_one_or_all(&registry, name.as_deref(), |p| controller.stop(p))
        }
        Commands::Restart { name } => {
            for_one_or_all(&registry, name.as_deref(), |p| controller.restart(p))
        }
        Commands::Log { name } => logs::view(registry.get(&name)?),
        Commands::Tail { name } => logs::tail(registry.get(&name)?),
        Commands::Run { command } => run_inline(&command),
        Commands::Status => {
            for process in registry.iter() {
                let status = controller.status(process)?;
                println!("{}:\t{status}", process.name());
            }
            Ok(())
        }
    }
}

/// Applies `op` to the named process, or to every registry entry in
/// sorted order when no name was given. The first failure aborts the
/// sweep.
fn for_one_or_all(
    registry: &Registry,
    name: Option<&str>,
    op: impl Fn(&spirit::process::Process) -> Result<(), SupervisorError>,
) -> Result<(), SupervisorError> {
    match name {
        Some(name) => op(registry.get(name)?),
        None => {
            for process in registry.iter() {
                op(process)?;
            }
            Ok(())
        }
    }
}

/// Runs a command inline with inherited terminal I/O, outside the
/// lifecycle controller.
fn run_inline(command: &[String]) -> Result<(), SupervisorError> {
    // clap enforces at least one argument, so the empty case is inert.
    let Some((program, rest)) = command.split_first() else {
        return Ok(());
    };

    let status = Command::new(program).args(rest).status().map_err(|source| {
        SupervisorError::ToolLaunch {
            tool: program.clone(),
            source,
        }
    })?;

    if !status.success() {
        return Err(SupervisorError::ToolFailed {
            tool: program.clone(),
            status,
        });
    }

    Ok(())
}
