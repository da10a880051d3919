use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use param_syntax_core::{Mode, Request, Style, StyledLine, inspect};
use param_syntax_registry::{CommandRegistry, SyntaxConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod paint;

use paint::{ColorChoice, Painter};

#[derive(Debug, Parser)]
#[command(name = "syntax-help")]
#[command(about = "Show a command's parameter sets and check a command line against them")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Directory or catalog file with command metadata (repeatable).
    #[arg(long, global = true)]
    registry: Vec<PathBuf>,
    /// Do not load the built-in catalog.
    #[arg(long, global = true)]
    no_builtin: bool,
    /// Path to a param-syntax YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Compare parameter names case-sensitively.
    #[arg(long, global = true)]
    case_sensitive: bool,
    /// When to color the output.
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a command line against every parameter set of its command.
    Validate(InspectArgs),
    /// List every parameter set of a command.
    Show(InspectArgs),
    /// List the commands known to the registry.
    List,
    /// Validate one or more metadata directories or catalog files.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Append a legend explaining colors and markers.
    #[arg(long)]
    legend: bool,
    /// Command text, e.g. `Copy-Item -Path a.txt -Destination b`. Everything
    /// after the first word is taken literally.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Metadata directories and/or catalog files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match cli.command {
        Command::Validate(args) => run_inspect(&cli.global, args, Mode::Validate),
        Command::Show(args) => run_inspect(&cli.global, args, Mode::ShowParameters),
        Command::List => run_list(&cli.global),
        Command::Check(args) => run_check(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(global: &GlobalArgs) -> Result<SyntaxConfig, String> {
    let mut config = match &global.config {
        Some(path) => SyntaxConfig::load(path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display()))?,
        None => SyntaxConfig::default(),
    };

    if global.case_sensitive {
        config.analysis.case_sensitive = true;
    }
    if global.no_builtin {
        config.registry.include_builtin = false;
    }
    config.registry.paths.extend(global.registry.iter().cloned());
    debug!(?config, "Effective configuration");
    Ok(config)
}

fn load_registry(config: &SyntaxConfig) -> Result<CommandRegistry, String> {
    let registry = config
        .registry_builder()
        .build()
        .map_err(|err| format!("Failed to load command registry: {err}"))?;
    info!(commands = registry.len(), "Registry ready");
    Ok(registry)
}

fn write_lines<'a>(lines: impl IntoIterator<Item = &'a StyledLine>, painter: Painter) -> Result<(), String> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", painter.paint_line(line))
            .map_err(|err| format!("Failed to write output: {err}"))?;
    }
    Ok(())
}

fn run_inspect(global: &GlobalArgs, args: InspectArgs, mode: Mode) -> Result<(), String> {
    let config = load_config(global)?;
    let registry = load_registry(&config)?;

    let text = args.text.join(" ");
    let request = Request::new(&text, mode).with_legend(args.legend);
    let lines = inspect(&request, &registry, &config.analysis).map_err(|err| err.to_string())?;

    write_lines(&lines, Painter::new(global.color))
}

fn run_list(global: &GlobalArgs) -> Result<(), String> {
    let config = load_config(global)?;
    let registry = load_registry(&config)?;

    let commands = registry.commands();
    let width = commands
        .iter()
        .map(|m| m.command.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<StyledLine> = commands
        .iter()
        .map(|metadata| {
            let pad = width - metadata.command.chars().count() + 2;
            let line = StyledLine::new()
                .styled(metadata.command.as_str(), Style::CommandName)
                .plain(format!(
                    "{}{} set(s)",
                    " ".repeat(pad),
                    metadata.parameter_sets.len()
                ));
            if metadata.aliases.is_empty() {
                line
            } else {
                line.plain("  aliases: ")
                    .styled(metadata.aliases.join(", "), Style::Emphasis)
            }
        })
        .collect();

    write_lines(&lines, Painter::new(global.color))
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let mut total = 0usize;
    for input in &args.inputs {
        let registry = if input.is_dir() {
            CommandRegistry::from_dir(input)
        } else {
            CommandRegistry::from_catalog(input)
        }
        .map_err(|err| format!("'{}': {err}", input.display()))?;
        total += registry.len();
    }

    println!(
        "Validated {} input(s) describing {total} command(s).",
        args.inputs.len()
    );
    Ok(())
}
