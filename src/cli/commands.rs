//! Command dispatch

use std::io::{self, IsTerminal, Read};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, IoResultExt, MetricsReport, MetricsService};
use crate::cli::args::{Cli, Commands, ConfigCommands, TreeSource};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, InputFormat, OutputFormat, Settings};
use crate::domain::{draw, to_level_notation, Tree};

/// Tree measured when no subcommand is given.
pub const SAMPLE_TREE: &str = "1{2{4,5},3{6,7}}";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!(?settings, "effective settings");
    let service = MetricsService::new(settings);

    match &cli.command {
        Some(Commands::Metrics { source }) => cmd_metrics(&service, source),
        Some(Commands::Show { source }) => cmd_show(&service, source),
        Some(Commands::Random { size, seed }) => cmd_random(&service, *size, *seed),
        Some(Commands::Config { command }) => cmd_config(service.settings(), command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => cmd_sample(&service),
    }
}

/// Layered settings with command-line flags applied last.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        settings.input_format = format;
    }
    if let Some(output) = cli.output {
        settings.output_format = output;
    }
    if let Some(traversal) = cli.traversal {
        settings.traversal = traversal;
    }
    if let Some(diameter) = cli.diameter {
        settings.diameter = diameter;
    }
    Ok(settings)
}

fn read_tree(service: &MetricsService, source: &TreeSource) -> CliResult<Tree> {
    match (&source.tree, &source.file) {
        (Some(text), _) => Ok(service.load(text)?),
        (None, Some(path)) => Ok(service.load_file(path)?),
        (None, None) => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::InvalidArgs(
                    "no tree given: pass TREE, --file <PATH> or pipe it to stdin".into(),
                ));
            }
            let mut text = String::new();
            stdin
                .lock()
                .read_to_string(&mut text)
                .with_context("read stdin")?;
            Ok(service.load(&text)?)
        }
    }
}

fn print_report(service: &MetricsService, tree: &Tree, report: &MetricsReport) -> CliResult<()> {
    match service.settings().output_format {
        OutputFormat::Plain => print_metrics(report),
        OutputFormat::Toml => {
            let text = toml::to_string_pretty(report)
                .map_err(|e| CliError::Internal(format!("serialize report: {}", e)))?;
            output::info(text.trim_end());
        }
        OutputFormat::Tree => {
            output::info(&draw(tree).map_err(ApplicationError::from)?);
            print_metrics(report);
        }
    }
    Ok(())
}

fn print_metrics(report: &MetricsReport) {
    output::metric("height", &report.height);
    output::metric("count", &report.count);
    output::metric("sum", &report.sum);
    output::metric("diameter", &report.diameter);
}

#[instrument(skip(service))]
fn cmd_metrics(service: &MetricsService, source: &TreeSource) -> CliResult<()> {
    let tree = read_tree(service, source)?;
    let report = service.analyze(&tree);
    print_report(service, &tree, &report)
}

#[instrument(skip(service))]
fn cmd_show(service: &MetricsService, source: &TreeSource) -> CliResult<()> {
    let tree = read_tree(service, source)?;
    output::info(&draw(&tree).map_err(ApplicationError::from)?);
    output::detail(&format!("bracket: {}", tree));
    output::detail(&format!("level:   {}", to_level_notation(&tree)));
    Ok(())
}

#[instrument(skip(service))]
fn cmd_random(service: &MetricsService, size: usize, seed: u64) -> CliResult<()> {
    let tree = service.generate(size, seed);
    let report = service.analyze(&tree);
    print_report(service, &tree, &report)?;

    let (linear, quadratic) = service.cross_check_diameter(&tree);
    if linear != quadratic {
        return Err(CliError::Internal(format!(
            "diameter mismatch for size {} seed {}: linear {} != quadratic {}",
            size, seed, linear, quadratic
        )));
    }
    if service.settings().output_format != OutputFormat::Toml {
        output::success("linear and quadratic diameter agree");
    }
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::metric("global", &format!("{}{}", path.display(), state));
                }
                None => output::warning("no home directory, global config disabled"),
            }
            output::metric("env", &format!("{}_*", config::ENV_PREFIX));
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Measures the built-in sample tree.
fn cmd_sample(service: &MetricsService) -> CliResult<()> {
    let tree = service.parse(SAMPLE_TREE, InputFormat::Bracket)?;
    if service.settings().output_format != OutputFormat::Toml {
        output::header(&format!("sample tree {}", SAMPLE_TREE));
    }
    let report = service.analyze(&tree);
    print_report(service, &tree, &report)
}
