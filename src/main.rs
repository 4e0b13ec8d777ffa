use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use codefinder::report::{derive_label, SummaryReporter};
use codefinder::{analyze, build_rows, AnalysisOptions, Config, Error, ReportFormat, Reporter};
use colored::Colorize;
use dialoguer::{Confirm, Input};
use miette::{IntoDiagnostic, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// CodeFinder - Finds the usages of code from the source directory in the target directory
#[derive(Parser, Debug)]
#[command(name = "codefinder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory whose classes may be used (prompted for if missing)
    #[arg(long, value_name = "DIR")]
    source_root: Option<PathBuf>,

    /// Directory scanned for usages (prompted for if missing)
    #[arg(long, value_name = "DIR")]
    target_root: Option<PathBuf>,

    /// Do not ask for confirmation after prompting for directories
    #[arg(long)]
    skip_confirm: bool,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (default: dependency_usages.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Do not open the report with the default application
    #[arg(long)]
    no_open: bool,

    /// Sort directory listings by name for platform-independent row order
    #[arg(long)]
    sorted: bool,

    /// Scan files in parallel (enabled by default)
    #[arg(long, action = clap::ArgAction::Set)]
    parallel: Option<bool>,

    /// Number of most used classes to show in the summary
    #[arg(long, default_value = "10")]
    top: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only errors
    #[arg(short, long)]
    quiet: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Csv,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => ReportFormat::Csv,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completions
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    info!("CodeFinder v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        let cwd = std::env::current_dir().into_diagnostic()?;
        Config::from_default_locations(&cwd)?
    };

    // Override with CLI arguments
    if cli.source_root.is_some() {
        config.source_root = cli.source_root.clone();
    }
    if cli.target_root.is_some() {
        config.target_root = cli.target_root.clone();
    }
    if cli.output.is_some() {
        config.output = cli.output.clone();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(parallel) = cli.parallel {
        config.parallel = parallel;
    }
    if cli.no_open {
        config.open_report = false;
    }
    config.sort_entries |= cli.sorted;

    Ok(config)
}

/// Use the configured root, or ask for one. The flag tells whether the user
/// was prompted.
fn resolve_root(configured: &Option<PathBuf>, title: &str) -> Result<(PathBuf, bool)> {
    if let Some(root) = configured {
        return Ok((root.clone(), false));
    }

    if !std::io::stdin().is_terminal() {
        return Err(miette::miette!(
            "{}: no directory given and no terminal to prompt on",
            title
        ));
    }

    let answer: String = Input::new()
        .with_prompt(title)
        .interact_text()
        .into_diagnostic()?;
    Ok((PathBuf::from(answer.trim()), true))
}

fn run(config: &Config, cli: &Cli) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::{Duration, Instant};

    let (source_root, source_prompted) =
        resolve_root(&config.source_root, "Please select source root directory")?;
    let (target_root, target_prompted) =
        resolve_root(&config.target_root, "Please select target root directory")?;

    // Prompted paths are easy to get wrong, let the user check them
    if (source_prompted || target_prompted) && !cli.skip_confirm {
        let message = format!(
            "Source Root set to {}\n---\nTarget Root set to {}\n---\nContinue?",
            source_root.display(),
            target_root.display()
        );
        let proceed = Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .into_diagnostic()?;
        if !proceed {
            return Err(Error::Cancelled.into());
        }
    }

    let source_label = derive_label(&source_root.to_string_lossy());
    let target_label = derive_label(&target_root.to_string_lossy());

    let start_time = Instant::now();

    let spinner = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };
    spinner.set_message(format!(
        "Scanning {} for code from {}",
        target_root.display(),
        source_root.display()
    ));

    let options = AnalysisOptions {
        sort_entries: config.sort_entries,
        parallel: config.parallel,
    };
    let analysis = analyze(&source_root, &target_root, &options);
    spinner.finish_and_clear();
    let analysis = analysis?;

    info!("Converting found usages to {:?} format", config.format);
    let rows = build_rows(&analysis.usages, &source_label, &target_label);
    let reporter = Reporter::new(config.format, config.output.clone()).with_open(config.open_report);
    reporter.report(&rows)?;

    if !cli.quiet {
        SummaryReporter::new(&source_label, &target_label)
            .with_top_n(cli.top)
            .with_output_path(reporter.output_path().to_path_buf())
            .report(&analysis.dependencies, &analysis.usages);

        println!(
            "{}",
            format!(
                "⏱  Found {} usages in {:.2}s",
                rows.len() - 1,
                start_time.elapsed().as_secs_f64()
            )
            .dimmed()
        );
    }

    Ok(())
}
