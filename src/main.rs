//! CLI entry point for `parcelShell`.

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use parcelshell::config::{Config, OutputFormat};
use parcelshell::i18n;
use parcelshell::shell::{Shell, ShellOptions};
use parcelshell::store::ParcelStore;

#[derive(Parser)]
#[command(name = "parcelshell", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Start with an empty parcel list
    #[arg(long, global = true)]
    no_seed: bool,

    /// Print listings as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Language (en, es). Defaults to system locale.
    #[arg(long, value_name = "LANG")]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu
    Shell,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

/// Detect language early from --lang arg, config or system env, before
/// clap processes --help.
fn detect_lang_early(config: &Config) -> i18n::Lang {
    let args: Vec<String> = std::env::args().collect();
    for (i, arg) in args.iter().enumerate() {
        if arg == "--lang" {
            if let Some(lang) = args.get(i + 1).and_then(|c| i18n::Lang::from_code(c)) {
                return lang;
            }
        }
        if let Some(lang) = arg
            .strip_prefix("--lang=")
            .and_then(i18n::Lang::from_code)
        {
            return lang;
        }
    }
    config
        .general
        .lang
        .as_deref()
        .and_then(i18n::Lang::from_code)
        .unwrap_or_else(i18n::detect_system_lang)
}

/// Build a localized clap Command using i18n strings.
fn build_localized_command() -> clap::Command {
    let cmd = Cli::command()
        .about(i18n::app_about())
        .long_about(i18n::app_long_about())
        .after_help(i18n::app_after_help())
        .mut_arg("no_seed", |a| a.help(i18n::help_no_seed()))
        .mut_arg("json", |a| a.help(i18n::help_json()))
        .mut_arg("verbose", |a| a.help(i18n::help_verbose()))
        .mut_arg("lang", |a| a.help(i18n::help_lang()));

    cmd.mut_subcommand("shell", |s| s.about(i18n::help_cmd_shell()))
        .mut_subcommand("completions", |s| s.about(i18n::help_cmd_completions()))
        .mut_subcommand("manpage", |s| s.about(i18n::help_cmd_manpage()))
}

fn main() -> anyhow::Result<()> {
    let config = parcelshell::config::load_config();

    // Detect language BEFORE clap parsing so --help is localized
    i18n::set_lang(detect_lang_early(&config));

    let matches = build_localized_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        Some(Commands::Shell) | None => cmd_shell(&config, cli.no_seed, cli.json),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = parcelshell::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "parcelshell.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Run the interactive menu on stdin/stdout.
fn cmd_shell(config: &Config, no_seed: bool, json: bool) -> anyhow::Result<()> {
    let mut options = ShellOptions::from_config(config);
    if json {
        options.output = OutputFormat::Json;
    }

    let store = if config.shell.seed_examples && !no_seed {
        ParcelStore::with_examples()
    } else {
        ParcelStore::new()
    };
    tracing::info!(parcels = store.len(), "Starting session");

    let stdin = std::io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), std::io::stdout(), options);
    shell.run()
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "parcelshell", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}
