use anyhow::Result;
use aria_hooks::commands::{hooks, run};
use aria_hooks::hooks::HookKind;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "ARIA_HOOKS_LOG";

#[derive(Parser)]
#[command(name = "aria-hooks")]
#[command(about = "Lifecycle hooks for agent sessions", long_about = None)]
#[command(version)]
struct Cli {
    /// Base directory holding journal.md, lines-of-flight.txt and skills/
    #[arg(long, global = true, env = "ARIA_DIR")]
    aria_dir: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a trace from earlier sessions
    SessionStart,

    /// Show reminders, terser as the session grows
    ResponseReminders,

    /// Suggest skills whose triggers match the prompt
    SkillInvitation,

    /// Show the permission prompt reminder
    PermissionCheck,

    /// Print the hooks block for the host settings file
    Settings,

    /// Register the hooks in the host settings file
    Install {
        /// Settings file to update (defaults to ~/.claude/settings.json)
        #[arg(long)]
        settings: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("aria_hooks=debug")
        } else {
            EnvFilter::new("off")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version still print; bad invocations never fail the host.
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
    };

    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::SessionStart => run_hook(HookKind::SessionStart, cli.aria_dir),
        Commands::ResponseReminders => run_hook(HookKind::ResponseReminders, cli.aria_dir),
        Commands::SkillInvitation => run_hook(HookKind::SkillInvitation, cli.aria_dir),
        Commands::PermissionCheck => run_hook(HookKind::PermissionCheck, cli.aria_dir),
        Commands::Settings => hooks::settings(),
        Commands::Install { settings } => hooks::install(settings),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "aria-hooks", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Hooks swallow their own failures, so this always succeeds
fn run_hook(kind: HookKind, aria_dir: Option<PathBuf>) -> Result<()> {
    run::execute(kind, aria_dir);
    Ok(())
}
