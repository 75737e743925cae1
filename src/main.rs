//! fnlist - Entry Point

use clap::Parser;
use fnlist::session::Session;
use fnlist::view::{FunctionsList, TextList};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// fnlist - edit the events functions of a project extension from the terminal
#[derive(Parser, Debug)]
#[command(name = "fnlist")]
#[command(version)]
#[command(about = "Edit the events functions list of a project extension")]
pub struct Args {
    /// Path to the project JSON file
    pub project: PathBuf,

    /// Extension to list (defaults to the first one)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Start with a search filter
    #[arg(short, long)]
    pub search: Option<String>,

    /// Base name for new functions
    #[arg(long)]
    pub base_name: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read line commands instead of opening the full-screen list
    #[arg(long)]
    pub plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = fnlist::config::load_config_with_precedence(args.config.clone())?;
        let merged = fnlist::config::merge_config(config_file);
        let with_env = fnlist::config::apply_env_overrides(merged);
        fnlist::config::apply_cli_overrides(with_env, args.base_name.clone())
    };

    fnlist::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let project = fnlist::model::Project::load(&args.project)?;
    let extension = project.extension_index(args.extension.as_deref())?;
    info!(
        project = %project.name,
        extension,
        "Project loaded"
    );

    let path = Some(args.project.clone());
    let settings = config.list_settings();
    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();

    if interactive && !args.plain {
        let mut session = Session::new(project, extension, path, settings, FunctionsList::new());
        if let Some(search) = &args.search {
            session.search(search);
        }
        fnlist::view::run_tui(session)?;
    } else {
        info!(plain = args.plain, "Using the line console");
        let mut session = Session::new(project, extension, path, settings, TextList::new());
        if let Some(search) = &args.search {
            session.search(search);
        }
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        session.run(stdin.lock(), &mut stdout)?;
    }

    Ok(())
}
