use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use git_changelog::config;
use git_changelog::git::{Git2Repository, SystemGit};
use git_changelog::{ui, ChangelogPipe, Context, Outcome, Pipe};

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate release notes from the commits since the previous tag"
)]
struct Args {
    #[arg(long, help = "Tag of the release (default: nearest tag reachable from HEAD)")]
    tag: Option<String>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long = "exclude", value_name = "REGEX", help = "Exclude commits whose subject matches (repeatable)")]
    exclude: Vec<String>,

    #[arg(long, value_name = "FILE", help = "Use release notes from file and skip generation")]
    release_notes: Option<PathBuf>,

    #[arg(long, help = "Snapshot build, changelog generation is skipped")]
    snapshot: bool,

    #[arg(short, long, value_name = "FILE", help = "Write release notes to file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    config.add_exclusions(args.exclude);

    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let tag = match args.tag {
        Some(tag) => tag,
        None => match repo.current_tag() {
            Ok(Some(tag)) => tag,
            Ok(None) => {
                ui::display_error("No tag reachable from HEAD, pass one with --tag");
                std::process::exit(1);
            }
            Err(e) => {
                ui::display_error(&format!("Failed to detect current tag: {}", e));
                std::process::exit(1);
            }
        },
    };

    let mut ctx = Context::new(tag, config);
    ctx.snapshot = args.snapshot;
    if let Some(path) = &args.release_notes {
        match fs::read_to_string(path) {
            Ok(notes) => ctx.release_notes = Some(notes),
            Err(e) => {
                ui::display_error(&format!(
                    "Cannot read release notes from {}: {}",
                    path.display(),
                    e
                ));
                std::process::exit(1);
            }
        }
    }

    let pipe = ChangelogPipe::new(SystemGit::new(repo.workdir()));
    ui::display_status(&format!("{} for {}", pipe.description(), ctx.current_tag));

    match pipe.run(&mut ctx) {
        Outcome::Success => {
            for warning in &ctx.warnings {
                ui::display_boundary_warning(warning);
            }
            let notes = ctx.release_notes.unwrap_or_default();
            match &args.output {
                Some(path) => {
                    if let Err(e) = fs::write(path, &notes) {
                        ui::display_error(&format!("Cannot write {}: {}", path.display(), e));
                        std::process::exit(1);
                    }
                    ui::display_success(&format!("Release notes written to {}", path.display()));
                }
                None => println!("{}", notes),
            }
        }
        Outcome::Skipped(reason) => {
            ui::display_skipped(pipe.description(), &reason);
        }
        Outcome::Failed(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Console logging controlled by RUST_LOG (default: warn, debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
