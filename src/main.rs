use anyhow::Result;
use clap::Parser;

use git_recent::api;
use git_recent::source::GitCliSource;
use git_recent::view::{DisplayMode, LogView};

#[derive(clap::Parser)]
#[command(
    name = "git-recent",
    about = "Show recent commits with conventional-commit highlighting"
)]
struct Args {
    #[arg(short = 'C', long = "dir", help = "Run as if started in this directory")]
    dir: Option<String>,

    #[arg(long, help = "Print raw log lines without parsing or colors")]
    plain: bool,

    #[arg(long, help = "Emit the commit list as JSON and exit")]
    json: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.version {
        println!("git-recent {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let source = match args.dir {
        Some(dir) => GitCliSource::in_dir(dir),
        None => GitCliSource::new(),
    };

    // One fetch, one outcome. The JSON mode mirrors the endpoint wire shapes:
    // {"commits": [...]} on success, {"error": ...} with a failure exit code.
    if args.json {
        let response = api::fetch_git_log(&source);
        println!("{}", response.body());
        if response.status() != 200 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mode = if args.plain {
        DisplayMode::Plain
    } else {
        DisplayMode::Colored
    };

    let view = LogView::new().complete(api::fetch_git_log(&source));
    print!("{}", view.render(mode));

    if matches!(view, LogView::Failed(_)) {
        std::process::exit(1);
    }

    Ok(())
}
