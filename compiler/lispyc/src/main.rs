//! Lispy shell.
//!
//! With no arguments, runs the interactive prompt. With file arguments,
//! loads each file in order. User-level failures are printed and never
//! change the exit status.

mod config;
mod repl;

use config::{CliConfig, Mode};
use lispy_eval::Interpreter;

fn main() {
    let config = CliConfig::from_env();
    init_tracing(config.log_tree);

    match config.mode {
        Mode::Repl => {
            let interp = Interpreter::new();
            if let Err(err) = repl::run(&interp) {
                eprintln!("error: {err}");
            }
        }
        Mode::Load(paths) => {
            let interp = Interpreter::new();
            for path in &paths {
                tracing::debug!(%path, "loading");
                let result = interp.load(path);
                if result.is_error() {
                    println!("{result}");
                }
            }
        }
        Mode::Help => print_usage(),
        Mode::Version => println!("lispy {}", env!("CARGO_PKG_VERSION")),
        Mode::UnknownFlag(flag) => {
            eprintln!("error: unknown option '{flag}'");
            eprintln!();
            eprint_usage();
        }
    }
}

/// Install a subscriber when `RUST_LOG` is set; stay silent otherwise.
fn init_tracing(tree: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let filter = EnvFilter::from_default_env();
    if tree {
        tracing_subscriber::registry()
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}

const USAGE: &str = "\
Usage: lispy [options] [file...]

With no files, starts an interactive prompt.
Each file is loaded in order; errors are printed and loading continues.

Options:
  -h, --help       Show this help message
  -V, --version    Show version information
  --               Treat every following argument as a file

Environment:
  RUST_LOG         Enable logging (e.g. RUST_LOG=lispy_eval=debug)
  LISPY_LOG_TREE   Set to 1 for hierarchical log output";

fn print_usage() {
    println!("{USAGE}");
}

fn eprint_usage() {
    eprintln!("{USAGE}");
}
