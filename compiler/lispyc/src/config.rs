//! Command-line configuration.

/// What the shell was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Interactive prompt.
    Repl,
    /// Load each file in order.
    Load(Vec<String>),
    Help,
    Version,
    /// A flag we don't recognise.
    UnknownFlag(String),
}

/// Settings gathered from argv and the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub mode: Mode,
    /// `LISPY_LOG_TREE=1`: hierarchical log output.
    pub log_tree: bool,
}

impl CliConfig {
    /// Read the process arguments and environment.
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let log_tree = std::env::var("LISPY_LOG_TREE").is_ok_and(|v| v == "1");
        Self::parse(&args, log_tree)
    }

    /// Parse arguments, excluding the program name.
    ///
    /// Flags are only recognised before `--`; everything else is a path.
    pub fn parse(args: &[String], log_tree: bool) -> Self {
        let mut paths = Vec::new();
        let mut flags_done = false;

        for arg in args {
            if flags_done || !arg.starts_with('-') || arg == "-" {
                paths.push(arg.clone());
                continue;
            }
            match arg.as_str() {
                "--" => flags_done = true,
                "-h" | "--help" => return Self::with_mode(Mode::Help, log_tree),
                "-V" | "--version" => return Self::with_mode(Mode::Version, log_tree),
                other => return Self::with_mode(Mode::UnknownFlag(other.to_string()), log_tree),
            }
        }

        let mode = if paths.is_empty() {
            Mode::Repl
        } else {
            Mode::Load(paths)
        };
        Self::with_mode(mode, log_tree)
    }

    fn with_mode(mode: Mode, log_tree: bool) -> Self {
        CliConfig { mode, log_tree }
    }
}
