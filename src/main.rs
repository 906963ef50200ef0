//! CLI entry point for pathinfo

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use pathinfo::{OutputConfig, OutputFormat, RenderError, ScanConfig, TreeBuilder};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve against the environment; `Auto` colours only a terminal.
    fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => auto_color(
                |key| std::env::var_os(key),
                std::io::stdout().is_terminal(),
            ),
        }
    }
}

/// `NO_COLOR` (https://no-color.org/) beats `FORCE_COLOR`; `TERM=dumb` disables colour.
fn auto_color(env: impl Fn(&str) -> Option<OsString>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }
    if env("FORCE_COLOR").is_some() {
        return true;
    }
    is_tty && env("TERM").is_none_or(|term| term != "dumb")
}

#[derive(Parser, Debug)]
#[command(name = "pathinfo")]
#[command(about = "Scan a directory into a tree and print it as text or JSON")]
#[command(version)]
struct Args {
    /// File or directory to scan
    path: PathBuf,

    /// Path reading depth; negative means unlimited
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,

    /// Type of output: h (human readable), j (json)
    #[arg(long = "type", value_name = "TYPE", default_value = "h")]
    output_type: String,

    /// Keep entries in filesystem enumeration order instead of sorting by name
    #[arg(long)]
    unsorted: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log scan progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    pathinfo::logging::init_logging(if args.verbose { "debug" } else { "warn" });

    let scan_config = ScanConfig::from_depth_arg(args.depth).with_sort(!args.unsorted);
    let result = match TreeBuilder::new(scan_config).build(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("pathinfo: error: {}", e);
            process::exit(1);
        }
    };

    let format = match args.output_type.parse::<OutputFormat>() {
        Ok(f) => f,
        Err(e) => {
            // Not fatal: the notice replaces the tree.
            println!("{}", e);
            return;
        }
    };

    let output_config = OutputConfig {
        use_color: args.color.enabled(),
        pretty: args.pretty,
        ..Default::default()
    };

    match pathinfo::print(&result, format, &output_config) {
        Ok(()) => {}
        Err(RenderError::Serialization(e)) => {
            tracing::warn!("skipping output: {}", e);
        }
        Err(e) => {
            eprintln!("pathinfo: error writing output: {}", e);
            process::exit(1);
        }
    }
}
