//! CLI entry point for treeline

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treeline::{TreeGenerator, print_json, print_text};

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

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treeline")]
#[command(about = "Render a directory tree with include/exclude filters")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Hide directories with this name (can be used multiple times)
    #[arg(short = 'X', long = "exclude-dir", value_name = "NAME")]
    exclude_dir: Vec<String>,

    /// Hide files with this extension (can be used multiple times)
    #[arg(short = 'x', long = "exclude-ext", value_name = "EXT")]
    exclude_ext: Vec<String>,

    /// Show only directories matching this name or subpath, e.g. src/lib
    /// (can be used multiple times)
    #[arg(short = 'd', long = "only-dir", value_name = "SPEC")]
    only_dir: Vec<String>,

    /// Show only files with this extension (can be used multiple times)
    #[arg(short = 'e', long = "only-ext", value_name = "EXT")]
    only_ext: Vec<String>,

    /// Print a bare "/" as the first line instead of the root path
    #[arg(long = "no-root")]
    no_root: bool,

    /// Output the node tree in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable debug logging to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    if verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let mut generator = TreeGenerator::new();
    generator
        .exclude_directories(&args.exclude_dir)
        .exclude_extensions(&args.exclude_ext)
        .include_only_directories(&args.only_dir)
        .include_only_extensions(&args.only_ext)
        .print_root(!args.no_root);

    let tree = match generator.generate(&root) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("treeline: cannot access '{}': {}", args.path.display(), e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(tree.root())
    } else {
        print_text(&tree, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("treeline: error writing output: {}", e);
        process::exit(1);
    }
}
