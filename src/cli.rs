//! Command-line interface for par-shot.
//!
//! Parses capture options and handles the `init-config` subcommand.

use crate::diff::DiffSide;
use clap::{Parser, Subcommand, ValueEnum};
use par_shot_config::{Config, LogLevel};
use std::path::PathBuf;

/// par-shot - Screenshot source files, selections and side-by-side diffs
#[derive(Parser)]
#[command(name = "par-shot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source file to capture
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Compare FILE (left) against this file (right) and capture both panes
    #[arg(long, value_name = "FILE")]
    pub diff: Option<PathBuf>,

    /// Pane that holds focus in diff mode
    #[arg(long, value_enum, default_value_t = FocusArg::Left)]
    pub focus: FocusArg,

    /// Capture only the characters START..END (zero-based char offsets)
    #[arg(long, value_name = "START:END", value_parser = parse_offsets, conflicts_with = "lines")]
    pub select: Option<(usize, usize)>,

    /// Capture only lines FIRST through LAST (one-based, inclusive)
    #[arg(long, value_name = "FIRST-LAST", value_parser = parse_lines)]
    pub lines: Option<(usize, usize)>,

    /// Leave the line-number gutter out of the image
    #[arg(long)]
    pub no_gutter: bool,

    /// Draw the gutter on the right of the text
    #[arg(long)]
    pub gutter_right: bool,

    /// Tab size of the source view
    #[arg(long, value_name = "COLUMNS")]
    pub tab_size: Option<usize>,

    /// Soft-wrap lines at this column
    #[arg(long, value_name = "COLUMNS")]
    pub wrap: Option<usize>,

    /// Keep the selection's shared indentation
    #[arg(long)]
    pub keep_indent: bool,

    /// Straight divider bands instead of skewed polygons
    #[arg(long)]
    pub align: bool,

    /// Divider width in pixels (0 joins the panes directly)
    #[arg(long, value_name = "PIXELS")]
    pub divider_width: Option<u32>,

    /// Directory to save screenshots in
    #[arg(long, value_name = "DIR")]
    pub out: Option<String>,

    /// Do not copy the screenshot to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Do not save the screenshot to disk
    #[arg(long)]
    pub no_save: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FocusArg {
    Left,
    Right,
}

impl From<FocusArg> for DiffSide {
    fn from(focus: FocusArg) -> Self {
        match focus {
            FocusArg::Left => DiffSide::Left,
            FocusArg::Right => DiffSide::Right,
        }
    }
}

/// What to select before capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionArg {
    Offsets { start: usize, end: usize },
    /// One-based inclusive line range
    Lines { first: usize, last: usize },
}

/// Runtime options passed from CLI to the runner
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub file: PathBuf,
    pub diff_with: Option<PathBuf>,
    pub focus: Option<DiffSide>,
    pub selection: Option<SelectionArg>,
    pub gutter_right: bool,
    pub tab_size: Option<usize>,
    pub wrap: Option<usize>,
    pub align: bool,
    pub divider_width: Option<u32>,
    pub config_path: Option<PathBuf>,
    /// Config overrides, applied after the file is loaded
    pub no_gutter: bool,
    pub keep_indent: bool,
    pub out: Option<String>,
    pub no_clipboard: bool,
    pub no_save: bool,
    /// Log level from `--log-level`; takes precedence over RUST_LOG and config
    pub log_level: Option<LogLevel>,
}

impl RuntimeOptions {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if self.no_gutter {
            config.include_gutter = false;
        }
        if self.keep_indent {
            config.trim_indent = false;
        }
        if let Some(out) = &self.out {
            config.output_dir = out.clone();
        }
        if self.no_clipboard {
            config.clipboard = false;
        }
        if self.no_save {
            config.save = false;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with a capture
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    from_cli(Cli::parse())
}

fn from_cli(cli: Cli) -> CliResult {
    if let Some(Commands::InitConfig { force }) = cli.command {
        let path = cli.config.unwrap_or_else(Config::config_path);
        return CliResult::Exit(match init_config(&path, force) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("par-shot: error: {e:#}");
                1
            }
        });
    }

    let Some(file) = cli.file else {
        eprintln!("par-shot: error: no input file given");
        return CliResult::Exit(2);
    };

    let selection = match (cli.select, cli.lines) {
        (Some((start, end)), _) => Some(SelectionArg::Offsets { start, end }),
        (None, Some((first, last))) => Some(SelectionArg::Lines { first, last }),
        (None, None) => None,
    };

    CliResult::Continue(RuntimeOptions {
        file,
        focus: cli.diff.as_ref().map(|_| cli.focus.into()),
        diff_with: cli.diff,
        selection,
        gutter_right: cli.gutter_right,
        tab_size: cli.tab_size,
        wrap: cli.wrap,
        align: cli.align,
        divider_width: cli.divider_width,
        config_path: cli.config,
        no_gutter: cli.no_gutter,
        keep_indent: cli.keep_indent,
        out: cli.out,
        no_clipboard: cli.no_clipboard,
        no_save: cli.no_save,
        log_level: cli.log_level,
    })
}

/// Write the default config to `path`
fn init_config(path: &std::path::Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn parse_offsets(value: &str) -> Result<(usize, usize), String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{value}'"))?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid start offset '{start}': {e}"))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid end offset '{end}': {e}"))?;
    Ok((start, end))
}

fn parse_lines(value: &str) -> Result<(usize, usize), String> {
    let (first, last) = match value.split_once('-') {
        Some((first, last)) => (first, last),
        None => (value, value),
    };
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| format!("invalid line number '{s}' (lines start at 1)"))
    };
    let (first, last) = (parse(first)?, parse(last)?);
    if last < first {
        return Err(format!("line range {first}-{last} is reversed"));
    }
    Ok((first, last))
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| {
        format!("unknown log level '{value}' (off, error, warn, info, debug, trace)")
    })
}
