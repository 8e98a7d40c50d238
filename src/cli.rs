// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, ValueEnum};

// ---

/// Finds every span of the input lines matching a wildcard pattern.
///
/// In the pattern, `*` matches any number of bytes and `?` matches exactly one byte,
/// all other bytes match themselves.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Color output options.
    #[arg(long, default_value = "auto", env = "WILDSPAN_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Handful alias for --color=always, overrides --color option.
    #[arg(short)]
    pub color_always: bool,

    /// Which matches to report for each line.
    #[arg(long, default_value = "all", env = "WILDSPAN_MODE", overrides_with = "mode")]
    #[arg(value_enum)]
    pub mode: ModeOption,

    /// Handful alias for --mode=longest, overrides --mode option.
    #[arg(short)]
    pub longest: bool,

    /// Output format.
    #[arg(
        long,
        default_value = "text",
        env = "WILDSPAN_OUTPUT_FORMAT",
        overrides_with = "output_format"
    )]
    #[arg(value_enum)]
    pub output_format: OutputFormat,

    /// Pattern to search for.
    pub pattern: String,

    /// Files to process, standard input is used if none is given or `-` is specified.
    #[arg(name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Returns the effective search mode, taking aliases into account.
    pub fn mode(&self) -> ModeOption {
        if self.longest { ModeOption::Longest } else { self.mode }
    }

    /// Returns the effective color option, taking aliases into account.
    pub fn color(&self) -> ColorOption {
        if self.color_always {
            ColorOption::Always
        } else {
            self.color
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeOption {
    /// Report every matching span.
    All,
    /// Report only the longest matching span.
    Longest,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line:start..end:text` record per match.
    Text,
    /// One JSON object per match.
    Json,
}

#[cfg(test)]
mod tests;
