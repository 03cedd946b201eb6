use clap::{Parser, ValueEnum};
use da_profile_common::shell::{self, Verbosity};

/// When to colorize stderr output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Colorize if stderr is a terminal and the environment allows it.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

/// Global shell options.
#[derive(Clone, Copy, Debug, Default, Parser)]
#[command(next_help_heading = "Display options")]
pub struct ShellOptions {
    /// Use verbose output.
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print progress, summary or warnings to stderr.
    #[arg(long, short, global = true, alias = "silent", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log messages coloring.
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,
}

impl ShellOptions {
    pub fn verbosity(self) -> Verbosity {
        match (self.verbose, self.quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    /// Applies these options to the global shell.
    pub fn set_global_shell(self) {
        shell::set_verbosity(self.verbosity());
        match self.color.unwrap_or_default() {
            ColorChoice::Auto => yansi::whenever(yansi::Condition::TTY_AND_COLOR),
            ColorChoice::Always => yansi::enable(),
            ColorChoice::Never => yansi::disable(),
        }
    }
}
