//! Console output.
//!
//! The JSON document goes to stdout through [`sh_println!`]; everything meant for a human goes
//! to stderr through [`sh_eprintln!`] and [`sh_warn!`], which respect the global [`Verbosity`].

use std::{
    fmt,
    io::{self, Write},
    sync::atomic::{AtomicU8, Ordering},
};
use yansi::Paint;

/// How much the shell prints to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Only the result document and errors.
    Quiet,
    /// Progress, summary and warnings.
    #[default]
    Normal,
    /// Everything, including per-connection details.
    Verbose,
}

impl Verbosity {
    const fn to_u8(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::Normal => 1,
            Self::Verbose => 2,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }
}

static VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Normal.to_u8());

/// Sets the global verbosity.
pub fn set_verbosity(verbosity: Verbosity) {
    VERBOSITY.store(verbosity.to_u8(), Ordering::Relaxed);
}

/// Returns the global verbosity.
pub fn verbosity() -> Verbosity {
    Verbosity::from_u8(VERBOSITY.load(Ordering::Relaxed))
}

/// Returns `true` if stderr messages are suppressed.
pub fn is_quiet() -> bool {
    verbosity() == Verbosity::Quiet
}

/// Returns `true` if verbose output was requested.
pub fn is_verbose() -> bool {
    verbosity() == Verbosity::Verbose
}

#[doc(hidden)]
pub fn __println(args: fmt::Arguments<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    out.flush()
}

#[doc(hidden)]
pub fn __eprintln(args: fmt::Arguments<'_>) -> io::Result<()> {
    if is_quiet() {
        return Ok(());
    }
    let mut err = io::stderr().lock();
    err.write_fmt(args)?;
    err.write_all(b"\n")
}

#[doc(hidden)]
pub fn __warn(args: fmt::Arguments<'_>) -> io::Result<()> {
    if is_quiet() {
        return Ok(());
    }
    let mut err = io::stderr().lock();
    write!(err, "{}", "Warning: ".yellow().bold())?;
    err.write_fmt(args)?;
    err.write_all(b"\n")
}

/// Prints a line to stdout. Never suppressed.
#[macro_export]
macro_rules! sh_println {
    () => {
        $crate::shell::__println(format_args!(""))
    };
    ($($arg:tt)*) => {
        $crate::shell::__println(format_args!($($arg)*))
    };
}

/// Prints a line to stderr unless the shell is quiet.
#[macro_export]
macro_rules! sh_eprintln {
    () => {
        $crate::shell::__eprintln(format_args!(""))
    };
    ($($arg:tt)*) => {
        $crate::shell::__eprintln(format_args!($($arg)*))
    };
}

/// Prints a highlighted warning to stderr unless the shell is quiet.
#[macro_export]
macro_rules! sh_warn {
    ($($arg:tt)*) => {
        $crate::shell::__warn(format_args!($($arg)*))
    };
}
