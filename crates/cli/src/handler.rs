use da_profile_common::errors::dedup_chain;
use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};

/// Environment variable that switches error reports to the full color-eyre output.
pub const DEBUG_ENV: &str = "DA_PROFILE_DEBUG";

/// Renders `eyre` reports for the `da-profile` binary.
///
/// The plain form prints the deduplicated cause chain; the verbose form delegates to color-eyre,
/// which adds span traces and backtraces.
pub enum Handler {
    /// One message per distinct cause.
    Plain,
    /// The full color-eyre report.
    Verbose(Box<dyn EyreHandler>),
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Display;
        dedup_chain(error).into_iter().format("; ").fmt(f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Verbose(handler) => handler.debug(error, f),
            Self::Plain if f.alternate() => fmt::Debug::fmt(error, f),
            Self::Plain => write_causes(&dedup_chain(error), f),
        }
    }

    fn track_caller(&mut self, location: &'static std::panic::Location<'static>) {
        if let Self::Verbose(handler) = self {
            handler.track_caller(location);
        }
    }
}

fn write_causes(causes: &[String], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let Some((error, sources)) = causes.split_first() else { return Ok(()) };
    write!(f, "{error}")?;
    if sources.is_empty() {
        return Ok(());
    }
    write!(f, "\n\nCaused by:")?;
    for (n, source) in sources.iter().enumerate() {
        write!(f, "\n  {n}: {source}")?;
    }
    Ok(())
}

/// Installs the `eyre` report hook and the color-eyre panic hook.
///
/// Reports are plain unless [`DEBUG_ENV`] is set.
pub fn install() {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug. Consider reporting it together with the command line used.")
        .into_hooks();
    panic_hook.install();
    let eyre_hook = eyre_hook.into_eyre_hook();
    let verbose = std::env::var_os(DEBUG_ENV).is_some();
    if let Err(err) = eyre::set_hook(Box::new(move |error| {
        Box::new(if verbose { Handler::Verbose(eyre_hook(error)) } else { Handler::Plain })
    })) {
        debug!(%err, "failed to install eyre report hook");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("failed to fetch block {number}: {source}")]
    struct Fetch {
        number: u64,
        source: Timeout,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("request timed out")]
    struct Timeout;

    struct Render<'a>(&'a Handler, &'a (dyn Error + 'static), bool);

    impl fmt::Display for Render<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if self.2 { self.0.debug(self.1, f) } else { self.0.display(self.1, f) }
        }
    }

    #[test]
    fn plain_report_drops_repeated_causes() {
        let error = Fetch { number: 98, source: Timeout };
        let rendered = Render(&Handler::Plain, &error, true).to_string();
        assert_eq!(rendered, "failed to fetch block 98: request timed out");
        let rendered = Render(&Handler::Plain, &error, false).to_string();
        assert_eq!(rendered, "failed to fetch block 98: request timed out");
    }

    #[test]
    fn plain_report_lists_distinct_causes() {
        let report = eyre::Report::new(Timeout).wrap_err("failed to query the chain");
        let error: &(dyn Error + 'static) = report.as_ref();
        let rendered = Render(&Handler::Plain, error, true).to_string();
        assert_eq!(rendered, "failed to query the chain\n\nCaused by:\n  0: request timed out");
    }
}
