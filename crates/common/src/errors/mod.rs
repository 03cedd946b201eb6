//! Helpers for rendering error chains.

use eyre::Chain;
use std::error::Error;

/// Anything that can walk its chain of causes.
pub trait ErrorChain {
    /// Returns an iterator over this error and its sources.
    fn chain(&self) -> Chain<'_>;
}

impl ErrorChain for dyn Error + 'static {
    fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}

impl ErrorChain for dyn Error + Send + Sync + 'static {
    fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }
}

impl ErrorChain for eyre::Report {
    fn chain(&self) -> Chain<'_> {
        self.chain()
    }
}

/// Displays a chain of errors in a single line.
pub fn display_chain<E: ErrorChain + ?Sized>(error: &E) -> String {
    dedup_chain(error).join("; ")
}

/// Collects the messages of an error chain, dropping causes already contained in the message
/// before them.
///
/// `thiserror` variants commonly render their source inline (`"failed to fetch block 7: timed
/// out"`), which would otherwise be repeated as the next cause.
pub fn dedup_chain<E: ErrorChain + ?Sized>(error: &E) -> Vec<String> {
    let mut causes: Vec<String> =
        error.chain().map(|cause| cause.to_string().trim().to_string()).collect();
    causes.dedup_by(|b, a| a.contains(b.as_str()));
    causes
}
