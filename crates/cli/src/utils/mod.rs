use da_profile_config::{Config, ExtractConfigError, figment::Figment};
use std::path::Path;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

/// Initializes a tracing Subscriber for logging.
///
/// Logs go to stderr so stdout only ever carries the JSON document. The filter is read from
/// `RUST_LOG` and defaults to warnings.
pub fn subscriber() {
    let env_filter =
        EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy();
    let registry = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    if let Err(err) = registry.try_init() {
        debug!(%err, "tracing subscriber already installed");
    }
}

/// Loads a dotenv file, from the cwd and the project root, ignoring potential failure.
///
/// We could use `warn!` here, but that would imply that the dotenv file can't configure
/// the logging behavior of the tool.
pub fn load_dotenv() {
    let load = |p: &Path| {
        dotenvy::from_path(p.join(".env")).ok();
    };

    // we only want the .env file of the cwd, not of the parent directories
    if let Ok(cwd) = std::env::current_dir() {
        load(&cwd);
    }
}

/// Loads the [`Config`] with caller-supplied options merged on top of the defaults, the config
/// file and the environment.
pub trait LoadConfig {
    /// Returns the figment used to load the [`Config`].
    fn figment(&self) -> Figment;

    /// Loads the [`Config`].
    fn load_config(&self) -> Result<Config, ExtractConfigError> {
        Config::try_from(self.figment())
    }
}
