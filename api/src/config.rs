//! Application configuration loading
//!
//! Sources are layered in this order, later ones winning:
//! 1. Built-in defaults for the current environment
//! 2. `config.<environment>.toml` in the working directory (optional)
//! 3. `CB__`-prefixed environment variables, e.g. `CB__SERVER__PORT=9090`
//! 4. The well-known unprefixed variables (`DATABASE_URL`, `JWT_SECRET`, ...)

use config::{Config, ConfigError, File, FileFormat};
use std::path::Path;

use cb_shared::{AppConfig, Environment};

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_from(Environment::from_env(), Path::new("."))
}

/// Load configuration, looking for the environment file in `config_dir`
pub fn load_from(environment: Environment, config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);
    let config_file = config_dir.join(environment.config_file());

    let settings = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::from(config_file).format(FileFormat::Toml).required(false))
        .add_source(
            config::Environment::with_prefix("CB")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut app_config: AppConfig = settings.try_deserialize()?;
    app_config.environment = environment;
    app_config.apply_env();

    Ok(app_config)
}
