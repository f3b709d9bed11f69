//! Configuration loading.
//!
//! Settings are layered, later layers overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. User settings file (`~/.skillio/config.yml`)
//! 3. Environment variables (`SKILLIO_INSTALL_PATH`, `SKILLIO_CATALOG`)
//! 4. Command-line flags
//!
//! # Example
//!
//! ```
//! use skillio::config::Settings;
//!
//! let settings = Settings::from_yaml_str("generator:\n  timeout_secs: 60\n", "config.yml").unwrap();
//! assert_eq!(settings.generator.timeout_secs, 60);
//! assert_eq!(settings.generator.program, "skill-seekers");
//! ```

pub mod settings;

pub use settings::{GeneratorSettings, Settings, ENV_CATALOG, ENV_INSTALL_PATH};
