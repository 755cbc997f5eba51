//! Startup-time environment: dotenv files and variable overrides.
//!
//! The environment is read exactly once, while the config is being built.
//! Nothing downstream consults it again.

mod dotenv;
mod overrides;


pub use dotenv::{load_dotenv, parse_dotenv, resolve_dotenv_path};
pub use overrides::{apply_env_overrides, EnvSource, ENV_OVERRIDES};
