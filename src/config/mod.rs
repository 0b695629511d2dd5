//! Runtime configuration from command-line flags and the environment.

mod resolve;

pub use resolve::{
    AUTH_KEY_ENV, ResolveOptions, ResolvedConfig, default_endpoint, resolve_config,
};
