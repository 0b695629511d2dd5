//! Subcommand implementations.

/// Interactive translation loop (the default command).
pub mod translate;
