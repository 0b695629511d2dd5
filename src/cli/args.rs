use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "dlt")]
#[command(about = "Interactive file translation with the DeepL API")]
#[command(version)]
pub struct Args {
    /// DeepL authentication key
    #[arg(short = 'k', long, env = "DEEPL_AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    /// DeepL API base URL (defaults to the free or pro host matching the key)
    #[arg(short = 'e', long, env = "DEEPL_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Glossary ID applied to document translations
    #[arg(short = 'g', long)]
    pub glossary_id: Option<String>,

    /// Suppress progress output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            auth_key: self.auth_key.clone(),
            endpoint: self.endpoint.clone(),
            glossary_id: self.glossary_id.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List DeepL target language codes
    Languages,
}
