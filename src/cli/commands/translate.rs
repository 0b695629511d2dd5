use anyhow::Result;

use crate::config::ResolvedConfig;
use crate::deepl::DeeplClient;
use crate::session::{Session, TerminalConsole};
use crate::status;

/// Runs the interactive prompt loop against DeepL until the user quits.
pub async fn run_translate(config: ResolvedConfig) -> Result<()> {
    status!("Using DeepL API at {}", config.endpoint);

    let client = DeeplClient::new(config.endpoint, config.auth_key);
    let mut session = Session::new(&client, TerminalConsole, config.glossary_id);
    session.run().await
}
