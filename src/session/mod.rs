//! The interactive prompt loop.

mod console;

pub use console::{Console, TerminalConsole};

use anyhow::Result;
use std::path::PathBuf;

use crate::deepl::{DeeplApi, DeeplError, parse_target_language};
use crate::input::SourceDocument;
use crate::paths::normalize_input_path;
use crate::pipeline::{DocumentOutcome, DocumentPipeline, translate_text_file};
use crate::status;
use crate::ui::Style;

/// Typing this (in any case) at the file prompt ends the session.
pub const QUIT_SENTINEL: &str = "q";

const PATH_PROMPT: &str = "Enter the path to the document you want to translate (or 'q' to quit): ";
const LANGUAGE_PROMPT: &str = "Enter the target language code (e.g., EN-US, KO, DE): ";

/// Where the loop stands. Polling happens inside [`DocumentPipeline`].
#[derive(Debug)]
enum LoopState {
    AwaitingInput,
    Counting(PathBuf),
    Translating(SourceDocument),
    Done(DocumentOutcome),
    Quit,
}

/// One interactive translation session: prompt, translate, repeat.
pub struct Session<'a, A: ?Sized, C> {
    api: &'a A,
    console: C,
    glossary_id: Option<String>,
}

impl<'a, A, C> Session<'a, A, C>
where
    A: DeeplApi + ?Sized,
    C: Console,
{
    pub const fn new(api: &'a A, console: C, glossary_id: Option<String>) -> Self {
        Self {
            api,
            console,
            glossary_id,
        }
    }

    #[cfg(test)]
    pub(crate) const fn console(&self) -> &C {
        &self.console
    }

    /// Runs until the user quits.
    ///
    /// Missing files and invalid input are reported and the prompt comes
    /// back. Failed requests to DeepL end the session with an error.
    pub async fn run(&mut self) -> Result<()> {
        let mut state = LoopState::AwaitingInput;

        loop {
            state = match state {
                LoopState::Quit => return Ok(()),
                LoopState::AwaitingInput => self.await_input()?,
                LoopState::Counting(path) => Self::count(path),
                LoopState::Translating(source) => match self.translate(&source).await {
                    Ok(next) => next,
                    Err(e) if is_recoverable(&e) => {
                        println!("{}", Style::warning(&e));
                        LoopState::AwaitingInput
                    }
                    Err(e) => return Err(e),
                },
                LoopState::Done(outcome) => {
                    report(&outcome);
                    LoopState::AwaitingInput
                }
            };
        }
    }

    fn await_input(&mut self) -> Result<LoopState> {
        let Some(input) = self.console.prompt(PATH_PROMPT)? else {
            return Ok(LoopState::Quit);
        };

        if input.eq_ignore_ascii_case(QUIT_SENTINEL) {
            return Ok(LoopState::Quit);
        }

        let path = normalize_input_path(&input);
        println!("{}", path.display());
        Ok(LoopState::Counting(path))
    }

    fn count(path: PathBuf) -> LoopState {
        match SourceDocument::open(path) {
            Ok(source) => LoopState::Translating(source),
            Err(e) => {
                status!("{e}");
                println!(
                    "{}",
                    Style::warning("File not found. Please enter a valid file path.")
                );
                LoopState::AwaitingInput
            }
        }
    }

    /// Runs the direct text path for small files, then always the document path.
    async fn translate(&mut self, source: &SourceDocument) -> Result<LoopState> {
        if source.fits_direct_send() {
            let count = source.character_count().unwrap_or_default();
            let Some(input) = self.console.prompt(&format!(" {count} {LANGUAGE_PROMPT}"))? else {
                return Ok(LoopState::Quit);
            };
            let target_lang = parse_target_language(&input)?;

            let output = translate_text_file(self.api, source, &target_lang).await?;
            println!(
                "Translated text written to: {}",
                Style::path(output.display())
            );
        }

        let Some(input) = self.console.prompt(LANGUAGE_PROMPT)? else {
            return Ok(LoopState::Quit);
        };
        let target_lang = parse_target_language(&input)?;

        let outcome = DocumentPipeline::new(self.api, self.glossary_id.as_deref())
            .run(source, &target_lang)
            .await?;

        Ok(LoopState::Done(outcome))
    }
}

fn report(outcome: &DocumentOutcome) {
    match outcome {
        DocumentOutcome::Saved(path) => println!(
            "{} {}",
            Style::success("Translated document saved to:"),
            Style::path(path.display())
        ),
        DocumentOutcome::Failed(message) => {
            println!("{} {message}", Style::error("Translation failed:"));
        }
    }
}

fn is_recoverable(err: &anyhow::Error) -> bool {
    err.downcast_ref::<DeeplError>()
        .is_some_and(DeeplError::is_recoverable)
}
