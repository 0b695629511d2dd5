//! # dlt - DeepL file translation CLI
//!
//! `dlt` asks for a file, translates it with DeepL and writes the result
//! next to the original, then asks for the next file.
//!
//! For each file:
//!
//! - files of at most 50,000 characters are first sent through the text
//!   endpoint and written to `<name>_<LANG><ext>`;
//! - every file is then uploaded as a document, polled every 5 seconds and
//!   the result downloaded to `<name>_translated<ext>`.
//!
//! ## Quick Start
//!
//! ```bash
//! export DEEPL_AUTH_KEY="your-auth-key:fx"
//! dlt
//!
//! # List target language codes
//! dlt languages
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Settings resolved from flags and environment variables.
pub mod config;

/// DeepL API client.
pub mod deepl;

/// File system utilities.
pub mod fs;

/// Loading source files.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// Input path normalization and output file naming.
pub mod paths;

/// Direct text and document translation paths.
pub mod pipeline;

/// The interactive prompt loop.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
