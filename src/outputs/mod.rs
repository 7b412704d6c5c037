//! Page rendering and output files.
//!
//! # Submodules
//!
//! - [`page`]: Assigns articles to the hero, sidebar and grid slots and renders the page
//! - [`cards`]: Markup fragment for a single story in a given slot size
//! - [`template`]: Static page skeleton, stylesheet and placeholder substitution
//! - [`html`]: Atomically replaces the output HTML file
//! - [`json`]: Writes the optional JSON snapshot of the edition
//!
//! # Output
//!
//! ```text
//! index.html      # always, fully overwritten each run
//! edition.json    # only with --json-output
//! ```

pub mod cards;
pub mod html;
pub mod json;
pub mod page;
pub mod template;
