// Page output helpers
//
// This module covers the final stage of page rendering: negotiating and
// applying gzip output compression, assembling the full HTML document
// around injected header/footer chrome, and the installation check that
// short-circuits rendering with a fixed 503 setup page.

pub mod compress;
pub mod document;
pub mod install;

pub use compress::{accepts_gzip, render_output, Output};
pub use document::{create_html_document, DocumentInfo, PageChrome};
pub use install::{check_installed, is_installed, SetupRequired};
