// public modules
pub mod app;
pub mod cli;
pub mod error;

// public uses
pub use app::{App, InputReference, Options};
pub use wildsearch::{Pattern, Span};
