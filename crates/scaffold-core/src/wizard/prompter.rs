//! The interactive surface the wizard talks to

use crate::catalog::CatalogEntry;
use crate::error::Result;
use std::fmt;

/// Validator for free-text prompts; `Err` carries the message shown to the user
pub type Validator = Box<dyn Fn(&str) -> std::result::Result<(), String>>;

/// Result of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The user dismissed the prompt (Esc / Ctrl+C)
    Cancelled,
}

/// Renders prompts and reports answers or cancellation
///
/// Only the wizard holds a prompter, so it is the only component that
/// writes to the interactive surface.
pub trait Prompter {
    /// Free-text input, re-asked until `validator` accepts it
    fn text(&mut self, message: &str, placeholder: &str, validator: Validator)
        -> Result<Answer<String>>;

    /// Pick one option; unselectable entries must not be offered
    fn select<T>(&mut self, message: &str, options: &[CatalogEntry<T>]) -> Result<Answer<T>>
    where
        T: Copy + Eq + fmt::Debug + 'static;

    /// Pick any number of options, including none
    fn multiselect<T>(
        &mut self,
        message: &str,
        options: &[CatalogEntry<T>],
    ) -> Result<Answer<Vec<T>>>
    where
        T: Copy + Eq + fmt::Debug + 'static;

    /// Yes/no question
    fn confirm(&mut self, message: &str, initial: bool) -> Result<Answer<bool>>;

    /// Erase the last `count` rendered lines
    fn clear_lines(&mut self, count: usize) -> Result<()>;

    /// Non-blocking warning shown between prompts
    fn warn(&mut self, message: &str) -> Result<()>;
}
