//! Prompter driven by a fixed list of answers
//!
//! Used to exercise the wizard without a terminal. The script is finite, so
//! a retry loop that never terminates shows up as an error instead of a hang.

use super::prompter::{Answer, Prompter, Validator};
use crate::catalog::CatalogEntry;
use crate::error::{Result, ScaffoldError};
use std::collections::VecDeque;
use std::fmt;

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Text(String),
    /// Option picked by catalog key
    Select(&'static str),
    Multi(Vec<&'static str>),
    Confirm(bool),
    Cancel,
}

/// Something the wizard did to the surface, recorded in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Asked(String),
    Rejected(String),
    Cleared(usize),
    Warned(String),
}

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Step>,
    events: Vec<Event>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Step>) -> Self {
        Self {
            script: script.into_iter().collect(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Messages of every prompt shown, in order
    pub fn asked(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Asked(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next(&mut self, message: &str) -> Result<Step> {
        self.events.push(Event::Asked(message.to_string()));
        self.script
            .pop_front()
            .ok_or_else(|| ScaffoldError::Script(format!("no answer left for '{}'", message)))
    }
}

fn mismatch<T>(expected: &str, found: &Step) -> Result<T> {
    Err(ScaffoldError::Script(format!(
        "expected {} answer, found {:?}",
        expected, found
    )))
}

fn lookup<T: Copy>(options: &[CatalogEntry<T>], key: &str) -> Result<T> {
    options
        .iter()
        .find(|e| e.key == key)
        .map(|e| e.value)
        .ok_or_else(|| ScaffoldError::Script(format!("unknown option '{}'", key)))
}

impl Prompter for ScriptedPrompter {
    fn text(
        &mut self,
        message: &str,
        _placeholder: &str,
        validator: Validator,
    ) -> Result<Answer<String>> {
        loop {
            match self.next(message)? {
                Step::Text(value) => match validator(&value) {
                    Ok(()) => return Ok(Answer::Value(value)),
                    Err(reason) => self.events.push(Event::Rejected(reason)),
                },
                Step::Cancel => return Ok(Answer::Cancelled),
                other => return mismatch("text", &other),
            }
        }
    }

    // Disabled entries are reachable here on purpose, so callers can prove
    // they refuse them.
    fn select<T>(&mut self, message: &str, options: &[CatalogEntry<T>]) -> Result<Answer<T>>
    where
        T: Copy + Eq + fmt::Debug + 'static,
    {
        match self.next(message)? {
            Step::Select(key) => Ok(Answer::Value(lookup(options, key)?)),
            Step::Cancel => Ok(Answer::Cancelled),
            other => mismatch("select", &other),
        }
    }

    fn multiselect<T>(
        &mut self,
        message: &str,
        options: &[CatalogEntry<T>],
    ) -> Result<Answer<Vec<T>>>
    where
        T: Copy + Eq + fmt::Debug + 'static,
    {
        match self.next(message)? {
            Step::Multi(keys) => keys
                .into_iter()
                .map(|k| lookup(options, k))
                .collect::<Result<Vec<_>>>()
                .map(Answer::Value),
            Step::Cancel => Ok(Answer::Cancelled),
            other => mismatch("multiselect", &other),
        }
    }

    fn confirm(&mut self, message: &str, _initial: bool) -> Result<Answer<bool>> {
        match self.next(message)? {
            Step::Confirm(yes) => Ok(Answer::Value(yes)),
            Step::Cancel => Ok(Answer::Cancelled),
            other => mismatch("confirm", &other),
        }
    }

    fn clear_lines(&mut self, count: usize) -> Result<()> {
        self.events.push(Event::Cleared(count));
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.events.push(Event::Warned(message.to_string()));
        Ok(())
    }
}
