//! This crate defines the seam to the external syntax oracle: a fully-formed checker for the
//! source language, consulted as an opaque pass/fail service on the raw source text.
//!
//! The oracle is entirely unrelated to the tokenizer/validator pipeline; the core never inspects
//! how a verdict was produced. Its failures are surfaced as data, never as faults.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

use std::{
    io::Write,
    process::{Command, Stdio},
};

use enum_as_inner::EnumAsInner;
use getset::Getters;

/// Is the two-shape result of consulting a syntax oracle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Verdict {
    /// The oracle found no syntax errors in the source text.
    Accepted,

    /// The oracle rejected the source text.
    Rejected {
        /// The oracle's own description of what is wrong.
        message: String,
    },
}

/// Represents an external syntax checker consulted on the raw source text.
pub trait SyntaxOracle {
    /// Checks the given source text, returning the oracle's [`Verdict`].
    ///
    /// Implementations must not fail: anything preventing a real verdict is reported as a
    /// [`Verdict::Rejected`] carrying a description.
    fn check(&self, source: &str) -> Verdict;
}

/// Is a [`SyntaxOracle`] backed by a plain function, mainly a seam for tests.
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F> {
    function: F,
}

impl<F> FnOracle<F>
where
    F: Fn(&str) -> Verdict,
{
    /// Creates a new [`FnOracle`] from the given function.
    pub fn new(function: F) -> Self { Self { function } }
}

impl<F> SyntaxOracle for FnOracle<F>
where
    F: Fn(&str) -> Verdict,
{
    fn check(&self, source: &str) -> Verdict { (self.function)(source) }
}

/// Is a [`SyntaxOracle`] backed by an external command.
///
/// The source text is fed to the command on its standard input; exit status zero means the
/// source was accepted, any other status means it was rejected with the command's standard
/// error as the message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters)]
pub struct CommandOracle {
    /// Gets the program the oracle invokes.
    #[get = "pub"]
    program: String,

    /// Gets the arguments passed to the program.
    #[get = "pub"]
    arguments: Vec<String>,
}

impl CommandOracle {
    /// Creates a new [`CommandOracle`] invoking the given program.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            arguments: Vec::new(),
        }
    }

    /// Adds an argument to pass to the program.
    #[must_use]
    pub fn arg(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Adds multiple arguments to pass to the program.
    #[must_use]
    pub fn args(mut self, arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    fn invoke(&self, source: &str) -> std::io::Result<Verdict> {
        let mut child = Command::new(&self.program)
            .args(&self.arguments)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // the command may exit without draining its input; a broken pipe here is not a verdict
        if let Some(mut stdin) = child.stdin.take() {
            let _ = stdin.write_all(source.as_bytes());
        }

        let output = child.wait_with_output()?;

        if output.status.success() {
            return Ok(Verdict::Accepted);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let message = stderr.trim();

        Ok(Verdict::Rejected {
            message: if message.is_empty() {
                format!("oracle exited with {}", output.status)
            } else {
                message.to_string()
            },
        })
    }
}

impl SyntaxOracle for CommandOracle {
    fn check(&self, source: &str) -> Verdict {
        self.invoke(source).unwrap_or_else(|error| Verdict::Rejected {
            message: format!("failed to invoke `{}`: {error}", self.program),
        })
    }
}

#[cfg(test)]
mod tests;
