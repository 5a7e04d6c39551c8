use std::{cell::Cell, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use sift_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_text::SourceText,
};
use sift_lexical::{token_stream::TokenStream, vocabulary::Vocabulary};
use sift_oracle::{CommandOracle, SyntaxOracle, Verdict};
use sift_validate::{diagnostic::Diagnostic, validator::Validator};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "sift",
    about = "A lexical analyzer and naive syntax checker for a small imperative language."
)]
pub struct Argument {
    /// The input file to check.
    pub file: PathBuf,

    /// Prints out the raw token stream instead of validating it.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// An external syntax oracle command to consult on the same text.
    ///
    /// The command is split on whitespace; the source text is fed to it on standard input, and
    /// a zero exit status is read as "no syntax errors".
    #[clap(long = "oracle")]
    pub oracle: Option<String>,
}

/// A struct that implements [`Handler`] by printing every received diagnostic to the standard
/// output stream, remembering whether any of them was an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    errored: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            errored: Cell::new(false),
        }
    }

    fn has_errored(&self) -> bool { self.errored.get() }
}

impl Handler<Diagnostic> for Printer {
    fn receive(&self, diagnostic: Diagnostic) {
        println!("{diagnostic}");

        if diagnostic.severity() == Severity::Error {
            self.errored.set(true);
        }
    }
}

/// Runs the checker with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let source_text = match SourceText::load(&argument.file) {
        Ok(source_text) => source_text,
        Err(error) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let vocabulary = Vocabulary::default();

    // token stream
    let token_stream = TokenStream::tokenize(&source_text, &vocabulary);

    if argument.dump_tokens {
        for token in token_stream.iter() {
            println!("{}", token.str());
        }

        return ExitCode::SUCCESS;
    }

    // validation
    let printer = Printer::new();
    let validator = Validator::new(vocabulary);
    validator.validate(&token_stream, &printer);

    let mut failed = printer.has_errored();

    // secondary check against the external oracle
    if let Some(command) = &argument.oracle {
        let mut parts = command.split_whitespace();

        let Some(program) = parts.next() else {
            let msg = Message::new(Severity::Error, "the oracle command is empty".to_string());

            eprintln!("{msg}");
            return ExitCode::FAILURE;
        };

        let oracle = CommandOracle::new(program).args(parts);

        match oracle.check(source_text.content()) {
            Verdict::Accepted => {
                let msg = Message::new(Severity::Info, "oracle: no syntax errors found");
                println!("{msg}");
            }
            Verdict::Rejected { message } => {
                let msg = Message::new(Severity::Error, format!("oracle: {message}"));
                println!("{msg}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
