//! Contains the command line interface of the Monkey front end.

use std::{fmt::Display, fs::File, path::PathBuf, process::ExitCode};

pub use clap::Parser;
use monkey_base::{
    diagnostic::{Counter, Handler},
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use monkey_lexical::token_stream::{SpannedToken, TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "monkey",
    about = "Tokenizes Monkey programming language source files.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to tokenize.
    pub file: PathBuf,

    /// Prints out every token of the file with its location.
    #[clap(long = "dump-tokens")]
    pub dump_tokens: bool,

    /// Exits successfully even if the file contains illegal characters.
    #[clap(long = "allow-illegal")]
    pub allow_illegal: bool,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Default)]
struct Printer {
    counter: Counter,
}

impl Printer {
    /// Gets the number of messages printed so far.
    fn printed(&self) -> usize { self.counter.count() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.counter.receive(());
    }
}

fn load(argument: &Argument) -> Result<std::sync::Arc<SourceFile>, source_file::Error> {
    let file = File::open(&argument.file)?;
    SourceFile::load(file, argument.file.clone())
}

/// The result of tokenizing the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Outcome {
    Clean,
    IllegalCharacters(usize),
    LoadFailure,
}

impl Outcome {
    /// Checks whether the program should exit successfully with this outcome.
    fn is_success(self, allow_illegal: bool) -> bool {
        match self {
            Self::Clean => true,
            Self::IllegalCharacters(_) => allow_illegal,
            Self::LoadFailure => false,
        }
    }
}

/// Formats a token as printed by `--dump-tokens`: its starting `line:column`, or `end` for a
/// token at the end of the file, followed by the token.
fn dump_line(spanned_token: &SpannedToken) -> String {
    let location = spanned_token
        .span()
        .start_location()
        .map_or_else(|| "end".to_string(), |location| location.to_string());

    format!("{location}\t{}", spanned_token.token())
}

fn execute(argument: &Argument) -> Outcome {
    let source_file = match load(argument) {
        Ok(source_file) => source_file,
        Err(source_file::Error::IoError(error)) => {
            let msg = Message::new(
                Severity::Error,
                format!("{}: {error}", argument.file.display()),
            );

            eprintln!("{msg}");
            return Outcome::LoadFailure;
        }
    };

    let printer = Printer::default();
    let token_stream = TokenStream::tokenize(&source_file, &printer);

    if argument.dump_tokens {
        for spanned_token in token_stream.iter() {
            println!("{}", dump_line(spanned_token));
        }
    }

    match printer.printed() {
        0 => Outcome::Clean,
        count => {
            let msg = Message::new(
                Severity::Error,
                format!("found {count} illegal character(s)"),
            );

            eprintln!("{msg}");
            Outcome::IllegalCharacters(count)
        }
    }
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    if execute(argument).is_success(argument.allow_illegal) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
