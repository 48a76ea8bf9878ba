//! Shared input handling: loading, extension setup, and error reporting.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use confetti_lib::{Document, DocumentBuilder, Error, Extensions, Token, lexer};

pub struct InputArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub extensions: Vec<String>,
    pub punctuators: Vec<String>,
}

/// Raw document bytes and the name used in diagnostics.
pub struct Input {
    pub name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input is required: use a positional file, '-' for stdin, or -s/--source")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("failed to read '{path}': {source}")]
    File { path: String, source: io::Error },
}

pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, InputError> {
    if let Some(text) = text {
        return Ok(Input {
            name: None,
            bytes: text.as_bytes().to_vec(),
        });
    }

    let Some(path) = path else {
        return Err(InputError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(InputError::Stdin)?;
        return Ok(Input {
            name: Some("<stdin>".to_string()),
            bytes,
        });
    }

    let bytes = fs::read(path).map_err(|source| InputError::File {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Input {
        name: Some(path.display().to_string()),
        bytes,
    })
}

/// Builds the extension set from `--ext` names and `--punctuator` literals.
///
/// Any punctuator enables `punctuator_arguments` with the literals in order.
pub fn build_extensions(names: &[String], punctuators: &[String]) -> Extensions {
    let mut extensions = Extensions::new();
    for name in names {
        extensions.insert(name.as_str(), None);
    }
    if !punctuators.is_empty() {
        extensions = extensions.with_punctuators(punctuators);
    }
    extensions
}

/// A loaded document ready for tokenizing or parsing.
pub struct Prepared {
    pub input: Input,
    pub extensions: Extensions,
    pub color: bool,
}

impl Prepared {
    /// Loads the input; exits with a message if it cannot be read.
    pub fn load(args: &InputArgs, color: bool) -> Self {
        let input = match load_input(args.path.as_deref(), args.text.as_deref()) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        };
        Self {
            input,
            extensions: build_extensions(&args.extensions, &args.punctuators),
            color,
        }
    }

    /// Validated UTF-8 text of the input.
    pub fn text(&self) -> &str {
        match lexer::decode(&self.input.bytes) {
            Ok(text) => text,
            Err(e) => self.fail(&e, None),
        }
    }

    pub fn tokenize(&self) -> Vec<Token> {
        let source = self.text();
        match lexer::tokenize(source, &self.extensions) {
            Ok(tokens) => tokens,
            Err(e) => self.fail(&e, Some(source)),
        }
    }

    pub fn parse(&self, max_depth: Option<u32>) -> Document {
        let source = self.text();
        let mut builder = DocumentBuilder::new(source).with_extensions(self.extensions.clone());
        if let Some(limit) = max_depth {
            builder = builder.with_recursion_limit(limit);
        }
        match builder.parse() {
            Ok(document) => document,
            Err(e) => self.fail(&e, Some(source)),
        }
    }

    /// Renders `error` on stderr and exits with status 1.
    pub fn fail(&self, error: &Error, source: Option<&str>) -> ! {
        let mut printer = error.printer().colored(self.color);
        if let Some(source) = source {
            printer = printer.source(source);
        }
        if let Some(name) = &self.input.name {
            printer = printer.path(name);
        }
        eprintln!("{}", printer.render());
        std::process::exit(1)
    }
}
