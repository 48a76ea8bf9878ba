//! Shared argument builders for CLI commands.
//!
//! Every subcommand reads a document the same way, so the input and
//! extension flags are defined once here and composed in `commands.rs`.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Document file, or `-` for stdin (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("input_text")
        .help("Document file, or '-' to read stdin")
}

/// Inline document text (-s/--source).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline document text")
}

/// Enable a syntax extension (--ext, repeatable).
pub fn ext_arg() -> Arg {
    Arg::new("ext")
        .long("ext")
        .value_name("NAME")
        .action(ArgAction::Append)
        .value_parser([
            "c_style_comments",
            "expression_arguments",
            "punctuator_arguments",
        ])
        .help("Enable a syntax extension")
}

/// Punctuator literal (--punctuator, repeatable).
pub fn punctuator_arg() -> Arg {
    Arg::new("punctuator")
        .long("punctuator")
        .value_name("LIT")
        .action(ArgAction::Append)
        .help("Lex LIT as a standalone argument (enables punctuator_arguments)")
}

/// Maximum block nesting (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum block nesting depth [default: 256]")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Print JSON instead of a tree (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the directive tree as JSON")
}

/// Include trivia tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include whitespace, newlines, comments and markers")
}
