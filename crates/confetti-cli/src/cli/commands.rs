//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input, extension and color flags shared by every subcommand.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(input_text_arg())
        .arg(ext_arg())
        .arg(punctuator_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("confetti")
        .about("Inspect, validate and format Confetti documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(fmt_command())
}

pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the directive tree of a document")
        .override_usage(
            "\
  confetti ast <FILE>
  confetti ast -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  confetti ast app.conf                      # directive tree
  confetti ast app.conf --json               # as JSON
  confetti ast -s 'a { b }'                  # inline document
  confetti ast app.conf --ext c_style_comments"#,
        )
        .arg(json_arg())
        .arg(max_depth_arg());

    with_input_args(cmd)
}

/// Silent on success, like `cargo check`.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a document")
        .override_usage(
            "\
  confetti check <FILE>
  confetti check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  confetti check app.conf                    # validate a file
  cat app.conf | confetti check -            # validate stdin"#,
        )
        .arg(max_depth_arg());

    with_input_args(cmd)
}

pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the tokens of a document")
        .override_usage(
            "\
  confetti tokens <FILE> [--raw]
  confetti tokens -s <TEXT> [--raw]",
        )
        .after_help(
            r#"EXAMPLES:
  confetti tokens app.conf                   # significant tokens
  confetti tokens app.conf --raw             # every token
  confetti tokens -s 'x => y' --punctuator '=>'"#,
        )
        .arg(raw_arg());

    with_input_args(cmd)
}

pub fn fmt_command() -> Command {
    let cmd = Command::new("fmt")
        .about("Print a document in canonical form")
        .override_usage(
            "\
  confetti fmt <FILE>
  confetti fmt -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  confetti fmt app.conf                      # re-serialize to stdout"#,
        )
        .arg(max_depth_arg());

    with_input_args(cmd)
}
