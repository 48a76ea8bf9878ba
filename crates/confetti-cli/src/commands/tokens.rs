//! Show the token sequence of a document.

use confetti_lib::lexer::dump_tokens;

use super::input::{InputArgs, Prepared};

pub struct TokensArgs {
    pub input: InputArgs,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let prepared = Prepared::load(&args.input, args.color);
    let tokens = prepared.tokenize();
    print!("{}", dump_tokens(prepared.text(), &tokens, args.raw));
}
