//! Print a document in canonical form.
//!
//! Comments and original spacing are not preserved; the output parses back
//! to an equal directive tree.

use super::input::{InputArgs, Prepared};

pub struct FmtArgs {
    pub input: InputArgs,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: FmtArgs) {
    let prepared = Prepared::load(&args.input, args.color);
    let document = prepared.parse(args.max_depth);
    print!("{}", document.to_source());
}
