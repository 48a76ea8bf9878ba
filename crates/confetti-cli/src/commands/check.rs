use super::input::{InputArgs, Prepared};

pub struct CheckArgs {
    pub input: InputArgs,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let prepared = Prepared::load(&args.input, args.color);
    prepared.parse(args.max_depth);

    // Silent on success (like cargo check)
}
