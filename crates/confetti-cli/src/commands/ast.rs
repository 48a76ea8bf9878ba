//! Show the directive tree of a document.

use confetti_lib::TreePrinter;

use super::input::{InputArgs, Prepared};

pub struct AstArgs {
    pub input: InputArgs,
    pub json: bool,
    pub max_depth: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let prepared = Prepared::load(&args.input, args.color);
    let document = prepared.parse(args.max_depth);

    if args.json {
        match serde_json::to_string_pretty(&document) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize document: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", TreePrinter::new(&document).colored(args.color).dump());
}
