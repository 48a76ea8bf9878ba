//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but keep the raw color choice
//! - `from_matches()` extractors pull the fields each command uses
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::fmt::FmtArgs;
use crate::commands::input::InputArgs;
use crate::commands::tokens::TokensArgs;

pub struct InputParams {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub extensions: Vec<String>,
    pub punctuators: Vec<String>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m.get_one::<PathBuf>("input_path").cloned(),
            text: m.get_one::<String>("input_text").cloned(),
            extensions: get_all(m, "ext"),
            punctuators: get_all(m, "punctuator"),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            path: p.path,
            text: p.text,
            extensions: p.extensions,
            punctuators: p.punctuators,
        }
    }
}

pub struct AstParams {
    pub input: InputParams,
    pub json: bool,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            json: m.get_flag("json"),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.json,
            max_depth: p.max_depth,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            max_depth: p.max_depth,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
    pub raw: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            raw: m.get_flag("raw"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
            raw: p.raw,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FmtParams {
    pub input: InputParams,
    pub max_depth: Option<u32>,
    pub color: ColorChoice,
}

impl FmtParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            max_depth: m.get_one::<u32>("max_depth").copied(),
            color: parse_color(m),
        }
    }
}

impl From<FmtParams> for FmtArgs {
    fn from(p: FmtParams) -> Self {
        Self {
            input: p.input.into(),
            max_depth: p.max_depth,
            color: p.color.should_colorize(),
        }
    }
}

fn get_all(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
