/*!
# Argspec

[![license](https://img.shields.io/badge/license-wtfpl-ff1493?style=flat-square)](https://en.wikipedia.org/wiki/WTFPL)

This crate provides a declarative CLI argument parser in the style of Python's
`argparse`: describe your positional and optional arguments up front, hand
over the raw argument list, and get back a validated, typed [`Parameters`]
set (or a precise error message).

It handles the usual ordering ambiguity: options before, after, or between
positionals; clustered short flags like `-abc`; inline values like `-ofile`,
`--output=file`; `--` to end option parsing; and negative numbers that merely
look like flags.



## Features

* Typed values via the [`ArgValue`] trait, implemented for all the primitive
  numbers, `bool`, `char`, [`String`], and [`PathBuf`](std::path::PathBuf), and
  easily implemented for your own types.
* Actions: store, store true/false/const, count, append, help, and version.
* Nargs: exactly N, zero-or-one, zero-or-more, and one-or-more.
* Choices, defaults, const values, required optionals, and mutually exclusive
  groups.
* Generated usage and help screens, with `{prog}` substitution.

Debug and trace events are emitted through [`tracing`](https://crates.io/crates/tracing);
install a subscriber if you want to see them.



## Example

```
use argspec::{Action, Argument, ArgumentParser, FLAG_NONE};

let mut parser = ArgumentParser::new()
    .with_prog("power")
    .with_description("calculate X to the power of Y")
    .with_handle(FLAG_NONE); // Return errors instead of exiting.

let group = parser.add_mutually_exclusive_group();
parser
    .add_argument(
        Argument::new(["-v", "--verbose"]).action(Action::StoreTrue).group(group)
    ).unwrap()
    .add_argument(
        Argument::new(["-q", "--quiet"]).action(Action::StoreTrue).group(group)
    ).unwrap()
    .add_argument(
        Argument::new("x").value_type::<i32>().help("the base")
    ).unwrap()
    .add_argument(
        Argument::new("y").value_type::<i32>().help("the exponent")
    ).unwrap();

let params = parser.parse_args(["2", "-v", "10"]).unwrap();
assert_eq!(params.get_value::<i32>("x"), Ok(2));
assert_eq!(params.get_value::<i32>("y"), Ok(10));
assert_eq!(params.get_value::<bool>("verbose"), Ok(true));
assert_eq!(params.get_value::<bool>("quiet"), Ok(false));

let err = parser.parse_args(["-vq", "2", "10"]).unwrap_err();
assert_eq!(
    err.to_string(),
    "argument -q/--quiet: not allowed with argument -v/--verbose",
);

assert_eq!(
    parser.format_usage(),
    "usage: power [-h] [-v | -q] x y",
);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod action;
mod arg;
mod error;
mod format;
mod matcher;
mod params;
mod parser;
mod token;
mod validate;
mod value;

pub use action::Action;
pub use arg::{
	ArgNames,
	Argument,
	Group,
	Nargs,
};
pub use error::{
	ArgspecError,
	ParseError,
};
pub use params::Parameters;
pub use parser::{
	ArgumentParser,
	FLAG_ALL,
	FLAG_ERRORS,
	FLAG_ERRORS_AND_HELP,
	FLAG_HELP,
	FLAG_NONE,
	FLAG_VERSION,
	Outcome,
};
pub use value::{
	ArgValue,
	Value,
};
