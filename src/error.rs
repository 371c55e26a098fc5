/*!
# Argspec: Errors

There are two kinds of error here.

[`ParseError`] covers bad user input discovered while parsing: invalid values,
wrong token counts, missing arguments, and so on. These are expected during
normal operation, and either get printed by the parser (see
[`FLAG_ERRORS`](crate::FLAG_ERRORS)) or handed back to the caller.

[`ArgspecError`] covers mistakes in the calling code itself, such as a bad
argument declaration or a lookup with the wrong type. These should be
treated as bugs.
*/

use std::{
	error::Error,
	ffi::OsString,
	fmt,
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse (Usage) Error.
///
/// Each variant renders to the exact message printed for the user. Argument
/// names are pre-joined, e.g. `-o/--output` for optionals, or the destination
/// key for positionals.
pub enum ParseError {
	/// # Value Not in Choice Set.
	InvalidChoice {
		/// # Argument Name(s).
		name: String,
		/// # Rendered Value.
		value: String,
		/// # Rendered Choices (comma-joined).
		choices: String,
	},

	/// # Value Could Not Be Converted.
	InvalidValue {
		/// # Argument Name(s).
		name: String,
		/// # Raw Text.
		value: String,
	},

	/// # Missing Single Value.
	ExpectedOne(String),

	/// # Wrong Value Count.
	ExpectedN(String, usize),

	/// # Missing Values.
	ExpectedAtLeastOne(String),

	/// # Value Passed to a Valueless Action.
	IgnoredExplicit {
		/// # Argument Name(s).
		name: String,
		/// # The Stray Value.
		value: String,
	},

	/// # Leftover Tokens.
	Unrecognised(Vec<String>),

	/// # Mutually Exclusive Conflict.
	NotAllowedWith(String, String),

	/// # Required Arguments Not Supplied.
	MissingRequired(Vec<String>),

	/// # Invalid UTF-8.
	///
	/// Only [`ArgumentParser::parse_env`](crate::ArgumentParser::parse_env)
	/// can return this one.
	InvalidUtf8(OsString),
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidChoice { name, value, choices } => write!(
				f,
				"argument {name}: invalid choice: {value} (choose from {choices})",
			),
			Self::InvalidValue { name, value } =>
				write!(f, "argument {name}: invalid value: '{value}'"),
			Self::ExpectedOne(name) =>
				write!(f, "argument {name}: expected one argument"),
			Self::ExpectedN(name, n) => write!(
				f,
				"argument {name}: expected {n} argument{}",
				if *n == 1 { "" } else { "s" },
			),
			Self::ExpectedAtLeastOne(name) =>
				write!(f, "argument {name}: expected at least one argument"),
			Self::IgnoredExplicit { name, value } =>
				write!(f, "argument {name}: ignored explicit argument '{value}'"),
			Self::Unrecognised(tokens) =>
				write!(f, "unrecognised arguments: {}", tokens.join(" ")),
			Self::NotAllowedWith(a, b) =>
				write!(f, "argument {a}: not allowed with argument {b}"),
			Self::MissingRequired(names) => write!(
				f,
				"the following arguments are required: {}",
				names.join(" "),
			),
			Self::InvalidUtf8(raw) => write!(f, "invalid UTF-8: {raw:?}"),
		}
	}
}

impl ParseError {
	#[must_use]
	/// # Exit Code.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, static description of the error kind. Use the
	/// `Display` implementation for the full message.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidChoice { .. } => "Invalid choice.",
			Self::InvalidValue { .. } => "Invalid value.",
			Self::ExpectedOne(_) => "Expected one argument.",
			Self::ExpectedN(..) => "Wrong number of arguments.",
			Self::ExpectedAtLeastOne(_) => "Expected at least one argument.",
			Self::IgnoredExplicit { .. } => "Ignored explicit argument.",
			Self::Unrecognised(_) => "Unrecognised arguments.",
			Self::NotAllowedWith(..) => "Mutually exclusive arguments.",
			Self::MissingRequired(_) => "Missing required arguments.",
			Self::InvalidUtf8(_) => "Invalid UTF-8.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Programmer Error.
///
/// These indicate a defect in the calling code rather than bad input, and
/// are raised at the point of misuse.
pub enum ArgspecError {
	/// # Duplicate Name.
	DuplicateName(String),

	/// # No Names.
	EmptyNames,

	/// # Invalid Name.
	InvalidName(String),

	/// # Invalid Nargs.
	///
	/// A count of zero, or nargs on an action other than `store`.
	InvalidNargs(String),

	/// # Positional/Optional Names Mixed.
	MixedNames(String),

	/// # Missing Value.
	///
	/// The destination exists, but nothing was assigned to it.
	NoValue(String),

	/// # Undeclared Destination.
	NoSuchArgument(String),

	/// # Optional-Only Setting on a Positional.
	PositionalOption(&'static str),

	/// # Wrong Type.
	WrongType {
		/// # Requested Type.
		requested: &'static str,
		/// # Held Type.
		held: &'static str,
	},
}

impl Error for ArgspecError {}

impl fmt::Display for ArgspecError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateName(s) => write!(f, "duplicate argument name: '{s}'"),
			Self::EmptyNames => f.write_str("arguments need at least one name"),
			Self::InvalidName(s) => write!(f, "invalid argument name: '{s}'"),
			Self::InvalidNargs(s) => write!(f, "invalid nargs for argument: '{s}'"),
			Self::MixedNames(s) =>
				write!(f, "positional arguments take exactly one name: '{s}'"),
			Self::NoValue(s) => write!(f, "no value for argument: '{s}'"),
			Self::NoSuchArgument(s) => write!(f, "no such argument: '{s}'"),
			Self::PositionalOption(s) =>
				write!(f, "'{s}' is an invalid argument for positionals"),
			Self::WrongType { requested, held } => write!(
				f,
				"wrong type: requested '{requested}' for argument of type '{held}'",
			),
		}
	}
}

impl ArgspecError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateName(_) => "Duplicate name.",
			Self::EmptyNames => "Missing name.",
			Self::InvalidName(_) => "Invalid name.",
			Self::InvalidNargs(_) => "Invalid nargs.",
			Self::MixedNames(_) => "Mixed names.",
			Self::NoValue(_) => "No value.",
			Self::NoSuchArgument(_) => "No such argument.",
			Self::PositionalOption(_) => "Invalid positional option.",
			Self::WrongType { .. } => "Wrong type.",
		}
	}
}
