/*!
# Argspec: Arguments
*/

use crate::{
	Action,
	ArgspecError,
	ArgValue,
	ParseError,
	Value,
	value::Capability,
};
use std::any::Any;



/// # Default Help: Version.
const VERSION_HELP: &str = "show program's version number and exit";



/// # Argument Names.
///
/// This trait lets [`Argument::new`] accept one name or several.
///
/// ## Examples
///
/// ```
/// use argspec::Argument;
///
/// let a = Argument::new("square");           // Positional.
/// let b = Argument::new("-v");               // Short optional.
/// let c = Argument::new(["-v", "--verbose"]); // Short and long.
/// let d = Argument::new(vec!["-o".to_owned(), "--output".to_owned()]);
///
/// assert_eq!(c.names(), &["-v", "--verbose"]);
/// ```
pub trait ArgNames {
	/// # Into Names.
	fn into_names(self) -> Vec<String>;
}

impl ArgNames for &str {
	#[inline]
	fn into_names(self) -> Vec<String> { vec![self.to_owned()] }
}

impl ArgNames for String {
	#[inline]
	fn into_names(self) -> Vec<String> { vec![self] }
}

impl ArgNames for &[&str] {
	#[inline]
	fn into_names(self) -> Vec<String> {
		self.iter().map(|s| (*s).to_owned()).collect()
	}
}

impl<const N: usize> ArgNames for [&str; N] {
	#[inline]
	fn into_names(self) -> Vec<String> {
		self.into_iter().map(str::to_owned).collect()
	}
}

impl ArgNames for Vec<&str> {
	#[inline]
	fn into_names(self) -> Vec<String> {
		self.into_iter().map(str::to_owned).collect()
	}
}

impl ArgNames for Vec<String> {
	#[inline]
	fn into_names(self) -> Vec<String> { self }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Number of Arguments.
///
/// This controls how many values an argument takes. Arguments with any
/// `Nargs` other than `ZeroOrOne` produce a `Vec` of their value type.
///
/// A plain count converts directly: `.nargs(3)`.
pub enum Nargs {
	/// # Exactly N.
	Exactly(usize),

	/// # Zero or One (`?`).
	ZeroOrOne,

	/// # Zero or More (`*`).
	ZeroOrMore,

	/// # One or More (`+`).
	OneOrMore,
}

impl From<usize> for Nargs {
	#[inline]
	fn from(src: usize) -> Self { Self::Exactly(src) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Mutually Exclusive Group.
///
/// An opaque group handle from
/// [`ArgumentParser::add_mutually_exclusive_group`](crate::ArgumentParser::add_mutually_exclusive_group).
/// At most one optional argument from any given group may be supplied.
pub struct Group(usize);

impl Group {
	#[must_use]
	/// # New.
	pub(crate) const fn new(id: usize) -> Self { Self(id) }
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Argument Kind.
pub(crate) enum Kind {
	/// # Positional.
	Positional,

	/// # Optional (Dash-Prefixed).
	Optional,
}



#[derive(Debug, Clone)]
/// # Argument Specification.
///
/// Describe an argument with the builder methods, then register it with
/// [`ArgumentParser::add_argument`](crate::ArgumentParser::add_argument).
///
/// If the first name starts with a dash, the argument is _optional_ and all
/// of its names must be valid keys: short keys are a dash and one ASCII
/// alphanumeric, long keys two dashes, an alphanumeric, and any number of
/// alphanumerics, `-`, and `_`. Otherwise the argument is _positional_, and
/// takes exactly one name.
///
/// Mistakes made while building, like calling [`Argument::required`] on a
/// positional, are reported when the argument is registered.
///
/// ## Examples
///
/// ```
/// use argspec::{Action, Argument, Nargs};
///
/// let verbose = Argument::new(["-v", "--verbose"])
///     .action(Action::StoreTrue)
///     .help("increase output verbosity");
///
/// let files = Argument::new("files")
///     .nargs(Nargs::OneOrMore)
///     .help("the file(s) to process");
///
/// let level = Argument::new("--level")
///     .value_type::<u8>()
///     .choices([1_u8, 2, 3])
///     .default_value(2_u8);
/// ```
pub struct Argument {
	/// # Names.
	names: Vec<String>,

	/// # Kind.
	kind: Kind,

	/// # Help Text.
	help: String,

	/// # Metavar Override.
	metavar: Option<String>,

	/// # Destination Override.
	dest: Option<String>,

	/// # Action.
	action: Action,

	/// # Const Value.
	constant: Value,

	/// # Default Value.
	default: Value,

	/// # Required?
	required: bool,

	/// # Choices.
	choices: Vec<Value>,

	/// # Nargs.
	nargs: Option<Nargs>,

	/// # Exclusion Group.
	group: Option<Group>,

	/// # Value Type Capabilities.
	capability: Capability,

	/// # Version Text.
	version: Option<String>,

	/// # Deferred Builder Error.
	error: Option<ArgspecError>,
}

impl Argument {
	#[must_use]
	/// # New.
	///
	/// Start a new argument with the given name(s). Values default to
	/// [`String`]; use [`Argument::value_type`] to change that.
	pub fn new<N: ArgNames>(names: N) -> Self {
		let names = names.into_names();
		let kind =
			if names.first().is_some_and(|n| n.starts_with('-')) { Kind::Optional }
			else { Kind::Positional };

		Self {
			names,
			kind,
			help: String::new(),
			metavar: None,
			dest: None,
			action: Action::Store,
			constant: Value::empty(),
			default: Value::empty(),
			required: false,
			choices: Vec::new(),
			nargs: None,
			group: None,
			capability: Capability::default(),
			version: None,
			error: None,
		}
	}

	#[must_use]
	/// # With Help Text.
	///
	/// `{prog}` is replaced with the program name when rendered.
	pub fn help<S: Into<String>>(mut self, help: S) -> Self {
		self.help = help.into();
		self
	}

	#[must_use]
	/// # With Metavar.
	///
	/// Override the placeholder shown for the argument's value in usage and
	/// help screens.
	pub fn metavar<S: Into<String>>(mut self, metavar: S) -> Self {
		self.metavar = Some(metavar.into());
		self
	}

	#[must_use]
	/// # With Destination.
	///
	/// Override the key the parsed value is stored under. Optional arguments
	/// only.
	///
	/// Several arguments may share a destination. The value comes from the
	/// first registered of those supplied on the command line, or if none
	/// were, the first registered overall.
	pub fn dest<S: Into<String>>(mut self, dest: S) -> Self {
		if self.kind == Kind::Positional { self.fail(ArgspecError::PositionalOption("dest")); }
		self.dest = Some(dest.into());
		self
	}

	#[must_use]
	/// # With Action.
	///
	/// Positional arguments only support [`Action::Store`] and
	/// [`Action::Append`].
	pub fn action(mut self, action: Action) -> Self {
		if self.kind == Kind::Positional && ! action.expects_argument() {
			self.fail(ArgspecError::PositionalOption(action.as_str()));
		}
		self.action = action;
		self
	}

	#[must_use]
	/// # With Const Value.
	///
	/// This is the value for [`Action::StoreConst`], and for
	/// [`Nargs::ZeroOrOne`] options given without a value. The latter must
	/// match the value type.
	pub fn constant<T: Any + Clone + std::fmt::Debug>(mut self, value: T) -> Self {
		self.constant = Value::new(value);
		self
	}

	#[must_use]
	/// # With Value Type.
	///
	/// Values are converted to `T` using its [`ArgValue`] implementation.
	pub fn value_type<T: ArgValue>(mut self) -> Self {
		self.capability = Capability::of::<T>();
		self
	}

	#[must_use]
	/// # With Default Value.
	///
	/// This is used when the argument is not supplied. Sequence-valued
	/// arguments should use a `Vec` of the value type, and counts an `i32`.
	/// Mismatches are reported when the argument is registered.
	pub fn default_value<T: Any + Clone + std::fmt::Debug>(mut self, value: T) -> Self {
		self.default = Value::new(value);
		self
	}

	#[must_use]
	/// # Required.
	///
	/// Mark an optional argument as required. Positional arguments are
	/// always required (unless their nargs allow zero values).
	pub fn required(mut self) -> Self {
		if self.kind == Kind::Positional { self.fail(ArgspecError::PositionalOption("required")); }
		self.required = true;
		self
	}

	#[must_use]
	/// # With Choices.
	///
	/// Restrict the accepted values. The choices must have the same type as
	/// the argument's values.
	pub fn choices<T, I>(mut self, choices: I) -> Self
	where T: ArgValue, I: IntoIterator<Item=T> {
		self.choices = choices.into_iter().map(Value::new).collect();
		self
	}

	#[must_use]
	/// # With Nargs.
	///
	/// Only the [`Action::Store`] action supports nargs.
	pub fn nargs<N: Into<Nargs>>(mut self, nargs: N) -> Self {
		let nargs = nargs.into();
		if nargs == Nargs::Exactly(0) {
			self.fail(ArgspecError::InvalidNargs(self.names.join("/")));
		}
		self.nargs = Some(nargs);
		self
	}

	#[must_use]
	/// # With Version Text.
	///
	/// This also sets the action to [`Action::Version`]. `{prog}` is replaced
	/// with the program name when rendered.
	pub fn version<S: Into<String>>(self, version: S) -> Self {
		let mut out = self.action(Action::Version);
		out.version = Some(version.into());
		out
	}

	#[must_use]
	/// # With Group.
	///
	/// Add the (optional) argument to a mutually exclusive group.
	pub fn group(mut self, group: Group) -> Self {
		if self.kind == Kind::Positional { self.fail(ArgspecError::PositionalOption("group")); }
		self.group = Some(group);
		self
	}

	/// # Record Builder Error.
	///
	/// Only the first one is kept.
	fn fail(&mut self, err: ArgspecError) {
		if self.error.is_none() { self.error = Some(err); }
	}
}

impl Argument {
	/// # Validate.
	///
	/// ## Errors
	///
	/// Returns the first builder error, or an error if the names are bad,
	/// the nargs don't suit the action, or the choices are the wrong type.
	pub(crate) fn validate(&self) -> Result<(), ArgspecError> {
		if let Some(err) = self.error.clone() { return Err(err); }

		match self.kind {
			Kind::Positional => match self.names.as_slice() {
				[] => return Err(ArgspecError::EmptyNames),
				[name] =>
					if name.is_empty() { return Err(ArgspecError::EmptyNames); },
				_ => return Err(ArgspecError::MixedNames(self.names.join("/"))),
			},
			Kind::Optional => for name in &self.names {
				if ! name.starts_with('-') {
					return Err(ArgspecError::MixedNames(name.clone()));
				}
				if ! valid_key(name.as_bytes()) {
					return Err(ArgspecError::InvalidName(name.clone()));
				}
			},
		}

		if self.nargs.is_some() && self.action != Action::Store {
			return Err(ArgspecError::InvalidNargs(self.names.join("/")));
		}

		if let Some(c) = self.choices.iter().find(|c| ! self.capability.accepts(c)) {
			return Err(ArgspecError::WrongType {
				requested: self.capability.name(),
				held: c.type_name(),
			});
		}

		self.validate_values()
	}

	/// # Validate Default and Const Values.
	///
	/// Defaults must match what the action produces: a `Vec` of the value
	/// type for sequences, an `i32` for counts, or the value type itself.
	/// The const of a `ZeroOrOne` store must be the value type. Store-const
	/// values are free-form.
	fn validate_values(&self) -> Result<(), ArgspecError> {
		let cap = self.capability;
		let wrong = |requested: &'static str, v: &Value| -> Result<(), ArgspecError> {
			Err(ArgspecError::WrongType { requested, held: v.type_name() })
		};

		let d = &self.default;
		if d.is_some() {
			match self.action {
				Action::Append => if ! cap.accepts_seq(d) { return wrong(cap.seq_name(), d); },
				Action::Store => match self.nargs {
					None | Some(Nargs::ZeroOrOne) =>
						if ! cap.accepts(d) { return wrong(cap.name(), d); },
					Some(_) => if ! cap.accepts_seq(d) { return wrong(cap.seq_name(), d); },
				},
				Action::Count => if ! d.is::<i32>() { return wrong("i32", d); },
				_ => {},
			}
		}

		let c = &self.constant;
		if
			c.is_some() &&
			self.action == Action::Store &&
			self.nargs == Some(Nargs::ZeroOrOne) &&
			! cap.accepts(c)
		{
			return wrong(cap.name(), c);
		}

		Ok(())
	}
}

impl Argument {
	#[must_use]
	/// # Names.
	pub fn names(&self) -> &[String] { &self.names }

	#[must_use]
	/// # Positional?
	pub const fn is_positional(&self) -> bool { matches!(self.kind, Kind::Positional) }

	#[must_use]
	/// # Action.
	pub const fn action_kind(&self) -> Action { self.action }

	#[must_use]
	/// # Nargs.
	pub const fn nargs_kind(&self) -> Option<Nargs> { self.nargs }

	#[must_use]
	/// # Group.
	pub const fn group_id(&self) -> Option<Group> { self.group }

	#[must_use]
	/// # Required?
	///
	/// Positionals are required unless their nargs allow zero values.
	pub fn is_required(&self) -> bool {
		match self.kind {
			Kind::Positional => ! matches!(self.nargs, Some(Nargs::ZeroOrOne | Nargs::ZeroOrMore)),
			Kind::Optional => self.required,
		}
	}

	#[must_use]
	/// # Help Text.
	///
	/// Version arguments without help text get a stock description.
	pub fn help_text(&self) -> &str {
		if self.help.is_empty() && self.action == Action::Version { VERSION_HELP }
		else { self.help.as_str() }
	}

	#[must_use]
	/// # Destination Key.
	///
	/// Unless overridden, optionals use their first long name, or failing
	/// that their first short name, minus the dashes and with any inner
	/// dashes swapped for underscores: `--dry-run` becomes `dry_run`.
	/// Positionals use their name as-is.
	pub fn dest_name(&self) -> String {
		if let Some(dest) = &self.dest { return dest.clone(); }
		match self.kind {
			Kind::Positional => self.names.first().cloned().unwrap_or_default(),
			Kind::Optional => self.names.iter()
				.find_map(|n| n.strip_prefix("--"))
				.or_else(|| self.names.first().map(|n| n.trim_start_matches('-')))
				.unwrap_or_default()
				.replace('-', "_"),
		}
	}

	#[must_use]
	/// # Metavar.
	///
	/// Unless overridden, positionals use their name, and optionals their
	/// destination key in uppercase.
	pub fn metavar_name(&self) -> String {
		if let Some(m) = &self.metavar { return m.clone(); }
		match self.kind {
			Kind::Positional => self.dest_name(),
			Kind::Optional => self.dest_name().to_uppercase(),
		}
	}

	#[must_use]
	/// # Joined Names.
	///
	/// E.g. `-v/--verbose`.
	pub fn joined_names(&self) -> String { self.names.join("/") }
}

impl Argument {
	#[must_use]
	/// # Const Value.
	pub(crate) const fn get_const(&self) -> &Value { &self.constant }

	#[must_use]
	/// # Default Value.
	pub(crate) const fn get_default(&self) -> &Value { &self.default }

	#[must_use]
	/// # Capabilities.
	pub(crate) const fn capability(&self) -> Capability { self.capability }

	#[must_use]
	/// # Version Text.
	pub(crate) fn version_text(&self) -> Option<&str> { self.version.as_deref() }

	#[must_use]
	/// # Has Choices?
	pub(crate) fn has_choices(&self) -> bool { ! self.choices.is_empty() }

	#[must_use]
	/// # Joined Choices.
	pub(crate) fn joined_choices(&self, sep: &str) -> String {
		self.choices.iter()
			.map(|c| self.capability.render(c))
			.collect::<Vec<_>>()
			.join(sep)
	}

	#[must_use]
	/// # Name for Errors.
	///
	/// Optionals use all their names, positionals their destination.
	pub(crate) fn error_name(&self) -> String {
		match self.kind {
			Kind::Positional => self.dest_name(),
			Kind::Optional => self.joined_names(),
		}
	}

	#[must_use]
	/// # Long Name Match?
	///
	/// Returns the inline value (or an empty string) when `token` is `name`
	/// or `name=value`.
	pub(crate) fn long_match<'a>(name: &str, token: &'a str) -> Option<Option<&'a str>> {
		let rest = token.strip_prefix(name)?;
		if rest.is_empty() { Some(None) }
		else { rest.strip_prefix('=').map(Some) }
	}

	/// # Convert.
	///
	/// Convert the raw text to the argument's value type, checking it
	/// against the choices, if any.
	///
	/// ## Errors
	///
	/// Returns an error if the text can't be converted or isn't a valid
	/// choice.
	pub(crate) fn convert(&self, raw: &str) -> Result<Value, ParseError> {
		let value = self.capability.from_text(raw).ok_or_else(|| ParseError::InvalidValue {
			name: self.error_name(),
			value: raw.to_owned(),
		})?;

		if
			self.has_choices() &&
			! self.choices.iter().any(|c| self.capability.equal(c, &value))
		{
			return Err(ParseError::InvalidChoice {
				name: self.error_name(),
				value: self.capability.render(&value),
				choices: self.joined_choices(", "),
			});
		}

		tracing::trace!(dest = %self.dest_name(), value = %self.capability.to_text(&value), "converted");
		Ok(value)
	}
}



/// # Valid Key?
///
/// Short keys are a dash and an ASCII alphanumeric; long keys are two dashes,
/// an ASCII alphanumeric, and any number of alphanumerics, `-`, and `_`.
const fn valid_key(key: &[u8]) -> bool {
	match key {
		[b'-', b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9'] => true,
		[b'-', b'-', b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] => valid_suffix(rest),
		_ => false,
	}
}

/// # Valid Key Suffix?
const fn valid_suffix(mut bytes: &[u8]) -> bool {
	while let [b'-' | b'_' | b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9', rest @ ..] = bytes {
		bytes = rest;
	}
	bytes.is_empty()
}
