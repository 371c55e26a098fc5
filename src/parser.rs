/*!
# Argspec: Argument Parser
*/

use crate::{
	Action,
	action::{
		Flow,
		Slot,
	},
	Argument,
	ArgspecError,
	format::Formatter,
	Group,
	matcher,
	Parameters,
	ParseError,
	token::Tokens,
	validate,
};
use std::borrow::Cow;



/// # Flag: Handle Nothing.
///
/// Errors are returned to the caller, and help/version requests produce
/// [`Parameters`] of defaults.
pub const FLAG_NONE: u8 = 0b0000;

/// # Flag: Handle Errors.
///
/// Parse errors are printed along with the help screen, and the program
/// exits with status `1`.
pub const FLAG_ERRORS: u8 = 0b0001;

/// # Flag: Handle Help.
///
/// Help requests print the help screen and exit with status `0`.
pub const FLAG_HELP: u8 = 0b0010;

/// # Flag: Handle Version.
///
/// Version requests print the version and exit with status `0`.
pub const FLAG_VERSION: u8 = 0b0100;

/// # Flag: Handle Errors and Help.
pub const FLAG_ERRORS_AND_HELP: u8 = FLAG_ERRORS | FLAG_HELP;

/// # Flag: Handle Everything.
///
/// This is the default.
pub const FLAG_ALL: u8 = FLAG_ERRORS | FLAG_HELP | FLAG_VERSION;

/// # Default Help: Help.
const HELP_HELP: &str = "show this help message and exit";



#[derive(Debug, Clone)]
/// # Parse Outcome.
///
/// This is returned by [`ArgumentParser::try_parse_args`], which never prints
/// or exits.
///
/// Help and version requests short-circuit parsing, so their parameters
/// hold only the defaults (and the `true` of the argument that triggered
/// them).
pub enum Outcome {
	/// # Parsed.
	Parsed(Parameters),

	/// # Help Requested.
	HelpRequested(Parameters),

	/// # Version Requested.
	VersionRequested(Parameters),
}

impl Outcome {
	#[must_use]
	/// # Into Parameters.
	pub fn into_parameters(self) -> Parameters {
		match self {
			Self::Parsed(p) | Self::HelpRequested(p) | Self::VersionRequested(p) => p,
		}
	}

	#[must_use]
	/// # Help Requested?
	pub const fn is_help(&self) -> bool { matches!(self, Self::HelpRequested(_)) }

	#[must_use]
	/// # Version Requested?
	pub const fn is_version(&self) -> bool { matches!(self, Self::VersionRequested(_)) }
}



#[derive(Debug, Clone)]
/// # Argument Parser.
///
/// Register [`Argument`]s, then parse.
///
/// New parsers come with `-h/--help` already registered; use
/// [`ArgumentParser::with_help`] to remove it.
///
/// By default, parse errors and help/version requests are printed and the
/// program exits (see [`FLAG_ALL`]). Use [`ArgumentParser::with_handle`] to
/// change that, or [`ArgumentParser::try_parse_args`] to skip the policy
/// entirely.
///
/// ## Examples
///
/// ```no_run
/// use argspec::{Argument, ArgumentParser};
///
/// let mut parser = ArgumentParser::new()
///     .with_description("Calculate the square of a number.");
/// parser.add_argument(
///     Argument::new("square")
///         .value_type::<i32>()
///         .help("display a square of a given number")
/// ).unwrap();
///
/// let params = parser.parse_env().unwrap();
/// let square = params.get_value::<i32>("square").unwrap();
/// println!("{}", square * square);
/// ```
pub struct ArgumentParser {
	/// # Arguments.
	args: Vec<Argument>,

	/// # Program Name.
	prog: Option<String>,

	/// # Usage Override.
	usage: Option<String>,

	/// # Description.
	description: Option<String>,

	/// # Epilog.
	epilog: Option<String>,

	/// # Version Text.
	version: Option<String>,

	/// # Handling Flags.
	handle: u8,

	/// # Exclusion Groups Issued.
	groups: usize,
}

impl Default for ArgumentParser {
	fn default() -> Self {
		Self {
			args: vec![auto_help()],
			prog: None,
			usage: None,
			description: None,
			epilog: None,
			version: None,
			handle: FLAG_ALL,
			groups: 0,
		}
	}
}

impl ArgumentParser {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Program Name.
	///
	/// If not set, the file name of the running program is used.
	pub fn with_prog<S: Into<String>>(mut self, prog: S) -> Self {
		self.prog = Some(prog.into());
		self
	}

	#[must_use]
	/// # With Usage.
	///
	/// Replace the generated usage line (minus the `usage: ` prefix).
	/// `{prog}` is replaced with the program name.
	pub fn with_usage<S: Into<String>>(mut self, usage: S) -> Self {
		self.usage = Some(usage.into());
		self
	}

	#[must_use]
	/// # With Description.
	///
	/// This is shown after the usage line. `{prog}` is replaced with the
	/// program name.
	pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
		self.description = Some(description.into());
		self
	}

	#[must_use]
	/// # With Epilog.
	///
	/// This is shown at the end of the help screen. `{prog}` is replaced
	/// with the program name.
	pub fn with_epilog<S: Into<String>>(mut self, epilog: S) -> Self {
		self.epilog = Some(epilog.into());
		self
	}

	#[must_use]
	/// # With Automatic Help.
	///
	/// Add or remove the automatic `-h/--help` argument. To give `-h` some
	/// other meaning, call this with `false` before registering it.
	///
	/// Names stay unique: if `-h` or `--help` is already taken by another
	/// argument, the automatic help is not re-added.
	pub fn with_help(mut self, help: bool) -> Self {
		self.args.retain(|a| ! is_auto_help(a));
		if
			help &&
			! self.args.iter().any(|a| a.names().iter().any(|n| n == "-h" || n == "--help"))
		{
			self.args.insert(0, auto_help());
		}
		self
	}

	#[must_use]
	/// # With Handling Flags.
	///
	/// Choose what [`ArgumentParser::parse_args`] handles itself: any
	/// combination of [`FLAG_ERRORS`], [`FLAG_HELP`], and [`FLAG_VERSION`].
	pub const fn with_handle(mut self, flags: u8) -> Self {
		self.handle = flags & FLAG_ALL;
		self
	}

	/// # Add Argument.
	///
	/// Register an argument. Version text, if any, becomes the parser's
	/// version text.
	///
	/// ## Examples
	///
	/// ```
	/// use argspec::{Action, Argument, ArgumentParser};
	///
	/// let mut parser = ArgumentParser::new();
	/// parser
	///     .add_argument(Argument::new("-a").action(Action::StoreTrue)).unwrap()
	///     .add_argument(Argument::new("-b")).unwrap();
	///
	/// // Names must be unique.
	/// assert!(parser.add_argument(Argument::new("-a")).is_err());
	///
	/// // And optional-only settings can't go on positionals.
	/// assert!(parser.add_argument(Argument::new("pos").required()).is_err());
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the argument is malformed or reuses a name.
	pub fn add_argument(&mut self, arg: Argument) -> Result<&mut Self, ArgspecError> {
		arg.validate()?;

		if let Some(name) = arg.names().iter().find(|n| self.args.iter().any(|a| a.names().contains(n))) {
			return Err(ArgspecError::DuplicateName(name.clone()));
		}

		if let Some(version) = arg.version_text() {
			self.version = Some(version.to_owned());
		}

		tracing::debug!(names = %arg.joined_names(), action = arg.action_kind().as_str(), "registered");
		self.args.push(arg);
		Ok(self)
	}

	#[must_use]
	/// # Add Mutually Exclusive Group.
	///
	/// Return a new group handle for [`Argument::group`]. At most one
	/// argument from the group may be supplied.
	pub fn add_mutually_exclusive_group(&mut self) -> Group {
		let group = Group::new(self.groups);
		self.groups += 1;
		group
	}

	#[must_use]
	/// # Arguments.
	pub fn arguments(&self) -> &[Argument] { &self.args }
}

impl ArgumentParser {
	/// # Try Parse.
	///
	/// Parse the arguments (not including the program name) without any
	/// printing or exiting.
	///
	/// ## Examples
	///
	/// ```
	/// use argspec::{Argument, ArgumentParser, Outcome};
	///
	/// let mut parser = ArgumentParser::new().with_prog("prog");
	/// parser.add_argument(Argument::new("square").value_type::<i32>()).unwrap();
	///
	/// let out = parser.try_parse_args(["-h"]).unwrap();
	/// assert!(out.is_help());
	///
	/// let err = parser.try_parse_args(["x"]).unwrap_err();
	/// assert_eq!(err.to_string(), "argument square: invalid value: 'x'");
	/// ```
	///
	/// ## Errors
	///
	/// Returns an error if the arguments are invalid.
	pub fn try_parse_args<I, S>(&self, args: I) -> Result<Outcome, ParseError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let mut tokens: Tokens = args.into_iter().collect();
		let mut slots = vec![Slot::default(); self.args.len()];
		tracing::debug!(tokens = tokens.len(), arguments = self.args.len(), "parsing");

		let out = match matcher::scan(&self.args, &mut slots, &mut tokens)? {
			Flow::Continue => {
				validate::validate(&self.args, &slots, &tokens)?;
				Outcome::Parsed(self.parameters(slots))
			},
			Flow::Help => Outcome::HelpRequested(self.signal_parameters(&slots)),
			Flow::Version => Outcome::VersionRequested(self.signal_parameters(&slots)),
		};

		tracing::debug!(help = out.is_help(), version = out.is_version(), "parsed");
		Ok(out)
	}

	/// # Parse.
	///
	/// Parse the arguments (not including the program name), applying the
	/// handling policy set by [`ArgumentParser::with_handle`].
	///
	/// ## Errors
	///
	/// Returns an error if the arguments are invalid and [`FLAG_ERRORS`] is
	/// not set. (If it is, the program exits instead.)
	pub fn parse_args<I, S>(&self, args: I) -> Result<Parameters, ParseError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.handle(self.try_parse_args(args))
	}

	/// # Parse Environment.
	///
	/// Parse [`std::env::args_os`], using the first entry's file name as the
	/// program name if none was set.
	///
	/// ## Errors
	///
	/// Returns an error if the arguments are invalid, or not UTF-8, and
	/// [`FLAG_ERRORS`] is not set. (If it is, the program exits instead.)
	pub fn parse_env(&mut self) -> Result<Parameters, ParseError> {
		let mut args = std::env::args_os();
		if let Some(first) = args.next() {
			if self.prog.is_none() {
				self.prog = Some(extract_filename(&first.to_string_lossy()).to_owned());
			}
		}

		let args = args.map(|a| a.into_string().map_err(ParseError::InvalidUtf8))
			.collect::<Result<Vec<String>, ParseError>>();
		self.handle(args.and_then(|a| self.try_parse_args(a)))
	}

	/// # Apply Handling Policy.
	fn handle(&self, res: Result<Outcome, ParseError>) -> Result<Parameters, ParseError> {
		match res {
			Ok(Outcome::Parsed(p)) => Ok(p),
			Ok(Outcome::HelpRequested(p)) => {
				if FLAG_HELP == self.handle & FLAG_HELP {
					println!("{}", self.format_help());
					std::process::exit(0);
				}
				Ok(p)
			},
			Ok(Outcome::VersionRequested(p)) => {
				if FLAG_VERSION == self.handle & FLAG_VERSION {
					println!("{}", self.format_version());
					std::process::exit(0);
				}
				Ok(p)
			},
			Err(e) => {
				if FLAG_ERRORS == self.handle & FLAG_ERRORS {
					println!("{e}");
					println!("{}", self.format_help());
					std::process::exit(e.exit_code());
				}
				Err(e)
			},
		}
	}

	/// # Build Parameters.
	///
	/// Supplied arguments go in first, so when several share a destination,
	/// a supplied one beats an absent one. Ties go to the earliest
	/// registered.
	fn parameters(&self, slots: Vec<Slot>) -> Parameters {
		let (present, absent): (Vec<_>, Vec<_>) = self.args.iter()
			.zip(slots)
			.partition(|(_, s)| s.present);

		let mut out = Parameters::default();
		for (arg, slot) in present.into_iter().chain(absent) {
			out.insert(arg.dest_name(), slot.finish(arg));
		}
		out
	}

	/// # Build Parameters (Help/Version).
	///
	/// Everything gets its absent value except the help or version argument
	/// that fired.
	fn signal_parameters(&self, slots: &[Slot]) -> Parameters {
		let mut out = Parameters::default();
		for (arg, slot) in self.args.iter().zip(slots) {
			let action = arg.action_kind();
			let value =
				if slot.present && matches!(action, Action::Help | Action::Version) {
					slot.value.clone()
				}
				else { action.absent(arg) };
			out.insert(arg.dest_name(), value);
		}
		out
	}
}

impl ArgumentParser {
	#[must_use]
	/// # Program Name.
	///
	/// Return the name set with [`ArgumentParser::with_prog`], or the file
	/// name of the running program.
	pub fn prog(&self) -> Cow<'_, str> {
		if let Some(prog) = &self.prog { return Cow::Borrowed(prog.as_str()); }
		std::env::args_os()
			.next()
			.map_or(Cow::Borrowed(""), |p| Cow::Owned(extract_filename(&p.to_string_lossy()).to_owned()))
	}

	#[must_use]
	/// # Usage.
	pub fn format_usage(&self) -> String {
		let prog = self.prog();
		self.formatter(&prog).usage()
	}

	#[must_use]
	/// # Help.
	///
	/// ## Examples
	///
	/// ```
	/// use argspec::{Argument, ArgumentParser};
	///
	/// let mut parser = ArgumentParser::new().with_prog("prog");
	/// parser.add_argument(Argument::new("p1")).unwrap();
	///
	/// assert_eq!(
	///     parser.format_help(),
	///     "usage: prog [-h] p1\n\npositional arguments:\n  p1\n\noptional arguments:\n  -h, --help            show this help message and exit",
	/// );
	/// ```
	pub fn format_help(&self) -> String {
		let prog = self.prog();
		self.formatter(&prog).help()
	}

	#[must_use]
	/// # Version.
	///
	/// Return the version text, or an empty string if there isn't any.
	pub fn format_version(&self) -> String {
		let prog = self.prog();
		self.version.as_deref()
			.map_or_else(String::new, |v| self.formatter(&prog).version(v))
	}

	/// # Formatter.
	fn formatter<'a>(&'a self, prog: &'a str) -> Formatter<'a> {
		Formatter {
			args: &self.args,
			prog,
			usage: self.usage.as_deref(),
			description: self.description.as_deref(),
			epilog: self.epilog.as_deref(),
		}
	}
}



/// # Automatic Help Argument.
fn auto_help() -> Argument {
	Argument::new(["-h", "--help"])
		.action(Action::Help)
		.help(HELP_HELP)
}

/// # Is Automatic Help Argument?
fn is_auto_help(arg: &Argument) -> bool {
	arg.action_kind() == Action::Help && arg.names() == ["-h", "--help"]
}

/// # Extract File Name.
///
/// Strip everything up to the last `/` or `\`.
fn extract_filename(path: &str) -> &str {
	path.rsplit(['/', '\\']).next().unwrap_or(path)
}
