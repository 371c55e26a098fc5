/*!
# Argspec: Help Formatting
*/

use crate::{
	Argument,
	Nargs,
};



/// # Help Column Fill.
///
/// A newline and the twenty-four spaces help text is indented to.
const HELP_FILL: &str = "\n                        ";

/// # Program Name Placeholder.
const PROG: &str = "{prog}";



#[derive(Debug, Clone, Copy)]
/// # Formatter.
///
/// This renders usage, help, and version text from a read-only view of the
/// parser.
pub(crate) struct Formatter<'a> {
	/// # Arguments.
	pub(crate) args: &'a [Argument],

	/// # Program Name.
	pub(crate) prog: &'a str,

	/// # Usage Override.
	pub(crate) usage: Option<&'a str>,

	/// # Description.
	pub(crate) description: Option<&'a str>,

	/// # Epilog.
	pub(crate) epilog: Option<&'a str>,
}

impl Formatter<'_> {
	#[must_use]
	/// # Usage.
	pub(crate) fn usage(&self) -> String {
		if let Some(usage) = self.usage {
			return format!("usage: {}", self.replace_prog(usage));
		}

		let mut out = format!("usage: {}", self.prog);
		self.usage_optionals(&mut out);
		self.usage_positionals(&mut out);
		out
	}

	#[must_use]
	/// # Help.
	pub(crate) fn help(&self) -> String {
		let mut out = self.usage();

		if let Some(description) = self.description {
			out.push_str("\n\n");
			out.push_str(&self.replace_prog(description));
		}

		let positionals = self.help_positionals();
		if ! positionals.is_empty() {
			out.push_str("\n\npositional arguments:");
			out.push_str(&positionals);
		}

		let optionals = self.help_optionals();
		if ! optionals.is_empty() {
			out.push_str("\n\noptional arguments:");
			out.push_str(&optionals);
		}

		if let Some(epilog) = self.epilog {
			out.push_str("\n\n");
			out.push_str(&self.replace_prog(epilog));
		}

		out
	}

	#[must_use]
	/// # Version.
	pub(crate) fn version(&self, version: &str) -> String { self.replace_prog(version) }

	#[must_use]
	/// # Replace `{prog}`.
	fn replace_prog(&self, text: &str) -> String { text.replace(PROG, self.prog) }
}

impl Formatter<'_> {
	/// # Usage: Optionals.
	///
	/// Neighboring members of the same exclusion group share a bracket pair,
	/// separated by pipes.
	fn usage_optionals(&self, out: &mut String) {
		let optionals: Vec<&Argument> = self.args.iter()
			.filter(|a| ! a.is_positional())
			.collect();

		for (k, arg) in optionals.iter().enumerate() {
			let grouped_with = |other: Option<&&Argument>| arg.group_id().is_some() &&
				other.is_some_and(|o| o.group_id() == arg.group_id());

			let required = arg.is_required();
			if required { out.push(' '); }
			else if k != 0 && grouped_with(optionals.get(k - 1)) { out.push_str(" | "); }
			else { out.push_str(" ["); }

			out.push_str(arg.names().first().map_or("", String::as_str));
			if arg.nargs_kind().is_some() { out.push_str(&format_nargs(arg)); }
			else if arg.action_kind().expects_argument() {
				out.push(' ');
				out.push_str(&format_arg(arg));
			}

			if ! required && ! grouped_with(optionals.get(k + 1)) { out.push(']'); }
		}
	}

	/// # Usage: Positionals.
	fn usage_positionals(&self, out: &mut String) {
		for arg in self.args.iter().filter(|a| a.is_positional()) {
			if arg.nargs_kind().is_some() { out.push_str(&format_nargs(arg)); }
			else {
				out.push(' ');
				out.push_str(&format_arg(arg));
			}
		}
	}

	/// # Help: Positionals.
	fn help_positionals(&self) -> String {
		let mut out = String::new();
		for arg in self.args.iter().filter(|a| a.is_positional()) {
			let line = format!("  {}", format_arg(arg));
			self.push_help_line(&mut out, line, arg);
		}
		out
	}

	/// # Help: Optionals.
	fn help_optionals(&self) -> String {
		let mut out = String::new();
		for arg in self.args.iter().filter(|a| ! a.is_positional()) {
			let formatted =
				if ! arg.action_kind().expects_argument() { String::new() }
				else if arg.nargs_kind().is_some() { format_nargs(arg) }
				else { format!(" {}", format_arg(arg)) };

			let line = format!(
				"  {}",
				arg.names().iter()
					.map(|n| format!("{n}{formatted}"))
					.collect::<Vec<_>>()
					.join(", "),
			);
			self.push_help_line(&mut out, line, arg);
		}
		out
	}

	/// # Push Help Line.
	///
	/// Add the argument's help text to the line, if any, and append it to
	/// the output. Help text starts in column twenty-five, on the same line
	/// if there's room, or the next one if not.
	fn push_help_line(&self, out: &mut String, mut line: String, arg: &Argument) {
		let help = arg.help_text();
		if ! help.is_empty() {
			let len = line.chars().count();
			line.push_str(if len < 23 { &HELP_FILL[len + 1..] } else { HELP_FILL });
			line.push_str(&self.replace_prog(help));
		}

		out.push('\n');
		out.push_str(&line);
	}
}



/// # Format Argument Placeholder.
///
/// Choices become `{a,b,c}`; everything else uses the metavar.
fn format_arg(arg: &Argument) -> String {
	if arg.has_choices() { format!("{{{}}}", arg.joined_choices(",")) }
	else { arg.metavar_name() }
}

/// # Format Nargs.
fn format_nargs(arg: &Argument) -> String {
	let a = format_arg(arg);
	match arg.nargs_kind() {
		Some(Nargs::Exactly(n)) => format!(" {a}").repeat(n),
		Some(Nargs::ZeroOrOne) => format!(" [{a}]"),
		Some(Nargs::ZeroOrMore) => format!(" [{a} [{a} ...]]"),
		Some(Nargs::OneOrMore) => format!(" {a} [{a} ...]"),
		None => String::new(),
	}
}
