/*!
# Argspec: Actions

Each [`Action`] decides what happens to an argument's value when one of its
names turns up on the command line, and what the value should be if it
never does.
*/

use crate::{
	Argument,
	Nargs,
	ParseError,
	Value,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Action.
///
/// | Action | When Present | When Absent |
/// | ------ | ------------ | ----------- |
/// | `Store` | The converted value(s). | The default. |
/// | `StoreTrue` | `true` | `false` |
/// | `StoreFalse` | `false` | `true` |
/// | `StoreConst` | The const value. | The default. |
/// | `Count` | An `i32` incremented once per occurrence. | The default. |
/// | `Append` | A `Vec` with one value per occurrence. | The default. |
/// | `Help` | Stop and show help. | `false` |
/// | `Version` | Stop and show the version. | `false` |
pub enum Action {
	#[default]
	/// # Store Value(s).
	Store,

	/// # Store True.
	StoreTrue,

	/// # Store False.
	StoreFalse,

	/// # Store Const.
	StoreConst,

	/// # Count Occurrences.
	Count,

	/// # Append Values.
	Append,

	/// # Help Requested.
	Help,

	/// # Version Requested.
	Version,
}

impl Action {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Store => "store",
			Self::StoreTrue => "store_true",
			Self::StoreFalse => "store_false",
			Self::StoreConst => "store_const",
			Self::Count => "count",
			Self::Append => "append",
			Self::Help => "help",
			Self::Version => "version",
		}
	}

	#[must_use]
	/// # Expects an Argument?
	///
	/// Returns `true` for actions that take their value(s) from the command
	/// line.
	pub const fn expects_argument(self) -> bool {
		matches!(self, Self::Store | Self::Append)
	}

	/// # Check Errors.
	///
	/// Valueless actions reject explicit `--key=value` assignments.
	pub(crate) fn check_errors(self, arg: &Argument, inline: Option<&str>)
	-> Result<(), ParseError> {
		match (self, inline) {
			(Self::StoreTrue | Self::StoreFalse | Self::StoreConst | Self::Count, Some(v)) =>
				Err(ParseError::IgnoredExplicit {
					name: arg.error_name(),
					value: v.to_owned(),
				}),
			_ => Ok(()),
		}
	}

	/// # Perform.
	///
	/// Apply the action to the argument's `slot`, given the raw values
	/// collected for it (the inline value, if any, comes first).
	///
	/// ## Errors
	///
	/// Returns an error if the values are the wrong count, can't be
	/// converted, or aren't among the argument's choices.
	pub(crate) fn perform(self, arg: &Argument, slot: &mut Slot, raw: &[String])
	-> Result<Flow, ParseError> {
		slot.present = true;
		match self {
			Self::Store => { slot.value = store(arg, raw)?; },
			Self::StoreTrue => { slot.value = Value::new(true); },
			Self::StoreFalse => { slot.value = Value::new(false); },
			Self::StoreConst => { slot.value = arg.get_const().clone(); },
			Self::Count => match slot.value.get_mut::<i32>() {
				Ok(n) => { *n = n.saturating_add(1); },
				Err(_) => { slot.value = Value::new(1_i32); },
			},
			Self::Append => {
				let raw = raw.first()
					.ok_or_else(|| ParseError::ExpectedOne(arg.error_name()))?;
				let value = arg.convert(raw)?;
				let cap = arg.capability();
				cap.append(value, &mut slot.value);
				tracing::trace!(dest = %arg.dest_name(), len = cap.len(&slot.value), "appended");
			},
			Self::Help => {
				slot.value = Value::new(true);
				return Ok(Flow::Help);
			},
			Self::Version => {
				slot.value = Value::new(true);
				return Ok(Flow::Version);
			},
		}

		Ok(Flow::Continue)
	}

	#[must_use]
	/// # Value When Absent.
	pub(crate) fn absent(self, arg: &Argument) -> Value {
		match self {
			Self::StoreTrue | Self::Help | Self::Version => Value::new(false),
			Self::StoreFalse => Value::new(true),
			Self::Store | Self::StoreConst | Self::Count | Self::Append =>
				arg.get_default().clone(),
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Control Flow.
///
/// What the parser should do after an action has been performed.
pub(crate) enum Flow {
	/// # Keep Going.
	Continue,

	/// # Stop: Help.
	Help,

	/// # Stop: Version.
	Version,
}



#[derive(Debug, Clone, Default)]
/// # Value Slot.
///
/// The working state of one argument during a single parse.
pub(crate) struct Slot {
	/// # Value So Far.
	pub(crate) value: Value,

	/// # Supplied?
	pub(crate) present: bool,
}

impl Slot {
	#[must_use]
	/// # Finish.
	///
	/// Return the value, or the action's absent value if there isn't one.
	pub(crate) fn finish(self, arg: &Argument) -> Value {
		if self.value.is_some() { self.value }
		else { arg.action_kind().absent(arg) }
	}
}



/// # Store.
///
/// Convert the raw value(s) according to the argument's nargs.
fn store(arg: &Argument, raw: &[String]) -> Result<Value, ParseError> {
	match arg.nargs_kind() {
		None => raw.first()
			.ok_or_else(|| ParseError::ExpectedOne(arg.error_name()))
			.and_then(|r| arg.convert(r)),
		Some(Nargs::Exactly(n)) =>
			if raw.len() == n { collect(arg, raw) }
			else { Err(ParseError::ExpectedN(arg.error_name(), n)) },
		Some(Nargs::ZeroOrOne) => match raw.first() {
			Some(r) => arg.convert(r),
			None => Ok(arg.get_const().clone()),
		},
		Some(Nargs::ZeroOrMore) => collect(arg, raw),
		Some(Nargs::OneOrMore) =>
			if raw.is_empty() { Err(ParseError::ExpectedAtLeastOne(arg.error_name())) }
			else { collect(arg, raw) },
	}
}

/// # Convert and Collect.
pub(crate) fn collect(arg: &Argument, raw: &[String]) -> Result<Value, ParseError> {
	let values = raw.iter()
		.map(|r| arg.convert(r))
		.collect::<Result<Vec<_>, _>>()?;
	Ok(arg.capability().collect(values))
}
