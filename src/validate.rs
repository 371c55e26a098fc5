/*!
# Argspec: Validation

Post-scan checks, run in order, each failing on the first problem found.
*/

use crate::{
	action::Slot,
	Argument,
	ParseError,
	token::Tokens,
};



/// # Validate.
///
/// ## Errors
///
/// Returns an error for leftover tokens, clashing mutually exclusive
/// arguments, or missing required ones.
pub(crate) fn validate(args: &[Argument], slots: &[Slot], tokens: &Tokens)
-> Result<(), ParseError> {
	check_unrecognised(tokens)?;
	check_excluded(args, slots)?;
	check_missing(args, slots)
}

/// # Unrecognised Tokens.
fn check_unrecognised(tokens: &Tokens) -> Result<(), ParseError> {
	let leftover = tokens.unconsumed();
	if leftover.is_empty() { Ok(()) }
	else { Err(ParseError::Unrecognised(leftover)) }
}

/// # Mutually Exclusive Arguments.
///
/// The first supplied group member is reported as the one the later member
/// is not allowed with.
fn check_excluded(args: &[Argument], slots: &[Slot]) -> Result<(), ParseError> {
	let present: Vec<(usize, &Argument)> = args.iter()
		.zip(slots)
		.enumerate()
		.filter_map(|(k, (a, s))| (s.present && a.group_id().is_some()).then_some((k, a)))
		.collect();

	for (k1, a1) in &present {
		if let Some((_, a2)) = present.iter().find(|(k2, a2)| k1 != k2 && a2.group_id() == a1.group_id()) {
			return Err(ParseError::NotAllowedWith(a2.joined_names(), a1.joined_names()));
		}
	}

	Ok(())
}

/// # Missing Required Arguments.
///
/// Positionals need a value; optionals need to have been supplied.
fn check_missing(args: &[Argument], slots: &[Slot]) -> Result<(), ParseError> {
	let missing: Vec<String> = args.iter()
		.zip(slots)
		.filter(|(a, s)| a.is_required() && (
			if a.is_positional() { s.value.is_empty() }
			else { ! s.present }
		))
		.map(|(a, _)| a.joined_names())
		.collect();

	if missing.is_empty() { Ok(()) }
	else { Err(ParseError::MissingRequired(missing)) }
}
