/*!
# Argspec: Matcher

This walks the argument specifications against the token stream, claiming
tokens for each in three fixed phases:

1. Optionals that take values (`store`, `append`);
2. Optionals that don't;
3. Positionals.

Each phase runs in registration order.
*/

use crate::{
	action::{
		Flow,
		Slot,
	},
	Argument,
	Nargs,
	ParseError,
	token::Tokens,
};



/// # Scan.
///
/// Run all three phases, stopping early if help or version is requested.
/// Any `--` separators are consumed at the end.
///
/// ## Errors
///
/// Returns the first error raised by an action.
pub(crate) fn scan(args: &[Argument], slots: &mut [Slot], tokens: &mut Tokens)
-> Result<Flow, ParseError> {
	debug_assert_eq!(args.len(), slots.len(), "Slot count mismatch.");

	for (phase, value_phase) in [("value options", true), ("flag options", false)] {
		tracing::debug!(phase, "scanning");
		for (arg, slot) in args.iter().zip(slots.iter_mut()) {
			if
				! arg.is_positional() &&
				arg.action_kind().expects_argument() == value_phase
			{
				let flow = scan_optional(arg, slot, tokens)?;
				if flow != Flow::Continue { return Ok(flow); }
			}
		}
	}

	tracing::debug!(phase = "positionals", "scanning");
	for (arg, slot) in args.iter().zip(slots.iter_mut()) {
		if arg.is_positional() { scan_positional(arg, slot, tokens)?; }
	}

	tokens.consume_separators();
	Ok(Flow::Continue)
}

/// # Scan Optional.
///
/// Find and process every occurrence of the argument within the optional
/// window.
///
/// A token is re-checked after a match until it is consumed or stops
/// matching, so clustered repeats like `-vvv` all count.
fn scan_optional(arg: &Argument, slot: &mut Slot, tokens: &mut Tokens)
-> Result<Flow, ParseError> {
	let action = arg.action_kind();
	let window = tokens.optional_window();
	let mut idx = window.start;

	while idx < window.end {
		let Some(inline) = consume_name(arg, tokens, idx) else {
			idx += 1;
			continue;
		};
		tracing::trace!(arg = %arg.joined_names(), idx, inline = ?inline, "matched");

		action.check_errors(arg, inline.as_deref())?;
		let mut raw: Vec<String> = inline.into_iter().collect();
		if action.expects_argument() {
			let avail = tokens.option_args(idx, window.end);
			let want = wanted(arg.nargs_kind(), raw.len(), avail.len());
			let claim: Vec<usize> = avail.take(want).collect();
			raw.extend(tokens.claim_all(&claim));
		}

		let flow = action.perform(arg, slot, &raw)?;
		if flow != Flow::Continue { return Ok(flow); }
	}

	Ok(Flow::Continue)
}

/// # Option Values Wanted.
///
/// Return how many of the `avail` trailing tokens an option should claim
/// given it already has `have` (inline) values.
fn wanted(nargs: Option<Nargs>, have: usize, avail: usize) -> usize {
	let want = match nargs {
		None | Some(Nargs::ZeroOrOne) => usize::from(have == 0),
		Some(Nargs::Exactly(n)) => n.saturating_sub(have),
		Some(Nargs::ZeroOrMore | Nargs::OneOrMore) => avail,
	};
	want.min(avail)
}

/// # Match and Consume Name.
///
/// If the token at `idx` matches one of the argument's names, claim the
/// name and return the inline value, if any. Empty inline values count as
/// none at all.
///
/// Long names match the whole token, or the part before an `=`, and
/// consume it.
///
/// Short names match any unconsumed single-dash token containing their
/// character. An exact match (`-f`) is consumed. Otherwise only the character
/// is removed; for value-taking actions the text following it becomes the
/// inline value, and the token is consumed if the character came right
/// after the dash, or else shrinks to the text before it.
fn consume_name(arg: &Argument, tokens: &mut Tokens, idx: usize) -> Option<Option<String>> {
	if tokens.is_consumed(idx) { return None; }
	let text = tokens.get(idx)?.text.clone();

	for name in arg.names() {
		if name.starts_with("--") {
			if let Some(inline) = Argument::long_match(name, &text) {
				let inline = inline.filter(|v| ! v.is_empty()).map(str::to_owned);
				tokens.claim(idx);
				return Some(inline);
			}
		}
		else if let Some(inline) = consume_short(arg, name, tokens, idx) {
			return Some(inline);
		}
	}

	None
}

/// # Match and Consume Short Name.
fn consume_short(arg: &Argument, name: &str, tokens: &mut Tokens, idx: usize)
-> Option<Option<String>> {
	let token = tokens.get(idx)?;
	if ! token.text.starts_with('-') || token.text.starts_with("--") || ! token.is_flag_like() {
		return None;
	}

	let ch = name.chars().nth(1)?;
	if token.text.len() == 2 {
		if token.text[1..].starts_with(ch) {
			tokens.claim(idx);
			return Some(None);
		}
		return None;
	}

	let pos = token.text[1..].find(ch)? + 1;
	let mut text = token.text.clone();
	text.remove(pos);

	if ! arg.action_kind().expects_argument() {
		tokens.set_text(idx, text);
		return Some(None);
	}

	let value = text.split_off(pos);
	let value = Some(value).filter(|v| ! v.is_empty());
	if pos == 1 { tokens.claim(idx); }
	else { tokens.set_text(idx, text); }
	Some(value)
}

/// # Scan Positional.
///
/// Claim the argument's value(s) from the positional candidates.
fn scan_positional(arg: &Argument, slot: &mut Slot, tokens: &mut Tokens)
-> Result<(), ParseError> {
	let candidates = tokens.positional_candidates();
	let take = match arg.nargs_kind() {
		None => candidates.len().min(1),
		Some(Nargs::Exactly(n)) =>
			if candidates.is_empty() { 0 }
			else if candidates.len() < n {
				return Err(ParseError::ExpectedN(arg.error_name(), n));
			}
			else { n },
		Some(Nargs::ZeroOrOne) => candidates.len().min(1),
		Some(Nargs::ZeroOrMore | Nargs::OneOrMore) => candidates.len(),
	};

	if take == 0 {
		// Optional positionals fall back to their defaults.
		match arg.nargs_kind() {
			Some(Nargs::ZeroOrOne) => { slot.value = arg.get_default().clone(); },
			Some(Nargs::ZeroOrMore) => {
				slot.value =
					if arg.get_default().is_some() { arg.get_default().clone() }
					else { arg.capability().collect(Vec::new()) };
			},
			_ => {},
		}
		return Ok(());
	}

	let raw = tokens.claim_all(&candidates[..take]);
	tracing::trace!(arg = %arg.dest_name(), count = raw.len(), "positional");
	arg.action_kind().perform(arg, slot, &raw).map(|_| ())
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Action;

	/// # Helper: Scan.
	fn run(args: &[Argument], raw: &[&str]) -> (Result<Flow, ParseError>, Vec<Slot>, Tokens) {
		let mut tokens: Tokens = raw.iter().copied().collect();
		let mut slots = vec![Slot::default(); args.len()];
		let res = scan(args, &mut slots, &mut tokens);
		(res, slots, tokens)
	}

	#[test]
	fn t_wanted() {
		assert_eq!(wanted(None, 0, 3), 1);
		assert_eq!(wanted(None, 1, 3), 0);
		assert_eq!(wanted(None, 0, 0), 0);
		assert_eq!(wanted(Some(Nargs::Exactly(3)), 1, 5), 2);
		assert_eq!(wanted(Some(Nargs::Exactly(3)), 0, 2), 2);
		assert_eq!(wanted(Some(Nargs::ZeroOrOne), 0, 2), 1);
		assert_eq!(wanted(Some(Nargs::ZeroOrMore), 0, 2), 2);
		assert_eq!(wanted(Some(Nargs::OneOrMore), 1, 0), 0);
	}

	#[test]
	fn t_cluster() {
		let args = [
			Argument::new("-a").action(Action::StoreTrue),
			Argument::new("-b"),
		];
		let (res, slots, tokens) = run(&args, &["-ab", "5"]);
		assert_eq!(res, Ok(Flow::Continue));
		assert_eq!(slots[0].value.get::<bool>(), Ok(&true));
		assert_eq!(slots[1].value.get::<String>(), Ok(&"5".to_owned()));
		assert!(tokens.unconsumed().is_empty());

		// Inline values, leading and trailing.
		let args = [
			Argument::new("-x").action(Action::StoreTrue),
			Argument::new("-o"),
		];
		let (res, slots, _) = run(&args, &["-xo5"]);
		assert!(res.is_ok());
		assert_eq!(slots[1].value.get::<String>(), Ok(&"5".to_owned()));
		assert!(slots[0].present);

		let (res, slots, tokens) = run(&args, &["-oval"]);
		assert!(res.is_ok());
		assert_eq!(slots[1].value.get::<String>(), Ok(&"val".to_owned()));
		assert!(! slots[0].present);
		assert!(tokens.unconsumed().is_empty());
	}

	#[test]
	fn t_leftover_cluster() {
		// Flags don't take inline values, so the remainder lingers.
		let args = [Argument::new("-o").action(Action::StoreTrue)];
		let (res, slots, tokens) = run(&args, &["-oval"]);
		assert!(res.is_ok());
		assert!(slots[0].present);
		assert_eq!(tokens.unconsumed(), vec!["-val".to_owned()]);
	}

	#[test]
	fn t_count() {
		let args = [Argument::new(["-v", "--verbose"]).action(Action::Count)];
		let (res, slots, _) = run(&args, &["-vvv", "--verbose"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<i32>(), Ok(&4));
	}

	#[test]
	fn t_long() {
		let args = [Argument::new("--number").value_type::<i32>()];
		for raw in [&["--number=-65"][..], &["--number", "-65"]] {
			let (res, slots, _) = run(&args, raw);
			assert!(res.is_ok());
			assert_eq!(slots[0].value.get::<i32>(), Ok(&-65));
		}

		// An empty assignment takes the next token.
		let (res, slots, _) = run(&args, &["--number=", "3"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<i32>(), Ok(&3));

		let args = [Argument::new("--flag").action(Action::StoreTrue)];
		let (res, _, _) = run(&args, &["--flag=yes"]);
		assert_eq!(
			res,
			Err(ParseError::IgnoredExplicit { name: "--flag".to_owned(), value: "yes".to_owned() }),
		);
	}

	#[test]
	fn t_negative_numbers() {
		let args = [
			Argument::new("-n").value_type::<i32>(),
			Argument::new("-6").action(Action::StoreTrue),
		];
		let (res, slots, _) = run(&args, &["-n", "-65"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<i32>(), Ok(&-65));
		assert!(! slots[1].present);

		let (res, slots, _) = run(&args, &["-n-65"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<i32>(), Ok(&-65));

		// Positionals can be negative too.
		let args = [Argument::new("x").value_type::<f64>()];
		let (res, slots, _) = run(&args, &["-1.5"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<f64>(), Ok(&-1.5));
	}

	#[test]
	fn t_option_nargs() {
		let args = [
			Argument::new("-a").nargs(2),
			Argument::new("-b").nargs(Nargs::ZeroOrMore),
			Argument::new("pos"),
		];
		let (res, slots, _) = run(&args, &["-a", "1", "2", "p", "-b", "x", "y"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<Vec<String>>(), Ok(&vec!["1".to_owned(), "2".to_owned()]));
		assert_eq!(slots[1].value.get::<Vec<String>>(), Ok(&vec!["x".to_owned(), "y".to_owned()]));
		assert_eq!(slots[2].value.get::<String>(), Ok(&"p".to_owned()));

		// Inline values count toward the total.
		let (res, slots, _) = run(&args, &["-a1", "2", "p"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<Vec<String>>(), Ok(&vec!["1".to_owned(), "2".to_owned()]));

		let (res, _, _) = run(&args, &["-a", "1", "-b"]);
		assert_eq!(res, Err(ParseError::ExpectedN("-a".to_owned(), 2)));
	}

	#[test]
	fn t_positionals() {
		let args = [
			Argument::new("first"),
			Argument::new("rest").nargs(Nargs::ZeroOrMore).value_type::<i32>(),
		];
		let (res, slots, tokens) = run(&args, &["a", "1", "2"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<String>(), Ok(&"a".to_owned()));
		assert_eq!(slots[1].value.get::<Vec<i32>>(), Ok(&vec![1, 2]));
		assert!(tokens.unconsumed().is_empty());

		let (res, slots, _) = run(&args, &["a"]);
		assert!(res.is_ok());
		assert_eq!(slots[1].value.get::<Vec<i32>>(), Ok(&Vec::new()));

		let (res, slots, _) = run(&args, &[]);
		assert!(res.is_ok());
		assert!(slots[0].value.is_empty());
	}

	#[test]
	fn t_positional_nargs() {
		let args = [Argument::new("xyz").nargs(3)];
		let (res, _, _) = run(&args, &["a", "b"]);
		assert_eq!(res, Err(ParseError::ExpectedN("xyz".to_owned(), 3)));

		let (res, slots, _) = run(&args, &["a", "b", "c"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<Vec<String>>().map(Vec::len), Ok(3));

		let (res, slots, _) = run(&args, &[]);
		assert!(res.is_ok());
		assert!(slots[0].value.is_empty());
	}

	#[test]
	fn t_separator() {
		let args = [Argument::new("name")];
		let (res, slots, tokens) = run(&args, &["--", "-weird"]);
		assert!(res.is_ok());
		assert_eq!(slots[0].value.get::<String>(), Ok(&"-weird".to_owned()));
		assert!(tokens.unconsumed().is_empty());

		// Options after the separator are left alone.
		let args = [Argument::new("-f").action(Action::StoreTrue), Argument::new("name")];
		let (res, slots, tokens) = run(&args, &["--", "-f"]);
		assert!(res.is_ok());
		assert!(! slots[0].present);
		assert_eq!(slots[1].value.get::<String>(), Ok(&"-f".to_owned()));
		assert!(tokens.unconsumed().is_empty());
	}

	#[test]
	fn t_help_stops() {
		let args = [
			Argument::new("-n").value_type::<i32>(),
			Argument::new("-h").action(Action::Help),
			Argument::new("pos"),
		];
		let (res, slots, _) = run(&args, &["-h", "p"]);
		assert_eq!(res, Ok(Flow::Help));
		assert!(slots[1].present);
		assert!(slots[2].value.is_empty());
	}
}
