/*!
# Argspec: Token Stream

The raw arguments for a single parse, each paired with a "consumed" flag.
Tokens are addressed by index, and can be shrunk in place when a single
character is claimed from a short-flag cluster like `-abc`.
*/

use std::ops::Range;



/// # End-of-Options Separator.
pub(crate) const SEPARATOR: &str = "--";



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Token.
pub(crate) struct Token {
	/// # Text.
	pub(crate) text: String,

	/// # Consumed?
	pub(crate) consumed: bool,
}

impl Token {
	/// # New.
	const fn new(text: String) -> Self {
		Self { text, consumed: false }
	}

	#[must_use]
	/// # Is Separator?
	pub(crate) fn is_separator(&self) -> bool { self.text == SEPARATOR }

	#[must_use]
	/// # Looks Like a Flag?
	pub(crate) fn is_flag_like(&self) -> bool { flag_like(&self.text) }
}



#[derive(Debug, Clone, Default)]
/// # Token Stream.
pub(crate) struct Tokens(Vec<Token>);

impl<S: Into<String>> FromIterator<S> for Tokens {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		Self(src.into_iter().map(|s| Token::new(s.into())).collect())
	}
}

impl Tokens {
	#[must_use]
	/// # Length.
	pub(crate) fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Get.
	pub(crate) fn get(&self, idx: usize) -> Option<&Token> { self.0.get(idx) }

	#[must_use]
	/// # Is Consumed?
	///
	/// Out-of-range indices count as consumed.
	pub(crate) fn is_consumed(&self, idx: usize) -> bool {
		self.0.get(idx).map_or(true, |t| t.consumed)
	}

	/// # Claim.
	///
	/// Mark the token consumed and return (a copy of) its text.
	pub(crate) fn claim(&mut self, idx: usize) -> String {
		match self.0.get_mut(idx) {
			Some(t) => {
				t.consumed = true;
				tracing::trace!(idx, token = %t.text, "claimed");
				t.text.clone()
			},
			None => String::new(),
		}
	}

	/// # Claim Many.
	pub(crate) fn claim_all(&mut self, idx: &[usize]) -> Vec<String> {
		idx.iter().map(|&i| self.claim(i)).collect()
	}

	/// # Replace Text.
	///
	/// Swap in new text for a token, leaving it unconsumed.
	pub(crate) fn set_text(&mut self, idx: usize, text: String) {
		if let Some(t) = self.0.get_mut(idx) { t.text = text; }
	}

	/// # Consume Separators.
	///
	/// Mark every `--` consumed so they aren't later reported as
	/// unrecognized.
	pub(crate) fn consume_separators(&mut self) {
		for t in &mut self.0 {
			if t.is_separator() { t.consumed = true; }
		}
	}

	#[must_use]
	/// # Unconsumed Token Text.
	pub(crate) fn unconsumed(&self) -> Vec<String> {
		self.0.iter()
			.filter(|t| ! t.consumed)
			.map(|t| t.text.clone())
			.collect()
	}
}

impl Tokens {
	#[must_use]
	/// # First Unconsumed Index.
	fn start(&self) -> usize {
		self.0.iter().position(|t| ! t.consumed).unwrap_or(self.0.len())
	}

	#[must_use]
	/// # Optional Argument Window.
	///
	/// From the first unconsumed token up to, but not including, the next
	/// `--` separator.
	pub(crate) fn optional_window(&self) -> Range<usize> {
		let start = self.start();
		let end = self.0[start..].iter()
			.position(Token::is_separator)
			.map_or(self.0.len(), |p| start + p);
		start..end
	}

	#[must_use]
	/// # Option Arguments.
	///
	/// Return the run of tokens following `idx` (and before `end`) that an
	/// option could take as values. The run stops at the first consumed or
	/// flag-like token.
	pub(crate) fn option_args(&self, idx: usize, end: usize) -> Range<usize> {
		let start = idx + 1;
		let end = end.min(self.0.len());
		if end <= start { return start..start; }

		let len = self.0[start..end].iter()
			.take_while(|t| ! t.consumed && ! t.is_flag_like())
			.count();
		start..start + len
	}

	#[must_use]
	/// # Positional Candidates.
	///
	/// Return the indices of the tokens a positional may claim, in order.
	///
	/// Only the contiguous run of unconsumed tokens starting at the first
	/// unconsumed token is considered. Within it, flag-like tokens are
	/// skipped until a `--` turns up; after that everything but another `--`
	/// is fair game.
	pub(crate) fn positional_candidates(&self) -> Vec<usize> {
		let start = self.start();
		let mut past_separator = false;
		self.0[start..].iter()
			.take_while(|t| ! t.consumed)
			.enumerate()
			.filter_map(|(k, t)| {
				if t.is_separator() {
					past_separator = true;
					None
				}
				else if past_separator || ! t.is_flag_like() { Some(start + k) }
				else { None }
			})
			.collect()
	}
}



#[must_use]
/// # Looks Like a Flag?
///
/// A token looks like a flag if it starts with a dash, unless it also looks
/// like a negative number.
pub(crate) fn flag_like(text: &str) -> bool {
	text.starts_with('-') && ! negative_number(text)
}

#[must_use]
/// # Looks Like a Negative Number?
///
/// This is a dash followed by a digit or decimal point, the whole of which
/// parses as a float, e.g. `-65`, `-1.125`, or `-1e3`.
///
/// Note that `-1e` and `-inf` do not qualify.
pub(crate) fn negative_number(text: &str) -> bool {
	matches!(text.as_bytes(), [b'-', b'0'..=b'9' | b'.', ..]) &&
	text.parse::<f64>().is_ok()
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Helper: Tokenize.
	fn tokens(raw: &[&str]) -> Tokens { raw.iter().copied().collect() }

	#[test]
	fn t_negative_number() {
		for s in ["-65", "-1.125", "-0", "-.5", "-1e3", "-1E-3"] {
			assert!(negative_number(s), "Bug: {s:?} should be a negative number.");
			assert!(! flag_like(s), "Bug: {s:?} should not look like a flag.");
		}

		for s in ["-", "--", "-1e", "-inf", "-nan", "-a", "-1a", "--5", "65", ""] {
			assert!(! negative_number(s), "Bug: {s:?} shouldn't be a negative number.");
		}

		for s in ["-", "--", "-1e", "-inf", "-a", "--foo", "--5"] {
			assert!(flag_like(s), "Bug: {s:?} should look like a flag.");
		}

		assert!(! flag_like("foo"));
		assert!(! flag_like(""));
	}

	#[test]
	fn t_optional_window() {
		let mut t = tokens(&["a", "b", "--", "c"]);
		assert_eq!(t.optional_window(), 0..2);

		t.claim(0);
		assert_eq!(t.optional_window(), 1..2);

		let t = tokens(&["a", "b"]);
		assert_eq!(t.optional_window(), 0..2);

		let t = tokens(&[]);
		assert_eq!(t.optional_window(), 0..0);
	}

	#[test]
	fn t_option_args() {
		let mut t = tokens(&["-o", "a", "-5", "b", "-p", "c", "--", "d"]);
		let window = t.optional_window();
		assert_eq!(window, 0..6);
		assert_eq!(t.option_args(0, window.end), 1..4);
		assert_eq!(t.option_args(4, window.end), 5..6);
		assert_eq!(t.option_args(5, window.end), 6..6);

		// Consumed tokens end the run.
		t.claim(3);
		assert_eq!(t.option_args(0, window.end), 1..3);
	}

	#[test]
	fn t_positional_candidates() {
		let t = tokens(&["a", "-x", "b", "--", "-y", "--", "c"]);
		assert_eq!(t.positional_candidates(), vec![0, 2, 4, 6]);

		// Only the first unconsumed run counts.
		let mut t = tokens(&["p1", "p2", "-f", "p3"]);
		t.claim(2);
		assert_eq!(t.positional_candidates(), vec![0, 1]);
		t.claim(0);
		t.claim(1);
		assert_eq!(t.positional_candidates(), vec![3]);
	}

	#[test]
	fn t_claim() {
		let mut t = tokens(&["--", "a", "-ab"]);
		assert_eq!(t.claim(1), "a");
		assert!(t.is_consumed(1));
		assert!(t.is_consumed(10));

		t.set_text(2, "-b".to_owned());
		assert_eq!(t.get(2).map(|t| t.text.as_str()), Some("-b"));
		assert_eq!(t.unconsumed(), vec!["--".to_owned(), "-b".to_owned()]);

		t.consume_separators();
		assert_eq!(t.unconsumed(), vec!["-b".to_owned()]);
		assert_eq!(t.len(), 3);
	}
}
