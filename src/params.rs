/*!
# Argspec: Parameters
*/

use crate::{
	ArgspecError,
	Value,
};
use std::{
	any::Any,
	collections::BTreeMap,
};



#[derive(Debug, Clone, Default)]
/// # Parameters.
///
/// The result of a parse: every declared destination key mapped to its
/// [`Value`].
///
/// Supplied arguments hold their converted value(s), and absent ones their
/// defaults. An absent argument without any default (store, append, and so
/// on) is present here but empty.
///
/// ## Examples
///
/// ```
/// use argspec::{Action, Argument, ArgumentParser, FLAG_NONE};
///
/// let mut parser = ArgumentParser::new()
///     .with_prog("demo")
///     .with_handle(FLAG_NONE);
/// parser.add_argument(Argument::new("square").value_type::<i32>()).unwrap();
/// parser.add_argument(
///     Argument::new(["-v", "--verbose"]).action(Action::StoreTrue)
/// ).unwrap();
///
/// let params = parser.parse_args(["9"]).unwrap();
/// assert_eq!(params.get_value::<i32>("square"), Ok(9));
/// assert_eq!(params.get_value::<bool>("verbose"), Ok(false));
/// assert!(params.get_value::<i32>("nope").is_err());
/// ```
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
	/// # Insert.
	///
	/// The first value inserted for a key sticks.
	pub(crate) fn insert(&mut self, key: String, value: Value) {
		self.0.entry(key).or_insert(value);
	}

	#[must_use]
	/// # Contains Key?
	pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

	/// # Get.
	///
	/// Return the value holder for a key.
	///
	/// ## Errors
	///
	/// Returns an error if no argument has this destination key.
	pub fn get(&self, key: &str) -> Result<&Value, ArgspecError> {
		self.0.get(key).ok_or_else(|| ArgspecError::NoSuchArgument(key.to_owned()))
	}

	/// # Get Value.
	///
	/// Return a copy of the value for a key. Sequence-valued arguments hold a
	/// `Vec` of their value type.
	///
	/// ## Errors
	///
	/// Returns an error if no argument has this destination key, if it has
	/// no value, or if `T` is the wrong type.
	pub fn get_value<T: Any + Clone>(&self, key: &str) -> Result<T, ArgspecError> {
		let value = self.get(key)?;
		if value.is_empty() { return Err(ArgspecError::NoValue(key.to_owned())); }
		value.get::<T>().cloned()
	}

	/// # Iterate.
	///
	/// Return an iterator over the key/value pairs, ordered by key.
	pub fn iter(&self) -> impl Iterator<Item=(&str, &Value)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_parameters() {
		let mut params = Parameters::default();
		assert!(params.is_empty());

		params.insert("a".to_owned(), Value::new(1_u8));
		params.insert("a".to_owned(), Value::new(2_u8));
		params.insert("b".to_owned(), Value::empty());
		assert_eq!(params.len(), 2);
		assert!(params.contains("a"));

		assert_eq!(params.get_value::<u8>("a"), Ok(1));
		assert_eq!(params.get_value::<u8>("b"), Err(ArgspecError::NoValue("b".to_owned())));
		assert_eq!(params.get_value::<u8>("c"), Err(ArgspecError::NoSuchArgument("c".to_owned())));
		assert_eq!(
			params.get_value::<i8>("a"),
			Err(ArgspecError::WrongType { requested: "i8", held: "u8" }),
		);
		assert!(params.get("b").is_ok_and(Value::is_empty));

		let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "b"]);
	}
}
