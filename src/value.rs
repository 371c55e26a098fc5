/*!
# Argspec: Values

Every argument, whatever its type, flows through the parser as a [`Value`], a
type-erased holder for exactly one concrete value (or nothing at all).

The type-specific bits live in a [`Capability`] table built for each
[`ArgValue`] type, so the rest of the crate never needs to know what it is
holding.
*/

use crate::ArgspecError;
use std::{
	any::{
		Any,
		type_name,
	},
	fmt,
	path::PathBuf,
};



/// # Argument Value Type.
///
/// Implement this for any type you want to parse straight out of the command
/// line. All of the primitive number types, `bool`, `char`, [`String`], and
/// [`PathBuf`] are covered out of the box.
///
/// ## Examples
///
/// ```
/// use argspec::ArgValue;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl ArgValue for Point {
///     fn from_arg(raw: &str) -> Option<Self> {
///         let (x, y) = raw.split_once(',')?;
///         Some(Self { x: x.parse().ok()?, y: y.parse().ok()? })
///     }
///
///     fn to_arg(&self) -> String { format!("{},{}", self.x, self.y) }
/// }
///
/// let p = Point::from_arg("3,-4").unwrap();
/// assert_eq!(p, Point { x: 3, y: -4 });
/// assert_eq!(Point::from_arg(&p.to_arg()), Some(p));
/// ```
pub trait ArgValue: Any + Clone + PartialEq + fmt::Debug {
	/// # From Argument.
	///
	/// Parse the raw text, returning `None` if it isn't valid for the type.
	fn from_arg(raw: &str) -> Option<Self>;

	/// # To Argument.
	///
	/// Return the text form of the value. Feeding this back through
	/// [`ArgValue::from_arg`] should yield an equal value.
	fn to_arg(&self) -> String;

	/// # Display Form.
	///
	/// This is how the value is shown in help screens and error messages.
	/// It defaults to [`ArgValue::to_arg`].
	fn display_arg(&self) -> String { self.to_arg() }

	/// # Equality.
	///
	/// Used when checking values against an argument's choices.
	fn arg_eq(&self, other: &Self) -> bool { self == other }
}

/// # Helper: `ArgValue` for `FromStr`/`Display` types.
macro_rules! from_str {
	($($ty:ty),+ $(,)?) => ($(
		impl ArgValue for $ty {
			#[inline]
			fn from_arg(raw: &str) -> Option<Self> { raw.parse().ok() }

			#[inline]
			fn to_arg(&self) -> String { self.to_string() }
		}
	)+);
}

from_str!(
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	f32, f64,
	bool,
);

impl ArgValue for char {
	/// # From Argument.
	///
	/// The text must be exactly one character.
	fn from_arg(raw: &str) -> Option<Self> {
		let mut chars = raw.chars();
		let c = chars.next()?;
		if chars.next().is_none() { Some(c) }
		else { None }
	}

	fn to_arg(&self) -> String { self.to_string() }
}

impl ArgValue for String {
	#[inline]
	fn from_arg(raw: &str) -> Option<Self> { Some(raw.to_owned()) }

	#[inline]
	fn to_arg(&self) -> String { self.clone() }

	/// # Display Form.
	///
	/// Strings are quoted so blanks and look-alike numbers stand out.
	fn display_arg(&self) -> String { format!("\"{self}\"") }
}

impl ArgValue for PathBuf {
	#[inline]
	fn from_arg(raw: &str) -> Option<Self> { Some(Self::from(raw)) }

	#[inline]
	fn to_arg(&self) -> String { self.to_string_lossy().into_owned() }
}



/// # Erased Value.
///
/// This is the object-safe subset of behaviors [`Value`] needs from whatever
/// it is holding.
trait Erased: Any + fmt::Debug {
	/// # Clone (Boxed).
	fn clone_box(&self) -> Box<dyn Erased>;

	/// # As Any.
	fn as_any(&self) -> &dyn Any;

	/// # As Any (Mut).
	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// # Type Name.
	fn type_name(&self) -> &'static str;
}

impl<T: Any + Clone + fmt::Debug> Erased for T {
	fn clone_box(&self) -> Box<dyn Erased> { Box::new(self.clone()) }
	fn as_any(&self) -> &dyn Any { self }
	fn as_any_mut(&mut self) -> &mut dyn Any { self }
	fn type_name(&self) -> &'static str { type_name::<T>() }
}



#[derive(Debug, Default)]
/// # Value Holder.
///
/// A `Value` is either empty or holds exactly one value of some concrete
/// type. Sequence-valued arguments (`nargs`, `append`) hold a `Vec<T>`.
///
/// Extraction is type-checked; asking for the wrong type is an error rather
/// than a silent default.
///
/// ## Examples
///
/// ```
/// use argspec::Value;
///
/// let v = Value::new(9_i32);
/// assert_eq!(v.get::<i32>(), Ok(&9));
/// assert!(v.get::<u8>().is_err());
///
/// assert!(Value::empty().is_empty());
/// ```
pub struct Value(Option<Box<dyn Erased>>);

impl Clone for Value {
	fn clone(&self) -> Self {
		Self(self.0.as_deref().map(Erased::clone_box))
	}
}

impl Value {
	#[must_use]
	/// # New.
	pub fn new<T: Any + Clone + fmt::Debug>(value: T) -> Self {
		Self(Some(Box::new(value)))
	}

	#[must_use]
	/// # Empty.
	pub const fn empty() -> Self { Self(None) }

	#[must_use]
	/// # Is Empty?
	pub const fn is_empty(&self) -> bool { self.0.is_none() }

	#[must_use]
	/// # Has Value?
	pub const fn is_some(&self) -> bool { self.0.is_some() }

	#[must_use]
	/// # Holds a `T`?
	pub fn is<T: Any>(&self) -> bool {
		self.0.as_deref().is_some_and(|v| v.as_any().is::<T>())
	}

	#[must_use]
	/// # Held Type Name.
	///
	/// Return the name of the held type, or `"()"` if empty.
	pub fn type_name(&self) -> &'static str {
		self.0.as_deref().map_or("()", Erased::type_name)
	}

	/// # Get.
	///
	/// Return a reference to the held value.
	///
	/// ## Errors
	///
	/// This will return an error if the holder is empty or holds a different
	/// type.
	pub fn get<T: Any>(&self) -> Result<&T, ArgspecError> {
		self.0.as_deref()
			.and_then(|v| v.as_any().downcast_ref::<T>())
			.ok_or_else(|| self.wrong_type::<T>())
	}

	/// # Get (Mut).
	///
	/// Return a mutable reference to the held value.
	///
	/// ## Errors
	///
	/// This will return an error if the holder is empty or holds a different
	/// type.
	pub fn get_mut<T: Any>(&mut self) -> Result<&mut T, ArgspecError> {
		let held = self.type_name();
		self.0.as_deref_mut()
			.and_then(|v| v.as_any_mut().downcast_mut::<T>())
			.ok_or(ArgspecError::WrongType { requested: type_name::<T>(), held })
	}

	/// # Wrong Type Error.
	fn wrong_type<T>(&self) -> ArgspecError {
		ArgspecError::WrongType {
			requested: type_name::<T>(),
			held: self.type_name(),
		}
	}
}



#[derive(Clone, Copy)]
/// # Type Capabilities.
///
/// This is a hand-rolled vtable of everything the parser needs to do with the
/// values of a given [`ArgValue`] type, without knowing what that type is.
///
/// Sequences are always `Vec<T>`.
pub(crate) struct Capability {
	/// # Type Name.
	name: &'static str,

	/// # Sequence Type Name.
	seq_name: &'static str,

	/// # Type Check.
	accepts: fn(&Value) -> bool,

	/// # Type Check (Sequence).
	accepts_seq: fn(&Value) -> bool,

	/// # Parse.
	from_text: fn(&str) -> Option<Value>,

	/// # Render (Round-Trip).
	to_text: fn(&Value) -> String,

	/// # Render (Display).
	render: fn(&Value) -> String,

	/// # Compare.
	equal: fn(&Value, &Value) -> bool,

	/// # Collect Into a Sequence.
	collect: fn(Vec<Value>) -> Value,

	/// # Append to a Sequence.
	append: fn(Value, &mut Value),

	/// # Sequence Length.
	len: fn(&Value) -> usize,
}

impl fmt::Debug for Capability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Capability").field(&self.name).finish()
	}
}

impl Default for Capability {
	#[inline]
	fn default() -> Self { Self::of::<String>() }
}

impl Capability {
	#[must_use]
	/// # Capabilities For `T`.
	pub(crate) fn of<T: ArgValue>() -> Self {
		Self {
			name: type_name::<T>(),
			seq_name: type_name::<Vec<T>>(),
			accepts: |v| v.is::<T>(),
			accepts_seq: |v| v.is::<Vec<T>>(),
			from_text: |s| T::from_arg(s).map(Value::new),
			to_text: |v| v.get::<T>().map_or_else(|_| format!("{v:?}"), T::to_arg),
			render: |v| v.get::<T>().map_or_else(|_| format!("{v:?}"), T::display_arg),
			equal: |a, b| match (a.get::<T>(), b.get::<T>()) {
				(Ok(a), Ok(b)) => a.arg_eq(b),
				_ => false,
			},
			collect: |values| Value::new(
				values.iter()
					.filter_map(|v| v.get::<T>().ok().cloned())
					.collect::<Vec<T>>()
			),
			append: |value, values| {
				let Ok(value) = value.get::<T>().cloned() else { return; };
				if let Ok(seq) = values.get_mut::<Vec<T>>() { seq.push(value); }
				else { *values = Value::new(vec![value]); }
			},
			len: |v| v.get::<Vec<T>>().map_or(0, Vec::len),
		}
	}

	#[must_use]
	/// # Type Name.
	pub(crate) const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Sequence Type Name.
	pub(crate) const fn seq_name(&self) -> &'static str { self.seq_name }

	#[must_use]
	/// # Holds the Right Type?
	pub(crate) fn accepts(&self, value: &Value) -> bool { (self.accepts)(value) }

	#[must_use]
	/// # Holds the Right Sequence Type?
	pub(crate) fn accepts_seq(&self, value: &Value) -> bool { (self.accepts_seq)(value) }

	#[must_use]
	/// # Parse.
	pub(crate) fn from_text(&self, raw: &str) -> Option<Value> { (self.from_text)(raw) }

	#[must_use]
	/// # Render (Round-Trip).
	pub(crate) fn to_text(&self, value: &Value) -> String { (self.to_text)(value) }

	#[must_use]
	/// # Render (Display).
	pub(crate) fn render(&self, value: &Value) -> String { (self.render)(value) }

	#[must_use]
	/// # Equal?
	pub(crate) fn equal(&self, a: &Value, b: &Value) -> bool { (self.equal)(a, b) }

	#[must_use]
	/// # Collect.
	pub(crate) fn collect(&self, values: Vec<Value>) -> Value { (self.collect)(values) }

	/// # Append.
	///
	/// Push `value` onto the sequence in `values`, starting a new one if
	/// `values` is empty.
	pub(crate) fn append(&self, value: Value, values: &mut Value) { (self.append)(value, values); }

	#[must_use]
	/// # Length.
	pub(crate) fn len(&self, values: &Value) -> usize { (self.len)(values) }
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_value_holder() {
		let mut v = Value::new(5_i32);
		assert!(v.is_some());
		assert!(v.is::<i32>());
		assert!(! v.is::<i64>());
		assert_eq!(v.type_name(), "i32");

		*v.get_mut::<i32>().expect("Missing i32.") += 1;
		assert_eq!(v.get::<i32>(), Ok(&6));

		// Clones are deep.
		let v2 = v.clone();
		*v.get_mut::<i32>().expect("Missing i32.") += 1;
		assert_eq!(v2.get::<i32>(), Ok(&6));

		assert_eq!(
			v.get::<String>(),
			Err(ArgspecError::WrongType { requested: type_name::<String>(), held: "i32" }),
		);

		let empty = Value::empty();
		assert!(empty.is_empty());
		assert_eq!(
			empty.get::<bool>(),
			Err(ArgspecError::WrongType { requested: "bool", held: "()" }),
		);
	}

	#[test]
	fn t_from_arg() {
		assert_eq!(i32::from_arg("9"), Some(9));
		assert_eq!(i32::from_arg("-65"), Some(-65));
		assert_eq!(i32::from_arg("x"), None);
		assert_eq!(i32::from_arg("10gibberish"), None);
		assert_eq!(u8::from_arg("-1"), None);
		assert_eq!(f64::from_arg("1.125"), Some(1.125));
		assert_eq!(char::from_arg("A"), Some('A'));
		assert_eq!(char::from_arg("AB"), None);
		assert_eq!(char::from_arg(""), None);
		assert_eq!(bool::from_arg("true"), Some(true));
		assert_eq!(String::from_arg("-weird"), Some("-weird".to_owned()));
		assert_eq!(PathBuf::from_arg("/foo/bar"), Some(PathBuf::from("/foo/bar")));
	}

	#[test]
	fn t_round_trip() {
		fn check<T: ArgValue>(values: &[T]) {
			for v in values {
				assert_eq!(T::from_arg(&v.to_arg()).as_ref(), Some(v), "Round trip failed: {v:?}");
			}
		}

		check(&[0_i8, -128, 127]);
		check(&[0_u16, 65_535]);
		check(&[i64::MIN, -1, 0, i64::MAX]);
		check(&[0.125_f32, -1.5, 65.0]);
		check(&[0.125_f64, 1e300, -0.0]);
		check(&['a', 'Z', '-', 'ö']);
		check(&[true, false]);
		check(&[String::new(), "foo bar".to_owned(), "\"quoted\"".to_owned()]);
		check(&[PathBuf::from("/tmp/file.txt")]);
	}

	#[test]
	fn t_display() {
		assert_eq!("foo".to_owned().display_arg(), "\"foo\"");
		assert_eq!(0.125_f64.display_arg(), "0.125");
		assert_eq!(65.0_f64.display_arg(), "65");
	}

	#[test]
	fn t_capability() {
		let cap = Capability::of::<i32>();
		assert_eq!(cap.name(), "i32");

		let a = cap.from_text("23").expect("Failed to parse 23.");
		let b = cap.from_text("34").expect("Failed to parse 34.");
		assert!(cap.accepts(&a));
		assert!(! cap.accepts(&Value::new("23".to_owned())));
		assert!(cap.accepts_seq(&Value::new(vec![23_i32])));
		assert!(! cap.accepts_seq(&a));
		assert_eq!(cap.seq_name(), type_name::<Vec<i32>>());
		assert!(cap.from_text("3.5").is_none());
		assert_eq!(cap.to_text(&a), "23");
		assert!(cap.equal(&a, &a.clone()));
		assert!(! cap.equal(&a, &b));
		assert!(! cap.equal(&a, &Value::new(23_i64)));

		// Sequences.
		let mut seq = cap.collect(vec![a.clone(), b.clone()]);
		assert_eq!(seq.get::<Vec<i32>>(), Ok(&vec![23, 34]));
		assert_eq!(cap.len(&seq), 2);
		cap.append(a, &mut seq);
		assert_eq!(seq.get::<Vec<i32>>(), Ok(&vec![23, 34, 23]));
		assert_eq!(cap.len(&seq), 3);

		// Appending to nothing starts a new sequence.
		let mut seq = Value::empty();
		cap.append(b, &mut seq);
		assert_eq!(seq.get::<Vec<i32>>(), Ok(&vec![34]));

		// Strings render quoted.
		let cap = Capability::default();
		let s = cap.from_text("foo").expect("Strings always parse.");
		assert_eq!(cap.to_text(&s), "foo");
		assert_eq!(cap.render(&s), "\"foo\"");
		assert_eq!(cap.len(&Value::empty()), 0);
	}
}
