/*!
# Argspec: Point

Parse custom types straight from the command line.

```bash
cargo run --example point -- 1,2 3,4
cargo run --example point -- 1,2 3,4 5,6 --origin=-1,-1
```
*/

use argspec::{
	ArgValue,
	Argument,
	ArgumentParser,
	ArgspecError,
	Nargs,
};
use tracing_subscriber::EnvFilter;



#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// # Point.
struct Point {
	/// # X.
	x: i32,

	/// # Y.
	y: i32,
}

impl ArgValue for Point {
	fn from_arg(raw: &str) -> Option<Self> {
		let (x, y) = raw.split_once(',')?;
		Some(Self {
			x: x.trim().parse().ok()?,
			y: y.trim().parse().ok()?,
		})
	}

	fn to_arg(&self) -> String { format!("{},{}", self.x, self.y) }
}

impl Point {
	/// # Manhattan Distance.
	const fn distance(self, other: Self) -> u32 {
		self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
	}
}



fn main() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.compact()
		.init();

	let mut parser = ArgumentParser::new()
		.with_description("Walk a path of points, one Manhattan block at a time.");

	if let Err(e) = build(&mut parser) {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(1);
	}

	let Ok(params) = parser.parse_env() else { return; };
	let (Ok(origin), Ok(points)) = (
		params.get_value::<Point>("origin"),
		params.get_value::<Vec<Point>>("points"),
	) else { return; };

	let mut last = origin;
	let mut total = 0_u32;
	for p in points {
		let step = last.distance(p);
		println!("({}) -> ({}): \x1b[2m{step}\x1b[0m", last.to_arg(), p.to_arg());
		total = total.saturating_add(step);
		last = p;
	}

	println!("\x1b[1mTotal:\x1b[0m {total}");
}

/// # Build Parser.
fn build(parser: &mut ArgumentParser) -> Result<(), ArgspecError> {
	parser
		.add_argument(
			Argument::new(["-o", "--origin"])
				.value_type::<Point>()
				.default_value(Point::default())
				.metavar("X,Y")
				.help("where to start")
		)?
		.add_argument(
			Argument::new("points")
				.value_type::<Point>()
				.nargs(Nargs::OneOrMore)
				.metavar("X,Y")
				.help("points to visit")
		)?;
	Ok(())
}
