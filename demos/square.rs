/*!
# Argspec: Square

Print the square of a number.

```bash
cargo run --example square -- 9
cargo run --example square -- 9 --verbose
cargo run --example square -- --help
```
*/

use argspec::{
	Action,
	Argument,
	ArgumentParser,
};
use tracing_subscriber::EnvFilter;



fn main() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.compact()
		.init();

	let mut parser = ArgumentParser::new()
		.with_description("Print the square of a number.");

	if let Err(e) = parser
		.add_argument(
			Argument::new("square")
				.value_type::<i32>()
				.help("display a square of a given number")
		)
		.and_then(|p| p.add_argument(
			Argument::new(["-v", "--verbose"])
				.action(Action::StoreTrue)
				.help("increase output verbosity")
		))
	{
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(1);
	}

	// Errors and help requests exit on their own.
	let Ok(params) = parser.parse_env() else { return; };
	let Ok(n) = params.get_value::<i32>("square") else { return; };
	let answer = i64::from(n) * i64::from(n);

	if params.get_value::<bool>("verbose").unwrap_or(false) {
		println!("the square of \x1b[1m{n}\x1b[0m equals \x1b[1;92m{answer}\x1b[0m");
	}
	else { println!("{answer}"); }
}
