/*!
# Argspec: Power

Raise one number to the power of another, with either more or less chatter.

```bash
cargo run --example power -- 2 8
cargo run --example power -- 2 8 -v
cargo run --example power -- 2 8 -vq
```
*/

use argspec::{
	Action,
	Argument,
	ArgumentParser,
	ArgspecError,
	Parameters,
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

	let mut parser = match parser() {
		Ok(p) => p,
		Err(e) => {
			eprintln!("\x1b[1;91mError:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	let Ok(params) = parser.parse_env() else { return; };
	if let Err(e) = run(&params) {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(1);
	}
}

/// # Build Parser.
fn parser() -> Result<ArgumentParser, ArgspecError> {
	let mut parser = ArgumentParser::new()
		.with_description("calculate X to the power of Y")
		.with_epilog("Exponents beyond 31 are clamped.");
	let group = parser.add_mutually_exclusive_group();

	parser
		.add_argument(Argument::new(["-v", "--verbose"]).action(Action::StoreTrue).group(group))?
		.add_argument(Argument::new(["-q", "--quiet"]).action(Action::StoreTrue).group(group))?
		.add_argument(Argument::new("x").value_type::<i64>().help("the base"))?
		.add_argument(Argument::new("y").value_type::<u32>().help("the exponent"))?;

	Ok(parser)
}

/// # Run.
fn run(params: &Parameters) -> Result<(), ArgspecError> {
	let x = params.get_value::<i64>("x")?;
	let y = params.get_value::<u32>("y")?;
	let answer = x.saturating_pow(y.min(31));

	if params.get_value::<bool>("quiet")? { println!("{answer}"); }
	else if params.get_value::<bool>("verbose")? {
		println!("{x} to the power {y} equals \x1b[1;92m{answer}\x1b[0m");
	}
	else { println!("{x}^{y} == {answer}"); }

	Ok(())
}
