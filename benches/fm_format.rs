/*!
# Benchmark: `argspec` Help Formatting
*/

use argspec::{
	Action,
	Argument,
	ArgumentParser,
	Nargs,
};
use brunch::{
	Bench,
	benches,
};

fn parser() -> ArgumentParser {
	let mut parser = ArgumentParser::new()
		.with_prog("bench")
		.with_description("{prog} formats things")
		.with_epilog("That's all, folks.");
	let group = parser.add_mutually_exclusive_group();
	parser
		.add_argument(Argument::new(["-v", "--verbose"]).action(Action::StoreTrue).group(group).help("say more")).unwrap()
		.add_argument(Argument::new(["-q", "--quiet"]).action(Action::StoreTrue).group(group).help("say less")).unwrap()
		.add_argument(Argument::new(["-o", "--output-file"]).required().help("where {prog} writes")).unwrap()
		.add_argument(Argument::new("--level").value_type::<u8>().choices([1_u8, 2, 3])).unwrap()
		.add_argument(Argument::new("--version").version("{prog} 1.0")).unwrap()
		.add_argument(Argument::new("src").nargs(Nargs::OneOrMore).help("input files")).unwrap();
	parser
}

benches!(
	Bench::new("argspec::ArgumentParser::format_usage()")
		.run_seeded_with(parser, |p| p.format_usage()),

	Bench::new("argspec::ArgumentParser::format_help()")
		.run_seeded_with(parser, |p| p.format_help()),

	Bench::new("argspec::ArgumentParser::format_version()")
		.run_seeded_with(parser, |p| p.format_version()),
);
