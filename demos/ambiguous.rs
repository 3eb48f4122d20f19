use argtree::{CommandLineParser, CommandLineSpecification, ConsoleInterface, FlagSpecification};

fn main() {
    // Both flags claim '-x'.
    let specification = CommandLineSpecification::new()
        .flag(FlagSpecification::switch("Extract", "extract", Some('x')).unwrap())
        .unwrap()
        .flag(FlagSpecification::switch("Exclude", "exclude", Some('x')).unwrap())
        .unwrap()
        .multi_argument("Files")
        .unwrap();

    let parser = CommandLineParser::new(&specification);
    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let arguments: Vec<&str> = arguments.iter().map(AsRef::as_ref).collect();

    match parser.parse_tokens(&arguments) {
        Ok(outcome) => {
            println!("{} interpretation(s)", outcome.trees().len());

            for (i, tree) in outcome.trees().iter().enumerate() {
                println!("#{i}:");

                for (key, value) in argtree::collect(tree) {
                    println!("  {key} = {value}");
                }
            }
        }
        Err(failure) => {
            failure.report(&ConsoleInterface::default());
            std::process::exit(1);
        }
    }
}
