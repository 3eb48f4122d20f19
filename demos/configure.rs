use argtree::{
    CommandLineParser, CommandLineSpecification, FlagSpecification, StandardFlags,
    VerbSpecification,
};
use std::collections::BTreeMap;

fn main() {
    let remote = CommandLineSpecification::new()
        .verb(
            VerbSpecification::new(
                "Add",
                CommandLineSpecification::new()
                    .argument("Name")
                    .unwrap()
                    .argument("Url")
                    .unwrap(),
            )
            .unwrap(),
        )
        .unwrap()
        .verb(
            VerbSpecification::new(
                "Remove",
                CommandLineSpecification::new().argument("Name").unwrap(),
            )
            .unwrap(),
        )
        .unwrap();
    let specification = CommandLineSpecification::new()
        .standard_flags(StandardFlags::VERBOSE | StandardFlags::DRY_RUN)
        .unwrap()
        .flag(FlagSpecification::valued("Directory", "directory", Some('C')).unwrap())
        .unwrap()
        .verb(VerbSpecification::new("Remote", remote).unwrap())
        .unwrap()
        .verb(
            VerbSpecification::new(
                "Fetch",
                CommandLineSpecification::new()
                    .multi_argument("Remotes")
                    .unwrap(),
            )
            .unwrap(),
        )
        .unwrap();

    let parser = CommandLineParser::new(&specification);
    let outcome = parser.parse();
    let mut configuration: BTreeMap<String, String> = BTreeMap::default();
    outcome.apply(&mut configuration);

    for (key, value) in &configuration {
        println!("{key} = {value}");
    }

    if !outcome.remaining().is_empty() {
        println!("(passed through: {})", outcome.remaining().join(" "));
    }
}
