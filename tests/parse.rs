use anyhow::Result;
use argscan::{ArgParser, Error, Name, Opt, OptionKind};

#[test]
fn flag_and_inline_value_with_positional() -> Result<()> {
    let mut parser = ArgParser::new("copy");
    parser.register(Opt::flag('v', "verbose"))?;
    parser.register(Opt::with_names('o', "output", OptionKind::RequiredArgument).metavar("FILE"))?;

    parser.parse(["-v", "--output=out.txt", "input.txt"])?;

    assert!(parser.value_as::<bool>('v')?);
    assert_eq!(parser.value("output")?, Some("out.txt"));
    assert_eq!(parser.positionals(), ["input.txt"]);
    Ok(())
}

#[test]
fn cluster_ending_in_a_value_taking_option() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(Opt::flag('f', "force"))?;
    parser.register(Opt::with_names('t', "timeout", OptionKind::RequiredArgument))?;

    parser.parse(["-ft", "5", "x"])?;

    assert!(parser.value_as::<bool>('f')?);
    assert_eq!(parser.value("timeout")?, Some("5"));
    assert_eq!(parser.value_as::<u64>('t')?, 5);
    assert_eq!(parser.positionals(), ["x"]);
    Ok(())
}

#[test]
fn everything_after_the_terminator_is_positional() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(Opt::flag('v', "verbose"))?;

    parser.parse(["--", "-v", "x"])?;

    assert_eq!(parser.positionals(), ["-v", "x"]);
    assert!(!parser.value_as::<bool>('v')?);
    Ok(())
}

#[test]
fn abbreviation_resolves_or_fails_loudly() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(Opt::long("format", OptionKind::RequiredArgument))?;
    parser.register(Opt::long("force", OptionKind::NoArgument))?;
    parser.register(Opt::long("quiet", OptionKind::NoArgument))?;

    parser.parse(["--q", "--form=json"])?;
    assert_eq!(parser.value("quiet")?, Some("true"));
    assert_eq!(parser.value("format")?, Some("json"));

    let err = parser.parse(["--for"]).unwrap_err();
    assert_eq!(err, Error::AmbiguousOption("for".to_string()));
    Ok(())
}

#[test]
fn query_by_either_name_form() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(Opt::with_names('n', "count", OptionKind::RequiredArgument))?;
    parser.parse(["-n", "3"])?;

    assert!(parser.has_value('n')?);
    assert!(parser.has_value("count")?);
    assert_eq!(parser.value_as::<u8>('n')?, parser.value_as::<u8>("count")?);

    let err = parser.has_value("missing").unwrap_err();
    assert_eq!(err, Error::UnknownOption(Name::Long("missing".to_string())));
    Ok(())
}

#[test]
fn help_switch_reads_back_as_a_bool() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register_help()?;

    assert!(!parser.value_as::<bool>("help")?);
    parser.parse(["-h"])?;
    assert!(parser.value_as::<bool>("help")?);
    Ok(())
}

#[test]
fn defaults_survive_an_untouched_parse() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(
        Opt::with_names('l', "level", OptionKind::RequiredArgument).default_value("info"),
    )?;

    parser.parse(["positional"])?;
    assert_eq!(parser.value("level")?, Some("info"));

    parser.parse(["--level=debug"])?;
    assert_eq!(parser.value("level")?, Some("debug"));
    // Parsing overwrites the current value, not the declared default.
    let level = parser.registry().get_long("level")?;
    assert_eq!(level.default(), Some("info"));
    Ok(())
}

#[test]
fn custom_converter_handles_absence_itself() -> Result<()> {
    let mut parser = ArgParser::new("run");
    parser.register(Opt::long("jobs", OptionKind::OptionalArgument))?;

    let jobs = parser.value_with("jobs", |v| match v {
        Some(n) => n.parse::<usize>().unwrap_or(1),
        None => 1,
    })?;
    assert_eq!(jobs, 1);

    parser.parse(["--jobs=8"])?;
    let jobs = parser.value_with("jobs", |v| match v {
        Some(n) => n.parse::<usize>().unwrap_or(1),
        None => 1,
    })?;
    assert_eq!(jobs, 8);
    Ok(())
}
