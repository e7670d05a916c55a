/// Whether an option takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// The option is a switch; its value becomes `"true"` when present.
    NoArgument,
    /// The option must be followed by a value (`--opt=v`, `--opt v`, `-ov`, `-o v`).
    RequiredArgument,
    /// The option may carry an inline value (`--opt=v`); without one it becomes `"true"`.
    OptionalArgument,
}

/// A declared command line option.
///
/// Every option carries at least one of a short name and a long name; the
/// constructors make it impossible to build one with neither. The current value
/// starts out equal to the default value and is overwritten during parsing.
#[derive(Debug, Clone)]
pub struct Opt {
    short: Option<char>,
    long: Option<String>,
    kind: OptionKind,
    description: Option<String>,
    metavar: Option<String>,
    default: Option<String>,
    value: Option<String>,
}

impl Opt {
    fn new(short: Option<char>, long: Option<String>, kind: OptionKind) -> Self {
        Opt {
            short,
            long,
            kind,
            description: None,
            metavar: None,
            default: None,
            value: None,
        }
    }

    /// Defines an option with a short name only
    pub fn short(name: char, kind: OptionKind) -> Self {
        Opt::new(Some(name), None, kind)
    }

    /// Defines an option with a long name only
    pub fn long(name: &str, kind: OptionKind) -> Self {
        Opt::new(None, Some(name.to_string()), kind)
    }

    /// Defines an option with both a short and a long name
    pub fn with_names(short: char, long: &str, kind: OptionKind) -> Self {
        Opt::new(Some(short), Some(long.to_string()), kind)
    }

    /// Defines a boolean switch with both names, defaulting to `"false"`
    pub fn flag(short: char, long: &str) -> Self {
        Opt::with_names(short, long, OptionKind::NoArgument).default_value("false")
    }

    /// Attaches a description, shown in the usage text
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Names the option's value in the usage text (e.g. `FILE` in `--output=FILE`)
    pub fn metavar(mut self, metavar: &str) -> Self {
        self.metavar = Some(metavar.to_string());
        self
    }

    /// Sets the value the option holds before parsing
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self.value = Some(default.to_string());
        self
    }

    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn metavar_name(&self) -> Option<&str> {
        self.metavar.as_deref()
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns the current value: whatever parsing stored, or else the default
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = Some(value);
    }
}
