use crate::error::{Error, Name};
use crate::option::{Opt, OptionKind};
use crate::registry::OptionRegistry;
use std::io::{self, Write};
use std::str::FromStr;

mod usage;

/// Parses a command line against a set of registered options.
///
/// The expected flow is: register options, [`parse`](ArgParser::parse) the argument
/// list once, then query values by short or long name. Tokens that are not options
/// (and not consumed as option values) accumulate in
/// [`positionals`](ArgParser::positionals) in encounter order.
///
/// A parse error aborts immediately; options matched by earlier tokens keep the
/// values they were given.
#[derive(Debug)]
pub struct ArgParser {
    prog_name: String,
    description: Option<String>,
    indent: String,
    registry: OptionRegistry,
    positionals: Vec<String>,
}

impl ArgParser {
    /// Creates a parser for the program named `prog_name` (shown in the usage text)
    pub fn new(prog_name: &str) -> Self {
        ArgParser {
            prog_name: prog_name.to_string(),
            description: None,
            indent: "  ".to_string(),
            registry: OptionRegistry::new(),
            positionals: Vec::new(),
        }
    }

    /// Sets the program description printed at the top of the usage text
    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.to_string());
    }

    /// Sets the indent string used in the usage text (two spaces by default)
    pub fn set_indent(&mut self, indent: &str) {
        self.indent = indent.to_string();
    }

    /// Adds an option. See [`OptionRegistry::register`]
    pub fn register(&mut self, opt: Opt) -> Result<(), Error> {
        self.registry.register(opt)
    }

    /// Registers the conventional `-h`/`--help` switch
    pub fn register_help(&mut self) -> Result<(), Error> {
        self.registry.register_help()
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Positional arguments collected so far, in encounter order
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Parses `tokens` as command line arguments. The input is expected to already
    /// exclude the program path (i.e. `std::env::args().skip(1)`).
    pub fn parse<I, T>(&mut self, tokens: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.into()).collect();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            if token == "--" {
                // End of options. Everything after the terminator is positional,
                // even tokens that look like options.
                self.positionals.extend(tokens[i + 1..].iter().cloned());
                return Ok(());
            }
            if let Some(body) = token.strip_prefix("--") {
                i = self.parse_long(&tokens, i, body)?;
            } else if token.len() > 1 && token.starts_with('-') {
                i = self.parse_short(&tokens, i)?;
            } else {
                self.positionals.push(token.clone());
            }
            i += 1;
        }
        Ok(())
    }

    /// Returns whether the named option currently holds a value
    pub fn has_value(&self, name: impl Into<Name>) -> Result<bool, Error> {
        Ok(self.raw_value(&name.into())?.is_some())
    }

    /// Returns the named option's current value, if any
    pub fn value(&self, name: impl Into<Name>) -> Result<Option<&str>, Error> {
        self.raw_value(&name.into())
    }

    /// Returns the named option's current value converted via [`FromStr`].
    ///
    /// Fails with [`Error::ValueEmpty`] if the option holds no value (neither parsed
    /// nor default) and [`Error::InvalidValue`] if the conversion rejects it.
    pub fn value_as<T>(&self, name: impl Into<Name>) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let name = name.into();
        let Some(value) = self.raw_value(&name)? else {
            return Err(Error::ValueEmpty(name));
        };
        value.parse().map_err(|err: T::Err| Error::InvalidValue {
            name,
            value: value.to_string(),
            cause: err.to_string(),
        })
    }

    /// Returns the named option's current value converted by `convert`.
    ///
    /// The converter receives the raw value, absent or not, and decides for itself
    /// what absence means. Only an unknown name fails here.
    pub fn value_with<T, F>(&self, name: impl Into<Name>, convert: F) -> Result<T, Error>
    where
        F: FnOnce(Option<&str>) -> T,
    {
        Ok(convert(self.raw_value(&name.into())?))
    }

    /// Writes the usage text for the registered options to `w`
    pub fn write_usage(&self, w: impl Write) -> io::Result<()> {
        usage::write_usage(w, self)
    }

    fn raw_value(&self, name: &Name) -> Result<Option<&str>, Error> {
        let idx = self.registry.index_of(name)?;
        Ok(self.registry.opt(idx).value())
    }

    // Parses the long option in tokens[idx] (with the leading `--` already stripped
    // off into `body`) and returns the index of the last token consumed.
    fn parse_long(&mut self, tokens: &[String], idx: usize, body: &str) -> Result<usize, Error> {
        let (name, inline) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let matches = self.registry.indices_of_long_prefix(name)?;
        if matches.len() > 1 {
            return Err(Error::AmbiguousOption(name.to_string()));
        }
        let opt_idx = matches[0];

        match self.registry.opt(opt_idx).kind() {
            OptionKind::NoArgument => {
                if let Some(value) = inline {
                    return Err(Error::DoesNotTakeArgument {
                        name: name.to_string(),
                        value: value.to_string(),
                    });
                }
                self.registry.opt_mut(opt_idx).set_value("true".to_string());
                Ok(idx)
            }
            OptionKind::OptionalArgument => {
                let value = inline.unwrap_or("true");
                self.registry.opt_mut(opt_idx).set_value(value.to_string());
                Ok(idx)
            }
            OptionKind::RequiredArgument => match inline {
                Some(value) => {
                    self.registry.opt_mut(opt_idx).set_value(value.to_string());
                    Ok(idx)
                }
                None => {
                    let Some(value) = tokens.get(idx + 1) else {
                        return Err(Error::MissingArgument(Name::Long(name.to_string())));
                    };
                    self.registry.opt_mut(opt_idx).set_value(value.clone());
                    Ok(idx + 1)
                }
            },
        }
    }

    // Parses the short option cluster in tokens[idx] and returns the index of the
    // last token consumed.
    fn parse_short(&mut self, tokens: &[String], idx: usize) -> Result<usize, Error> {
        let token = &tokens[idx];

        for (pos, c) in token.char_indices().skip(1) {
            let opt_idx = self.registry.index_of_short(c)?;
            if self.registry.opt(opt_idx).kind() == OptionKind::NoArgument {
                self.registry.opt_mut(opt_idx).set_value("true".to_string());
                continue;
            }

            // Required and optional arguments behave the same in short form: take
            // the remainder of this token, or failing that, the next token.
            let rest = &token[pos + c.len_utf8()..];
            if rest.is_empty() {
                let Some(value) = tokens.get(idx + 1) else {
                    return Err(Error::MissingArgument(Name::Short(c)));
                };
                self.registry.opt_mut(opt_idx).set_value(value.clone());
                return Ok(idx + 1);
            }
            self.registry.opt_mut(opt_idx).set_value(rest.to_string());
            return Ok(idx);
        }
        Ok(idx)
    }
}
