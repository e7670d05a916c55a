use crate::error::{Error, Name};
use crate::option::Opt;
use std::collections::HashMap;

/// The set of declared options.
///
/// Options are kept in registration order (this order drives usage rendering), with
/// two indexes for lookup by short and long name. The indexes store positions into
/// the option list, so an option reachable under both of its names is a single
/// record, not two copies.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    opts: Vec<Opt>,
    by_short: HashMap<char, usize>,
    by_long: HashMap<String, usize>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option to the registry.
    ///
    /// Fails with [`Error::DuplicateOption`] if either of the option's names is
    /// already taken, in which case the registry is left untouched.
    pub fn register(&mut self, opt: Opt) -> Result<(), Error> {
        if let Some(c) = opt.short_name() {
            if self.by_short.contains_key(&c) {
                return Err(Error::DuplicateOption(Name::Short(c)));
            }
        }
        if let Some(l) = opt.long_name() {
            if self.by_long.contains_key(l) {
                return Err(Error::DuplicateOption(Name::Long(l.to_string())));
            }
        }

        let idx = self.opts.len();
        if let Some(c) = opt.short_name() {
            self.by_short.insert(c, idx);
        }
        if let Some(l) = opt.long_name() {
            self.by_long.insert(l.to_string(), idx);
        }
        self.opts.push(opt);
        Ok(())
    }

    /// Registers the conventional `-h`/`--help` switch
    pub fn register_help(&mut self) -> Result<(), Error> {
        self.register(Opt::flag('h', "help").describe("Show help and exit this program"))
    }

    /// Looks up an option by its short name
    pub fn get_short(&self, short: char) -> Result<&Opt, Error> {
        self.index_of_short(short).map(|idx| &self.opts[idx])
    }

    /// Looks up an option by its exact long name
    pub fn get_long(&self, long: &str) -> Result<&Opt, Error> {
        self.index_of_long(long).map(|idx| &self.opts[idx])
    }

    /// Returns every option whose long name starts with `prefix`.
    ///
    /// An exact name is not preferred over longer names sharing the prefix: `foo`
    /// matches both `foo` and `foobar`, and the caller decides what to do with more
    /// than one match. Fails with [`Error::UnknownOption`] when nothing matches.
    pub fn find_long_prefix(&self, prefix: &str) -> Result<Vec<&Opt>, Error> {
        let matches = self
            .indices_of_long_prefix(prefix)?
            .into_iter()
            .map(|idx| &self.opts[idx])
            .collect();
        Ok(matches)
    }

    /// Iterates options in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Opt> {
        self.opts.iter()
    }

    pub fn len(&self) -> usize {
        self.opts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    pub(crate) fn index_of_short(&self, short: char) -> Result<usize, Error> {
        self.by_short
            .get(&short)
            .copied()
            .ok_or(Error::UnknownOption(Name::Short(short)))
    }

    pub(crate) fn index_of_long(&self, long: &str) -> Result<usize, Error> {
        self.by_long
            .get(long)
            .copied()
            .ok_or_else(|| Error::UnknownOption(Name::Long(long.to_string())))
    }

    pub(crate) fn indices_of_long_prefix(&self, prefix: &str) -> Result<Vec<usize>, Error> {
        let mut indices: Vec<usize> = self
            .by_long
            .iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, idx)| *idx)
            .collect();
        if indices.is_empty() {
            return Err(Error::UnknownOption(Name::Long(prefix.to_string())));
        }
        indices.sort_unstable();
        Ok(indices)
    }

    pub(crate) fn index_of(&self, name: &Name) -> Result<usize, Error> {
        match name {
            Name::Short(c) => self.index_of_short(*c),
            Name::Long(l) => self.index_of_long(l),
        }
    }

    pub(crate) fn opt(&self, idx: usize) -> &Opt {
        &self.opts[idx]
    }

    pub(crate) fn opt_mut(&mut self, idx: usize) -> &mut Opt {
        &mut self.opts[idx]
    }
}
