//! A GNU-getopt style command line option parser
//!
//! This crate parses command lines of the form:
//! ```text
//! myprog -v --output=out.txt input.txt
//! myprog -vo out.txt -- input.txt
//! ```
//!
//! Supported syntax:
//!
//! Form | Meaning
//! -|-
//! `-x` | Short option. Clusters with other short options (`-vx`)
//! `-o FILE` or `-oFILE` | Short option taking a value
//! `--name` | Long option
//! `--name=VALUE` or `--name VALUE` | Long option taking a value
//! `--na` | Abbreviated long option, as long as the prefix is unambiguous
//! `--` | End of options; everything after is a positional argument
//!
//! # Usage
//!
//! Declare options as [`Opt`]s, register them on an [`ArgParser`], parse, then query
//! values by short or long name:
//!
//! ```
//! use argscan::{ArgParser, Opt, OptionKind};
//!
//! let mut parser = ArgParser::new("myprog");
//! parser.register(Opt::flag('v', "verbose").describe("Print more")).unwrap();
//! parser.register(
//!     Opt::with_names('o', "output", OptionKind::RequiredArgument)
//!         .describe("Where to write")
//!         .metavar("FILE"),
//! ).unwrap();
//!
//! parser.parse(["-v", "--output=out.txt", "input.txt"]).unwrap();
//!
//! assert_eq!(parser.value_as::<bool>('v').unwrap(), true);
//! assert_eq!(parser.value("output").unwrap(), Some("out.txt"));
//! assert_eq!(parser.positionals(), ["input.txt"]);
//! ```

mod error;
mod option;
mod parser;
mod registry;

pub use error::{Error, Name};
pub use option::{Opt, OptionKind};
pub use parser::ArgParser;
pub use registry::OptionRegistry;
