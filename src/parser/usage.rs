use super::ArgParser;
use crate::option::{Opt, OptionKind};
use std::io::{self, Write};

pub(crate) fn write_usage(mut w: impl Write, parser: &ArgParser) -> io::Result<()> {
    if let Some(description) = &parser.description {
        writeln!(w, "{description}\n")?;
    }
    writeln!(w, "[Usage]")?;
    writeln!(w, "{} [Options ...] [Arguments ...]\n", parser.prog_name)?;
    writeln!(w, "[Options]")?;

    let indent = &parser.indent;
    for opt in parser.registry.iter() {
        write!(w, "{indent}")?;
        match (opt.short_name(), opt.long_name()) {
            (Some(short), None) => write_short_form(&mut w, short, opt)?,
            (None, Some(long)) => write_long_form(&mut w, long, opt)?,
            (Some(short), Some(long)) => {
                write_short_form(&mut w, short, opt)?;
                write!(w, ", ")?;
                write_long_form(&mut w, long, opt)?;
            }
            (None, None) => unreachable!("options carry at least one name"),
        }
        writeln!(w)?;
        writeln!(w, "{indent}{indent}{}", opt.description().unwrap_or(""))?;
    }
    w.flush()
}

fn write_short_form(mut w: impl Write, short: char, opt: &Opt) -> io::Result<()> {
    write!(w, "-{short}")?;
    if opt.kind() != OptionKind::NoArgument {
        write!(w, " {}", opt.metavar_name().unwrap_or(""))?;
    }
    Ok(())
}

fn write_long_form(mut w: impl Write, long: &str, opt: &Opt) -> io::Result<()> {
    write!(w, "--{long}")?;
    match opt.kind() {
        OptionKind::NoArgument => {}
        OptionKind::OptionalArgument => write!(w, "[={}]", opt.metavar_name().unwrap_or(""))?,
        OptionKind::RequiredArgument => write!(w, "={}", opt.metavar_name().unwrap_or(""))?,
    }
    Ok(())
}
