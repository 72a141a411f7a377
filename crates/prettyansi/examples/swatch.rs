use std::io::{stdout, Result, Write};

use prettyansi::opt::Options;
use prettyansi::Colors;

fn main() -> Result<()> {
    let options = if std::env::args().any(|arg| arg == "--color=never") {
        Options::never()
    } else {
        Options::default()
    };

    let colors = Colors::with_options(options);
    let palette = colors.palette();
    let mut output = stdout().lock();

    writeln!(
        output,
        "{}{} color support: {} {}",
        palette.bright(),
        palette.black_on_white(),
        colors.supports_color(),
        palette.reset()
    )?;

    for (code, sequence) in palette.iter() {
        writeln!(
            output,
            "{}{:<36}{} {:?}",
            sequence,
            code.name(),
            palette.reset(),
            code.sequence()
        )?;
    }

    output.flush()
}
