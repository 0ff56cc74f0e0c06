use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;

fn main() -> Result<()> {
    let args = conferir::args::parsed()?;

    if io::stdout().is_terminal() {
        conferir::run(&args.bets, &args.result, io::stdout().lock())?;
    } else {
        conferir::run(&args.bets, &args.result, io::BufWriter::new(io::stdout().lock()))?;
    };
    Ok(())
}
