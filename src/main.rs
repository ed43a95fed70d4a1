use anyhow::Result;
use html_timescan::{ cli::*, processing::*, };

fn main() -> Result<()> {

    let cli = Cli::args();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.level())
        .init();

    let input = Input::new(cli)?;

    let source = Source::load(&input.path)?;

    let matches = Extractor::new(input.matcher).extract(&source);

    println!("{matches}");

    Ok(())

}
