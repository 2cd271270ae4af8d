use clap::Parser;

use bistro_report::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    bistro_observability::init_with(cli.log_format());

    let output = run(&cli)?;
    print!("{output}");
    Ok(())
}
