mod cli;
mod journal;
mod logging;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = cli::parse();
    runner::run(cli)
}
