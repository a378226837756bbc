use clap::Parser;

use formatutils::app::render;
use formatutils::cli::Cli;
use formatutils::config::Config;
use formatutils::utils::set_debug;

fn main() {
    let cli = Cli::parse();

    // JSON output stays clean of the "Loaded config" notice
    let config = match Config::load(cli.config.as_deref(), cli.json) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    match render(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
