use std::{env, process};

use scorediff::cli::{self, CliConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CliConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CliConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            println!("{err}");
            println!("{}", CliConfig::help());
            process::exit(2);
        }
    };
    if let Err(err) = cli::run(&config) {
        eprintln!("{err}");
        process::exit(1);
    }
}
