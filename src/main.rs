use clap::Parser;

use detector_audit::cli::{Cli, Commands};
use detector_audit::commands::{run_check, run_ci, run_init, run_names};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Names(args) => run_names(args, &cli),
        Commands::Ci(args) => run_ci(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
