use clap::Parser;
use lms_roles::{Cli, init_tracing, run_to_exit_code};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = std::io::stdout().lock();
    let code = run_to_exit_code(cli, &mut stdout);
    std::process::exit(code);
}
