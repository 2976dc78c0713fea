use clap::Parser;
use safebox::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    safebox::logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::List => safebox::cli::commands::list::execute(&cli),
        Commands::Get { ref key } => safebox::cli::commands::get::execute(&cli, key),
        Commands::Set { ref assignments } => {
            safebox::cli::commands::set::execute(&cli, assignments)
        }
        Commands::Delete { ref keys } => safebox::cli::commands::delete::execute(&cli, keys),
        Commands::Completions { shell } => safebox::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        safebox::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
