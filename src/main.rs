mod chart;
mod cli;
mod csv_bridge;
mod db;
mod error;
mod fmt;
mod models;
mod settings;
mod store;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};
use settings::resolve_data_dir;

fn main() {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());

    let result = match cli.command {
        Commands::Init => cli::init::run(cli.data_dir.as_deref()),
        Commands::Add {
            amount,
            category,
            description,
            date,
        } => cli::add::run(&data_dir, amount, category, description, date),
        Commands::List => cli::list::run(&data_dir),
        Commands::Summary {
            from_date,
            to_date,
            group_by,
            chart,
        } => cli::summary::run(&data_dir, from_date, to_date, group_by, chart),
        Commands::Import { file } => cli::import::run(&data_dir, &file),
        Commands::Export {
            from_date,
            to_date,
            output,
        } => cli::export::run(&data_dir, from_date, to_date, output),
        Commands::Status => cli::status::run(&data_dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
