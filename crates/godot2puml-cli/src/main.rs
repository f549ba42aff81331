//! godot2puml CLI - Generate PlantUML class diagrams from a Godot project

mod cli;

use clap::Parser;

fn main() {
    // Missing arguments print usage and exit non-zero here
    let cli_args = cli::Cli::parse();

    let mut app = cli::Godot2PumlApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
