use clap::{Arg, Command};
use netbind_dataset::Status;
use std::fs;

fn main() {
    env_logger::init();

    let matches = Command::new("netbind")
        .version("0.1.0")
        .about("Inspect external-solver result dumps")
        .subcommand(
            Command::new("inspect")
                .about("Parse a raw solver output file and summarize its vectors")
                .arg(Arg::new("file").required(true).help("Raw solver output file")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches.get_one::<String>("file").unwrap();
            let raw = match fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) => {
                    eprintln!("Failed to read {path}: {err}");
                    std::process::exit(1);
                }
            };

            let dataset = netbind_dataset::parse(&raw);

            println!("status: {}", status_label(dataset.status()));
            if let Some(version) = dataset.version() {
                println!("version: {version}");
            }
            for (name, vector) in dataset.vectors() {
                let kind = if vector.independent { "indep" } else { "dep" };
                if vector.dependencies.is_empty() {
                    println!("  {kind:6} {name} ({} values)", vector.values.len());
                } else {
                    println!(
                        "  {kind:6} {name} ({} values, over {})",
                        vector.values.len(),
                        vector.dependencies.join(", ")
                    );
                }
            }
            for warning in dataset.warnings() {
                println!("warning: {warning}");
            }
            for error in dataset.errors() {
                println!("error: {error}");
            }
            if dataset.is_err() {
                std::process::exit(1);
            }
        }
        _ => {
            eprintln!("No subcommand provided. Use 'inspect' to examine a result dump.");
            std::process::exit(1);
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Success => "success",
        Status::Error => "solver error",
        Status::ParseError => "parse error",
        Status::NotRun => "not run",
    }
}
