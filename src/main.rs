use anyhow::{Context, Result};
use clap::{Arg, Command};
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;
use uaigraph::FactorGraph;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            writeln!(
                buf,
                "{} [{}:{}] {}",
                record.level(),
                file,
                line,
                record.args()
            )
        })
        .init();
    let matches = Command::new("UAIGRAPH")
        .version("1.0")
        .about("Loads factor graphs from models in the UAI competition file format.")
        .arg(
            Arg::new("model_file")
                .value_name("FILE")
                .help("Path to the model file; reads standard input when omitted"),
        )
        .arg(
            Arg::new("print_tables")
                .long("print_tables")
                .help("Prints every factor table after loading")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let graph = match matches.get_one::<String>("model_file") {
        Some(path) => FactorGraph::from_file(path)
            .with_context(|| format!("failed to load model from '{}'", path))?,
        None => FactorGraph::from_stdin().context("failed to load model from standard input")?,
    };

    info!(
        "loaded {} network: {} variables, {} factors",
        graph.network_type(),
        graph.num_variables(),
        graph.num_factors()
    );
    for (id, variable) in graph.variables().iter().enumerate() {
        println!(
            "variable {}: cardinality {}, {} adjacent factors",
            id,
            variable.cardinality(),
            variable.neighbors.len()
        );
    }
    for (id, factor) in graph.factors().iter().enumerate() {
        println!(
            "factor {}: scope {:?}, table shape {:?}",
            id,
            factor.neighbors,
            factor.shape()
        );
        if matches.get_flag("print_tables") {
            println!("{}", factor.table);
        }
    }
    Ok(())
}
