//! CircuitLab - circuit connectivity evaluator
//!
//! Loads a circuit from a text description (`.ckt`) or a snapshot export
//! (`.json`), runs one evaluation pass, and prints which components are
//! powered along with the diagnostics for those that are not.
//!
//! # Usage
//!
//! ```bash
//! circuitlab circuit.ckt
//! circuitlab export.json --mode AC --export evaluated.json
//! ```

use std::path::{Path, PathBuf};

use circuitlab_core::{
    circuit::{validate_circuit, Circuit, CurrentKind},
    dsl,
    error::Result,
    snapshot, Simulator,
};
use clap::Parser;

fn parse_mode(s: &str) -> std::result::Result<CurrentKind, String> {
    CurrentKind::from_str(s).ok_or_else(|| format!("'{}' is not AC or DC", s))
}

/// Circuit connectivity evaluator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit file (.ckt description or .json snapshot)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Override the circuit's supply mode (AC or DC)
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<CurrentKind>,

    /// Write the evaluated circuit to a snapshot file
    #[arg(short, long, value_name = "PATH")]
    export: Option<PathBuf>,
}

fn load_circuit(path: &Path) -> Result<Circuit> {
    let is_snapshot = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_snapshot {
        snapshot::read_file(path)
    } else {
        let ast = dsl::parse_file(path)?;
        Circuit::from_ast(ast)
    }
}

fn print_report(circuit: &Circuit) {
    println!("Supply mode: {}", circuit.current_kind);
    println!();

    for component in &circuit.components {
        let state = if component.powered {
            "POWERED"
        } else {
            "unpowered"
        };
        println!(
            "{:<12} {:<10} {}",
            component.id,
            component.kind.display_name(),
            state
        );
        if let Some(diagnostic) = &component.diagnostic {
            for issue in &diagnostic.issues {
                println!("{:<12} - {}", "", issue);
            }
            for fix in &diagnostic.fixes {
                println!("{:<12}   fix: {}", "", fix);
            }
        }
    }

    let powered = circuit.components.iter().filter(|c| c.powered).count();
    println!();
    println!("{} of {} components powered", powered, circuit.components.len());
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load the circuit file
    let mut circuit = load_circuit(&args.circuit_file)?;

    // Validate
    validate_circuit(&circuit)?;

    // Apply the mode override
    if let Some(mode) = args.mode {
        circuit.current_kind = mode;
    }

    // Evaluate
    let mut simulator = Simulator::new(circuit);
    simulator.start();

    print_report(simulator.circuit());

    if let Some(path) = &args.export {
        snapshot::write_file(path, simulator.circuit())?;
        println!("Snapshot written to {}", path.display());
    }

    Ok(())
}
