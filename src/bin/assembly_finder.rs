use std::process::ExitCode;

use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use assembly_finder::accessions::DEFAULT_PROTEIN_ACCESSIONS;
use assembly_finder::app::{App, REQUEST_DELAY};
use assembly_finder::domain::ProteinAccession;
use assembly_finder::entrez::{EntrezConfig, EntrezHttpClient};
use assembly_finder::output;

// Contact address sent with every E-utilities request, per NCBI usage policy.
const CONTACT_EMAIL: &str = "idamico@andrew.cmu.edu";

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = EntrezConfig::new(CONTACT_EMAIL);
    let entrez = EntrezHttpClient::new(config).into_diagnostic()?;
    let app = App::new(entrez);

    let accessions: Vec<ProteinAccession> = DEFAULT_PROTEIN_ACCESSIONS
        .iter()
        .map(|id| ProteinAccession::new(*id))
        .collect();

    let results = app.run(&accessions, REQUEST_DELAY);
    output::print_report(&results).into_diagnostic()?;
    Ok(())
}
