use std::thread;
use std::time::Duration;

use crate::domain::{
    AssemblyAccession, LookupFailure, LookupOutcome, LookupResult, ProteinAccession,
};
use crate::entrez::EntrezClient;
use crate::error::FinderError;

/// Courtesy pause between accessions; NCBI allows three requests per second
/// without an API key.
pub const REQUEST_DELAY: Duration = Duration::from_millis(340);

pub struct App<C: EntrezClient> {
    entrez: C,
}

impl<C: EntrezClient> App<C> {
    pub fn new(entrez: C) -> Self {
        Self { entrez }
    }

    /// Resolve every accession sequentially, pausing `delay` between
    /// lookups. Results come back one per input, in input order.
    pub fn run(&self, accessions: &[ProteinAccession], delay: Duration) -> Vec<LookupResult> {
        let mut results = Vec::with_capacity(accessions.len());
        for (index, accession) in accessions.iter().enumerate() {
            results.push(self.resolve(accession));
            if index + 1 < accessions.len() {
                thread::sleep(delay);
            }
        }
        results
    }

    /// The lookup operation. Total over failures: every error is folded into
    /// the outcome, nothing propagates to the driver.
    pub fn resolve(&self, accession: &ProteinAccession) -> LookupResult {
        tracing::debug!(accession = %accession, "resolving genome assembly");
        let outcome = match self.lookup(accession) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::debug!(accession = %accession, error = %err, "lookup failed");
                LookupOutcome::Failed(LookupFailure::NoInformation)
            }
        };
        LookupResult {
            accession: accession.clone(),
            outcome,
        }
    }

    // Take-the-first-plausible-answer search: every decision point fires on
    // its first item, so later link groups, links, records, and
    // cross-references are never consulted. Only an empty record set or an
    // empty cross-reference list falls through to the next candidate.
    fn lookup(&self, accession: &ProteinAccession) -> Result<LookupOutcome, FinderError> {
        let link_sets = self.entrez.link_nucleotides(accession)?;
        if link_sets.is_empty() {
            return Ok(LookupOutcome::Failed(LookupFailure::NoLink));
        }
        for link_set in &link_sets {
            if link_set.links.is_empty() {
                return Ok(LookupOutcome::Failed(LookupFailure::NoLink));
            }
            for link in &link_set.links {
                let Some(nucleotide_id) = link.id.as_deref() else {
                    return Ok(LookupOutcome::Failed(LookupFailure::NoNucleotideId));
                };
                let records = self.entrez.fetch_nucleotide(nucleotide_id)?;
                for record in &records {
                    let Some(xrefs) = record.xrefs.as_deref() else {
                        return Ok(LookupOutcome::Failed(LookupFailure::NoXrefs));
                    };
                    for xref in xrefs {
                        let Some(dbname) = xref.dbname.as_deref() else {
                            return Ok(LookupOutcome::Failed(LookupFailure::NoXrefDbname));
                        };
                        if dbname != "Assembly" {
                            return Ok(LookupOutcome::Failed(LookupFailure::NotAssembly));
                        }
                        let id = xref.id.clone().ok_or(FinderError::MissingXrefId)?;
                        return Ok(LookupOutcome::Assembly(AssemblyAccession::new(id)));
                    }
                }
            }
        }
        Ok(LookupOutcome::Failed(LookupFailure::NoInformation))
    }
}
