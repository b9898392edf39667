use std::fmt;

/// Protein sequence record identifier in the NCBI protein database.
///
/// Inputs are taken as supplied (trimmed, never validated); an accession the
/// service does not know simply resolves to a failure outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProteinAccession(String);

impl ProteinAccession {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProteinAccession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Genome assembly accession, carried verbatim from the matched
/// cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyAccession(String);

impl AssemblyAccession {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssemblyAccession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classified reasons a lookup produced no assembly accession.
///
/// The `Display` strings are the report's diagnostic vocabulary; downstream
/// tooling matches on them, so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// Any error anywhere in the lookup, transport and parsing included.
    NoInformation,
    /// The link group (or the whole elink response) carried no links.
    NoLink,
    /// The first link carried no nucleotide record id.
    NoNucleotideId,
    /// The first nucleotide record has no cross-reference collection.
    NoXrefs,
    /// The first cross-reference has no database name.
    NoXrefDbname,
    /// The first cross-reference points at a database other than Assembly.
    NotAssembly,
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            LookupFailure::NoInformation => "No Nucleotide Information, Error Level 0",
            LookupFailure::NoLink => "No Link to Database, Error Level 0.25",
            LookupFailure::NoNucleotideId => "No Nucleotide ID, Error Level 0.5",
            LookupFailure::NoXrefs => "No RefSeq Genome Accession, Error Level 1",
            LookupFailure::NoXrefDbname => "No RefSeq Genome Accession, Error Level 2",
            LookupFailure::NotAssembly => "No RefSeq Genome Accession, Error Level 3",
        };
        write!(f, "{message}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Assembly(AssemblyAccession),
    Failed(LookupFailure),
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupOutcome::Assembly(accession) => write!(f, "{accession}"),
            LookupOutcome::Failed(failure) => write!(f, "{failure}"),
        }
    }
}

/// One line of the report: the input accession paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub accession: ProteinAccession,
    pub outcome: LookupOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protein_accession_is_trimmed() {
        let accession = ProteinAccession::new("  AQT80856.1 ");
        assert_eq!(accession.as_str(), "AQT80856.1");
    }

    #[test]
    fn failure_diagnostics_are_stable() {
        let expected = [
            (
                LookupFailure::NoInformation,
                "No Nucleotide Information, Error Level 0",
            ),
            (
                LookupFailure::NoLink,
                "No Link to Database, Error Level 0.25",
            ),
            (
                LookupFailure::NoNucleotideId,
                "No Nucleotide ID, Error Level 0.5",
            ),
            (
                LookupFailure::NoXrefs,
                "No RefSeq Genome Accession, Error Level 1",
            ),
            (
                LookupFailure::NoXrefDbname,
                "No RefSeq Genome Accession, Error Level 2",
            ),
            (
                LookupFailure::NotAssembly,
                "No RefSeq Genome Accession, Error Level 3",
            ),
        ];
        for (failure, message) in expected {
            assert_eq!(failure.to_string(), message);
        }
    }

    #[test]
    fn outcome_displays_accession_verbatim() {
        let outcome = LookupOutcome::Assembly(AssemblyAccession::new("GCA_002005165.1"));
        assert_eq!(outcome.to_string(), "GCA_002005165.1");
    }
}
