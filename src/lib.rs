pub mod accessions;
pub mod app;
pub mod domain;
pub mod entrez;
pub mod error;
pub mod genbank;
pub mod output;
