use std::time::Duration;

use quick_xml::Reader;
use quick_xml::events::Event;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::ProteinAccession;
use crate::error::FinderError;
use crate::genbank::{GbSeq, parse_gb_set};

const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Identity supplied to E-utilities on every request, per NCBI usage policy.
#[derive(Debug, Clone)]
pub struct EntrezConfig {
    pub email: String,
    pub tool: String,
    pub api_key: Option<String>,
}

impl EntrezConfig {
    pub fn new(email: impl Into<String>) -> Self {
        let api_key = std::env::var("NCBI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        Self {
            email: email.into(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            api_key,
        }
    }
}

/// A single cross-reference link to a nucleotide record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: Option<String>,
}

/// One `LinkSetDb` group from an elink response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSetDb {
    pub links: Vec<Link>,
}

pub trait EntrezClient: Send + Sync {
    /// elink protein→nucleotide: the link groups cross-referencing the given
    /// protein accession into the nucleotide database.
    fn link_nucleotides(
        &self,
        accession: &ProteinAccession,
    ) -> Result<Vec<LinkSetDb>, FinderError>;

    /// efetch of one nucleotide record as a GBSet document.
    fn fetch_nucleotide(&self, nucleotide_id: &str) -> Result<Vec<GbSeq>, FinderError>;
}

#[derive(Clone)]
pub struct EntrezHttpClient {
    client: Client,
    base_url: String,
    config: EntrezConfig,
}

impl EntrezHttpClient {
    pub fn new(config: EntrezConfig) -> Result<Self, FinderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("assembly-finder/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| FinderError::ClientConfig(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| FinderError::EntrezHttp(err.to_string()))?;
        Ok(Self {
            client,
            base_url: EUTILS_BASE_URL.to_string(),
            config,
        })
    }

    fn identity_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("tool", self.config.tool.as_str()),
            ("email", self.config.email.as_str()),
        ];
        if let Some(key) = self.config.api_key.as_deref() {
            params.push(("api_key", key));
        }
        params
    }

    fn get_text(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, FinderError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&self.identity_params())
            .send()
            .map_err(|err| FinderError::EntrezHttp(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Entrez request failed".to_string());
            return Err(FinderError::EntrezStatus { status, message });
        }
        response
            .text()
            .map_err(|err| FinderError::EntrezHttp(err.to_string()))
    }
}

impl EntrezClient for EntrezHttpClient {
    fn link_nucleotides(
        &self,
        accession: &ProteinAccession,
    ) -> Result<Vec<LinkSetDb>, FinderError> {
        let xml = self.get_text(
            "elink.fcgi",
            &[
                ("dbfrom", "protein"),
                ("db", "nucleotide"),
                ("id", accession.as_str()),
            ],
        )?;
        parse_link_sets(&xml)
    }

    fn fetch_nucleotide(&self, nucleotide_id: &str) -> Result<Vec<GbSeq>, FinderError> {
        let xml = self.get_text(
            "efetch.fcgi",
            &[
                ("db", "nucleotide"),
                ("id", nucleotide_id),
                ("rettype", "refseq"),
                ("retmode", "xml"),
            ],
        )?;
        parse_gb_set(&xml)
    }
}

/// Parse the `LinkSetDb` groups out of an elink response.
///
/// Only `Id` elements nested inside a `Link` count as link ids; the `IdList`
/// echoing the query ids at the top of each `LinkSet` is skipped. An empty
/// `Id` element is treated as absent.
pub fn parse_link_sets(xml: &str) -> Result<Vec<LinkSetDb>, FinderError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut link_sets = Vec::new();
    let mut current_set: Option<LinkSetDb> = None;
    let mut current_link: Option<Link> = None;
    let mut in_id = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"LinkSetDb" => current_set = Some(LinkSetDb { links: Vec::new() }),
                b"Link" if current_set.is_some() => current_link = Some(Link { id: None }),
                b"Id" if current_link.is_some() => in_id = true,
                _ => {}
            },
            Ok(Event::Text(text)) if in_id => {
                let value = text
                    .unescape()
                    .map_err(|err| FinderError::XmlParse(err.to_string()))?;
                let value = value.trim();
                if !value.is_empty() {
                    if let Some(link) = current_link.as_mut() {
                        link.id = Some(value.to_string());
                    }
                }
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"Id" => in_id = false,
                b"Link" => {
                    if let (Some(set), Some(link)) = (current_set.as_mut(), current_link.take()) {
                        set.links.push(link);
                    }
                }
                b"LinkSetDb" => {
                    if let Some(set) = current_set.take() {
                        link_sets.push(set);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(FinderError::XmlParse(err.to_string())),
            _ => {}
        }
    }

    Ok(link_sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_set_without_links_parses_empty() {
        let xml = r#"<eLinkResult><LinkSet><DbFrom>protein</DbFrom>
            <IdList><Id>2878761389</Id></IdList>
            <LinkSetDb><DbTo>nuccore</DbTo><LinkName>protein_nuccore</LinkName></LinkSetDb>
            </LinkSet></eLinkResult>"#;
        let sets = parse_link_sets(xml).unwrap();
        assert_eq!(sets.len(), 1);
        assert!(sets[0].links.is_empty());
    }
}
