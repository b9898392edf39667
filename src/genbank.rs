use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::FinderError;

/// One `GBXref` entry: a foreign database name paired with an id in that
/// database. Either side may be missing in the wild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GbXref {
    pub dbname: Option<String>,
    pub id: Option<String>,
}

/// One `GBSeq` record from an efetch GBSet document, reduced to the only
/// field the lookup consults. `xrefs` distinguishes an absent `GBSeq_xrefs`
/// element (`None`) from a present-but-empty one (`Some(vec![])`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GbSeq {
    pub xrefs: Option<Vec<GbXref>>,
}

/// Parse the `GBSeq` records out of a GBSet document, keeping only their
/// cross-reference collections. Every other GBSeq field is skipped, as is
/// the DOCTYPE declaration NCBI prepends.
pub fn parse_gb_set(xml: &str) -> Result<Vec<GbSeq>, FinderError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut current_record: Option<GbSeq> = None;
    let mut current_xref: Option<GbXref> = None;
    let mut in_dbname = false;
    let mut in_id = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) => match element.name().as_ref() {
                b"GBSeq" => current_record = Some(GbSeq::default()),
                b"GBSeq_xrefs" => {
                    if let Some(record) = current_record.as_mut() {
                        record.xrefs = Some(Vec::new());
                    }
                }
                b"GBXref" => current_xref = Some(GbXref::default()),
                b"GBXref_dbname" if current_xref.is_some() => in_dbname = true,
                b"GBXref_id" if current_xref.is_some() => in_id = true,
                _ => {}
            },
            Ok(Event::Empty(element)) => {
                if element.name().as_ref() == b"GBSeq_xrefs" {
                    if let Some(record) = current_record.as_mut() {
                        record.xrefs = Some(Vec::new());
                    }
                }
            }
            Ok(Event::Text(text)) if in_dbname || in_id => {
                let value = text
                    .unescape()
                    .map_err(|err| FinderError::XmlParse(err.to_string()))?
                    .into_owned();
                if let Some(xref) = current_xref.as_mut() {
                    if in_dbname {
                        xref.dbname = Some(value);
                    } else {
                        xref.id = Some(value);
                    }
                }
            }
            Ok(Event::End(element)) => match element.name().as_ref() {
                b"GBXref_dbname" => in_dbname = false,
                b"GBXref_id" => in_id = false,
                b"GBXref" => {
                    if let Some(xref) = current_xref.take() {
                        if let Some(xrefs) = current_record.as_mut().and_then(|r| r.xrefs.as_mut())
                        {
                            xrefs.push(xref);
                        }
                    }
                }
                b"GBSeq" => {
                    if let Some(record) = current_record.take() {
                        records.push(record);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(FinderError::XmlParse(err.to_string())),
            _ => {}
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_xrefs_keeps_none() {
        let xml = r#"<GBSet><GBSeq>
            <GBSeq_locus>JATTDF010000090</GBSeq_locus>
            <GBSeq_length>4276</GBSeq_length>
            </GBSeq></GBSet>"#;
        let records = parse_gb_set(xml).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].xrefs.is_none());
    }
}
