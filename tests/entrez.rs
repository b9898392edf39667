use assembly_finder::entrez::parse_link_sets;

const ELINK_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>
<!DOCTYPE eLinkResult PUBLIC "-//NLM//DTD elink 20101123//EN" "https://eutils.ncbi.nlm.nih.gov/eutils/dtd/20101123/elink.dtd">
<eLinkResult>
  <LinkSet>
    <DbFrom>protein</DbFrom>
    <IdList>
      <Id>2878761389</Id>
    </IdList>
    <LinkSetDb>
      <DbTo>nuccore</DbTo>
      <LinkName>protein_nuccore</LinkName>
      <Link>
        <Id>2877558434</Id>
      </Link>
      <Link>
        <Id>2877558435</Id>
      </Link>
    </LinkSetDb>
    <LinkSetDb>
      <DbTo>nuccore</DbTo>
      <LinkName>protein_nuccore_wgs</LinkName>
      <Link>
        <Id>2877001122</Id>
      </Link>
    </LinkSetDb>
  </LinkSet>
</eLinkResult>
"#;

#[test]
fn parses_link_groups_in_order() {
    let sets = parse_link_sets(ELINK_RESPONSE).unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].links.len(), 2);
    assert_eq!(sets[0].links[0].id.as_deref(), Some("2877558434"));
    assert_eq!(sets[0].links[1].id.as_deref(), Some("2877558435"));
    assert_eq!(sets[1].links.len(), 1);
    assert_eq!(sets[1].links[0].id.as_deref(), Some("2877001122"));
}

#[test]
fn query_id_list_is_not_a_link() {
    // The IdList echoes the protein id we asked about; it must not leak into
    // any link group.
    let sets = parse_link_sets(ELINK_RESPONSE).unwrap();
    for set in &sets {
        for link in &set.links {
            assert_ne!(link.id.as_deref(), Some("2878761389"));
        }
    }
}

#[test]
fn response_without_link_groups_is_empty() {
    let xml = r#"<eLinkResult>
      <LinkSet>
        <DbFrom>protein</DbFrom>
        <IdList><Id>123456</Id></IdList>
      </LinkSet>
    </eLinkResult>"#;
    let sets = parse_link_sets(xml).unwrap();
    assert!(sets.is_empty());
}

#[test]
fn empty_id_element_is_absent() {
    let xml = r#"<eLinkResult><LinkSet>
      <LinkSetDb>
        <DbTo>nuccore</DbTo>
        <Link><Id></Id></Link>
      </LinkSetDb>
    </LinkSet></eLinkResult>"#;
    let sets = parse_link_sets(xml).unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].links.len(), 1);
    assert!(sets[0].links[0].id.is_none());
}

#[test]
fn malformed_xml_is_an_error() {
    let result = parse_link_sets("<eLinkResult><LinkSet></Wrong></eLinkResult>");
    assert!(result.is_err());
}
