//! Tests for context nodeset resolution

use roxmltree::Document;

use crate::app::models::ContextKind;
use crate::app::services::wqx_mapper::navigator;

use super::{result_document, station_document};

#[test]
fn test_organizations_in_document_order() {
    let doc = Document::parse(result_document()).unwrap();
    let orgs = navigator::organizations(&doc);

    assert_eq!(orgs.len(), 2);

    let first_id = orgs[0]
        .descendants()
        .find(|n| n.has_tag_name(("http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/", "OrganizationIdentifier")))
        .and_then(|n| n.text());
    assert_eq!(first_id, Some("USGS-IA"));
}

#[test]
fn test_station_children_in_document_order() {
    let doc = Document::parse(station_document()).unwrap();
    let orgs = navigator::organizations(&doc);
    let stations = navigator::children(orgs[0], ContextKind::Station);

    assert_eq!(stations.len(), 2);
}

#[test]
fn test_children_only_match_direct_nesting() {
    let doc = Document::parse(result_document()).unwrap();
    let orgs = navigator::organizations(&doc);

    // Results nest under activities, not directly under an organization
    assert!(navigator::children(orgs[0], ContextKind::Result).is_empty());

    let activities = navigator::children(orgs[0], ContextKind::Activity);
    assert_eq!(activities.len(), 2);
    assert_eq!(navigator::children(activities[0], ContextKind::Result).len(), 2);
    assert_eq!(navigator::children(activities[1], ContextKind::Result).len(), 1);
}

#[test]
fn test_non_wqx_root_yields_no_organizations() {
    let doc = Document::parse("<NotWqx><Organization/></NotWqx>").unwrap();
    assert!(navigator::organizations(&doc).is_empty());
}

#[test]
fn test_unqualified_elements_are_accepted() {
    let xml = r#"<WQX>
  <Organization>
    <MonitoringLocation/>
    <MonitoringLocation/>
  </Organization>
</WQX>"#;
    let doc = Document::parse(xml).unwrap();
    let orgs = navigator::organizations(&doc);

    assert_eq!(orgs.len(), 1);
    assert_eq!(navigator::children(orgs[0], ContextKind::Station).len(), 2);
}

#[test]
fn test_foreign_namespace_elements_are_ignored() {
    let xml = r#"<WQX xmlns="http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/"
     xmlns:other="http://example.com/other">
  <Organization/>
  <other:Organization/>
</WQX>"#;
    let doc = Document::parse(xml).unwrap();

    assert_eq!(navigator::organizations(&doc).len(), 1);
}

#[test]
fn test_repeated_siblings_are_not_deduplicated() {
    // A malformed document with duplicated siblings yields one context node
    // per sibling; no filtering is performed
    let xml = r#"<WQX><Organization/><Organization/><Organization/></WQX>"#;
    let doc = Document::parse(xml).unwrap();

    assert_eq!(navigator::organizations(&doc).len(), 3);
}
