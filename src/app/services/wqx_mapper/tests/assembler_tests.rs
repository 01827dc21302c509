//! Tests for nested row assembly and its counting invariants

use roxmltree::Document;

use crate::app::models::{Row, TableType};
use crate::app::services::schema_registry::SchemaRegistry;
use crate::app::services::wqx_mapper::assembler;

use super::{result_document, station_document};

fn assemble(table_type: TableType, xml: &str) -> Vec<Row> {
    let registry = SchemaRegistry::new().unwrap();
    let schema = registry.table_schema(table_type);
    let doc = Document::parse(xml).unwrap();

    let mut rows = Vec::new();
    assembler::for_each_row(schema, &doc, |row| rows.push(row));
    rows
}

#[test]
fn test_one_station_row_per_monitoring_location() {
    let rows = assemble(TableType::Station, station_document());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["MonitoringLocationIdentifier"], "IA001");
    assert_eq!(rows[1]["MonitoringLocationIdentifier"], "IA002");
}

#[test]
fn test_station_rows_carry_org_columns() {
    let rows = assemble(TableType::Station, station_document());

    for row in &rows {
        assert_eq!(row["OrganizationIdentifier"], "USGS-IA");
        assert_eq!(
            row["OrganizationFormalName"],
            "USGS Iowa Water Science Center"
        );
    }
}

#[test]
fn test_station_document_has_no_result_rows() {
    // One Organization, two MonitoringLocations, no Activities: the result
    // table is empty while the station table holds two rows
    let rows = assemble(TableType::Result, station_document());
    assert!(rows.is_empty());
}

#[test]
fn test_one_result_row_per_result_node() {
    let rows = assemble(TableType::Result, result_document());

    // 2 + 1 results in the first org, 1 in the second
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["CharacteristicName"], "Temperature, water");
    assert_eq!(rows[1]["CharacteristicName"], "Oxygen");
    assert_eq!(rows[2]["CharacteristicName"], "pH");
    assert_eq!(rows[3]["CharacteristicName"], "Nitrate");
}

#[test]
fn test_result_rows_inherit_activity_columns() {
    let rows = assemble(TableType::Result, result_document());

    assert_eq!(rows[0]["ActivityIdentifier"], "nwisia.01.98000888");
    assert_eq!(rows[1]["ActivityIdentifier"], "nwisia.01.98000888");
    assert_eq!(rows[2]["ActivityIdentifier"], "nwisia.01.98000889");
    assert_eq!(rows[3]["ActivityIdentifier"], "21IOWA-0401");
}

#[test]
fn test_org_columns_constant_within_an_organization() {
    let rows = assemble(TableType::Result, result_document());

    // Every row descending from the same Organization node carries identical
    // org-scoped values, regardless of branching factor
    for row in &rows[..3] {
        assert_eq!(row["OrganizationIdentifier"], "USGS-IA");
    }
    assert_eq!(rows[3]["OrganizationIdentifier"], "21IOWA");
    assert_eq!(
        rows[3]["OrganizationFormalName"],
        "Iowa Dept. of Natural Resources"
    );
}

#[test]
fn test_activity_without_results_emits_no_rows() {
    let xml = r#"<WQX><Organization>
  <OrganizationDescription>
    <OrganizationIdentifier>ORG</OrganizationIdentifier>
  </OrganizationDescription>
  <Activity>
    <ActivityDescription>
      <ActivityIdentifier>A-1</ActivityIdentifier>
    </ActivityDescription>
  </Activity>
</Organization></WQX>"#;

    let rows = assemble(TableType::Result, xml);
    assert!(rows.is_empty());
}

#[test]
fn test_station_scoped_identifier_wins_in_station_rows() {
    // The fixture's activity also names a MonitoringLocationIdentifier;
    // station rows must take the station-scoped value because activity
    // columns are excluded from the station schema entirely
    let rows = assemble(TableType::Station, result_document());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["MonitoringLocationIdentifier"], "IA001");
}

#[test]
fn test_result_rows_use_activity_scoped_identifier() {
    let rows = assemble(TableType::Result, result_document());

    // The first activity declares IA001; the others declare none
    assert_eq!(rows[0]["MonitoringLocationIdentifier"], "IA001");
    assert_eq!(rows[2]["MonitoringLocationIdentifier"], "");
}
