//! Tests for table construction strategies and their equivalence

use roxmltree::Document;

use crate::app::models::{TableType, WqpResponse};
use crate::app::services::wqx_mapper::{BuildStrategy, WqxMapper};
use crate::Error;

use super::{result_document, station_document};

fn mapper() -> WqxMapper {
    WqxMapper::new().unwrap()
}

#[test]
fn test_row_major_and_column_major_are_equivalent() {
    let mapper = mapper();

    for (table_type, xml) in [
        (TableType::Station, station_document()),
        (TableType::Result, result_document()),
    ] {
        let doc = Document::parse(xml).unwrap();
        let row_major = mapper.table_from_xml(table_type, &doc, BuildStrategy::RowMajor);
        let column_major = mapper.table_from_xml(table_type, &doc, BuildStrategy::ColumnMajor);

        assert_eq!(row_major.num_rows(), column_major.num_rows());
        for index in 0..row_major.num_rows() {
            assert_eq!(row_major.row(index), column_major.row(index));
        }
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let mapper = mapper();
    let doc = Document::parse(result_document()).unwrap();

    let first = mapper.table_from_xml(TableType::Result, &doc, BuildStrategy::ColumnMajor);
    let second = mapper.table_from_xml(TableType::Result, &doc, BuildStrategy::ColumnMajor);

    assert_eq!(first.num_rows(), second.num_rows());
    for index in 0..first.num_rows() {
        assert_eq!(first.row(index), second.row(index));
    }
}

#[test]
fn test_every_schema_column_is_present_and_sparse() {
    let mapper = mapper();
    let doc = Document::parse(station_document()).unwrap();
    let table = mapper.table_from_xml(TableType::Station, &doc, BuildStrategy::ColumnMajor);

    assert_eq!(table.num_columns(), 35);

    // Columns with no matching leaf anywhere hold empty strings, not gaps
    let aquifer = table.column("AquiferName").unwrap();
    assert_eq!(aquifer, ["", ""]);

    // CountryCode is present for the first station only
    let country = table.column("CountryCode").unwrap();
    assert_eq!(country, ["US", ""]);
}

#[test]
fn test_empty_document_yields_empty_table_with_full_schema() {
    let mapper = mapper();
    let doc = Document::parse(r#"<WQX xmlns="http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/"/>"#).unwrap();

    let table = mapper.table_from_xml(TableType::Result, &doc, BuildStrategy::RowMajor);
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.num_columns(), 62);
}

#[test]
fn test_dataframe_preserves_schema_order() {
    let mapper = mapper();
    let doc = Document::parse(station_document()).unwrap();
    let df = mapper
        .dataframe_from_xml(TableType::Station, &doc, BuildStrategy::ColumnMajor)
        .unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 35);

    let names: Vec<&str> = df.get_column_names_str();
    assert_eq!(names[0], "OrganizationIdentifier");
    assert_eq!(names[2], "MonitoringLocationIdentifier");
}

#[test]
fn test_table_from_response_resolves_and_maps() {
    let mapper = mapper();
    let response = WqpResponse {
        url: "https://www.waterqualitydata.us/Station/search?mimeType=xml".to_string(),
        status_code: 200,
        reason: "OK".to_string(),
        headers: Vec::new(),
        body: station_document().as_bytes().to_vec(),
    };

    let table = mapper
        .table_from_response(&response, BuildStrategy::default())
        .unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.value(0, "MonitoringLocationIdentifier"), Some("IA001"));
    assert_eq!(table.value(1, "MonitoringLocationIdentifier"), Some("IA002"));
}

#[test]
fn test_table_from_response_propagates_resolver_errors() {
    let mapper = mapper();

    let not_found = WqpResponse {
        url: "https://host/Station/search".to_string(),
        status_code: 404,
        reason: "Not Found".to_string(),
        headers: Vec::new(),
        body: Vec::new(),
    };
    assert!(matches!(
        mapper.table_from_response(&not_found, BuildStrategy::default()),
        Err(Error::NonSuccessResponse { .. })
    ));

    let unknown = WqpResponse {
        url: "https://host/Other/search".to_string(),
        status_code: 200,
        reason: "OK".to_string(),
        headers: Vec::new(),
        body: Vec::new(),
    };
    assert!(matches!(
        mapper.table_from_response(&unknown, BuildStrategy::default()),
        Err(Error::UnrecognizedResourceType { .. })
    ));
}

#[test]
fn test_empty_body_yields_empty_table() {
    let mapper = mapper();
    let response = WqpResponse {
        url: "https://host/Result/search".to_string(),
        status_code: 200,
        reason: "OK".to_string(),
        headers: Vec::new(),
        body: Vec::new(),
    };

    let table = mapper
        .table_from_response(&response, BuildStrategy::default())
        .unwrap();
    assert_eq!(table.num_rows(), 0);
    assert_eq!(table.num_columns(), 62);
}

#[test]
fn test_malformed_body_is_an_xml_error() {
    let mapper = mapper();
    let response = WqpResponse {
        url: "https://host/Result/search".to_string(),
        status_code: 200,
        reason: "OK".to_string(),
        headers: Vec::new(),
        body: b"<WQX><Organization></WQX>".to_vec(),
    };

    assert!(matches!(
        mapper.table_from_response(&response, BuildStrategy::default()),
        Err(Error::XmlParsing { .. })
    ));
}
