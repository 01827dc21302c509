//! Tests for the WQX mapping engine
//!
//! Fixtures are small hand-written WQX-Outbound documents shared across the
//! navigator, extractor, assembler, and builder test modules.

mod assembler_tests;
mod builder_tests;
mod navigator_tests;

/// A document with one organization and two monitoring locations, no
/// activities (the station-table scenario)
pub fn station_document() -> &'static str {
    r#"<WQX xmlns="http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/">
  <Organization>
    <OrganizationDescription>
      <OrganizationIdentifier>USGS-IA</OrganizationIdentifier>
      <OrganizationFormalName>USGS Iowa Water Science Center</OrganizationFormalName>
    </OrganizationDescription>
    <MonitoringLocation>
      <MonitoringLocationIdentity>
        <MonitoringLocationIdentifier>IA001</MonitoringLocationIdentifier>
        <MonitoringLocationName>Boone River</MonitoringLocationName>
        <HUCEightDigitCode>07080106</HUCEightDigitCode>
      </MonitoringLocationIdentity>
      <MonitoringLocationGeospatial>
        <LatitudeMeasure>42.1062</LatitudeMeasure>
        <LongitudeMeasure>-93.9312</LongitudeMeasure>
        <CountryCode>US</CountryCode>
        <StateCode>19</StateCode>
      </MonitoringLocationGeospatial>
    </MonitoringLocation>
    <MonitoringLocation>
      <MonitoringLocationIdentity>
        <MonitoringLocationIdentifier>IA002</MonitoringLocationIdentifier>
        <MonitoringLocationName>Des Moines River</MonitoringLocationName>
      </MonitoringLocationIdentity>
      <MonitoringLocationGeospatial>
        <LatitudeMeasure>41.6005</LatitudeMeasure>
        <LongitudeMeasure>-93.6091</LongitudeMeasure>
      </MonitoringLocationGeospatial>
    </MonitoringLocation>
  </Organization>
</WQX>"#
}

/// A document with two organizations, nested activities and results
/// (3 + 1 result rows, 1 + 0 station rows)
pub fn result_document() -> &'static str {
    r#"<WQX xmlns="http://qwwebservices.usgs.gov/schemas/WQX-Outbound/2_0/">
  <Organization>
    <OrganizationDescription>
      <OrganizationIdentifier>USGS-IA</OrganizationIdentifier>
      <OrganizationFormalName>USGS Iowa Water Science Center</OrganizationFormalName>
    </OrganizationDescription>
    <MonitoringLocation>
      <MonitoringLocationIdentity>
        <MonitoringLocationIdentifier>IA001</MonitoringLocationIdentifier>
      </MonitoringLocationIdentity>
    </MonitoringLocation>
    <Activity>
      <ActivityDescription>
        <ActivityIdentifier>nwisia.01.98000888</ActivityIdentifier>
        <ActivityTypeCode>Sample-Routine</ActivityTypeCode>
        <ActivityStartDate>1998-08-20</ActivityStartDate>
        <MonitoringLocationIdentifier>IA001</MonitoringLocationIdentifier>
      </ActivityDescription>
      <Result>
        <ResultDescription>
          <CharacteristicName>Temperature, water</CharacteristicName>
          <ResultMeasure>
            <ResultMeasureValue>23.5</ResultMeasureValue>
            <MeasureUnitCode>deg C</MeasureUnitCode>
          </ResultMeasure>
        </ResultDescription>
      </Result>
      <Result>
        <ResultDescription>
          <CharacteristicName>Oxygen</CharacteristicName>
          <ResultMeasure>
            <ResultMeasureValue>8.1</ResultMeasureValue>
            <MeasureUnitCode>mg/l</MeasureUnitCode>
          </ResultMeasure>
        </ResultDescription>
      </Result>
    </Activity>
    <Activity>
      <ActivityDescription>
        <ActivityIdentifier>nwisia.01.98000889</ActivityIdentifier>
        <ActivityStartDate>1998-09-02</ActivityStartDate>
      </ActivityDescription>
      <Result>
        <ResultDescription>
          <CharacteristicName>pH</CharacteristicName>
          <ResultMeasure>
            <ResultMeasureValue>7.8</ResultMeasureValue>
          </ResultMeasure>
        </ResultDescription>
      </Result>
    </Activity>
  </Organization>
  <Organization>
    <OrganizationDescription>
      <OrganizationIdentifier>21IOWA</OrganizationIdentifier>
      <OrganizationFormalName>Iowa Dept. of Natural Resources</OrganizationFormalName>
    </OrganizationDescription>
    <Activity>
      <ActivityDescription>
        <ActivityIdentifier>21IOWA-0401</ActivityIdentifier>
      </ActivityDescription>
      <Result>
        <ResultDescription>
          <CharacteristicName>Nitrate</CharacteristicName>
        </ResultDescription>
      </Result>
    </Activity>
  </Organization>
</WQX>"#
}
