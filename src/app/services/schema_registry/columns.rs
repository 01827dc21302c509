//! Static schema assets: column orders and column-name to element-path maps
//!
//! The canonical tabular form of WQX data is defined as a sequence of
//! columns. Each column maps uniquely to a particular semantic data
//! definition in the WQX schema, and to a relative element path beneath a
//! context node of one of the four logical kinds. These tables are the
//! compatibility surface of the crate: downstream CSV consumers depend on
//! the exact names and order.
//!
//! Paths are written `Segment/Segment/...`, relative to a context node of
//! the owning kind, and are split into segments once at registry build time.

// =============================================================================
// Tabular Column Orders
// =============================================================================

/// Ordered column names of the station table (one row per MonitoringLocation)
pub const STATION_TABLE_COLUMNS: &[&str] = &[
    "OrganizationIdentifier",
    "OrganizationFormalName",
    "MonitoringLocationIdentifier",
    "MonitoringLocationName",
    "MonitoringLocationTypeName",
    "MonitoringLocationDescriptionText",
    "HUCEightDigitCode",
    "DrainageAreaMeasure/MeasureValue",
    "DrainageAreaMeasure/MeasureUnitCode",
    "ContributingDrainageAreaMeasure/MeasureValue",
    "ContributingDrainageAreaMeasure/MeasureUnitCode",
    "LatitudeMeasure",
    "LongitudeMeasure",
    "SourceMapScaleNumeric",
    "HorizontalAccuracyMeasure/MeasureValue",
    "HorizontalAccuracyMeasure/MeasureUnitCode",
    "HorizontalCollectionMethodName",
    "HorizontalCoordinateReferenceSystemDatumName",
    "VerticalMeasure/MeasureValue",
    "VerticalMeasure/MeasureUnitCode",
    "VerticalAccuracyMeasure/MeasureValue",
    "VerticalAccuracyMeasure/MeasureUnitCode",
    "VerticalCollectionMethodName",
    "VerticalCoordinateReferenceSystemDatumName",
    "CountryCode",
    "StateCode",
    "CountyCode",
    "AquiferName",
    "FormationTypeText",
    "AquiferTypeName",
    "ConstructionDateText",
    "WellDepthMeasure/MeasureValue",
    "WellDepthMeasure/MeasureUnitCode",
    "WellHoleDepthMeasure/MeasureValue",
    "WellHoleDepthMeasure/MeasureUnitCode",
];

/// Ordered column names of the result table (one row per Result)
pub const RESULT_TABLE_COLUMNS: &[&str] = &[
    "OrganizationIdentifier",
    "OrganizationFormalName",
    "ActivityIdentifier",
    "ActivityTypeCode",
    "ActivityMediaName",
    "ActivityMediaSubdivisionName",
    "ActivityStartDate",
    "ActivityStartTime/Time",
    "ActivityStartTime/TimeZoneCode",
    "ActivityEndDate",
    "ActivityEndTime/Time",
    "ActivityEndTime/TimeZoneCode",
    "ActivityDepthHeightMeasure/MeasureValue",
    "ActivityDepthHeightMeasure/MeasureUnitCode",
    "ActivityDepthAltitudeReferencePointText",
    "ActivityTopDepthHeightMeasure/MeasureValue",
    "ActivityTopDepthHeightMeasure/MeasureUnitCode",
    "ActivityBottomDepthHeightMeasure/MeasureValue",
    "ActivityBottomDepthHeightMeasure/MeasureUnitCode",
    "ProjectIdentifier",
    "ActivityConductingOrganizationText",
    "MonitoringLocationIdentifier",
    "ActivityCommentText",
    "SampleAquifer",
    "HydrologicCondition",
    "HydrologicEvent",
    "SampleCollectionMethod/MethodIdentifier",
    "SampleCollectionMethod/MethodIdentifierContext",
    "SampleCollectionMethod/MethodName",
    "SampleCollectionEquipmentName",
    "ResultDetectionConditionText",
    "CharacteristicName",
    "ResultSampleFractionText",
    "ResultMeasureValue",
    "ResultMeasure/MeasureUnitCode",
    "MeasureQualifierCode",
    "ResultStatusIdentifier",
    "StatisticalBaseCode",
    "ResultValueTypeName",
    "ResultWeightBasisText",
    "ResultTimeBasisText",
    "ResultTemperatureBasisText",
    "ResultParticleSizeBasisText",
    "PrecisionValue",
    "ResultCommentText",
    "USGSPCode",
    "ResultDepthHeightMeasure/MeasureValue",
    "ResultDepthHeightMeasure/MeasureUnitCode",
    "ResultDepthAltitudeReferencePointText",
    "SubjectTaxonomicName",
    "SampleTissueAnatomyName",
    "ResultAnalyticalMethod/MethodIdentifier",
    "ResultAnalyticalMethod/MethodIdentifierContext",
    "ResultAnalyticalMethod/MethodName",
    "MethodDescriptionText",
    "LaboratoryName",
    "AnalysisStartDate",
    "ResultLaboratoryCommentText",
    "DetectionQuantitationLimitTypeName",
    "DetectionQuantitationLimitMeasure/MeasureValue",
    "DetectionQuantitationLimitMeasure/MeasureUnitCode",
    "PreparationStartDate",
];

// =============================================================================
// Column Paths per Context Kind
// =============================================================================

/// Columns shared across every row, relative to an Organization node.
/// Identical in the station and result schemas.
pub const ORG_COLUMN_PATHS: &[(&str, &str)] = &[
    (
        "OrganizationIdentifier",
        "OrganizationDescription/OrganizationIdentifier",
    ),
    (
        "OrganizationFormalName",
        "OrganizationDescription/OrganizationFormalName",
    ),
];

/// Row-specific columns relative to a MonitoringLocation node.
/// These apply to station tables and not to results.
pub const STATION_COLUMN_PATHS: &[(&str, &str)] = &[
    (
        "MonitoringLocationIdentifier",
        "MonitoringLocationIdentity/MonitoringLocationIdentifier",
    ),
    (
        "MonitoringLocationName",
        "MonitoringLocationIdentity/MonitoringLocationName",
    ),
    (
        "MonitoringLocationTypeName",
        "MonitoringLocationIdentity/MonitoringLocationTypeName",
    ),
    (
        "MonitoringLocationDescriptionText",
        "MonitoringLocationIdentity/MonitoringLocationDescriptionText",
    ),
    (
        "HUCEightDigitCode",
        "MonitoringLocationIdentity/HUCEightDigitCode",
    ),
    (
        "DrainageAreaMeasure/MeasureValue",
        "MonitoringLocationIdentity/DrainageAreaMeasure/MeasureValue",
    ),
    (
        "DrainageAreaMeasure/MeasureUnitCode",
        "MonitoringLocationIdentity/DrainageAreaMeasure/MeasureUnitCode",
    ),
    (
        "ContributingDrainageAreaMeasure/MeasureValue",
        "MonitoringLocationIdentity/ContributingDrainageAreaMeasure/MeasureValue",
    ),
    (
        "ContributingDrainageAreaMeasure/MeasureUnitCode",
        "MonitoringLocationIdentity/ContributingDrainageAreaMeasure/MeasureUnitCode",
    ),
    (
        "LatitudeMeasure",
        "MonitoringLocationGeospatial/LatitudeMeasure",
    ),
    (
        "LongitudeMeasure",
        "MonitoringLocationGeospatial/LongitudeMeasure",
    ),
    (
        "SourceMapScaleNumeric",
        "MonitoringLocationGeospatial/SourceMapScaleNumeric",
    ),
    (
        "HorizontalAccuracyMeasure/MeasureValue",
        "MonitoringLocationGeospatial/HorizontalAccuracyMeasure/MeasureValue",
    ),
    (
        "HorizontalAccuracyMeasure/MeasureUnitCode",
        "MonitoringLocationGeospatial/HorizontalAccuracyMeasure/MeasureUnitCode",
    ),
    (
        "HorizontalCollectionMethodName",
        "MonitoringLocationGeospatial/HorizontalCollectionMethodName",
    ),
    (
        "HorizontalCoordinateReferenceSystemDatumName",
        "MonitoringLocationGeospatial/HorizontalCoordinateReferenceSystemDatumName",
    ),
    (
        "VerticalMeasure/MeasureValue",
        "MonitoringLocationGeospatial/VerticalMeasure/MeasureValue",
    ),
    (
        "VerticalMeasure/MeasureUnitCode",
        "MonitoringLocationGeospatial/VerticalMeasure/MeasureUnitCode",
    ),
    (
        "VerticalAccuracyMeasure/MeasureValue",
        "MonitoringLocationGeospatial/VerticalAccuracyMeasure/MeasureValue",
    ),
    (
        "VerticalAccuracyMeasure/MeasureUnitCode",
        "MonitoringLocationGeospatial/VerticalAccuracyMeasure/MeasureUnitCode",
    ),
    (
        "VerticalCollectionMethodName",
        "MonitoringLocationGeospatial/VerticalCollectionMethodName",
    ),
    (
        "VerticalCoordinateReferenceSystemDatumName",
        "MonitoringLocationGeospatial/VerticalCoordinateReferenceSystemDatumName",
    ),
    ("CountryCode", "MonitoringLocationGeospatial/CountryCode"),
    ("StateCode", "MonitoringLocationGeospatial/StateCode"),
    ("CountyCode", "MonitoringLocationGeospatial/CountyCode"),
    ("AquiferName", "WellInformation/AquiferName"),
    ("FormationTypeText", "WellInformation/FormationTypeText"),
    ("AquiferTypeName", "WellInformation/AquiferTypeName"),
    ("ConstructionDateText", "WellInformation/ConstructionDateText"),
    (
        "WellDepthMeasure/MeasureValue",
        "WellInformation/WellDepthMeasure/MeasureValue",
    ),
    (
        "WellDepthMeasure/MeasureUnitCode",
        "WellInformation/WellDepthMeasure/MeasureUnitCode",
    ),
    (
        "WellHoleDepthMeasure/MeasureValue",
        "WellInformation/WellHoleDepthMeasure/MeasureValue",
    ),
    (
        "WellHoleDepthMeasure/MeasureUnitCode",
        "WellInformation/WellHoleDepthMeasure/MeasureUnitCode",
    ),
];

/// Columns shared across the rows of one sampling activity, relative to an
/// Activity node. These apply to result tables and not to stations.
pub const ACTIVITY_COLUMN_PATHS: &[(&str, &str)] = &[
    ("ActivityIdentifier", "ActivityDescription/ActivityIdentifier"),
    ("ActivityTypeCode", "ActivityDescription/ActivityTypeCode"),
    ("ActivityMediaName", "ActivityDescription/ActivityMediaName"),
    (
        "ActivityMediaSubdivisionName",
        "ActivityDescription/ActivityMediaSubdivisionName",
    ),
    ("ActivityStartDate", "ActivityDescription/ActivityStartDate"),
    (
        "ActivityStartTime/Time",
        "ActivityDescription/ActivityStartTime/Time",
    ),
    (
        "ActivityStartTime/TimeZoneCode",
        "ActivityDescription/ActivityStartTime/TimeZoneCode",
    ),
    ("ActivityEndDate", "ActivityDescription/ActivityEndDate"),
    (
        "ActivityEndTime/Time",
        "ActivityDescription/ActivityEndTime/Time",
    ),
    (
        "ActivityEndTime/TimeZoneCode",
        "ActivityDescription/ActivityEndTime/TimeZoneCode",
    ),
    (
        "ActivityDepthHeightMeasure/MeasureValue",
        "ActivityDescription/ActivityDepthHeightMeasure/MeasureValue",
    ),
    (
        "ActivityDepthHeightMeasure/MeasureUnitCode",
        "ActivityDescription/ActivityDepthHeightMeasure/MeasureUnitCode",
    ),
    (
        "ActivityDepthAltitudeReferencePointText",
        "ActivityDescription/ActivityDepthAltitudeReferencePointText",
    ),
    (
        "ActivityTopDepthHeightMeasure/MeasureValue",
        "ActivityDescription/ActivityTopDepthHeightMeasure/MeasureValue",
    ),
    (
        "ActivityTopDepthHeightMeasure/MeasureUnitCode",
        "ActivityDescription/ActivityTopDepthHeightMeasure/MeasureUnitCode",
    ),
    (
        "ActivityBottomDepthHeightMeasure/MeasureValue",
        "ActivityDescription/ActivityBottomDepthHeightMeasure/MeasureValue",
    ),
    (
        "ActivityBottomDepthHeightMeasure/MeasureUnitCode",
        "ActivityDescription/ActivityBottomDepthHeightMeasure/MeasureUnitCode",
    ),
    ("ProjectIdentifier", "ActivityDescription/ProjectIdentifier"),
    (
        "ActivityConductingOrganizationText",
        "ActivityDescription/ActivityConductingOrganizationText",
    ),
    (
        "MonitoringLocationIdentifier",
        "ActivityDescription/MonitoringLocationIdentifier",
    ),
    ("ActivityCommentText", "ActivityDescription/ActivityCommentText"),
    ("SampleAquifer", "ActivityDescription/SampleAquifer"),
    ("HydrologicCondition", "ActivityDescription/HydrologicCondition"),
    ("HydrologicEvent", "ActivityDescription/HydrologicEvent"),
    (
        "SampleCollectionMethod/MethodIdentifier",
        "SampleDescription/SampleCollectionMethod/MethodIdentifier",
    ),
    (
        "SampleCollectionMethod/MethodIdentifierContext",
        "SampleDescription/SampleCollectionMethod/MethodIdentifierContext",
    ),
    (
        "SampleCollectionMethod/MethodName",
        "SampleDescription/SampleCollectionMethod/MethodName",
    ),
    (
        "SampleCollectionEquipmentName",
        "SampleDescription/SampleCollectionEquipmentName",
    ),
];

/// Row-specific columns relative to a Result node
pub const RESULT_COLUMN_PATHS: &[(&str, &str)] = &[
    (
        "ResultDetectionConditionText",
        "ResultDescription/ResultDetectionConditionText",
    ),
    ("CharacteristicName", "ResultDescription/CharacteristicName"),
    (
        "ResultSampleFractionText",
        "ResultDescription/ResultSampleFractionText",
    ),
    (
        "ResultMeasureValue",
        "ResultDescription/ResultMeasure/ResultMeasureValue",
    ),
    (
        "ResultMeasure/MeasureUnitCode",
        "ResultDescription/ResultMeasure/MeasureUnitCode",
    ),
    (
        "MeasureQualifierCode",
        "ResultDescription/ResultMeasure/MeasureQualifierCode",
    ),
    (
        "ResultStatusIdentifier",
        "ResultDescription/ResultStatusIdentifier",
    ),
    ("StatisticalBaseCode", "ResultDescription/StatisticalBaseCode"),
    ("ResultValueTypeName", "ResultDescription/ResultValueTypeName"),
    (
        "ResultWeightBasisText",
        "ResultDescription/ResultWeightBasisText",
    ),
    ("ResultTimeBasisText", "ResultDescription/ResultTimeBasisText"),
    (
        "ResultTemperatureBasisText",
        "ResultDescription/ResultTemperatureBasisText",
    ),
    (
        "ResultParticleSizeBasisText",
        "ResultDescription/ResultParticleSizeBasisText",
    ),
    ("PrecisionValue", "ResultDescription/DataQuality/PrecisionValue"),
    ("ResultCommentText", "ResultDescription/ResultCommentText"),
    ("USGSPCode", "ResultDescription/USGSPCode"),
    (
        "ResultDepthHeightMeasure/MeasureValue",
        "ResultDescription/ResultDepthHeightMeasure/MeasureValue",
    ),
    (
        "ResultDepthHeightMeasure/MeasureUnitCode",
        "ResultDescription/ResultDepthHeightMeasure/MeasureUnitCode",
    ),
    (
        "ResultDepthAltitudeReferencePointText",
        "ResultDescription/ResultDepthAltitudeReferencePointText",
    ),
    (
        "SubjectTaxonomicName",
        "BiologicalResultDescription/SubjectTaxonomicName",
    ),
    (
        "SampleTissueAnatomyName",
        "BiologicalResultDescription/SampleTissueAnatomyName",
    ),
    (
        "ResultAnalyticalMethod/MethodIdentifier",
        "ResultAnalyticalMethod/MethodIdentifier",
    ),
    (
        "ResultAnalyticalMethod/MethodIdentifierContext",
        "ResultAnalyticalMethod/MethodIdentifierContext",
    ),
    (
        "ResultAnalyticalMethod/MethodName",
        "ResultAnalyticalMethod/MethodName",
    ),
    (
        "MethodDescriptionText",
        "ResultAnalyticalMethod/MethodDescriptionText",
    ),
    ("LaboratoryName", "ResultLabInformation/LaboratoryName"),
    ("AnalysisStartDate", "ResultLabInformation/AnalysisStartDate"),
    (
        "ResultLaboratoryCommentText",
        "ResultLabInformation/ResultLaboratoryCommentText",
    ),
    (
        "DetectionQuantitationLimitTypeName",
        "ResultLabInformation/ResultDetectionQuantitationLimit/DetectionQuantitationLimitTypeName",
    ),
    (
        "DetectionQuantitationLimitMeasure/MeasureValue",
        "ResultLabInformation/ResultDetectionQuantitationLimit/DetectionQuantitationLimitMeasure/MeasureValue",
    ),
    (
        "DetectionQuantitationLimitMeasure/MeasureUnitCode",
        "ResultLabInformation/ResultDetectionQuantitationLimit/DetectionQuantitationLimitMeasure/MeasureUnitCode",
    ),
    (
        "PreparationStartDate",
        "LabSamplePreparation/PreparationStartDate",
    ),
];
