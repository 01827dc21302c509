//! Validation of Water Quality Portal query parameters
//!
//! Checks a parameter set before a request is issued: every name must be a
//! documented WQP parameter, and the constrained families (geospatial,
//! political jurisdiction, sampling dates) must carry well-formed, mutually
//! consistent values. Violations are explicit error values; parameters are
//! never silently dropped or rewritten.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{Error, Result};

// =============================================================================
// Known Parameter Names
// =============================================================================

/// General parameters
pub const GENERAL_PARAMS: &[&str] = &["providers", "mimeType", "zip"];

/// Geospatial constraints (all latitude/longitude values are WGS84 decimal)
pub const GEO_PARAMS: &[&str] = &["bBox", "lat", "lon", "within"];

/// Political jurisdiction constraints (US FIPS based)
pub const POLITICAL_PARAMS: &[&str] = &["countrycode", "statecode", "countycode"];

/// Site constraints
pub const SITE_PARAMS: &[&str] = &["organizationId", "siteType", "siteId", "huc"];

/// Sampling constraints
pub const SAMPLING_PARAMS: &[&str] = &[
    "activityId",
    "startDateLo",
    "startDateHi",
    "sampleMedia",
    "characteristicType",
    "characteristicName",
    "pCode",
    "analyticalMethod",
];

/// All documented WQP parameter names
pub fn param_names() -> impl Iterator<Item = &'static str> {
    GENERAL_PARAMS
        .iter()
        .chain(GEO_PARAMS)
        .chain(POLITICAL_PARAMS)
        .chain(SITE_PARAMS)
        .chain(SAMPLING_PARAMS)
        .copied()
}

/// Whether a name is a documented WQP parameter
pub fn is_known_param(name: &str) -> bool {
    param_names().any(|known| known == name)
}

// =============================================================================
// Value Patterns
// =============================================================================

static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("static pattern"));
static STATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}:\d{1,2}$").expect("static pattern"));
static COUNTY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}:\d{1,2}:\d{1,3}$").expect("static pattern"));
static HUC_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}|\d{4}|\d{6}|\d{8})$").expect("static pattern"));
static WQP_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("static pattern"));

// =============================================================================
// Parameter Parsing and Validation
// =============================================================================

/// Parse a `name=value` expression into a parameter pair
pub fn parse_param_expr(expr: &str) -> Result<(String, String)> {
    match expr.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(Error::invalid_parameter(
            expr,
            "Parameters must be given as name=value",
        )),
    }
}

/// Validate a full parameter set for a portal request
pub fn validate(params: &[(String, String)]) -> Result<()> {
    for (name, value) in params {
        if !is_known_param(name) {
            return Err(Error::invalid_parameter(
                name,
                format!(
                    "Not a documented WQP parameter. Known parameters: {}",
                    param_names().collect::<Vec<_>>().join(", ")
                ),
            ));
        }

        match name.as_str() {
            "bBox" => validate_bbox(value)?,
            "countrycode" => validate_pattern(name, value, &COUNTRY_CODE, "e.g. US")?,
            "statecode" => validate_pattern(name, value, &STATE_CODE, "e.g. US:19")?,
            "countycode" => validate_pattern(name, value, &COUNTY_CODE, "e.g. US:19:015")?,
            "huc" => validate_pattern(name, value, &HUC_CODE, "2, 4, 6 or 8 digits")?,
            "startDateLo" | "startDateHi" => {
                parse_wqp_date(name, value)?;
            }
            _ => {}
        }
    }

    validate_circle(params)?;
    validate_jurisdiction(params)?;
    validate_date_range(params)?;

    Ok(())
}

fn lookup<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn validate_pattern(name: &str, value: &str, pattern: &Regex, expected: &str) -> Result<()> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            name,
            format!("Value '{}' does not match expected form ({})", value, expected),
        ))
    }
}

/// A bounding box is four comma-separated WGS84 decimal degrees:
/// west longitude, south latitude, east longitude, north latitude
fn validate_bbox(value: &str) -> Result<()> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 4 {
        return Err(Error::invalid_parameter(
            "bBox",
            "Bounding box must be west,south,east,north in decimal degrees",
        ));
    }

    let coords: Vec<f64> = parts
        .iter()
        .map(|p| {
            p.trim().parse().map_err(|_| {
                Error::invalid_parameter("bBox", format!("'{}' is not a decimal number", p))
            })
        })
        .collect::<Result<_>>()?;

    let (west, south, east, north) = (coords[0], coords[1], coords[2], coords[3]);
    if !(-180.0..=180.0).contains(&west) || !(-180.0..=180.0).contains(&east) {
        return Err(Error::invalid_parameter(
            "bBox",
            "Longitudes must be between -180 and 180 degrees",
        ));
    }
    if !(-90.0..=90.0).contains(&south) || !(-90.0..=90.0).contains(&north) {
        return Err(Error::invalid_parameter(
            "bBox",
            "Latitudes must be between -90 and 90 degrees",
        ));
    }
    if south >= north {
        return Err(Error::invalid_parameter(
            "bBox",
            "Southern latitude must be below northern latitude",
        ));
    }

    Ok(())
}

/// `lat`, `lon` and `within` describe a circle and must appear together
fn validate_circle(params: &[(String, String)]) -> Result<()> {
    let lat = lookup(params, "lat");
    let lon = lookup(params, "lon");
    let within = lookup(params, "within");

    if lat.is_none() && lon.is_none() && within.is_none() {
        return Ok(());
    }
    let (Some(lat), Some(lon), Some(within)) = (lat, lon, within) else {
        return Err(Error::invalid_parameter(
            "within",
            "lat, lon and within must be provided together",
        ));
    };

    let lat: f64 = lat
        .parse()
        .map_err(|_| Error::invalid_parameter("lat", "Latitude must be a decimal number"))?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| Error::invalid_parameter("lon", "Longitude must be a decimal number"))?;
    let within: f64 = within
        .parse()
        .map_err(|_| Error::invalid_parameter("within", "Radius must be a decimal number"))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::invalid_parameter(
            "lat",
            "Latitude must be between -90 and 90 degrees",
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::invalid_parameter(
            "lon",
            "Longitude must be between -180 and 180 degrees",
        ));
    }
    if within <= 0.0 {
        return Err(Error::invalid_parameter(
            "within",
            "Radius must be a positive number of decimal miles",
        ));
    }

    Ok(())
}

/// Country, state and county codes are interdependent prefixes
fn validate_jurisdiction(params: &[(String, String)]) -> Result<()> {
    let country = lookup(params, "countrycode");
    let state = lookup(params, "statecode");
    let county = lookup(params, "countycode");

    if let (Some(country), Some(state)) = (country, state) {
        if !state.starts_with(&format!("{}:", country)) {
            return Err(Error::invalid_parameter(
                "statecode",
                format!("State code '{}' is not within country '{}'", state, country),
            ));
        }
    }
    if let (Some(state), Some(county)) = (state, county) {
        if !county.starts_with(&format!("{}:", state)) {
            return Err(Error::invalid_parameter(
                "countycode",
                format!("County code '{}' is not within state '{}'", county, state),
            ));
        }
    }

    Ok(())
}

fn parse_wqp_date(name: &str, value: &str) -> Result<NaiveDate> {
    if !WQP_DATE.is_match(value) {
        return Err(Error::invalid_parameter(
            name,
            format!("Date '{}' must be MM-DD-YYYY", value),
        ));
    }
    NaiveDate::parse_from_str(value, "%m-%d-%Y")
        .map_err(|_| Error::invalid_parameter(name, format!("'{}' is not a valid date", value)))
}

fn validate_date_range(params: &[(String, String)]) -> Result<()> {
    let lo = lookup(params, "startDateLo");
    let hi = lookup(params, "startDateHi");

    if let (Some(lo), Some(hi)) = (lo, hi) {
        let lo = parse_wqp_date("startDateLo", lo)?;
        let hi = parse_wqp_date("startDateHi", hi)?;
        if lo > hi {
            return Err(Error::invalid_parameter(
                "startDateLo",
                "startDateLo must not be after startDateHi",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_param_expr() {
        assert_eq!(
            parse_param_expr("countrycode=US").unwrap(),
            ("countrycode".to_string(), "US".to_string())
        );
        assert_eq!(
            parse_param_expr(" huc = 07080106 ").unwrap(),
            ("huc".to_string(), "07080106".to_string())
        );

        assert!(parse_param_expr("countrycode").is_err());
        assert!(parse_param_expr("=US").is_err());
        assert!(parse_param_expr("countrycode=").is_err());
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let err = validate(&params(&[("bogus", "1")])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name, .. } if name == "bogus"));
    }

    #[test]
    fn test_boone_county_query_is_valid() {
        // The canonical demo query: Boone County, IA
        let result = validate(&params(&[
            ("countrycode", "US"),
            ("statecode", "US:19"),
            ("countycode", "US:19:015"),
            ("mimeType", "xml"),
            ("zip", "no"),
        ]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_inconsistent_jurisdiction_codes() {
        let err = validate(&params(&[("countrycode", "US"), ("statecode", "CA:19")])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name, .. } if name == "statecode"));

        let err = validate(&params(&[("statecode", "US:19"), ("countycode", "US:08:015")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name, .. } if name == "countycode"));
    }

    #[test]
    fn test_bbox_validation() {
        assert!(validate(&params(&[("bBox", "-94.1,41.5,-93.2,42.3")])).is_ok());

        assert!(validate(&params(&[("bBox", "-94.1,41.5,-93.2")])).is_err());
        assert!(validate(&params(&[("bBox", "-94.1,north,-93.2,42.3")])).is_err());
        assert!(validate(&params(&[("bBox", "-94.1,42.3,-93.2,41.5")])).is_err());
        assert!(validate(&params(&[("bBox", "-194.1,41.5,-93.2,42.3")])).is_err());
    }

    #[test]
    fn test_circle_requires_all_three_parts() {
        assert!(validate(&params(&[("lat", "42.0"), ("lon", "-93.6"), ("within", "25")])).is_ok());

        let err = validate(&params(&[("lat", "42.0"), ("lon", "-93.6")])).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));

        let err = validate(&params(&[("lat", "42.0"), ("lon", "-93.6"), ("within", "-5")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name, .. } if name == "within"));
    }

    #[test]
    fn test_huc_lengths() {
        for huc in ["07", "0708", "070801", "07080106"] {
            assert!(validate(&params(&[("huc", huc)])).is_ok(), "huc {}", huc);
        }
        for huc in ["0", "070", "070801061", "ABCD"] {
            assert!(validate(&params(&[("huc", huc)])).is_err(), "huc {}", huc);
        }
    }

    #[test]
    fn test_date_range() {
        assert!(validate(&params(&[
            ("startDateLo", "01-01-1998"),
            ("startDateHi", "12-31-1998"),
        ]))
        .is_ok());

        let err = validate(&params(&[
            ("startDateLo", "12-31-1998"),
            ("startDateHi", "01-01-1998"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name, .. } if name == "startDateLo"));

        assert!(validate(&params(&[("startDateLo", "1998-01-01")])).is_err());
        assert!(validate(&params(&[("startDateLo", "13-45-1998")])).is_err());
    }
}
