//! Shared helpers for command handlers.

use prtgdash_core::SensorRef;

use crate::error::CliError;

/// Resolve command-line sensor selectors against the profile's sensors.
///
/// No selectors means every configured sensor. A selector matches a
/// configured sensor by ID or case-insensitive name; an unconfigured
/// numeric selector is taken as a raw PRTG object ID.
pub fn resolve_sensors(
    selectors: &[String],
    configured: &[SensorRef],
    profile_name: &str,
) -> Result<Vec<SensorRef>, CliError> {
    if selectors.is_empty() {
        if configured.is_empty() {
            return Err(CliError::NoSensors {
                profile: profile_name.into(),
            });
        }
        return Ok(configured.to_vec());
    }

    selectors
        .iter()
        .map(|sel| resolve_sensor(sel, configured))
        .collect()
}

/// Resolve one selector; see [`resolve_sensors`].
pub fn resolve_sensor(selector: &str, configured: &[SensorRef]) -> Result<SensorRef, CliError> {
    let selector = selector.trim();

    if let Some(found) = configured
        .iter()
        .find(|s| s.id == selector || s.name.eq_ignore_ascii_case(selector))
    {
        return Ok(found.clone());
    }

    if !selector.is_empty() && selector.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(SensorRef::new(selector, selector));
    }

    Err(CliError::NotFound {
        resource_type: "sensor".into(),
        identifier: selector.into(),
        list_command: "sensors".into(),
    })
}

/// Map a prompt failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Vec<SensorRef> {
        vec![
            SensorRef::new("Firstlight", "12435"),
            SensorRef::new("NNINIX", "12506"),
            SensorRef::new("Cogent", "12340"),
        ]
    }

    #[test]
    fn empty_selectors_take_all_configured_in_order() {
        let sensors = resolve_sensors(&[], &configured(), "default").expect("resolve");
        let ids: Vec<&str> = sensors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["12435", "12506", "12340"]);
    }

    #[test]
    fn empty_selectors_without_configured_sensors_fail() {
        let err = resolve_sensors(&[], &[], "noc").expect_err("nothing to show");
        assert!(matches!(err, CliError::NoSensors { ref profile } if profile == "noc"));
    }

    #[test]
    fn selector_matches_name_or_id() {
        let by_name = resolve_sensor("cogent", &configured()).expect("by name");
        assert_eq!(by_name, SensorRef::new("Cogent", "12340"));

        let by_id = resolve_sensor("12506", &configured()).expect("by id");
        assert_eq!(by_id.name, "NNINIX");
    }

    #[test]
    fn unknown_numeric_selector_is_raw_id() {
        let sensor = resolve_sensor("12363", &configured()).expect("raw id");
        assert_eq!(sensor, SensorRef::new("12363", "12363"));
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = resolve_sensor("Hurricane", &configured()).expect_err("unknown");
        assert!(matches!(err, CliError::NotFound { ref identifier, .. } if identifier == "Hurricane"));
    }
}
