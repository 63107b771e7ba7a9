use jiff::tz::TimeZone;

use crate::{
    error::ConfigError,
    problem::travel_matrices::{Distance, Time},
};

pub const PLACEHOLDER_DISTANCE_ENV_VAR: &str = "WAYBILL_PLACEHOLDER_DISTANCE";
pub const PLACEHOLDER_DURATION_ENV_VAR: &str = "WAYBILL_PLACEHOLDER_DURATION";
pub const TIME_ZONE_ENV_VAR: &str = "WAYBILL_TIME_ZONE";

/// Cost written into every pair of distinct locations that has no distance edge.
///
/// This is a finite "unreachable-ish" value, not a real distance: a solver
/// will avoid such arcs without the problem becoming infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderCost {
    pub distance: Distance,
    pub duration: Time,
}

impl Default for PlaceholderCost {
    fn default() -> Self {
        PlaceholderCost {
            distance: 1000,
            duration: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildParams {
    pub placeholder: PlaceholderCost,

    /// Time zone used to read the hour and minute of the epoch.
    pub time_zone: TimeZone,
}

impl Default for BuildParams {
    fn default() -> Self {
        BuildParams {
            placeholder: PlaceholderCost::default(),
            time_zone: TimeZone::UTC,
        }
    }
}

impl BuildParams {
    pub fn from_env() -> Result<Self, ConfigError> {
        BuildParams::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the parameters through `lookup`, keeping defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = BuildParams::default();

        if let Some(value) = lookup(PLACEHOLDER_DISTANCE_ENV_VAR) {
            params.placeholder.distance = parse_integer(PLACEHOLDER_DISTANCE_ENV_VAR, &value)?;
        }

        if let Some(value) = lookup(PLACEHOLDER_DURATION_ENV_VAR) {
            params.placeholder.duration = parse_integer(PLACEHOLDER_DURATION_ENV_VAR, &value)?;
        }

        if let Some(value) = lookup(TIME_ZONE_ENV_VAR) {
            params.time_zone = parse_time_zone(&value)?;
        }

        Ok(params)
    }
}

fn parse_integer(variable: &'static str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            variable,
            value: value.to_owned(),
        })
}

pub fn parse_time_zone(name: &str) -> Result<TimeZone, ConfigError> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("utc") {
        return Ok(TimeZone::UTC);
    }

    TimeZone::get(name).map_err(|source| ConfigError::InvalidTimeZone {
        name: name.to_owned(),
        source,
    })
}
