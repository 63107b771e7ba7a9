use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Parses a solver timeout: `30s`, `1m 30s`, `PT1M` or a plain number of seconds.
pub fn parse_timeout(input: &str) -> Result<SignedDuration, String> {
    let input = input.trim();

    let duration = if let Ok(seconds) = input.parse::<i64>() {
        SignedDuration::from_secs(seconds)
    } else if let Ok(duration) = input.parse::<SignedDuration>() {
        duration
    } else {
        input
            .parse::<Span>()
            .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
            .map_err(|_| format!("invalid timeout `{input}`"))?
    };

    if duration.is_negative() || duration.is_zero() {
        return Err(format!("timeout must be positive, got `{input}`"));
    }

    Ok(duration)
}
