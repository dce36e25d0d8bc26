/// Convert an optional recipe duration into human-readable text.
///
/// `None` or blank input yields `None`. See [`convert_duration`] for the rest.
pub fn humanize_duration(duration: Option<&str>) -> Option<String> {
    duration.and_then(convert_duration)
}

/// Convert an ISO 8601 duration to human-readable format
///
/// e.g., PT30M -> 30 minutes, PT1H30M -> 1 hour 30 minutes. Also handles
/// ranges like PT15-20M, minute overflow like PT90M and fractional seconds
/// like PT5400.0S. Text without the `PT` prefix is already human-readable and
/// is returned unchanged; a `PT` string with no readable component yields `None`.
pub fn convert_duration(duration: &str) -> Option<String> {
    let duration = duration.trim();
    if duration.is_empty() {
        return None;
    }
    let Some(body) = duration.strip_prefix("PT") else {
        return Some(duration.to_string());
    };

    let components = parse_components(body);
    if components.is_empty() {
        return None;
    }

    let mut total_seconds: f64 = 0.0;
    let mut minute_range: Option<&str> = None;
    for &(value, designator) in &components {
        match designator {
            'M' if value.contains('-') => minute_range = Some(value),
            'H' | 'M' | 'S' => {
                let Ok(number) = value.parse::<f64>() else {
                    continue;
                };
                let scale = match designator {
                    'H' => 3600.0,
                    'M' => 60.0,
                    _ => 1.0,
                };
                total_seconds += number * scale;
            }
            _ => {}
        }
    }

    let total = total_seconds.round() as u64;
    let mut parts = Vec::new();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        parts.push(plural(hours, "hour"));
    }
    if let Some(range) = minute_range {
        parts.push(format!("{range} minutes"));
    } else if minutes > 0 {
        parts.push(plural(minutes, "minute"));
    }
    if seconds > 0 {
        parts.push(plural(seconds, "second"));
    }
    if parts.is_empty() {
        parts.push(plural(0, "minute"));
    }

    Some(parts.join(" "))
}

/// Split `1H30M` into `[("1", 'H'), ("30", 'M')]`, stopping at the first
/// malformed or out-of-order component
fn parse_components(body: &str) -> Vec<(&str, char)> {
    let mut components = Vec::new();
    let mut rest = body;
    let mut allowed = "HMS";

    while !rest.is_empty() {
        let Some(pos) = rest.find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-')) else {
            break;
        };
        let value = &rest[..pos];
        let Some(designator) = rest[pos..].chars().next() else {
            break;
        };
        let Some(order) = allowed.find(designator) else {
            break;
        };
        if value.is_empty() || !value.starts_with(|c: char| c.is_ascii_digit()) {
            break;
        }

        components.push((value, designator));
        allowed = &allowed[order + 1..];
        rest = &rest[pos + designator.len_utf8()..];
    }

    components
}

fn plural(count: u64, unit: &str) -> String {
    format!("{} {}{}", count, unit, if count == 1 { "" } else { "s" })
}
