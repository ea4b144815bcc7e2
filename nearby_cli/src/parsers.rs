use jiff::SpanRelativeTo;
use nearby_core::{geopoint::GeoPoint, location::LocationId};

pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

pub fn parse_position(input: &str) -> Result<GeoPoint, String> {
    input.parse::<GeoPoint>().map_err(|error| error.to_string())
}

pub fn parse_location_id(input: &str) -> Result<LocationId, String> {
    Ok(LocationId::parse_lenient(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(
            parse_duration("8s"),
            Ok(jiff::SignedDuration::from_secs(8))
        );
        assert_eq!(
            parse_duration("PT1M"),
            Ok(jiff::SignedDuration::from_secs(60))
        );
        assert_eq!(
            parse_duration("30"),
            Ok(jiff::SignedDuration::from_secs(30))
        );
        assert!(parse_duration("soon").is_err());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(
            parse_position("37.7749,-122.4194"),
            Ok(GeoPoint::new(37.7749, -122.4194))
        );
        assert!(parse_position("somewhere").is_err());
    }

    #[test]
    fn test_parse_location_id() {
        assert_eq!(parse_location_id("3"), Ok(LocationId::number(3)));
        assert_eq!(parse_location_id("mission"), Ok(LocationId::from("mission")));
    }
}
