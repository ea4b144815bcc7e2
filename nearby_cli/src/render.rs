use comfy_table::{Cell, Table, presets::UTF8_FULL};
use nearby_core::view::FinderView;

/// Renders the ranked list. The active row is marked and gets its notes and
/// directions link appended.
pub fn render_table(view: &FinderView) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["", "#", "Name", "Address", "Distance"]);

    for (index, row) in view.rows.iter().enumerate() {
        let mut name = row.name.clone();
        if let Some(details) = &row.details {
            if !details.notes.is_empty() {
                name.push('\n');
                name.push_str(&details.notes);
            }
            name.push('\n');
            name.push_str(&details.directions.url);
        }

        table.add_row(vec![
            Cell::new(if row.active { "▶" } else { "" }),
            Cell::new(index + 1),
            Cell::new(name),
            Cell::new(&row.address),
            Cell::new(&row.distance_label),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use nearby_core::{
        dataset::Dataset, deep_link::Platform, finder::Finder, geopoint::GeoPoint,
    };

    use super::*;

    fn finder() -> Finder {
        let dataset = Dataset::from_json(
            r#"[
                {"id": 1, "name": "North Clinic", "address": "1 North Rd", "notes": "Ask at reception", "lat": 38.0, "lng": -122.0},
                {"id": 2, "name": "South Library", "address": "2 South Rd", "lat": 37.0, "lng": -122.0}
            ]"#,
        )
        .unwrap();

        Finder::new(&dataset)
    }

    #[test]
    fn test_render_ranked_rows() {
        let mut finder = finder();
        finder.apply_geolocation(Ok(GeoPoint::new(37.0, -122.0)));

        let rendered = render_table(&finder.view(Platform::Other)).to_string();

        let south = rendered.find("South Library").unwrap();
        let north = rendered.find("North Clinic").unwrap();
        assert!(south < north);
        assert!(rendered.contains("0 m away"));
        assert!(rendered.contains("111.2 km away"));
    }

    #[test]
    fn test_render_active_row_details() {
        let finder = finder();

        let rendered = render_table(&finder.view(Platform::Other)).to_string();

        assert!(rendered.contains("Ask at reception"));
        assert!(rendered.contains("Distance unknown"));
        assert!(rendered.contains("▶"));
    }
}
