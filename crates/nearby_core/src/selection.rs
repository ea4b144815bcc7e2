use crate::{
    location::{Location, LocationId},
    ranking::RankedLocation,
};

/// Which location is active in the list and on the map.
///
/// Selection is kept by id, not by position, so it survives re-ranking.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    selected_id: Option<LocationId>,
}

impl Selection {
    /// Starts with the first location of the static list selected.
    pub fn new(locations: &[Location]) -> Self {
        Selection {
            selected_id: locations.first().map(|location| location.id.clone()),
        }
    }

    /// Selects `id` without checking it exists.
    pub fn select(&mut self, id: LocationId) {
        self.selected_id = Some(id);
    }

    pub fn selected_id(&self) -> Option<&LocationId> {
        self.selected_id.as_ref()
    }

    /// The selected entry of `ranked`, or the first entry when the selected
    /// id matches nothing.
    pub fn resolve<'r, 'a>(&self, ranked: &'r [RankedLocation<'a>]) -> Option<&'r RankedLocation<'a>> {
        self.selected_id
            .as_ref()
            .and_then(|id| ranked.iter().find(|entry| &entry.location.id == id))
            .or_else(|| ranked.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geopoint::GeoPoint, ranking::rank_locations, test_utils::location};

    #[test]
    fn defaults_to_first_static_location() {
        let locations = vec![location(7, 0.0, 0.0), location(8, 1.0, 1.0)];

        let selection = Selection::new(&locations);

        assert_eq!(selection.selected_id(), Some(&LocationId::number(7)));
        assert_eq!(Selection::new(&[]).selected_id(), None);
    }

    #[test]
    fn selection_survives_reranking() {
        let locations = vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)];
        let mut selection = Selection::new(&locations);
        selection.select(LocationId::number(2));

        let unranked = rank_locations(&locations, None);
        let ranked = rank_locations(&locations, Some(GeoPoint::new(38.0, -122.0)));

        assert_eq!(
            selection.resolve(&unranked).map(|r| &r.location.id),
            Some(&LocationId::number(2))
        );
        assert_eq!(
            selection.resolve(&ranked).map(|r| &r.location.id),
            Some(&LocationId::number(2))
        );
    }

    #[test]
    fn unknown_id_falls_back_to_first_ranked_entry() {
        let locations = vec![location(1, 37.0, -122.0), location(2, 38.0, -122.0)];
        let mut selection = Selection::new(&locations);
        selection.select(LocationId::from("missing"));

        let ranked = rank_locations(&locations, Some(GeoPoint::new(38.0, -122.0)));

        assert_eq!(selection.selected_id(), Some(&LocationId::from("missing")));
        assert_eq!(
            selection.resolve(&ranked).map(|r| &r.location.id),
            Some(&LocationId::number(2))
        );
    }

    #[test]
    fn unknown_id_on_empty_list_resolves_to_nothing() {
        let mut selection = Selection::default();
        selection.select(LocationId::number(1));

        assert!(selection.resolve(&[]).is_none());
    }
}
