//! Provider directory: distance annotation, favorites, filtering, ordering.

use std::collections::HashSet;

use crate::geo::{self, Coordinates};
use crate::provider::{CategoryFilter, Provider, ProviderId};

/// Which listing a directory query is backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    All,
    Favorites,
}

/// Copy of the provider list with `distance_km` computed from `origin`.
/// Without an origin the providers pass through unannotated.
pub fn with_distances(providers: &[Provider], origin: Option<Coordinates>) -> Vec<Provider> {
    providers
        .iter()
        .cloned()
        .map(|mut provider| {
            if let Some(origin) = origin {
                provider.distance_km = Some(geo::distance_km(origin, provider.coordinates));
            }
            provider
        })
        .collect()
}

/// Symmetric-difference update: add the id if absent, remove it if present.
pub fn toggle_favorite(favorites: &mut HashSet<ProviderId>, id: ProviderId) {
    if !favorites.insert(id) {
        favorites.remove(&id);
    }
}

/// The visible subset for a listing: favorites restriction, category
/// membership, then free-text search (OR across fields).
pub fn filter_providers(
    providers: &[Provider],
    favorites: &HashSet<ProviderId>,
    mode: ListMode,
    category: CategoryFilter,
    query: &str,
) -> Vec<Provider> {
    providers
        .iter()
        .filter(|provider| mode != ListMode::Favorites || favorites.contains(&provider.id))
        .filter(|provider| category.matches(provider))
        .filter(|provider| provider.matches_query(query))
        .cloned()
        .collect()
}

/// Premium listings first, then nearest. Providers without a computed
/// distance sort last within their partition. The sort is stable.
pub fn sort_providers(providers: &mut [Provider]) {
    providers.sort_by(|a, b| {
        b.is_premium.cmp(&a.is_premium).then_with(|| {
            let da = a.distance_km.unwrap_or(f64::INFINITY);
            let db = b.distance_km.unwrap_or(f64::INFINITY);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use crate::provider::CareCategory;

    fn listing(id: ProviderId, is_premium: bool, distance_km: Option<f64>) -> Provider {
        let mut provider = mock_data::mock_providers()[0].clone();
        provider.id = id;
        provider.is_premium = is_premium;
        provider.distance_km = distance_km;
        provider
    }

    #[test]
    fn test_toggle_favorite_round_trips() {
        let mut favorites: HashSet<ProviderId> = [3].into_iter().collect();

        toggle_favorite(&mut favorites, 7);
        assert_eq!(favorites, [3, 7].into_iter().collect());

        toggle_favorite(&mut favorites, 7);
        assert_eq!(favorites, [3].into_iter().collect());
    }

    #[test]
    fn test_premium_precedes_closer_non_premium() {
        let mut providers = vec![listing(1, true, Some(5.0)), listing(2, false, Some(1.0))];
        sort_providers(&mut providers);
        let ids: Vec<ProviderId> = providers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_sort_orders_by_distance_within_partition() {
        let mut providers = vec![
            listing(1, false, Some(4.0)),
            listing(2, false, None),
            listing(3, false, Some(0.5)),
            listing(4, true, Some(9.0)),
            listing(5, true, Some(2.0)),
        ];
        sort_providers(&mut providers);
        let ids: Vec<ProviderId> = providers.iter().map(|p| p.id).collect();
        // Premium partition first; unknown distance last in its partition.
        assert_eq!(ids, vec![5, 4, 3, 1, 2]);
    }

    #[test]
    fn test_with_distances_annotates_only_with_origin() {
        let providers = mock_data::mock_providers();

        let plain = with_distances(&providers, None);
        assert!(plain.iter().all(|p| p.distance_km.is_none()));

        let origin = Coordinates::new(40.4168, -3.7038);
        let annotated = with_distances(&providers, Some(origin));
        assert!(annotated.iter().all(|p| p.distance_km.is_some()));
        assert!(annotated.iter().all(|p| p.distance_km.unwrap() >= 0.0));
    }

    #[test]
    fn test_favorites_mode_restricts_to_favorite_ids() {
        let providers = mock_data::mock_providers();
        let favorites: HashSet<ProviderId> = [providers[0].id].into_iter().collect();

        let visible = filter_providers(
            &providers,
            &favorites,
            ListMode::Favorites,
            CategoryFilter::All,
            "",
        );
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, providers[0].id);
    }

    #[test]
    fn test_category_and_query_compose() {
        let providers = mock_data::mock_providers();
        let favorites = HashSet::new();

        let pets = filter_providers(
            &providers,
            &favorites,
            ListMode::All,
            CategoryFilter::Only(CareCategory::Pets),
            "",
        );
        assert!(!pets.is_empty());
        assert!(
            pets.iter()
                .all(|p| p.categories.contains(&CareCategory::Pets))
        );

        let none = filter_providers(
            &providers,
            &favorites,
            ListMode::All,
            CategoryFilter::All,
            "zzzzzz",
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_empty_query_leaves_category_filtered_set_unchanged() {
        let providers = mock_data::mock_providers();
        let favorites = HashSet::new();
        let filter = CategoryFilter::Only(CareCategory::Children);

        let with_empty =
            filter_providers(&providers, &favorites, ListMode::All, filter, "");
        let expected: Vec<ProviderId> = providers
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id)
            .collect();
        let got: Vec<ProviderId> = with_empty.iter().map(|p| p.id).collect();
        assert_eq!(got, expected);
    }
}
