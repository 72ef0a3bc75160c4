/// Location pool paired with the region each location is reported under.
///
/// The first column is the sampling pool; every sampled location therefore
/// has a region.
pub static REGION_MAPPING: &[(&str, &str)] = &[
    ("Nigeria", "Africa"),
    ("Ghana", "Africa"),
    ("South Africa", "Africa"),
    ("Cameroon", "Africa"),
    ("Kenya", "Africa"),
    ("Tanzania", "Africa"),
    ("United Kingdom", "Europe"),
    ("Germany", "Europe"),
    ("France", "Europe"),
    ("Netherlands", "Europe"),
    ("Spain", "Europe"),
    ("Italy", "Europe"),
    ("United States", "North America"),
    ("Canada", "North America"),
    ("Mexico", "North America"),
    ("India", "Asia"),
    ("Pakistan", "Asia"),
    ("Philippines", "Asia"),
    ("Singapore", "Asia"),
    ("Malaysia", "Asia"),
    ("Indonesia", "Asia"),
    ("UAE", "Middle East"),
    ("Saudi Arabia", "Middle East"),
    ("Qatar", "Middle East"),
    ("Australia", "Oceania"),
    ("New Zealand", "Oceania"),
    ("Brazil", "South America"),
    ("Argentina", "South America"),
    ("Colombia", "South America"),
];

/// Returns the region for `location`, or `None` if it is not in the pool.
pub fn region_for(location: &str) -> Option<&'static str> {
    REGION_MAPPING
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_lookup() {
        assert_eq!(region_for("Kenya"), Some("Africa"));
        assert_eq!(region_for("Qatar"), Some("Middle East"));
        assert_eq!(region_for("Atlantis"), None);
    }

    #[test]
    fn test_every_location_has_a_region() {
        for (location, _) in REGION_MAPPING {
            assert!(region_for(location).is_some(), "{location} has no region");
        }
    }

    #[test]
    fn test_pool_has_no_duplicates() {
        let unique: HashSet<_> = REGION_MAPPING.iter().map(|(name, _)| *name).collect();
        assert_eq!(unique.len(), REGION_MAPPING.len());
    }

    #[test]
    fn test_seven_regions() {
        let regions: HashSet<_> = REGION_MAPPING.iter().map(|(_, r)| *r).collect();
        assert_eq!(regions.len(), 7);
    }
}
