//! Colloquial vehicle nicknames
//!
//! Maps aliases such as "nsx", "vette" or "gtr" to a canonical make/model
//! pair. A query that names an alias is answered straight from the catalog
//! without scoring, so iconic names never surface vehicles that only share
//! words in their description.

use crate::catalog::Vehicle;
use tracing::debug;

/// Canonical make/model an alias resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasEntry {
    pub make: &'static str,
    pub model: &'static str,
}

const fn entry(make: &'static str, model: &'static str) -> AliasEntry {
    AliasEntry { make, model }
}

/// Known aliases, lower-case
pub const ALIASES: &[(&str, AliasEntry)] = &[
    ("nsx", entry("Acura", "NSX")),
    ("vette", entry("Chevrolet", "Corvette")),
    ("z06", entry("Chevrolet", "Corvette")),
    ("gtr", entry("Nissan", "GT-R")),
    ("gt-r", entry("Nissan", "GT-R")),
    ("godzilla", entry("Nissan", "GT-R")),
    ("stang", entry("Ford", "Mustang")),
    ("mx5", entry("Mazda", "MX-5")),
    ("mx-5", entry("Mazda", "MX-5")),
    ("rx7", entry("Mazda", "RX-7")),
    ("rx-7", entry("Mazda", "RX-7")),
    ("911", entry("Porsche", "911")),
    ("supra", entry("Toyota", "Supra")),
    ("mr2", entry("Toyota", "MR2")),
    ("gt86", entry("Toyota", "86")),
    ("s2k", entry("Honda", "S2000")),
    ("sti", entry("Subaru", "WRX STI")),
    ("evo", entry("Mitsubishi", "Lancer Evolution")),
    ("hellcat", entry("Dodge", "Challenger")),
];

/// Look up an alias (case-insensitive)
pub fn lookup(alias: &str) -> Option<AliasEntry> {
    let alias = alias.to_lowercase();
    ALIASES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, entry)| *entry)
}

/// Resolve the first alias in `words` that matches anything in the catalog.
///
/// Returns `None` when no word is an alias or no alias matched a vehicle, in
/// which case the caller falls through to scoring.
pub fn resolve<'a>(words: &[String], vehicles: &'a [Vehicle]) -> Option<Vec<&'a Vehicle>> {
    for word in words {
        let Some(alias) = lookup(word) else {
            continue;
        };

        let exact: Vec<&Vehicle> = vehicles.iter().filter(|v| is_exact(v, &alias)).collect();
        if !exact.is_empty() {
            debug!("Alias '{}' matched {} vehicles exactly", word, exact.len());
            return Some(exact);
        }

        let loose: Vec<&Vehicle> = vehicles.iter().filter(|v| is_loose(v, &alias)).collect();
        if !loose.is_empty() {
            debug!("Alias '{}' matched {} vehicles loosely", word, loose.len());
            return Some(loose);
        }
    }
    None
}

fn is_exact(vehicle: &Vehicle, alias: &AliasEntry) -> bool {
    vehicle.make.eq_ignore_ascii_case(alias.make) && vehicle.model.eq_ignore_ascii_case(alias.model)
}

fn is_loose(vehicle: &Vehicle, alias: &AliasEntry) -> bool {
    if !vehicle.make.eq_ignore_ascii_case(alias.make) {
        return false;
    }

    let model = vehicle.model.to_lowercase();
    let canonical = alias.model.to_lowercase();

    model == canonical
        || strip_hyphens(&model) == strip_hyphens(&canonical)
        || model.starts_with(&format!("{} ", canonical))
        || model.contains(&canonical)
}

fn strip_hyphens(s: &str) -> String {
    s.chars().filter(|c| *c != '-').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(query: &str) -> Vec<String> {
        query.split_whitespace().map(|w| w.to_lowercase()).collect()
    }

    fn catalog() -> Vec<Vehicle> {
        vec![
            Vehicle::new("1", "Acura", "NSX", 2017, 150000.0, 8000),
            Vehicle::new("2", "Acura", "TLX", 2020, 32000.0, 20000)
                .with_description("Not an NSX but close"),
            Vehicle::new("3", "Nissan", "GTR", 2015, 80000.0, 30000),
            Vehicle::new("4", "Mazda", "MX-5 Miata", 2019, 24000.0, 12000),
            Vehicle::new("5", "Toyota", "GR Supra", 2021, 52000.0, 6000),
            Vehicle::new("6", "Chevrolet", "Corvette", 2019, 60000.0, 10000),
        ]
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("NSX"), Some(entry("Acura", "NSX")));
        assert_eq!(lookup("vette"), Some(entry("Chevrolet", "Corvette")));
        assert!(lookup("civic").is_none());
    }

    #[test]
    fn test_aliases_are_lower_case_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in ALIASES {
            assert_eq!(*name, name.to_lowercase());
            assert!(seen.insert(*name), "duplicate alias {}", name);
        }
    }

    #[test]
    fn test_exact_match_only() {
        let catalog = catalog();
        let result = resolve(&words("nsx"), &catalog).unwrap();
        let ids: Vec<_> = result.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_hyphen_insensitive_loose_match() {
        let catalog = catalog();
        let result = resolve(&words("gtr"), &catalog).unwrap();
        assert_eq!(result[0].id, "3");
    }

    #[test]
    fn test_prefix_loose_match() {
        let catalog = catalog();
        let result = resolve(&words("mx5"), &catalog).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "4");
    }

    #[test]
    fn test_substring_loose_match() {
        let catalog = catalog();
        let result = resolve(&words("supra"), &catalog).unwrap();
        assert_eq!(result[0].id, "5");
    }

    #[test]
    fn test_first_matching_alias_wins() {
        let catalog = catalog();
        // "stang" is an alias but nothing matches, so "vette" decides
        let result = resolve(&words("stang vette"), &catalog).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "6");
    }

    #[test]
    fn test_no_alias_or_no_match() {
        let catalog = catalog();
        assert!(resolve(&words("family suv"), &catalog).is_none());
        assert!(resolve(&words("hellcat"), &catalog).is_none());
    }
}
