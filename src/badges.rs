//! Badge labels for well-known variation key fragments.
//!
//! The table is data, not code: matching is a substring search over the
//! lowercased variation key, first hit wins. `reverse_holo` must come before
//! `holo` so a reverse holo never matches the plain holo entry.

pub struct Badge {
    pub fragment: &'static str,
    pub label: &'static str,
}

pub const BADGES: &[Badge] = &[
    Badge { fragment: "first_edition", label: "1st Edition" },
    Badge { fragment: "world_championship", label: "World Championship" },
    Badge { fragment: "reverse_holo", label: "Reverse Holo" },
    Badge { fragment: "holo", label: "Holo" },
    Badge { fragment: "pokemon_center", label: "Pokémon Center" },
    Badge { fragment: "prerelese_stamp", label: "Prerelease" },
    Badge { fragment: "comic-con", label: "Comic-Con" },
    Badge { fragment: "trick_or_trade", label: "Trick or Trade" },
    Badge { fragment: "10th_anniversary", label: "10th Anniversary" },
    Badge { fragment: "tropical_mega_battle", label: "Tropical Mega Battle" },
];

/// The badge for a variation key, if any fragment matches.
pub fn badge_for(key: &str) -> Option<&'static Badge> {
    let key = key.to_lowercase();
    BADGES.iter().find(|b| key.contains(b.fragment))
}
