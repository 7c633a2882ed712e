use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::pokeapi::Species;
use crate::pokemon::Pokemon;
use crate::pokemon::stats::{StatName, compute_stat};

fn pikachu_species() -> Species {
    let mut base_stats = BTreeMap::new();
    for (name, base) in [
        (StatName::Hp, 35),
        (StatName::Attack, 55),
        (StatName::Defense, 40),
        (StatName::SpecialAttack, 50),
        (StatName::SpecialDefense, 50),
        (StatName::Speed, 90),
    ] {
        base_stats.insert(name, base);
    }

    let mut effort_values = BTreeMap::new();
    effort_values.insert(StatName::Speed, 2);

    Species {
        id: 25,
        name: "pikachu".to_string(),
        sprite_url: Some("https://example.com/sprites/25.png".to_string()),
        base_stats,
        effort_values,
        abilities: vec!["static".to_string(), "lightning-rod".to_string()],
        types: vec!["electric".to_string()],
        height_m: 0.4,
        weight_kg: 6.0,
    }
}

#[test]
fn test_from_species_derives_all_stats() {
    let mut rng = StdRng::seed_from_u64(25);
    let pokemon = Pokemon::from_species(&pikachu_species(), 5, &mut rng);

    assert_eq!(pokemon.name, "pikachu");
    assert_eq!(pokemon.species_id, 25);
    assert_eq!(pokemon.level(), 5);
    assert_eq!(pokemon.types, vec!["electric".to_string()]);
    assert_eq!(pokemon.stats().len(), 6);

    for (name, stat) in pokemon.stats() {
        assert!((1..=31).contains(&stat.iv), "iv {} out of range", stat.iv);
        assert_eq!(
            stat.value,
            compute_stat(stat.base, stat.effort, stat.iv, 5, *name == StatName::Hp)
        );
    }

    // effort comes from the species data, defaulting to 0
    assert_eq!(pokemon.stat(StatName::Speed).unwrap().effort, 2);
    assert_eq!(pokemon.stat(StatName::Attack).unwrap().effort, 0);

    assert!(!pokemon.is_fainted());
}

#[test]
fn test_set_level_recomputes_but_keeps_ivs() {
    let mut rng = StdRng::seed_from_u64(25);
    let mut pokemon = Pokemon::from_species(&pikachu_species(), 5, &mut rng);

    let ivs_before: Vec<u32> = pokemon.stats().values().map(|s| s.iv).collect();

    pokemon.set_level(50);

    let ivs_after: Vec<u32> = pokemon.stats().values().map(|s| s.iv).collect();
    assert_eq!(ivs_before, ivs_after, "ivs must never be re-rolled");
    assert_eq!(pokemon.level(), 50);

    for (name, stat) in pokemon.stats() {
        assert_eq!(
            stat.value,
            compute_stat(stat.base, stat.effort, stat.iv, 50, *name == StatName::Hp)
        );
    }
}

#[test]
#[should_panic(expected = "level must be at least 1")]
fn test_from_species_rejects_level_zero() {
    let mut rng = StdRng::seed_from_u64(25);
    Pokemon::from_species(&pikachu_species(), 0, &mut rng);
}

#[test]
fn test_missing_species_stats_stay_missing() {
    let mut species = pikachu_species();
    species.base_stats.remove(&StatName::Speed);

    let mut rng = StdRng::seed_from_u64(25);
    let pokemon = Pokemon::from_species(&species, 5, &mut rng);

    assert_eq!(pokemon.stats().len(), 5);
    assert!(pokemon.stat(StatName::Speed).is_none());
    assert!(pokemon.stat_value(StatName::Speed).is_none());
}
