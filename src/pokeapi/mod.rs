/// Raw PokeAPI response payloads
pub mod response;

/// Species lookup HTTP endpoint
pub mod endpoints;

use std::collections::BTreeMap;
use std::fs;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::pokemon::stats::StatName;
use response::PokemonResponse;

/// The public PokeAPI endpoint, used when `config.toml` does not override it
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Species data as the rest of the crate consumes it, flattened from the raw
/// PokeAPI payload
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Species {
    /// The numeric PokeAPI id
    pub id: u32,

    /// The species name
    pub name: String,

    /// URL of the official artwork sprite
    pub sprite_url: Option<String>,

    /// Base value per stat
    pub base_stats: BTreeMap<StatName, u32>,

    /// Effort values the data source reports; stats without an entry yield 0
    pub effort_values: BTreeMap<StatName, u32>,

    /// Ability names
    pub abilities: Vec<String>,

    /// Type names
    pub types: Vec<String>,

    /// Height in metres (PokeAPI serves decimetres)
    pub height_m: f32,

    /// Weight in kilograms (PokeAPI serves hectograms)
    pub weight_kg: f32,
}

impl Species {
    /// Flattens a raw PokeAPI payload.
    ///
    /// Stat entries with names outside the six known ones are skipped; effort
    /// values are only recorded where the source reports a non-zero one.
    pub fn from_response(resp: PokemonResponse) -> Self {
        let mut base_stats = BTreeMap::new();
        let mut effort_values = BTreeMap::new();

        for entry in resp.stats {
            let Ok(name) = entry.stat.name.parse::<StatName>() else {
                continue;
            };
            base_stats.insert(name, entry.base_stat);
            if entry.effort > 0 {
                effort_values.insert(name, entry.effort);
            }
        }

        Species {
            id: resp.id,
            name: resp.name,
            sprite_url: resp.sprites.other.official_artwork.front_default,
            base_stats,
            effort_values,
            abilities: resp.abilities.into_iter().map(|a| a.ability.name).collect(),
            types: resp.types.into_iter().map(|t| t.type_.name).collect(),
            height_m: resp.height as f32 / 10.0,
            weight_kg: resp.weight as f32 / 10.0,
        }
    }
}

/// Pulls `pokeapi.base_url` out of a parsed config table; `None` when the
/// section or the key is missing
pub(crate) fn base_url_from_table(cfg: &toml::Table) -> Option<String> {
    cfg.get("pokeapi")?
        .get("base_url")?
        .as_str()
        .map(str::to_owned)
}

/// Read-only client for the PokeAPI species lookup
///
/// The client does not retry and does not cache; resilience around the
/// lookup belongs to callers.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        PokeApiClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds a client with the base URL from `config.toml`, falling back to
    /// the public PokeAPI when the file or the key is absent
    pub fn from_config() -> Self {
        let base_url = fs::read_to_string("config.toml")
            .ok()
            .and_then(|raw| raw.parse::<toml::Table>().ok())
            .and_then(|cfg| base_url_from_table(&cfg))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    /// Looks up a species by name or numeric id.
    ///
    /// `Ok(None)` means the API does not know the identifier; transport and
    /// decode failures surface as errors. No Pokemon is ever constructed from
    /// a failed lookup.
    pub async fn fetch_species(&self, identifier: &str) -> Result<Option<Species>> {
        let url = format!("{}/pokemon/{}", self.base_url, identifier.to_lowercase());
        info!("Fetching species data from {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let payload: PokemonResponse = response.error_for_status()?.json().await?;

        Ok(Some(Species::from_response(payload)))
    }
}
