use serde::Deserialize;

/// The slice of the PokeAPI `/pokemon/{id-or-name}` payload this crate reads
#[derive(Deserialize, Clone, Debug)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,

    /// Height in decimetres
    #[serde(default)]
    pub height: u32,

    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    #[serde(default)]
    pub stats: Vec<StatEntry>,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub sprites: Sprites,
}

/// A `{ "name": ... }` reference as PokeAPI nests them everywhere
#[derive(Deserialize, Clone, Debug)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StatEntry {
    pub base_stat: u32,

    #[serde(default)]
    pub effort: u32,

    pub stat: NamedResource,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprite,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ArtworkSprite {
    pub front_default: Option<String>,
}
