use serde::{Deserialize, Serialize};

/// Token issued by the service after a successful `get_api_key` call.
/// Opaque to the client: no local validation, no expiry tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthKey {
    pub key: String,
}

/// Pet record as echoed by the service. Every field travels as an opaque
/// string so the suite can submit deliberately malformed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    #[serde(default)]
    pub pet_photo: String,
}

/// Envelope returned by the listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetList {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|p| p.id == pet_id)
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

/// Listing filter accepted by the service: the whole list, or only the pets
/// owned by the authenticated account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PetFilter {
    #[default]
    All,
    MyPets,
}

impl PetFilter {
    /// Wire value sent as the `filter` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl std::str::FromStr for PetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(PetFilter::All),
            "my_pets" | "my-pets" => Ok(PetFilter::MyPets),
            other => Err(format!("unknown filter: {other} (expected all or my_pets)")),
        }
    }
}
