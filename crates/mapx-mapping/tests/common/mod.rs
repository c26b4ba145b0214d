//! Shared fixtures for the mapping extension tests.

use mapx_core::{Mapper, MapxResult, Sortable};
use std::collections::HashMap;

/// Source-shaped account record.
#[derive(Debug, Clone, Default)]
pub struct Compte {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Destination-shaped account record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompteDto {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Sortable for CompteDto {
    fn sort_key(&self, field: &str) -> Option<String> {
        match field {
            "id" => self.id.clone(),
            "name" => self.name.clone(),
            _ => None,
        }
    }
}

/// Field-by-field mapper from `Compte` to `CompteDto`.
pub struct CompteMapper;

impl Mapper<Compte, CompteDto> for CompteMapper {
    fn map(&self, source: &Compte) -> MapxResult<CompteDto> {
        Ok(CompteDto {
            id: source.id.clone(),
            name: source.name.clone(),
        })
    }

    fn map_into(&self, source: &Compte, destination: &mut CompteDto) -> MapxResult<()> {
        destination.id = source.id.clone();
        destination.name = source.name.clone();
        Ok(())
    }
}

/// One account per letter, keyed "A" through "Z", named "Compte {key}".
pub fn comptes() -> Vec<Compte> {
    ('A'..='Z')
        .map(|c| Compte {
            id: Some(c.to_string()),
            name: Some(format!("Compte {}", c)),
        })
        .collect()
}

/// The account catalog keyed by id.
pub fn comptes_by_id() -> HashMap<String, Compte> {
    comptes()
        .into_iter()
        .map(|compte| (compte.id.clone().unwrap(), compte))
        .collect()
}
