//! Static float catalog.
//!
//! Floats are loaded once at startup from an embedded JSON document and never
//! mutated afterwards. Every float carries at least one position, oldest
//! first; the last one is where the float currently is.

use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::geo::{GeoBounds, Position};

pub type FloatId = u32;

static BUILTIN_JSON: &str = include_str!("../data/floats.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("position out of range: lat={latitude}, lon={longitude}")]
    InvalidPosition { latitude: f64, longitude: f64 },
    #[error("float {0} has no positions")]
    EmptyTrack(FloatId),
    #[error("duplicate float id {0}")]
    DuplicateId(FloatId),
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Float {
    id: FloatId,
    name: String,
    positions: Vec<Position>,
}

impl Float {
    pub fn new(
        id: FloatId,
        name: impl Into<String>,
        positions: Vec<Position>,
    ) -> Result<Self, CatalogError> {
        if positions.is_empty() {
            return Err(CatalogError::EmptyTrack(id));
        }
        Ok(Self {
            id,
            name: name.into(),
            positions,
        })
    }

    #[inline]
    pub fn id(&self) -> FloatId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full track, oldest first. Never empty.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn latest(&self) -> Position {
        // non-empty by construction
        self.positions[self.positions.len() - 1]
    }

    /// True when there is a track worth drawing as a line.
    #[inline]
    pub fn has_track(&self) -> bool {
        self.positions.len() > 1
    }
}

#[derive(Deserialize)]
struct FloatRecord {
    id: FloatId,
    name: String,
    positions: Vec<Position>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    floats: Vec<Float>,
    // id -> index into `floats`
    index: FnvHashMap<FloatId, usize>,
}

impl Catalog {
    pub fn new(floats: Vec<Float>) -> Result<Self, CatalogError> {
        let mut index = FnvHashMap::default();
        for (i, f) in floats.iter().enumerate() {
            if index.insert(f.id, i).is_some() {
                return Err(CatalogError::DuplicateId(f.id));
            }
        }
        Ok(Self { floats, index })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<FloatRecord> = serde_json::from_str(json)?;
        let floats = records
            .into_iter()
            .map(|r| Float::new(r.id, r.name, r.positions))
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(floats)?;
        log::info!("[catalog] loaded {} floats", catalog.len());
        Ok(catalog)
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_JSON)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Float> {
        self.floats.iter()
    }

    pub fn get(&self, id: FloatId) -> Option<&Float> {
        self.index.get(&id).map(|&i| &self.floats[i])
    }

    pub fn len(&self) -> usize {
        self.floats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_positions(self.floats.iter().flat_map(|f| f.positions.iter()))
    }
}
