use crate::model::card::{CardDefinition, PairId};

/// The fixed set of distinct pictures a deck can be sampled from.
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<CardDefinition>,
}

impl Catalog {
    pub fn new(definitions: Vec<CardDefinition>) -> Self {
        Self { definitions }
    }

    /// The catalog shipped with the game: sixteen pictures, enough for
    /// the largest deck.
    pub fn builtin() -> Self {
        const NAMES: [&str; 16] = [
            "fox", "owl", "bear", "wolf", "hare", "lynx", "deer", "boar", "swan", "crow", "mole",
            "frog", "newt", "pike", "wasp", "moth",
        ];
        let definitions = NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| CardDefinition::new(PairId(index as u16 + 1), *name))
            .collect();
        Self { definitions }
    }

    /// A synthetic catalog of `count` numbered pictures, for tests.
    pub fn with_size(count: usize) -> Self {
        let definitions = (0..count)
            .map(|index| {
                CardDefinition::new(PairId(index as u16 + 1), format!("picture-{}", index + 1))
            })
            .collect();
        Self { definitions }
    }

    pub fn definitions(&self) -> &[CardDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
