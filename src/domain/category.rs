// src/domain/category.rs
//
// Category - the closed set of entity kinds
//
// from_name() is for statically known names and panics on anything else.
// Text coming from outside the crate goes through FromStr instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Tvshow,
    Episode,
    Actor,
}

impl Category {
    /// Every category, in the priority order used by guess lookup.
    pub const ALL: [Category; 4] = [
        Category::Movie,
        Category::Tvshow,
        Category::Episode,
        Category::Actor,
    ];

    /// Map a lowercase name to its category.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of the four recognized names. Callers
    /// only ever pass literals, so an unknown name is a bug.
    pub fn from_name(name: &str) -> Category {
        match Self::lookup(name) {
            Some(category) => category,
            None => panic!("BUG: unrecognized entity {}", name),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Movie => "movie",
            Category::Tvshow => "tvshow",
            Category::Episode => "episode",
            Category::Actor => "actor",
        }
    }

    fn lookup(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| AppError::UnrecognizedCategory(s.to_string()))
    }
}
