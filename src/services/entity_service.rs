// src/services/entity_service.rs
//
// Entity Service - lookups for callers
//
// RULES:
// - Directed lookup when the category is known, guess lookup otherwise
// - Attribute enrichment happens only when asked for, after a successful load
// - Episode -> show is always an explicit second lookup

use std::sync::Arc;

use crate::domain::{Atom, Category, Entity, EntityRecord, Tvshow};
use crate::error::{AppError, AppResult};
use crate::repositories::EntityRepository;

pub struct EntityService {
    repo: Arc<dyn EntityRepository>,
}

impl EntityService {
    pub fn new(repo: Arc<dyn EntityRepository>) -> Self {
        Self { repo }
    }

    /// Directed lookup: only `category`'s table is consulted.
    pub fn resolve(&self, category: Category, id: Atom) -> AppResult<Entity> {
        self.repo.get(category, id)
    }

    /// Guess lookup: first hit in movie, tvshow, episode, actor order.
    pub fn resolve_any(&self, id: Atom) -> AppResult<Entity> {
        self.repo.guess(id)
    }

    /// Look up an entity (directed if `category` is given) and load its
    /// attributes. A failure in either step is returned unchanged.
    pub fn resolve_with_attributes(
        &self,
        category: Option<Category>,
        id: Atom,
    ) -> AppResult<Entity> {
        let entity = match category {
            Some(category) => self.resolve(category, id)?,
            None => self.resolve_any(id)?,
        };

        self.repo.enrich(&entity)?;
        log::debug!("enriched {} {}", entity.category(), id);

        Ok(entity)
    }

    /// The show owning episode `episode_id`.
    pub fn owning_tvshow(&self, episode_id: Atom) -> AppResult<Tvshow> {
        let entity = self.repo.get(Category::Episode, episode_id)?;
        let episode = entity.as_episode().ok_or_else(|| {
            AppError::Other(format!(
                "Expected episode for atom {}, got {}",
                episode_id,
                entity.category()
            ))
        })?;

        self.repo.tvshow_for_episode(episode)
    }
}
