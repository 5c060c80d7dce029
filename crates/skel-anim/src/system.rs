//! Animation system driving every registered entity once per frame

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::animation::AnimationClip;
use crate::error::{Result, SkelAnimError};
use crate::instance::SkinnedInstance;
use crate::skeleton::Skeleton;
use crate::skinning::SkinMatrixPalette;

/// Opaque handle of a skinned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns one `SkinnedInstance` per entity
#[derive(Debug, Default)]
pub struct AnimationSystem {
    instances: HashMap<EntityId, SkinnedInstance>,
}

impl AnimationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity showing `skeleton`'s bind pose
    pub fn insert(&mut self, entity: EntityId, skeleton: Arc<Skeleton>) -> Result<()> {
        if self.instances.contains_key(&entity) {
            return Err(SkelAnimError::DuplicateEntity(entity));
        }
        log::debug!(
            "Registering entity {} with skeleton '{}' ({} bones)",
            entity,
            skeleton.name(),
            skeleton.bone_count()
        );
        self.instances.insert(entity, SkinnedInstance::new(skeleton));
        Ok(())
    }

    /// Unregister an entity, returning its instance
    pub fn remove(&mut self, entity: EntityId) -> Option<SkinnedInstance> {
        self.instances.remove(&entity)
    }

    pub fn bind(&mut self, entity: EntityId, clip: Arc<AnimationClip>) -> Result<()> {
        self.instance_mut(entity)?.bind(clip);
        Ok(())
    }

    pub fn unbind(&mut self, entity: EntityId) -> Result<()> {
        self.instance_mut(entity)?.unbind();
        Ok(())
    }

    pub fn play(&mut self, entity: EntityId) -> Result<()> {
        self.instance_mut(entity)?.play();
        Ok(())
    }

    pub fn pause(&mut self, entity: EntityId) -> Result<()> {
        self.instance_mut(entity)?.pause();
        Ok(())
    }

    pub fn stop(&mut self, entity: EntityId) -> Result<()> {
        self.instance_mut(entity)?.stop();
        Ok(())
    }

    /// Advance every entity by `delta_seconds`
    pub fn update(&mut self, delta_seconds: f32) {
        for instance in self.instances.values_mut() {
            instance.update(delta_seconds);
        }
    }

    /// Palette the renderer should use for `entity`
    pub fn bound_palette(&self, entity: EntityId) -> Option<&SkinMatrixPalette> {
        self.instances.get(&entity).map(SkinnedInstance::bound_palette)
    }

    pub fn instance(&self, entity: EntityId) -> Option<&SkinnedInstance> {
        self.instances.get(&entity)
    }

    pub fn instance_mut(&mut self, entity: EntityId) -> Result<&mut SkinnedInstance> {
        self.instances
            .get_mut(&entity)
            .ok_or(SkelAnimError::UnknownEntity(entity))
    }

    /// Registered entities in ascending order
    pub fn entities(&self) -> Vec<EntityId> {
        let mut entities: Vec<_> = self.instances.keys().copied().collect();
        entities.sort_unstable();
        entities
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
