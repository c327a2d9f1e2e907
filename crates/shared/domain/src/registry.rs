//! Slice registry for modular features.
//! This provides a minimal type-erased container for the pre-initialized feature state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Marker trait for feature state that can be shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    fn name(&self) -> &'static str;
}

/// A container for an initialized feature.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Create a new initialized slice from a concrete state.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state) }
    }

    /// Returns the concrete state if it is a `T`.
    #[must_use]
    pub fn downcast<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}

/// The set of slices initialized at the composition root.
#[derive(Debug, Default)]
pub struct SliceRegistry {
    slices: Vec<InitializedSlice>,
}

impl SliceRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Adds a slice, replacing any previous slice of the same type.
    pub fn insert(&mut self, slice: InitializedSlice) {
        self.slices.retain(|s| s.id != slice.id);
        self.slices.push(slice);
    }

    #[must_use]
    pub fn get<T: FeatureSlice>(&self) -> Option<&T> {
        let id = TypeId::of::<T>();
        self.slices.iter().find(|s| s.id == id).and_then(InitializedSlice::downcast::<T>)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.iter().map(|s| s.state.name())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.slices.len()
    }
}

impl FromIterator<InitializedSlice> for SliceRegistry {
    fn from_iter<I: IntoIterator<Item = InitializedSlice>>(iter: I) -> Self {
        let mut registry = Self::new();
        for slice in iter {
            registry.insert(slice);
        }
        registry
    }
}
