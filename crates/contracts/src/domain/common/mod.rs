//! Common types and traits for the departmentalization hierarchy

pub mod hierarchy;

// Re-exports
pub use hierarchy::{
    describe_parent, HierarchyEntity, HierarchyForm, HierarchyLevel, HierarchyRecord,
    NEW_RECORD_CODE,
};
