//! CRUD tab shared by the four levels of the departmentalization tree.
//!
//! A level plugs in through a [`HierarchyTabConfig`]; the view, the view model
//! and the API calls are the same for every level.

pub mod api;
pub mod view;
pub mod view_model;

use contracts::domain::common::HierarchyLevel;

pub use view::HierarchyTab;

/// Texts and wiring of one hierarchy level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyTabConfig {
    pub level: HierarchyLevel,
    /// Tab label and section title, e.g. "Departamentos"
    pub title: &'static str,
    /// Singular name used in buttons and messages, e.g. "Departamento"
    pub entity_name: &'static str,
    /// Plural used in load errors, e.g. "departamentos"
    pub plural_lower: &'static str,
    pub text_header: &'static str,
    pub text_label: &'static str,
    pub parent: Option<ParentConfig>,
}

/// Parent column and select of levels below the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentConfig {
    pub header: &'static str,
    pub placeholder: &'static str,
    /// Used in load errors, e.g. "níveis 4"
    pub plural_lower: &'static str,
}

impl HierarchyTabConfig {
    pub fn new_title(&self) -> String {
        format!("Novo {}", self.entity_name)
    }

    pub fn edit_title(&self) -> String {
        format!("Editar {}", self.entity_name)
    }

    pub fn saved_message(&self, editing: bool) -> String {
        if editing {
            format!("{} atualizado", self.entity_name)
        } else {
            format!("{} criado", self.entity_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::a002_departamento::TAB;

    #[test]
    fn test_messages_follow_entity_name() {
        assert_eq!(TAB.new_title(), "Novo Departamento");
        assert_eq!(TAB.edit_title(), "Editar Departamento");
        assert_eq!(TAB.saved_message(false), "Departamento criado");
        assert_eq!(TAB.saved_message(true), "Departamento atualizado");
    }
}
