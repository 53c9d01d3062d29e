use contracts::domain::common::HierarchyLevel;

use crate::domain::common::HierarchyTabConfig;

pub const TAB: HierarchyTabConfig = HierarchyTabConfig {
    level: HierarchyLevel::Nivel4,
    title: "Nível 4",
    entity_name: "Nível 4",
    plural_lower: "níveis 4",
    text_header: "Descrição",
    text_label: "Descrição",
    parent: None,
};
