use contracts::domain::common::HierarchyLevel;

use crate::domain::common::hierarchy_tab::ParentConfig;
use crate::domain::common::HierarchyTabConfig;

pub const TAB: HierarchyTabConfig = HierarchyTabConfig {
    level: HierarchyLevel::Departamento,
    title: "Departamentos",
    entity_name: "Departamento",
    plural_lower: "departamentos",
    text_header: "Nome",
    text_label: "Nome do Departamento",
    parent: Some(ParentConfig {
        header: "Nível 4",
        placeholder: "Selecione um nível 4",
        plural_lower: "níveis 4",
    }),
};
