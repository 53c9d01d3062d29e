use contracts::domain::common::HierarchyLevel;

use crate::domain::common::hierarchy_tab::ParentConfig;
use crate::domain::common::HierarchyTabConfig;

pub const TAB: HierarchyTabConfig = HierarchyTabConfig {
    level: HierarchyLevel::Grupo,
    title: "Grupos",
    entity_name: "Grupo",
    plural_lower: "grupos",
    text_header: "Descrição",
    text_label: "Descrição do Grupo",
    parent: Some(ParentConfig {
        header: "Departamento",
        placeholder: "Selecione um departamento",
        plural_lower: "departamentos",
    }),
};
