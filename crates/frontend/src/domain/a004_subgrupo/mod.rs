pub mod api;

use contracts::domain::common::HierarchyLevel;

use crate::domain::common::hierarchy_tab::ParentConfig;
use crate::domain::common::HierarchyTabConfig;

pub const TAB: HierarchyTabConfig = HierarchyTabConfig {
    level: HierarchyLevel::Subgrupo,
    title: "Subgrupos",
    entity_name: "Subgrupo",
    plural_lower: "subgrupos",
    text_header: "Descrição",
    text_label: "Descrição do Subgrupo",
    parent: Some(ParentConfig {
        header: "Grupo",
        placeholder: "Selecione um grupo",
        plural_lower: "grupos",
    }),
};
