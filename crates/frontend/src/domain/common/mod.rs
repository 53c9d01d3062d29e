pub mod hierarchy_tab;
pub mod page;

pub use hierarchy_tab::{HierarchyTab, HierarchyTabConfig};
pub use page::DepartmentalizationTablesPage;
