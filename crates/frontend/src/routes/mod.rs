pub mod routes;

/// Browser paths that are not owned by a use case.
pub mod paths {
    pub const HOME: &str = "/";
    pub const HIERARCHY_TABLES: &str = "/tabelas-departamentalizacao";
    pub const SETTINGS: &str = "/configuracoes";
}
