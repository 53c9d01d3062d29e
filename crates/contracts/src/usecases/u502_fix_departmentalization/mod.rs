pub mod dto;
pub mod scan;

pub use dto::{Divergence, DivergenceReport};
pub use scan::{DivergencePhase, ScanOutcome};

use crate::usecases::common::UseCaseMetadata;

/// Divergence scan between the legacy file and the database.
pub const SCAN_PATH: &str = "/api/produtos/corrigir";
/// Applies the database values of the listed divergences.
pub const CORRECT_PATH: &str = "/api/produtos/atualizar_codgss";

pub struct FixDepartmentalization;

impl UseCaseMetadata for FixDepartmentalization {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "fix_departmentalization"
    }

    fn display_name() -> &'static str {
        "Corrigir Departamentalização"
    }

    fn description() -> &'static str {
        "Verificar e corrigir divergências de subgrupo entre o DBF e o banco"
    }

    fn route() -> &'static str {
        "/corrigir-departamentalizacao"
    }
}
