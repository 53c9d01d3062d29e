pub mod dto;
pub mod normalize;
pub mod phase;
pub mod picker;
pub mod session;

pub use dto::{PendingProduct, ProductSubmission, SubmitResponse};
pub use normalize::normalize_description;
pub use phase::{ExitDecision, ReviewPhase};
pub use picker::{SubgrupoPickerState, PICKER_PAGE_SIZE};
pub use session::{ReviewSession, DEFAULT_GRID_PAGE_SIZE, GRID_PAGE_SIZE_OPTIONS};

use crate::usecases::common::UseCaseMetadata;

/// Review queues served by the classification page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewQueue {
    /// Legacy products missing from the database, to be registered.
    Register,
    /// Scale products and products with generated barcodes, to be corrected.
    ScaleBarcode,
}

impl ReviewQueue {
    pub fn load_path(self) -> &'static str {
        match self {
            ReviewQueue::Register => "/api/produtos/cadastrar-ia",
            ReviewQueue::ScaleBarcode => "/api/produtos/balanca-barras-gerado-ia",
        }
    }

    pub fn submit_path(self) -> &'static str {
        match self {
            ReviewQueue::Register => "/api/produtos/cadastrar",
            ReviewQueue::ScaleBarcode => "/api/produtos/atualizar_codgss",
        }
    }
}

/// Product registration with IA-suggested subgroups.
pub struct RegisterProducts;

impl UseCaseMetadata for RegisterProducts {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "register_products"
    }

    fn display_name() -> &'static str {
        "Cadastro de Produtos"
    }

    fn description() -> &'static str {
        "Cadastrar produtos do DBF não encontrados no banco, com subgrupo sugerido pela IA"
    }

    fn route() -> &'static str {
        "/cadastro-produtos"
    }
}

/// Subgroup correction of scale products and generated barcodes.
pub struct FixScaleBarcodeProducts;

impl UseCaseMetadata for FixScaleBarcodeProducts {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "fix_scale_barcode_products"
    }

    fn display_name() -> &'static str {
        "Correção de Produtos (Produtos de balança e Código de Barras gerado)"
    }

    fn description() -> &'static str {
        "Revisar o subgrupo de produtos de balança e com código de barras gerado"
    }

    fn route() -> &'static str {
        "/corrigir-codigo-barras"
    }
}
