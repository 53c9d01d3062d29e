pub mod api;
pub mod picker;
pub mod view;
pub mod view_model;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_classify_products::{
    FixScaleBarcodeProducts, PendingProduct, ProductSubmission, RegisterProducts, SubmitResponse,
};
use leptos::prelude::*;

use api::ApiFuture;
use crate::system::database::RequireActiveDatabase;
pub use view::ClassificationReviewPage;

/// What differs between the review pages.
#[derive(Clone, Copy)]
pub struct ReviewWorkflowConfig {
    pub title: &'static str,
    pub load: fn() -> ApiFuture<Vec<PendingProduct>>,
    pub submit: fn(Vec<ProductSubmission>) -> ApiFuture<SubmitResponse>,
    /// Inline description editing in the grid
    pub description_editing: bool,
}

impl ReviewWorkflowConfig {
    pub fn register() -> Self {
        Self {
            title: RegisterProducts::display_name(),
            load: api::load_register,
            submit: api::submit_register,
            description_editing: true,
        }
    }

    pub fn scale_barcode() -> Self {
        Self {
            title: FixScaleBarcodeProducts::display_name(),
            load: api::load_scale_barcode,
            submit: api::submit_scale_barcode,
            description_editing: false,
        }
    }
}

#[component]
pub fn RegisterProductsPage() -> impl IntoView {
    log::debug!("Opening {}", RegisterProducts::full_name());
    view! {
        <RequireActiveDatabase>
            <ClassificationReviewPage config=ReviewWorkflowConfig::register() />
        </RequireActiveDatabase>
    }
}

#[component]
pub fn FixScaleBarcodePage() -> impl IntoView {
    log::debug!("Opening {}", FixScaleBarcodeProducts::full_name());
    view! {
        <RequireActiveDatabase>
            <ClassificationReviewPage config=ReviewWorkflowConfig::scale_barcode() />
        </RequireActiveDatabase>
    }
}
