use std::future::Future;
use std::pin::Pin;

use contracts::shared::ApiError;
use contracts::usecases::u501_classify_products::{
    PendingProduct, ProductSubmission, ReviewQueue, SubmitResponse,
};

use crate::shared::api_utils::{get_json, post_json};

pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// Pending products of `queue`, with the IA-suggested subgroup.
/// The service calls the classifier while answering, so this can take long.
pub async fn fetch_pending(queue: ReviewQueue) -> Result<Vec<PendingProduct>, ApiError> {
    get_json(queue.load_path()).await
}

pub async fn submit(
    queue: ReviewQueue,
    products: Vec<ProductSubmission>,
) -> Result<SubmitResponse, ApiError> {
    post_json(queue.submit_path(), &products).await
}

pub fn load_register() -> ApiFuture<Vec<PendingProduct>> {
    Box::pin(fetch_pending(ReviewQueue::Register))
}

pub fn submit_register(products: Vec<ProductSubmission>) -> ApiFuture<SubmitResponse> {
    Box::pin(submit(ReviewQueue::Register, products))
}

pub fn load_scale_barcode() -> ApiFuture<Vec<PendingProduct>> {
    Box::pin(fetch_pending(ReviewQueue::ScaleBarcode))
}

pub fn submit_scale_barcode(products: Vec<ProductSubmission>) -> ApiFuture<SubmitResponse> {
    Box::pin(submit(ReviewQueue::ScaleBarcode, products))
}
