use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

use crate::modules::asset::adapter::outgoing::FsAssetStore;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    asset_store: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reports the asset directory state. A missing directory only
///   degrades the asset views, so the probe stays 200 with the detail.
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<FsAssetStore>>) -> impl Responder {
    let asset_store_status = if store.probe_root().await {
        "ok"
    } else {
        "unavailable"
    };

    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        asset_store: asset_store_status,
    })
}
