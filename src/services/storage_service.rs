use std::time::{SystemTime, UNIX_EPOCH};

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::NodeError;
use crate::params::Args;
use crate::store::KeyedBlobStore;

/// Plain configuration values handed to the handlers. The bootstrap layer
/// decides where they come from; nothing here re-reads the environment.
#[derive(Clone)]
pub struct NodeConfig {
    pub http_addr: String,
    pub port: String,
    pub chain_type: String,
    pub expose_url: String,
    pub remote_url: Option<String>,
    pub node_name: String,
}

impl NodeConfig {
    pub fn from_args(args: &Args) -> Self {
        let port = args
            .http_addr
            .rsplit(':')
            .next()
            .unwrap_or_default()
            .to_owned();
        Self {
            http_addr: args.http_addr.clone(),
            port,
            chain_type: args.chain_type.clone(),
            expose_url: args.expose_url.clone(),
            remote_url: args.remote_url.clone(),
            node_name: args.node_name.clone(),
        }
    }
}

pub struct AppState {
    pub store: KeyedBlobStore,
    pub config: NodeConfig,
}

#[derive(Deserialize)]
struct StoreRequest {
    key: String,
    data: String,
}

#[derive(Deserialize)]
struct DownloadQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    owner: String,
}

#[get("/health")]
pub(crate) async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "type": "storage-node",
        "chain_type": state.config.chain_type,
        "port": state.config.port,
        "timestamp": unix_seconds(),
    }))
}

#[get("/info")]
pub(crate) async fn info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "type": "store",
        "name": state.config.node_name,
        "chainType": state.config.chain_type,
        "exposeURL": state.config.expose_url,
    }))
}

#[post("/store")]
pub(crate) async fn store_blob(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, NodeError> {
    let req: StoreRequest = serde_json::from_slice(&body)?;
    if req.key.is_empty() {
        return Err(NodeError::MissingParam("key"));
    }

    let size = req.data.len();
    state.store.put(&req.key, req.data.into_bytes());
    tracing::debug!("stored {} bytes under key {}", size, req.key);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "key": req.key,
        "size": size,
    })))
}

#[get("/retrieve/{key}")]
pub(crate) async fn retrieve_blob(
    key: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, NodeError> {
    let payload = state.store.get(&key).ok_or(NodeError::NotFound)?;

    Ok(HttpResponse::Ok().json(json!({
        "key": key.as_str(),
        "data": String::from_utf8_lossy(&payload),
        "size": payload.len(),
    })))
}

#[post("/upload")]
pub(crate) async fn upload_document(
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, NodeError> {
    let doc: Value = serde_json::from_slice(&body)?;
    let id = state.store.put_json(&doc)?;
    tracing::debug!("uploaded document stored under id {}", id);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Upload successful",
        "id": id,
    })))
}

#[get("/download")]
pub(crate) async fn download_document(
    query: web::Query<DownloadQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, NodeError> {
    if query.name.is_empty() {
        return Err(NodeError::MissingParam("name"));
    }

    let content = state.store.get_json(&query.name).ok_or(NodeError::NotFound)?;

    // `owner` is echoed back for the caller's bookkeeping; it plays no part
    // in lookup or access control.
    Ok(HttpResponse::Ok().json(json!({
        "message": "Download successful",
        "name": query.name,
        "owner": query.owner,
        "data": content,
    })))
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
