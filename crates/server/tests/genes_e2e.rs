use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::build_app;
use server::state::ServerState;
use service::genes::repository::memory::{InMemoryGeneStore, InMemoryTranscriptStore};
use service::genes::{GeneWorkflow, Transcript};
use std::sync::Arc;

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server(state: ServerState) -> anyhow::Result<TestApp> {
    let app = build_app(state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

async fn start_memory_server() -> anyhow::Result<TestApp> {
    start_server(ServerState::in_memory()).await
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let res = reqwest::get(app.url("/health")).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_brca1_with_empty_stores() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(app.url("/genes/create"))
        .json(&json!({"name": "BRCA1", "nmNumber": "NM_007294"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let gene = res.json::<Value>().await?;
    assert_eq!(gene["name"], "BRCA1");

    let all = c.get(app.url("/genes")).send().await?.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_nm_number_conflict_is_reported_first() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = reqwest::Client::new();

    // BRCA1 claims NM_007294
    let res = c.post(app.url("/genes/create"))
        .json(&json!({"name": "BRCA1", "nmNumber": "NM_007294"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // same name and same NM number: the transcript message wins
    let res = c.post(app.url("/genes/create"))
        .json(&json!({"name": "BRCA1", "nmNumber": "NM_007294"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Transcript already exists for this NM number."}));

    // same name, new NM number
    let res = c.post(app.url("/genes/create"))
        .json(&json!({"name": "BRCA1", "nmNumber": "NM_999999"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Gene with this name already exists."}));
    Ok(())
}

#[tokio::test]
async fn e2e_pre_seeded_transcript_blocks_create() -> anyhow::Result<()> {
    let state = ServerState::new(GeneWorkflow::new(
        Arc::new(InMemoryGeneStore::new()),
        Arc::new(InMemoryTranscriptStore::seeded([Transcript::unassigned("NM_007294")])),
    ));
    let app = start_server(state).await?;

    let res = reqwest::Client::new()
        .post(app.url("/genes/create"))
        .json(&json!({"name": "BRCA1", "nmNumber": "NM_007294"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Transcript already exists for this NM number."}));

    let all = reqwest::get(app.url("/genes")).await?.json::<Vec<Value>>().await?;
    assert!(all.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_get_update_delete_round() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = reqwest::Client::new();

    // .NET-style field names are accepted; extra fields pass through
    let res = c.post(app.url("/genes/create"))
        .json(&json!({"Name": "TP53", "nm_Number": "NM_000546", "chromosome": "17"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<Value>().await?;
    assert_eq!(created, json!({"name": "TP53", "nmNumber": "NM_000546", "chromosome": "17"}));

    let found = c.post(app.url("/genes/get"))
        .json(&json!({"nmNumber": "NM_000546"}))
        .send().await?.json::<Value>().await?;
    assert_eq!(found["name"], "TP53");

    let updated = c.put(app.url("/genes/update"))
        .json(&json!({"name": "TP53", "nmNumber": "NM_000546", "chromosome": "17p13.1"}))
        .send().await?.json::<Value>().await?;
    assert_eq!(updated["chromosome"], "17p13.1");

    let missing = c.put(app.url("/genes/update"))
        .json(&json!({"name": "MISSING", "nmNumber": "NM_1"}))
        .send().await?;
    assert_eq!(missing.status(), HttpStatusCode::OK);
    assert_eq!(missing.json::<Value>().await?, Value::Null);

    let deleted = c.delete(app.url("/genes/delete"))
        .json(&json!("TP53"))
        .send().await?.json::<bool>().await?;
    assert!(deleted);

    let gone = c.post(app.url("/genes/get"))
        .json(&json!({"name": "TP53"}))
        .send().await?.json::<Value>().await?;
    assert_eq!(gone, Value::Null);

    let again = c.delete(app.url("/genes/delete"))
        .json(&json!("TP53"))
        .send().await?.json::<bool>().await?;
    assert!(!again);
    Ok(())
}

#[tokio::test]
async fn e2e_blank_name_without_conflict_is_created() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let res = reqwest::Client::new()
        .post(app.url("/genes/create"))
        .json(&json!({"name": "", "nmNumber": "NM_007294"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["name"], "");
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_internal_error() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let res = reqwest::Client::new()
        .post(app.url("/genes/create"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.json::<Value>().await?, json!({"message": "Internal Server Error"}));
    Ok(())
}

#[tokio::test]
async fn e2e_metrics_exposed() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = reqwest::Client::new();
    c.post(app.url("/genes/create"))
        .json(&json!({"name": "ATM", "nmNumber": "NM_000051"}))
        .send().await?;

    let res = c.get(app.url("/metrics")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let text = res.text().await?;
    assert!(text.contains("genes_api_gene_created_total"));
    Ok(())
}

#[tokio::test]
async fn e2e_postgres_backend_pre_seeded_transcript() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip postgres e2e test.");
        return Ok(());
    }

    let mut cfg = configs::AppConfig::default();
    cfg.database.normalize_from_env();
    let state = ServerState::from_config(&cfg).await?;

    // pre-seed an unassigned transcript directly in the table
    let db = models::db::connect().await?;
    let nm = format!("NM_E2E_{}", std::process::id());
    models::transcript::create(&db, &nm, None, json!({})).await?;

    let app = start_server(state).await?;
    let res = reqwest::Client::new()
        .post(app.url("/genes/create"))
        .json(&json!({"name": format!("E2E_{}", std::process::id()), "nmNumber": nm}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], "Transcript already exists for this NM number.");

    use sea_orm::EntityTrait;
    models::transcript::Entity::delete_by_id(nm).exec(&db).await?;
    Ok(())
}
