use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use server::startup::AppState;
use service::items::memory::MemoryItemRepository;
use service::items::repository::ItemRepository;
use service::items::seaorm::SeaOrmItemRepository;
use service::items::service::ItemService;

struct TestApp {
    base_url: String,
}

async fn start_server(repo: Arc<dyn ItemRepository>) -> anyhow::Result<TestApp> {
    let state = AppState { items: ItemService::new(repo) };
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

async fn start_memory_server() -> anyhow::Result<TestApp> {
    start_server(Arc::new(MemoryItemRepository::new())).await
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_root_redirects_to_docs() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    let res = c.get(format!("{}/", app.base_url)).send().await?;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/docs");
    Ok(())
}

#[tokio::test]
async fn e2e_item_lifecycle() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    // Create
    let res = c
        .post(format!("{}/items", app.base_url))
        .json(&json!({"name": "A", "description": "d1"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "A", "description": "d1"}));

    // Get
    let res = c.get(format!("{}/items/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "A", "description": "d1"}));

    // Update replaces both fields, id unchanged
    let res = c
        .put(format!("{}/items/1", app.base_url))
        .json(&json!({"name": "B", "description": "d2"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "B", "description": "d2"}));

    // Delete
    let res = c.delete(format!("{}/items/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert!(res.bytes().await?.is_empty());

    // Gone
    let res = c.get(format!("{}/items/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"detail": "Item with id 1 not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_create_assigns_increasing_ids_and_ordered_list() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    for (name, desc) in [("a", "1"), ("b", "2"), ("c", "3")] {
        let res = c
            .post(format!("{}/items", app.base_url))
            .json(&json!({"name": name, "description": desc}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c.get(format!("{}/items", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|it| it["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    Ok(())
}

#[tokio::test]
async fn e2e_update_and_delete_missing_id_return_404() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/items/999", app.base_url))
        .json(&json!({"name": "x", "description": "y"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["detail"], "Item with id 999 not found");

    let res = c.delete(format!("{}/items/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Nothing was created along the way
    let res = c.get(format!("{}/items", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_body_is_rejected_before_storage() -> anyhow::Result<()> {
    let app = start_memory_server().await?;
    let c = client();

    // Missing `description`: the body-shape check rejects with 422
    let res = c
        .post(format!("{}/items", app.base_url))
        .json(&json!({"name": "only-name"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);

    let res = c.get(format!("{}/items", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_db_item_lifecycle() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skip db e2e test");
        return Ok(());
    }

    let db = models::db::connect().await?;
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }
    let app = start_server(Arc::new(SeaOrmItemRepository::new(db))).await?;
    let c = client();

    let res = c
        .post(format!("{}/items", app.base_url))
        .json(&json!({"name": "A", "description": "d1"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().unwrap();

    let res = c.get(format!("{}/items/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"id": id, "name": "A", "description": "d1"})
    );

    let res = c
        .put(format!("{}/items/{}", app.base_url, id))
        .json(&json!({"name": "B", "description": "d2"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.delete(format!("{}/items/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    let res = c.get(format!("{}/items/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        res.json::<serde_json::Value>().await?["detail"],
        format!("Item with id {} not found", id)
    );
    Ok(())
}
