use std::net::SocketAddr;

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, AppState};

struct TestApp {
    base_url: String,
}

/// Boot the real router against a fresh in-memory database on an ephemeral
/// port. Every test gets its own isolated store.
async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_single("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;

    let app: Router = routes::build_router(CorsLayer::very_permissive(), AppState { db });
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

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_cliente_crud_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Empty store still answers 200 with an empty array (unlike the other two
    // entities).
    let res = c.get(format!("{}/api/v1/clientes/listarTodos", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    // Create: the store assigns the id and the entity comes back.
    let res = c
        .post(format!("{}/api/v1/clientes/crearCliente", app.base_url))
        .json(&json!({
            "rut_empresa": "76543210-1",
            "razon_social": "Acme Ltda",
            "giro": "Gestion de residuos",
            "direccion": "Av. Uno 100, Santiago",
            "email": "contacto@acme.cl"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let creado = res.json::<serde_json::Value>().await?;
    let id = creado["id"].as_i64().expect("generated id");
    assert!(id > 0);
    assert_eq!(creado["razon_social"], "Acme Ltda");

    // Fetch by id and by rut round-trips the same entity.
    let res = c.get(format!("{}/api/v1/clientes/obtenerPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, creado);

    let res = c.get(format!("{}/api/v1/clientes/obtenerPorRut/76543210-1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, creado);

    let res = c.get(format!("{}/api/v1/clientes/obtenerPorId/99999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Update replaces the row wholesale; the path id wins.
    let res = c
        .put(format!("{}/api/v1/clientes/actualizarClientePorId/{}", app.base_url, id))
        .json(&json!({
            "rut_empresa": "76543210-1",
            "razon_social": "Acme SpA",
            "giro": "Gestion de residuos",
            "direccion": "Av. Dos 200, Santiago",
            "email": "ventas@acme.cl"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let actualizado = res.json::<serde_json::Value>().await?;
    assert_eq!(actualizado["id"].as_i64(), Some(id));
    assert_eq!(actualizado["razon_social"], "Acme SpA");

    // Updating a missing id is 404.
    let res = c
        .put(format!("{}/api/v1/clientes/actualizarClientePorId/99999", app.base_url))
        .json(&json!({
            "rut_empresa": "1-9",
            "razon_social": "Nadie",
            "giro": "-",
            "direccion": "-",
            "email": "n@n.cl"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // Delete, then the entity is gone; a second delete is 404.
    let res = c.delete(format!("{}/api/v1/clientes/eliminarClientePorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/api/v1/clientes/obtenerPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.delete(format!("{}/api/v1/clientes/eliminarClientePorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_residuo_status_contract() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Empty listing is 204 here, not an empty array.
    let res = c.get(format!("{}/api/residuos/v1/listarResiduos", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // A JSON null body is rejected and nothing is persisted.
    let res = c
        .post(format!("{}/api/residuos/v1/guardarResiduos", app.base_url))
        .json(&serde_json::Value::Null)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.get(format!("{}/api/residuos/v1/listarResiduos", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // A valid create answers 200 with no body.
    let res = c
        .post(format!("{}/api/residuos/v1/guardarResiduos", app.base_url))
        .json(&json!({
            "tipo": "organico",
            "descripcion": "restos vegetales",
            "cantidad_kg": 120,
            "peligroso": false
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());

    // The record shows up in the listing; grab the generated id from there.
    let res = c.get(format!("{}/api/residuos/v1/listarResiduos", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let lista = res.json::<serde_json::Value>().await?;
    let id = lista[0]["id"].as_i64().expect("generated id");

    // Found is 200; absent shares the 204 of the empty listing.
    let res = c.get(format!("{}/api/residuos/v1/buscarPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/api/residuos/v1/buscarPorId/99999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // Update requires pre-existence.
    let cuerpo = json!({
        "tipo": "quimico",
        "descripcion": "solventes usados",
        "cantidad_kg": 40,
        "peligroso": true
    });
    let res = c
        .patch(format!("{}/api/residuos/v1/actualizarResiduos/99999", app.base_url))
        .json(&cuerpo)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c
        .patch(format!("{}/api/residuos/v1/actualizarResiduos/{}", app.base_url, id))
        .json(&cuerpo)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());

    // Delete requires pre-existence as well.
    let res = c.delete(format!("{}/api/residuos/v1/eliminarPorId/99999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let res = c.delete(format!("{}/api/residuos/v1/eliminarPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_factura_status_contract() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/api/factura/v1/listar", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // Deleting an invoice that never existed still answers 204.
    let res = c.delete(format!("{}/api/factura/v1/eliminarPorId/12345", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // Create answers 200 with no body.
    let res = c
        .post(format!("{}/api/factura/v1/guardarFactura", app.base_url))
        .json(&json!({
            "rut_emisor": "76543210-1",
            "fecha_emision": "2024-05-15",
            "monto_neto": 1000,
            "iva": 190,
            "monto_total": 1190
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());

    let res = c.get(format!("{}/api/factura/v1/listar", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let lista = res.json::<serde_json::Value>().await?;
    let id = lista[0]["id"].as_i64().expect("generated id");

    // Lookup by id also answers with an array.
    let res = c.get(format!("{}/api/factura/v1/buscarPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let por_id = res.json::<serde_json::Value>().await?;
    assert_eq!(por_id.as_array().map(|a| a.len()), Some(1));

    let res = c.get(format!("{}/api/factura/v1/buscarPorRut/76543210-1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = c.get(format!("{}/api/factura/v1/buscarPorRut/99999999-9", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // PATCH only applies when the body id matches the path id.
    let res = c
        .patch(format!("{}/api/factura/v1/actualizarFactura/{}", app.base_url, id))
        .json(&json!({
            "id": id,
            "rut_emisor": "76543210-1",
            "fecha_emision": "2024-05-20",
            "monto_neto": 2000,
            "iva": 380,
            "monto_total": 2380
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c
        .patch(format!("{}/api/factura/v1/actualizarFactura/{}", app.base_url, id))
        .json(&json!({
            "id": id + 1,
            "rut_emisor": "76543210-1",
            "fecha_emision": "2024-05-20",
            "monto_neto": 1,
            "iva": 0,
            "monto_total": 1
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // The mismatch attempt must not have touched the row.
    let res = c.get(format!("{}/api/factura/v1/buscarPorId/{}", app.base_url, id)).send().await?;
    let por_id = res.json::<serde_json::Value>().await?;
    assert_eq!(por_id[0]["monto_total"].as_i64(), Some(2380));

    let res = c.delete(format!("{}/api/factura/v1/eliminarPorId/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/api/factura/v1/listar", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}
