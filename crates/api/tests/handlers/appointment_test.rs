use axum::http::StatusCode;
use mockall::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use salon_core::{
    errors::SalonError,
    models::appointment::{AppointmentRequest, BOOKED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE},
};
use salon_db::mock::MockStore;
use serde_json::{json, Value};

use crate::test_utils::{mock_server, sqlite_server};

fn booking_body(name: &str, date: &str, time: &str, style_id: Option<i64>) -> Value {
    json!({
        "nombre": name,
        "telefono": "555-1111",
        "servicio": "Corte",
        "fecha": date,
        "hora": time,
        "corte_id": style_id
    })
}

#[tokio::test]
async fn test_book_list_and_delete_scenario() {
    let server = sqlite_server().await;

    let booked = server
        .post("/agendar")
        .json(&booking_body("Ana", "2024-05-01", "10:00", Some(1)))
        .await;
    booked.assert_status_ok();
    let booked: Value = booked.json();
    assert_eq!(booked["mensaje"], BOOKED_MESSAGE);
    let id = booked["id"].as_i64().unwrap();

    let listed: Value = server.get("/citas").await.json();
    assert_eq!(
        listed,
        json!([{
            "id": id,
            "fecha": "2024-05-01",
            "hora": "10:00",
            "nombre": "Ana",
            "telefono": "555-1111",
            "servicio": "Corte",
            "cortes_id": 1,
            "nombre_corte": "Pixie",
            "tipo_corte": "Dama",
            "corte_info": "Pixie (Dama)"
        }])
    );

    let deleted = server.delete(&format!("/citas/{}", id)).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["mensaje"], DELETED_MESSAGE);

    let listed: Value = server.get("/citas").await.json();
    assert_eq!(listed, json!([]));

    let again = server.delete(&format!("/citas/{}", id)).await;
    again.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(again.json::<Value>()["error"], "Cita no encontrada");
}

#[tokio::test]
async fn test_list_is_sorted_by_date_and_time() {
    let server = sqlite_server().await;

    for (name, date, time) in [
        ("Carla", "2024-05-02", "09:00"),
        ("Bea", "2024-05-01", "12:00"),
        ("Ana", "2024-05-01", "09:30"),
    ] {
        server
            .post("/agendar")
            .json(&booking_body(name, date, time, None))
            .await
            .assert_status_ok();
    }

    let listed: Vec<Value> = server.get("/citas").await.json();
    let names: Vec<&str> = listed.iter().map(|a| a["nombre"].as_str().unwrap()).collect();

    assert_eq!(names, vec!["Ana", "Bea", "Carla"]);
    assert!(listed
        .iter()
        .all(|a| a["corte_info"] == "Sin corte especificado"));
}

#[tokio::test]
async fn test_update_appointment() {
    let server = sqlite_server().await;

    let id = server
        .post("/agendar")
        .json(&booking_body("Ana", "2024-05-01", "10:00", None))
        .await
        .json::<Value>()["id"]
        .as_i64()
        .unwrap();

    let updated = server
        .put(&format!("/citas/{}", id))
        .json(&booking_body("Ana María", "2024-05-03", "18:00", Some(20)))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["mensaje"], UPDATED_MESSAGE);

    let listed: Vec<Value> = server.get("/citas").await.json();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], id);
    assert_eq!(listed[0]["nombre"], "Ana María");
    assert_eq!(listed[0]["fecha"], "2024-05-03");
    assert_eq!(listed[0]["corte_info"], "Buzz cut (Caballero)");
}

#[tokio::test]
async fn test_update_unknown_appointment_returns_not_found() {
    let server = sqlite_server().await;

    let response = server
        .put("/citas/404")
        .json(&booking_body("Ana", "2024-05-01", "10:00", None))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let listed: Value = server.get("/citas").await.json();
    assert_eq!(listed, json!([]));
}

#[rstest]
#[case::missing_name(json!({ "telefono": "555", "servicio": "Corte", "fecha": "2024-05-01", "hora": "10:00" }))]
#[case::blank_phone(json!({ "nombre": "Ana", "telefono": "", "servicio": "Corte", "fecha": "2024-05-01", "hora": "10:00" }))]
#[case::missing_date_and_time(json!({ "nombre": "Ana", "telefono": "555", "servicio": "Corte" }))]
#[tokio::test]
async fn test_book_rejects_incomplete_requests(#[case] body: Value) {
    let server = sqlite_server().await;

    let response = server.post("/agendar").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let listed: Value = server.get("/citas").await.json();
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_book_forwards_request_to_store() {
    let mut store = MockStore::new();
    let expected = AppointmentRequest {
        name: "Ana".to_string(),
        phone: "555-1111".to_string(),
        service: "Corte".to_string(),
        date: "2024-05-01".to_string(),
        time: "10:00".to_string(),
        style_id: None,
    };
    store
        .expect_book_appointment()
        .with(predicate::eq(expected))
        .times(1)
        .returning(|_| Ok(17));

    let server = mock_server(store);
    let response = server
        .post("/agendar")
        .json(&booking_body("Ana", "2024-05-01", "10:00", None))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["id"], 17);
}

#[tokio::test]
async fn test_storage_failure_is_generic_server_error() {
    let mut store = MockStore::new();
    store
        .expect_list_appointments()
        .returning(|| Err(SalonError::Storage(eyre::eyre!("disk I/O error"))));

    let server = mock_server(store);
    let response = server.get("/citas").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Algo salió mal!");
    assert!(!body.to_string().contains("disk I/O"));
}

#[tokio::test]
async fn test_delete_not_found_from_store() {
    let mut store = MockStore::new();
    store
        .expect_delete_appointment()
        .with(predicate::eq(5))
        .returning(|_| Err(SalonError::NotFound("Cita no encontrada".to_string())));

    let server = mock_server(store);

    server
        .delete("/citas/5")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_book_accepts_style_id_sent_as_text() {
    let server = sqlite_server().await;

    let mut with_text_id = booking_body("Ana", "2024-05-01", "10:00", None);
    with_text_id["corte_id"] = json!("1");
    server.post("/agendar").json(&with_text_id).await.assert_status_ok();

    let mut with_empty_id = booking_body("Bea", "2024-05-01", "11:00", None);
    with_empty_id["corte_id"] = json!("");
    server.post("/agendar").json(&with_empty_id).await.assert_status_ok();

    let listed: Vec<Value> = server.get("/citas").await.json();
    assert_eq!(listed[0]["cortes_id"], 1);
    assert_eq!(listed[0]["corte_info"], "Pixie (Dama)");
    assert_eq!(listed[1]["cortes_id"], Value::Null);
    assert_eq!(listed[1]["corte_info"], "Sin corte especificado");
}

#[tokio::test]
async fn test_null_phone_is_a_json_validation_error() {
    let server = sqlite_server().await;

    let mut body = booking_body("Ana", "2024-05-01", "10:00", None);
    body["telefono"] = Value::Null;
    let response = server.post("/agendar").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("telefono"));
}

#[rstest]
#[case::wrong_type(json!({ "nombre": 42, "telefono": "555", "servicio": "Corte", "fecha": "2024-05-01", "hora": "10:00" }))]
#[case::bad_style_id(json!({ "nombre": "Ana", "telefono": "555", "servicio": "Corte", "fecha": "2024-05-01", "hora": "10:00", "corte_id": "pixie" }))]
#[tokio::test]
async fn test_malformed_body_is_a_json_validation_error(#[case] body: Value) {
    let server = sqlite_server().await;

    let response = server.post("/agendar").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_non_numeric_path_id_is_a_json_validation_error() {
    let server = sqlite_server().await;

    let response = server.delete("/citas/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_update_unknown_id_with_blank_field_is_not_found() {
    let server = sqlite_server().await;

    let response = server
        .put("/citas/404")
        .json(&booking_body("", "2024-05-01", "10:00", None))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
