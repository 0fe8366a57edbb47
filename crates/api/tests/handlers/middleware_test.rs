use axum::http::StatusCode;
use rstest::rstest;
use salon_api::middleware::error_handling::map_error;
use salon_core::errors::SalonError;

#[rstest]
#[case(SalonError::NotFound("Cita no encontrada".to_string()), StatusCode::NOT_FOUND)]
#[case(SalonError::Validation("Missing required fields: nombre".to_string()), StatusCode::BAD_REQUEST)]
#[case(SalonError::Storage(eyre::eyre!("database is locked")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: SalonError, #[case] expected: StatusCode) {
    let response = map_error(error);

    assert_eq!(response.status(), expected);
}

