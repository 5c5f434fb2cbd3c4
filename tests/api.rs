use calcapi::api::{CALCULATE_PATH, ErrorResponse, ResultResponse, Status, handle};

fn assert_result(body: &str, expected: f64) {
    let response = handle(body);
    assert_eq!(response.status, Status::Ok, "200 not given for {body}");

    let decoded: ResultResponse =
        serde_json::from_str(&response.body).unwrap_or_else(|e| panic!("Bad body {}: {e}", response.body));
    assert_eq!(decoded.result, expected);
}

fn assert_rejected(body: &str, status: Status) -> String {
    let response = handle(body);
    assert_eq!(response.status, status, "wrong status for {body}");

    let decoded: ErrorResponse =
        serde_json::from_str(&response.body).unwrap_or_else(|e| panic!("Bad body {}: {e}", response.body));
    decoded.error
}

#[test]
fn valid_expressions_return_200() {
    assert_result(r#"{"expression":"2+2"}"#, 4.0);
    assert_result(r#"{"expression":"1+4*(5/4+4*2/1)"}"#, 38.0);
    assert_result(r#"{"expression":"1+2*4"}"#, 9.0);
    assert_result(r#"{"expression":"1*-1"}"#, -1.0);
    assert_result(r#"{"expression":"1+-5"}"#, -4.0);
    assert_result(r#"{"expression":"-5/2"}"#, -2.5);
    assert_result(r#"{"expression":" 2  + 2    + 0"}"#, 4.0);
}

#[test]
fn calculation_errors_return_422() {
    for expression in ["2+5/", "1++2+5", "(1)+(2))", "", "2 +  2 2", "1/0"] {
        let body = format!(r#"{{"expression":"{expression}"}}"#);
        assert_rejected(&body, Status::UnprocessableEntity);
    }
}

#[test]
fn error_body_carries_the_message() {
    let error = assert_rejected(r#"{"expression":"2+5/"}"#, Status::UnprocessableEntity);
    assert_eq!(error, "Operator at end: /");
}

#[test]
fn missing_expression_field_is_an_empty_expression() {
    let error = assert_rejected("{}", Status::UnprocessableEntity);
    assert_eq!(error, "Empty expression.");
}

#[test]
fn malformed_bodies_return_500() {
    assert_rejected("", Status::InternalServerError);
    assert_rejected("not json", Status::InternalServerError);
    assert_rejected(r#"{"expression":5}"#, Status::InternalServerError);
    assert_rejected(r#"{"expression":"2+2""#, Status::InternalServerError);
}

#[test]
fn status_codes() {
    assert_eq!(Status::Ok.code(), 200);
    assert_eq!(Status::UnprocessableEntity.code(), 422);
    assert_eq!(Status::InternalServerError.code(), 500);
    assert_eq!(CALCULATE_PATH, "/api/v1/calculate");
}

#[test]
fn success_body_shape() {
    assert_eq!(handle(r#"{"expression":"10/4"}"#).body, r#"{"result":2.5}"#);
}

#[test]
fn non_finite_results_return_422() {
    let big = format!("1{}", "0".repeat(400));

    for expression in [big.clone(), format!("{big}-{big}")] {
        let body = format!(r#"{{"expression":"{expression}"}}"#);
        let error = assert_rejected(&body, Status::UnprocessableEntity);
        assert!(error.starts_with("Result is not a finite number"), "unexpected error {error}");
    }
}
