use lambda_http::{http::StatusCode, Body, Error, Response};

/// JSON response, open to any origin
pub fn json_response(status: StatusCode, value: &serde_json::Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(value.to_string().into())
        .map_err(Box::new)?)
}

/// Answer a browser preflight without touching upstream
pub fn cors_preflight() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET,OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Empty)
        .map_err(Box::new)?)
}
