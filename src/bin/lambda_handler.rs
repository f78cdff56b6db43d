//! AWS Lambda handler for bar plans
//!
//! Accepts either a share-link query string (GET) or a JSON body with any
//! subset of the input fields (POST) and returns the plan as JSON.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::info;
use pour_planner::event::{decode_query, encode_query};
use pour_planner::{calculate, CalculatorInput, CalculatorResult};
use serde::Serialize;

/// Output for one plan
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub input: CalculatorInput,
    pub result: CalculatorResult,
    /// Query string that reopens this plan
    pub share_query: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn with_cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let response = with_cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(serde_json::to_string(body)?))?;
    Ok(response)
}

/// Read the plan input from the request: JSON body for POST, query string otherwise
fn parse_input(event: &Request) -> Result<CalculatorInput, String> {
    if event.method().as_str() == "POST" {
        let body_str = match event.body() {
            Body::Text(s) => s.clone(),
            Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
            Body::Empty => "{}".to_string(),
        };
        let body_str = if body_str.trim().is_empty() { "{}".to_string() } else { body_str };
        serde_json::from_str(&body_str).map_err(|e| format!("Invalid JSON: {}", e))
    } else {
        let query = event.uri().query().unwrap_or("");
        Ok(decode_query(query).into_input())
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(with_cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let input = match parse_input(&event) {
        Ok(input) => input.clamped(),
        Err(message) => return json_response(400, &ErrorBody { error: message }),
    };

    let result = calculate(&input);
    info!(
        "planned {} guests / {}h in {}: vibe {}, ${}-${}",
        input.guests, input.hours, input.state, result.vibe.level, result.cost.low, result.cost.high
    );

    let response = PlanResponse {
        share_query: encode_query(&input),
        input,
        result,
    };

    json_response(200, &response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
