use actix_web::{
    body::BoxBody,
    error, get,
    http::{header::ContentType, StatusCode},
    post, web, App, HttpResponse, HttpServer, Responder,
};
use flatbet_sim::prelude::*;
use serde::{Deserialize, Serialize};

/// A struct for handling the configuration of a run. Meant to be deserialized
/// from JSON.
#[derive(Debug, Deserialize)]
struct RunRequest {
    n_generations: u32,
    n_hands_per_generation: u32,
    initial_bankroll: f64,
    seed: Option<u64>,
}

impl From<RunRequest> for GenerationConfig {
    fn from(value: RunRequest) -> Self {
        let mut builder = GenerationConfig::new();
        builder
            .n_generations(value.n_generations)
            .n_hands_per_generation(value.n_hands_per_generation)
            .initial_bankroll(value.initial_bankroll);
        if let Some(seed) = value.seed {
            builder.seed(seed);
        }
        builder.build()
    }
}

/// An enum that will handle user facing errors
#[derive(Debug)]
enum UserError {
    InternalError,
    BadInput(String),
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::InternalError => write!(f, "an internal error occured"),
            UserError::BadInput(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for UserError {}

impl From<SimulationError> for UserError {
    fn from(value: SimulationError) -> Self {
        match value {
            SimulationError::InvalidConfiguration(s) => UserError::BadInput(s),
            _ => UserError::InternalError,
        }
    }
}

impl error::ResponseError for UserError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            UserError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            UserError::BadInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// A struct for collecting one generation's numbers into something that can
/// serialize into JSON.
#[derive(Serialize)]
struct GenerationJson {
    final_bankroll: f64,
    rounds_played: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
}

impl From<&GenerationResult> for GenerationJson {
    fn from(result: &GenerationResult) -> Self {
        GenerationJson {
            final_bankroll: result.final_bankroll,
            rounds_played: result.rounds_played,
            wins: result.tally.wins,
            losses: result.tally.losses,
            pushes: result.tally.pushes,
        }
    }
}

#[derive(Serialize)]
struct RunResponse {
    generations: Vec<GenerationJson>,
    best: usize,
    worst: usize,
    aggregate: OutcomeTally,
}

impl From<&GenerationSet> for RunResponse {
    fn from(set: &GenerationSet) -> Self {
        RunResponse {
            generations: set.results().iter().map(GenerationJson::from).collect(),
            best: set.best_index(),
            worst: set.worst_index(),
            aggregate: set.aggregate_tally(),
        }
    }
}

#[post("/simulate")]
async fn simulate(request: web::Json<RunRequest>) -> Result<impl Responder, UserError> {
    let config = GenerationConfig::from(request.into_inner());
    let runner = GenerationRunner::new(config)?;

    // The engine is CPU bound, keep it off the actix workers
    let set = web::block(move || runner.run())
        .await
        .map_err(|_| UserError::InternalError)??;

    Ok(web::Json(RunResponse::from(&set)))
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    HttpServer::new(|| App::new().service(simulate).service(health))
        .bind(("127.0.0.1", 8080))?
        .run()
        .await
}
