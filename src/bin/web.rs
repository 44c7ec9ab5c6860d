//! Single binary web server: JSON API for the resolved tournament view,
//! static from /static. Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! DATA_DIR (directory holding teams.json and tournament.json).

use actix_files::Files;
use actix_web::{
    get,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use foosball_tournament_web::{build_tournament_view, Team, TeamList, Tournament, TournamentView};
use std::fmt;
use std::path::{Path, PathBuf};

/// Immutable input snapshot loaded at startup. Every request recomputes the
/// view from it; the engine holds no state across calls, so no lock is needed.
struct TournamentData {
    teams: Vec<Team>,
    tournament: Tournament,
}

type AppState = Data<TournamentData>;

impl TournamentData {
    fn view(&self) -> TournamentView {
        build_tournament_view(
            &self.teams,
            &self.tournament.group_stage,
            &self.tournament.knockout_stage,
        )
    }
}

/// Failure loading a data file at startup.
#[derive(Debug)]
enum DataError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            DataError::Parse(path, e) => write!(f, "cannot parse {}: {}", path.display(), e),
        }
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DataError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| DataError::Parse(path.to_path_buf(), e))
}

fn load_data(dir: &Path) -> Result<TournamentData, DataError> {
    let teams: TeamList = load_json(&dir.join("teams.json"))?;
    let tournament: Tournament = load_json(&dir.join("tournament.json"))?;
    Ok(TournamentData {
        teams: teams.teams,
        tournament,
    })
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "foosball-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Registered teams (the team cards).
#[get("/api/teams")]
async fn api_teams(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(&state.teams)
}

/// The full resolved view: standings, matchdays, bracket, warnings.
#[get("/api/tournament")]
async fn api_tournament(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.view())
}

/// The ranked standings table only.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.view().standings)
}

/// Group matches per matchday, team names substituted.
#[get("/api/matchdays")]
async fn api_matchdays(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.view().matchdays)
}

/// The resolved knockout bracket (unknown sides show as TBD).
#[get("/api/bracket")]
async fn api_bracket(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(state.view().knockout)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());

    let data = match load_data(Path::new(&data_dir)) {
        Ok(d) => d,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    // Surface degraded data once at startup; requests still serve the view.
    let startup_view = data.view();
    for warning in &startup_view.warnings {
        log::warn!("{}", warning);
    }

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(data);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_teams)
            .service(api_tournament)
            .service(api_standings)
            .service(api_matchdays)
            .service(api_bracket)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
