//! Single binary web server: index page from templates/, static from /static, query API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `mirror_match::config` for the environment variables.

use actix_files::Files;
use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use mirror_match::{
    apply_filters, apply_what_if, ask, build_team_report, compute_tendencies, filter_indices,
    plays_to_csv, representative_play, reset_session, select_play, session_tendencies,
    shuffle_selection, start_session, step_selection, AppConfig, ChatSession, FilterSpec,
    PlayStore, QueryError, SessionId, TeamDirectory, TendencySummary, ViewMode,
    WhatIfComparison, WhatIfRegistry,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: chat state + last activity time (for auto-cleanup).
struct SessionEntry {
    session: ChatSession,
    last_activity: Instant,
}

/// Shared state: the immutable play store and registries, plus sessions by id.
struct AppData {
    store: PlayStore,
    teams: TeamDirectory,
    registry: WhatIfRegistry,
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

type AppState = Data<AppData>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
    plays: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScenarioInfo<'a> {
    key: &'a str,
    label: &'a str,
}

/// Team label for the page: full name and color for the code.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamLabel {
    code: String,
    name: String,
    color: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MetaResponse<'a> {
    game: Option<&'a mirror_match::GameInfo>,
    play_count: usize,
    dropped: usize,
    offenses: Vec<TeamLabel>,
    scenarios: Vec<ScenarioInfo<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryResponse {
    filters: FilterSpec,
    count: usize,
    /// Store indices of matching plays.
    indices: Vec<usize>,
    tendencies: Option<TendencySummary>,
    /// Store index of the median-by-yards play.
    representative: Option<usize>,
}

#[derive(Serialize)]
struct WhatIfResponse {
    comparison: Option<WhatIfComparison>,
}

/// Session plus everything derived from it that the page renders.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView<'a> {
    session: &'a ChatSession,
    tendencies: Option<TendencySummary>,
    selected_play_index: Option<usize>,
    comparison: Option<WhatIfComparison>,
}

#[derive(Deserialize)]
struct WhatIfBody {
    #[serde(default)]
    filters: FilterSpec,
    key: String,
}

#[derive(Deserialize)]
struct TextBody {
    text: String,
}

#[derive(Deserialize)]
struct SelectionBody {
    position: usize,
}

#[derive(Deserialize)]
struct StepBody {
    #[serde(default = "default_step")]
    step: isize,
}

fn default_step() -> isize {
    1
}

/// Path segment: store index of a play (e.g. /api/plays/{index})
#[derive(Deserialize)]
struct PlayPath {
    index: usize,
}

/// Path segment: team code (e.g. /api/teams/{code}/report)
#[derive(Deserialize)]
struct TeamPath {
    code: String,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

fn error_response(e: &QueryError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        QueryError::PlayNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn session_view<'a>(state: &AppData, session: &'a ChatSession) -> SessionView<'a> {
    let comparison = match (session.view_mode, session.what_if.as_deref()) {
        (ViewMode::WhatIf, Some(key)) => {
            apply_what_if(state.store.plays(), &session.filters, key, &state.registry)
                .ok()
                .flatten()
        }
        _ => None,
    };
    SessionView {
        session,
        tendencies: session_tendencies(session, &state.store),
        selected_play_index: session.selected_play_index(),
        comparison,
    }
}

/// Run `f` on a session (404 if unknown), refreshing its last activity.
fn with_session<F>(state: &AppState, id: SessionId, f: F) -> HttpResponse
where
    F: FnOnce(&AppData, &mut ChatSession) -> Result<(), QueryError>,
{
    let state: &AppData = state;
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No session" })),
    };
    entry.last_activity = Instant::now();
    match f(state, &mut entry.session) {
        Ok(()) => HttpResponse::Ok().json(session_view(state, &entry.session)),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health(state: AppState) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "mirror-match",
        plays: state.store.len(),
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Dataset metadata: game, counts, offenses, what-if scenarios.
#[get("/api/meta")]
async fn api_meta(state: AppState) -> HttpResponse {
    HttpResponse::Ok().json(MetaResponse {
        game: state.store.game.as_ref(),
        play_count: state.store.len(),
        dropped: state.store.dropped,
        offenses: state
            .store
            .offenses()
            .into_iter()
            .map(|code| TeamLabel {
                name: state
                    .teams
                    .get(&code)
                    .map_or_else(|| code.clone(), |t| t.display_name()),
                color: state.teams.color(&code).to_string(),
                code,
            })
            .collect(),
        scenarios: state
            .registry
            .iter()
            .map(|c| ScenarioInfo {
                key: &c.key,
                label: &c.label,
            })
            .collect(),
    })
}

/// Full play (with frames) by store index.
#[get("/api/plays/{index}")]
async fn api_get_play(state: AppState, path: Path<PlayPath>) -> HttpResponse {
    match state.store.get(path.index) {
        Some(play) => HttpResponse::Ok().json(play),
        None => error_response(&QueryError::PlayNotFound(path.index)),
    }
}

/// Filter plays and summarize the subset.
#[post("/api/query")]
async fn api_query(state: AppState, body: Json<FilterSpec>) -> HttpResponse {
    let filters = body.into_inner();
    let plays = state.store.plays();
    let indices = filter_indices(plays, &filters);
    let subset = || indices.iter().map(|&i| &plays[i]);
    let tendencies = compute_tendencies(subset());
    let representative = representative_play(subset())
        .and_then(|rep| indices.iter().copied().find(|&i| std::ptr::eq(&plays[i], rep)));
    HttpResponse::Ok().json(QueryResponse {
        filters,
        count: indices.len(),
        indices,
        tendencies,
        representative,
    })
}

/// Compare a baseline filter against a named counterfactual.
#[post("/api/what-if")]
async fn api_what_if(state: AppState, body: Json<WhatIfBody>) -> HttpResponse {
    match apply_what_if(state.store.plays(), &body.filters, &body.key, &state.registry) {
        Ok(comparison) => HttpResponse::Ok().json(WhatIfResponse { comparison }),
        Err(e) => error_response(&e),
    }
}

/// Resolve a question locally without touching any session.
#[post("/api/intent")]
async fn api_intent(state: AppState, body: Json<TextBody>) -> HttpResponse {
    let intent =
        mirror_match::resolve_intent(&body.text, &state.store, &state.teams, &state.registry);
    HttpResponse::Ok().json(intent)
}

/// Matching plays as CSV.
#[post("/api/export")]
async fn api_export(state: AppState, body: Json<FilterSpec>) -> HttpResponse {
    let plays = mirror_match::filter_plays(state.store.plays(), &body);
    match plays_to_csv(plays) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"plays.csv\""))
            .body(csv),
        Err(e) => error_response(&e),
    }
}

/// Situational tendency report for one offense.
#[get("/api/teams/{code}/report")]
async fn api_team_report(state: AppState, path: Path<TeamPath>) -> HttpResponse {
    let code = state
        .teams
        .get(&path.code)
        .map(|t| t.code.clone())
        .unwrap_or_else(|| path.code.to_uppercase());
    HttpResponse::Ok().json(build_team_report(state.store.plays(), &code))
}

/// Create a new chat session (client stores the id for subsequent requests).
#[post("/api/sessions")]
async fn api_create_session(state: AppState) -> HttpResponse {
    let session = start_session(&state.store);
    let id = session.id;
    let mut g = match state.sessions.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert(SessionEntry {
        session,
        last_activity: Instant::now(),
    });
    HttpResponse::Ok().json(session_view(&state, &entry.session))
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |_, _| Ok(()))
}

/// Ask a question: resolve it, apply its filters, append to the transcript.
#[post("/api/sessions/{id}/ask")]
async fn api_ask(state: AppState, path: Path<SessionPath>, body: Json<TextBody>) -> HttpResponse {
    let text = body.text.trim();
    if text.is_empty() {
        return error_response(&QueryError::InvalidArgument("empty question".to_string()));
    }
    with_session(&state, path.id, |data, session| {
        let intent = ask(session, text, &data.store, &data.teams, &data.registry);
        log::info!(
            "Session {}: {:?} -> {} plays ({:?})",
            session.id,
            text,
            session.results.len(),
            intent.view_mode
        );
        Ok(())
    })
}

/// Replace the session's filters directly (filter chips in the page).
#[put("/api/sessions/{id}/filters")]
async fn api_set_filters(state: AppState, path: Path<SessionPath>, body: Json<FilterSpec>) -> HttpResponse {
    let filters = body.into_inner();
    with_session(&state, path.id, move |data, session| {
        apply_filters(session, filters, &data.store);
        Ok(())
    })
}

/// Select a play by position within the current results.
#[put("/api/sessions/{id}/selection")]
async fn api_select(state: AppState, path: Path<SessionPath>, body: Json<SelectionBody>) -> HttpResponse {
    with_session(&state, path.id, |_, session| {
        select_play(session, body.position).map(|_| ())
    })
}

/// Next / previous play (wraps around).
#[post("/api/sessions/{id}/step")]
async fn api_step(state: AppState, path: Path<SessionPath>, body: Option<Json<StepBody>>) -> HttpResponse {
    let step = body.map(|b| b.step).unwrap_or_else(default_step);
    with_session(&state, path.id, |_, session| {
        step_selection(session, step).map(|_| ())
    })
}

/// Jump to a random play among the current results.
#[post("/api/sessions/{id}/shuffle")]
async fn api_shuffle(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |_, session| {
        shuffle_selection(session, &mut rand::thread_rng()).map(|_| ())
    })
}

/// Back to all plays with an empty transcript.
#[post("/api/sessions/{id}/reset")]
async fn api_reset(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    with_session(&state, path.id, |data, session| {
        reset_session(session, &data.store);
        Ok(())
    })
}

fn startup_error(e: QueryError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let plays_path = config.plays_path.clone();
    let store = tokio::task::spawn_blocking(move || PlayStore::load(plays_path))
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .map_err(|e| {
            log::error!("Cannot load {}: {}", config.plays_path.display(), e);
            startup_error(e)
        })?;
    let teams = config.load_team_directory().map_err(startup_error)?;
    let registry = config.load_what_if_registry().map_err(startup_error)?;

    let state = Data::new(AppData {
        store,
        teams,
        registry,
        sessions: RwLock::new(HashMap::new()),
    });

    // Background task: every 30 minutes, remove sessions idle past the timeout
    let state_cleanup = state.clone();
    let timeout = config.session_timeout;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.sessions.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s)", removed);
            }
        }
    });

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_meta)
            .service(api_get_play)
            .service(api_query)
            .service(api_what_if)
            .service(api_intent)
            .service(api_export)
            .service(api_team_report)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_ask)
            .service(api_set_filters)
            .service(api_select)
            .service(api_step)
            .service(api_shuffle)
            .service(api_reset)
            .service(Files::new("/static", "static"))
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
