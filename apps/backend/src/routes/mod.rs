use actix_web::web;

pub mod categories;
pub mod clues;
pub mod custom_games;
pub mod games;
pub mod health;

/// Register every HTTP route.
///
/// `main.rs` and the route tests both go through here, so the paths served
/// in tests match production exactly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Custom games: /api/custom-games/**
    cfg.service(web::scope("/api/custom-games").configure(custom_games::configure_routes));

    // Categories: /api/categories/**
    cfg.service(web::scope("/api/categories").configure(categories::configure_routes));

    // Clues: /api/clues/** and /api/random-clue
    cfg.configure(clues::configure_routes);

    // Recorded games: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
