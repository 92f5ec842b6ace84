/**
 * User Routes
 *
 * The CRUD surface over the `users` table. Reads that only need an id
 * travel as path segments; anything carrying credentials or sensitive
 * pairs travels as a POST body.
 */
use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::users::handlers;

/// Add the user routes to the router.
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/all", get(handlers::list::list))
        .route("/users/register", post(handlers::register::register))
        .route(
            "/users/confirmEmail",
            post(handlers::confirm_email::confirm_email),
        )
        .route("/users/login", post(handlers::login::login))
        .route("/users", put(handlers::password::update_password))
        .route(
            "/users/{id}",
            get(handlers::get_by_id::get_by_id).delete(handlers::delete::delete),
        )
}
