//! Employee API Module
//!
//! | Path | Method | Handler |
//! |------|--------|---------|
//! | /employees | GET | [`handler::list`] |
//! | /employee/details/{id} | GET | [`handler::get_by_id`] |
//! | /employees/department/{departmentId} | GET | [`handler::list_by_department`] |
//! | /employees/role/{roleId} | GET | [`handler::list_by_role`] |
//! | /employees/sort-by-name?order=ASC\|DESC | GET | [`handler::sort_by_name`] |
//! | /employees/new | POST | [`handler::create`] |
//! | /employees/update/{id} | POST | [`handler::update`] |
//! | /employees/delete | POST | [`handler::delete`] |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/employees", get(handler::list))
        .route("/employee/details/{id}", get(handler::get_by_id))
        .route(
            "/employees/department/{department_id}",
            get(handler::list_by_department),
        )
        .route("/employees/role/{role_id}", get(handler::list_by_role))
        .route("/employees/sort-by-name", get(handler::sort_by_name));

    let write_routes = Router::new()
        .route("/employees/new", post(handler::create))
        .route("/employees/update/{id}", post(handler::update))
        .route("/employees/delete", post(handler::delete));

    read_routes.merge(write_routes)
}
