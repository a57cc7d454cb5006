//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::SortOrder;
use shared::models::{CreateEmployeeRequest, DeleteEmployeeRequest, EmployeePatch};
use shared::response::{EmployeeListResponse, EmployeeResponse, MessageResponse};

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::roster;
use crate::utils::validation::{parse_id, validate_id};
use crate::utils::{AppError, AppJson, AppResult};

const NO_EMPLOYEES: &str = "No employees found";
const NO_EMPLOYEE: &str = "No employee found";

/// 404 instead of an empty list
fn non_empty(response: EmployeeListResponse) -> AppResult<Json<EmployeeListResponse>> {
    if response.is_empty() {
        return Err(AppError::not_found(NO_EMPLOYEES));
    }
    Ok(Json(response))
}

/// List every employee with department and role
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<EmployeeListResponse>> {
    let employees = roster::list_all_employees(state.pool()).await?;
    non_empty(EmployeeListResponse::new(employees))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_id(&id, "id")?;
    let employee = roster::get_employee_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found(NO_EMPLOYEE))?;
    Ok(Json(EmployeeResponse::new(employee)))
}

pub async fn list_by_department(
    State(state): State<ServerState>,
    Path(department_id): Path<String>,
) -> AppResult<Json<EmployeeListResponse>> {
    let department_id = parse_id(&department_id, "departmentId")?;
    let employees = roster::list_by_department(state.pool(), department_id).await?;
    non_empty(EmployeeListResponse::new(employees))
}

pub async fn list_by_role(
    State(state): State<ServerState>,
    Path(role_id): Path<String>,
) -> AppResult<Json<EmployeeListResponse>> {
    let role_id = parse_id(&role_id, "roleId")?;
    let employees = roster::list_by_role(state.pool(), role_id).await?;
    non_empty(EmployeeListResponse::new(employees))
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    pub order: Option<String>,
}

/// `order` defaults to ASC and is case-insensitive
pub async fn sort_by_name(
    State(state): State<ServerState>,
    Query(query): Query<SortQuery>,
) -> AppResult<Json<EmployeeListResponse>> {
    let order = match query.order.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(AppError::invalid)?,
        None => SortOrder::default(),
    };
    let employees = roster::list_sorted_by_name(state.pool(), order).await?;
    non_empty(EmployeeListResponse::new(employees))
}

pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CreateEmployeeRequest>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = roster::create_employee(state.pool(), payload.new_employee).await?;
    Ok(Json(EmployeeResponse::new(employee)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<EmployeePatch>,
) -> AppResult<Json<EmployeeResponse>> {
    let id = parse_id(&id, "id")?;
    let employee = roster::update_employee(state.pool(), id, patch)
        .await?
        .ok_or_else(|| AppError::not_found(NO_EMPLOYEE))?;
    Ok(Json(EmployeeResponse::new(employee)))
}

pub async fn delete(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteEmployeeRequest>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.id;
    validate_id(id, "id")?;
    if employee::find_by_id(state.pool(), id).await?.is_none() {
        return Err(AppError::not_found(format!(
            "employee with ID {id} not found to be deleted"
        )));
    }
    let confirmation = roster::delete_employee(state.pool(), id).await?;
    Ok(Json(confirmation))
}
