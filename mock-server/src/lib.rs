//! In-memory stand-in for the student roster API.
//!
//! Records live in a `BTreeMap` keyed by a sequential numeric id, so listing
//! returns them in creation order. No validation is performed on the stored
//! fields; the server accepts whatever the client sends.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub full_name: String,
    pub dob: String,
    pub gpa: String,
}

/// Body of `POST /students` and `PUT /students/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub full_name: String,
    pub dob: String,
    pub gpa: String,
}

#[derive(Debug, Default)]
pub struct Roster {
    next_id: u64,
    students: BTreeMap<u64, Student>,
}

impl Roster {
    fn insert(&mut self, input: StudentInput) -> Student {
        self.next_id += 1;
        let student = Student {
            id: self.next_id,
            full_name: input.full_name,
            dob: input.dob,
            gpa: input.gpa,
        };
        self.students.insert(student.id, student.clone());
        student
    }
}

pub type Db = Arc<RwLock<Roster>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Roster::default()));
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_students(State(db): State<Db>) -> Json<Vec<Student>> {
    let roster = db.read().await;
    Json(roster.students.values().cloned().collect())
}

async fn create_student(
    State(db): State<Db>,
    Json(input): Json<StudentInput>,
) -> (StatusCode, Json<Student>) {
    let student = db.write().await.insert(input);
    debug!(id = student.id, "student created");
    (StatusCode::CREATED, Json(student))
}

async fn get_student(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<Student>, StatusCode> {
    let roster = db.read().await;
    roster
        .students
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_student(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<StudentInput>,
) -> Result<Json<Student>, StatusCode> {
    let mut roster = db.write().await;
    let student = roster.students.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    student.full_name = input.full_name;
    student.dob = input.dob;
    student.gpa = input.gpa;
    debug!(id, "student updated");
    Ok(Json(student.clone()))
}

async fn delete_student(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut roster = db.write().await;
    roster
        .students
        .remove(&id)
        .map(|_| {
            debug!(id, "student deleted");
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}
