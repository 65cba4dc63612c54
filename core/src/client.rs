//! Stateless HTTP request builder and response parser for the roster API.
//!
//! # Design
//! `RosterClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Executing the round-trip is someone
//! else's job (see `RosterService`).
//!
//! Any 2xx is accepted. Update and delete responses carry no body contract,
//! so only their status is inspected.

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{StudentDraft, StudentId, StudentRecord};

#[derive(Debug, Clone)]
pub struct RosterClient {
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/students/{id}` with the id encoded as one path segment.
    fn student_path(&self, id: &StudentId) -> String {
        format!(
            "{}/students/{}",
            self.base_url,
            urlencoding::encode(&id.to_string())
        )
    }

    pub fn build_list_students(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/students", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_student(&self, draft: &StudentDraft) -> Result<HttpRequest, NetworkError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/students", self.base_url),
            headers: json_headers(),
            body: Some(to_json(draft)?),
        })
    }

    pub fn build_update_student(
        &self,
        id: &StudentId,
        draft: &StudentDraft,
    ) -> Result<HttpRequest, NetworkError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.student_path(id),
            headers: json_headers(),
            body: Some(to_json(draft)?),
        })
    }

    pub fn build_delete_student(&self, id: &StudentId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.student_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_students(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<StudentRecord>, NetworkError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| NetworkError::Deserialization(e.to_string()))
    }

    pub fn parse_create_student(&self, response: HttpResponse) -> Result<StudentRecord, NetworkError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| NetworkError::Deserialization(e.to_string()))
    }

    pub fn parse_update_student(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }

    pub fn parse_delete_student(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(draft: &StudentDraft) -> Result<String, NetworkError> {
    serde_json::to_string(draft).map_err(|e| NetworkError::Serialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), NetworkError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(NetworkError::NotFound);
    }
    Err(NetworkError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RosterClient {
        RosterClient::new("http://localhost:3300")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_students_produces_correct_request() {
        let req = client().build_list_students();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3300/students");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_student_sends_json_without_id() {
        let draft = StudentDraft::new("John Smith", "1999-09-09", "3.2");
        let req = client().build_create_student(&draft).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3300/students");
        assert_eq!(req.headers, json_headers());
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"fullName": "John Smith", "dob": "1999-09-09", "gpa": "3.2"})
        );
    }

    #[test]
    fn build_update_student_targets_the_record() {
        let draft = StudentDraft::new("Ann Lee", "2001-05-01", "3.9");
        let req = client()
            .build_update_student(&StudentId::from(1), &draft)
            .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3300/students/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["gpa"], "3.9");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_student_with_text_id() {
        let req = client().build_delete_student(&StudentId::from("a1f3"));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3300/students/a1f3");
        assert!(req.body.is_none());
    }

    #[test]
    fn reserved_characters_in_id_stay_in_one_segment() {
        let req = client().build_delete_student(&StudentId::from("a/b?x=1#f%"));
        assert_eq!(req.path, "http://localhost:3300/students/a%2Fb%3Fx%3D1%23f%25");

        let url = url::Url::parse(&req.path).unwrap();
        assert_eq!(url.path_segments().unwrap().count(), 2);
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());

        let draft = StudentDraft::new("Ann Lee", "2001-05-01", "3.9");
        let req = client()
            .build_update_student(&StudentId::from("a b"), &draft)
            .unwrap();
        assert_eq!(req.path, "http://localhost:3300/students/a%20b");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = RosterClient::new("http://localhost:3300/");
        assert_eq!(client.base_url(), "http://localhost:3300");
        assert_eq!(client.build_list_students().path, "http://localhost:3300/students");
    }

    #[test]
    fn parse_list_students_keeps_order() {
        let body = r#"[
            {"id":2,"fullName":"John Smith","dob":"1999-09-09","gpa":"3.2"},
            {"id":1,"fullName":"Ann Lee","dob":"2001-05-01","gpa":"3.8"}
        ]"#;
        let students = client().parse_list_students(response(200, body)).unwrap();
        let ids: Vec<_> = students.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, vec![StudentId::from(2), StudentId::from(1)]);
    }

    #[test]
    fn parse_list_students_bad_json() {
        let err = client()
            .parse_list_students(response(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Deserialization(_)));
    }

    #[test]
    fn parse_list_students_server_error() {
        let err = client()
            .parse_list_students(response(503, "unavailable"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::HttpStatus { status: 503, .. }));
    }

    #[test]
    fn parse_create_student_accepts_200_and_201() {
        let body = r#"{"id":2,"fullName":"John Smith","dob":"1999-09-09","gpa":"3.2"}"#;
        for status in [200, 201] {
            let student = client().parse_create_student(response(status, body)).unwrap();
            assert_eq!(student.id, StudentId::from(2));
        }
    }

    #[test]
    fn parse_create_student_surfaces_failure_status() {
        let err = client()
            .parse_create_student(response(500, "internal error"))
            .unwrap_err();
        match err {
            NetworkError::HttpStatus { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "internal error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_student_ignores_body() {
        assert!(client().parse_update_student(response(200, "")).is_ok());
        assert!(client().parse_update_student(response(200, "garbage")).is_ok());
    }

    #[test]
    fn parse_delete_student_not_found() {
        let err = client().parse_delete_student(response(404, "")).unwrap_err();
        assert!(matches!(err, NetworkError::NotFound));
    }

    #[test]
    fn parse_delete_student_success() {
        assert!(client().parse_delete_student(response(204, "")).is_ok());
        assert!(client().parse_delete_student(response(200, "{}")).is_ok());
    }
}
