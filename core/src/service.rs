//! Async roster operations: build, execute, parse.

use tracing::debug;

use crate::client::RosterClient;
use crate::error::NetworkError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{StudentDraft, StudentId, StudentRecord};

/// One method per API call. No retries, no timeouts.
#[derive(Debug, Clone)]
pub struct RosterService<T> {
    client: RosterClient,
    transport: T,
}

impl<T: Transport> RosterService<T> {
    pub fn new(client: RosterClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &RosterClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list(&self) -> Result<Vec<StudentRecord>, NetworkError> {
        let response = self.send(self.client.build_list_students()).await?;
        self.client.parse_list_students(response)
    }

    pub async fn create(&self, draft: &StudentDraft) -> Result<StudentRecord, NetworkError> {
        let request = self.client.build_create_student(draft)?;
        let response = self.send(request).await?;
        self.client.parse_create_student(response)
    }

    pub async fn update(&self, id: &StudentId, draft: &StudentDraft) -> Result<(), NetworkError> {
        let request = self.client.build_update_student(id, draft)?;
        let response = self.send(request).await?;
        self.client.parse_update_student(response)
    }

    pub async fn delete(&self, id: &StudentId) -> Result<(), NetworkError> {
        let response = self.send(self.client.build_delete_student(id)).await?;
        self.client.parse_delete_student(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let method = request.method.as_str();
        let path = request.path.clone();
        debug!(method, %path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(method, %path, status = response.status, "received response");
        Ok(response)
    }
}
