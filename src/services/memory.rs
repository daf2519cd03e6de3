//! In-memory `ResourceApi` for tests
//!
//! Behaves like the real backend (server-assigned ids, newest first, 404 on
//! unknown ids) and records every call it receives.

use super::api::ResourceApi;
use crate::error::RequestError;
use crate::model::{EntryId, Payload, ResourceKind};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ResourceKind),
    Create(ResourceKind, Payload),
    Update(ResourceKind, EntryId, Payload),
    Delete(ResourceKind, EntryId),
}

#[derive(Default)]
struct State {
    next_id: EntryId,
    rows: HashMap<ResourceKind, Vec<Value>>,
    calls: Vec<Call>,
    failure: Option<RequestError>,
}

#[derive(Default)]
pub struct InMemoryApi {
    state: Mutex<State>,
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    /// Make every following call fail with `err`, or succeed again with `None`
    pub fn fail_with(&self, err: Option<RequestError>) {
        self.state.lock().unwrap().failure = err;
    }

    /// Current collection as the backend would return it
    pub fn rows(&self, resource: ResourceKind) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .rows
            .get(&resource)
            .cloned()
            .unwrap_or_default()
    }

    /// Insert a row directly, bypassing the call log
    pub fn seed(&self, resource: ResourceKind, fields: Value) -> EntryId {
        let mut state = self.state.lock().unwrap();
        Self::insert(&mut state, resource, fields)
    }

    fn insert(state: &mut State, resource: ResourceKind, mut fields: Value) -> EntryId {
        state.next_id += 1;
        let id = state.next_id;
        fields["id"] = json!(id);
        state.rows.entry(resource).or_default().insert(0, fields);
        id
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, State>, RequestError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(err) = state.failure.clone() {
            return Err(err);
        }
        Ok(state)
    }

    fn not_found() -> RequestError {
        RequestError::Status {
            status: 404,
            body: r#"{"detail":"Not found"}"#.to_string(),
        }
    }
}

impl ResourceApi for InMemoryApi {
    fn fetch_collection(&self, resource: ResourceKind) -> Result<Value, RequestError> {
        let state = self.record(Call::List(resource))?;
        Ok(Value::Array(
            state.rows.get(&resource).cloned().unwrap_or_default(),
        ))
    }

    fn create(&self, resource: ResourceKind, body: &Payload) -> Result<Value, RequestError> {
        let mut state = self.record(Call::Create(resource, body.clone()))?;
        let id = Self::insert(&mut state, resource, Value::Object(body.clone()));
        let mut created = Value::Object(body.clone());
        created["id"] = json!(id);
        Ok(created)
    }

    fn update(
        &self,
        resource: ResourceKind,
        id: EntryId,
        body: &Payload,
    ) -> Result<Value, RequestError> {
        let mut state = self.record(Call::Update(resource, id, body.clone()))?;
        let row = state
            .rows
            .get_mut(&resource)
            .and_then(|rows| rows.iter_mut().find(|r| r["id"] == json!(id)))
            .ok_or_else(Self::not_found)?;
        let mut updated = Value::Object(body.clone());
        updated["id"] = json!(id);
        *row = updated.clone();
        Ok(updated)
    }

    fn delete(&self, resource: ResourceKind, id: EntryId) -> Result<Value, RequestError> {
        let mut state = self.record(Call::Delete(resource, id))?;
        let rows = state.rows.entry(resource).or_default();
        let before = rows.len();
        rows.retain(|r| r["id"] != json!(id));
        if rows.len() == before {
            return Err(Self::not_found());
        }
        Ok(json!({ "deleted": true }))
    }

    fn health(&self) -> Result<(), RequestError> {
        match &self.state.lock().unwrap().failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
