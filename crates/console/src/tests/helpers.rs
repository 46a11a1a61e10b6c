// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, Mutex};
use tab_admin::ViewState;
use tab_admin_client::{ClientError, EntityApi};
use tab_admin_domain::{
    ActionRequest, CellValue, EntityId, EntityKind, EntityRecord, ScreenConfig, Selection,
};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn create_test_records(ids: &[i64]) -> Vec<EntityRecord> {
    ids.iter()
        .map(|id| {
            EntityRecord::new(EntityId::new(*id))
                .with("firstName", CellValue::Text(String::from("Ada")))
                .with("lastName", CellValue::Text(format!("Lovelace{id}")))
                .with("fullName", CellValue::Text(format!("Ada Lovelace{id}")))
                .with("teams", CellValue::Text(String::from("Analytical")))
                .with("name", CellValue::Text(format!("College {id}")))
                .with("teamCount", CellValue::Integer(*id))
        })
        .collect()
}

/// A loaded, mounted view with `selected` ticked in order.
pub fn create_test_view(screen: ScreenConfig, ids: &[i64], selected: &[i64]) -> ViewState {
    let mut view: ViewState = ViewState::new(screen);
    view.mounted = true;
    view.loaded = true;
    view.records = create_test_records(ids);
    view.selection = selected.iter().copied().map(EntityId::new).collect::<Selection>();
    view
}

/// An [`EntityApi`] that always serves the same rows and accepts every action.
#[derive(Debug, Clone, Default)]
pub struct StaticApi {
    rows: Arc<Vec<EntityRecord>>,
    sent: Arc<Mutex<Vec<ActionRequest>>>,
    reject_with: Option<u16>,
}

impl StaticApi {
    pub fn with_rows(ids: &[i64]) -> Self {
        Self {
            rows: Arc::new(create_test_records(ids)),
            ..Self::default()
        }
    }

    pub fn rejecting(mut self, status: u16) -> Self {
        self.reject_with = Some(status);
        self
    }

    pub fn sent(&self) -> Vec<ActionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl EntityApi for StaticApi {
    async fn fetch_collection(&self, _kind: EntityKind) -> Result<Vec<EntityRecord>, ClientError> {
        Ok(self.rows.as_ref().clone())
    }

    async fn submit(&self, request: &ActionRequest) -> Result<(), ClientError> {
        self.sent.lock().unwrap().push(request.clone());
        match self.reject_with {
            Some(status) => Err(ClientError::Status {
                status,
                body: String::from("rejected"),
            }),
            None => Ok(()),
        }
    }
}
