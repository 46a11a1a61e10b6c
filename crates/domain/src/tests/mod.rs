// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod action;
mod highlight;
mod types;

use crate::{EntityId, Selection};

/// Builds a selection by ticking `ids` in order.
pub fn selection_of(ids: &[i64]) -> Selection {
    ids.iter().copied().map(EntityId::new).collect()
}
