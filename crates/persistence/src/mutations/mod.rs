// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! - `entries`: Entry inserts, updates and deletes
//! - `staff`: Team directory inserts and flag changes
//! - `audit`: Audit event persistence
//! - `transition`: Applying a core transition and its audit event atomically

pub mod audit;
pub mod entries;
pub mod staff;
pub mod transition;

pub use audit::persist_audit_event;
pub use transition::{PersistTransitionResult, persist_transition};
