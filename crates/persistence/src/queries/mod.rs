// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `entries`: Entry lookups and period/responsible filtering
//! - `staff`: Team directory lookups
//! - `audit`: Audit event and timeline queries

pub mod audit;
pub mod entries;
pub mod staff;

pub use audit::{get_audit_event, list_audit_events};
pub use entries::{EntryQuery, get_entry, list_entries};
pub use staff::{count_staff, get_staff, list_staff};
