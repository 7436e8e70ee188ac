// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Audit trail for wizard sessions.
//!
//! Every accepted wizard command produces exactly one [`AuditEvent`].
//! Rejected commands produce none. Events are appended to an
//! [`AuditLog`], which assigns them a sequence number.

use serde::Serialize;
use time::OffsetDateTime;

/// The operator who drove a wizard command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    /// The operator identifier.
    pub id: String,
    /// The operator role (e.g. "admin").
    pub role: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The operator identifier
    /// * `role` - The operator role
    #[must_use]
    pub const fn new(id: String, role: String) -> Self {
        Self { id, role }
    }
}

/// Why a command was issued, usually the UI gesture or request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cause {
    /// A request or gesture identifier.
    pub id: String,
    /// A description of the trigger.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// What the command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// The command name (e.g. "`ApplyStep`").
    pub name: String,
    /// Optional human-readable details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual summary of a wizard session at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    /// The summary, as `key=value` pairs separated by commas.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Looks up the value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.split(',').find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == key).then_some(value)
        })
    }
}

/// An immutable record of one accepted wizard command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEvent {
    /// Position in the session's audit log, assigned on append.
    /// `None` until the event has been recorded.
    pub sequence: Option<u64>,
    /// The operator who issued the command.
    pub actor: Actor,
    /// Why the command was issued.
    pub cause: Cause,
    /// What the command did.
    pub action: Action,
    /// The session before the command.
    pub before: StateSnapshot,
    /// The session after the command.
    pub after: StateSnapshot,
    /// When the event was created.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new, unsequenced `AuditEvent` stamped with the current time.
    #[must_use]
    pub fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            sequence: None,
            actor,
            cause,
            action,
            before,
            after,
            recorded_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Append-only list of audit events for one wizard session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event, assigning the next sequence number, and returns
    /// that number.
    pub fn record(&mut self, mut event: AuditEvent) -> u64 {
        let sequence: u64 = u64::try_from(self.events.len())
            .unwrap_or(u64::MAX)
            .saturating_add(1);
        event.sequence = Some(sequence);
        self.events.push(event);
        sequence
    }

    /// Returns every event in the order it was recorded.
    #[must_use]
    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    /// Returns the events whose action carries `name`.
    pub fn with_action<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AuditEvent> {
        self.events
            .iter()
            .filter(move |event| event.action.name == name)
    }

    /// Returns the most recently recorded event.
    #[must_use]
    pub fn last(&self) -> Option<&AuditEvent> {
        self.events.last()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
