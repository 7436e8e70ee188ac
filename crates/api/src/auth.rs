// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roles and authorization for wizard operations.

use unit_wizard_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// The property-management client knows four kinds of account. Only admins
/// create buildings, so only admins may drive the unit wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Property administrators. May open, drive and finish wizards.
    Admin,
    /// Tenants renting a unit.
    Tenant,
    /// Unit owners.
    Owner,
    /// Maintenance and building staff.
    Worker,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Tenant => "tenant",
            Self::Owner => "owner",
            Self::Worker => "worker",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

/// Authorization service for wizard operations.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may perform a wizard action.
    ///
    /// Only Admin actors may open, drive or finish a wizard.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The action being attempted, used in the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_wizard(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Tenant | Role::Owner | Role::Worker => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            }),
        }
    }
}

/// Stub authentication function.
///
/// Credentials are handled by the hosting application; this only checks
/// that an identity was supplied.
///
/// # Errors
///
/// Returns an error if `actor_id` is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}
