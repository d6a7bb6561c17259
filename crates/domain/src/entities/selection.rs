//! Per-session selection of start and destination
//!
//! The state is an explicit value handed to every handler. Transitions are
//! pure: each takes `&self` and returns the next state, so a presentation
//! layer can keep, diff or serialize snapshots freely.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ResolvedLocation;
use crate::errors::DomainError;

/// Which end of the route a selection applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Where the route begins
    Start,
    /// Where the route ends
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Lifecycle of one role, driven only by user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoleState {
    /// Nothing typed or chosen
    #[default]
    Empty,
    /// User is typing; a lookup for `query` may be pending
    Querying {
        /// Text typed so far
        query: String,
    },
    /// Candidates for `query` are on screen
    SuggestionsShown {
        /// Text the suggestions belong to
        query: String,
        /// Candidates in upstream ranking order
        suggestions: Vec<ResolvedLocation>,
    },
    /// A location has been chosen
    Selected {
        /// The chosen location
        location: ResolvedLocation,
    },
}

impl RoleState {
    /// The chosen location, if any
    #[must_use]
    pub const fn selected(&self) -> Option<&ResolvedLocation> {
        match self {
            Self::Selected { location } => Some(location),
            _ => None,
        }
    }

    /// Suggestions currently shown, empty otherwise
    #[must_use]
    pub fn suggestions(&self) -> &[ResolvedLocation] {
        match self {
            Self::SuggestionsShown { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

/// Start and destination chosen in one UI session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SelectionState {
    start: RoleState,
    destination: RoleState,
}

impl SelectionState {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of one role
    #[must_use]
    pub const fn role(&self, role: Role) -> &RoleState {
        match role {
            Role::Start => &self.start,
            Role::Destination => &self.destination,
        }
    }

    fn with_role(&self, role: Role, state: RoleState) -> Self {
        let mut next = self.clone();
        match role {
            Role::Start => next.start = state,
            Role::Destination => next.destination = state,
        }
        next
    }

    /// User typed into a role's field
    ///
    /// Typing replaces any earlier selection for that role; blank input
    /// returns the role to `Empty`.
    #[must_use]
    pub fn begin_query(&self, role: Role, query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return self.with_role(role, RoleState::Empty);
        }
        self.with_role(
            role,
            RoleState::Querying {
                query: query.to_string(),
            },
        )
    }

    /// Lookup results arrived for a role
    ///
    /// Results are only applied while the role is still querying or showing
    /// suggestions; late results after a selection or clear are dropped.
    #[must_use]
    pub fn show_suggestions(&self, role: Role, suggestions: Vec<ResolvedLocation>) -> Self {
        match self.role(role) {
            RoleState::Querying { query } | RoleState::SuggestionsShown { query, .. } => {
                let query = query.clone();
                self.with_role(role, RoleState::SuggestionsShown { query, suggestions })
            },
            RoleState::Empty | RoleState::Selected { .. } => self.clone(),
        }
    }

    /// User picked the suggestion at `index`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if no suggestions are shown for
    /// the role or `index` is out of range.
    pub fn choose_suggestion(&self, role: Role, index: usize) -> Result<Self, DomainError> {
        let location = self
            .role(role)
            .suggestions()
            .get(index)
            .cloned()
            .ok_or_else(|| {
                DomainError::invalid_input(format!("no {role} suggestion at position {index}"))
            })?;
        Ok(self.select(role, location))
    }

    /// Set the location for a role; the last selection wins
    #[must_use]
    pub fn select(&self, role: Role, location: ResolvedLocation) -> Self {
        self.with_role(role, RoleState::Selected { location })
    }

    /// Reset both roles and drop pending suggestions
    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// The chosen location for a role
    #[must_use]
    pub const fn selected(&self, role: Role) -> Option<&ResolvedLocation> {
        self.role(role).selected()
    }

    /// Both roles are selected and do not share coordinates
    #[must_use]
    pub fn is_ready_for_route(&self) -> bool {
        self.route_endpoints().is_ok()
    }

    /// Start and destination for a route request
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInput` if a role is not selected or both
    /// roles point at the same coordinates.
    pub fn route_endpoints(&self) -> Result<(&ResolvedLocation, &ResolvedLocation), DomainError> {
        let start = self
            .selected(Role::Start)
            .ok_or_else(|| DomainError::invalid_input("start location is not selected"))?;
        let destination = self
            .selected(Role::Destination)
            .ok_or_else(|| DomainError::invalid_input("destination is not selected"))?;

        if start.same_point_as(destination) {
            return Err(DomainError::invalid_input(
                "start and destination cannot be the same",
            ));
        }

        Ok((start, destination))
    }
}
