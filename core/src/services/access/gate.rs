//! Access decision for a single board

use serde::{Deserialize, Serialize};

use crate::domain::entities::category::BoardDescriptor;

/// Who is asking to enter a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// No authenticated caller
    Anonymous,
    /// Signed-in caller with their currently verified school, if any
    Authenticated { verified_school_id: Option<i64> },
}

/// Why entry was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The board requires a signed-in caller
    Unauthenticated,
    /// The caller has no verified school
    NotVerified,
    /// The caller is verified, but for another school
    DifferentSchool { verified_school_id: i64 },
}

impl DenialReason {
    /// Stable machine-readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            DenialReason::Unauthenticated => "unauthenticated",
            DenialReason::NotVerified => "not_verified",
            DenialReason::DifferentSchool { .. } => "different_school",
        }
    }
}

/// Outcome of an access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    Denied(DenialReason),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }

    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            AccessDecision::Allowed => None,
            AccessDecision::Denied(reason) => Some(*reason),
        }
    }
}

/// Decides entry to boards; school boards are children of a fixed parent category
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    school_boards_parent_id: i64,
}

impl AccessGate {
    pub fn new(school_boards_parent_id: i64) -> Self {
        Self {
            school_boards_parent_id,
        }
    }

    /// Whether the board is scoped to a single school
    pub fn is_school_board(&self, board: &BoardDescriptor) -> bool {
        board.parent_id == Some(self.school_boards_parent_id)
    }

    /// Decide whether `viewer` may enter `board`
    pub fn evaluate(&self, board: &BoardDescriptor, viewer: &Viewer) -> AccessDecision {
        if !board.requires_auth {
            return AccessDecision::Allowed;
        }

        let verified_school_id = match viewer {
            Viewer::Anonymous => return AccessDecision::Denied(DenialReason::Unauthenticated),
            Viewer::Authenticated { verified_school_id } => *verified_school_id,
        };

        if !self.is_school_board(board) {
            return AccessDecision::Allowed;
        }

        match verified_school_id {
            None => AccessDecision::Denied(DenialReason::NotVerified),
            Some(school_id) if school_id == board.id => AccessDecision::Allowed,
            Some(school_id) => AccessDecision::Denied(DenialReason::DifferentSchool {
                verified_school_id: school_id,
            }),
        }
    }
}
