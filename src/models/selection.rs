//! Speaker selection-status filter values.
//!
//! Composite values ("only_rejected", "accepted_alternate", ...) expand into
//! exactly three boolean clauses over the has_*_presentations flags through
//! a fixed lookup table. Any other combination degrades to a comma-grouped
//! list of `has_<value>_presentations==true` predicates in input order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    Accepted,
    Rejected,
    Alternate,
    OnlyAccepted,
    OnlyRejected,
    OnlyAlternate,
    AcceptedAlternate,
    AcceptedRejected,
    AlternateRejected,
}

/// Field names of the three presentation flags.
pub const HAS_ACCEPTED: &str = "has_accepted_presentations";
pub const HAS_REJECTED: &str = "has_rejected_presentations";
pub const HAS_ALTERNATE: &str = "has_alternate_presentations";

impl SelectionStatus {
    pub fn as_param(&self) -> &'static str {
        match self {
            SelectionStatus::Accepted => "accepted",
            SelectionStatus::Rejected => "rejected",
            SelectionStatus::Alternate => "alternate",
            SelectionStatus::OnlyAccepted => "only_accepted",
            SelectionStatus::OnlyRejected => "only_rejected",
            SelectionStatus::OnlyAlternate => "only_alternate",
            SelectionStatus::AcceptedAlternate => "accepted_alternate",
            SelectionStatus::AcceptedRejected => "accepted_rejected",
            SelectionStatus::AlternateRejected => "alternate_rejected",
        }
    }

    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "accepted" => Some(SelectionStatus::Accepted),
            "rejected" => Some(SelectionStatus::Rejected),
            "alternate" => Some(SelectionStatus::Alternate),
            "only_accepted" => Some(SelectionStatus::OnlyAccepted),
            "only_rejected" => Some(SelectionStatus::OnlyRejected),
            "only_alternate" => Some(SelectionStatus::OnlyAlternate),
            "accepted_alternate" => Some(SelectionStatus::AcceptedAlternate),
            "accepted_rejected" => Some(SelectionStatus::AcceptedRejected),
            "alternate_rejected" => Some(SelectionStatus::AlternateRejected),
            _ => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.composite_flags().is_some()
    }

    /// Expansion table for composite values: the three (field, value)
    /// pairs to emit, in emission order. Plain values return None.
    ///
    /// The table encodes a backend business rule; the booleans and their
    /// order are fixed, not derived.
    pub fn composite_flags(&self) -> Option<[(&'static str, bool); 3]> {
        match self {
            SelectionStatus::OnlyRejected => Some([
                (HAS_REJECTED, true),
                (HAS_ACCEPTED, false),
                (HAS_ALTERNATE, false),
            ]),
            SelectionStatus::OnlyAccepted => Some([
                (HAS_ACCEPTED, true),
                (HAS_REJECTED, false),
                (HAS_ALTERNATE, false),
            ]),
            SelectionStatus::OnlyAlternate => Some([
                (HAS_ALTERNATE, true),
                (HAS_ACCEPTED, false),
                (HAS_REJECTED, false),
            ]),
            SelectionStatus::AcceptedAlternate => Some([
                (HAS_ACCEPTED, true),
                (HAS_ALTERNATE, true),
                (HAS_REJECTED, false),
            ]),
            SelectionStatus::AcceptedRejected => Some([
                (HAS_ACCEPTED, true),
                (HAS_REJECTED, true),
                (HAS_ALTERNATE, false),
            ]),
            SelectionStatus::AlternateRejected => Some([
                (HAS_ALTERNATE, true),
                (HAS_REJECTED, true),
                (HAS_ACCEPTED, false),
            ]),
            _ => None,
        }
    }

    /// Flag field used by the degraded comma-grouped form:
    /// `has_<value>_presentations`.
    pub fn flag_field(&self) -> String {
        format!("has_{}_presentations", self.as_param())
    }
}
