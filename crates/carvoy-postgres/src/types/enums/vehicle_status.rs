//! Vehicle lifecycle status enumeration.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the transport lifecycle stage of a vehicle.
///
/// This enumeration corresponds to the `vehicle_status` PostgreSQL enum and
/// tracks a vehicle from the auction purchase through ocean shipping to the
/// destination port. Transitions are recorded as append-only status events.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::VehicleStatus"]
pub enum VehicleStatus {
    /// Purchased at auction, awaiting pickup
    #[db_rename = "purchased"]
    #[serde(rename = "purchased")]
    #[default]
    Purchased,

    /// Delivered to the departure terminal/warehouse
    #[db_rename = "at_terminal"]
    #[serde(rename = "at_terminal")]
    AtTerminal,

    /// Loaded into a container
    #[db_rename = "loaded"]
    #[serde(rename = "loaded")]
    Loaded,

    /// On the water, en route to the destination port
    #[db_rename = "shipped"]
    #[serde(rename = "shipped")]
    Shipped,

    /// Arrived at the destination port
    #[db_rename = "arrived"]
    #[serde(rename = "arrived")]
    Arrived,

    /// Released to the dealer
    #[db_rename = "delivered"]
    #[serde(rename = "delivered")]
    Delivered,

    /// Purchase fell through or the vehicle was withdrawn
    #[db_rename = "cancelled"]
    #[serde(rename = "cancelled")]
    Cancelled,
}

impl VehicleStatus {
    /// Returns whether the vehicle is still moving through the pipeline.
    #[inline]
    pub fn is_in_transit(self) -> bool {
        matches!(
            self,
            VehicleStatus::AtTerminal | VehicleStatus::Loaded | VehicleStatus::Shipped
        )
    }

    /// Returns whether this status is terminal.
    ///
    /// Terminal statuses accept no further transitions.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, VehicleStatus::Delivered | VehicleStatus::Cancelled)
    }

    /// Returns whether a transition from this status to `next` is allowed.
    ///
    /// The pipeline only moves forward (or to `Cancelled`); terminal statuses
    /// accept nothing. Skipping stages is allowed since status updates are
    /// entered manually and vehicles regularly miss an intermediate scan.
    pub fn can_transition_to(self, next: VehicleStatus) -> bool {
        if self.is_terminal() || next == self {
            return false;
        }

        if next == VehicleStatus::Cancelled {
            return true;
        }

        self.stage_index() < next.stage_index()
    }

    /// Position of the status within the forward pipeline.
    fn stage_index(self) -> u8 {
        match self {
            VehicleStatus::Purchased => 0,
            VehicleStatus::AtTerminal => 1,
            VehicleStatus::Loaded => 2,
            VehicleStatus::Shipped => 3,
            VehicleStatus::Arrived => 4,
            VehicleStatus::Delivered => 5,
            // Not part of the forward pipeline.
            VehicleStatus::Cancelled => u8::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(VehicleStatus::Purchased.can_transition_to(VehicleStatus::AtTerminal));
        assert!(VehicleStatus::Loaded.can_transition_to(VehicleStatus::Shipped));
        // Skipping intermediate stages is fine.
        assert!(VehicleStatus::Purchased.can_transition_to(VehicleStatus::Delivered));
    }

    #[test]
    fn backward_transitions_are_rejected() {
        assert!(!VehicleStatus::Shipped.can_transition_to(VehicleStatus::Loaded));
        assert!(!VehicleStatus::Arrived.can_transition_to(VehicleStatus::Purchased));
    }

    #[test]
    fn terminal_statuses_accept_nothing() {
        assert!(!VehicleStatus::Delivered.can_transition_to(VehicleStatus::Cancelled));
        assert!(!VehicleStatus::Cancelled.can_transition_to(VehicleStatus::Purchased));
    }

    #[test]
    fn any_active_status_can_be_cancelled() {
        assert!(VehicleStatus::Purchased.can_transition_to(VehicleStatus::Cancelled));
        assert!(VehicleStatus::Shipped.can_transition_to(VehicleStatus::Cancelled));
        assert!(VehicleStatus::Arrived.can_transition_to(VehicleStatus::Cancelled));
    }

    #[test]
    fn self_transition_is_rejected() {
        assert!(!VehicleStatus::Shipped.can_transition_to(VehicleStatus::Shipped));
    }
}
