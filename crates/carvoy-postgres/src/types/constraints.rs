//! Database constraint violations organized by functional area.
//!
//! Postgres reports a violated constraint by name; this module parses those
//! names into typed values so handlers can map them onto precise HTTP
//! responses instead of a generic server error.

/// Unified constraint violation enum that can represent any database constraint.
///
/// This enum wraps all specific constraint types, providing a single interface
/// for handling any constraint violation while maintaining type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    Account(AccountConstraint),
    Vehicle(VehicleConstraint),
    Invoice(InvoiceConstraint),
    BalanceRequest(BalanceRequestConstraint),
    ShippingRate(ShippingRateConstraint),
    Geo(GeoConstraint),
    Catalog(CatalogConstraint),
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// Returns `None` if the constraint name is not recognized.
    pub fn new(constraint: &str) -> Option<Self> {
        use self::{
            AccountConstraint as Account, BalanceRequestConstraint as Balance,
            CatalogConstraint as Catalog, GeoConstraint as Geo, InvoiceConstraint as Invoice,
            ShippingRateConstraint as Rate, VehicleConstraint as Vehicle,
        };

        let violation = match constraint {
            "accounts_email_address_key" => Self::Account(Account::EmailTaken),
            "accounts_balance_non_negative" => Self::Account(Account::BalanceNegative),

            "vehicles_vin_key" => Self::Vehicle(Vehicle::VinTaken),
            "vehicles_model_year_range" => Self::Vehicle(Vehicle::ModelYearOutOfRange),
            "vehicle_photos_storage_prefix_key" => Self::Vehicle(Vehicle::PhotoPrefixTaken),

            "invoices_invoice_number_key" => Self::Invoice(Invoice::NumberTaken),
            "invoices_total_amount_non_negative" => Self::Invoice(Invoice::TotalNegative),
            "invoice_items_amount_positive" => Self::Invoice(Invoice::ItemAmountNotPositive),

            "balance_requests_amount_positive" => Self::BalanceRequest(Balance::AmountNotPositive),

            "shipping_rates_route_key" => Self::ShippingRate(Rate::RouteTaken),
            "shipping_rates_amount_positive" => Self::ShippingRate(Rate::AmountNotPositive),

            "countries_display_name_key" => Self::Geo(Geo::CountryNameTaken),
            "countries_iso_code_key" => Self::Geo(Geo::CountryCodeTaken),
            "states_country_name_key" => Self::Geo(Geo::StateNameTaken),
            "cities_state_name_key" => Self::Geo(Geo::CityNameTaken),
            "ports_port_code_key" => Self::Geo(Geo::PortCodeTaken),

            "auctions_display_name_key" => Self::Catalog(Catalog::AuctionNameTaken),
            "makes_display_name_key" => Self::Catalog(Catalog::MakeNameTaken),
            "vehicle_models_make_name_key" => Self::Catalog(Catalog::ModelNameTaken),

            _ => return None,
        };

        Some(violation)
    }

    /// Returns whether this violation stems from a uniqueness constraint.
    ///
    /// Uniqueness violations map to HTTP 409, the rest to HTTP 400.
    pub fn is_uniqueness(self) -> bool {
        !matches!(
            self,
            Self::Account(AccountConstraint::BalanceNegative)
                | Self::Vehicle(VehicleConstraint::ModelYearOutOfRange)
                | Self::Invoice(InvoiceConstraint::TotalNegative)
                | Self::Invoice(InvoiceConstraint::ItemAmountNotPositive)
                | Self::BalanceRequest(BalanceRequestConstraint::AmountNotPositive)
                | Self::ShippingRate(ShippingRateConstraint::AmountNotPositive)
        )
    }

    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::Account(c) => c.user_message(),
            Self::Vehicle(c) => c.user_message(),
            Self::Invoice(c) => c.user_message(),
            Self::BalanceRequest(c) => c.user_message(),
            Self::ShippingRate(c) => c.user_message(),
            Self::Geo(c) => c.user_message(),
            Self::Catalog(c) => c.user_message(),
        }
    }
}

/// Constraints on the `accounts` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountConstraint {
    /// Another account already uses this email address.
    EmailTaken,
    /// A balance mutation would make the balance negative.
    BalanceNegative,
}

impl AccountConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::EmailTaken => "An account with this email address already exists",
            Self::BalanceNegative => "The account balance is insufficient for this operation",
        }
    }
}

/// Constraints on the `vehicles` and `vehicle_photos` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleConstraint {
    /// Another vehicle already uses this VIN.
    VinTaken,
    /// Model year outside the accepted range.
    ModelYearOutOfRange,
    /// A photo with this storage prefix already exists.
    PhotoPrefixTaken,
}

impl VehicleConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::VinTaken => "A vehicle with this VIN is already registered",
            Self::ModelYearOutOfRange => "The model year is outside the accepted range",
            Self::PhotoPrefixTaken => "A photo with this storage key already exists",
        }
    }
}

/// Constraints on the `invoices` and `invoice_items` tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceConstraint {
    /// Another invoice already uses this number.
    NumberTaken,
    /// Invoice total would be negative.
    TotalNegative,
    /// Invoice item amount must be positive.
    ItemAmountNotPositive,
}

impl InvoiceConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::NumberTaken => "An invoice with this number already exists",
            Self::TotalNegative => "The invoice total must not be negative",
            Self::ItemAmountNotPositive => "Invoice item amounts must be positive",
        }
    }
}

/// Constraints on the `balance_requests` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceRequestConstraint {
    /// Requested amount must be positive.
    AmountNotPositive,
}

impl BalanceRequestConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::AmountNotPositive => "The requested amount must be positive",
        }
    }
}

/// Constraints on the `shipping_rates` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingRateConstraint {
    /// A rate for this city/port route already exists.
    RouteTaken,
    /// Rate amount must be positive.
    AmountNotPositive,
}

impl ShippingRateConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::RouteTaken => "A shipping rate for this route already exists",
            Self::AmountNotPositive => "The shipping rate must be positive",
        }
    }
}

/// Constraints on the geography reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoConstraint {
    CountryNameTaken,
    CountryCodeTaken,
    StateNameTaken,
    CityNameTaken,
    PortCodeTaken,
}

impl GeoConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::CountryNameTaken => "A country with this name already exists",
            Self::CountryCodeTaken => "A country with this ISO code already exists",
            Self::StateNameTaken => "A state with this name already exists in this country",
            Self::CityNameTaken => "A city with this name already exists in this state",
            Self::PortCodeTaken => "A port with this code already exists",
        }
    }
}

/// Constraints on the catalog reference tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogConstraint {
    AuctionNameTaken,
    MakeNameTaken,
    ModelNameTaken,
}

impl CatalogConstraint {
    /// Returns a user-facing message describing the violation.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::AuctionNameTaken => "An auction with this name already exists",
            Self::MakeNameTaken => "A make with this name already exists",
            Self::ModelNameTaken => "A model with this name already exists for this make",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_constraint_names() {
        let violation = ConstraintViolation::new("accounts_email_address_key");
        assert_eq!(
            violation,
            Some(ConstraintViolation::Account(AccountConstraint::EmailTaken))
        );

        let violation = ConstraintViolation::new("vehicles_vin_key");
        assert_eq!(
            violation,
            Some(ConstraintViolation::Vehicle(VehicleConstraint::VinTaken))
        );
    }

    #[test]
    fn unknown_constraint_names_return_none() {
        assert!(ConstraintViolation::new("no_such_constraint").is_none());
    }

    #[test]
    fn check_constraints_are_not_uniqueness() {
        let violation = ConstraintViolation::new("accounts_balance_non_negative").unwrap();
        assert!(!violation.is_uniqueness());

        let violation = ConstraintViolation::new("invoices_invoice_number_key").unwrap();
        assert!(violation.is_uniqueness());
    }
}
