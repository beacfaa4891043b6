//! The PayLane operation table.
//!
//! Every payment action the REST API exposes is an [`Operation`] with a fixed
//! path (relative to [`API_URI`](crate::constants::API_URI)) and a fixed HTTP
//! verb. Transports resolve the path against their base URL and issue the
//! request with that verb; nothing else about an operation is special.

use std::fmt;
use std::str::FromStr;

use http::Method;

use crate::error::UnknownOperation;

/// A payment action exposed by the PayLane REST API.
///
/// # Example
///
/// ```rust
/// use paylane::Operation;
///
/// let op: Operation = "card_sale".parse().unwrap();
/// assert_eq!(op, Operation::CardSale);
/// assert_eq!(op.path(), "cards/sale");
/// assert_eq!(op.method(), http::Method::POST);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Charge a card.
    CardSale,
    /// Authorize an amount on a card without capturing it.
    CardAuthorization,
    /// Capture a previous authorization.
    CaptureAuthorization,
    /// Close a previous authorization without capturing it.
    CloseAuthorization,
    /// Refund a sale.
    Refund,
    /// Charge again using the details of a previous sale.
    ResaleBySale,
    /// Charge again using the details of a previous authorization.
    ResaleByAuthorization,
    /// Start a PayPal sale.
    PaypalSale,
    /// Start a PayPal authorization.
    PaypalAuthorization,
    /// Start a bank transfer sale.
    BankTransferSale,
    /// Start a Sofort sale.
    SofortSale,
    /// Direct debit sale.
    DirectDebitSale,
    /// Check whether a card is enrolled in 3-D Secure.
    CheckCard3dSecure,
    /// Complete a sale after 3-D Secure authentication.
    SaleBy3dSecureAuthorization,
    /// Fetch details of a sale.
    GetSaleInfo,
    /// Fetch details of an authorization.
    GetAuthorizationInfo,
    /// Fetch the status of a sale.
    CheckSaleStatus,
    /// Validate card details.
    CheckCard,
    /// Validate a tokenized card.
    CheckCardByToken,
}

impl Operation {
    /// Every operation, in the order the API documentation lists them.
    pub const ALL: [Self; 19] = [
        Self::CardSale,
        Self::CardAuthorization,
        Self::CaptureAuthorization,
        Self::CloseAuthorization,
        Self::Refund,
        Self::ResaleBySale,
        Self::ResaleByAuthorization,
        Self::PaypalSale,
        Self::PaypalAuthorization,
        Self::BankTransferSale,
        Self::SofortSale,
        Self::DirectDebitSale,
        Self::CheckCard3dSecure,
        Self::SaleBy3dSecureAuthorization,
        Self::GetSaleInfo,
        Self::GetAuthorizationInfo,
        Self::CheckSaleStatus,
        Self::CheckCard,
        Self::CheckCardByToken,
    ];

    /// Path of the operation relative to the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::CardSale => "cards/sale",
            Self::CardAuthorization => "cards/authorization",
            Self::CaptureAuthorization => "authorizations/capture",
            Self::CloseAuthorization => "authorizations/close",
            Self::Refund => "refund",
            Self::ResaleBySale => "resales/sale",
            Self::ResaleByAuthorization => "resales/authorization",
            Self::PaypalSale => "paypal/sale",
            Self::PaypalAuthorization => "paypal/authorization",
            Self::BankTransferSale => "banktransfers/sale",
            Self::SofortSale => "sofort/sale",
            Self::DirectDebitSale => "directdebits/sale",
            Self::CheckCard3dSecure => "3DSecure/checkCard",
            Self::SaleBy3dSecureAuthorization => "3DSecure/authSale",
            Self::GetSaleInfo => "sales/info",
            Self::GetAuthorizationInfo => "authorizations/info",
            Self::CheckSaleStatus => "sales/status",
            Self::CheckCard => "cards/check",
            Self::CheckCardByToken => "cards/checkByToken",
        }
    }

    /// HTTP verb the API expects for this operation.
    ///
    /// Queries (info, status, card checks) are `GET`; everything that moves
    /// money or changes an authorization is `POST`.
    #[must_use]
    pub fn method(self) -> Method {
        if self.is_query() {
            Method::GET
        } else {
            Method::POST
        }
    }

    /// Returns `true` for the read-only operations sent as `GET`.
    #[must_use]
    pub const fn is_query(self) -> bool {
        matches!(
            self,
            Self::CheckCard3dSecure
                | Self::GetSaleInfo
                | Self::GetAuthorizationInfo
                | Self::CheckSaleStatus
                | Self::CheckCard
                | Self::CheckCardByToken
        )
    }

    /// Snake-case name of the operation, matching the client method name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CardSale => "card_sale",
            Self::CardAuthorization => "card_authorization",
            Self::CaptureAuthorization => "capture_authorization",
            Self::CloseAuthorization => "close_authorization",
            Self::Refund => "refund",
            Self::ResaleBySale => "resale_by_sale",
            Self::ResaleByAuthorization => "resale_by_authorization",
            Self::PaypalSale => "paypal_sale",
            Self::PaypalAuthorization => "paypal_authorization",
            Self::BankTransferSale => "bank_transfer_sale",
            Self::SofortSale => "sofort_sale",
            Self::DirectDebitSale => "direct_debit_sale",
            Self::CheckCard3dSecure => "check_card_3d_secure",
            Self::SaleBy3dSecureAuthorization => "sale_by_3d_secure_authorization",
            Self::GetSaleInfo => "get_sale_info",
            Self::GetAuthorizationInfo => "get_authorization_info",
            Self::CheckSaleStatus => "check_sale_status",
            Self::CheckCard => "check_card",
            Self::CheckCardByToken => "check_card_by_token",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_and_names_are_unique() {
        let paths: HashSet<_> = Operation::ALL.iter().map(|op| op.path()).collect();
        let names: HashSet<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(paths.len(), Operation::ALL.len());
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_paths_are_relative() {
        for op in Operation::ALL {
            assert!(!op.path().starts_with('/'), "{op} has an absolute path");
        }
    }

    #[test]
    fn test_query_operations_use_get() {
        let gets: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| op.method() == Method::GET)
            .map(Operation::name)
            .collect();
        assert_eq!(
            gets,
            [
                "check_card_3d_secure",
                "get_sale_info",
                "get_authorization_info",
                "check_sale_status",
                "check_card",
                "check_card_by_token",
            ]
        );
    }

    #[test]
    fn test_three_d_secure_paths() {
        assert_eq!(Operation::CheckCard3dSecure.path(), "3DSecure/checkCard");
        assert_eq!(
            Operation::SaleBy3dSecureAuthorization.path(),
            "3DSecure/authSale"
        );
        assert_eq!(Operation::SaleBy3dSecureAuthorization.method(), Method::POST);
    }

    #[test]
    fn test_parse_round_trips_through_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_unknown_operation() {
        let err = "cards/sale".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operation: cards/sale");
    }
}
