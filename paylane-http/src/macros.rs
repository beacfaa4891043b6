//! Generates the per-operation client methods.
//!
//! Every method is a named shortcut for `call(Operation::X, params)`, so the
//! list of operations is written once in `for_each_operation!` and expanded
//! into async or blocking methods by `operation_methods!`.

/// Invokes `$callback!` with the full operation list.
macro_rules! for_each_operation {
    ($callback:ident!($mode:ident)) => {
        $callback! {
            $mode;
            /// Charges a card (`POST cards/sale`).
            card_sale => CardSale,
            /// Authorizes an amount on a card (`POST cards/authorization`).
            card_authorization => CardAuthorization,
            /// Captures a previous authorization (`POST authorizations/capture`).
            capture_authorization => CaptureAuthorization,
            /// Closes an authorization without capturing it (`POST authorizations/close`).
            close_authorization => CloseAuthorization,
            /// Refunds a sale (`POST refund`).
            refund => Refund,
            /// Charges again using a previous sale (`POST resales/sale`).
            resale_by_sale => ResaleBySale,
            /// Charges again using a previous authorization (`POST resales/authorization`).
            resale_by_authorization => ResaleByAuthorization,
            /// Starts a PayPal sale (`POST paypal/sale`).
            paypal_sale => PaypalSale,
            /// Starts a PayPal authorization (`POST paypal/authorization`).
            paypal_authorization => PaypalAuthorization,
            /// Starts a bank transfer sale (`POST banktransfers/sale`).
            bank_transfer_sale => BankTransferSale,
            /// Starts a Sofort sale (`POST sofort/sale`).
            sofort_sale => SofortSale,
            /// Direct debit sale (`POST directdebits/sale`).
            direct_debit_sale => DirectDebitSale,
            /// Checks whether a card is enrolled in 3-D Secure (`GET 3DSecure/checkCard`).
            check_card_3d_secure => CheckCard3dSecure,
            /// Completes a sale after 3-D Secure authentication (`POST 3DSecure/authSale`).
            sale_by_3d_secure_authorization => SaleBy3dSecureAuthorization,
            /// Fetches details of a sale (`GET sales/info`).
            get_sale_info => GetSaleInfo,
            /// Fetches details of an authorization (`GET authorizations/info`).
            get_authorization_info => GetAuthorizationInfo,
            /// Fetches the status of a sale (`GET sales/status`).
            check_sale_status => CheckSaleStatus,
            /// Validates card details (`GET cards/check`).
            check_card => CheckCard,
            /// Validates a tokenized card (`GET cards/checkByToken`).
            check_card_by_token => CheckCardByToken,
        }
    };
}

/// Expands an operation list into client methods that delegate to `call`.
#[cfg_attr(not(feature = "blocking"), allow(unused_macro_rules))]
macro_rules! operation_methods {
    (nonblocking; $( $(#[$meta:meta])* $name:ident => $variant:ident, )*) => {
        $(
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// Returns [`ClientError`](crate::ClientError) on transport failure,
            /// a non-200 status, or a body that is not a JSON object.
            pub async fn $name<P>(
                &mut self,
                params: &P,
            ) -> Result<::paylane::ApiResponse, $crate::ClientError>
            where
                P: ::serde::Serialize + ?Sized,
            {
                self.call(::paylane::Operation::$variant, params).await
            }
        )*
    };
    (blocking; $( $(#[$meta:meta])* $name:ident => $variant:ident, )*) => {
        $(
            $(#[$meta])*
            ///
            /// # Errors
            ///
            /// Returns [`ClientError`](crate::ClientError) on transport failure,
            /// a non-200 status, or a body that is not a JSON object.
            pub fn $name<P>(
                &mut self,
                params: &P,
            ) -> Result<::paylane::ApiResponse, $crate::ClientError>
            where
                P: ::serde::Serialize + ?Sized,
            {
                self.call(::paylane::Operation::$variant, params)
            }
        )*
    };
}
