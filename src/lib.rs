// cardform - payment form validation with a simulated checkout gateway
//
// Facade crate: re-exports the validation engine and the gateway so most
// callers only depend on `cardform`.

// Re-export the validation engine
pub use cardform_validation::*;

// Re-export the gateway surface
pub use cardform_gateway as gateway;
pub use cardform_gateway::{
    Charge, ChargeRequest, ChargeStatus, Checkout, PaymentError, PaymentProcessor,
    PaymentProvider, PaymentResult, SimulatedProvider,
};

// Prelude for common imports
pub mod prelude {
    pub use cardform_gateway::{
        Charge, ChargeRequest, ChargeStatus, Checkout, PaymentError, PaymentProcessor,
        PaymentProvider, PaymentResult, SimulatedProvider,
    };
    pub use cardform_validation::{
        Amount, CardNetwork, CardNumber, CardholderName, CheckoutForm, Cvv, Expiry, FieldKey,
        FormRules, ValidationError, ValidationErrors, format, luhn,
    };
}
