//! Domain Error Kinds
//!
//! The underlying errors wrapped by the application error catalog. Each
//! variant carries only its human-readable message, so values are `Copy` and
//! can be compared directly to tell error kinds apart.

use thiserror::Error;

/// Business-rule and protocol failures known to the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DomainError {
    // Authentication
    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid email or password")]
    InvalidCredential,

    #[error("email is already registered")]
    EmailAlreadyRegistered,

    #[error("phone number is already registered")]
    PhoneAlreadyRegistered,

    #[error("user not found")]
    UserNotFound,

    #[error("user is not verified")]
    UserNotVerified,

    #[error("user is already verified")]
    UserAlreadyVerified,

    #[error("invalid verification token")]
    InvalidVerificationToken,

    #[error("invalid reset password token")]
    InvalidResetToken,

    #[error("token has expired")]
    TokenExpired,

    #[error("password does not meet the requirements")]
    InvalidPassword,

    #[error("new password must differ from the current password")]
    SamePassword,

    #[error("invalid role")]
    InvalidRole,

    // Addresses
    #[error("address not found")]
    AddressNotFound,

    #[error("primary address cannot be deleted")]
    PrimaryAddressDeletion,

    #[error("address is outside the delivery range")]
    OutOfDeliveryRange,

    // Doctors and consultations
    #[error("doctor not found")]
    DoctorNotFound,

    #[error("doctor is not available")]
    DoctorNotAvailable,

    #[error("specialization not found")]
    SpecializationNotFound,

    #[error("consultation not found")]
    ConsultationNotFound,

    #[error("consultation has already ended")]
    ConsultationAlreadyEnded,

    // Pharmacies
    #[error("pharmacy not found")]
    PharmacyNotFound,

    #[error("pharmacy already exists")]
    PharmacyAlreadyExists,

    #[error("pharmacist not found")]
    PharmacistNotFound,

    #[error("pharmacist is already assigned to a pharmacy")]
    PharmacistAlreadyAssigned,

    // Products and stock
    #[error("product not found")]
    ProductNotFound,

    #[error("product already exists")]
    ProductAlreadyExists,

    #[error("product category not found")]
    ProductCategoryNotFound,

    #[error("product category is still in use")]
    ProductCategoryInUse,

    #[error("product requires a prescription")]
    PrescriptionRequired,

    #[error("insufficient stock")]
    InsufficientStock,

    #[error("stock quantity must be greater than zero")]
    InvalidStockQuantity,

    #[error("stock mutation not found")]
    StockMutationNotFound,

    #[error("invalid stock mutation status")]
    InvalidStockMutationStatus,

    // Cart and orders
    #[error("cart item not found")]
    CartItemNotFound,

    #[error("cart is empty")]
    CartEmpty,

    #[error("order not found")]
    OrderNotFound,

    #[error("invalid order status transition")]
    InvalidOrderStatus,

    #[error("order has already been paid")]
    OrderAlreadyPaid,

    #[error("payment proof is required")]
    PaymentProofRequired,

    #[error("invalid payment method")]
    InvalidPaymentMethod,

    #[error("shipping method not found")]
    ShippingMethodNotFound,

    // Uploads
    #[error("invalid file type")]
    InvalidFileType,

    #[error("file is too large")]
    FileTooLarge,

    // Routing
    #[error("route not found")]
    RouteNotFound,
}

impl DomainError {
    /// Stable machine-readable code for this error kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserNotVerified => "USER_NOT_VERIFIED",
            Self::UserAlreadyVerified => "USER_ALREADY_VERIFIED",
            Self::InvalidVerificationToken => "INVALID_VERIFICATION_TOKEN",
            Self::InvalidResetToken => "INVALID_RESET_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::SamePassword => "SAME_PASSWORD",
            Self::InvalidRole => "INVALID_ROLE",
            Self::AddressNotFound => "ADDRESS_NOT_FOUND",
            Self::PrimaryAddressDeletion => "PRIMARY_ADDRESS_DELETION",
            Self::OutOfDeliveryRange => "OUT_OF_DELIVERY_RANGE",
            Self::DoctorNotFound => "DOCTOR_NOT_FOUND",
            Self::DoctorNotAvailable => "DOCTOR_NOT_AVAILABLE",
            Self::SpecializationNotFound => "SPECIALIZATION_NOT_FOUND",
            Self::ConsultationNotFound => "CONSULTATION_NOT_FOUND",
            Self::ConsultationAlreadyEnded => "CONSULTATION_ALREADY_ENDED",
            Self::PharmacyNotFound => "PHARMACY_NOT_FOUND",
            Self::PharmacyAlreadyExists => "PHARMACY_ALREADY_EXISTS",
            Self::PharmacistNotFound => "PHARMACIST_NOT_FOUND",
            Self::PharmacistAlreadyAssigned => "PHARMACIST_ALREADY_ASSIGNED",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::ProductAlreadyExists => "PRODUCT_ALREADY_EXISTS",
            Self::ProductCategoryNotFound => "PRODUCT_CATEGORY_NOT_FOUND",
            Self::ProductCategoryInUse => "PRODUCT_CATEGORY_IN_USE",
            Self::PrescriptionRequired => "PRESCRIPTION_REQUIRED",
            Self::InsufficientStock => "INSUFFICIENT_STOCK",
            Self::InvalidStockQuantity => "INVALID_STOCK_QUANTITY",
            Self::StockMutationNotFound => "STOCK_MUTATION_NOT_FOUND",
            Self::InvalidStockMutationStatus => "INVALID_STOCK_MUTATION_STATUS",
            Self::CartItemNotFound => "CART_ITEM_NOT_FOUND",
            Self::CartEmpty => "CART_EMPTY",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::InvalidOrderStatus => "INVALID_ORDER_STATUS",
            Self::OrderAlreadyPaid => "ORDER_ALREADY_PAID",
            Self::PaymentProofRequired => "PAYMENT_PROOF_REQUIRED",
            Self::InvalidPaymentMethod => "INVALID_PAYMENT_METHOD",
            Self::ShippingMethodNotFound => "SHIPPING_METHOD_NOT_FOUND",
            Self::InvalidFileType => "INVALID_FILE_TYPE",
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
        }
    }
}
