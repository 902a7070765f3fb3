//! Error Catalog
//!
//! Every named application error, with the status code it is reported with.
//! Business layers return these values; the HTTP layer renders them as-is.

use axum::http::StatusCode;

use super::AppError;
use crate::domain::errors::DomainError;

const fn bad_request(err: DomainError) -> AppError {
    AppError::new(StatusCode::BAD_REQUEST, err)
}

pub const UNAUTHORIZED: AppError = AppError::new(StatusCode::UNAUTHORIZED, DomainError::Unauthorized);
pub const INVALID_CREDENTIAL: AppError = bad_request(DomainError::InvalidCredential);
pub const EMAIL_ALREADY_REGISTERED: AppError = bad_request(DomainError::EmailAlreadyRegistered);
pub const PHONE_ALREADY_REGISTERED: AppError = bad_request(DomainError::PhoneAlreadyRegistered);
pub const USER_NOT_FOUND: AppError = bad_request(DomainError::UserNotFound);
pub const USER_NOT_VERIFIED: AppError = bad_request(DomainError::UserNotVerified);
pub const USER_ALREADY_VERIFIED: AppError = bad_request(DomainError::UserAlreadyVerified);
pub const INVALID_VERIFICATION_TOKEN: AppError = bad_request(DomainError::InvalidVerificationToken);
pub const INVALID_RESET_TOKEN: AppError = bad_request(DomainError::InvalidResetToken);
pub const TOKEN_EXPIRED: AppError = bad_request(DomainError::TokenExpired);
pub const INVALID_PASSWORD: AppError = bad_request(DomainError::InvalidPassword);
pub const SAME_PASSWORD: AppError = bad_request(DomainError::SamePassword);
pub const INVALID_ROLE: AppError = bad_request(DomainError::InvalidRole);

pub const ADDRESS_NOT_FOUND: AppError = bad_request(DomainError::AddressNotFound);
pub const PRIMARY_ADDRESS_DELETION: AppError = bad_request(DomainError::PrimaryAddressDeletion);
pub const OUT_OF_DELIVERY_RANGE: AppError = bad_request(DomainError::OutOfDeliveryRange);

pub const DOCTOR_NOT_FOUND: AppError = bad_request(DomainError::DoctorNotFound);
pub const DOCTOR_NOT_AVAILABLE: AppError = bad_request(DomainError::DoctorNotAvailable);
pub const SPECIALIZATION_NOT_FOUND: AppError = bad_request(DomainError::SpecializationNotFound);
pub const CONSULTATION_NOT_FOUND: AppError = bad_request(DomainError::ConsultationNotFound);
pub const CONSULTATION_ALREADY_ENDED: AppError = bad_request(DomainError::ConsultationAlreadyEnded);

pub const PHARMACY_NOT_FOUND: AppError = bad_request(DomainError::PharmacyNotFound);
pub const PHARMACY_ALREADY_EXISTS: AppError = bad_request(DomainError::PharmacyAlreadyExists);
pub const PHARMACIST_NOT_FOUND: AppError = bad_request(DomainError::PharmacistNotFound);
pub const PHARMACIST_ALREADY_ASSIGNED: AppError = bad_request(DomainError::PharmacistAlreadyAssigned);

pub const PRODUCT_NOT_FOUND: AppError = bad_request(DomainError::ProductNotFound);
pub const PRODUCT_ALREADY_EXISTS: AppError = bad_request(DomainError::ProductAlreadyExists);
pub const PRODUCT_CATEGORY_NOT_FOUND: AppError = bad_request(DomainError::ProductCategoryNotFound);
pub const PRODUCT_CATEGORY_IN_USE: AppError = bad_request(DomainError::ProductCategoryInUse);
pub const PRESCRIPTION_REQUIRED: AppError = bad_request(DomainError::PrescriptionRequired);
pub const INSUFFICIENT_STOCK: AppError = bad_request(DomainError::InsufficientStock);
pub const INVALID_STOCK_QUANTITY: AppError = bad_request(DomainError::InvalidStockQuantity);
pub const STOCK_MUTATION_NOT_FOUND: AppError = bad_request(DomainError::StockMutationNotFound);
pub const INVALID_STOCK_MUTATION_STATUS: AppError = bad_request(DomainError::InvalidStockMutationStatus);

pub const CART_ITEM_NOT_FOUND: AppError = bad_request(DomainError::CartItemNotFound);
pub const CART_EMPTY: AppError = bad_request(DomainError::CartEmpty);
pub const ORDER_NOT_FOUND: AppError = bad_request(DomainError::OrderNotFound);
pub const INVALID_ORDER_STATUS: AppError = bad_request(DomainError::InvalidOrderStatus);
pub const ORDER_ALREADY_PAID: AppError = bad_request(DomainError::OrderAlreadyPaid);
pub const PAYMENT_PROOF_REQUIRED: AppError = bad_request(DomainError::PaymentProofRequired);
pub const INVALID_PAYMENT_METHOD: AppError = bad_request(DomainError::InvalidPaymentMethod);
pub const SHIPPING_METHOD_NOT_FOUND: AppError = bad_request(DomainError::ShippingMethodNotFound);

pub const INVALID_FILE_TYPE: AppError = bad_request(DomainError::InvalidFileType);
pub const FILE_TOO_LARGE: AppError = bad_request(DomainError::FileTooLarge);

/// Unmatched route
pub const ROUTE_NOT_FOUND: AppError = AppError::new(StatusCode::NOT_FOUND, DomainError::RouteNotFound);

/// Client input and business rule errors
pub const CLIENT_ERRORS: &[AppError] = &[
    UNAUTHORIZED,
    INVALID_CREDENTIAL,
    EMAIL_ALREADY_REGISTERED,
    PHONE_ALREADY_REGISTERED,
    USER_NOT_FOUND,
    USER_NOT_VERIFIED,
    USER_ALREADY_VERIFIED,
    INVALID_VERIFICATION_TOKEN,
    INVALID_RESET_TOKEN,
    TOKEN_EXPIRED,
    INVALID_PASSWORD,
    SAME_PASSWORD,
    INVALID_ROLE,
    ADDRESS_NOT_FOUND,
    PRIMARY_ADDRESS_DELETION,
    OUT_OF_DELIVERY_RANGE,
    DOCTOR_NOT_FOUND,
    DOCTOR_NOT_AVAILABLE,
    SPECIALIZATION_NOT_FOUND,
    CONSULTATION_NOT_FOUND,
    CONSULTATION_ALREADY_ENDED,
    PHARMACY_NOT_FOUND,
    PHARMACY_ALREADY_EXISTS,
    PHARMACIST_NOT_FOUND,
    PHARMACIST_ALREADY_ASSIGNED,
    PRODUCT_NOT_FOUND,
    PRODUCT_ALREADY_EXISTS,
    PRODUCT_CATEGORY_NOT_FOUND,
    PRODUCT_CATEGORY_IN_USE,
    PRESCRIPTION_REQUIRED,
    INSUFFICIENT_STOCK,
    INVALID_STOCK_QUANTITY,
    STOCK_MUTATION_NOT_FOUND,
    INVALID_STOCK_MUTATION_STATUS,
    CART_ITEM_NOT_FOUND,
    CART_EMPTY,
    ORDER_NOT_FOUND,
    INVALID_ORDER_STATUS,
    ORDER_ALREADY_PAID,
    PAYMENT_PROOF_REQUIRED,
    INVALID_PAYMENT_METHOD,
    SHIPPING_METHOD_NOT_FOUND,
    INVALID_FILE_TYPE,
    FILE_TOO_LARGE,
];

/// Routing errors
pub const ROUTING_ERRORS: &[AppError] = &[ROUTE_NOT_FOUND];

/// Every catalog entry, client errors first
pub fn all() -> impl Iterator<Item = &'static AppError> {
    CLIENT_ERRORS.iter().chain(ROUTING_ERRORS)
}
