pub mod client;
pub mod generator;
pub mod keys;

pub use client::{
    AccountService, AccountServiceError, CreateAccountRequest, CreatedAccount,
    NetworkAccountClient,
};
pub use generator::{GenerationSummary, generate_accounts};
pub use keys::{AccountKeyKind, GeneratedKey};
