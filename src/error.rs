use cosmwasm_std::{StdError, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Name can not be empty")]
    EmptyName {},

    #[error("Listing fee must be greater than zero")]
    ZeroListingFee {},

    #[error("No collection of yours")]
    CollectionNotOwned {},

    #[error("No such token")]
    NoSuchToken {},

    #[error("Token is not owned by you")]
    TokenNotOwned {},

    #[error("Payment must be equal to the listing fee of {fee}")]
    ListingFeeMismatch { fee: Uint128 },

    #[error("Item is already for sale")]
    AlreadyForSale {},

    #[error("Item has already been sold")]
    AlreadySold {},

    #[error("Item is not for sale")]
    ItemNotForSale {},

    #[error("Amount must be equal to the item listing price of {price}")]
    PriceMismatch { price: Uint128 },

    #[error("You can not buy your own item")]
    OwnItemPurchase {},

    #[error("Bid must be at least one {denom}")]
    BidTooLow { denom: String },

    #[error("You can not bid on your own item")]
    OwnItemBid {},

    #[error("No such bid")]
    NoSuchBid {},

    #[error("Bid has already been settled")]
    BidSettled {},

    #[error("No listing fee has been collected")]
    NoCollectedFee {},

    #[error("The reply ID is unrecognized")]
    UnrecognizedReply {},

    #[error("Semver parsing error: {0}")]
    SemVer(String),

    #[error("Can not migrate from {stored} to {requested}")]
    CannotMigrate { stored: String, requested: String },
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
