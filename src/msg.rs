use crate::state::{Bid, Collection, CreatorProfile, MarketItem};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Code id of the cw721-base contract the marketplace instantiates
    /// for its items, with itself as minter.
    pub cw721_code_id: u64,
    pub token_name: String,
    pub token_symbol: String,
    pub listing_fee: Uint128,
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateCollection {
        image: String,
        name: String,
        description: String,
    },
    MintToken {
        token_uri: String,
        name: String,
        description: String,
        collection_id: u64,
    },
    /// Lists an owned, unlisted item. Funds must equal the listing fee exactly.
    CreateSale {
        item_id: u64,
        price: Uint128,
    },
    CancelSale {
        item_id: u64,
    },
    /// Funds must equal the listed price exactly.
    BuyMarketItem {
        item_id: u64,
    },
    /// Funds are the bid amount, escrowed until the bid settles.
    BidMarketItem {
        item_id: u64,
    },
    AcceptBid {
        item_id: u64,
        bid_id: u64,
    },
    RejectBid {
        item_id: u64,
        bid_id: u64,
    },
    TransferListingFee {},
    ChangeCreatorName {
        name: String,
    },
    ChangeCreatorImage {
        image: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(Uint128)]
    ListingFee {},
    #[returns(Uint128)]
    CollectedListingFee {},
    #[returns(Uint128)]
    Balance {},
    #[returns(Collection)]
    Collection { collection_id: u64 },
    #[returns(Vec<Collection>)]
    Collections {
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(u64)]
    CollectionCount {},
    #[returns(MarketItemResponse)]
    MarketItem { item_id: u64 },
    #[returns(Vec<MarketItemResponse>)]
    MarketItems {
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(u64)]
    MarketItemCount {},
    #[returns(Bid)]
    Bid { bid_id: u64 },
    #[returns(Vec<Bid>)]
    ItemBids {
        item_id: u64,
        from_index: Option<u64>,
        limit: Option<u64>,
    },
    #[returns(u64)]
    BidCount {},
    #[returns(CreatorProfile)]
    Creator { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub nft_address: Addr,
    pub listing_fee: Uint128,
    pub denom: String,
}

/// Market item joined with the token URI held by the token contract.
/// Dereferencing the URI into image metadata is a client concern.
#[cw_serde]
pub struct MarketItemResponse {
    pub item: MarketItem,
    pub token_uri: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
