use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

use crate::msg::{ConfigResponse, ExecuteMsg, MarketItemResponse, QueryMsg};
use crate::state::{Bid, Collection, CreatorProfile};

/// MarketplaceContract is a wrapper around Addr that provides typed helpers
/// for calling and querying the marketplace, so callers never spell out raw
/// message JSON. Token metadata referenced by the returned `token_uri` is
/// dereferenced by the consumer, not here.
#[cw_serde]
pub struct MarketplaceContract(pub Addr);

impl MarketplaceContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    /// Builds an execute message against the marketplace. `funds` carry the
    /// listing fee, purchase price, or bid amount where the entry point
    /// expects payment; pass an empty vec otherwise.
    pub fn call(&self, msg: ExecuteMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg)?,
            funds,
        }
        .into())
    }

    pub fn config(&self, querier: &QuerierWrapper) -> StdResult<ConfigResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Config {})
    }

    pub fn listing_fee(&self, querier: &QuerierWrapper) -> StdResult<Uint128> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::ListingFee {})
    }

    pub fn collected_listing_fee(&self, querier: &QuerierWrapper) -> StdResult<Uint128> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::CollectedListingFee {})
    }

    pub fn collection(&self, querier: &QuerierWrapper, collection_id: u64) -> StdResult<Collection> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Collection { collection_id })
    }

    pub fn collections(
        &self,
        querier: &QuerierWrapper,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> StdResult<Vec<Collection>> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Collections { from_index, limit })
    }

    pub fn market_item(
        &self,
        querier: &QuerierWrapper,
        item_id: u64,
    ) -> StdResult<MarketItemResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::MarketItem { item_id })
    }

    pub fn market_items(
        &self,
        querier: &QuerierWrapper,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> StdResult<Vec<MarketItemResponse>> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::MarketItems { from_index, limit })
    }

    pub fn bid(&self, querier: &QuerierWrapper, bid_id: u64) -> StdResult<Bid> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Bid { bid_id })
    }

    pub fn item_bids(
        &self,
        querier: &QuerierWrapper,
        item_id: u64,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> StdResult<Vec<Bid>> {
        querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::ItemBids {
                item_id,
                from_index,
                limit,
            },
        )
    }

    pub fn creator(
        &self,
        querier: &QuerierWrapper,
        address: impl Into<String>,
    ) -> StdResult<CreatorProfile> {
        querier.query_wasm_smart(
            self.addr(),
            &QueryMsg::Creator {
                address: address.into(),
            },
        )
    }
}
