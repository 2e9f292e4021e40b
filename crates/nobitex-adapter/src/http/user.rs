/*
[INPUT]:  API token, currencies, bank details and wallet types
[OUTPUT]: Raw JSON user data (profile, limitations, wallets, addresses)
[POS]:    HTTP layer - user endpoints (require API token)
[UPDATE]: When adding new user endpoints or changing request bodies
*/

// ### User Endpoints

use reqwest::Method;
use serde_json::{Value, json};

use crate::http::{NobitexClient, NobitexError, Result};
use crate::types::{Currency, Endpoint, TradeType, join_currencies};

impl NobitexClient {
    /// Profile of the token owner
    ///
    /// GET /users/profile
    pub async fn get_user_profile(&self) -> Result<Value> {
        let builder = self.request(Method::GET, Endpoint::UserProfile)?;
        self.send_json(builder).await
    }

    /// Generate a deposit address for a currency
    ///
    /// POST /users/wallets/generate-address
    pub async fn generate_wallet_address(&self, currency: Currency) -> Result<Value> {
        let body = json!({ "currency": currency });
        let builder = self
            .request(Method::POST, Endpoint::GenerateWalletAddress)?
            .json(&body);
        self.send_json(builder).await
    }

    /// Register a bank card
    ///
    /// POST /users/cards-add
    pub async fn add_card(&self, number: &str, bank: &str) -> Result<Value> {
        require("card number", number)?;
        require("bank", bank)?;

        let body = json!({ "number": number, "bank": bank });
        let builder = self
            .request(Method::POST, Endpoint::AddCard)?
            .json(&body);
        self.send_json(builder).await
    }

    /// Register a bank account
    ///
    /// POST /users/accounts-add
    pub async fn add_account(&self, number: &str, shaba: &str, bank: &str) -> Result<Value> {
        require("account number", number)?;
        require("shaba", shaba)?;
        require("bank", bank)?;

        let body = json!({ "number": number, "shaba": shaba, "bank": bank });
        let builder = self
            .request(Method::POST, Endpoint::AddAccount)?
            .json(&body);
        self.send_json(builder).await
    }

    /// Account level limitations
    ///
    /// POST /users/limitations
    pub async fn get_user_limitations(&self) -> Result<Value> {
        let builder = self.request(Method::POST, Endpoint::UserLimitations)?;
        self.send_json(builder).await
    }

    /// Full wallet list of one wallet type
    ///
    /// POST /users/wallets/list
    pub async fn get_wallet_list(&self, wallet_type: TradeType) -> Result<Value> {
        let body = json!({ "type": wallet_type });
        let builder = self
            .request(Method::POST, Endpoint::WalletList)?
            .json(&body);
        self.send_json(builder).await
    }

    /// Balances for selected currencies; an empty slice returns every wallet
    ///
    /// GET /v2/wallets?currencies={a,b}&type={type}
    pub async fn get_wallets(
        &self,
        currencies: &[Currency],
        wallet_type: TradeType,
    ) -> Result<Value> {
        let mut params = Vec::with_capacity(2);
        if !currencies.is_empty() {
            params.push(("currencies", join_currencies(currencies)));
        }
        params.push(("type", wallet_type.as_str().to_string()));

        let builder = self
            .request(Method::GET, Endpoint::Wallets)?
            .query(&params);
        self.send_json(builder).await
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NobitexError::invalid_argument(format!("{name} must not be empty")));
    }
    Ok(())
}
