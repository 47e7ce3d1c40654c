//! The narrative-report collaborator: assembles a financial snapshot,
//! ships it to a generative-text endpoint, and hands back prose. Any
//! failure along the way collapses into one fixed fallback string;
//! callers never see an error and no state is touched.

use std::{env, time::Duration};

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::SummaryConfig;
use crate::errors::{Result, VaultError};
use crate::vault::Vault;

/// Served verbatim whenever the report cannot be produced.
pub const FALLBACK_REPORT: &str = "The analysis is unavailable right now, captain!";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// One match day as the collaborator sees it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchLine {
    pub date: NaiveDate,
    pub cost: f64,
    pub paid: f64,
    pub balance: f64,
}

/// The aggregate payload sent out. No schema versioning.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VaultSnapshot {
    pub matches: Vec<MatchLine>,
    pub league_expense_count: usize,
    pub league_expense_total: f64,
    pub league_income_count: usize,
    pub league_income_total: f64,
    pub player_count: usize,
}

impl VaultSnapshot {
    pub fn collect(vault: &Vault) -> Self {
        let matches = vault
            .matches
            .iter()
            .map(|day| {
                let cost = day.total_cost();
                let paid = day.collected();
                MatchLine {
                    date: day.date,
                    cost,
                    paid,
                    balance: paid - cost,
                }
            })
            .collect();
        Self {
            matches,
            league_expense_count: vault.expenses.len(),
            league_expense_total: vault.expenses.iter().map(|e| e.price).sum(),
            league_income_count: vault.incomes.len(),
            league_income_total: vault.incomes.iter().map(|i| i.amount).sum(),
            player_count: vault.players.len(),
        }
    }
}

/// Fixed-voice prompt: the league president wants a friendly rundown.
pub fn build_prompt(snapshot: &VaultSnapshot, currency_symbol: &str) -> String {
    let match_lines =
        serde_json::to_string(&snapshot.matches).unwrap_or_else(|_| "[]".to_string());
    let mut prompt = String::new();
    prompt.push_str("Below are the detailed finances of our amateur football league:\n\n");
    prompt.push_str(&format!(
        "Per-match collections and costs: {}\n",
        match_lines
    ));
    prompt.push_str(&format!(
        "League-wide expenses (equipment etc.): {} items, total {}{}\n",
        snapshot.league_expense_count, snapshot.league_expense_total, currency_symbol
    ));
    prompt.push_str(&format!(
        "League extra incomes (sponsors, donations etc.): {} items, total {}{}\n",
        snapshot.league_income_count, snapshot.league_income_total, currency_symbol
    ));
    prompt.push_str(&format!("Player count: {}\n\n", snapshot.player_count));
    prompt.push_str(
        "Write a friendly summary of these numbers in the voice of the league \
president. In particular, comment on how the outside incomes relieve the \
vault, or what course to take if the balance is negative.\n",
    );
    prompt
}

/// Blocking client for an OpenAI-compatible `chat/completions` endpoint.
pub struct SummaryClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl SummaryClient {
    pub fn from_config(config: &SummaryConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: env::var(&config.api_key_env).ok(),
        }
    }

    /// Produces the report text. Never fails: every error path resolves
    /// to [`FALLBACK_REPORT`] after an internal warn log.
    pub fn narrate(&self, vault: &Vault, currency_symbol: &str) -> String {
        let snapshot = VaultSnapshot::collect(vault);
        let prompt = build_prompt(&snapshot, currency_symbol);
        match self.request_narrative(&prompt) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "summary request failed, serving fallback report");
                FALLBACK_REPORT.to_string()
            }
        }
    }

    fn request_narrative(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| VaultError::Summary("no API key configured".into()))?;
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": 0.7,
            "max_tokens": 500
        });
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| VaultError::Summary(err.to_string()))?;
        let response = client
            .post(url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|err| VaultError::Summary(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .unwrap_or_else(|_| "unreadable response body".to_string());
            return Err(VaultError::Summary(format!(
                "endpoint returned {}: {}",
                status, detail
            )));
        }

        let value: serde_json::Value = response
            .json()
            .map_err(|err| VaultError::Summary(err.to_string()))?;
        value
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(|text| text.trim().to_string())
            .ok_or_else(|| VaultError::Summary("unexpected response shape".into()))
    }
}
