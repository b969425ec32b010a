//! AI discovery: prompt, generate, extract, parse, normalize.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::config::NegativePricePolicy;
use super::extract::extract_payload;
use super::normalize::normalize_records;
use super::prompt::{competitor_detail_prompt, market_matrix_prompt, SYSTEM_INSTRUCTION};
use crate::application::client::LlmHandle;
use crate::domain::{CompetitorDetail, CompetitorRecord};
use crate::error::{Error, Result};
use crate::port::outbound::llm::{GenerationRequest, Llm};

/// Evidence text used when the model names no source.
const DEFAULT_EVIDENCE: &str = "AI Generated Estimation";

/// Discovers competitors for regions without locked data.
///
/// Every public operation fails soft: transport, provider and parse errors
/// are logged here and surface as an empty result.
#[derive(Debug, Clone)]
pub struct MarketDiscovery {
    llm: LlmHandle,
    policy: NegativePricePolicy,
    web_search: bool,
}

impl MarketDiscovery {
    #[must_use]
    pub fn new(llm: LlmHandle, policy: NegativePricePolicy) -> Self {
        Self {
            llm,
            policy,
            web_search: true,
        }
    }

    /// Enable or disable web-search grounding on discovery requests.
    #[must_use]
    pub fn with_web_search(mut self, enabled: bool) -> Self {
        self.web_search = enabled;
        self
    }

    #[must_use]
    pub fn client(&self) -> &LlmHandle {
        &self.llm
    }

    /// Swap in a client built from new credentials.
    pub fn rebind(&self, llm: Arc<dyn Llm>) {
        self.llm.rebind(llm);
    }

    /// Estimate the competitor set for a region.
    ///
    /// Returns an empty list when the request or parsing fails.
    pub async fn discover_market(&self, region: &str) -> Vec<CompetitorRecord> {
        match self.try_discover_market(region).await {
            Ok(records) => {
                info!(region, count = records.len(), "Market discovery complete");
                records
            }
            Err(e) => {
                error!(region, error = %e, "Market discovery failed");
                Vec::new()
            }
        }
    }

    /// Look up named personnel and evidence for one competitor.
    ///
    /// Returns [`CompetitorDetail::unavailable`] when the lookup fails.
    pub async fn fetch_detail(&self, region: &str, organization_name: &str) -> CompetitorDetail {
        match self.try_fetch_detail(region, organization_name).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(region, organization = organization_name, error = %e, "Competitor detail lookup failed");
                CompetitorDetail::unavailable(organization_name)
            }
        }
    }

    async fn try_discover_market(&self, region: &str) -> Result<Vec<CompetitorRecord>> {
        let request = self.request(market_matrix_prompt(region));
        let text = self.generate(&request).await?;
        parse_market_response(&text, self.policy)
    }

    async fn try_fetch_detail(&self, region: &str, organization_name: &str) -> Result<CompetitorDetail> {
        let request = self.request(competitor_detail_prompt(region, organization_name));
        let text = self.generate(&request).await?;
        parse_detail_response(&text, organization_name)
    }

    fn request(&self, prompt: String) -> GenerationRequest {
        GenerationRequest::prompt(prompt)
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_web_search(self.web_search)
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let llm = self.llm.current()?;
        let text = llm.generate(request).await?;
        debug!(
            provider = llm.name(),
            model = llm.model(),
            chars = text.len(),
            "Generation complete"
        );
        Ok(text)
    }
}

/// Turn a raw market-matrix response into records.
///
/// # Errors
///
/// Returns [`Error::Parse`] for an empty response and [`Error::Json`] when
/// the extracted payload is not valid JSON.
pub fn parse_market_response(
    text: &str,
    policy: NegativePricePolicy,
) -> Result<Vec<CompetitorRecord>> {
    let payload = parse_payload(text)?;
    Ok(normalize_records(&payload, policy))
}

/// Turn a raw deep-dive response into a detail record.
///
/// Missing lists become empty, a missing name falls back to the requested
/// one, and a missing citation is labelled as an estimate.
///
/// # Errors
///
/// Returns an error for an empty response or a payload that is not a JSON
/// object of the expected shape.
pub fn parse_detail_response(text: &str, organization_name: &str) -> Result<CompetitorDetail> {
    let payload = parse_payload(text)?;
    let raw: RawDetail = serde_json::from_value(payload)?;

    Ok(CompetitorDetail {
        organization_name: raw
            .dso_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| organization_name.to_string()),
        dentist_names: clean_names(raw.dentist_names),
        surgeon_names: clean_names(raw.surgeon_names),
        evidence_source: raw
            .evidence_source
            .filter(|source| !source.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVIDENCE.to_string()),
    })
}

fn parse_payload(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Err(Error::Parse("model returned no text".into()));
    }
    Ok(serde_json::from_str(extract_payload(text))?)
}

fn clean_names(names: Option<Vec<String>>) -> Vec<String> {
    names
        .unwrap_or_default()
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetail {
    #[serde(default)]
    dso_name: Option<String>,
    #[serde(default)]
    dentist_names: Option<Vec<String>>,
    #[serde(default)]
    surgeon_names: Option<Vec<String>>,
    #[serde(default)]
    evidence_source: Option<String>,
}
