//! Prompt text for market discovery, deep dives and the Research Lab.

/// Persona and standing rules shared by every generation request.
pub const SYSTEM_INSTRUCTION: &str = r#"I. ROLE & PERSONA
You are the Lead Market Research Scientist for a dental service organization focused on dentures and implants. Your mission is to deliver "Data-Hardened" competitive intelligence across Designated Market Areas (DMAs). You speak with scientific rigor and precision, and you compare competitors on an apples-to-apples financial basis.

II. DATA HIERARCHY
Level 1 (Absolute Truth): user-provided locked data.
Level 2 (Internal Knowledge): internal documents and knowledge base.
Level 3 (Market Discovery): real-time web search.
When sources disagree, the higher level wins.

III. PRICING & TIERING STANDARDS
Tier 0: Economy (denture only).
Tier 1: Economy Plus dentures (low range and high range).
Tier 2: Premium.
Tier 3: Ultimate Fit.

IV. OUTPUT PROTOCOLS
Produce strict structured data for competitive matrices and appendices.
If a price is implausibly below the market floor, report it as unknown."#;

/// Instruction for the market-matrix discovery request.
#[must_use]
pub fn market_matrix_prompt(region: &str) -> String {
    format!(
        r#"Conduct a market analysis for the "{region}" DMA (Designated Market Area).
1. Use web search to identify the top 10-15 Dental Service Organizations (DSOs) and key implant competitors operating in this specific region.
2. For each competitor, ESTIMATE key operational metrics if exact public data is unavailable. Use the typical size of these chains in comparable markets as a baseline for the estimate.
3. Search for pricing (dentures, implants) for these brands. If specific local pricing is missing, use national averages for that brand, or -1 if no figure is available.

Return a STRICT JSON ARRAY of objects. Do not include any prose outside the JSON.

Schema:
- "dsoName" (string)
- "geographicFocus" (string: "National", "Regional", or "Local")
- "clinicCount" (integer: estimated number of clinics in this DMA)
- "dentistCount" (integer: estimated total dentists in this DMA)
- "surgeonCount" (integer: estimated oral surgeons/implantologists)
- "priceDenture" (number: price for an economy denture, or -1 if unknown)
- "priceTier1Low" (number: Tier 1 economy plus low-range price, or -1 if unknown)
- "priceTier1High" (number: Tier 1 economy plus high-range price, or -1 if unknown)"#
    )
}

/// Instruction for a single competitor deep dive.
#[must_use]
pub fn competitor_detail_prompt(region: &str, organization_name: &str) -> String {
    format!(
        r#"Deep dive on "{organization_name}" in {region}.
Return a STRICT JSON OBJECT with keys:
- "dsoName" (string)
- "dentistNames" (array of strings: real names found in public records)
- "surgeonNames" (array of strings)
- "evidenceSource" (string: url or citation)"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_prompt_embeds_region_and_schema() {
        let prompt = market_matrix_prompt("Austin");
        assert!(prompt.contains(r#""Austin" DMA"#));
        assert!(prompt.contains("10-15"));
        assert!(prompt.contains("STRICT JSON ARRAY"));
        for field in [
            "dsoName",
            "geographicFocus",
            "clinicCount",
            "dentistCount",
            "surgeonCount",
            "priceDenture",
            "priceTier1Low",
            "priceTier1High",
        ] {
            assert!(prompt.contains(&format!("\"{field}\"")), "missing {field}");
        }
        assert!(prompt.contains("-1 if unknown"));
    }

    #[test]
    fn detail_prompt_names_competitor() {
        let prompt = competitor_detail_prompt("Phoenix", "Aspen Dental");
        assert!(prompt.contains(r#""Aspen Dental" in Phoenix"#));
        assert!(prompt.contains("evidenceSource"));
    }

    #[test]
    fn persona_carries_trust_hierarchy() {
        assert!(SYSTEM_INSTRUCTION.contains("Level 1 (Absolute Truth)"));
        assert!(SYSTEM_INSTRUCTION.contains("Level 3 (Market Discovery)"));
    }
}
