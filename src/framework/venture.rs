//! Venture-build quality framework.
//!
//! Used when evaluating whether to build a product in-house rather than
//! invest in an external company, so the emphasis sits on strategic fit and
//! internal capability instead of founder quality. Weights are fixed and
//! sum to 100.

use super::{Category, Criterion, criterion};

pub fn framework() -> Vec<Category> {
    vec![
        Category {
            name: "Strategic Fit & Opportunity",
            weight: 30,
            criteria: STRATEGIC,
        },
        Category {
            name: "Internal Capability & Resources",
            weight: 35,
            criteria: CAPABILITY,
        },
        Category {
            name: "Market & Business Model",
            weight: 25,
            criteria: MARKET,
        },
        Category {
            name: "Risk & Success Probability",
            weight: 10,
            criteria: SUCCESS,
        },
    ]
}

const STRATEGIC: &[Criterion] = &[
    criterion!("Portfolio Synergy & Value Creation",
        desc: "Cross-selling opportunities, shared infrastructure leverage, brand enhancement, strategic partnerships",
        guide: "1: No synergies, potential brand risk | 3: Some synergies, neutral impact | 5: Strong synergies, significant value creation"),
    criterion!("Market Timing & Competitive Advantage",
        desc: "Market entry timing, competitive landscape analysis, first-mover advantages, regulatory timing",
        guide: "1: Late to market, strong competition | 3: Good timing, moderate competition | 5: Perfect timing, clear advantage window"),
    criterion!("Revenue & Profitability Potential",
        desc: "Revenue projections, margin potential, scalability assessment, ROI timeline",
        guide: "1: Unclear revenue model, low margins | 3: Decent model, moderate margins | 5: Exceptional model, high margins"),
    criterion!("Regulatory & Compliance Alignment",
        desc: "Licensing requirements, regulatory relationships, compliance readiness, sandbox participation",
        guide: "1: Complex regulatory path, no relationships | 3: Clear path, some relationships | 5: Streamlined path, strong relationships"),
];

const CAPABILITY: &[Criterion] = &[
    criterion!("Technical Capability & Infrastructure",
        desc: "In-house expertise depth, technology stack alignment, development capacity, infrastructure readiness",
        guide: "1: Need to hire 80%+ team, major gaps | 3: Have 60% capabilities, 6mo ramp | 5: 90%+ in-house, immediate execution"),
    criterion!("Resource Allocation & Investment",
        desc: "Capital requirements, team allocation, opportunity cost analysis, resource reallocation impact",
        guide: "1: >$3M investment, >24mo timeline | 3: $1-2M investment, 12-18mo | 5: <$1M investment, <9mo execution"),
    criterion!("Execution Track Record & Leadership",
        desc: "Previous venture build success, leadership bandwidth, project management capability, risk mitigation",
        guide: "1: No venture build experience, limited bandwidth | 3: Some experience, adequate bandwidth | 5: Proven track record, strong leadership"),
    criterion!("Talent & Hiring Capability",
        desc: "Access to key talent, hiring pipeline, retention capability, team scaling ability",
        guide: "1: Limited talent access, poor retention | 3: Moderate access, decent retention | 5: Exceptional access, high retention"),
];

const MARKET: &[Criterion] = &[
    criterion!("Market Opportunity & Sizing",
        desc: "TAM analysis for internal build, market entry strategy, customer acquisition plan",
        guide: "1: Small market, unclear entry | 3: Decent market, basic strategy | 5: Large market, clear entry strategy"),
    criterion!("Business Model Innovation",
        desc: "Revenue model design, monetization strategy, pricing power, scalability assessment",
        guide: "1: Basic model, limited scalability | 3: Good model, moderate scalability | 5: Innovative model, high scalability"),
    criterion!("Customer Validation & Pre-commitments",
        desc: "Customer discovery completion, pre-launch commitments, pilot program readiness",
        guide: "1: No customer validation, no commitments | 3: Some validation, few commitments | 5: Strong validation, multiple commitments"),
];

const SUCCESS: &[Criterion] = &[
    criterion!("Execution Risk Assessment",
        desc: "Technical risk, market risk, competitive risk, regulatory risk evaluation",
        guide: "1: High risk across multiple areas | 3: Moderate risk, manageable | 5: Low risk, high probability"),
    criterion!("Success Probability & Metrics",
        desc: "Overall success probability, key success metrics, milestone tracking, exit potential",
        guide: "1: <30% success probability | 3: 50-70% success chance | 5: >80% success probability"),
];
