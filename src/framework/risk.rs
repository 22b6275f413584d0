//! Risk frameworks: red-flag evaluation.
//!
//! Both modes share the weight shape (Critical 40, High 30, Medium 20,
//! Low 10) with mode-specific criteria. Risk criteria are scored 1–5 where
//! 1 means the red flags are present (worst) and 5 means they are absent;
//! the aggregator inverts this into a penalty against the quality score.

use super::{Category, Criterion, criterion};

pub fn direct_investment() -> Vec<Category> {
    vec![
        Category {
            name: "Critical Risk",
            weight: 40,
            criteria: DI_CRITICAL,
        },
        Category {
            name: "High Risk",
            weight: 30,
            criteria: DI_HIGH,
        },
        Category {
            name: "Medium Risk",
            weight: 20,
            criteria: DI_MEDIUM,
        },
        Category {
            name: "Low Risk",
            weight: 10,
            criteria: DI_LOW,
        },
    ]
}

pub fn venture_build() -> Vec<Category> {
    vec![
        Category {
            name: "Critical Risk",
            weight: 40,
            criteria: VB_CRITICAL,
        },
        Category {
            name: "High Risk",
            weight: 30,
            criteria: VB_HIGH,
        },
        Category {
            name: "Medium Risk",
            weight: 20,
            criteria: VB_MEDIUM,
        },
        Category {
            name: "Low Risk",
            weight: 10,
            criteria: VB_LOW,
        },
    ]
}

const DI_CRITICAL: &[Criterion] = &[
    criterion!("Founding Team & Integrity",
        desc: "Claims verification, experience alignment, commitment",
        guide: "1: Misaligned, unverified | 3: Some alignment, minor issues | 5: Fully aligned, verified",
        factors: [
            "Claims not verifiable on public records",
            "Contradictions between profile and pitch materials",
            "Exaggerated team experience or past achievements",
            "Evasive answers during due diligence process",
            "History of misleading statements to previous investors",
            "Unwillingness to provide references from former colleagues",
        ]),
    criterion!("Financial & Regulatory Compliance",
        desc: "Financial accuracy, regulatory compliance, licensing status, audit transparency",
        guide: "1: Major irregularities, unlicensed | 3: Minor discrepancies | 5: Clean financials, fully compliant",
        factors: [
            "Operating without required licenses",
            "Financial statements that don't reconcile",
            "No clear regulatory roadmap or compliance strategy",
            "Refusal to share complete financial information",
            "Unexplained debts or accounting irregularities",
            "Previous regulatory violations or sanctions",
        ]),
    criterion!("Capital Efficiency & Runway",
        desc: "Burn rate vs. revenue, runway, capital raised vs. milestones",
        guide: "1: High burn, short runway | 3: Moderate burn, decent runway | 5: Efficient burn, long runway",
        factors: [
            "High burn rate with limited revenue generation",
            "Short runway (less than 12 months) post-raise",
            "Inefficient use of previous funding rounds",
            "Unclear path to profitability",
        ]),
];

const DI_HIGH: &[Criterion] = &[
    criterion!("Team Instability & Composition",
        desc: "Team turnover, founder disputes, critical role gaps",
        guide: "1: High turnover, active disputes | 3: Some instability | 5: Stable team, low turnover",
        factors: [
            "High employee turnover (>30% annually)",
            "Frequent co-founder departures within 12 months",
            "Missing critical roles (no CTO for tech startup)",
            "Founder disputes or legal conflicts over equity",
            "Core technology development fully outsourced",
            "Misaligned founder goals or vision statements",
        ]),
    criterion!("Market & Product Validation",
        desc: "Product claims accuracy, market traction verification, customer feedback",
        guide: "1: False claims, no validation | 3: Exaggerated claims | 5: Accurate claims, strong validation",
        factors: [
            "No working MVP after 12+ months (vaporware)",
            "Product claims not supported by user feedback",
            "No market traction or pilot customers",
            "Negative customer reviews or public sentiment",
            "Critical security/compliance features neglected",
            "Heavy competition with no clear differentiation",
        ]),
    criterion!("Business Model Viability",
        desc: "Revenue model, pricing, scalability",
        guide: "1: Unclear, unsustainable | 3: Basic, limited scalability | 5: Clear, highly scalable",
        factors: [
            "Unproven business model with 'monetize later' approach",
            "Poor unit economics (LTV/CAC < 2) with no improvement path",
            "Non-scalable operations with critical bottlenecks",
            "Over-reliance on continuous funding without progress",
            "Customer concentration risk (>20% single customer)",
        ]),
];

const DI_MEDIUM: &[Criterion] = &[
    criterion!("Market Timing & Competition",
        desc: "Market entry timing, competitive landscape, first-mover advantages, regulatory timing",
        guide: "1: Poor timing, strong competition | 3: Decent timing | 5: Perfect timing, clear advantage",
        factors: [
            "Market not ready for solution (too early)",
            "Strong competitors already established",
            "Regulatory environment unfavorable or uncertain",
            "Customer adoption patterns not favorable",
            "Economic conditions not supportive",
            "Technology maturity insufficient for execution",
        ]),
];

const DI_LOW: &[Criterion] = &[
    criterion!("Governance & Communication",
        desc: "Cap table health, founder maturity, communication quality, professionalism",
        guide: "1: Poor governance, immature | 3: Adequate structure | 5: Excellent governance, mature",
        factors: [
            "Broken cap table with over-diluted founders (<20% equity)",
            "Founder lacks self-awareness or not coachable",
            "Unwieldy number of shareholders (>25 investors)",
            "Poor communication or unprofessional presentation",
            "Jargon-laden or unclear company descriptions",
        ]),
];

const VB_CRITICAL: &[Criterion] = &[
    criterion!("Resource & Capability Gaps",
        desc: "Critical capability gaps, resource constraints, execution capacity limitations",
        guide: "1: Major gaps, insufficient resources | 3: Some gaps, adequate resources | 5: Complete capabilities, ample resources",
        factors: [
            "Missing 50%+ of required technical capabilities",
            "Insufficient development team capacity (<10 engineers)",
            "No domain expertise in leadership team",
            "Critical infrastructure components not available",
            "Regulatory compliance capabilities completely absent",
            "No proven track record of venture building",
        ]),
    criterion!("Strategic Misalignment",
        desc: "Portfolio fit, strategic conflicts, brand risks, competitive conflicts",
        guide: "1: Major misalignment, conflicts | 3: Some misalignment | 5: Perfect alignment, strong synergies",
        factors: [
            "Direct competition with existing portfolio companies",
            "Brand risk or reputation conflicts",
            "No synergies with existing business lines",
            "Regulatory conflicts with current operations",
            "Customer base conflicts or cannibalization risk",
            "Management attention conflicts with core business",
        ]),
];

const VB_HIGH: &[Criterion] = &[
    criterion!("Market & Timing Risk",
        desc: "Market timing, competitive landscape, regulatory timing, customer readiness",
        guide: "1: Poor timing, strong competition | 3: Decent timing | 5: Perfect timing, clear advantage",
        factors: [
            "Market not ready for solution (too early)",
            "Strong competitors already established",
            "Regulatory environment unfavorable or uncertain",
            "Customer adoption patterns not favorable",
        ]),
    criterion!("Execution & Leadership Risk",
        desc: "Leadership bandwidth, project management, execution track record",
        guide: "1: Limited bandwidth, poor track record | 3: Adequate capacity | 5: Strong leadership, proven execution",
        factors: [
            "Senior leadership bandwidth insufficient (<30% time)",
            "No dedicated project leadership assigned",
            "Poor track record of internal project execution",
            "Inadequate project management systems",
            "Key personnel retention risk during build phase",
            "Unclear success metrics or milestone definitions",
        ]),
];

const VB_MEDIUM: &[Criterion] = &[
    criterion!("Financial & ROI Risk",
        desc: "Investment requirements, ROI projections, opportunity cost assessment",
        guide: "1: High investment, unclear ROI | 3: Moderate investment | 5: Low investment, clear ROI",
        factors: [
            "Investment requirements >$3M with unclear returns",
            "ROI projections unrealistic or unsubstantiated",
            "High opportunity cost from resource reallocation",
            "Long payback period (>36 months)",
            "Unclear path to profitability or exit",
            "Financial projections not stress-tested",
        ]),
];

const VB_LOW: &[Criterion] = &[
    criterion!("Operational & Support Risk",
        desc: "Operational support, infrastructure readiness, vendor dependencies",
        guide: "1: Poor operational support | 3: Adequate support | 5: Excellent operational foundation",
        factors: [
            "Inadequate operational support systems",
            "High dependency on external vendors",
            "Infrastructure not scalable for growth",
            "Insufficient customer support capabilities",
            "Weak vendor management and partnerships",
            "Inadequate business continuity planning",
        ]),
];
