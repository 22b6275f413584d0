//! Direct-investment quality framework.
//!
//! Seed deals weight the team and market heavily; from Series A onward the
//! weight shifts toward demonstrated financial performance. Weights sum to
//! 100 at every stage.

use super::{Category, Criterion, InvestmentStage, criterion};

pub fn framework(stage: InvestmentStage) -> Vec<Category> {
    let seed = stage == InvestmentStage::Seed;
    vec![
        Category {
            name: "Founder & Team Excellence",
            weight: if seed { 40 } else { 30 },
            criteria: TEAM,
        },
        Category {
            name: "Market Opportunity & Validation",
            weight: if seed { 35 } else { 25 },
            criteria: MARKET,
        },
        Category {
            name: "Product & Technology",
            weight: 15,
            criteria: PRODUCT,
        },
        Category {
            name: "Financial Performance & Metrics",
            weight: if seed { 10 } else { 30 },
            criteria: FINANCIAL,
        },
    ]
}

const TEAM: &[Criterion] = &[
    criterion!("Founder Track Record & Domain Expertise",
        desc: "Previous exits, P&L ownership, fintech domain expertise, entrepreneurial resilience",
        guide: "1: First-time founder, no relevant experience | 3: 1 exit or 5+ years domain experience | 5: Multiple exits, proven fintech success"),
    criterion!("Founder-Market Fit & Authenticity",
        desc: "Personal experience with the problem, 'hair-on-fire' validation, career history alignment, thought leadership",
        guide: "1: No personal connection to problem | 3: Some domain exposure, clear communicator | 5: Lived the pain, established thought leader"),
    criterion!("Team Composition & Network Strength",
        desc: "Founding team completeness, network reach, customer access, investor relationships, talent pipeline",
        guide: "1: Solo founder, weak network | 3: 2-3 founders, moderate network | 5: Complete team, exceptional network access"),
    criterion!("Execution Velocity & Communication",
        desc: "Milestone delivery consistency, communication quality, professional presentation, attention to detail",
        guide: "1: Poor execution, unprofessional communication | 3: Adequate execution, clear communication | 5: Exceptional execution, thought leadership"),
];

const MARKET: &[Criterion] = &[
    criterion!("Market Size & Growth Dynamics",
        desc: "TAM/SAM/SOM bottom-up validation, CAGR trajectory, regulatory tailwinds",
        guide: "1: TAM <$500M, declining market | 3: TAM $1-5B, 15-25% CAGR | 5: TAM >$5B, >30% CAGR, regulatory support"),
    criterion!("Problem Urgency & Timing",
        desc: "Pain point severity, convergence catalysts, behavioral shift momentum, 'why now' factors",
        guide: "1: Nice-to-have, no catalysts | 3: Clear pain, 1-2 drivers | 5: Hair-on-fire problem, 3+ convergent catalysts"),
    criterion!("Customer Validation & Traction",
        desc: "Pilot customers, user engagement metrics, retention rates, product-market fit signals",
        guide: "1: No customers, low engagement | 3: Some customers, moderate engagement | 5: Strong customer base, high engagement"),
    criterion!("Competitive Positioning",
        desc: "Differentiation depth, competitive moat strength, customer acquisition efficiency, market positioning",
        guide: "1: Me-too product, high CAC | 3: Clear differentiation, moderate CAC | 5: Category defining, low CAC, viral growth"),
];

const PRODUCT: &[Criterion] = &[
    criterion!("Product Excellence & User Experience",
        desc: "UX quality, product-market fit signals, customer satisfaction, engagement depth, technical architecture",
        guide: "1: Basic MVP, poor UX | 3: Good product, decent UX | 5: Exceptional UX, strong PMF signals"),
    criterion!("Innovation & IP Portfolio",
        desc: "Intellectual property strength, technical differentiation, innovation pipeline, competitive barriers",
        guide: "1: No IP, easily replicated | 3: Some patents, 12-month lead | 5: Strong IP portfolio, 3+ year moat"),
    criterion!("Regulatory Compliance & Security",
        desc: "Regulatory compliance readiness, security infrastructure, data protection, licensing status, audit preparedness",
        guide: "1: Non-compliant, major security gaps | 3: Basic compliance, adequate security | 5: Fully compliant, enterprise-grade security"),
];

const FINANCIAL: &[Criterion] = &[
    criterion!("Revenue Growth & Quality",
        desc: "MRR growth trajectory, revenue quality, customer concentration, churn dynamics",
        guide: "1: <15% MoM growth, high churn | 3: 20-35% MoM, moderate churn | 5: >40% MoM growth, <3% churn"),
    criterion!("Unit Economics & Capital Efficiency",
        desc: "LTV/CAC ratios, payback periods, burn rate efficiency, path to profitability",
        guide: "1: Poor unit economics, high burn | 3: Decent economics, moderate burn | 5: Excellent economics, efficient burn"),
    criterion!("Funding History & Cap Table",
        desc: "Previous rounds, valuation progression, investor quality, cap table structure",
        guide: "1: Down rounds, weak investors | 3: Flat rounds, decent investors | 5: Strong up rounds, tier-1 investors"),
];
