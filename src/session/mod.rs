//! Assessment session: the four-step wizard state machine.
//!
//! Steps run linearly (Setup, Scoring, Risk, Results) with backward
//! re-entry via [`AssessmentSession::previous`]. The session owns the two
//! score stores and the mode/stage selection; every derived value (totals,
//! recommendation) is recomputed from them on demand.
//!
//! Changing mode or stage invalidates all entries: category and criterion
//! identities differ between frameworks, so both stores are cleared.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::decision::{Recommendation, recommend};
use crate::framework::{AssessmentMode, Category, InvestmentStage, framework, risk_framework};
use crate::scoring::{ScoreError, ScoreStore, TotalScore, total_score};

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Step {
    Setup,
    Scoring,
    Risk,
    Results,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Setup, Step::Scoring, Step::Risk, Step::Results];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Scoring => "Scoring",
            Self::Risk => "Risk",
            Self::Results => "Results",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Setup => "Configure assessment",
            Self::Scoring => "Evaluate criteria",
            Self::Risk => "Identify red flags",
            Self::Results => "Review decision",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Self::Setup => Some(Self::Scoring),
            Self::Scoring => Some(Self::Risk),
            Self::Risk => Some(Self::Results),
            Self::Results => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Self::Setup => None,
            Self::Scoring => Some(Self::Setup),
            Self::Risk => Some(Self::Scoring),
            Self::Results => Some(Self::Risk),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Mode/stage changes are only allowed during Setup.
    SetupLocked { step: Step },
    /// Score writes are only allowed during their step.
    WrongStep { expected: Step, actual: Step },
    /// `next()` called while the current step's entries are incomplete.
    Incomplete { category: String },
    Score(ScoreError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetupLocked { step } => {
                write!(f, "mode and stage can only change during Setup (currently {step})")
            }
            Self::WrongStep { expected, actual } => {
                write!(f, "operation belongs to the {expected} step (currently {actual})")
            }
            Self::Incomplete { category } => {
                write!(f, "cannot continue: {category:?} is not fully scored")
            }
            Self::Score(err) => err.fmt(f),
        }
    }
}

impl Error for SessionError {}

impl From<ScoreError> for SessionError {
    fn from(err: ScoreError) -> Self {
        Self::Score(err)
    }
}

/// Mutable state for one assessment run.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    mode: AssessmentMode,
    stage: InvestmentStage,
    step: Step,
    category_index: usize,
    scores: ScoreStore,
    risk_scores: ScoreStore,
}

impl AssessmentSession {
    pub fn new(mode: AssessmentMode, stage: InvestmentStage) -> Self {
        Self {
            mode,
            stage,
            step: Step::Setup,
            category_index: 0,
            scores: ScoreStore::new(),
            risk_scores: ScoreStore::new(),
        }
    }

    pub fn mode(&self) -> AssessmentMode {
        self.mode
    }

    pub fn stage(&self) -> InvestmentStage {
        self.stage
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Cursor into the quality framework while on the Scoring step.
    pub fn category_index(&self) -> usize {
        self.category_index
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn risk_scores(&self) -> &ScoreStore {
        &self.risk_scores
    }

    /// The active quality framework (recomputed; not cached).
    pub fn framework(&self) -> Vec<Category> {
        framework(self.mode, self.stage)
    }

    pub fn risk_framework(&self) -> Vec<Category> {
        risk_framework(self.mode)
    }

    /// The quality category under the cursor, if any.
    pub fn current_category(&self) -> Option<Category> {
        self.framework().get(self.category_index).copied()
    }

    /// Select the assessment mode. Clears both stores: entries are not
    /// portable across frameworks.
    pub fn set_mode(&mut self, mode: AssessmentMode) -> Result<(), SessionError> {
        if self.step != Step::Setup {
            return Err(SessionError::SetupLocked { step: self.step });
        }
        self.mode = mode;
        self.reset_entries();
        Ok(())
    }

    /// Select the investment stage. Clears both stores: stage changes shift
    /// category weights and invalidate prior entries.
    pub fn set_stage(&mut self, stage: InvestmentStage) -> Result<(), SessionError> {
        if self.step != Step::Setup {
            return Err(SessionError::SetupLocked { step: self.step });
        }
        self.stage = stage;
        self.reset_entries();
        Ok(())
    }

    fn reset_entries(&mut self) {
        self.scores.clear();
        self.risk_scores.clear();
        self.category_index = 0;
    }

    /// Write (or delete, when `value` is `None`) one quality score.
    pub fn set_score(
        &mut self,
        category: &str,
        criterion: &str,
        value: Option<u8>,
    ) -> Result<(), SessionError> {
        if self.step != Step::Scoring {
            return Err(SessionError::WrongStep {
                expected: Step::Scoring,
                actual: self.step,
            });
        }
        validate_pair(&self.framework(), category, criterion)?;
        self.scores.set(category, criterion, value)?;
        Ok(())
    }

    /// Write (or delete) one risk score.
    pub fn set_risk_score(
        &mut self,
        category: &str,
        criterion: &str,
        value: Option<u8>,
    ) -> Result<(), SessionError> {
        if self.step != Step::Risk {
            return Err(SessionError::WrongStep {
                expected: Step::Risk,
                actual: self.step,
            });
        }
        validate_pair(&self.risk_framework(), category, criterion)?;
        self.risk_scores.set(category, criterion, value)?;
        Ok(())
    }

    /// Whether the wizard may advance from the current position.
    ///
    /// Setup never blocks. Scoring requires the current category to be
    /// fully scored (a category with zero criteria is trivially complete).
    /// Risk never blocks: unscored risk simply carries no penalty.
    /// Results is terminal.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            Step::Setup => true,
            Step::Scoring => match self.current_category() {
                Some(cat) => self.scores.scored_count(cat.name) >= cat.criteria.len(),
                None => true,
            },
            Step::Risk => true,
            Step::Results => false,
        }
    }

    /// Advance: within Scoring, to the next category; otherwise to the
    /// next step.
    pub fn next(&mut self) -> Result<(), SessionError> {
        if !self.can_proceed() {
            let category = self
                .current_category()
                .map(|c| c.name.to_string())
                .unwrap_or_default();
            return Err(SessionError::Incomplete { category });
        }
        if self.step == Step::Scoring {
            let last = self.framework().len().saturating_sub(1);
            if self.category_index < last {
                self.category_index += 1;
                return Ok(());
            }
        }
        if let Some(step) = self.step.next() {
            self.step = step;
        }
        Ok(())
    }

    /// Go back one position; the exact mirror of [`next`](Self::next).
    /// A no-op at the very start of the wizard.
    pub fn previous(&mut self) {
        match self.step {
            Step::Setup => {}
            Step::Scoring => {
                if self.category_index > 0 {
                    self.category_index -= 1;
                } else {
                    self.step = Step::Setup;
                }
            }
            _ => {
                if let Some(step) = self.step.previous() {
                    if step == Step::Scoring {
                        self.category_index = self.framework().len().saturating_sub(1);
                    }
                    self.step = step;
                }
            }
        }
    }

    pub fn total_score(&self) -> TotalScore {
        total_score(
            &self.framework(),
            &self.risk_framework(),
            &self.scores,
            &self.risk_scores,
        )
    }

    pub fn recommendation(&self) -> Recommendation {
        recommend(
            &self.total_score(),
            self.mode,
            &self.risk_framework(),
            &self.risk_scores,
        )
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new(AssessmentMode::DirectInvestment, InvestmentStage::Seed)
    }
}

fn validate_pair(
    framework: &[Category],
    category: &str,
    criterion: &str,
) -> Result<(), ScoreError> {
    let cat = crate::framework::find_category(framework, category).ok_or_else(|| {
        ScoreError::UnknownCategory {
            category: category.to_string(),
        }
    })?;
    if cat.criterion(criterion).is_none() {
        return Err(ScoreError::UnknownCriterion {
            category: category.to_string(),
            criterion: criterion.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
