//! Wizard controller.
//!
//! Owns the campaign document, the current step and the busy flag, and runs
//! the guard → generate → merge sequence for each transition.

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::WizardError;
use super::step::{Action, Step, StepStatus};
use crate::ai::{GenerationClient, GenerationError};
use crate::campaign::{BusinessField, CampaignDocument};

/// Single source of truth for one wizard session.
#[derive(Debug)]
pub struct WizardController {
    client: GenerationClient,
    document: CampaignDocument,
    current_step: Step,
    busy: bool,
    last_error: Option<String>,
    session_id: Uuid,
}

/// Holds the busy flag for the lifetime of one generation call.
///
/// Advances take `&mut self`, so the borrow checker already rules out two
/// calls at once; the flag only records that a call is in flight and is
/// cleared on drop, including when the call fails or the future is dropped
/// mid-flight.
struct BusyGuard<'a>(&'a mut bool);

impl<'a> BusyGuard<'a> {
    fn engage(flag: &'a mut bool) -> Result<Self, WizardError> {
        if *flag {
            return Err(WizardError::Busy);
        }
        *flag = true;
        Ok(Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

impl WizardController {
    /// Start a new session backed by the given generation client.
    pub fn new(client: GenerationClient) -> Self {
        let session_id = Uuid::new_v4();
        debug!(session = %session_id, provider = client.provider_name(), "Wizard session started");

        Self {
            client,
            document: CampaignDocument::new(),
            current_step: Step::BusinessInfo,
            busy: false,
            last_error: None,
            session_id,
        }
    }

    pub fn document(&self) -> &CampaignDocument {
        &self.document
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// Whether a generation call is in flight.
    ///
    /// Always `false` between calls; the TUI tracks queued work in
    /// `App::pending`.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The last user-visible failure message, if not yet dismissed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Progress status of a step in this session.
    pub fn step_status(&self, step: Step) -> StepStatus {
        step.status(self.current_step)
    }

    /// Whether the forward action on the current step would pass its guard.
    pub fn can_advance(&self) -> bool {
        match self.current_step {
            Step::BusinessInfo => self.document.business_info.is_ready_for_strategy(),
            Step::Strategy => self.document.strategy.is_some(),
            Step::Keywords | Step::AdCreative => true,
            Step::Review => false,
        }
    }

    /// Set one business info field.
    ///
    /// Only applies while on the first step; returns whether the edit was
    /// taken.
    pub fn update_field(&mut self, field: BusinessField, value: impl Into<String>) -> bool {
        if self.current_step != Step::BusinessInfo {
            debug!(?field, step = %self.current_step, "Ignoring field edit outside business info");
            return false;
        }
        self.document.business_info.set(field, value);
        true
    }

    /// Generate a campaign strategy from the business info.
    pub async fn advance_to_strategy(&mut self) -> Result<Step, WizardError> {
        let target = Step::Strategy;
        let info = &self.document.business_info;
        if info.name.is_empty() {
            return self.skip("business name is empty");
        }
        if info.description.is_empty() {
            return self.skip("business description is empty");
        }

        self.last_error = None;
        let result = {
            let _busy = BusyGuard::engage(&mut self.busy)?;
            self.client.generate_strategy(&self.document.business_info).await
        };

        let strategy = self.settle(target, result)?;
        self.document.strategy = Some(strategy);
        Ok(self.enter(target))
    }

    /// Research keywords from the business info and strategy.
    pub async fn advance_to_keywords(&mut self) -> Result<Step, WizardError> {
        let target = Step::Keywords;
        let Some(strategy) = self.document.strategy.as_ref() else {
            return self.skip("no strategy generated yet");
        };

        self.last_error = None;
        let result = {
            let _busy = BusyGuard::engage(&mut self.busy)?;
            self.client.generate_keywords(&self.document.business_info, strategy).await
        };

        let keywords = self.settle(target, result)?;
        self.document.keywords = keywords;
        Ok(self.enter(target))
    }

    /// Write ad creative for the business info and keywords.
    pub async fn advance_to_creative(&mut self) -> Result<Step, WizardError> {
        let target = Step::AdCreative;

        self.last_error = None;
        let result = {
            let _busy = BusyGuard::engage(&mut self.busy)?;
            self.client
                .generate_ad_creative(&self.document.business_info, &self.document.keywords)
                .await
        };

        let creative = self.settle(target, result)?;
        self.document.ad_creative = Some(creative);
        Ok(self.enter(target))
    }

    /// Move to the review step.
    pub fn finalize(&mut self) -> Step {
        self.transition(Action::Finalize)
    }

    /// Step back without touching any generated data.
    pub fn back(&mut self) -> Step {
        self.transition(Action::Back)
    }

    /// Discard the session and start over with an empty document.
    pub fn reset(&mut self) -> Step {
        self.document = CampaignDocument::new();
        self.last_error = None;
        self.busy = false;
        self.session_id = Uuid::new_v4();
        info!(session = %self.session_id, "Started new campaign");
        self.transition(Action::Reset)
    }

    /// Run one of the step actions.
    pub async fn dispatch(&mut self, action: Action) -> Result<Step, WizardError> {
        match action {
            Action::AdvanceToStrategy => self.advance_to_strategy().await,
            Action::AdvanceToKeywords => self.advance_to_keywords().await,
            Action::AdvanceToCreative => self.advance_to_creative().await,
            Action::Finalize => Ok(self.finalize()),
            Action::Back => Ok(self.back()),
            Action::Reset => Ok(self.reset()),
        }
    }

    /// Clear the surfaced failure message.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    fn transition(&mut self, action: Action) -> Step {
        if let Some(next) = self.current_step.apply(action) {
            self.current_step = next;
        }
        self.current_step
    }

    fn enter(&mut self, target: Step) -> Step {
        info!(session = %self.session_id, step = %target, "Wizard advanced");
        self.current_step = target;
        self.current_step
    }

    fn skip(&self, reason: &'static str) -> Result<Step, WizardError> {
        debug!(session = %self.session_id, reason, "Transition guard not satisfied");
        Err(WizardError::GuardSkipped(reason))
    }

    /// Record a failed generation without touching the document.
    fn settle<T>(&mut self, target: Step, result: Result<T, GenerationError>) -> Result<T, WizardError> {
        result.map_err(|source| {
            warn!(
                session = %self.session_id,
                step = %target,
                error = %source,
                "Generation failed"
            );
            let err = WizardError::Generation { target, source };
            self.last_error = err.user_message().map(str::to_string);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ai::testing::{Reply, ScriptedGenerator};
    use crate::campaign::MatchType;

    const STRATEGY: &str = r#"{"goal":"Leads","biddingStrategy":"Target CPA","networks":["Search"],"locations":["California"],"rationale":"..."}"#;
    const KEYWORDS: &str = r#"[{"text":"solar installers","matchType":"Exact","intent":"Transactional"}]"#;
    const CREATIVE: &str = r#"{"headlines":["Go Solar Today","Free Quote"],"descriptions":["Save on energy."]}"#;

    fn controller(replies: Vec<Reply>) -> (WizardController, Arc<ScriptedGenerator>) {
        let generator = Arc::new(ScriptedGenerator::new(replies));
        (WizardController::new(GenerationClient::new(generator.clone())), generator)
    }

    fn fill_required(wizard: &mut WizardController) {
        wizard.update_field(BusinessField::Name, "Acme Solar");
        wizard.update_field(BusinessField::Description, "solar panel installs");
    }

    #[tokio::test]
    async fn test_strategy_guard_skips_without_calling_generator() {
        let (mut wizard, generator) = controller(vec![Reply::Text(STRATEGY.to_string())]);
        wizard.update_field(BusinessField::Name, "Acme Solar");

        let err = wizard.advance_to_strategy().await.unwrap_err();
        assert!(matches!(err, WizardError::GuardSkipped(_)));
        assert_eq!(wizard.current_step(), Step::BusinessInfo);
        assert!(wizard.last_error().is_none());
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_full_happy_path() {
        let (mut wizard, generator) = controller(vec![
            Reply::Text(STRATEGY.to_string()),
            Reply::Text(KEYWORDS.to_string()),
            Reply::Text(CREATIVE.to_string()),
        ]);
        fill_required(&mut wizard);

        assert_eq!(wizard.advance_to_strategy().await.unwrap(), Step::Strategy);
        assert_eq!(wizard.advance_to_keywords().await.unwrap(), Step::Keywords);
        assert_eq!(wizard.advance_to_creative().await.unwrap(), Step::AdCreative);
        assert_eq!(wizard.finalize(), Step::Review);

        let doc = wizard.document();
        assert_eq!(doc.strategy.as_ref().unwrap().goal, "Leads");
        assert_eq!(doc.keywords[0].match_type, MatchType::Exact);
        assert_eq!(doc.ad_creative.as_ref().unwrap().headlines.len(), 2);
        assert!(!wizard.is_busy());
        assert_eq!(generator.calls(), 3);

        // The keyword prompt carries the generated goal
        assert!(generator.prompts.lock().unwrap()[1].contains("Goal: Leads"));
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_state_untouched() {
        let (mut wizard, _) = controller(vec![
            Reply::Text(STRATEGY.to_string()),
            Reply::Text("not json".to_string()),
        ]);
        fill_required(&mut wizard);
        wizard.advance_to_strategy().await.unwrap();

        let before = wizard.document().clone();
        let err = wizard.advance_to_keywords().await.unwrap_err();

        assert!(matches!(
            err,
            WizardError::Generation { target: Step::Keywords, source: GenerationError::MalformedResponse(_) }
        ));
        assert_eq!(wizard.document(), &before);
        assert_eq!(wizard.current_step(), Step::Strategy);
        assert_eq!(wizard.last_error(), Some("Failed to generate keywords."));
        assert!(!wizard.is_busy());
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_error() {
        let (mut wizard, generator) = controller(vec![
            Reply::Fail("timeout".to_string()),
            Reply::Text(STRATEGY.to_string()),
        ]);
        fill_required(&mut wizard);

        assert!(wizard.advance_to_strategy().await.is_err());
        assert!(wizard.last_error().is_some());

        assert_eq!(wizard.advance_to_strategy().await.unwrap(), Step::Strategy);
        assert!(wizard.last_error().is_none());
        assert_eq!(generator.calls(), 2);
    }

    #[tokio::test]
    async fn test_keywords_guard_requires_strategy() {
        let (mut wizard, generator) = controller(vec![]);
        let err = wizard.advance_to_keywords().await.unwrap_err();
        assert!(matches!(err, WizardError::GuardSkipped(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_creative_always_attempts() {
        let (mut wizard, generator) = controller(vec![Reply::Empty]);
        let err = wizard.advance_to_creative().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate creatives.");
        assert_eq!(generator.calls(), 1);
        assert!(wizard.document().ad_creative.is_none());
    }

    #[tokio::test]
    async fn test_back_preserves_downstream_data() {
        let (mut wizard, _) = controller(vec![
            Reply::Text(STRATEGY.to_string()),
            Reply::Text(KEYWORDS.to_string()),
        ]);
        fill_required(&mut wizard);
        wizard.advance_to_strategy().await.unwrap();
        wizard.advance_to_keywords().await.unwrap();

        assert_eq!(wizard.back(), Step::Strategy);
        assert_eq!(wizard.back(), Step::BusinessInfo);
        assert_eq!(wizard.back(), Step::BusinessInfo);
        assert!(wizard.document().strategy.is_some());
        assert_eq!(wizard.document().keywords.len(), 1);
    }

    #[tokio::test]
    async fn test_field_edits_only_on_first_step() {
        let (mut wizard, _) = controller(vec![Reply::Text(STRATEGY.to_string())]);
        fill_required(&mut wizard);
        wizard.advance_to_strategy().await.unwrap();

        assert!(!wizard.update_field(BusinessField::Budget, "$10"));
        assert_eq!(wizard.document().business_info.budget, "");

        wizard.back();
        assert!(wizard.update_field(BusinessField::Budget, "$10"));
        assert_eq!(wizard.document().business_info.budget, "$10");
    }

    #[tokio::test]
    async fn test_dispatch_routes_actions() {
        let (mut wizard, _) = controller(vec![Reply::Text(STRATEGY.to_string())]);
        fill_required(&mut wizard);

        assert_eq!(wizard.dispatch(Action::AdvanceToStrategy).await.unwrap(), Step::Strategy);
        assert_eq!(wizard.dispatch(Action::Finalize).await.unwrap(), Step::Review);
        assert_eq!(wizard.dispatch(Action::Back).await.unwrap(), Step::Review);
        assert_eq!(wizard.dispatch(Action::Reset).await.unwrap(), Step::BusinessInfo);
    }

    #[test]
    fn test_reset_starts_new_session() {
        let (mut wizard, _) = controller(vec![]);
        let first = wizard.session_id();
        wizard.update_field(BusinessField::Name, "Acme");
        wizard.finalize();

        assert_eq!(wizard.reset(), Step::BusinessInfo);
        assert_eq!(wizard.document(), &CampaignDocument::default());
        assert_ne!(wizard.session_id(), first);
    }

    #[test]
    fn test_busy_guard_clears_flag_on_drop() {
        let mut flag = false;
        let guard = BusyGuard::engage(&mut flag).unwrap();
        assert!(*guard.0);
        drop(guard);
        assert!(!flag);

        // A flag left set is refused
        let mut stuck = true;
        assert!(matches!(BusyGuard::engage(&mut stuck), Err(WizardError::Busy)));
        assert!(stuck);
    }

    /// Never answers.
    struct Stalled;

    #[async_trait::async_trait]
    impl crate::ai::StructuredGenerator for Stalled {
        async fn generate(
            &self,
            _instruction: &str,
            _schema: &crate::ai::Schema,
        ) -> Result<Option<String>, GenerationError> {
            std::future::pending().await
        }

        fn name(&self) -> &str {
            "stalled"
        }
    }

    #[tokio::test]
    async fn test_busy_cleared_when_call_abandoned() {
        let mut wizard = WizardController::new(GenerationClient::new(Arc::new(Stalled)));
        fill_required(&mut wizard);

        let timed_out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            wizard.advance_to_strategy(),
        )
        .await;

        assert!(timed_out.is_err());
        assert!(!wizard.is_busy());
        assert_eq!(wizard.current_step(), Step::BusinessInfo);
        assert!(wizard.document().strategy.is_none());
    }

    #[test]
    fn test_can_advance_tracks_guards() {
        let (mut wizard, _) = controller(vec![]);
        assert!(!wizard.can_advance());
        fill_required(&mut wizard);
        assert!(wizard.can_advance());
        assert_eq!(wizard.step_status(Step::BusinessInfo), StepStatus::Active);
    }
}
