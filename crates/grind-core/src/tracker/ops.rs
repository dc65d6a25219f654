//! Tracker operations returning display wrappers.

use jiff::Timestamp;
use log::{debug, info};

use super::{blocking, Tracker};
use crate::{
    display::{CompletionResult, InitResult, SampleResult, SampledQuestion},
    error::{Result, TrackerError},
    extract::plan_from_raw,
    params::{CompletePlan, InitPlan, PlanStats, SamplePlan},
    visualizer::ProgressVisualizer,
};

impl Tracker {
    /// Builds a fresh plan from its raw document and persists it.
    ///
    /// The existence check runs before the raw source is read so that an
    /// in-progress plan never costs a network round trip.
    ///
    /// # Errors
    ///
    /// * `TrackerError::AlreadyExists` - a progress file already exists
    /// * `TrackerError::RawSourceNotFound` - the local raw file is missing
    /// * `TrackerError::SourceUnavailable` - the remote fetch failed
    /// * `TrackerError::Parse` - the raw document has the wrong shape
    pub async fn init_plan(&self, params: &InitPlan) -> Result<InitResult> {
        let kind = params.kind;
        if self.store.exists(kind) {
            return Err(TrackerError::AlreadyExists {
                kind,
                path: self.store.path_for(kind),
            });
        }

        let source = self.raw_source(kind, params.fetch);
        let raw = source.fetch().await?;
        let plan = plan_from_raw(&raw)?;
        info!(
            "Extracted {} questions for {kind} from '{}'",
            plan.total_count(),
            plan.name
        );

        let store = self.store.clone();
        blocking(move || {
            let path = store.create(&plan, kind)?;
            Ok(InitResult::new(kind, path, plan))
        })
        .await
    }

    /// Samples up to `count` distinct unsolved questions uniformly at random.
    ///
    /// The count is validated before the plan file is touched.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - `count` is not positive
    /// * `TrackerError::PlanNotFound` - the plan was never initialized
    pub async fn sample_plan(&self, params: &SamplePlan) -> Result<SampleResult> {
        let count = params.validate()?;
        let kind = params.kind;
        let store = self.store.clone();

        blocking(move || {
            let plan = store.load(kind)?;
            let mut rng = rand::rng();
            let questions = plan
                .sample_unsolved(count, &mut rng)
                .into_iter()
                .filter_map(|id| plan.question(id))
                .map(|q| SampledQuestion {
                    id: q.id.clone(),
                    name: q.name.clone(),
                })
                .collect::<Vec<_>>();
            debug!("Sampled {} of {count} requested from {kind}", questions.len());
            Ok(SampleResult::new(kind, questions))
        })
        .await
    }

    /// Marks questions complete with the current time and saves the plan.
    ///
    /// Unknown ids are reported, not rejected. The file is only rewritten
    /// when at least one question changed.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - no ids were given
    /// * `TrackerError::PlanNotFound` - the plan was never initialized
    pub async fn complete_plan(&self, params: &CompletePlan) -> Result<CompletionResult> {
        params.validate()?;
        let kind = params.kind;
        let ids = params.ids.clone();
        let store = self.store.clone();

        blocking(move || {
            let mut plan = store.load(kind)?;
            let report = plan.mark_complete(ids.as_slice(), Timestamp::now());
            if report.changed() {
                store.save(&plan, kind)?;
            }
            if !report.unknown.is_empty() {
                info!("Ignored unknown question id(s) for {kind}: {:?}", report.unknown);
            }
            Ok(CompletionResult::new(kind, report))
        })
        .await
    }

    /// Renders the statistics report for a plan.
    ///
    /// # Errors
    ///
    /// * `TrackerError::PlanNotFound` - the plan was never initialized
    pub async fn plan_stats(&self, params: &PlanStats) -> Result<String> {
        let kind = params.kind;
        let days = params.days;
        let store = self.store.clone();

        blocking(move || {
            let plan = store.load(kind)?;
            Ok(ProgressVisualizer::new(&plan).render(days))
        })
        .await
    }
}
