//! Pipeline orchestration: extraction (cache-backed), tailoring, and the
//! high-priority reinforcement distribution, each stage timed independently.

use crate::config::Config;
use crate::distribution::{BulletDistributor, DistributionOptions, DistributionStats};
use crate::error::Result;
use crate::extraction::{KeywordCache, KeywordExtractor, KeywordSet};
use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Posting metadata supplied by the (excluded) network layer. The core
/// reads `description` and `url`; everything else is opaque pass-through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInfo {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: Option<String>,
}

/// Candidate record supplied by the host. Opaque read-only input; the core
/// never derives keywords from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub contact: Option<String>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
}

/// Output of the optional external unique-resume capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniqueResume {
    pub unique_text: String,
    pub stats: DistributionStats,
    pub content_hash: String,
}

/// Optional external capability that produces a fully unique per-job resume.
/// Injected explicitly; when absent the pipeline runs its own fallback
/// rewrite plus full distribution.
pub trait UniqueResumeGenerator: Send + Sync {
    fn generate(&self, resume_text: &str, keywords: &[String]) -> Result<UniqueResume>;
}

/// Per-stage elapsed time and whether the total met the advisory target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StageTimings {
    pub extraction_ms: u64,
    pub tailoring_ms: u64,
    pub distribution_ms: u64,
    pub total_ms: u64,
    pub within_target: bool,
}

/// Aggregated outcome of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub success: bool,
    pub failure_reason: Option<String>,
    pub keywords: KeywordSet,
    pub tailored_resume: String,
    /// Stats from the tailoring stage (delegated generator or fallback
    /// rewrite + full distribution).
    pub tailoring_stats: DistributionStats,
    /// Stats from the final high-priority reinforcement pass.
    pub distribution_stats: DistributionStats,
    /// Identifying hash adopted verbatim from the external generator, when
    /// one ran.
    pub content_hash: Option<String>,
    pub timings: StageTimings,
}

pub struct Pipeline {
    config: Config,
    extractor: KeywordExtractor,
    cache: KeywordCache,
    distributor: BulletDistributor,
    generator: Option<Box<dyn UniqueResumeGenerator>>,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let cache = KeywordCache::new(
            Duration::from_secs(config.cache.ttl_secs),
            config.cache.capacity,
        );
        Self {
            config,
            extractor: KeywordExtractor::new(),
            cache,
            distributor: BulletDistributor::new(),
            generator: None,
        }
    }

    /// Install the external unique-resume capability. Selection is explicit
    /// configuration, never runtime probing.
    pub fn with_generator(mut self, generator: Box<dyn UniqueResumeGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Cache handle for operational inspection (`clear`, `len`).
    pub fn cache(&self) -> &KeywordCache {
        &self.cache
    }

    /// Extract keywords for a posting, consulting the cache first. Keyed by
    /// the posting URL when present, else the text fingerprint.
    pub fn extract_keywords(&self, job: &JobInfo) -> KeywordSet {
        let key = KeywordCache::key(job.url.as_deref(), &job.description);
        if let Some(cached) = self.cache.get(&key) {
            debug!("serving keywords from cache");
            return cached;
        }
        let keywords = self
            .extractor
            .extract(&job.description, self.config.extraction.max_keywords);
        if !keywords.is_empty() {
            self.cache.put(&key, keywords.clone());
        }
        keywords
    }

    /// Run the full pipeline: extraction, tailoring, then the high-priority
    /// reinforcement distribution.
    pub fn run<R: Rng>(
        &self,
        job: &JobInfo,
        profile: &CandidateProfile,
        base_resume: &str,
        rng: &mut R,
    ) -> PipelineResult {
        info!(
            "tailoring resume for {} against '{}' at {}",
            profile.name, job.title, job.company
        );
        let started = Instant::now();

        // Stage 1: extraction
        let extraction_started = Instant::now();
        let keywords = self.extract_keywords(job);
        let extraction_ms = elapsed_ms(extraction_started);

        if keywords.is_empty() {
            warn!("no keywords extracted, stopping pipeline");
            let total_ms = elapsed_ms(started);
            return PipelineResult {
                success: false,
                failure_reason: Some(
                    "no usable keywords could be extracted from the job description".to_string(),
                ),
                keywords,
                tailored_resume: base_resume.to_string(),
                tailoring_stats: DistributionStats::default(),
                distribution_stats: DistributionStats::default(),
                content_hash: None,
                timings: StageTimings {
                    extraction_ms,
                    tailoring_ms: 0,
                    distribution_ms: 0,
                    total_ms,
                    within_target: total_ms <= self.config.pipeline.target_latency_ms,
                },
            };
        }

        let options = DistributionOptions {
            max_keywords_per_bullet: self.config.distribution.max_keywords_per_bullet,
            ..Default::default()
        };

        // Stage 2: tailoring, delegated or fallback
        let tailoring_started = Instant::now();
        let (tailored, tailoring_stats, content_hash) =
            self.tailor(base_resume, &keywords, &options, rng);
        let tailoring_ms = elapsed_ms(tailoring_started);

        // Stage 3: reinforcement pass over high-priority keywords only
        let distribution_started = Instant::now();
        let reinforced =
            self.distributor
                .distribute(&tailored, &keywords.high_priority, &options, rng);
        let distribution_ms = elapsed_ms(distribution_started);

        let total_ms = elapsed_ms(started);
        let within_target = total_ms <= self.config.pipeline.target_latency_ms;
        debug!(
            "pipeline finished in {}ms (target {}ms)",
            total_ms, self.config.pipeline.target_latency_ms
        );

        PipelineResult {
            success: true,
            failure_reason: None,
            keywords,
            tailored_resume: reinforced.tailored_text,
            tailoring_stats,
            distribution_stats: reinforced.stats,
            content_hash,
            timings: StageTimings {
                extraction_ms,
                tailoring_ms,
                distribution_ms,
                total_ms,
                within_target,
            },
        }
    }

    /// Tailoring stage. With an external generator installed, delegate and
    /// adopt its output verbatim. Otherwise run the fallback rewrite over
    /// the work-experience subset, then sweep remaining gaps with a full
    /// distribution over every tier.
    fn tailor<R: Rng>(
        &self,
        base_resume: &str,
        keywords: &KeywordSet,
        options: &DistributionOptions,
        rng: &mut R,
    ) -> (String, DistributionStats, Option<String>) {
        if let Some(generator) = &self.generator {
            match generator.generate(base_resume, &keywords.work_experience) {
                Ok(unique) => {
                    debug!("unique-resume generator produced hash {}", unique.content_hash);
                    return (unique.unique_text, unique.stats, Some(unique.content_hash));
                }
                Err(e) => {
                    warn!("unique-resume generator failed, using fallback: {}", e);
                }
            }
        }

        let rewritten = self
            .distributor
            .rewrite_bullets(base_resume, &keywords.work_experience, rng);
        let swept = self
            .distributor
            .distribute(&rewritten.tailored_text, &keywords.merged(), options, rng);
        (swept.tailored_text, swept.stats, None)
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const JOB_TEXT: &str = "We are hiring a platform engineer to own our Python \
        services, Kubernetes clusters, and Terraform modules on AWS. Candidates \
        should know PostgreSQL and enjoy automating deployment pipelines.";

    const RESUME: &str = "Jane Doe\njane@example.com\n\nEXPERIENCE\n\
- Maintained internal tooling for the data team.\n\
- Shipped quarterly releases across three product lines.\n\n\
SKILLS\nGit, Linux\n";

    fn job() -> JobInfo {
        JobInfo {
            title: "Platform Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            description: JOB_TEXT.to_string(),
            url: Some("https://jobs.acme.test/platform-engineer".to_string()),
        }
    }

    fn profile() -> CandidateProfile {
        CandidateProfile {
            name: "Jane Doe".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_run_produces_successful_result() {
        let pipeline = Pipeline::new(Config::default());
        let mut rng = StdRng::seed_from_u64(3);
        let result = pipeline.run(&job(), &profile(), RESUME, &mut rng);

        assert!(result.success);
        assert!(result.failure_reason.is_none());
        assert!(!result.keywords.is_empty());
        assert!(result.keywords.all.contains(&"python".to_string()));
        assert!(crate::distribution::contains_keyword(&result.tailored_resume, "kubernetes"));
        assert!(result.content_hash.is_none());
    }

    #[test]
    fn test_insufficient_posting_fails_before_tailoring() {
        let pipeline = Pipeline::new(Config::default());
        let short_job = JobInfo {
            description: "too short".to_string(),
            ..job()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let result = pipeline.run(&short_job, &profile(), RESUME, &mut rng);

        assert!(!result.success);
        assert!(result.failure_reason.is_some());
        assert_eq!(result.keywords.total, 0);
        // resume passes through untouched
        assert_eq!(result.tailored_resume, RESUME);
        assert_eq!(result.timings.tailoring_ms, 0);
    }

    #[test]
    fn test_extraction_served_from_cache_on_repeat() {
        let pipeline = Pipeline::new(Config::default());
        let job = job();
        let first = pipeline.extract_keywords(&job);
        assert_eq!(pipeline.cache().len(), 1);
        let second = pipeline.extract_keywords(&job);
        assert_eq!(first, second);
        assert_eq!(pipeline.cache().len(), 1);
    }

    #[test]
    fn test_generator_output_adopted_verbatim() {
        struct FixedGenerator;
        impl UniqueResumeGenerator for FixedGenerator {
            fn generate(&self, _resume: &str, _keywords: &[String]) -> Result<UniqueResume> {
                Ok(UniqueResume {
                    unique_text: "UNIQUE\n\nEXPERIENCE\n- Rebuilt everything.\n".to_string(),
                    stats: DistributionStats {
                        total: 4,
                        already_present: 1,
                        added: 3,
                        missing: 0,
                    },
                    content_hash: "abc123".to_string(),
                })
            }
        }

        let pipeline = Pipeline::new(Config::default()).with_generator(Box::new(FixedGenerator));
        let mut rng = StdRng::seed_from_u64(3);
        let result = pipeline.run(&job(), &profile(), RESUME, &mut rng);

        assert!(result.success);
        assert_eq!(result.content_hash.as_deref(), Some("abc123"));
        assert_eq!(result.tailoring_stats.added, 3);
        assert!(result.tailored_resume.starts_with("UNIQUE"));
    }

    #[test]
    fn test_timings_are_reported() {
        let pipeline = Pipeline::new(Config::default());
        let mut rng = StdRng::seed_from_u64(3);
        let result = pipeline.run(&job(), &profile(), RESUME, &mut rng);

        let t = result.timings;
        assert!(t.total_ms >= t.extraction_ms.max(t.tailoring_ms).max(t.distribution_ms));
        // the flag must agree with the measured total, whatever the machine did
        assert_eq!(
            t.within_target,
            t.total_ms <= Config::default().pipeline.target_latency_ms
        );
    }

    #[test]
    fn test_stats_invariants_after_run() {
        let pipeline = Pipeline::new(Config::default());
        let mut rng = StdRng::seed_from_u64(3);
        let result = pipeline.run(&job(), &profile(), RESUME, &mut rng);

        let s = result.tailoring_stats;
        assert_eq!(s.already_present + s.added + s.missing, s.total);
        let d = result.distribution_stats;
        assert_eq!(d.already_present + d.added + d.missing, d.total);
    }
}
