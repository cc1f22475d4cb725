use candidate_rating::rating::RuleSet;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_rule_set(raw: &str) -> Result<RuleSet, String> {
    RuleSet::parse(raw)
        .ok_or_else(|| format!("unknown rule set '{raw}' (expected standard or sa-accounting)"))
}
