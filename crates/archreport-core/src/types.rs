use serde::{Deserialize, Serialize};

/// One normalized rule violation, as persisted in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    pub origin: String,
    pub target: String,
    pub description: String,
}

impl ViolationRecord {
    pub fn new(
        origin: impl Into<String>,
        target: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            target: target.into(),
            description: description.into(),
        }
    }
}

/// All violations found for one named rule in one evaluation run.
///
/// Violations keep discovery order and are never de-duplicated. The rule
/// name is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResult {
    rule: String,
    violations: Vec<ViolationRecord>,
    /// Diagnostic messages delivered alongside each violation batch.
    /// Kept for logging and output only; never written to the report.
    #[serde(skip)]
    messages: Vec<String>,
}

// Equality covers exported content only.
impl PartialEq for RuleResult {
    fn eq(&self, other: &Self) -> bool {
        self.rule == other.rule && self.violations == other.violations
    }
}

impl Eq for RuleResult {}

impl RuleResult {
    /// Start an empty result for `rule`. Callers must supply a non-empty name.
    pub fn new(rule: impl Into<String>) -> Self {
        let rule = rule.into();
        debug_assert!(!rule.is_empty(), "rule name must not be empty");
        Self {
            rule,
            violations: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn violations(&self) -> &[ViolationRecord] {
        &self.violations
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn add_violation(&mut self, record: ViolationRecord) {
        self.violations.push(record);
    }

    pub fn record_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

/// The full report document: one [`RuleResult`] per distinct rule name,
/// in the order rules were first exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    results: Vec<RuleResult>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously persisted results. Uniqueness of rule names is not
    /// checked here; it is maintained by [`ResultSet::insert_result`].
    pub fn from_results(results: Vec<RuleResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<RuleResult> {
        self.results
    }

    pub(crate) fn results_mut(&mut self) -> &mut Vec<RuleResult> {
        &mut self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleResult> {
        self.results.iter()
    }

    /// Look up the result for an exact (case-sensitive) rule name.
    pub fn get(&self, rule: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }

    /// Rule names in document order.
    pub fn rules(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.rule.as_str()).collect()
    }

    pub fn total_violations(&self) -> usize {
        self.results.iter().map(RuleResult::len).sum()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RuleResult;
    type IntoIter = std::slice::Iter<'a, RuleResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
