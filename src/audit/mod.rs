/*!
 * Decision Audit Trail
 * Tracks managed evaluations and denials for security monitoring
 */

use crate::core::config::EngineConfig;
use crate::core::errors::PolicyResult;
use crate::core::limits::{MAX_AUDIT_EVENTS, MAX_AUDIT_EVENTS_PER_POLICY};
use crate::policy::Decision;
use crate::request::{Action, Resource, Subject};
use ahash::RandomState;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampMilliSeconds};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;
use uuid::Uuid;

/// Audit event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Info,
    Notice,
    Warning,
}

/// One audited evaluation
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuditEvent {
    pub event_id: Uuid,
    /// Policy that was evaluated
    pub policy_id: String,
    pub subject_id: String,
    pub resource_type: String,
    pub resource_id: String,
    pub action: String,
    pub decision: Decision,
    pub severity: AuditSeverity,
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub logged_at: SystemTime,
}

impl AuditEvent {
    pub fn new(
        policy_id: impl Into<String>,
        subject: &dyn Subject,
        resource: &dyn Resource,
        action: &dyn Action,
        decision: Decision,
    ) -> Self {
        let severity = if decision.is_allowed() {
            AuditSeverity::Info
        } else if decision.is_matched() {
            AuditSeverity::Warning
        } else {
            // Fail-closed default, no rule applied
            AuditSeverity::Notice
        };

        Self {
            event_id: Uuid::new_v4(),
            policy_id: policy_id.into(),
            subject_id: subject.id().to_string(),
            resource_type: resource.resource_type().to_string(),
            resource_id: resource.id().to_string(),
            action: action.name().to_string(),
            decision,
            severity,
            logged_at: SystemTime::now(),
        }
    }

    pub fn with_severity(mut self, severity: AuditSeverity) -> Self {
        self.severity = severity;
        self
    }
}

/// Audit logger for policy decisions
pub struct AuditLogger {
    /// Global event log (ring buffer)
    events: parking_lot::RwLock<VecDeque<AuditEvent>>,
    /// Per-policy event logs
    policy_events: Arc<DashMap<String, VecDeque<AuditEvent>, RandomState>>,
    /// Denial counters per subject
    denial_counts: Arc<DashMap<String, u64, RandomState>>,
    capacity: usize,
    capacity_per_policy: usize,
}

impl AuditLogger {
    pub fn new() -> Self {
        Self::with_capacity(MAX_AUDIT_EVENTS, MAX_AUDIT_EVENTS_PER_POLICY)
    }

    /// Fails on a zero capacity instead of retaining nothing
    pub fn from_config(config: &EngineConfig) -> PolicyResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(
            config.audit_capacity,
            config.audit_capacity_per_policy,
        ))
    }

    /// Unchecked: capacities below one are raised to one
    pub fn with_capacity(capacity: usize, capacity_per_policy: usize) -> Self {
        let capacity = capacity.max(1);
        let capacity_per_policy = capacity_per_policy.max(1);
        Self {
            events: parking_lot::RwLock::new(VecDeque::with_capacity(capacity.min(1024))),
            policy_events: Arc::new(DashMap::with_hasher(RandomState::new())),
            denial_counts: Arc::new(DashMap::with_hasher(RandomState::new())),
            capacity,
            capacity_per_policy,
        }
    }

    /// Log an evaluation
    pub fn log(&self, event: AuditEvent) {
        let is_denied = !event.decision.is_allowed();
        let subject_id = event.subject_id.clone();
        let policy_id = event.policy_id.clone();

        // Add to global log
        {
            let mut events = self.events.write();
            if events.len() >= self.capacity {
                events.pop_front();
            }
            events.push_back(event.clone());
        }

        // Add to policy-specific log, trimming in the same entry guard
        {
            let mut entry = self.policy_events.entry(policy_id).or_default();
            entry.push_back(event);
            while entry.len() > self.capacity_per_policy {
                entry.pop_front();
            }
        }

        if is_denied {
            self.denial_counts
                .entry(subject_id)
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Most recent events first
    pub fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        let events = self.events.read();
        events.iter().rev().take(limit).cloned().collect()
    }

    /// Most recent events for one policy first
    pub fn for_policy(&self, policy_id: &str, limit: usize) -> Vec<AuditEvent> {
        if let Some(entry) = self.policy_events.get(policy_id) {
            entry.iter().rev().take(limit).cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn denial_count(&self, subject_id: &str) -> u64 {
        self.denial_counts.get(subject_id).map(|e| *e).unwrap_or(0)
    }

    pub fn subjects_with_denials(&self) -> Vec<(String, u64)> {
        self.denial_counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    pub fn clear_policy(&self, policy_id: &str) {
        self.policy_events.remove(policy_id);
    }

    pub fn clear_all(&self) {
        self.events.write().clear();
        self.policy_events.clear();
        self.denial_counts.clear();
    }

    /// Recent events as a JSON array, newest first
    pub fn export_json(&self, limit: usize) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.recent(limit))
    }

    pub fn stats(&self) -> AuditStats {
        let total_events = self.events.read().len();
        let total_denials: u64 = self.denial_counts.iter().map(|e| *e.value()).sum();
        let policies_tracked = self.policy_events.len();

        AuditStats {
            total_events,
            total_denials,
            policies_tracked,
        }
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// Audit statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_events: usize,
    pub total_denials: u64,
    pub policies_tracked: usize,
}
