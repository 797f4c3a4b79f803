//! Explicit registry of pinned sections and the one-shot snap installer
//!
//! Each pinned section registers its [`PinnedTrigger`] under a stable key when
//! it mounts and deregisters when it unmounts. The registry knows how many
//! sections the page declares, so readiness is a counted barrier rather than
//! a guess. [`SnapCoordinator`] derives the [`SnapRule`] exactly once, either
//! when the barrier opens or when the settling timer forces it.

use std::collections::BTreeMap;

use super::snap::{PinnedTrigger, SnapRule};

/// Delay after mount before the snap rule is installed regardless of readiness (ms)
pub const SNAP_SETTLE_DELAY_MS: u32 = 800;

/// Registered pinned sections, keyed by section id
#[derive(Debug, Clone, Default)]
pub struct PinRegistry {
    expected: usize,
    pins: BTreeMap<String, PinnedTrigger>,
}

impl PinRegistry {
    /// Create a registry expecting `expected` distinct sections.
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            pins: BTreeMap::new(),
        }
    }

    /// Register or re-measure a section. Returns `true` if the key is new.
    pub fn register(&mut self, key: impl Into<String>, trigger: PinnedTrigger) -> bool {
        self.pins.insert(key.into(), trigger).is_none()
    }

    pub fn deregister(&mut self, key: &str) -> Option<PinnedTrigger> {
        self.pins.remove(key)
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    /// All expected sections have registered.
    pub fn is_ready(&self) -> bool {
        self.pins.len() >= self.expected
    }

    /// Snapshot of registered triggers in document order.
    pub fn triggers(&self) -> Vec<PinnedTrigger> {
        let mut triggers: Vec<_> = self.pins.values().copied().collect();
        triggers.sort_by_key(|t| t.order);
        triggers
    }
}

/// Installation state of the snap rule
#[derive(Debug, Clone, PartialEq)]
pub enum InstallState {
    /// Waiting for sections to register
    Pending,
    /// Derivation ran; `None` means the page had nothing to snap to
    Installed(Option<SnapRule>),
}

/// Owns the registry and installs the snap rule once.
#[derive(Debug, Clone)]
pub struct SnapCoordinator {
    registry: PinRegistry,
    state: InstallState,
}

impl SnapCoordinator {
    pub fn new(expected_sections: usize) -> Self {
        Self {
            registry: PinRegistry::new(expected_sections),
            state: InstallState::Pending,
        }
    }

    pub fn registry(&self) -> &PinRegistry {
        &self.registry
    }

    pub fn register(&mut self, key: impl Into<String>, trigger: PinnedTrigger) -> bool {
        self.registry.register(key, trigger)
    }

    pub fn deregister(&mut self, key: &str) -> Option<PinnedTrigger> {
        self.registry.deregister(key)
    }

    pub fn state(&self) -> &InstallState {
        &self.state
    }

    pub fn is_installed(&self) -> bool {
        matches!(self.state, InstallState::Installed(_))
    }

    /// Whether a call to [`try_install`](Self::try_install) would derive now.
    pub fn should_install(&self, force: bool) -> bool {
        !self.is_installed() && (force || self.registry.is_ready())
    }

    /// Derive and install the snap rule if it has not been installed yet.
    ///
    /// Runs when every expected section has registered, or when `force` is
    /// set. Once installed, later calls never re-derive, even if sections
    /// register afterwards. Returns the installed rule, if any.
    pub fn try_install(&mut self, max_scroll: f64, force: bool) -> Option<&SnapRule> {
        if self.should_install(force) {
            let rule = SnapRule::from_triggers(&self.registry.triggers(), max_scroll);
            self.state = InstallState::Installed(rule);
        }
        self.rule()
    }

    pub fn rule(&self) -> Option<&SnapRule> {
        match &self.state {
            InstallState::Installed(rule) => rule.as_ref(),
            InstallState::Pending => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_readiness_barrier() {
        let mut registry = PinRegistry::new(2);
        assert!(!registry.is_ready());

        assert!(registry.register("hero", PinnedTrigger::new(0, 0.0, Some(800.0))));
        assert!(!registry.is_ready());

        // Re-measuring the same section does not count twice
        assert!(!registry.register("hero", PinnedTrigger::new(0, 0.0, Some(820.0))));
        assert!(!registry.is_ready());

        assert!(registry.register("plans", PinnedTrigger::new(2, 3000.0, Some(3800.0))));
        assert!(registry.is_ready());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_deregister() {
        let mut registry = PinRegistry::new(1);
        registry.register("process", PinnedTrigger::new(1, 1600.0, Some(2400.0)));

        let removed = registry.deregister("process");
        assert_eq!(removed.map(|t| t.start), Some(1600.0));
        assert!(registry.is_empty());
        assert!(registry.deregister("process").is_none());
    }

    #[test]
    fn test_registry_triggers_in_document_order() {
        let mut registry = PinRegistry::new(3);
        registry.register("plans", PinnedTrigger::new(2, 3000.0, None));
        registry.register("hero", PinnedTrigger::new(0, 0.0, None));
        registry.register("process", PinnedTrigger::new(1, 1600.0, None));

        let orders: Vec<_> = registry.triggers().iter().map(|t| t.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_coordinator_waits_for_barrier() {
        let mut coordinator = SnapCoordinator::new(2);
        coordinator.register("hero", PinnedTrigger::new(0, 0.0, Some(800.0)));

        assert!(coordinator.try_install(4000.0, false).is_none());
        assert_eq!(coordinator.state(), &InstallState::Pending);

        coordinator.register("plans", PinnedTrigger::new(1, 2400.0, Some(3200.0)));
        let rule = coordinator.try_install(4000.0, false);
        assert_eq!(rule.map(|r| r.regions().len()), Some(2));
    }

    #[test]
    fn test_coordinator_installs_once() {
        let mut coordinator = SnapCoordinator::new(1);
        coordinator.register("hero", PinnedTrigger::new(0, 0.0, Some(1000.0)));
        coordinator.try_install(2000.0, false);

        // A late registration is ignored once installed
        coordinator.register("late", PinnedTrigger::new(1, 1500.0, Some(1800.0)));
        let rule = coordinator.try_install(2000.0, true).unwrap();
        assert_eq!(rule.regions().len(), 1);
        assert!(!coordinator.should_install(true));
    }

    #[test]
    fn test_forced_install_with_incomplete_registration() {
        let mut coordinator = SnapCoordinator::new(3);
        coordinator.register("hero", PinnedTrigger::new(0, 0.0, Some(900.0)));

        let rule = coordinator.try_install(3000.0, true);
        assert_eq!(rule.map(|r| r.regions().len()), Some(1));
    }

    #[test]
    fn test_degenerate_page_installs_nothing() {
        let mut coordinator = SnapCoordinator::new(0);
        assert!(coordinator.try_install(0.0, false).is_none());
        assert!(coordinator.is_installed());
        assert_eq!(coordinator.state(), &InstallState::Installed(None));

        let mut coordinator = SnapCoordinator::new(1);
        coordinator.register("hero", PinnedTrigger::new(0, 0.0, Some(600.0)));
        assert!(coordinator.try_install(0.0, false).is_none());
        assert!(coordinator.is_installed());
    }
}
