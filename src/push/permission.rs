use crate::models::push::{PermissionState, PushEnvelope};

#[derive(Debug, thiserror::Error)]
#[error("platform delivery failed: {0}")]
pub struct PlatformError(pub String);

/// Seam to the host platform's notification capability. Implementations
/// wrap whatever the embedding shell provides; tests use an in-memory
/// double.
pub trait NotificationPlatform: Send + Sync {
    /// Feature detection. `false` means notifications can never be shown
    /// this session.
    fn is_supported(&self) -> bool;

    /// Permission as reported by the platform at session start.
    fn initial_permission(&self) -> PermissionState;

    /// Prompts the user for permission. Only ever called from the
    /// `Default` state.
    fn prompt_permission(&self) -> PermissionState;

    /// Shows a notification directly. Showing an envelope whose tag is
    /// already on screen replaces the visible notification.
    fn show(&self, envelope: &PushEnvelope) -> Result<(), PlatformError>;

    /// Delivers an envelope through the background worker. Fire-and-forget;
    /// no acknowledgment.
    fn show_from_worker(&self, envelope: &PushEnvelope);

    /// Brings the host window to the foreground.
    fn focus_window(&self);

    /// Dismisses a visible notification by tag.
    fn dismiss(&self, tag: &str);
}

/// Tracks local push authorization. Constructed once per session and
/// threaded through to whoever dispatches; there is no ambient global
/// permission read anywhere else.
#[derive(Debug)]
pub struct PermissionStateManager {
    state: PermissionState,
}

impl PermissionStateManager {
    /// Feature detection happens here, once.
    pub fn new(platform: &dyn NotificationPlatform) -> Self {
        let state = if platform.is_supported() {
            platform.initial_permission()
        } else {
            PermissionState::Unsupported
        };

        Self { state }
    }

    pub fn current(&self) -> PermissionState {
        self.state
    }

    /// The only transition function. `Granted`, `Denied` and `Unsupported`
    /// are absorbing: the platform is not re-prompted and the current state
    /// is returned as-is.
    pub fn request_permission(&mut self, platform: &dyn NotificationPlatform) -> PermissionState {
        if self.state == PermissionState::Default {
            self.state = platform.prompt_permission();
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FakePlatform {
        supported: bool,
        initial: PermissionState,
        prompt_result: PermissionState,
        prompt_calls: Mutex<u32>,
    }

    impl FakePlatform {
        fn new(supported: bool, initial: PermissionState, prompt_result: PermissionState) -> Self {
            Self {
                supported,
                initial,
                prompt_result,
                prompt_calls: Mutex::new(0),
            }
        }

        fn prompts(&self) -> u32 {
            *self.prompt_calls.lock().unwrap()
        }
    }

    impl NotificationPlatform for FakePlatform {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn initial_permission(&self) -> PermissionState {
            self.initial
        }

        fn prompt_permission(&self) -> PermissionState {
            *self.prompt_calls.lock().unwrap() += 1;
            self.prompt_result
        }

        fn show(&self, _envelope: &PushEnvelope) -> Result<(), PlatformError> {
            Ok(())
        }

        fn show_from_worker(&self, _envelope: &PushEnvelope) {}

        fn focus_window(&self) {}

        fn dismiss(&self, _tag: &str) {}
    }

    #[test]
    fn unsupported_platform_is_terminal() {
        let platform = FakePlatform::new(false, PermissionState::Default, PermissionState::Granted);
        let mut manager = PermissionStateManager::new(&platform);

        assert_eq!(manager.current(), PermissionState::Unsupported);
        assert_eq!(manager.request_permission(&platform), PermissionState::Unsupported);
        assert_eq!(platform.prompts(), 0);
    }

    #[test]
    fn default_transitions_on_request() {
        let platform = FakePlatform::new(true, PermissionState::Default, PermissionState::Granted);
        let mut manager = PermissionStateManager::new(&platform);

        assert_eq!(manager.current(), PermissionState::Default);
        assert_eq!(manager.request_permission(&platform), PermissionState::Granted);
        assert_eq!(manager.current(), PermissionState::Granted);
    }

    #[test]
    fn request_is_idempotent_once_settled() {
        let platform = FakePlatform::new(true, PermissionState::Default, PermissionState::Granted);
        let mut manager = PermissionStateManager::new(&platform);

        manager.request_permission(&platform);
        manager.request_permission(&platform);
        manager.request_permission(&platform);

        assert_eq!(platform.prompts(), 1);
        assert_eq!(manager.current(), PermissionState::Granted);
    }

    #[test]
    fn denied_is_terminal_without_reprompt() {
        let platform = FakePlatform::new(true, PermissionState::Denied, PermissionState::Granted);
        let mut manager = PermissionStateManager::new(&platform);

        assert_eq!(manager.request_permission(&platform), PermissionState::Denied);
        assert_eq!(platform.prompts(), 0);
    }

    #[test]
    fn dismissed_prompt_stays_default() {
        let platform = FakePlatform::new(true, PermissionState::Default, PermissionState::Default);
        let mut manager = PermissionStateManager::new(&platform);

        assert_eq!(manager.request_permission(&platform), PermissionState::Default);
        assert_eq!(manager.request_permission(&platform), PermissionState::Default);
        assert_eq!(platform.prompts(), 2);
    }
}
