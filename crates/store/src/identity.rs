use tokio::sync::watch;

use crate::ResultStore;

/// Authentication collaborator.
///
/// A user identifier is an opaque stable string (an email address in
/// practice). Sign-in state changes are broadcast on a watch channel so the
/// application can reload its working set whenever the session flips.
pub trait Identity {
    /// The currently signed-in user, if any.
    fn current_user(&self) -> Option<String>;

    /// Subscribes to sign-in state changes. The receiver yields the new
    /// `Some(user)` / `None` value on every transition.
    fn watch(&self) -> watch::Receiver<Option<String>>;

    /// Registers a new account and signs it in.
    async fn sign_up(&self, email: &str, password: &str) -> ResultStore<String>;

    /// Signs an existing account in.
    async fn sign_in(&self, email: &str, password: &str) -> ResultStore<String>;

    /// Ends the current session. Signing out while signed out is a no-op.
    async fn sign_out(&self);
}
