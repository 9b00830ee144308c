use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};
use serde_json::Value;

use crate::config::ViewConfig;
use crate::content::filter::RuleList;
use crate::content::listener::{CompletionListener, ReplyReceiver};
use crate::content::message::{FrameInfo, PageId, ScriptMessage};
use crate::content::script::UserScript;
use crate::content::world::{ContentWorld, ContentWorldId};
use crate::errors::RegistrationError;

/// Host-side target of script message deliveries.
///
/// `did_post_message` is fire-and-forget from the bridge's perspective: it
/// must return promptly, and the reply (if any) travels through the listener
/// later.
pub trait ScriptMessageClient: Send + Sync {
    fn did_post_message(&self, message: ScriptMessage, listener: CompletionListener);
}

struct HandlerRegistration {
    world: ContentWorldId,
    client: Arc<dyn ScriptMessageClient>,
}

/// Controls the content injected into pages rendered under a view: user
/// scripts, content-filter rule lists, and named script-message handlers.
///
/// Calls must be serialized by the owning thread; message delivery may come
/// from another execution context, but deliveries never share a listener.
pub struct UserContentController {
    world: ContentWorld,
    handlers: HashMap<String, HandlerRegistration>,
    user_scripts: Vec<UserScript>,
    rule_lists: Vec<RuleList>,
    /// Content filtering capability, resolved once at construction.
    content_filtering: bool,
}

impl UserContentController {
    pub fn new(world: ContentWorld, config: &ViewConfig) -> Self {
        Self {
            world,
            handlers: HashMap::new(),
            user_scripts: Vec::new(),
            rule_lists: Vec::new(),
            content_filtering: config.content_filtering,
        }
    }

    pub fn world(&self) -> &ContentWorld {
        &self.world
    }

    pub fn add_user_script(&mut self, script: UserScript) {
        self.user_scripts.push(script);
    }

    pub fn user_scripts(&self) -> &[UserScript] {
        &self.user_scripts
    }

    pub fn remove_all_user_scripts(&mut self) {
        self.user_scripts.clear();
    }

    /// Activate a content-filter rule list. A no-op when the content
    /// filtering capability is unavailable, keeping the host-facing surface
    /// stable across configurations.
    pub fn add_rule_list(&mut self, list: RuleList) {
        if !self.content_filtering {
            debug!("content filtering unavailable, ignoring rule list {:?}", list.identifier);
            return;
        }
        self.rule_lists.push(list);
    }

    pub fn rule_lists(&self) -> &[RuleList] {
        &self.rule_lists
    }

    /// Deactivate every rule list. A no-op without the capability.
    pub fn remove_all_rule_lists(&mut self) {
        if !self.content_filtering {
            return;
        }
        self.rule_lists.clear();
    }

    /// Register `client` under `name` in this controller's world. A name can
    /// only be registered once; a duplicate is rejected and the existing
    /// registration stays active.
    pub fn register_handler(
        &mut self,
        name: impl Into<String>,
        client: Arc<dyn ScriptMessageClient>,
    ) -> Result<(), RegistrationError> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(RegistrationError::DuplicateHandler(name));
        }

        debug!("registered script message handler {name:?}");
        self.handlers.insert(
            name,
            HandlerRegistration {
                world: self.world.id(),
                client,
            },
        );
        Ok(())
    }

    /// Unregister every handler. Individual removal is deliberately not
    /// exposed. A delivery already in flight keeps the client it captured
    /// and completes; removal only prevents new deliveries.
    pub fn remove_all_handlers(&mut self) {
        debug!("removing all {} script message handlers", self.handlers.len());
        self.handlers.clear();
    }

    /// Inbound message delivery, invoked by the content engine.
    ///
    /// Builds the [`ScriptMessage`], pairs it with a fresh one-shot
    /// [`CompletionListener`], and invokes the registered client. Returns
    /// the receiving half of the reply channel for the engine side to await,
    /// or `None` when no handler is registered under `name` (nothing is
    /// invoked).
    pub fn did_post_message(
        &self,
        name: &str,
        page: PageId,
        frame: FrameInfo,
        value: Value,
    ) -> Option<ReplyReceiver> {
        let Some(registration) = self.handlers.get(name) else {
            debug!("script message for unregistered handler {name:?} dropped");
            return None;
        };

        let message = ScriptMessage {
            value,
            page,
            frame,
            name: name.to_string(),
            world: registration.world,
        };
        let (listener, receiver) = CompletionListener::channel();

        // The clone keeps the client alive for this delivery even if
        // remove_all_handlers runs before the host replies.
        let client = registration.client.clone();
        trace!("delivering script message to handler {name:?}");
        client.did_post_message(message, listener);

        Some(receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReplyError;
    use crate::value::RawScriptValue;
    use serde_json::json;
    use std::sync::Mutex;

    /// Client that records what it saw and replies with a fixed value.
    struct PingClient {
        seen: Mutex<Vec<ScriptMessage>>,
    }

    impl PingClient {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl ScriptMessageClient for PingClient {
        fn did_post_message(&self, message: ScriptMessage, listener: CompletionListener) {
            self.seen.lock().unwrap().push(message);
            listener.resolve(Some(RawScriptValue::from(json!("pong"))));
        }
    }

    /// Client that stashes the listener instead of resolving it.
    struct StashingClient {
        stash: Mutex<Option<CompletionListener>>,
    }

    impl ScriptMessageClient for StashingClient {
        fn did_post_message(&self, _message: ScriptMessage, listener: CompletionListener) {
            *self.stash.lock().unwrap() = Some(listener);
        }
    }

    fn controller() -> UserContentController {
        UserContentController::new(ContentWorld::page(), &ViewConfig::default())
    }

    #[test]
    fn duplicate_registration_is_rejected_and_first_stays_active() {
        let mut controller = controller();
        let first = PingClient::new();
        let second = PingClient::new();

        controller.register_handler("ping", first.clone()).unwrap();
        let err = controller.register_handler("ping", second).unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateHandler(name) if name == "ping"));

        let receiver = controller.did_post_message(
            "ping",
            PageId::new(),
            FrameInfo::main_frame(None),
            json!(1),
        );
        assert!(receiver.is_some());
        assert_eq!(first.seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn remove_all_prevents_new_deliveries() {
        let mut controller = controller();
        let client = PingClient::new();
        controller.register_handler("ping", client.clone()).unwrap();
        controller.remove_all_handlers();

        let receiver = controller.did_post_message(
            "ping",
            PageId::new(),
            FrameInfo::main_frame(None),
            json!(1),
        );
        assert!(receiver.is_none());
        assert!(client.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ping_message_round_trips_to_pong() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut controller = controller();
        let client = PingClient::new();
        controller.register_handler("ping", client.clone()).unwrap();

        let page = PageId::new();
        let frame = FrameInfo::main_frame(Some("https://example.com/".parse().unwrap()));
        let receiver = controller
            .did_post_message("ping", page, frame.clone(), json!({"type": "ping"}))
            .unwrap();

        assert_eq!(receiver.outcome().await, Ok(json!("pong")));

        let seen = client.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "ping");
        assert_eq!(seen[0].page, page);
        assert_eq!(seen[0].frame, frame);
        assert_eq!(seen[0].world, controller.world().id());
        assert_eq!(seen[0].value, json!({"type": "ping"}));
    }

    #[tokio::test]
    async fn in_flight_delivery_survives_remove_all() {
        let mut controller = controller();
        let client = Arc::new(StashingClient {
            stash: Mutex::new(None),
        });
        controller.register_handler("late", client.clone()).unwrap();

        let receiver = controller
            .did_post_message("late", PageId::new(), FrameInfo::main_frame(None), json!(null))
            .unwrap();

        controller.remove_all_handlers();

        let listener = client.stash.lock().unwrap().take().unwrap();
        listener.resolve(Some(RawScriptValue::from(json!(42))));
        assert_eq!(receiver.outcome().await, Ok(json!(42)));
    }

    #[tokio::test]
    async fn handler_that_drops_the_listener_fails_the_delivery() {
        let mut controller = controller();
        let client = Arc::new(StashingClient {
            stash: Mutex::new(None),
        });
        controller.register_handler("drop", client.clone()).unwrap();

        let receiver = controller
            .did_post_message("drop", PageId::new(), FrameInfo::main_frame(None), json!(null))
            .unwrap();

        client.stash.lock().unwrap().take();
        assert_eq!(receiver.outcome().await, Err(ReplyError::Dropped));
    }

    #[test]
    fn rule_lists_are_noops_without_the_capability() {
        let config = ViewConfig {
            content_filtering: false,
            ..ViewConfig::default()
        };
        let mut controller = UserContentController::new(ContentWorld::page(), &config);

        controller.add_rule_list(RuleList::new("ads"));
        assert!(controller.rule_lists().is_empty());
        controller.remove_all_rule_lists();
        assert!(controller.rule_lists().is_empty());
    }

    #[test]
    fn rule_lists_are_tracked_with_the_capability() {
        let mut controller = controller();
        controller.add_rule_list(RuleList::new("ads"));
        controller.add_rule_list(RuleList::new("trackers"));
        assert_eq!(controller.rule_lists().len(), 2);

        controller.remove_all_rule_lists();
        assert!(controller.rule_lists().is_empty());
    }

    #[test]
    fn user_script_bookkeeping() {
        use crate::content::script::{InjectionTime, UserScript};

        let mut controller = controller();
        let world = controller.world().id();
        controller.add_user_script(UserScript::new(
            "console.log('hi')",
            InjectionTime::DocumentStart,
            world,
        ));
        assert_eq!(controller.user_scripts().len(), 1);

        controller.remove_all_user_scripts();
        assert!(controller.user_scripts().is_empty());
    }
}
