//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after ordering, before stopping the chain, Reply ending the handle phase
//! and reaching `after`, and Continue passing through.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use dbot_core::{Chat, Handler, HandlerResponse, Message, User};
use handler_chain::HandlerChain;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        message_type: "text".to_string(),
        created_at: Utc::now(),
    }
}

/// Records every phase it sees into a shared log.
struct OrderHandler {
    name: &'static str,
    response: HandlerResponse,
    order: Arc<Mutex<Vec<String>>>,
}

impl OrderHandler {
    fn new(name: &'static str, response: HandlerResponse, order: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            response,
            order,
        }
    }
}

#[async_trait::async_trait]
impl Handler for OrderHandler {
    async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
        self.order.lock().unwrap().push(format!("before_{}", self.name));
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
        self.order.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, _response: &HandlerResponse) -> dbot_core::Result<()> {
        self.order.lock().unwrap().push(format!("after_{}", self.name));
        Ok(())
    }
}

#[tokio::test]
async fn test_phases_run_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler::new("first", HandlerResponse::Continue, order.clone())))
        .add_handler(Arc::new(OrderHandler::new("second", HandlerResponse::Continue, order.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(
        *order.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "handle_first",
            "handle_second",
            "after_second",
            "after_first"
        ]
    );
}

#[tokio::test]
async fn test_reply_ends_handle_phase_and_reaches_after() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::new(Mutex::new(None));

    struct CaptureHandler {
        seen: Arc<Mutex<Option<HandlerResponse>>>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureHandler {
        async fn after(&self, _message: &Message, response: &HandlerResponse) -> dbot_core::Result<()> {
            *self.seen.lock().unwrap() = Some(response.clone());
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureHandler { seen: seen.clone() }))
        .add_handler(Arc::new(OrderHandler::new(
            "reply",
            HandlerResponse::Reply("report".to_string()),
            order.clone(),
        )))
        .add_handler(Arc::new(OrderHandler::new("never", HandlerResponse::Continue, order.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("report".to_string()));
    assert_eq!(*seen.lock().unwrap(), Some(HandlerResponse::Reply("report".to_string())));
    assert!(!order.lock().unwrap().contains(&"handle_never".to_string()));
}

#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> dbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait::async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> dbot_core::Result<HandlerResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerResponse::Continue)
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler(handle_count.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain.handle(&create_test_message("test")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}
