#[cfg(test)]
mod tests {
    use crate::client::ChatClient;
    use crate::event_bus::EventBus;
    use crate::ports::*;
    use crate::session::{load_or_create_session_id, SESSION_STORAGE_KEY};
    use async_trait::async_trait;
    use nuralance_types::api::{ChatResult, UploadResult};
    use nuralance_types::event::ClientEvent;
    use nuralance_types::ClientError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    // ─── EventBus Tests ──────────────────────────────────────

    #[test]
    fn test_event_bus_new_is_empty() {
        let bus = EventBus::new();
        assert!(!bus.has_pending());
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_emit_and_drain() {
        let bus = EventBus::new();
        bus.emit(ClientEvent::UploadStarted);
        bus.emit(ClientEvent::ChatStarted);

        assert!(bus.has_pending());

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(!bus.has_pending());
    }

    #[test]
    fn test_event_bus_drain_empties() {
        let bus = EventBus::new();
        bus.emit(ClientEvent::UploadStarted);
        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_event_bus_clone_shares_state() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        bus1.emit(ClientEvent::ChatStarted);
        assert!(bus2.has_pending());

        let events = bus2.drain();
        assert_eq!(events.len(), 1);
        assert!(!bus1.has_pending());
    }

    // ─── Mock collaborators ──────────────────────────────────

    /// In-memory session store recording how often keys are written.
    struct MockStore {
        data: RefCell<HashMap<String, String>>,
        set_count: RefCell<usize>,
    }

    impl MockStore {
        fn new() -> Self {
            Self {
                data: RefCell::new(HashMap::new()),
                set_count: RefCell::new(0),
            }
        }
    }

    impl SessionStorePort for MockStore {
        fn get(&self, key: &str) -> nuralance_types::Result<Option<String>> {
            Ok(self.data.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> nuralance_types::Result<()> {
            *self.set_count.borrow_mut() += 1;
            self.data
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn backend_name(&self) -> &str {
            "mock"
        }
    }

    /// What the mock backend saw, for asserting on request contents.
    #[derive(Default)]
    struct RecordedCalls {
        uploads: Vec<(String, String, usize)>,
        messages: Vec<(String, String)>,
    }

    /// Mock backend returning canned responses.
    struct MockBackend {
        calls: RefCell<RecordedCalls>,
        upload_response: nuralance_types::Result<UploadResult>,
        chat_response: nuralance_types::Result<ChatResult>,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                calls: RefCell::new(RecordedCalls::default()),
                upload_response: Ok(UploadResult {
                    db_description: "3 columns: date, amount, category".to_string(),
                }),
                chat_response: Ok(ChatResult {
                    response: "**Total:** $120".to_string(),
                }),
            }
        }

        fn failing_upload(detail: &str) -> Self {
            let mut backend = Self::new();
            backend.upload_response = Err(ClientError::Server {
                status: 400,
                detail: detail.to_string(),
            });
            backend
        }

        fn failing_chat(err: ClientError) -> Self {
            let mut backend = Self::new();
            backend.chat_response = Err(err);
            backend
        }
    }

    #[async_trait(?Send)]
    impl BackendPort for MockBackend {
        async fn upload_csv(
            &self,
            session_id: &str,
            file_name: &str,
            bytes: &[u8],
        ) -> nuralance_types::Result<UploadResult> {
            self.calls.borrow_mut().uploads.push((
                session_id.to_string(),
                file_name.to_string(),
                bytes.len(),
            ));
            self.upload_response.clone()
        }

        async fn send_message(
            &self,
            session_id: &str,
            message: &str,
        ) -> nuralance_types::Result<ChatResult> {
            self.calls
                .borrow_mut()
                .messages
                .push((session_id.to_string(), message.to_string()));
            self.chat_response.clone()
        }
    }

    // Simple single-threaded executor for async tests (not in WASM here).
    fn block_on<F: std::future::Future<Output = T>, T>(f: F) -> T {
        use std::sync::Arc;
        use std::task::{Context, Poll, Wake, Waker};

        struct NoopWaker;
        impl Wake for NoopWaker {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWaker));
        let mut cx = Context::from_waker(&waker);
        let mut f = std::pin::pin!(f);

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(val) => return val,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    fn client_with(backend: Rc<MockBackend>) -> (ChatClient, EventBus) {
        let client = ChatClient::new("session_test1".to_string(), backend, EventBus::new());
        // The client's accessor hands out the shared bus the UI drains.
        let bus = client.events().clone();
        (client, bus)
    }

    // ─── Session Bootstrap Tests ─────────────────────────────

    #[test]
    fn test_session_created_once() {
        let store = MockStore::new();
        let first = load_or_create_session_id(&store).unwrap();
        let second = load_or_create_session_id(&store).unwrap();

        assert_eq!(first, second);
        assert_eq!(*store.set_count.borrow(), 1);
    }

    #[test]
    fn test_session_id_format() {
        let store = MockStore::new();
        let id = load_or_create_session_id(&store).unwrap();
        assert!(id.starts_with("session_"));
        assert!(id.len() > "session_".len() + 7);
    }

    #[test]
    fn test_session_persisted_under_expected_key() {
        let store = MockStore::new();
        let id = load_or_create_session_id(&store).unwrap();
        assert_eq!(store.get(SESSION_STORAGE_KEY).unwrap(), Some(id));
        assert_eq!(SESSION_STORAGE_KEY, "nuralance_session_id");
    }

    #[test]
    fn test_session_reuses_stored_value() {
        let store = MockStore::new();
        store.set(SESSION_STORAGE_KEY, "session_existing").unwrap();
        let id = load_or_create_session_id(&store).unwrap();
        assert_eq!(id, "session_existing");
        // Only the seeding write, no new identifier.
        assert_eq!(*store.set_count.borrow(), 1);
    }

    #[test]
    fn test_fresh_stores_get_distinct_ids() {
        let a = load_or_create_session_id(&MockStore::new()).unwrap();
        let b = load_or_create_session_id(&MockStore::new()).unwrap();
        assert_ne!(a, b);
    }

    // ─── Upload Operation Tests ──────────────────────────────

    #[test]
    fn test_upload_success_emits_description() {
        let backend = Rc::new(MockBackend::new());
        let (client, bus) = client_with(backend.clone());

        block_on(client.upload_csv("finance.csv", b"date,amount\n")).unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ClientEvent::UploadStarted));
        if let ClientEvent::UploadComplete { db_description } = &events[1] {
            assert_eq!(db_description, "3 columns: date, amount, category");
        } else {
            panic!("Expected UploadComplete, got {:?}", events[1]);
        }

        let calls = backend.calls.borrow();
        assert_eq!(calls.uploads.len(), 1);
        assert_eq!(calls.uploads[0].0, "session_test1");
        assert_eq!(calls.uploads[0].1, "finance.csv");
        assert_eq!(calls.uploads[0].2, b"date,amount\n".len());
    }

    #[test]
    fn test_upload_failure_surfaces_server_detail() {
        let backend = Rc::new(MockBackend::failing_upload("Invalid CSV"));
        let (client, bus) = client_with(backend);

        let result = block_on(client.upload_csv("finance.csv", b"x"));
        assert!(result.is_err());

        let events = bus.drain();
        assert!(matches!(events[0], ClientEvent::UploadStarted));
        if let ClientEvent::UploadFailed { detail } = &events[1] {
            assert_eq!(detail, "Invalid CSV");
        } else {
            panic!("Expected UploadFailed, got {:?}", events[1]);
        }
    }

    // ─── Send-Message Operation Tests ────────────────────────

    #[test]
    fn test_send_message_success() {
        let backend = Rc::new(MockBackend::new());
        let (client, bus) = client_with(backend.clone());

        block_on(client.send_message("What's my total spend?")).unwrap();

        let events = bus.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ClientEvent::ChatStarted));
        if let ClientEvent::ChatComplete { response } = &events[1] {
            assert_eq!(response, "**Total:** $120");
        } else {
            panic!("Expected ChatComplete, got {:?}", events[1]);
        }

        let calls = backend.calls.borrow();
        assert_eq!(
            calls.messages,
            vec![(
                "session_test1".to_string(),
                "What's my total spend?".to_string()
            )]
        );
    }

    #[test]
    fn test_send_message_trims_input() {
        let backend = Rc::new(MockBackend::new());
        let (client, _bus) = client_with(backend.clone());

        block_on(client.send_message("  hello  ")).unwrap();

        assert_eq!(backend.calls.borrow().messages[0].1, "hello");
    }

    #[test]
    fn test_send_empty_message_is_noop() {
        let backend = Rc::new(MockBackend::new());
        let (client, bus) = client_with(backend.clone());

        block_on(client.send_message("")).unwrap();
        block_on(client.send_message("   \n\t ")).unwrap();

        assert!(bus.drain().is_empty());
        assert!(backend.calls.borrow().messages.is_empty());
    }

    #[test]
    fn test_send_message_network_failure() {
        let backend = Rc::new(MockBackend::failing_chat(ClientError::Network(
            "connection refused".to_string(),
        )));
        let (client, bus) = client_with(backend);

        let result = block_on(client.send_message("hi"));
        assert!(result.is_err());

        let events = bus.drain();
        if let ClientEvent::ChatFailed { detail } = &events[1] {
            assert_eq!(detail, "Network error: connection refused");
        } else {
            panic!("Expected ChatFailed, got {:?}", events[1]);
        }
    }

    #[test]
    fn test_session_id_unchanged_across_requests() {
        let backend = Rc::new(MockBackend::new());
        let (client, _bus) = client_with(backend.clone());

        block_on(client.upload_csv("a.csv", b"a")).unwrap();
        block_on(client.send_message("one")).unwrap();
        block_on(client.send_message("two")).unwrap();

        let calls = backend.calls.borrow();
        assert!(calls.uploads.iter().all(|(sid, _, _)| sid == "session_test1"));
        assert!(calls.messages.iter().all(|(sid, _)| sid == "session_test1"));
    }
}
