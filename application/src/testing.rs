//! In-memory port implementations shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::conversation_repository::{ConversationRepository, StorageError};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, ModelReply};
use crate::ports::view::ChatView;
use async_trait::async_trait;
use chatline_domain::{ConversationHistory, ConversationId, Message, Model};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Mutex;

// ==================== Gateway ====================

/// Pops one scripted reply per call and records what it was sent.
pub struct MockGateway {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl MockGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answers every call with "answer 1", "answer 2", ...
    pub fn answering(count: usize) -> Self {
        Self::new((1..=count).map(|i| Ok(format!("answer {i}"))).collect())
    }

    /// Message lists received, one entry per call
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for MockGateway {
    async fn send(
        &self,
        model: &Model,
        messages: &[Message],
        debug: bool,
    ) -> Result<ModelReply, GatewayError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        let content = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))?;
        let reply = ModelReply::new(content, model.clone());
        Ok(if debug {
            reply.with_raw(serde_json::json!({ "debug": true }))
        } else {
            reply
        })
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(Model::default_models())
    }
}

// ==================== Repository ====================

#[derive(Default)]
pub struct InMemoryRepository {
    conversations: Mutex<BTreeMap<ConversationId, ConversationHistory>>,
    corrupt: Mutex<BTreeSet<ConversationId>>,
    saves: Mutex<Vec<ConversationHistory>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: ConversationId, messages: Vec<Message>) {
        self.conversations
            .lock()
            .unwrap()
            .insert(id, ConversationHistory::from_messages(Some(id), messages));
    }

    /// Make every later `load(id)` fail.
    pub fn corrupt(&self, id: ConversationId) {
        self.corrupt.lock().unwrap().insert(id);
    }

    /// Every history passed to `save`, in call order
    pub fn saves(&self) -> Vec<ConversationHistory> {
        self.saves.lock().unwrap().clone()
    }

    pub fn stored(&self, id: ConversationId) -> Option<ConversationHistory> {
        self.conversations.lock().unwrap().get(&id).cloned()
    }
}

impl ConversationRepository for InMemoryRepository {
    fn save(&self, history: &ConversationHistory) -> Result<ConversationId, StorageError> {
        let mut conversations = self.conversations.lock().unwrap();
        let id = history.id().unwrap_or_else(|| {
            conversations
                .keys()
                .next_back()
                .map(|last| last.next())
                .unwrap_or(ConversationId::FIRST)
        });
        let mut stored = history.clone();
        stored.set_id(id);
        conversations.insert(id, stored);
        self.saves.lock().unwrap().push(history.clone());
        Ok(id)
    }

    fn load(&self, id: ConversationId) -> Result<ConversationHistory, StorageError> {
        if self.corrupt.lock().unwrap().contains(&id) {
            return Err(StorageError::Corrupt {
                id,
                reason: "test corruption".to_string(),
            });
        }
        self.conversations
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    fn list_ids(&self) -> Result<BTreeSet<ConversationId>, StorageError> {
        Ok(self.conversations.lock().unwrap().keys().copied().collect())
    }
}

// ==================== View ====================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Prompted(String),
    Progress(usize, usize),
    Exchange { model: Model, query: String, response: String },
    Debug,
    Error(String),
    Notice(String),
    ConfirmAsked(usize),
    Help,
    Model(Model),
    ChooseModel,
    Conversation(ConversationId),
    Messages(ConversationId),
    SystemPrompt(Option<String>),
    DataReport(usize),
}

/// Answers prompts from a script and records everything shown.
pub struct ScriptedView {
    answers: Mutex<VecDeque<String>>,
    confirm: bool,
    model_choice: Option<Model>,
    events: Mutex<Vec<ViewEvent>>,
}

impl ScriptedView {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            confirm: true,
            model_choice: None,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Values returned, in order, by `prompt_placeholder_value`
    pub fn with_answers(mut self, answers: &[&str]) -> Self {
        self.answers = Mutex::new(answers.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn declining_large_batches(mut self) -> Self {
        self.confirm = false;
        self
    }

    pub fn choosing(mut self, model: Model) -> Self {
        self.model_choice = Some(model);
        self
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn exchanges(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Exchange { query, response, .. } => Some((query, response)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ChatView for ScriptedView {
    fn prompt_placeholder_value(&self, name: &str) -> String {
        self.record(ViewEvent::Prompted(name.to_string()));
        self.answers.lock().unwrap().pop_front().unwrap_or_default()
    }

    fn show_progress(&self, current: usize, total: usize) {
        self.record(ViewEvent::Progress(current, total));
    }

    fn show_exchange(&self, model: &Model, query: &str, response: &str) {
        self.record(ViewEvent::Exchange {
            model: model.clone(),
            query: query.to_string(),
            response: response.to_string(),
        });
    }

    fn show_debug(&self, _payload: &serde_json::Value) {
        self.record(ViewEvent::Debug);
    }

    fn show_error(&self, message: &str) {
        self.record(ViewEvent::Error(message.to_string()));
    }

    fn show_notice(&self, message: &str) {
        self.record(ViewEvent::Notice(message.to_string()));
    }

    fn confirm_large_batch(&self, count: usize) -> bool {
        self.record(ViewEvent::ConfirmAsked(count));
        self.confirm
    }

    fn show_help(&self) {
        self.record(ViewEvent::Help);
    }

    fn show_model(&self, model: &Model) {
        self.record(ViewEvent::Model(model.clone()));
    }

    fn choose_model(&self, models: &[Model]) -> Model {
        self.record(ViewEvent::ChooseModel);
        self.model_choice
            .clone()
            .unwrap_or_else(|| models[0].clone())
    }

    fn show_conversation(&self, id: ConversationId, _history: &ConversationHistory) {
        self.record(ViewEvent::Conversation(id));
    }

    fn show_messages(&self, id: ConversationId, _history: &ConversationHistory) {
        self.record(ViewEvent::Messages(id));
    }

    fn show_system_prompt(&self, prompt: Option<&str>) {
        self.record(ViewEvent::SystemPrompt(prompt.map(str::to_string)));
    }

    fn show_data_report(&self, conversations: usize) {
        self.record(ViewEvent::DataReport(conversations));
    }
}

// ==================== Logger ====================

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl RecordingLogger {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|(t, _)| *t).collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
