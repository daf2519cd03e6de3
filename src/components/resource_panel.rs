//! Generic CRUD panel
//!
//! One `ResourcePanel<R>` per tab. The panel knows nothing about the entity
//! beyond its `Resource` impl: the collection path, the field schema and
//! the two lines shown per list entry.
//!
//! Every request runs on the panel's `RequestRunner`; completions are
//! applied on `Action::Tick`.

use super::entry_detail::EntryDetail;
use super::entry_form::{form_height, render_form};
use super::entry_list::{render_entry_list, ListContext, ListRow};
use super::layout::calculate_panel_layout;
use crate::action::Action;
use crate::component::Component;
use crate::error::PanelError;
use crate::model::resource::field_map;
use crate::model::{EntryId, Focus, FormState, Resource};
use crate::services::{Completion, RequestRunner, ResourceApi};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{ListState, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;

/// What a finished request means for the panel
#[derive(Debug)]
pub enum Outcome<R> {
    /// The full collection, newest first
    Loaded(Vec<R>),
    /// Create (`updated: None`) or update succeeded
    Saved { updated: Option<EntryId> },
    Deleted(EntryId),
}

pub struct ResourcePanel<R: Resource> {
    api: Arc<dyn ResourceApi>,
    runner: RequestRunner<Outcome<R>>,
    /// Last fetched collection, replaced wholesale
    items: Vec<R>,
    form: FormState,
    editing_id: Option<EntryId>,
    error: Option<PanelError>,
    /// Shown when there is no error
    status: Option<String>,
    focus: Focus,
    list_state: ListState,
    detail: EntryDetail,
}

impl<R: Resource> ResourcePanel<R> {
    pub fn new(api: Arc<dyn ResourceApi>) -> Self {
        let mut panel = Self {
            api,
            runner: RequestRunner::new(),
            items: Vec::new(),
            form: FormState::new(R::FIELDS),
            editing_id: None,
            error: None,
            status: None,
            focus: Focus::List,
            list_state: ListState::default(),
            detail: EntryDetail::new(),
        };
        panel.sync_detail();
        panel
    }

    #[cfg(test)]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[cfg(test)]
    pub fn editing_id(&self) -> Option<EntryId> {
        self.editing_id
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&PanelError> {
        self.error.as_ref()
    }

    #[cfg(test)]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.runner.is_busy()
    }

    pub fn selected(&self) -> Option<&R> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-fetch the collection
    pub fn refresh(&mut self) {
        let api = Arc::clone(&self.api);
        let kind = R::KIND;
        self.runner
            .spawn(format!("refresh {}", kind.path()), move || {
                let value = api.fetch_collection(kind)?;
                let items: Vec<R> = serde_json::from_value(value)?;
                Ok(Outcome::Loaded(items))
            });
    }

    /// Validate the form and send it as a create, or as an update of the
    /// entry being edited
    pub fn submit(&mut self) {
        self.error = None;

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::debug!(resource = R::KIND.path(), error = %err, "form rejected");
                self.error = Some(err.into());
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let kind = R::KIND;
        match self.editing_id {
            Some(id) => {
                self.runner
                    .spawn(format!("update {} #{}", kind.path(), id), move || {
                        api.update(kind, id, &payload)?;
                        Ok(Outcome::Saved { updated: Some(id) })
                    });
            }
            None => {
                self.runner
                    .spawn(format!("create {}", kind.path()), move || {
                        api.create(kind, &payload)?;
                        Ok(Outcome::Saved { updated: None })
                    });
            }
        }
    }

    /// Load `entry` into the form and move input there
    pub fn start_edit(&mut self, entry: &R) {
        self.editing_id = Some(entry.id());
        self.form.populate(&field_map(entry));
        self.focus = Focus::Form;
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form.reset();
    }

    pub fn remove(&mut self, id: EntryId) {
        let api = Arc::clone(&self.api);
        let kind = R::KIND;
        self.runner
            .spawn(format!("delete {} #{}", kind.path(), id), move || {
                api.delete(kind, id)?;
                Ok(Outcome::Deleted(id))
            });
    }

    /// Apply every request that finished since the last tick
    pub fn poll(&mut self) {
        for completion in self.runner.poll() {
            self.apply(completion);
        }
    }

    fn apply(&mut self, completion: Completion<Outcome<R>>) {
        match completion.result {
            Ok(Outcome::Loaded(items)) => {
                tracing::debug!(resource = R::KIND.path(), count = items.len(), "collection loaded");
                self.items = items;
                self.error = None;
                self.status = Some(format!(
                    "已刷新 {}",
                    chrono::Local::now().format("%H:%M:%S")
                ));
                self.clamp_selection();
            }
            Ok(Outcome::Saved { updated }) => {
                match updated {
                    Some(id) => tracing::info!(resource = R::KIND.path(), id, "entry updated"),
                    None => tracing::info!(resource = R::KIND.path(), "entry created"),
                }
                self.editing_id = None;
                self.form.reset();
                self.refresh();
            }
            Ok(Outcome::Deleted(id)) => {
                tracing::info!(resource = R::KIND.path(), id, "entry deleted");
                self.refresh();
            }
            Err(err) => {
                tracing::warn!(request = %completion.label, error = %err, "request failed");
                self.error = Some(err.into());
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    fn clamp_selection(&mut self) {
        let selected = match (self.items.len(), self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
        self.sync_detail();
    }

    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.list_state.select(Some(next));
        self.sync_detail();
    }

    fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
        self.sync_detail();
    }

    fn select_index(&mut self, index: Option<usize>) {
        if !self.items.is_empty() {
            self.list_state.select(index);
            self.sync_detail();
        }
    }

    fn sync_detail(&mut self) {
        let selected = self.selected().map(|entry| (entry.id(), field_map(entry)));
        match selected {
            Some((id, values)) => self.detail.set_entry(R::FIELDS, Some(id), Some(&values)),
            None => self.detail.set_entry(R::FIELDS, None, None),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn message_line(&self) -> Line<'static> {
        if let Some(err) = &self.error {
            return Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red)));
        }
        if self.runner.is_busy() {
            return Line::from(Span::styled("加载中...", Style::default().fg(Color::Yellow)));
        }
        match &self.status {
            Some(status) => Line::from(Span::styled(
                status.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            None => Line::from(""),
        }
    }

    fn help_line(&self) -> Line<'static> {
        let keys: Vec<(&str, &str)> = match self.focus {
            Focus::List => vec![
                ("j/k", "选择"),
                ("n", "新增"),
                ("e", "编辑"),
                ("d", "删除"),
                ("r", "刷新"),
                ("Tab", "切换"),
                ("?", "帮助"),
                ("q", "退出"),
            ],
            Focus::Form => vec![
                ("Tab/↑↓", "字段"),
                ("Ctrl-s", "保存"),
                ("Esc", if self.editing_id.is_some() { "取消编辑" } else { "返回列表" }),
            ],
        };

        let mut spans = Vec::new();
        for (key, label) in keys {
            spans.push(Span::styled(format!(" {} ", key), Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(format!("{} ", label), Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }

    fn handle_list_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('e') => Some(Action::ScrollDown),
                KeyCode::Char('y') => Some(Action::ScrollUp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(c @ '1'..='3') => Some(Action::SelectTab(c as usize - '1' as usize)),
            KeyCode::Char('n') | KeyCode::Char('i') => Some(Action::FocusForm),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEdit),
            KeyCode::Char('c') | KeyCode::Esc if self.editing_id.is_some() => {
                Some(Action::CancelEdit)
            }
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('d') | KeyCode::Delete => self.selected().map(|entry| {
                Action::OpenDeleteConfirm {
                    id: entry.id(),
                    label: entry.title().to_string(),
                }
            }),
            _ => None,
        }
    }

    fn handle_form_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => Some(Action::SubmitForm),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc if self.editing_id.is_some() => Some(Action::CancelEdit),
            KeyCode::Esc => Some(Action::FocusList),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::FormNewline),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        }
    }
}

impl<R: Resource> Component for ResourcePanel<R> {
    /// Mounting loads the collection
    fn init(&mut self) -> Result<()> {
        self.refresh();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match self.focus {
            Focus::List => self.handle_list_key(key),
            Focus::Form => self.handle_form_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.poll(),
            Action::NextItem => self.select_next(),
            Action::PrevItem => self.select_previous(),
            Action::FirstItem => self.select_index(Some(0)),
            Action::LastItem => self.select_index(Some(self.items.len().saturating_sub(1))),
            Action::ScrollUp | Action::ScrollDown => return self.detail.update(action),
            Action::Refresh => self.refresh(),
            Action::FocusForm => self.focus = Focus::Form,
            Action::FocusList => self.focus = Focus::List,
            Action::StartEdit => {
                if let Some(entry) = self.selected().cloned() {
                    self.start_edit(&entry);
                }
            }
            Action::CancelEdit => {
                self.cancel_edit();
                self.focus = Focus::List;
            }
            Action::SubmitForm => self.submit(),
            Action::DeleteEntry(id) => self.remove(id),
            Action::FormInput(c) => self.form.push_char(c),
            Action::FormBackspace => self.form.backspace(),
            Action::FormNewline => self.form.insert_newline(),
            Action::NextField => self.form.focus_next(),
            Action::PrevField => self.form.focus_prev(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let message = self.message_line();
        let message_height = if self.error.is_some() && area.width > 0 {
            (message.width() / area.width as usize + 1).clamp(1, 3) as u16
        } else {
            1
        };

        let layout = calculate_panel_layout(area, form_height(R::FIELDS), message_height);

        let rows: Vec<ListRow> = self
            .items
            .iter()
            .map(|entry| ListRow {
                id: entry.id(),
                title: entry.title().to_string(),
                subtitle: entry.subtitle().to_string(),
            })
            .collect();
        render_entry_list(
            frame,
            layout.list,
            &rows,
            &mut self.list_state,
            ListContext {
                label: R::KIND.label(),
                editing_id: self.editing_id,
                loading: self.runner.is_busy(),
                focused: self.focus == Focus::List,
            },
        );

        self.detail.draw(frame, layout.detail)?;

        render_form(
            frame,
            layout.form,
            &self.form,
            self.editing_id,
            self.focus == Focus::Form,
        );

        frame.render_widget(
            Paragraph::new(message).wrap(Wrap { trim: true }),
            layout.message,
        );
        frame.render_widget(Paragraph::new(self.help_line()), layout.help);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RequestError, ValidationError};
    use crate::model::{ResourceKind, Sentence, Word};
    use crate::services::memory::{Call, InMemoryApi};
    use serde_json::{json, Value};
    use std::time::Duration;

    impl<R: Resource> ResourcePanel<R> {
        /// Block until every in-flight request, including follow-up
        /// refreshes, has been applied
        fn settle(&mut self) {
            while self.runner.is_busy() {
                let completion = self
                    .runner
                    .wait(Duration::from_secs(5))
                    .expect("request hung");
                self.apply(completion);
            }
        }
    }

    fn word_panel() -> (Arc<InMemoryApi>, ResourcePanel<Word>) {
        let api = Arc::new(InMemoryApi::new());
        let panel = ResourcePanel::<Word>::new(api.clone());
        (api, panel)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_blank_required_field_sends_nothing() {
        let (api, mut panel) = word_panel();
        panel.form.set("word", "mitigate");
        panel.form.set("meaning_cn", "   ");

        panel.submit();

        assert!(!panel.is_loading());
        assert!(api.calls().is_empty());
        assert_eq!(
            panel.error(),
            Some(&PanelError::Validation(ValidationError {
                missing: vec!["meaning_cn"]
            }))
        );
        assert_eq!(panel.form().value("word"), "mitigate");
    }

    #[test]
    fn test_create_normalizes_payload() {
        let api = Arc::new(InMemoryApi::new());
        let mut panel = ResourcePanel::<Sentence>::new(api.clone());
        panel.form.set("sentence_en", "  Let's circle back.  ");
        panel.form.set("translation_cn", "我们稍后再讨论。");
        panel.form.set("notes", "   ");
        panel.form.set("scene_categories", "会议, 邮件沟通");

        panel.submit();
        panel.settle();

        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        let Call::Create(ResourceKind::Sentences, body) = &calls[0] else {
            panic!("expected create, got {:?}", calls[0]);
        };
        assert_eq!(body["sentence_en"], json!("Let's circle back."));
        assert_eq!(body["notes"], Value::Null);
        assert_eq!(body["scene"], Value::Null);
        assert_eq!(body["scene_categories"], json!(["会议", "邮件沟通"]));
        assert_eq!(body["topic_categories"], Value::Null);
        assert_eq!(calls[1], Call::List(ResourceKind::Sentences));

        assert_eq!(panel.items().len(), 1);
        assert_eq!(
            panel.items()[0].scene_categories,
            Some(vec!["会议".to_string(), "邮件沟通".to_string()])
        );
        assert!(panel.form().is_blank());
        assert!(panel.error().is_none());
    }

    #[test]
    fn test_update_targets_editing_id() {
        let (api, mut panel) = word_panel();
        api.seed(ResourceKind::Words, json!({ "word": "agenda", "meaning_cn": "议程" }));
        let id = api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "减轻" }));
        panel.init().unwrap();
        panel.settle();
        api.clear_calls();

        let entry = panel.items()[0].clone();
        assert_eq!(entry.id, id);
        panel.start_edit(&entry);
        assert_eq!(panel.editing_id(), Some(id));
        assert_eq!(panel.form().value("meaning_cn"), "减轻");

        panel.form.set("meaning_cn", "缓解");
        panel.submit();
        panel.settle();

        let updates: Vec<Call> = api
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Update(..)))
            .collect();
        assert_eq!(updates.len(), 1);
        assert!(matches!(&updates[0], Call::Update(ResourceKind::Words, target, _) if *target == id));
        assert_eq!(panel.editing_id(), None);
        assert_eq!(panel.items()[0].meaning_cn, "缓解");
        assert_eq!(panel.items().len(), 2);
    }

    #[test]
    fn test_create_then_delete_round_trip() {
        let (api, mut panel) = word_panel();
        panel.init().unwrap();
        panel.settle();
        assert!(panel.items().is_empty());

        panel.form.set("word", "mitigate");
        panel.form.set("meaning_cn", "缓解");
        panel.submit();
        panel.settle();

        assert_eq!(panel.items().len(), 1);
        let created = panel.items()[0].clone();
        assert_eq!(created.word, "mitigate");
        assert_eq!(created.meaning_cn, "缓解");
        assert_eq!(created.example_en, None);
        assert!(created.id > 0);

        panel.remove(created.id);
        panel.settle();

        assert!(panel.items().is_empty());
        assert!(api.rows(ResourceKind::Words).is_empty());
        assert_eq!(
            api.calls().last(),
            Some(&Call::List(ResourceKind::Words))
        );
    }

    #[test]
    fn test_cancel_edit_restores_defaults() {
        let (api, mut panel) = word_panel();
        api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        let entry = panel.items()[0].clone();
        panel.start_edit(&entry);
        panel.cancel_edit();

        assert_eq!(panel.form(), &FormState::new(Word::FIELDS));
        assert_eq!(panel.editing_id(), None);
    }

    #[test]
    fn test_failed_update_keeps_form_and_editing_id() {
        let (api, mut panel) = word_panel();
        let id = api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        let entry = panel.items()[0].clone();
        panel.start_edit(&entry);
        panel.form.set("word", "agenda");

        let conflict = RequestError::Status {
            status: 409,
            body: r#"{"detail":"Word already exists"}"#.to_string(),
        };
        api.fail_with(Some(conflict));
        panel.submit();
        panel.settle();

        assert_eq!(
            panel.error().map(|e| e.to_string()),
            Some(r#"{"detail":"Word already exists"}"#.to_string())
        );
        assert_eq!(panel.editing_id(), Some(id));
        assert_eq!(panel.form().value("word"), "agenda");
    }

    #[test]
    fn test_failed_refresh_keeps_items_and_sets_error() {
        let (api, mut panel) = word_panel();
        api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        api.fail_with(Some(RequestError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        panel.refresh();
        panel.settle();

        assert_eq!(panel.items().len(), 1);
        assert_eq!(panel.items()[0].word, "mitigate");
        assert_eq!(panel.error().map(|e| e.to_string()), Some("boom".to_string()));
    }

    #[test]
    fn test_failed_create_keeps_form() {
        let (api, mut panel) = word_panel();
        panel.form.set("word", " leverage ");
        panel.form.set("meaning_cn", "利用");

        api.fail_with(Some(RequestError::Transport("down".to_string())));
        panel.submit();
        panel.settle();

        assert_eq!(panel.error().map(|e| e.to_string()), Some("down".to_string()));
        assert_eq!(panel.form().value("word"), " leverage ");
        assert_eq!(panel.form().value("meaning_cn"), "利用");
        assert_eq!(panel.editing_id(), None);
        assert!(panel.items().is_empty());
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_failed_delete_keeps_list_until_next_refresh() {
        let (api, mut panel) = word_panel();
        let id = api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        api.fail_with(Some(RequestError::Transport("connection refused".to_string())));
        panel.remove(id);
        panel.settle();

        assert_eq!(panel.items().len(), 1);
        assert_eq!(
            panel.error().map(|e| e.to_string()),
            Some("connection refused".to_string())
        );

        api.fail_with(None);
        panel.refresh();
        panel.settle();
        assert!(panel.error().is_none());
        assert_eq!(panel.items().len(), 1);
    }

    #[test]
    fn test_selection_follows_shrinking_list() {
        let (api, mut panel) = word_panel();
        for word in ["a", "b", "c"] {
            api.seed(ResourceKind::Words, json!({ "word": word, "meaning_cn": word }));
        }
        panel.init().unwrap();
        panel.settle();
        assert_eq!(panel.selected().map(|w| w.word.as_str()), Some("c"));

        panel.update(Action::LastItem).unwrap();
        assert_eq!(panel.selected().map(|w| w.word.as_str()), Some("a"));

        let last = panel.selected().map(|w| w.id).unwrap();
        panel.update(Action::DeleteEntry(last)).unwrap();
        panel.settle();
        assert_eq!(panel.selected().map(|w| w.word.as_str()), Some("b"));

        panel.update(Action::NextItem).unwrap();
        assert_eq!(panel.selected().map(|w| w.word.as_str()), Some("c"));
    }

    #[test]
    fn test_list_keys() {
        let (api, mut panel) = word_panel();
        assert_eq!(panel.handle_key_event(key(KeyCode::Char('d'))).unwrap(), None);

        let id = api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        assert_eq!(
            panel.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::OpenDeleteConfirm {
                id,
                label: "mitigate".to_string()
            })
        );
        assert_eq!(
            panel.handle_key_event(key(KeyCode::Char('2'))).unwrap(),
            Some(Action::SelectTab(1))
        );
        assert_eq!(
            panel.handle_key_event(ctrl('e')).unwrap(),
            Some(Action::ScrollDown)
        );
        assert_eq!(
            panel.handle_key_event(key(KeyCode::Char('n'))).unwrap(),
            Some(Action::FocusForm)
        );
    }

    #[test]
    fn test_form_keys_type_into_focused_field() {
        let (_api, mut panel) = word_panel();
        panel.update(Action::FocusForm).unwrap();
        assert_eq!(panel.focus(), Focus::Form);

        for c in "qa".chars() {
            let action = panel.handle_key_event(key(KeyCode::Char(c))).unwrap();
            assert_eq!(action, Some(Action::FormInput(c)));
            panel.update(action.unwrap()).unwrap();
        }
        let next = panel.handle_key_event(key(KeyCode::Enter)).unwrap().unwrap();
        panel.update(next).unwrap();
        panel.update(Action::FormInput('x')).unwrap();

        assert_eq!(panel.form().value("word"), "qa");
        assert_eq!(panel.form().value("meaning_cn"), "x");
        assert_eq!(panel.handle_key_event(ctrl('s')).unwrap(), Some(Action::SubmitForm));
        assert_eq!(
            panel.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::FocusList)
        );
    }

    #[test]
    fn test_escape_while_editing_cancels() {
        let (api, mut panel) = word_panel();
        api.seed(ResourceKind::Words, json!({ "word": "mitigate", "meaning_cn": "缓解" }));
        panel.init().unwrap();
        panel.settle();

        panel.update(Action::StartEdit).unwrap();
        assert_eq!(panel.focus(), Focus::Form);
        let esc = panel.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(esc, Some(Action::CancelEdit));
        panel.update(Action::CancelEdit).unwrap();

        assert_eq!(panel.focus(), Focus::List);
        assert_eq!(panel.editing_id(), None);
        assert!(panel.form().is_blank());
    }
}
