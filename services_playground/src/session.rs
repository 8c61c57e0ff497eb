//! Editing session and key routing
//!
//! `EditorSession` owns every piece of per-session state: the editor core,
//! the file tree and its selection, focus, the gesture window, the space
//! chord flag and save bookkeeping. Keys and completions go in; effects for
//! the host come out. Time is always passed in by the caller.

use std::collections::BTreeMap;

use editor_core::{
    CoreIoRequest, CoreOutcome, EditorCore, EditorMode, GestureRecognizer, Instant, Key,
    SurfaceRequest,
};
use file_tree::{FileNode, FileTree, TreeCursor};
use serde::{Deserialize, Serialize};
use services_persistence::PersistenceResult;

use crate::config::PlaygroundConfig;
use crate::focus::FocusTarget;
use crate::io::{PersistenceCompletion, PersistenceRequest, RequestId, RequestIds};
use crate::language::language_for;
use crate::save_status::{SaveIndicator, SaveStatus};
use crate::snapshot::{RenderSnapshot, TreeRow};

/// External surfaces the session can ask a host to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    CommandLine,
    ThemePicker,
}

/// Work for the host produced by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    Persist(PersistenceRequest),
    OpenSurface(Surface),
    CloseSurface(Surface),
}

#[derive(Debug, Clone)]
struct OpenFile {
    /// Flattened tree index; names may repeat
    index: usize,
    name: String,
}

#[derive(Debug)]
struct PendingOpen {
    id: RequestId,
    file: OpenFile,
    fallback: Vec<String>,
}

#[derive(Debug)]
struct PendingSave {
    file: OpenFile,
    revision: u64,
    lines: Vec<String>,
}

/// One editing session
#[derive(Debug)]
pub struct EditorSession {
    config: PlaygroundConfig,
    core: EditorCore,
    tree: FileTree,
    tree_cursor: TreeCursor,
    focus: FocusTarget,
    gestures: GestureRecognizer,
    space_armed: bool,
    surface: Option<Surface>,
    active_file: Option<OpenFile>,
    pending_open: Option<PendingOpen>,
    pending_saves: BTreeMap<RequestId, PendingSave>,
    save: SaveIndicator,
    ids: RequestIds,
}

impl EditorSession {
    pub fn new(config: PlaygroundConfig, tree: FileTree) -> Self {
        Self {
            core: EditorCore::new().with_auto_symbols(config.auto_symbols),
            tree,
            tree_cursor: TreeCursor::new(),
            focus: config.initial_focus,
            gestures: GestureRecognizer::new(config.gesture_window()),
            space_armed: false,
            surface: None,
            active_file: None,
            pending_open: None,
            pending_saves: BTreeMap::new(),
            save: SaveIndicator::new(config.save_status_clear()),
            ids: RequestIds::default(),
            config,
        }
    }

    /// Route one key press.
    ///
    /// Elapsed timers fire first, so a key arriving after the gesture window
    /// starts a fresh window.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> Vec<SessionEffect> {
        self.tick(now);

        let mode = self.core.mode();
        let focus = self.focus;
        let armed = std::mem::take(&mut self.space_armed);

        if mode == EditorMode::Normal {
            if key.is_char(' ') {
                self.space_armed = true;
                return Vec::new();
            }
            if armed {
                match key {
                    Key::Char('e') => {
                        self.set_focus(self.focus.toggled());
                        self.gestures.cancel();
                        return Vec::new();
                    }
                    Key::Char('t') => {
                        self.core.set_mode(EditorMode::Command);
                        self.gestures.cancel();
                        return self.open_surface(Surface::ThemePicker);
                    }
                    _ => {}
                }
            }
        }

        // An open surface takes the next key whatever the focus
        let effects = if focus == FocusTarget::FileTree && mode != EditorMode::Command {
            self.handle_tree_key(key)
        } else {
            if mode == EditorMode::Normal {
                self.gestures.record(key, now);
            }
            self.handle_editor_key(key)
        };

        if self.core.mode() != mode || self.focus != focus {
            self.gestures.cancel();
        }
        effects
    }

    /// Advance timers. Returns true if visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.save.tick(now);

        if let Some(gesture) = self.gestures.poll(now) {
            tracing::debug!(?gesture, "gesture recognized");
            changed |= self.core.apply_gesture(gesture) != CoreOutcome::Continue;
        }
        changed
    }

    /// Earliest instant at which `tick` has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.gestures.deadline(), self.save.clear_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Feed back the result of a request issued earlier.
    ///
    /// Returns false if the completion was stale or unknown and got dropped.
    pub fn complete(&mut self, completion: PersistenceCompletion, now: Instant) -> bool {
        match completion {
            PersistenceCompletion::Loaded { id, result } => self.complete_load(id, result),
            PersistenceCompletion::Saved { id, result } => self.complete_save(id, result, now),
        }
    }

    /// Apply a load result if it answers the latest open request
    pub fn complete_load(
        &mut self,
        id: RequestId,
        result: PersistenceResult<Option<Vec<String>>>,
    ) -> bool {
        if self.pending_open.as_ref().map(|open| open.id) != Some(id) {
            tracing::debug!(%id, "dropping stale load completion");
            return false;
        }
        let Some(pending) = self.pending_open.take() else {
            return false;
        };

        let lines = match result {
            Ok(Some(stored)) => {
                if let Err(err) = self.tree.set_content(pending.file.index, stored.clone()) {
                    tracing::warn!(%err, "could not refresh tree content");
                }
                stored
            }
            Ok(None) => pending.fallback,
            Err(err) => {
                tracing::warn!(
                    name = %pending.file.name,
                    %err,
                    "load failed, using default content"
                );
                pending.fallback
            }
        };

        tracing::info!(name = %pending.file.name, lines = lines.len(), "file opened");
        self.core.load_lines(lines);
        self.gestures.cancel();
        self.active_file = Some(pending.file);
        true
    }

    pub fn complete_save(
        &mut self,
        id: RequestId,
        result: PersistenceResult<()>,
        now: Instant,
    ) -> bool {
        let Some(pending) = self.pending_saves.remove(&id) else {
            tracing::debug!(%id, "dropping unknown save completion");
            return false;
        };

        match result {
            Ok(()) => {
                tracing::info!(name = %pending.file.name, "file saved");
                let is_active = self
                    .active_file
                    .as_ref()
                    .is_some_and(|file| file.index == pending.file.index);
                if is_active {
                    self.core.mark_saved(pending.revision);
                }
                if let Err(err) = self.tree.set_content(pending.file.index, pending.lines) {
                    tracing::warn!(%err, "could not refresh tree content");
                }
                if self.pending_saves.is_empty() {
                    self.save.finish(true, now);
                }
            }
            Err(err) => {
                tracing::warn!(name = %pending.file.name, %err, "save failed");
                self.save.finish(false, now);
            }
        }
        true
    }

    /// Open the file at a flattened tree index, as `Enter` in the tree does
    pub fn open_index(&mut self, index: usize) -> Vec<SessionEffect> {
        let Some(entry) = self.tree.entry(index) else {
            return Vec::new();
        };
        let (name, fallback) = match entry.node {
            FileNode::File { name, content } => (name.clone(), content.clone()),
            FileNode::Folder { .. } => return Vec::new(),
        };

        let id = self.ids.next();
        tracing::debug!(%id, %name, "opening file");
        self.pending_open = Some(PendingOpen {
            id,
            file: OpenFile {
                index,
                name: name.clone(),
            },
            fallback,
        });
        self.set_focus(FocusTarget::Editor);
        vec![SessionEffect::Persist(PersistenceRequest::Load { id, name })]
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let tree = self
            .tree
            .flatten()
            .map(|entry| TreeRow {
                name: entry.node.name().to_string(),
                depth: entry.depth,
                is_folder: entry.node.is_folder(),
            })
            .collect();
        let active_file = self.active_file.as_ref().map(|file| file.name.clone());

        RenderSnapshot {
            lines: self.core.buffer().lines().to_vec(),
            cursor: self.core.cursor(),
            mode: self.core.mode(),
            focus: self.focus,
            tree,
            selection: self.tree_cursor.index(),
            save_status: self.save.status(),
            save_message: self.save.message().to_string(),
            language: active_file
                .as_deref()
                .map(|name| language_for(name).to_string()),
            active_file,
            surface: self.surface,
            dirty: self.core.dirty(),
        }
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn core(&self) -> &EditorCore {
        &self.core
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn mode(&self) -> EditorMode {
        self.core.mode()
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn tree_selection(&self) -> usize {
        self.tree_cursor.index()
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save.status()
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active_file.as_ref().map(|file| file.name.as_str())
    }

    pub fn is_loading(&self) -> bool {
        self.pending_open.is_some()
    }

    pub fn pending_saves(&self) -> usize {
        self.pending_saves.len()
    }

    // Routing

    fn handle_tree_key(&mut self, key: Key) -> Vec<SessionEffect> {
        let count = self.tree.len();
        match key {
            Key::Char('j') | Key::Down => {
                self.tree_cursor.down(count);
                Vec::new()
            }
            Key::Char('k') | Key::Up => {
                self.tree_cursor.up(count);
                Vec::new()
            }
            Key::Enter => self.open_index(self.tree_cursor.index()),
            _ => Vec::new(),
        }
    }

    fn handle_editor_key(&mut self, key: Key) -> Vec<SessionEffect> {
        match self.core.apply_key(key) {
            CoreOutcome::Continue | CoreOutcome::Changed => Vec::new(),
            CoreOutcome::RequestIo(CoreIoRequest::Save) => {
                self.request_save().into_iter().collect()
            }
            CoreOutcome::Surface(SurfaceRequest::OpenCommandLine) => {
                self.open_surface(Surface::CommandLine)
            }
            CoreOutcome::Surface(SurfaceRequest::Close) => self.close_surface(),
        }
    }

    fn request_save(&mut self) -> Option<SessionEffect> {
        let Some(file) = self.active_file.clone() else {
            tracing::debug!("save requested with no open file");
            return None;
        };

        let id = self.ids.next();
        let lines = self.core.buffer().lines().to_vec();
        tracing::info!(%id, name = %file.name, "saving file");

        self.pending_saves.insert(
            id,
            PendingSave {
                file: file.clone(),
                revision: self.core.revision(),
                lines: lines.clone(),
            },
        );
        self.save.begin();
        Some(SessionEffect::Persist(PersistenceRequest::Save {
            id,
            name: file.name,
            lines,
        }))
    }

    fn set_focus(&mut self, target: FocusTarget) {
        if self.focus != target {
            tracing::debug!(focus = target.as_str(), "focus changed");
            self.focus = target;
        }
    }

    fn open_surface(&mut self, surface: Surface) -> Vec<SessionEffect> {
        self.surface = Some(surface);
        vec![SessionEffect::OpenSurface(surface)]
    }

    fn close_surface(&mut self) -> Vec<SessionEffect> {
        self.surface
            .take()
            .map(SessionEffect::CloseSurface)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_core::{Duration, Position};
    use file_tree::sample_project;
    use services_persistence::PersistenceError;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn session() -> EditorSession {
        EditorSession::new(PlaygroundConfig::default(), sample_project())
    }

    fn load_request(effects: &[SessionEffect]) -> (RequestId, String) {
        match effects {
            [SessionEffect::Persist(PersistenceRequest::Load { id, name })] => (*id, name.clone()),
            other => panic!("expected a single load request, got {other:?}"),
        }
    }

    fn save_request(effects: &[SessionEffect]) -> (RequestId, Vec<String>) {
        match effects {
            [SessionEffect::Persist(PersistenceRequest::Save { id, lines, .. })] => {
                (*id, lines.clone())
            }
            other => panic!("expected a single save request, got {other:?}"),
        }
    }

    /// Open README.md (flattened index 5) with nothing stored
    fn open_readme(session: &mut EditorSession) {
        let effects = session.open_index(5);
        let (id, _) = load_request(&effects);
        assert!(session.complete_load(id, Ok(None)));
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        let snap = session.snapshot();
        assert_eq!(snap.lines, vec![String::new()]);
        assert_eq!(snap.mode, EditorMode::Normal);
        assert_eq!(snap.focus, FocusTarget::Editor);
        assert_eq!(snap.active_file, None);
        assert_eq!(snap.tree.len(), 6);
    }

    #[test]
    fn test_space_e_toggles_focus() {
        let mut session = session();
        assert!(session.handle_key(Key::Char(' '), at(0)).is_empty());
        session.handle_key(Key::Char('e'), at(10));
        assert_eq!(session.focus(), FocusTarget::FileTree);

        session.handle_key(Key::Char(' '), at(20));
        session.handle_key(Key::Char('e'), at(30));
        assert_eq!(session.focus(), FocusTarget::Editor);
    }

    #[test]
    fn test_space_flag_is_one_shot() {
        let mut session = session();
        session.handle_key(Key::Char(' '), at(0));
        session.handle_key(Key::Char('j'), at(10));
        session.handle_key(Key::Char('e'), at(20));
        assert_eq!(session.focus(), FocusTarget::Editor);
    }

    #[test]
    fn test_e_without_space_does_nothing() {
        let mut session = session();
        session.handle_key(Key::Char('e'), at(0));
        assert_eq!(session.focus(), FocusTarget::Editor);
    }

    #[test]
    fn test_space_in_insert_mode_is_text() {
        let mut session = session();
        session.handle_key(Key::Char('i'), at(0));
        session.handle_key(Key::Char(' '), at(10));
        session.handle_key(Key::Char('e'), at(20));
        assert_eq!(session.focus(), FocusTarget::Editor);
        assert_eq!(session.snapshot().lines, vec![" e".to_string()]);
    }

    #[test]
    fn test_space_t_opens_theme_picker() {
        let mut session = session();
        session.handle_key(Key::Char(' '), at(0));
        let effects = session.handle_key(Key::Char('t'), at(10));
        assert_eq!(effects, vec![SessionEffect::OpenSurface(Surface::ThemePicker)]);
        assert_eq!(session.mode(), EditorMode::Command);

        let effects = session.handle_key(Key::Escape, at(20));
        assert_eq!(effects, vec![SessionEffect::CloseSurface(Surface::ThemePicker)]);
        assert_eq!(session.mode(), EditorMode::Normal);
        assert_eq!(session.surface(), None);
    }

    #[test]
    fn test_theme_picker_closes_from_tree_focus() {
        let mut session = session();
        session.handle_key(Key::Char(' '), at(0));
        session.handle_key(Key::Char('e'), at(10));
        session.handle_key(Key::Char(' '), at(20));
        session.handle_key(Key::Char('t'), at(30));

        let effects = session.handle_key(Key::Char('j'), at(40));
        assert_eq!(effects, vec![SessionEffect::CloseSurface(Surface::ThemePicker)]);
        assert_eq!(session.tree_selection(), 0);
        assert_eq!(session.mode(), EditorMode::Normal);
    }

    #[test]
    fn test_colon_opens_command_line() {
        let mut session = session();
        let effects = session.handle_key(Key::Char(':'), at(0));
        assert_eq!(effects, vec![SessionEffect::OpenSurface(Surface::CommandLine)]);
        let effects = session.handle_key(Key::Char('w'), at(10));
        assert_eq!(effects, vec![SessionEffect::CloseSurface(Surface::CommandLine)]);
        assert_eq!(session.mode(), EditorMode::Normal);
    }

    #[test]
    fn test_tree_navigation_clamps() {
        let mut session = EditorSession::new(
            PlaygroundConfig {
                initial_focus: FocusTarget::FileTree,
                ..PlaygroundConfig::default()
            },
            sample_project(),
        );
        for step in 0..10 {
            session.handle_key(Key::Char('j'), at(step * 10));
        }
        assert_eq!(session.tree_selection(), 5);

        session.handle_key(Key::Up, at(200));
        assert_eq!(session.tree_selection(), 4);
        for step in 0..10 {
            session.handle_key(Key::Char('k'), at(300 + step * 10));
        }
        assert_eq!(session.tree_selection(), 0);
    }

    #[test]
    fn test_enter_on_folder_is_noop() {
        let mut session = EditorSession::new(
            PlaygroundConfig {
                initial_focus: FocusTarget::FileTree,
                ..PlaygroundConfig::default()
            },
            sample_project(),
        );
        assert!(session.handle_key(Key::Enter, at(0)).is_empty());
        assert_eq!(session.focus(), FocusTarget::FileTree);
    }

    #[test]
    fn test_enter_on_file_requests_load_and_focuses_editor() {
        let mut session = EditorSession::new(
            PlaygroundConfig {
                initial_focus: FocusTarget::FileTree,
                ..PlaygroundConfig::default()
            },
            sample_project(),
        );
        session.handle_key(Key::Char('j'), at(0));
        session.handle_key(Key::Char('j'), at(10));
        let effects = session.handle_key(Key::Enter, at(20));

        let (_, name) = load_request(&effects);
        assert_eq!(name, "index.ts");
        assert_eq!(session.focus(), FocusTarget::Editor);
        assert!(session.is_loading());
    }

    #[test]
    fn test_load_miss_uses_default_content() {
        let mut session = session();
        open_readme(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.lines[0], "# My Project");
        assert_eq!(snap.cursor, Position::zero());
        assert_eq!(snap.active_file.as_deref(), Some("README.md"));
        assert_eq!(snap.language.as_deref(), Some("markdown"));
        assert!(!snap.dirty);
    }

    #[test]
    fn test_load_error_uses_default_content() {
        let mut session = session();
        let (id, _) = load_request(&session.open_index(5));
        session.complete_load(id, Err(PersistenceError::Unavailable("offline".to_string())));
        assert_eq!(session.snapshot().lines.len(), 3);
    }

    #[test]
    fn test_load_hit_replaces_content() {
        let mut session = session();
        let (id, _) = load_request(&session.open_index(3));
        session.complete_load(id, Ok(Some(vec!["stored".to_string()])));

        assert_eq!(session.snapshot().lines, vec!["stored".to_string()]);
        assert_eq!(
            session.tree().entry(3).and_then(|e| e.node.content()),
            Some(&["stored".to_string()][..])
        );
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut session = session();
        let (first, _) = load_request(&session.open_index(2));
        let (second, _) = load_request(&session.open_index(5));

        assert!(!session.complete_load(first, Ok(Some(vec!["old".to_string()]))));
        assert_eq!(session.active_file(), None);

        assert!(session.complete_load(second, Ok(None)));
        assert_eq!(session.active_file(), Some("README.md"));
    }

    #[test]
    fn test_save_without_file_is_noop() {
        let mut session = session();
        assert!(session.handle_key(Key::Char('w'), at(0)).is_empty());
        assert_eq!(session.save_status(), SaveStatus::Idle);
    }

    #[test]
    fn test_save_captures_buffer_at_request_time() {
        let mut session = session();
        open_readme(&mut session);

        let (id, lines) = save_request(&session.handle_key(Key::Char('w'), at(0)));
        assert_eq!(session.save_status(), SaveStatus::Saving);
        assert_eq!(session.snapshot().save_message, "Saving...");

        // Edit while the save is in flight
        session.handle_key(Key::Char('i'), at(300));
        session.handle_key(Key::Char('!'), at(310));
        assert_eq!(lines[0], "# My Project");

        session.complete_save(id, Ok(()), at(400));
        assert_eq!(session.save_status(), SaveStatus::Succeeded);
        assert!(session.snapshot().dirty, "later edit is still unsaved");
    }

    #[test]
    fn test_save_success_clears_dirty_and_status() {
        let mut session = session();
        open_readme(&mut session);
        session.handle_key(Key::Char('i'), at(0));
        session.handle_key(Key::Char('a'), at(10));
        session.handle_key(Key::Escape, at(20));

        let (id, _) = save_request(&session.handle_key(Key::Char('w'), at(30)));
        session.complete_save(id, Ok(()), at(100));
        let snap = session.snapshot();
        assert!(!snap.dirty);
        assert_eq!(snap.save_message, "File saved successfully!");

        session.tick(at(3099));
        assert_eq!(session.save_status(), SaveStatus::Succeeded);
        session.tick(at(3100));
        assert_eq!(session.save_status(), SaveStatus::Idle);
        assert_eq!(session.snapshot().save_message, "");
    }

    #[test]
    fn test_save_failure_reports_error() {
        let mut session = session();
        open_readme(&mut session);
        let (id, _) = save_request(&session.handle_key(Key::Char('w'), at(0)));
        session.complete_save(id, Err(PersistenceError::Unavailable("full".to_string())), at(50));

        assert_eq!(session.save_status(), SaveStatus::Failed);
        assert_eq!(session.snapshot().save_message, "Error saving file.");

        // Once the pending `w` gesture window has passed only the clear remains
        session.tick(at(250));
        assert_eq!(session.next_deadline(), Some(at(3050)));
    }

    #[test]
    fn test_overlapping_saves_report_after_last() {
        let mut session = session();
        open_readme(&mut session);
        let (first, _) = save_request(&session.handle_key(Key::Char('w'), at(0)));
        let (second, _) = save_request(&session.handle_key(Key::Char('w'), at(300)));
        assert_eq!(session.pending_saves(), 2);

        session.complete_save(first, Ok(()), at(400));
        assert_eq!(session.save_status(), SaveStatus::Saving);
        session.complete_save(second, Ok(()), at(500));
        assert_eq!(session.save_status(), SaveStatus::Succeeded);
    }

    #[test]
    fn test_dd_deletes_line_after_window() {
        let mut session = session();
        open_readme(&mut session);

        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('d'), at(100));
        assert_eq!(session.snapshot().lines.len(), 3, "nothing before the window closes");

        session.tick(at(299));
        assert_eq!(session.snapshot().lines.len(), 3);
        assert!(session.tick(at(300)));
        assert_eq!(
            session.snapshot().lines,
            vec!["".to_string(), "This is a sample project.".to_string()]
        );
    }

    #[test]
    fn test_next_key_fires_elapsed_gesture_first() {
        let mut session = session();
        open_readme(&mut session);
        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('d'), at(50));
        session.handle_key(Key::Char('j'), at(1000));

        let snap = session.snapshot();
        assert_eq!(snap.lines.len(), 2);
        assert_eq!(snap.cursor.row, 1);
    }

    #[test]
    fn test_u_restores_deleted_line() {
        let mut session = session();
        open_readme(&mut session);
        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('d'), at(50));
        session.tick(at(500));
        session.handle_key(Key::Char('u'), at(600));
        session.tick(at(800));

        assert_eq!(session.snapshot().lines[0], "# My Project");
    }

    #[test]
    fn test_mode_change_cancels_gesture() {
        let mut session = session();
        open_readme(&mut session);
        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('i'), at(50));
        session.tick(at(1000));

        assert_eq!(session.snapshot().lines.len(), 3);
        assert_eq!(session.mode(), EditorMode::Insert);
    }

    #[test]
    fn test_gesture_not_recorded_in_tree() {
        let mut session = EditorSession::new(
            PlaygroundConfig {
                initial_focus: FocusTarget::FileTree,
                ..PlaygroundConfig::default()
            },
            sample_project(),
        );
        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('d'), at(10));
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_custom_gesture_window() {
        let config = PlaygroundConfig {
            gesture_window_ms: 50,
            ..PlaygroundConfig::default()
        };
        let mut session = EditorSession::new(config, sample_project());
        open_readme(&mut session);
        session.handle_key(Key::Char('d'), at(0));
        session.handle_key(Key::Char('d'), at(10));
        assert_eq!(session.next_deadline(), Some(at(10) + Duration::from_millis(50)));
        session.tick(at(60));
        assert_eq!(session.snapshot().lines.len(), 2);
    }
}
