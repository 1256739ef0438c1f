use futures::join;

use crate::api::AnalyticsBackend;
use crate::error::ApiError;
use crate::models::{ChatSession, HistoryKind, SessionExport, ToolDefinition, ToolUsageStatus};

pub const CONFIRM_DELETE_SESSION: &str = "Are you sure you want to delete this session?";
pub const CONFIRM_CLEAR_HISTORY: &str =
    "Are you sure you want to clear ALL chat history? This cannot be undone.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionDirectory {
    pub sessions: Vec<ChatSession>,
    pub tools: Vec<ToolDefinition>,
    /// Set when the tool list could not be fetched; sessions still show.
    pub tools_error: Option<String>,
}

impl SessionDirectory {
    fn without_session(&self, session_id: &str) -> Self {
        Self {
            sessions: self
                .sessions
                .iter()
                .filter(|s| s.session_id != session_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    fn without_sessions(&self) -> Self {
        Self {
            sessions: Vec::new(),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportedSession {
    pub file_name: String,
    pub document: String,
    pub summary: ExportSummary,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub tool_calls: usize,
    pub tool_errors: usize,
    pub failed_tool_runs: usize,
}

impl ExportSummary {
    pub fn from_export(export: &SessionExport) -> Self {
        let count = |kind: HistoryKind| {
            export
                .messages
                .iter()
                .filter(|m| m.message_type == kind)
                .count()
        };
        Self {
            user_messages: count(HistoryKind::Human),
            assistant_messages: count(HistoryKind::Ai),
            tool_calls: count(HistoryKind::ToolCall),
            tool_errors: export
                .messages
                .iter()
                .filter(|m| m.tool_error.as_deref().is_some_and(|e| !e.is_empty()))
                .count(),
            failed_tool_runs: export
                .tool_usage
                .iter()
                .filter(|u| matches!(u.status, ToolUsageStatus::Error | ToolUsageStatus::Timeout))
                .count(),
        }
    }
}

pub fn describe_failure(action: &str, err: &ApiError) -> String {
    if err.is_connectivity() {
        format!(
            "Failed to {}. Make sure the analytics service is running on the configured URL.",
            action
        )
    } else {
        format!("Failed to {}: {}", action, err)
    }
}

pub async fn load_directory(backend: &dyn AnalyticsBackend) -> Result<SessionDirectory, ApiError> {
    tracing::info!("loading chat sessions");
    let (sessions, tools) = join!(backend.sessions(), backend.tool_definitions());
    let sessions = sessions?;
    let (tools, tools_error) = match tools {
        Ok(tools) => (tools, None),
        Err(err) => {
            tracing::warn!(%err, "tool definitions unavailable");
            (Vec::new(), Some(describe_failure("load tool definitions", &err)))
        }
    };
    tracing::info!(sessions = sessions.len(), tools = tools.len(), "chat sessions loaded");
    Ok(SessionDirectory {
        sessions,
        tools,
        tools_error,
    })
}

/// Reloads after a delete that already succeeded; a failed reload falls
/// back to `local`.
async fn refresh_or(backend: &dyn AnalyticsBackend, local: SessionDirectory) -> SessionDirectory {
    match load_directory(backend).await {
        Ok(directory) => directory,
        Err(err) => {
            tracing::warn!(%err, "reload after delete failed, keeping local list");
            local
        }
    }
}

/// Fetches the export document. A body the summary cannot read is still
/// offered for download.
pub async fn export_session(
    backend: &dyn AnalyticsBackend,
    session: &ChatSession,
) -> Result<ExportedSession, ApiError> {
    let document = backend.export_session(&session.session_id).await?;
    let summary = match serde_json::from_str::<SessionExport>(&document) {
        Ok(export) => ExportSummary::from_export(&export),
        Err(err) => {
            tracing::warn!(%err, session = %session.session_id, "export not summarised");
            ExportSummary::default()
        }
    };
    Ok(ExportedSession {
        file_name: session.export_file_name(),
        document,
        summary,
    })
}

pub async fn delete_session(
    backend: &dyn AnalyticsBackend,
    current: &SessionDirectory,
    session_id: &str,
) -> Result<SessionDirectory, ApiError> {
    backend.clear_session(session_id).await?;
    tracing::info!(session = session_id, "chat session deleted");
    Ok(refresh_or(backend, current.without_session(session_id)).await)
}

pub async fn clear_history(
    backend: &dyn AnalyticsBackend,
    current: &SessionDirectory,
) -> Result<SessionDirectory, ApiError> {
    backend.clear_history().await?;
    tracing::info!("chat history cleared");
    Ok(refresh_or(backend, current.without_sessions()).await)
}

pub fn download_href(document: &str) -> String {
    format!(
        "data:application/json;charset=utf-8,{}",
        urlencoding::encode(document)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeAnalytics {
        sessions: RefCell<Vec<ChatSession>>,
        export: Option<String>,
        offline: bool,
        offline_after_delete: bool,
        tools_broken: bool,
        calls: RefCell<Vec<String>>,
    }

    fn session(id: &str) -> ChatSession {
        ChatSession {
            session_id: id.into(),
            user_id: "user_1".into(),
            title: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[async_trait(?Send)]
    impl AnalyticsBackend for FakeAnalytics {
        async fn sessions(&self) -> Result<Vec<ChatSession>, ApiError> {
            self.calls.borrow_mut().push("sessions".into());
            let deleted = self.calls.borrow().iter().any(|c| c.starts_with("clear"));
            if self.offline || (self.offline_after_delete && deleted) {
                return Err(ApiError::Connectivity("refused".into()));
            }
            Ok(self.sessions.borrow().clone())
        }
        async fn export_session(&self, session_id: &str) -> Result<String, ApiError> {
            self.calls.borrow_mut().push(format!("export {}", session_id));
            self.export.clone().ok_or(ApiError::Request {
                status: 404,
                message: "Session not found".into(),
            })
        }
        async fn clear_session(&self, session_id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("clear {}", session_id));
            self.sessions.borrow_mut().retain(|s| s.session_id != session_id);
            Ok(())
        }
        async fn clear_history(&self) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("clear all".into());
            self.sessions.borrow_mut().clear();
            Ok(())
        }
        async fn tool_definitions(&self) -> Result<Vec<ToolDefinition>, ApiError> {
            self.calls.borrow_mut().push("tools".into());
            if self.tools_broken {
                return Err(ApiError::Request {
                    status: 500,
                    message: "tool table missing".into(),
                });
            }
            Ok(Vec::new())
        }
    }

    #[test]
    fn deleting_a_session_reloads_the_list() {
        let fake = FakeAnalytics {
            sessions: RefCell::new(vec![session("s1"), session("s2")]),
            ..Default::default()
        };
        let current = block_on(load_directory(&fake)).unwrap();
        let directory = block_on(delete_session(&fake, &current, "s1")).unwrap();
        assert_eq!(directory.sessions, vec![session("s2")]);
        assert!(fake.calls.borrow().contains(&"clear s1".to_string()));
    }

    #[test]
    fn delete_counts_as_done_when_the_reload_fails() {
        let fake = FakeAnalytics {
            sessions: RefCell::new(vec![session("s1"), session("s2")]),
            offline_after_delete: true,
            ..Default::default()
        };
        let current = block_on(load_directory(&fake)).unwrap();
        let directory = block_on(delete_session(&fake, &current, "s1")).unwrap();
        assert_eq!(directory.sessions, vec![session("s2")]);

        let cleared = block_on(clear_history(&fake, &directory)).unwrap();
        assert!(cleared.sessions.is_empty());
    }

    #[test]
    fn broken_tool_list_does_not_hide_sessions() {
        let fake = FakeAnalytics {
            sessions: RefCell::new(vec![session("s1")]),
            tools_broken: true,
            ..Default::default()
        };
        let directory = block_on(load_directory(&fake)).unwrap();
        assert_eq!(directory.sessions, vec![session("s1")]);
        assert!(directory.tools.is_empty());
        assert_eq!(
            directory.tools_error.as_deref(),
            Some("Failed to load tool definitions: tool table missing")
        );

        let after = block_on(delete_session(&fake, &directory, "s1")).unwrap();
        assert!(after.sessions.is_empty());
    }

    #[test]
    fn clearing_history_empties_the_list() {
        let fake = FakeAnalytics {
            sessions: RefCell::new(vec![session("s1")]),
            ..Default::default()
        };
        let directory = block_on(clear_history(&fake, &SessionDirectory::default())).unwrap();
        assert!(directory.sessions.is_empty());
    }

    #[test]
    fn offline_service_gets_a_hint() {
        let fake = FakeAnalytics {
            offline: true,
            ..Default::default()
        };
        let err = block_on(load_directory(&fake)).unwrap_err();
        let text = describe_failure("load chat sessions", &err);
        assert!(text.contains("analytics service is running"));

        let rejected = ApiError::Request {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            describe_failure("export session", &rejected),
            "Failed to export session: boom"
        );
    }

    #[test]
    fn export_keeps_the_document_and_counts_turns() {
        let document = r#"{"chat_history":[
            {"message_id":"m1","session_id":"s1","message_type":"human","content":"hi"},
            {"message_id":"m2","session_id":"s1","message_type":"tool_call","tool_name":"get_user_accounts"},
            {"message_id":"m3","session_id":"s1","message_type":"tool_result","tool_error":"timeout"},
            {"message_id":"m4","session_id":"s1","message_type":"ai","content":"hello"}
        ],"tool_usage":[
            {"tool_call_id":"t1","session_id":"s1","tool_name":"get_user_accounts","status":"timeout"},
            {"tool_call_id":"t2","session_id":"s1","tool_name":"get_user_accounts","status":"success"}
        ]}"#;
        let fake = FakeAnalytics {
            export: Some(document.to_string()),
            ..Default::default()
        };
        let exported = block_on(export_session(&fake, &session("s1"))).unwrap();
        assert_eq!(exported.file_name, "chat-session-s1.json");
        assert_eq!(exported.document, document);
        assert_eq!(
            exported.summary,
            ExportSummary {
                user_messages: 1,
                assistant_messages: 1,
                tool_calls: 1,
                tool_errors: 1,
                failed_tool_runs: 1,
            }
        );
    }

    #[test]
    fn unreadable_export_is_still_downloadable() {
        let fake = FakeAnalytics {
            export: Some("not json".into()),
            ..Default::default()
        };
        let exported = block_on(export_session(&fake, &session("s1"))).unwrap();
        assert_eq!(exported.summary, ExportSummary::default());
        assert_eq!(
            download_href("{\"a\": 1}"),
            "data:application/json;charset=utf-8,%7B%22a%22%3A%201%7D"
        );
    }
}
