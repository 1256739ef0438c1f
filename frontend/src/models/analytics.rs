use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ChatSession {
    /// Untitled sessions are named after the first eight characters of their id.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!(
                "Session {}",
                self.session_id.chars().take(8).collect::<String>()
            ),
        }
    }

    pub fn export_file_name(&self) -> String {
        format!("chat-session-{}.json", self.session_id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    Human,
    Ai,
    System,
    ToolCall,
    ToolResult,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatHistory {
    #[serde(alias = "message_id")]
    pub id: String,
    pub session_id: String,
    #[serde(default)]
    pub user_id: String,
    pub message_type: HistoryKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_name: Option<String>,
    #[serde(default)]
    pub tool_call_id: Option<String>,
    #[serde(default)]
    pub tool_error: Option<String>,
    #[serde(default)]
    pub tool_execution_time_ms: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolUsageStatus {
    Pending,
    Success,
    Error,
    Timeout,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ToolUsage {
    #[serde(alias = "tool_call_id")]
    pub id: String,
    pub session_id: String,
    pub tool_name: String,
    #[serde(default)]
    pub execution_time_ms: u64,
    pub status: ToolUsageStatus,
    #[serde(default)]
    pub cost_cents: Option<u32>,
    #[serde(default)]
    pub tokens_used: Option<u32>,
    #[serde(default)]
    pub rate_limit_hit: bool,
    #[serde(default)]
    pub retry_count: u32,
    #[serde(default)]
    pub started_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ToolDefinition {
    #[serde(alias = "tool_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub cost_per_call_cents: u32,
    #[serde(default)]
    pub is_active: bool,
}

/// The parts of a session export the viewer can summarise. The file itself
/// is saved untouched; anything missing here simply defaults to empty.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SessionExport {
    #[serde(default, alias = "chat_history", alias = "history")]
    pub messages: Vec<ChatHistory>,
    #[serde(default, alias = "tool_usages")]
    pub tool_usage: Vec<ToolUsage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_session_uses_id_prefix() {
        let session = ChatSession {
            session_id: "session_0123456789".into(),
            user_id: "user_1".into(),
            title: Some("  ".into()),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(session.display_title(), "Session session_");
        assert_eq!(session.export_file_name(), "chat-session-session_0123456789.json");
    }

    #[test]
    fn tool_definition_accepts_server_id_name() {
        let json = r#"{"tool_id":"tooldef_1","name":"transfer_money","version":"1.0.0","cost_per_call_cents":2,"is_active":true}"#;
        let def: ToolDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.id, "tooldef_1");
        assert!(def.description.is_none());
    }

    #[test]
    fn export_tolerates_partial_documents() {
        let json = r#"{"session":{"session_id":"s"},"chat_history":[
            {"message_id":"m1","session_id":"s","message_type":"human","content":"hi"},
            {"message_id":"m2","session_id":"s","message_type":"tool_call","tool_name":"get_user_accounts"}
        ]}"#;
        let export: SessionExport = serde_json::from_str(json).unwrap();
        assert_eq!(export.messages.len(), 2);
        assert_eq!(export.messages[1].message_type, HistoryKind::ToolCall);
        assert!(export.tool_usage.is_empty());
    }
}
