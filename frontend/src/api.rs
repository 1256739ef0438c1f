use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{
    Account, ActionReceipt, ChatMessage, ChatSession, CreatedVendor, Invoice, NewAccount,
    NewPayment, NewTransaction, NewVendor, ToolDefinition, Transaction, Vendor,
};

#[async_trait(?Send)]
pub trait BankingBackend {
    async fn accounts(&self) -> Result<Vec<Account>, ApiError>;
    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError>;
    async fn create_transaction(&self, body: &NewTransaction) -> Result<ActionReceipt, ApiError>;
    async fn create_account(&self, body: &NewAccount) -> Result<ActionReceipt, ApiError>;
}

#[async_trait(?Send)]
pub trait ReceivablesBackend {
    async fn vendors(&self) -> Result<Vec<Vendor>, ApiError>;
    async fn invoices(&self) -> Result<Vec<Invoice>, ApiError>;
    async fn create_payment(&self, body: &NewPayment) -> Result<ActionReceipt, ApiError>;
    async fn create_vendor(&self, body: &NewVendor) -> Result<CreatedVendor, ApiError>;
}

#[async_trait(?Send)]
pub trait ChatBackend {
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String, ApiError>;
}

#[async_trait(?Send)]
pub trait AnalyticsBackend {
    async fn sessions(&self) -> Result<Vec<ChatSession>, ApiError>;
    async fn export_session(&self, session_id: &str) -> Result<String, ApiError>;
    async fn clear_session(&self, session_id: &str) -> Result<(), ApiError>;
    async fn clear_history(&self) -> Result<(), ApiError>;
    async fn tool_definitions(&self) -> Result<Vec<ToolDefinition>, ApiError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

/// Decodes a 2xx body, reporting garbage as an unexpected response.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        tracing::warn!(status, %err, "undecodable response body");
        ApiError::unexpected_body(status)
    })
}

/// Account creation reports failures inside a success status.
pub fn account_receipt(status: u16, body: &str) -> Result<ActionReceipt, ApiError> {
    let receipt: ActionReceipt = decode(status, body)?;
    if receipt.is_error() {
        return Err(ApiError::Request {
            status,
            message: if receipt.message.is_empty() {
                "There was an error creating the new account.".to_string()
            } else {
                receipt.message
            },
        });
    }
    Ok(receipt)
}

/// Receipt for writes that count as done on any 2xx, whatever the body says.
pub fn lenient_receipt(status: u16, body: &str) -> ActionReceipt {
    serde_json::from_str(body).unwrap_or_else(|err| {
        tracing::debug!(status, %err, "ignoring unreadable receipt");
        ActionReceipt {
            status: status.to_string(),
            ..Default::default()
        }
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn finish(url: &str, sent: Result<Response, gloo_net::Error>) -> Result<(u16, String), ApiError> {
        let resp = sent.map_err(|err| {
            tracing::warn!(url, %err, "request did not reach the server");
            ApiError::Connectivity(err.to_string())
        })?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| ApiError::Connectivity(err.to_string()))?;
        tracing::debug!(url, status, "response received");
        if !resp.ok() {
            let err = ApiError::from_response(status, &body);
            tracing::warn!(url, status, %err, "request rejected");
            return Err(err);
        }
        Ok((status, body))
    }

    async fn get(&self, path: &str) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        Self::finish(&url, Request::get(&url).send().await).await
    }

    async fn delete(&self, path: &str) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");
        Self::finish(&url, Request::delete(&url).send().await).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(u16, String), ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let request = Request::post(&url)
            .json(body)
            .map_err(|err| ApiError::Connectivity(err.to_string()))?;
        Self::finish(&url, request.send().await).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (status, body) = self.get(path).await?;
        decode(status, &body)
    }
}

#[async_trait(?Send)]
impl BankingBackend for HttpBackend {
    async fn accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_json("/accounts").await
    }

    async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/transactions").await
    }

    async fn create_transaction(&self, body: &NewTransaction) -> Result<ActionReceipt, ApiError> {
        let (status, body) = self.post("/transactions", body).await?;
        Ok(lenient_receipt(status, &body))
    }

    async fn create_account(&self, body: &NewAccount) -> Result<ActionReceipt, ApiError> {
        let (status, body) = self.post("/accounts", body).await?;
        account_receipt(status, &body)
    }
}

#[async_trait(?Send)]
impl ReceivablesBackend for HttpBackend {
    async fn vendors(&self) -> Result<Vec<Vendor>, ApiError> {
        self.get_json("/vendors").await
    }

    async fn invoices(&self) -> Result<Vec<Invoice>, ApiError> {
        self.get_json("/invoices").await
    }

    async fn create_payment(&self, body: &NewPayment) -> Result<ActionReceipt, ApiError> {
        let (status, body) = self.post("/payments", body).await?;
        Ok(lenient_receipt(status, &body))
    }

    async fn create_vendor(&self, body: &NewVendor) -> Result<CreatedVendor, ApiError> {
        let (status, body) = self.post("/vendors", body).await?;
        decode(status, &body)
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpBackend {
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String, ApiError> {
        let (status, body) = self.post("/chatbot", &ChatRequest { messages }).await?;
        let reply: ChatReply = decode(status, &body)?;
        Ok(reply.response)
    }
}

#[async_trait(?Send)]
impl AnalyticsBackend for HttpBackend {
    async fn sessions(&self) -> Result<Vec<ChatSession>, ApiError> {
        self.get_json("/chat/sessions").await
    }

    async fn export_session(&self, session_id: &str) -> Result<String, ApiError> {
        let path = format!("/chat/sessions/{}/export", urlencoding::encode(session_id));
        let (_, body) = self.get(&path).await?;
        Ok(body)
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), ApiError> {
        let path = format!("/admin/clear-session/{}", urlencoding::encode(session_id));
        self.delete(&path).await.map(|_| ())
    }

    async fn clear_history(&self) -> Result<(), ApiError> {
        self.delete("/admin/clear-chat-history").await.map(|_| ())
    }

    async fn tool_definitions(&self) -> Result<Vec<ToolDefinition>, ApiError> {
        self.get_json("/tools/definitions").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bodies_become_unexpected_response_errors() {
        let result: Result<Vec<Account>, ApiError> = decode(200, "<html>oops</html>");
        assert_eq!(result, Err(ApiError::unexpected_body(200)));
    }

    #[test]
    fn account_receipt_surfaces_embedded_errors() {
        let err = account_receipt(201, r#"{"status":"error","message":"Name already used."}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Request {
                status: 201,
                message: "Name already used.".into()
            }
        );

        let ok = account_receipt(201, r#"{"status":"success","message":"Created","account_id":"acc_9"}"#)
            .unwrap();
        assert_eq!(ok.account_id.as_deref(), Some("acc_9"));
    }

    #[test]
    fn posted_writes_tolerate_unreadable_bodies() {
        let receipt = lenient_receipt(201, "Created");
        assert_eq!(receipt.status, "201");
        assert!(!receipt.is_error());
        assert!(receipt.message.is_empty());

        let parsed = lenient_receipt(200, r#"{"status":"success","message":"Payment recorded"}"#);
        assert_eq!(parsed.message, "Payment recorded");
    }

    #[test]
    fn chat_request_wraps_the_transcript() {
        let messages = vec![ChatMessage::assistant("Hi"), ChatMessage::user("hello")];
        let json = serde_json::to_value(ChatRequest { messages: &messages }).unwrap();
        assert_eq!(json["messages"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn urls_join_base_and_path() {
        let backend = HttpBackend::new("http://127.0.0.1:5001/api");
        assert_eq!(backend.url("/accounts"), "http://127.0.0.1:5001/api/accounts");
    }
}
