//! Console transport for local runs.
//!
//! Each stdin line is a direct message from a single local user; replies are
//! written to stdout. A few slash commands drive the lifecycle hooks.

use crate::actors::messages::DeliveryError;
use crate::actors::traits::Transport;
use crate::models::IncomingMessage;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

/// User id assigned to console input.
pub const CONSOLE_USER_ID: &str = "console";

/// One parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Message(IncomingMessage),
    /// `/disconnect`: simulate a transport disconnect.
    Disconnect,
    /// `/sweep`: run the session sweep now.
    Sweep,
    /// `/sessions`: dump live sessions as JSON.
    Sessions,
    /// `/quit` or end of input.
    Quit,
}

/// Parses one stdin line. `/group <text>` sends `text` as a group message.
pub fn parse_line(line: &str, display_name: Option<&str>) -> ConsoleInput {
    let trimmed = line.trim_end_matches(['\r', '\n']);

    match trimmed.trim() {
        "/disconnect" => return ConsoleInput::Disconnect,
        "/sweep" => return ConsoleInput::Sweep,
        "/sessions" => return ConsoleInput::Sessions,
        "/quit" | "/exit" => return ConsoleInput::Quit,
        _ => {}
    }

    let (text, is_group_chat) = match trimmed.strip_prefix("/group ") {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };

    ConsoleInput::Message(IncomingMessage {
        user_id: CONSOLE_USER_ID.to_string(),
        display_name: display_name.map(str::to_string),
        text: text.to_string(),
        is_group_chat,
    })
}

/// Writes replies to any async writer, stdout by default.
pub struct ConsoleTransport<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleTransport<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleTransport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W> Transport for ConsoleTransport<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn send_reply(&self, user_id: &str, text: &str) -> Result<(), DeliveryError> {
        let mut out = self.out.lock().await;
        out.write_all(format!("[to {}]\n{}\n\n", user_id, text).as_bytes())
            .await?;
        out.flush().await?;
        Ok(())
    }
}
