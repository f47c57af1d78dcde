// src/transcript.rs

use crate::chat_message::ChatMessage;
use crate::errors::ObrolanResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the current transcript to a plain-text file, one timestamped line
/// per bubble. A write-only snapshot; nothing is ever read back.
pub fn export_transcript(messages: &[ChatMessage], path: &Path) -> ObrolanResult<()> {
    let mut file = File::create(path)?;

    for message in messages {
        writeln!(
            file,
            "[{}] {}",
            message.timestamp.format("%Y-%m-%d %H:%M:%S"),
            message.plain_text()
        )?;
    }

    Ok(())
}
