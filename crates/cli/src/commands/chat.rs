//! Direct messaging commands.

use findkaro_core::{ThreadKey, UserId};

use super::{CliApp, CliResult};

/// Send a message to another user.
pub fn send(app: &mut CliApp, recipient: &UserId, text: &str) -> CliResult {
    let identity = app.current()?;
    app.chats
        .send(&identity.id, &identity.display_name, recipient, text);
    println!("Sent");
    Ok(())
}

/// List the current user's conversations.
pub fn inbox(app: &CliApp) -> CliResult {
    let identity = app.current()?;
    let entries = app.chats.inbox(&identity.id);
    if entries.is_empty() {
        println!("No conversations");
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  ({} messages)  {}: {}",
            entry.key, entry.message_count, entry.latest.sender_name, entry.latest.text
        );
    }
    Ok(())
}

/// Show the conversation with one other user.
pub fn show(app: &CliApp, other: &UserId) -> CliResult {
    let identity = app.current()?;
    let key = ThreadKey::between(&identity.id, other);
    let messages = app.chats.thread(&key);
    if messages.is_empty() {
        println!("No messages yet");
        return Ok(());
    }
    for message in messages {
        println!(
            "[{}] {}: {}",
            message.sent_at.format("%Y-%m-%d %H:%M"),
            message.sender_name,
            message.text
        );
    }
    Ok(())
}
