//! # Terminal rendering
//!
//! Card-style output: tags first, then title, then a truncated
//! description. `--json` bypasses all of it.

use domains::{Message, Tag};

/// Descriptions are cut at 150 characters in card views.
const SUMMARY_CHARS: usize = 150;

pub fn print_messages(messages: &[Message], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(messages)?);
        return Ok(());
    }
    if messages.is_empty() {
        println!("No messages.");
        return Ok(());
    }
    for message in messages {
        println!("{}", message_card(message));
    }
    Ok(())
}

pub fn print_message_detail(message: &Message, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(message)?);
        return Ok(());
    }
    println!("#{} {}", message.id, message.title);
    if !message.tags.is_empty() {
        println!("  tags: {}", message.tags.join(", "));
    }
    if let Some(thumbnail) = &message.thumbnail {
        println!("  thumbnail: {thumbnail}");
    }
    if let Some(video) = &message.video {
        println!("  video: {video}");
    }
    println!();
    println!("{}", message.description);
    if let Some(transcript) = &message.transcript {
        println!();
        println!("--- transcript ---");
        println!("{transcript}");
    }
    Ok(())
}

pub fn print_tags(tags: &[Tag], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tags)?);
        return Ok(());
    }
    if tags.is_empty() {
        println!("No tags.");
        return Ok(());
    }
    for tag in tags {
        println!("#{:<4} {}", tag.id, tag.name);
    }
    Ok(())
}

fn message_card(message: &Message) -> String {
    let mut card = String::new();
    if !message.tags.is_empty() {
        card.push_str(&format!("[{}]\n", message.tags.join("] [")));
    }
    card.push_str(&format!("#{} {}\n", message.id, message.title));
    card.push_str(&format!("    {}\n", summarize(&message.description)));
    card
}

fn summarize(description: &str) -> String {
    if description.chars().count() > SUMMARY_CHARS {
        let cut: String = description.chars().take(SUMMARY_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}
