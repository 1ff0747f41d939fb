//! outreach CLI: drive the conversation store and scheduler registry from
//! the terminal. Each invocation seeds the in-memory stores, runs one
//! operation, and prints the result; config from env and CLI args.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use outreach_core::{
    format_message_time, format_relative_time, format_scheduled_date, init_tracing, Conversation,
    Message, MessageStatus, Sender, TracingNotifier,
};
use outreach_store::{seed, ConversationStore, SchedulerRegistry, StoreConfig};

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Outreach messaging CLI: inbox, send, schedule", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List conversations with unread markers and recency.
    Inbox,
    /// Show a conversation thread (marks it read).
    Show {
        #[arg(short, long)]
        id: i64,
    },
    /// Send a message to a conversation.
    Send {
        #[arg(short, long)]
        id: i64,
        #[arg(short, long)]
        message: String,
        /// Wait for the simulated reply and print it.
        #[arg(short, long)]
        wait: bool,
    },
    /// List pending scheduled messages.
    Scheduled,
    /// Schedule a message for a future send.
    Schedule {
        #[arg(short, long)]
        message: String,
        /// Send time, RFC 3339 (e.g. 2026-09-10T14:30:00Z).
        #[arg(short, long)]
        at: DateTime<Utc>,
        /// Comma-separated conversation ids, e.g. 1,2,3.
        #[arg(short, long)]
        recipients: String,
        #[arg(short, long, default_value = "Instagram")]
        platform: String,
    },
    /// Delete a scheduled message by id.
    DeleteScheduled {
        #[arg(short, long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let log_file = std::env::var("LOG_FILE").ok();
    init_tracing(log_file.as_deref())?;

    let cli = Cli::parse();
    let config = StoreConfig::from_env();

    let notifier = Arc::new(TracingNotifier);
    let store = ConversationStore::new(
        seed::conversations().context("Parse embedded conversation seed")?,
        config.clone(),
        notifier.clone(),
    );
    let registry = SchedulerRegistry::new(
        seed::scheduled_messages().context("Parse embedded scheduled seed")?,
        notifier,
    );

    match cli.command {
        Commands::Inbox => handle_inbox(&store).await,
        Commands::Show { id } => handle_show(&store, id).await,
        Commands::Send { id, message, wait } => {
            handle_send(&store, &config, id, &message, wait).await
        }
        Commands::Scheduled => handle_scheduled(&registry).await,
        Commands::Schedule {
            message,
            at,
            recipients,
            platform,
        } => handle_schedule(&registry, &message, at, &recipients, &platform).await,
        Commands::DeleteScheduled { id } => handle_delete_scheduled(&registry, id).await,
    }
}

const PREVIEW_LEN: usize = 40;

/// First `n` characters, newlines flattened, with an ellipsis when cut.
fn preview(content: &str, n: usize) -> String {
    let flat = content.replace('\n', " ");
    if flat.chars().count() <= n {
        flat
    } else {
        let cut: String = flat.chars().take(n).collect();
        format!("{}…", cut)
    }
}

fn status_mark(status: MessageStatus) -> &'static str {
    match status {
        MessageStatus::Sent => "✓",
        MessageStatus::Delivered => "✓",
        MessageStatus::Read => "✓✓",
        MessageStatus::Failed => "✗",
    }
}

fn print_message(conversation: &Conversation, message: &Message) {
    match message.sender {
        Sender::User => println!(
            "[{}] you: {} {}",
            format_message_time(&message.sent_at),
            message.content,
            status_mark(message.status)
        ),
        Sender::Contact => println!(
            "[{}] {}: {}",
            format_message_time(&message.sent_at),
            conversation.name,
            message.content
        ),
    }
}

async fn handle_inbox(store: &ConversationStore) -> Result<()> {
    let conversations = store.conversations().await;
    let now = Utc::now();

    println!(
        "{:<4} {:<18} {:<10} {:<3} {:<14} {}",
        "id", "name", "platform", "", "activity", "last message"
    );
    println!("{}", "-".repeat(96));
    for conversation in &conversations {
        println!(
            "{:<4} {:<18} {:<10} {:<3} {:<14} {}",
            conversation.id,
            conversation.name,
            conversation.platform,
            if conversation.unread { "●" } else { "" },
            format_relative_time(&conversation.last_activity, &now),
            preview(&conversation.last_message, PREVIEW_LEN)
        );
    }
    Ok(())
}

async fn handle_show(store: &ConversationStore, id: i64) -> Result<()> {
    store.mark_conversation_read(id).await;
    let conversation = store
        .conversation(id)
        .await
        .with_context(|| format!("No conversation with id {}", id))?;

    println!(
        "{} (@{} • {})\n",
        conversation.name, conversation.username, conversation.platform
    );
    for message in &conversation.messages {
        print_message(&conversation, message);
    }
    Ok(())
}

async fn handle_send(
    store: &ConversationStore,
    config: &StoreConfig,
    id: i64,
    message: &str,
    wait: bool,
) -> Result<()> {
    store
        .send_message(id, message)
        .await
        .context("Send message")?;
    println!("Message sent.");

    if wait {
        println!(
            "Waiting {} ms for the simulated reply...",
            config.reply_delay.as_millis()
        );
        tokio::time::sleep(config.reply_delay + std::time::Duration::from_millis(250)).await;

        let conversation = store
            .conversation(id)
            .await
            .with_context(|| format!("No conversation with id {}", id))?;
        let tail = conversation.messages.len().saturating_sub(2);
        for message in &conversation.messages[tail..] {
            print_message(&conversation, message);
        }
    }
    Ok(())
}

async fn handle_scheduled(registry: &SchedulerRegistry) -> Result<()> {
    let entries = registry.scheduled_messages().await;
    if entries.is_empty() {
        println!("No scheduled messages.");
        return Ok(());
    }

    println!(
        "{:<16} {:<10} {:<11} {:<18} {}",
        "id", "platform", "recipients", "scheduled", "content"
    );
    println!("{}", "-".repeat(100));
    for entry in &entries {
        println!(
            "{:<16} {:<10} {:<11} {:<18} {}",
            entry.id,
            entry.platform,
            entry.recipients,
            format_scheduled_date(&entry.scheduled_for),
            preview(&entry.content, PREVIEW_LEN)
        );
    }
    Ok(())
}

async fn handle_schedule(
    registry: &SchedulerRegistry,
    message: &str,
    at: DateTime<Utc>,
    recipients: &str,
    platform: &str,
) -> Result<()> {
    let recipient_ids: Vec<i64> = recipients
        .split(',')
        .map(|s| s.trim().parse::<i64>())
        .collect::<std::result::Result<_, _>>()
        .context("Parse --recipients as comma-separated conversation ids")?;

    let entry = registry
        .schedule_message(message, at, &recipient_ids, platform)
        .await
        .context("Schedule message")?;

    println!(
        "Scheduled message {} to {} recipients at {}.",
        entry.id,
        entry.recipients,
        format_scheduled_date(&entry.scheduled_for)
    );
    Ok(())
}

async fn handle_delete_scheduled(registry: &SchedulerRegistry, id: i64) -> Result<()> {
    if registry.delete_scheduled_message(id).await {
        println!("Deleted scheduled message {}.", id);
    } else {
        println!("No scheduled message with id {}.", id);
    }
    Ok(())
}
