//! # Subcommands
//!
//! Subcommands: list and inspect messages, create and edit them, and
//! manage tags.

use clap::{Parser, Subcommand};
use domains::{AppError, MessageDraft, MessageQuery, TagQuery};
use services::{parse_tag_input, Catalog, MessageService, TagService};

use crate::output;

#[derive(Debug, Parser)]
#[command(name = "watermark", version, about = "Client for the Watermark CMS")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Emit raw JSON instead of cards
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Browse, create, and edit messages
    #[command(subcommand)]
    Messages(MessagesCommand),
    /// Browse and manage tags
    #[command(subcommand)]
    Tags(TagsCommand),
}

#[derive(Debug, Subcommand)]
enum MessagesCommand {
    /// Fetch messages and print them as cards
    List {
        /// Restrict to these ids (server-side filter)
        #[arg(long = "id")]
        ids: Vec<i64>,
        /// Restrict to these exact titles (server-side filter)
        #[arg(long = "title")]
        titles: Vec<String>,
        /// Keep only messages carrying at least one of these tags
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Print one message in full
    Show { id: i64 },
    /// Validate and submit a new message
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Image URL; probed for format and size before submission
        #[arg(long)]
        thumbnail: Option<String>,
        /// Video URL; probed for format before submission
        #[arg(long)]
        video: Option<String>,
        /// Ask the backend to transcribe the video (longer upload time)
        #[arg(long)]
        gen_transcript: bool,
        /// Comma-separated tag names
        #[arg(long)]
        tags: Option<String>,
    },
    /// Validate and submit changes to an existing message.
    /// Omitting --thumbnail or --video clears that field.
    Edit {
        id: i64,
        #[arg(long)]
        description: String,
        #[arg(long)]
        thumbnail: Option<String>,
        #[arg(long)]
        video: Option<String>,
        #[arg(long)]
        gen_transcript: bool,
        #[arg(long)]
        tags: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
enum TagsCommand {
    /// Fetch and print the tag list
    List {
        #[arg(long = "id")]
        ids: Vec<i64>,
        #[arg(long = "name")]
        names: Vec<String>,
        /// Restrict to tags assigned to messages whose title contains this
        #[arg(long = "message")]
        messages: Vec<String>,
    },
    /// Create the tags that do not exist yet
    Add {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Attach tags to messages (every message gets every tag)
    Assign {
        #[arg(long = "message", required = true)]
        message_ids: Vec<i64>,
        #[arg(long = "tag", required = true)]
        tag_ids: Vec<i64>,
    },
}

pub async fn run(
    args: Cli,
    messages: &MessageService,
    tags: &TagService,
    catalog: &Catalog,
) -> anyhow::Result<()> {
    match args.command {
        Command::Messages(command) => run_messages(command, args.json, messages, catalog).await,
        Command::Tags(command) => run_tags(command, args.json, messages, tags).await,
    }
}

async fn run_messages(
    command: MessagesCommand,
    json: bool,
    service: &MessageService,
    catalog: &Catalog,
) -> anyhow::Result<()> {
    match command {
        MessagesCommand::List { ids, titles, tags } => {
            // id/title filtering happens server-side; tag filtering happens
            // here, against the freshly cached list.
            let listed = if ids.is_empty() && titles.is_empty() {
                service.refresh().await?;
                if tags.is_empty() {
                    catalog.messages().await
                } else {
                    catalog.filter_by_tags(&tags).await
                }
            } else {
                let query = MessageQuery {
                    ids,
                    titles,
                    tags: Vec::new(),
                };
                let fetched = service.search(&query).await?;
                if tags.is_empty() {
                    fetched
                } else {
                    fetched
                        .into_iter()
                        .filter(|m| m.tags.iter().any(|t| tags.contains(t)))
                        .collect()
                }
            };
            output::print_messages(&listed, json)
        }
        MessagesCommand::Show { id } => {
            let query = MessageQuery {
                ids: vec![id],
                ..MessageQuery::default()
            };
            let found = service.search(&query).await?;
            let message = found
                .first()
                .ok_or_else(|| AppError::NotFound("message".to_string(), id.to_string()))?;
            output::print_message_detail(message, json)
        }
        MessagesCommand::Create {
            title,
            description,
            thumbnail,
            video,
            gen_transcript,
            tags,
        } => {
            let draft = MessageDraft {
                title: title.clone(),
                description,
                thumbnail,
                video,
                tags: tags.as_deref().map(parse_tag_input).unwrap_or_default(),
                gen_transcript,
            };
            service.create(draft).await?;
            println!("Successfully Created the Message: {title}");
            Ok(())
        }
        MessagesCommand::Edit {
            id,
            description,
            thumbnail,
            video,
            gen_transcript,
            tags,
        } => {
            // The backend keys the edit on the id but the validator still
            // wants the full draft, so fetch the current title first.
            let query = MessageQuery {
                ids: vec![id],
                ..MessageQuery::default()
            };
            let found = service.search(&query).await?;
            let current = found
                .first()
                .ok_or_else(|| AppError::NotFound("message".to_string(), id.to_string()))?;

            let draft = MessageDraft {
                title: current.title.clone(),
                description,
                thumbnail,
                video,
                tags: tags.as_deref().map(parse_tag_input).unwrap_or_default(),
                gen_transcript,
            };
            service.update(id, draft).await?;
            println!("Successfully Updated the Message: {}", current.title);
            Ok(())
        }
    }
}

async fn run_tags(
    command: TagsCommand,
    json: bool,
    message_service: &MessageService,
    service: &TagService,
) -> anyhow::Result<()> {
    match command {
        TagsCommand::List {
            ids,
            names,
            messages,
        } => {
            let listed = if ids.is_empty() && names.is_empty() && messages.is_empty() {
                service.refresh().await?
            } else {
                service
                    .search(&TagQuery {
                        ids,
                        names,
                        messages,
                    })
                    .await?
            };
            output::print_tags(&listed, json)
        }
        TagsCommand::Add { names } => {
            service.add(&names).await?;
            println!("Tags added successfully: {}", names.join(", "));
            Ok(())
        }
        TagsCommand::Assign {
            message_ids,
            tag_ids,
        } => {
            message_service
                .assign_tags(&message_ids, &tag_ids)
                .await?;
            println!(
                "Assigned {} tag(s) to {} message(s)",
                tag_ids.len(),
                message_ids.len()
            );
            Ok(())
        }
    }
}
