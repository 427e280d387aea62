pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portal", version, about = "Terminal client for the CMS portal")]
pub struct Cli {
    /// Answer yes to every confirmation prompt.
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read, like or delete an article.
    Article {
        #[command(subcommand)]
        action: ArticleCommand,
    },
    /// Post, edit or delete comments under an article.
    Comment {
        #[command(subcommand)]
        action: CommentCommand,
    },
    /// Review pending registrations.
    Admin {
        #[command(subcommand)]
        action: AdminCommand,
    },
    /// Request an account; an administrator approves it later.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
        /// Where to continue after a successful request.
        #[arg(long)]
        next: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ArticleCommand {
    /// Print the article with its comments.
    Show {
        id: String,
        /// 1-based gallery image to show as the main image.
        #[arg(long)]
        image: Option<usize>,
        /// Page the reader came from.
        #[arg(long)]
        referrer: Option<String>,
    },
    /// Toggle the viewer's like.
    Like { id: String },
    /// Delete the article after confirmation.
    Delete {
        id: String,
        #[arg(long)]
        referrer: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CommentCommand {
    Add {
        article_id: String,
        text: String,
    },
    Edit {
        article_id: String,
        comment_id: String,
        text: String,
    },
    Delete {
        article_id: String,
        comment_id: String,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List pending registrations.
    Pending {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    Approve { user_id: String },
    Reject { user_id: String },
}
