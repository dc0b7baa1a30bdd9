use anyhow::anyhow;
use console::style;

use boardapp::{Outcome, Post, PostSummary};

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M";

/// Render one controller outcome. `Error` outcomes become the process
/// error so the binary exits nonzero with the message on stderr.
pub fn outcome(outcome: Outcome) -> anyhow::Result<()> {
    match outcome {
        Outcome::PostsLoaded(posts) => {
            print_list(&posts);
            Ok(())
        }
        Outcome::PostLoaded(post) => {
            print_post(&post);
            Ok(())
        }
        Outcome::Created => {
            println!("{}", style("Post created.").green());
            Ok(())
        }
        Outcome::Updated => {
            println!("{}", style("Post updated.").green());
            Ok(())
        }
        Outcome::Deleted => {
            println!("{}", style("Post deleted.").green());
            Ok(())
        }
        Outcome::Error(message) => Err(anyhow!(message)),
    }
}

fn print_list(posts: &[PostSummary]) {
    if posts.is_empty() {
        println!("No posts yet.");
        return;
    }

    for post in posts {
        println!(
            "{:>4}  {}  {} {}",
            style(post.id).cyan(),
            style(&post.title).bold(),
            style(&post.author).dim(),
            style(post.created_at.format(TIMESTAMP_DISPLAY)).dim(),
        );
    }
}

fn print_post(post: &Post) {
    println!("{}", style(&post.title).bold());
    println!(
        "{}",
        style(format!(
            "#{} by {}, created {}, updated {}",
            post.id,
            post.author,
            post.created_at.format(TIMESTAMP_DISPLAY),
            post.updated_at.format(TIMESTAMP_DISPLAY),
        ))
        .dim()
    );
    println!();
    println!("{}", post.content);
}
