//! Telegram command and inline-query surface.
//!
//! Uses an explicit Dispatcher with a dptree handler tree: one branch for
//! the /fact command, one for inline queries. Inline queries only trigger
//! generation when the query text mentions "fact"; everything else is
//! answered with zero results.

use crate::delivery;
use factbot_core::delivery::is_fact_query;
use factbot_core::FactGenerator;
use openai::OpenAi;
use std::sync::Arc;
use teloxide::{
    dispatching::UpdateFilterExt, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    types::InlineQuery, utils::command::BotCommands,
};
use tokio::sync::Mutex;

/// The generator, shared between the dispatcher and the scheduler.
///
/// The mutex serializes every generate-and-persist sequence, which keeps
/// the whole-file store updates single-writer even when a scheduled
/// broadcast coincides with a user command.
pub type SharedGenerator = Arc<Mutex<FactGenerator<OpenAi>>>;

/// Commands understood by the bot.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "send a fun fact.")]
    Fact,
}

/// Run the dispatcher with long polling until shutdown.
pub async fn run_dispatcher(bot: Bot, generator: SharedGenerator) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_inline_query().endpoint(inline_query_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![generator])
        .default_handler(|update| async move {
            tracing::debug!("unhandled update: {:?}", update);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error in update handler",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn command_handler(
    bot: Bot,
    msg: Message,
    command: Command,
    generator: SharedGenerator,
) -> ResponseResult<()> {
    match command {
        Command::Fact => {
            tracing::info!(chat = msg.chat.id.0, "fact command received");

            let outcome = match generator.lock().await.generate_unique_fact().await {
                Ok(outcome) => outcome,
                Err(err) => {
                    tracing::error!("fact command aborted, store failure: {err}");
                    return Ok(());
                }
            };

            delivery::deliver_reply(&bot, msg.chat.id, &outcome).await?;
        }
    }

    Ok(())
}

async fn inline_query_handler(
    bot: Bot,
    query: InlineQuery,
    generator: SharedGenerator,
) -> ResponseResult<()> {
    tracing::info!(query = %query.query, "inline query received");

    if !is_fact_query(&query.query) {
        // Not for us: answer with zero results so the client stops waiting.
        bot.answer_inline_query(query.id, Vec::new()).await?;
        return Ok(());
    }

    let outcome = match generator.lock().await.generate_unique_fact().await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("inline query aborted, store failure: {err}");
            return Ok(());
        }
    };

    delivery::deliver_inline_result(&bot, query.id, &outcome).await?;
    Ok(())
}
