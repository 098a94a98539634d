//! Outbound Telegram sends for each delivery path.

use factbot_core::delivery::{broadcast_text, reply_text, INLINE_RESULT_TITLE};
use factbot_core::GenerationOutcome;
use teloxide::{
    prelude::*,
    types::{
        ChatId, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
        InputMessageContentText,
    },
};
use uuid::Uuid;

/// Send the scheduled broadcast: exactly one message per configured chat,
/// fact or fallback.
pub async fn deliver_broadcast(
    bot: &Bot,
    chats: &[ChatId],
    outcome: &GenerationOutcome,
) -> ResponseResult<()> {
    let text = broadcast_text(outcome);

    for chat in chats {
        bot.send_message(*chat, &text).await?;
    }

    Ok(())
}

/// Reply to the chat that issued an on-demand command.
pub async fn deliver_reply(
    bot: &Bot,
    chat: ChatId,
    outcome: &GenerationOutcome,
) -> ResponseResult<()> {
    bot.send_message(chat, reply_text(outcome)).await?;
    Ok(())
}

/// Answer an inline query: one result card for a fresh fact, none otherwise.
///
/// Each answer carries a freshly generated result id.
pub async fn deliver_inline_result(
    bot: &Bot,
    query_id: String,
    outcome: &GenerationOutcome,
) -> ResponseResult<()> {
    let results: Vec<InlineQueryResult> = match outcome.fact() {
        Some(fact) => vec![InlineQueryResult::Article(InlineQueryResultArticle::new(
            Uuid::new_v4().to_string(),
            INLINE_RESULT_TITLE,
            InputMessageContent::Text(InputMessageContentText::new(fact)),
        ))],
        None => Vec::new(),
    };

    bot.answer_inline_query(query_id, results).await?;
    Ok(())
}
