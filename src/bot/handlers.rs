use crate::assets::source::AnimationSource;
use crate::bot::sink::{AnimationSink, ChatId, Delivery};
use crate::compose::compositor::Compositor;
use crate::foundation::error::CaptionResult;
use crate::text::font::CaptionFont;

/// Caption sent along with the `/start` help message.
pub const START_CAPTION: &str = "AAAAAA";

/// Command word that requests a captioned animation.
pub const CAPTION_COMMAND: &str = "/monkey";

/// One captioning job, independent of any transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionRequest {
    /// Text to burn in; `None` sends the source unchanged.
    pub caption: Option<String>,
    /// Chat that receives the result.
    pub destination: ChatId,
    /// Animation the caption is burned into.
    pub source: AnimationSource,
}

/// Reply to `/start`: help text plus the demo animation receipt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartReply {
    /// Usage instructions for the user.
    pub help_text: String,
    /// Receipt for the demo animation.
    pub delivery: Delivery,
}

/// Answer to an inline query, referencing an animation already stored by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineResult {
    /// Result id; the normalized caption.
    pub id: String,
    /// Stored animation the result points to.
    pub file_id: String,
}

/// Captions are shown upper-case; the compositor itself never changes case.
pub fn normalize_caption(text: &str) -> String {
    text.to_uppercase()
}

/// Everything after the command word, or `None` when nothing follows it.
pub fn command_argument(message_text: &str) -> Option<&str> {
    let (_, rest) = message_text.trim_start().split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    (!rest.is_empty()).then_some(rest)
}

/// Chat handlers wired to an explicitly constructed compositor, source and sink.
#[derive(Debug)]
pub struct CaptionBot<F, S> {
    compositor: Compositor<F>,
    sink: S,
    source: AnimationSource,
    username: String,
}

impl<F: CaptionFont, S: AnimationSink> CaptionBot<F, S> {
    /// Wire the handlers to their collaborators.
    pub fn new(
        compositor: Compositor<F>,
        sink: S,
        source: AnimationSource,
        username: impl Into<String>,
    ) -> Self {
        Self {
            compositor,
            sink,
            source,
            username: username.into(),
        }
    }

    /// Borrow the delivery sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the bot, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Build the request for `caption` against this bot's source animation.
    pub fn request(&self, destination: ChatId, caption: Option<String>) -> CaptionRequest {
        CaptionRequest {
            caption,
            destination,
            source: self.source.clone(),
        }
    }

    /// Render and deliver one request.
    #[tracing::instrument(skip(self, request), fields(chat = %request.destination))]
    pub fn handle(&mut self, request: CaptionRequest) -> CaptionResult<Delivery> {
        let delivered = request
            .source
            .load()
            .and_then(|src| self.compositor.composite(&src, request.caption.as_deref()))
            .and_then(|animation| self.sink.send_animation(request.destination, animation));

        let delivery = match delivered {
            Ok(delivery) => delivery,
            Err(err) => {
                tracing::warn!(error = %err, "caption request failed");
                return Err(err);
            }
        };

        tracing::info!(file_id = %delivery.file_id, "animation delivered");
        Ok(delivery)
    }

    /// Reply text for `/start`.
    pub fn help_text(&self) -> String {
        format!(
            "Send `{CAPTION_COMMAND} {{text}}` to get a custom monkey gif. \n\
             You can also use me as an inline bot in any chat by typing `@{} text`",
            self.username
        )
    }

    /// `/start`: help text plus a demo animation.
    pub fn start(&mut self, chat: ChatId) -> CaptionResult<StartReply> {
        let request = self.request(chat, Some(START_CAPTION.to_string()));
        let delivery = self.handle(request)?;
        Ok(StartReply {
            help_text: self.help_text(),
            delivery,
        })
    }

    /// Caption command: upper-cases the argument; no argument sends the plain source.
    pub fn caption_command(&mut self, chat: ChatId, message_text: &str) -> CaptionResult<Delivery> {
        let caption = command_argument(message_text).map(normalize_caption);
        let request = self.request(chat, caption);
        self.handle(request)
    }

    /// Inline query: renders into `storage` and answers with the stored file.
    ///
    /// Empty queries get no answer.
    pub fn inline_query(
        &mut self,
        query: &str,
        storage: ChatId,
    ) -> CaptionResult<Option<InlineResult>> {
        if query.is_empty() {
            return Ok(None);
        }

        let caption = normalize_caption(query);
        let request = self.request(storage, Some(caption.clone()));
        let delivery = self.handle(request)?;
        Ok(Some(InlineResult {
            id: caption,
            file_id: delivery.file_id,
        }))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bot/handlers.rs"]
mod tests;
