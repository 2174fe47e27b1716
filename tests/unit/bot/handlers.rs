use super::*;
use crate::assets::decode::decode_animation;
use crate::assets::test_gif::three_frame_gif;
use crate::assets::source::AnimationBytes;
use crate::bot::sink::InMemorySink;
use crate::foundation::error::CaptionError;
use crate::compose::compositor::CaptionStyle;
use crate::text::test_font::BoxFont;

fn bot() -> CaptionBot<BoxFont, InMemorySink> {
    CaptionBot::new(
        Compositor::from_font(BoxFont::new(4, 8), CaptionStyle::default()),
        InMemorySink::new(),
        AnimationSource::memory("monkey.gif", three_frame_gif()),
        "monkey_bot",
    )
}

#[test]
fn command_argument_takes_text_after_command_word() {
    assert_eq!(command_argument("/monkey hello world"), Some("hello world"));
    assert_eq!(command_argument("/monkey   spaced  out "), Some("spaced  out "));
    assert_eq!(command_argument("/monkey\nnext line"), Some("next line"));
    assert_eq!(command_argument("/monkey"), None);
    assert_eq!(command_argument("/monkey    "), None);
    assert_eq!(command_argument(""), None);
}

#[test]
fn normalize_caption_upper_cases() {
    assert_eq!(normalize_caption("hello Wörld"), "HELLO WÖRLD");
}

#[test]
fn start_sends_demo_caption_and_help() {
    let mut bot = bot();
    let reply = bot.start(ChatId(7)).unwrap();

    assert!(reply.help_text.contains("/monkey {text}"));
    assert!(reply.help_text.contains("@monkey_bot text"));
    assert_eq!(reply.delivery.chat, ChatId(7));

    let (chat, animation) = &bot.sink().sent()[0];
    assert_eq!(*chat, ChatId(7));
    assert_eq!(animation.name(), "caption.gif");
    assert_ne!(animation.as_bytes(), three_frame_gif().as_slice());
}

#[test]
fn command_without_text_sends_source_unchanged() {
    let mut bot = bot();
    bot.caption_command(ChatId(1), "/monkey").unwrap();

    let (_, animation) = &bot.sink().sent()[0];
    assert_eq!(animation.name(), "monkey.gif");
    assert_eq!(animation.as_bytes(), three_frame_gif().as_slice());
}

#[test]
fn command_with_text_sends_captioned_animation() {
    let mut bot = bot();
    bot.caption_command(ChatId(1), "/monkey hi there").unwrap();

    let (_, animation) = &bot.sink().sent()[0];
    let decoded = decode_animation(animation.as_bytes()).unwrap();
    assert_eq!(decoded.frame_count(), 3);
}

#[test]
fn inline_query_answers_with_stored_file() {
    let mut bot = bot();
    let storage = ChatId(-100);
    let result = bot.inline_query("hello", storage).unwrap().unwrap();

    assert_eq!(result.id, "HELLO");
    assert_eq!(result.file_id, "mem-0");
    assert_eq!(bot.sink().sent()[0].0, storage);
}

#[test]
fn empty_inline_query_is_ignored() {
    let mut bot = bot();
    assert_eq!(bot.inline_query("", ChatId(-100)).unwrap(), None);
    assert!(bot.sink().sent().is_empty());
}

#[test]
fn failures_reach_the_caller_and_nothing_is_sent() {
    let mut bot = CaptionBot::new(
        Compositor::from_font(BoxFont::new(4, 8), CaptionStyle::default()),
        InMemorySink::new(),
        AnimationSource::memory("broken.gif", b"nope".to_vec()),
        "monkey_bot",
    );
    let err = bot.caption_command(ChatId(1), "/monkey hi").unwrap_err();
    assert!(err.is_resource_unavailable());
    assert!(bot.into_sink().sent().is_empty());
}

struct FailingSink {
    attempts: usize,
}

impl AnimationSink for FailingSink {
    fn send_animation(
        &mut self,
        _chat: ChatId,
        _animation: AnimationBytes,
    ) -> CaptionResult<Delivery> {
        self.attempts += 1;
        Err(CaptionError::resource_unavailable("chat is gone"))
    }
}

#[test]
fn delivery_failures_reach_the_caller() {
    let mut bot = CaptionBot::new(
        Compositor::from_font(BoxFont::new(4, 8), CaptionStyle::default()),
        FailingSink { attempts: 0 },
        AnimationSource::memory("monkey.gif", three_frame_gif()),
        "monkey_bot",
    );
    let err = bot.caption_command(ChatId(9), "/monkey hi").unwrap_err();
    assert!(err.to_string().contains("chat is gone"), "{err}");
    assert_eq!(bot.into_sink().attempts, 1);
}

#[test]
fn requests_carry_the_configured_source() {
    let bot = bot();
    let req = bot.request(ChatId(3), Some("X".to_string()));
    assert_eq!(req.destination, ChatId(3));
    assert_eq!(req.caption.as_deref(), Some("X"));
    assert_eq!(req.source.name(), "monkey.gif");
}
