use crate::notifier::notify;
use crate::state::{AppState, Context};

pub async fn hello(state: &AppState, ctx: &Context) {
    notify(state, ctx, &ctx.config.replies.hello).await;
}

pub async fn safada(state: &AppState, ctx: &Context) {
    notify(state, ctx, &ctx.config.replies.safada).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn greetings_reply_with_fixed_text() {
        let harness = testing::harness();

        hello(&harness.state, &testing::context(&harness, 11, "/hello")).await;
        safada(&harness.state, &testing::context(&harness, 11, "/safada agora")).await;

        let sent = harness.recorder().sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].text, "hello!");
        assert_eq!(sent[1].text, "É você!");
        assert!(sent.iter().all(|s| s.chat_id == 11 && s.token == testing::TOKEN));
    }

    #[tokio::test]
    async fn greeting_text_comes_from_config() {
        let harness = testing::harness();
        let mut ctx = testing::context(&harness, 2, "/hello");
        ctx.config.replies.hello = "oi, sumida!".into();

        hello(&harness.state, &ctx).await;

        assert_eq!(harness.recorder().texts(), vec!["oi, sumida!"]);
    }
}
