//! # Notification Gate Scenarios
//!
//! Comment jobs go through the job queue to the worker; decisions are taken
//! when the job runs and are never revisited at read time.

#[cfg(test)]
mod tests {
    use shared_types::{AccountId, BlockScope, NotificationKind, PageRequest};
    use std::time::Duration;
    use tokio::time::timeout;

    use crate::integration::fixture::{root, user2, Expect, TwoServerFixture, LOCAL_HOST};

    #[tokio::test]
    async fn test_unblock_does_not_resurrect_suppressed_notifications() {
        let fx = TwoServerFixture::start().await;
        let root_id = AccountId::local("root");

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();
        fx.check_comment_notification(
            AccountId::local("user1"),
            "video server 1",
            "while blocked",
            Expect::Absence,
        )
        .await;

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();

        let feed = fx
            .engine
            .notification_sink
            .feed(&root_id, PageRequest::new(0, 30));
        assert_eq!(feed.total, 0);

        let metrics = fx.engine.notifications.metrics().snapshot();
        assert_eq!(metrics.suppressed, 1);
        assert_eq!(metrics.delivered, 0);
    }

    #[tokio::test]
    async fn test_block_does_not_hide_earlier_notifications() {
        let fx = TwoServerFixture::start().await;
        fx.check_comment_notification(user2(), "video server 1", "before the block", Expect::Presence)
            .await;

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, "user2@localhost:9002")
            .await
            .unwrap();

        let feed = fx
            .engine
            .notification_sink
            .feed(&AccountId::local("root"), PageRequest::new(0, 30));
        assert_eq!(feed.total, 1);
        assert_eq!(feed.data[0].kind, NotificationKind::NewCommentOnMyVideo);
        assert_eq!(feed.data[0].origin, user2());
    }

    #[tokio::test]
    async fn test_mention_is_judged_by_the_mentioned_account() {
        let fx = TwoServerFixture::start().await;

        // user1 blocks user2; root, the mentioned account, does not.
        let user1 = shared_types::Principal::user(AccountId::local("user1"));
        fx.blocklists()
            .block_account(&user1, BlockScope::Account, "user2@localhost:9002")
            .await
            .unwrap();

        fx.check_comment_notification(
            user2(),
            "video server 2",
            &format!("hello @root@{LOCAL_HOST} and @user1"),
            Expect::Presence,
        )
        .await;

        let root_feed = fx
            .engine
            .notification_sink
            .feed(&AccountId::local("root"), PageRequest::new(0, 30));
        assert_eq!(root_feed.data[0].kind, NotificationKind::CommentMention);

        let user1_feed = fx
            .engine
            .notification_sink
            .feed(&AccountId::local("user1"), PageRequest::new(0, 30));
        assert_eq!(user1_feed.total, 0);
    }

    #[tokio::test]
    async fn test_burst_beyond_bus_capacity_delivers_every_job() {
        let fx = TwoServerFixture::start_with(|config| {
            config.bus.channel_capacity = 4;
            config.bus.job_queue_capacity = 4;
        })
        .await;

        for n in 0..20 {
            let job = fx.comment_job(
                AccountId::local("user1"),
                "video server 1",
                &format!("comment {n}"),
            );
            fx.engine.submit_comment(job).await.unwrap();
        }
        timeout(Duration::from_secs(5), fx.runtime.shutdown())
            .await
            .expect("worker did not drain the queue");

        let feed = fx
            .engine
            .notification_sink
            .feed(&AccountId::local("root"), PageRequest::new(0, 30));
        assert_eq!(feed.total, 20);

        let metrics = fx.engine.notifications.metrics().snapshot();
        assert_eq!(metrics.delivered, 20);
        assert_eq!(metrics.failed, 0);
    }

    #[tokio::test]
    async fn test_job_without_recipients_completes() {
        let fx = TwoServerFixture::start().await;

        // root commenting on root's own video plans nothing.
        fx.check_comment_notification(
            AccountId::local("root"),
            "video server 1",
            "my own video",
            Expect::Absence,
        )
        .await;

        let metrics = fx.engine.notifications.metrics().snapshot();
        assert_eq!(metrics.planned, 0);
        assert_eq!(metrics.failed, 0);
    }
}
