//! # Account Blocklist Scenarios
//!
//! root of `localhost:9001` manages its own blocklist. Only root's views
//! change; user1 and anonymous visitors keep seeing everything.

#[cfg(test)]
mod tests {
    use fb_01_block_registry::{ListQuery, RegistryError, SortKey};
    use fb_03_visibility_filter::VisibilityApi;
    use shared_types::{AccountId, BlockScope, CommentId, CommentNode, PageRequest, Viewer};

    use crate::integration::fixture::{
        root, user1, user2, Expect, TwoServerFixture, LOCAL_HOST, REMOTE_HOST,
    };

    fn remote_handle() -> String {
        format!("user2@{REMOTE_HOST}")
    }

    fn mention_root() -> String {
        format!("hello @root@{LOCAL_HOST}")
    }

    // =========================================================================
    // ACCOUNT TARGETS
    // =========================================================================

    #[tokio::test]
    async fn test_blocking_accounts_hides_their_content_for_the_blocker_only() {
        let fx = TwoServerFixture::start().await;
        let viewer = Viewer::from(root());

        fx.check_all_videos(&viewer).await;
        fx.check_all_comments(&viewer).await;

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, &remote_handle())
            .await
            .unwrap();
        let names = fx.video_names(&viewer).await;
        assert_eq!(names.len(), 3);
        assert!(!names.iter().any(|n| n == "video user 2"));

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();
        let names = fx.video_names(&viewer).await;
        assert_eq!(names.len(), 2);
        assert!(!names.iter().any(|n| n == "video user 1"));

        // Thread by user1 disappears, thread by root loses its whole reply branch.
        let threads = fx.thread_list(&viewer).await;
        assert_eq!(threads.total, 1);
        assert_eq!(threads.data[0].id, CommentId(1));
        assert_eq!(threads.data[0].total_replies, 0);
        assert!(!threads.data.iter().any(|t| t.text == "comment user 1"));
        assert_eq!(fx.thread_children(&viewer, CommentId(1)).await, 0);

        // Nobody else is affected.
        let other = Viewer::from(user1());
        fx.check_all_videos(&other).await;
        fx.check_all_comments(&other).await;
        assert_eq!(fx.thread_list(&other).await.data[0].total_replies, 2);

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Account, &remote_handle())
            .await
            .unwrap();
        let names = fx.video_names(&viewer).await;
        assert_eq!(names.len(), 3);
        assert!(names.iter().any(|n| n == "video user 2"));

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();
        fx.check_all_videos(&viewer).await;
        fx.check_all_comments(&viewer).await;
    }

    #[tokio::test]
    async fn test_list_blocked_accounts_in_creation_order() {
        let fx = TwoServerFixture::start().await;
        fx.blocklists()
            .block_account(&root(), BlockScope::Account, &remote_handle())
            .await
            .unwrap();
        fx.blocklists()
            .block_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();

        let first = fx
            .blocklists()
            .list_account_blocks(
                &root(),
                BlockScope::Account,
                ListQuery::new(0, 1).sorted(SortKey::CreatedAtAsc),
            )
            .await
            .unwrap();
        assert_eq!(first.total, 2);
        let block = &first.data[0];
        assert_eq!(block.by_account.name, "root");
        assert_eq!(block.by_account.display_name, "root");
        assert_eq!(block.blocked_account.name, "user2");
        assert_eq!(block.blocked_account.display_name, "user2");
        assert_eq!(block.blocked_account.host, REMOTE_HOST);

        let second = fx
            .blocklists()
            .list_account_blocks(
                &root(),
                BlockScope::Account,
                ListQuery::new(1, 2).sorted(SortKey::CreatedAtAsc),
            )
            .await
            .unwrap();
        assert_eq!(second.total, 2);
        assert_eq!(second.data.len(), 1);
        let block = &second.data[0];
        assert_eq!(block.by_account.name, "root");
        assert_eq!(block.blocked_account.name, "user1");
        assert_eq!(block.blocked_account.host, LOCAL_HOST);

        let json = serde_json::to_value(block).unwrap();
        assert_eq!(json["byAccount"]["displayName"], "root");
        assert_eq!(json["blockedAccount"]["host"], LOCAL_HOST);
        assert!(json["createdAt"].is_u64());
    }

    #[tokio::test]
    async fn test_repeated_block_keeps_one_entry() {
        let fx = TwoServerFixture::start().await;
        for _ in 0..3 {
            fx.blocklists()
                .block_account(&root(), BlockScope::Account, &remote_handle())
                .await
                .unwrap();
        }

        let page = fx
            .blocklists()
            .list_account_blocks(&root(), BlockScope::Account, ListQuery::default())
            .await
            .unwrap();
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_management_errors() {
        let fx = TwoServerFixture::start().await;

        let err = fx
            .blocklists()
            .block_account(&root(), BlockScope::Account, "root")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidTarget { .. }));

        let err = fx
            .blocklists()
            .block_account(&root(), BlockScope::Account, "ghost@localhost:9002")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownTarget(_)));

        let err = fx
            .blocklists()
            .unblock_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound { .. }));

        let err = fx
            .blocklists()
            .block_server(&user1(), BlockScope::Instance, REMOTE_HOST)
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::Unauthorized(_)));
    }

    // =========================================================================
    // SERVER TARGETS
    // =========================================================================

    #[tokio::test]
    async fn test_blocking_a_server_hides_every_account_on_it() {
        let fx = TwoServerFixture::start().await;
        let viewer = Viewer::from(root());

        fx.blocklists()
            .block_server(&root(), BlockScope::Account, REMOTE_HOST)
            .await
            .unwrap();

        let names = fx.video_names(&viewer).await;
        assert_eq!(names.len(), 2);
        assert!(!names.iter().any(|n| n == "video user 2"));
        assert!(!names.iter().any(|n| n == "video server 2"));

        fx.check_all_videos(&Viewer::from(user1())).await;

        // A new thread from the blocked server does not show up for root.
        let mut threads = fx.threads.clone();
        threads.push(CommentNode::root(
            CommentId(50),
            fx.video("video server 1").id,
            user2(),
            "hidden comment 2",
            50,
        ));
        let page = fx
            .engine
            .visibility
            .visible_threads(&viewer, &threads, PageRequest::new(0, 25))
            .await
            .unwrap();
        assert_eq!(page.total, 2);

        let servers = fx
            .blocklists()
            .list_server_blocks(&root(), BlockScope::Account, ListQuery::new(0, 1))
            .await
            .unwrap();
        assert_eq!(servers.total, 1);
        assert_eq!(servers.data[0].by_account.name, "root");
        assert_eq!(servers.data[0].by_account.display_name, "root");
        assert_eq!(servers.data[0].blocked_server.host, REMOTE_HOST);

        fx.blocklists()
            .unblock_server(&root(), BlockScope::Account, REMOTE_HOST)
            .await
            .unwrap();
        fx.check_all_videos(&viewer).await;
        fx.check_all_comments(&viewer).await;
    }

    // =========================================================================
    // NOTIFICATIONS
    // =========================================================================

    #[tokio::test]
    async fn test_notifications_follow_the_account_blocklist() {
        let fx = TwoServerFixture::start().await;
        let user1_id = AccountId::local("user1");

        fx.blocklists()
            .block_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();
        fx.check_comment_notification(
            user1_id.clone(),
            "video server 1",
            "hidden comment",
            Expect::Absence,
        )
        .await;
        fx.check_comment_notification(
            user1_id.clone(),
            "video server 2",
            &mention_root(),
            Expect::Absence,
        )
        .await;

        fx.blocklists()
            .unblock_account(&root(), BlockScope::Account, "user1")
            .await
            .unwrap();
        fx.check_comment_notification(user2(), "video server 1", "displayed comment", Expect::Presence)
            .await;
        fx.check_comment_notification(user1_id, "video server 2", &mention_root(), Expect::Presence)
            .await;
    }

    #[tokio::test]
    async fn test_notifications_follow_the_server_blocklist() {
        let fx = TwoServerFixture::start().await;

        fx.blocklists()
            .block_server(&root(), BlockScope::Account, REMOTE_HOST)
            .await
            .unwrap();
        fx.check_comment_notification(user2(), "video server 1", "hidden comment", Expect::Absence)
            .await;
        fx.check_comment_notification(user2(), "video server 1", &mention_root(), Expect::Absence)
            .await;

        fx.blocklists()
            .unblock_server(&root(), BlockScope::Account, REMOTE_HOST)
            .await
            .unwrap();
        fx.check_comment_notification(user2(), "video server 1", "displayed comment", Expect::Presence)
            .await;
        fx.check_comment_notification(user2(), "video server 1", &mention_root(), Expect::Presence)
            .await;
    }
}
